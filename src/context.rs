//! Application Context
//!
//! Shared navigation state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Page;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page currently shown - read
    pub current_page: ReadSignal<Page>,
    /// Page currently shown - write
    set_current_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(current_page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            current_page: current_page.0,
            set_current_page: current_page.1,
        }
    }

    /// Switch to another page
    pub fn navigate(&self, page: Page) {
        log::debug!("Navigate to {}", page.label());
        self.set_current_page.set(page);
    }
}
