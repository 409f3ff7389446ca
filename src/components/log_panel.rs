//! Log Panel Component
//!
//! Recent records from the rolling logger, e.g. storage warnings that the
//! store swallows.

use leptos::prelude::*;
use rolling_logger::LogEntry;

const PANEL_LINES: usize = 50;

/// Formatted records, newest first
pub fn panel_lines(entries: Vec<LogEntry>) -> Vec<String> {
    entries.iter().rev().map(|entry| entry.to_string()).collect()
}

/// Toggleable panel; the snapshot refreshes on open and on "Refresh".
#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = move || {
        let entries = rolling_logger::logger()
            .map(|logger| logger.recent(PANEL_LINES))
            .unwrap_or_default();
        set_lines.set(panel_lines(entries));
    };

    view! {
        <button
            class=move || if open.get() { "nav-tab log-toggle active" } else { "nav-tab log-toggle" }
            on:click=move |_| {
                if !open.get_untracked() {
                    refresh();
                }
                set_open.update(|o| *o = !*o);
            }
        >
            "Log"
        </button>
        <Show when=move || open.get()>
            <aside class="log-panel">
                <div class="log-actions">
                    <button class="ghost-btn" on:click=move |_| refresh()>"Refresh"</button>
                    <button
                        class="ghost-btn"
                        on:click=move |_| {
                            if let Some(logger) = rolling_logger::logger() {
                                logger.clear();
                            }
                            refresh();
                        }
                    >
                        "Clear"
                    </button>
                </div>
                <Show
                    when=move || !lines.read().is_empty()
                    fallback=|| view! { <p class="hint">"No log records"</p> }
                >
                    <pre class="log-lines">{move || lines.get().join("\n")}</pre>
                </Show>
            </aside>
        </Show>
    }
}
