//! Delete Confirm Button Component
//!
//! Two-step delete for notes and project cards.

use leptos::prelude::*;

/// Prompt shown after the first click, e.g. "Delete this note?"
pub fn delete_prompt(noun: &str) -> String {
    format!("Delete this {}?", noun)
}

/// Inline delete with confirmation.
///
/// `noun` names what is deleted ("note", "project") in the tooltip and
/// the prompt. Clicking outside the prompt buttons leaves it open.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] noun: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let title = format!("Delete {}", noun);
    let prompt = delete_prompt(&noun);

    move || {
        if confirming.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button
                        class="confirm-btn"
                        title="Delete"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(false);
                            on_confirm.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button
                        class="cancel-btn"
                        title="Keep"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(false);
                        }
                    >
                        "✗"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class="delete-btn"
                    title=title.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(true);
                    }
                >
                    "×"
                </button>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_prompt_names_the_entity() {
        assert_eq!(delete_prompt("note"), "Delete this note?");
        assert_eq!(delete_prompt("project"), "Delete this project?");
    }
}
