//! UI Components
//!
//! Reusable Leptos components.

mod nav_bar;
mod welcome;
mod brain_dump;
mod new_note_form;
mod note_list;
mod note_row;
mod project_board;
mod new_project_form;
mod project_list;
mod project_card;
mod script_editor;
mod type_selector;
mod delete_confirm_button;
mod log_panel;

pub use nav_bar::NavBar;
pub use welcome::Welcome;
pub use brain_dump::BrainDump;
pub use new_note_form::NewNoteForm;
pub use note_list::NoteList;
pub use note_row::NoteRow;
pub use project_board::ProjectBoard;
pub use new_project_form::NewProjectForm;
pub use project_list::ProjectList;
pub use project_card::ProjectCard;
pub use script_editor::ScriptEditor;
pub use type_selector::TypeSelector;
pub use delete_confirm_button::DeleteConfirmButton;
pub use log_panel::LogPanel;
