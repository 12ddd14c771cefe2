pub mod get_research_note;
pub mod get_research_notes;

pub use get_research_note::get_research_note_handler;
pub use get_research_notes::get_research_notes_handler;
