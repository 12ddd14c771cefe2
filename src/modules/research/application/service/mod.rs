mod get_research_note_service;
mod get_research_notes_service;

pub use get_research_note_service::GetResearchNoteService;
pub use get_research_notes_service::GetResearchNotesService;
