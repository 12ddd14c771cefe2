mod get_research_note;
mod get_research_notes;

pub use get_research_note::{GetResearchNoteError, GetResearchNoteUseCase};
pub use get_research_notes::{GetResearchNotesError, GetResearchNotesUseCase};
