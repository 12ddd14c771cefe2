use std::sync::Arc;

use crate::modules::research::application::ports::incoming::use_cases::{
    GetResearchNoteUseCase, GetResearchNotesUseCase,
};

#[derive(Clone)]
pub struct ResearchUseCases {
    pub get_list: Arc<dyn GetResearchNotesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetResearchNoteUseCase + Send + Sync>,
}
