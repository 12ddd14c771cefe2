mod list_experience;

pub use list_experience::{ListExperienceError, ListExperienceUseCase};
