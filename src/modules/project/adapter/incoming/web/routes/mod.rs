pub mod get_projects;
pub mod get_single_project;

pub use get_projects::get_projects_handler;
pub use get_single_project::get_single_project_handler;
