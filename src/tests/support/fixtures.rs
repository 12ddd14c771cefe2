use chrono::{TimeZone, Utc};

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::project::application::domain::entities::{Project, ProjectStatus};
use crate::modules::research::application::domain::entities::ResearchNote;

pub fn sample_project(id: &str, category: &str) -> Project {
    let now = Utc::now();

    Project {
        id: id.to_string(),
        title: format!("Project {}", id),
        description: "Short description".to_string(),
        long_description: "Long description".to_string(),
        technologies: vec!["Python".to_string(), "Flask".to_string()],
        status: ProjectStatus::Active,
        github_url: None,
        demo_url: None,
        image_url: None,
        category: category.to_string(),
        featured: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_research_note(id: &str, category: &str) -> ResearchNote {
    let now = Utc::now();

    ResearchNote {
        id: id.to_string(),
        title: format!("Note {}", id),
        content: "Full content".to_string(),
        summary: "Summary".to_string(),
        category: category.to_string(),
        tags: vec!["AI".to_string(), "Automation".to_string()],
        date_published: Utc.with_ymd_and_hms(2025, 4, 22, 0, 0, 0).unwrap(),
        featured: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_experience(id: &str, current: bool) -> Experience {
    Experience {
        id: id.to_string(),
        title: "Software Developer".to_string(),
        company: "Freelance".to_string(),
        duration: "2023 - Present".to_string(),
        description: "Building web and AI projects".to_string(),
        technologies: vec!["Python".to_string(), "React".to_string()],
        current,
    }
}
