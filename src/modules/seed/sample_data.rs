//! Fixed records inserted into empty collections at startup.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::modules::project::application::domain::entities::{Project, ProjectStatus};
use crate::modules::research::application::domain::entities::ResearchNote;
use crate::modules::skill::application::domain::entities::{Skill, SkillError};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Each project is stamped one millisecond after the previous one, so
/// newest-first listing yields `synthora`, `jarvis`, `the360unity`.
pub fn sample_projects(now: DateTime<Utc>) -> Vec<Project> {
    let stamp = |i: i64| now + Duration::milliseconds(i);

    vec![
        Project {
            id: "the360unity".to_string(),
            title: "The360Unity".to_string(),
            description: "A community for developers to share their projects and learn from each other, collaborate and grow.".to_string(),
            long_description: "The360Unity is a comprehensive platform designed to bring developers together in a collaborative environment. It features project sharing, code reviews, learning resources, and community discussions. Built with modern web technologies, it aims to foster growth and innovation in the developer community.".to_string(),
            technologies: strings(&["React.js", "Next.js", "TypeScript", "Tailwind CSS", "MongoDB"]),
            status: ProjectStatus::ComingSoon,
            github_url: None,
            demo_url: None,
            image_url: None,
            category: "Web Development".to_string(),
            featured: true,
            created_at: stamp(0),
            updated_at: stamp(0),
        },
        Project {
            id: "jarvis".to_string(),
            title: "JARVIS".to_string(),
            description: "An AI Intelligent system inspired by Tony Stark's JARVIS with email capabilities and automation features.".to_string(),
            long_description: "JARVIS was an ambitious AI project inspired by Tony Stark's JARVIS. It featured email reading and responding capabilities, food ordering automation, and custom voice training. Due to copyright concerns from Marvel Entertainment, the project was discontinued, but the concepts and learnings continue to influence other AI work.".to_string(),
            technologies: strings(&["Python", "AI/ML", "Automation", "Email API", "Voice Recognition"]),
            status: ProjectStatus::Discontinued,
            github_url: None,
            demo_url: None,
            image_url: None,
            category: "AI/ML".to_string(),
            featured: true,
            created_at: stamp(1),
            updated_at: stamp(1),
        },
        Project {
            id: "synthora".to_string(),
            title: "Synthora".to_string(),
            description: "A white-label ChatGPT solution for customizable AI chat interfaces.".to_string(),
            long_description: "Synthora is a white-label ChatGPT solution currently in development. This project aims to provide a customizable AI chat interface that can be branded and integrated into various platforms. Built with modern web technologies and AI integration capabilities.".to_string(),
            technologies: strings(&["Python", "Flask", "HTML/CSS", "JavaScript", "AI Integration"]),
            status: ProjectStatus::Active,
            github_url: Some("https://github.com/lilpizzaro/synthora".to_string()),
            demo_url: None,
            image_url: None,
            category: "AI/ML".to_string(),
            featured: true,
            created_at: stamp(2),
            updated_at: stamp(2),
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid publication date 2025-04-{0}")]
pub struct InvalidPublicationDate(pub u32);

fn published_on(day: u32) -> Result<DateTime<Utc>, InvalidPublicationDate> {
    Utc.with_ymd_and_hms(2025, 4, day, 0, 0, 0)
        .single()
        .ok_or(InvalidPublicationDate(day))
}

pub fn sample_research(now: DateTime<Utc>) -> Result<Vec<ResearchNote>, InvalidPublicationDate> {
    let note = |id: &str, title: &str, content: &str, summary: &str, tags: &[&str], day: u32| -> Result<ResearchNote, InvalidPublicationDate> {
        Ok(ResearchNote {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            summary: summary.to_string(),
            category: "J.A.R.V.I.S.".to_string(),
            tags: strings(tags),
            date_published: published_on(day)?,
            featured: true,
            created_at: now,
            updated_at: now,
        })
    };

    Ok(vec![
        note(
            "jarviss-ai-brain",
            "JARVIS's AI BRAIN",
            "Based on Google's Gemini FOR NOW. Plans on using custom trained models using footage and audio of the actual Iron Man's JARVIS.",
            "Exploring the development of JARVIS's AI brain using Google's Gemini with plans for custom training.",
            &["AI", "Machine Learning", "Google Gemini", "Custom Training"],
            21,
        )?,
        note(
            "jarvis-email-capability",
            "Powerful Email Capability",
            "JARVIS can now read emails and respond to them. He can also suggest email responses. This is a powerful tool that could change the way JARVIS can be used.",
            "JARVIS now has the ability to read and respond to emails with AI-powered suggestions.",
            &["Email", "AI", "Automation", "Natural Language Processing"],
            22,
        )?,
        note(
            "jarvis-food-ordering",
            "The most powerful tool I have ever created",
            "JARVIS is now able to order food from a restaurant on his own from just a single command. This takes advantage of custom training the model by capturing audio from me actually ordering food, as well as order items from Takealot. Could he potentially replace a personal assistant?",
            "JARVIS can now autonomously order food and items online through custom voice training.",
            &["Voice Recognition", "Automation", "E-commerce", "AI Assistant"],
            23,
        )?,
    ])
}

const SAMPLE_SKILLS: [(&str, &str, i32); 8] = [
    ("Frontend Development", "Development", 90),
    ("React/Next.js", "Development", 85),
    ("JavaScript/TypeScript", "Development", 85),
    ("UI/UX Design", "Design", 80),
    ("Software Development", "Development", 85),
    ("Python", "Development", 80),
    ("AI/ML", "AI", 75),
    ("Database Design", "Backend", 70),
];

pub fn sample_skills() -> Result<Vec<Skill>, SkillError> {
    SAMPLE_SKILLS
        .iter()
        .map(|(name, category, level)| Skill::new(*name, *category, *level))
        .collect()
}
