use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A message left through the contact form.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub replied: bool,
}

impl ContactMessage {
    /// New, unreplied message stamped with the current time.
    pub fn new(name: String, email: String, message: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            message,
            created_at: Utc::now(),
            replied: false,
        }
    }
}
