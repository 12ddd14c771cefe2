mod submit_contact_message_service;

pub use submit_contact_message_service::SubmitContactMessageService;
