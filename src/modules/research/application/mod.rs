pub mod domain;
pub mod ports;
pub mod research_use_cases;
pub mod service;
