pub mod contact;
pub mod experience;
pub mod project;
pub mod research;
pub mod seed;
pub mod skill;
pub mod stats;
