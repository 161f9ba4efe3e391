pub mod paper;
pub mod sparkles;
