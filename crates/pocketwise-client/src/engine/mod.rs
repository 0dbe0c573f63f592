pub mod aggregate;
pub mod categorize;
pub mod date;
pub mod insights;
mod keywords;
pub mod patterns;
pub mod predict;
pub mod score;
pub mod types;
