// src/lib.rs

pub mod api;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod points;
pub mod quiz;
pub mod state;
pub mod utils;

// Re-export specific items for convenience
pub use api::ApiClient;
pub use error::AppError;
pub use quiz::QuizController;
