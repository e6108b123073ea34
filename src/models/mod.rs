// src/models/mod.rs

pub mod content;
pub mod contribution;
pub mod question;
pub mod quiz;
pub mod user;
