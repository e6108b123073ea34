// src/api/mod.rs

pub mod auth;
pub mod client;
pub mod content;
pub mod quiz;
pub mod share;
pub mod user;

pub use client::ApiClient;
