// src/cli/mod.rs

pub mod args;
pub mod commands;
pub mod quiz;
