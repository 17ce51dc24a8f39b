// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;

pub mod categorize;
pub mod csv;
pub mod extract;
pub mod file;
pub mod pair;
pub mod progress;
pub mod runner;
