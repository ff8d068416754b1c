//! Modular admin starter
//!
//! Feature modules (Category, Post, User) each bring database seeders,
//! console commands and server-rendered views on top of a shared
//! domain/infrastructure split:
//! - `seed` provisions baseline categories and user accounts
//! - `post:import` migrates posts from the old website
//! - `serve` renders the public pages

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod web;

pub use config::AppConfig;
