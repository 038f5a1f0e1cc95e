pub mod api;
pub mod branding;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod interactive;
pub mod iostream;
pub mod logging;
pub mod spinner;
pub mod users;
