//! online-confgen: deployment config generation helpers
//!
//! Renders nginx and haproxy configuration from a deployment JSON file and
//! converts quiz CSV exports into JSON.

pub mod cli;
pub mod config;
pub mod convert;
pub mod domain;
pub mod output;
pub mod render;
