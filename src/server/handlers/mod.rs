//! HTTP handlers for the server.

pub mod commands;
pub mod jobs;
