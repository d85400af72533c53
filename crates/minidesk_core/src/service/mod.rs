//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the shells decoupled from storage details.

pub mod library_service;
pub mod task_service;
