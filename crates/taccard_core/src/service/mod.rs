//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store access into board-level use-case APIs.
//! - Keep presentation and gesture layers decoupled from storage details.

pub mod board_service;
