//! Drag-and-drop interaction protocol.
//!
//! # Responsibility
//! - Turn pointer-gesture events into drop actions for the board service.
//! - Own the ephemeral per-gesture highlight state the presentation layer
//!   renders from.
//!
//! # Invariants
//! - Session state is UI-only and never persisted.
//! - Every gesture ends back in the idle state, whether or not a drop
//!   produced an action.

pub mod session;
