//! Display and edit screens over the profile state.
//!
//! # Responsibility
//! - Map state to read-only views and to the form-driven editing flow.
//! - Keep presentation hosts decoupled from storage details.

pub mod display;
pub mod edit;

/// The two screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Read-only view of the current state.
    Display,
    /// Form-driven editing over the same state container.
    Edit,
}
