//! Core domain logic for the student profile editor.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod reconcile;
pub mod screen;
pub mod state;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{Course, EditError, Institution, RecordFields, StudentHistory};
pub use model::student::{ScalarValue, Student};
pub use reconcile::{append, delete_at, update_field};
pub use screen::edit::{CourseForm, FormError, InstitutionForm, ProfileApp};
pub use screen::Screen;
pub use state::{ProfileState, StateError};
pub use store::{
    COURSES_KEY, HISTORY_KEY, MemoryStore, ProfileStore, SqliteProfileStore, StoreError,
    StoreResult, STUDENT_KEY,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
