//! Profile state container and the load/save boundary.
//!
//! # Responsibility
//! - Own the three in-memory collections as one explicit aggregate.
//! - Mirror them to the store under three independent keys.
//!
//! # Invariants
//! - An absent store key leaves the in-memory value untouched.
//! - A present-but-malformed value aborts the load with a decode error;
//!   defaults are never substituted for corrupt data.
//! - Save writes the three keys in fixed order: student, history, courses.
//!   The writes are independent, not transactional.

use crate::model::record::{Course, Institution, StudentHistory};
use crate::model::student::{ScalarValue, Student};
use crate::store::{COURSES_KEY, HISTORY_KEY, ProfileStore, StoreError, STUDENT_KEY};
use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for load/save round trips.
#[derive(Debug)]
pub enum StateError {
    /// Store transport failure.
    Store(StoreError),
    /// A stored value exists but does not decode into its expected shape.
    /// Fatal for the load call; the key must be cleared or rewritten.
    Decode {
        key: &'static str,
        source: serde_json::Error,
    },
    /// A collection failed to encode for persistence.
    Encode {
        key: &'static str,
        source: serde_json::Error,
    },
}

impl Display for StateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Decode { key, source } => {
                write!(f, "stored value under `{key}` failed to decode: {source}")
            }
            Self::Encode { key, source } => {
                write!(f, "collection for `{key}` failed to encode: {source}")
            }
        }
    }
}

impl Error for StateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Decode { source, .. } | Self::Encode { source, .. } => Some(source),
        }
    }
}

impl From<StoreError> for StateError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Root aggregate: the one profile plus its two sibling record lists.
///
/// The three collections have no relationships between them; they are
/// loaded, edited, and saved independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileState {
    pub student: Student,
    pub history: StudentHistory,
    pub courses: Vec<Course>,
}

impl Default for ProfileState {
    /// In-memory seed state used before any successful load.
    fn default() -> Self {
        Self {
            student: Student {
                name: "John Doe".to_string(),
                age: ScalarValue::Number(20),
                email: "john@doe.com".to_string(),
                phone: "1234567890".to_string(),
            },
            history: StudentHistory {
                institutions: vec![
                    Institution::new("Yale", "Bachelors", 2020),
                    Institution::new("Harvard", "Masters", 2022),
                ],
            },
            courses: vec![Course::new("Math", "John Snow", "3 months")],
        }
    }
}

impl ProfileState {
    /// Overwrites each collection whose store key is present.
    ///
    /// Absent keys are a silent fallback to the current in-memory value.
    /// Decode failure on a present key aborts the whole call; collections
    /// already replaced by this call keep their new values.
    pub fn load<S: ProfileStore>(&mut self, store: &S) -> Result<(), StateError> {
        if let Some(student) = read_collection(store, STUDENT_KEY)? {
            self.student = student;
        }
        if let Some(history) = read_collection(store, HISTORY_KEY)? {
            self.history = history;
        }
        if let Some(courses) = read_collection(store, COURSES_KEY)? {
            self.courses = courses;
        }

        info!(
            "event=profile_load module=state status=ok institutions={} courses={}",
            self.history.institutions.len(),
            self.courses.len()
        );
        Ok(())
    }

    /// Persists all three collections as three independent writes.
    ///
    /// A failure on the second or third write leaves the earlier writes
    /// committed; there is no rollback.
    pub fn save<S: ProfileStore>(&self, store: &mut S) -> Result<(), StateError> {
        write_collection(store, STUDENT_KEY, &self.student)?;
        write_collection(store, HISTORY_KEY, &self.history)?;
        write_collection(store, COURSES_KEY, &self.courses)?;

        info!(
            "event=profile_save module=state status=ok institutions={} courses={}",
            self.history.institutions.len(),
            self.courses.len()
        );
        Ok(())
    }
}

fn read_collection<S, T>(store: &S, key: &'static str) -> Result<Option<T>, StateError>
where
    S: ProfileStore,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(source) => {
            error!(
                "event=profile_load module=state status=error key={key} error_code=decode_failed error={source}"
            );
            Err(StateError::Decode { key, source })
        }
    }
}

fn write_collection<S, T>(store: &mut S, key: &'static str, value: &T) -> Result<(), StateError>
where
    S: ProfileStore,
    T: Serialize,
{
    let encoded =
        serde_json::to_string(value).map_err(|source| StateError::Encode { key, source })?;
    store.set(key, &encoded)?;
    Ok(())
}
