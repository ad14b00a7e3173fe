//! List-record types and the keyed field-edit seam.
//!
//! # Responsibility
//! - Define the academic-history and course shapes held in ordered lists.
//! - Provide the `RecordFields` contract used by the list reconciler.
//!
//! # Invariants
//! - Records carry no stable ID; identity is the position in the list.
//! - Unknown field names are rejected, never silently stored.

use crate::model::student::ScalarValue;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for form-driven edit operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Field name outside the record's enumerated field set.
    UnknownField { record: &'static str, field: String },
    /// Positional index past the end of the list. Indices are derived from
    /// the current render of the list, so this signals a caller bug rather
    /// than a user-facing condition.
    IndexOutOfRange { index: usize, len: usize },
}

impl EditError {
    pub(crate) fn unknown_field(record: &'static str, field: &str) -> Self {
        Self::UnknownField {
            record,
            field: field.to_string(),
        }
    }
}

impl Display for EditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField { record, field } => {
                write!(f, "unknown {record} field: `{field}`")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for list of length {len}")
            }
        }
    }
}

impl Error for EditError {}

/// Field-addressable record editable through keyed form input.
///
/// This trait is the seam isolating positional identity and the field-name
/// namespace from the renderers, so a stable-ID scheme could replace the
/// index-based one without touching them.
pub trait RecordFields {
    /// Record kind label used in diagnostics.
    const KIND: &'static str;
    /// Closed set of editable field names.
    const FIELDS: &'static [&'static str];

    /// Replaces exactly one named field with a raw form value.
    fn set_field(&mut self, field: &str, value: &str) -> Result<(), EditError>;
}

/// One academic-history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institution {
    pub name: String,
    pub degree: String,
    pub year: ScalarValue,
}

impl Institution {
    pub fn new(
        name: impl Into<String>,
        degree: impl Into<String>,
        year: impl Into<ScalarValue>,
    ) -> Self {
        Self {
            name: name.into(),
            degree: degree.into(),
            year: year.into(),
        }
    }
}

impl RecordFields for Institution {
    const KIND: &'static str = "institution";
    const FIELDS: &'static [&'static str] = &["name", "degree", "year"];

    fn set_field(&mut self, field: &str, value: &str) -> Result<(), EditError> {
        match field {
            "name" => self.name = value.to_string(),
            "degree" => self.degree = value.to_string(),
            "year" => self.year = ScalarValue::Text(value.to_string()),
            other => return Err(EditError::unknown_field(Self::KIND, other)),
        }
        Ok(())
    }
}

/// One course enrollment entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub instructor: String,
    pub duration: String,
}

impl Course {
    pub fn new(
        name: impl Into<String>,
        instructor: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            instructor: instructor.into(),
            duration: duration.into(),
        }
    }
}

impl RecordFields for Course {
    const KIND: &'static str = "course";
    const FIELDS: &'static [&'static str] = &["name", "instructor", "duration"];

    fn set_field(&mut self, field: &str, value: &str) -> Result<(), EditError> {
        match field {
            "name" => self.name = value.to_string(),
            "instructor" => self.instructor = value.to_string(),
            "duration" => self.duration = value.to_string(),
            other => return Err(EditError::unknown_field(Self::KIND, other)),
        }
        Ok(())
    }
}

/// Academic-history aggregate persisted under the `studentHistory` key.
///
/// The wrapper object is part of the persisted encoding; institutions nest
/// under an `institutions` field rather than being stored as a bare array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentHistory {
    pub institutions: Vec<Institution>,
}
