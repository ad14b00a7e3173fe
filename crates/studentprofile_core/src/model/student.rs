//! Student profile record.
//!
//! # Responsibility
//! - Define the single profile shape persisted under the `student` key.
//! - Accept keyed field updates from form input against a closed field set.
//!
//! # Invariants
//! - There is exactly one profile; it has no identity beyond itself.
//! - `set_field` rejects field names outside {name, age, email, phone}.

use crate::model::record::{EditError, RecordFields};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Scalar that is persisted either as a JSON number or as a string.
///
/// Seed values are numeric; anything typed into a form arrives as text.
/// Keeping both shapes lets either stored form decode and re-encode
/// unchanged, with no coercion on the load path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Number(i64),
    Text(String),
}

impl Display for ScalarValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// The single student profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    /// Numeric when seeded, text once edited through a form.
    pub age: ScalarValue,
    pub email: String,
    pub phone: String,
}

impl RecordFields for Student {
    const KIND: &'static str = "student";
    const FIELDS: &'static [&'static str] = &["name", "age", "email", "phone"];

    fn set_field(&mut self, field: &str, value: &str) -> Result<(), EditError> {
        match field {
            "name" => self.name = value.to_string(),
            "age" => self.age = ScalarValue::Text(value.to_string()),
            "email" => self.email = value.to_string(),
            "phone" => self.phone = value.to_string(),
            other => return Err(EditError::unknown_field(Self::KIND, other)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ScalarValue, Student};
    use crate::model::record::{EditError, RecordFields};

    fn sample() -> Student {
        Student {
            name: "John Doe".to_string(),
            age: ScalarValue::Number(20),
            email: "john@doe.com".to_string(),
            phone: "1234567890".to_string(),
        }
    }

    #[test]
    fn scalar_value_round_trips_both_shapes() {
        let numeric: ScalarValue = serde_json::from_str("20").unwrap();
        assert_eq!(numeric, ScalarValue::Number(20));
        assert_eq!(serde_json::to_string(&numeric).unwrap(), "20");

        let text: ScalarValue = serde_json::from_str("\"20\"").unwrap();
        assert_eq!(text, ScalarValue::Text("20".to_string()));
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"20\"");
    }

    #[test]
    fn set_field_replaces_exactly_one_field() {
        let mut student = sample();
        student.set_field("email", "doe@john.com").unwrap();
        assert_eq!(student.email, "doe@john.com");
        assert_eq!(student.name, "John Doe");
        assert_eq!(student.age, ScalarValue::Number(20));
    }

    #[test]
    fn set_field_stores_age_as_text() {
        let mut student = sample();
        student.set_field("age", "21").unwrap();
        assert_eq!(student.age, ScalarValue::Text("21".to_string()));
    }

    #[test]
    fn set_field_rejects_unknown_field_name() {
        let mut student = sample();
        let err = student.set_field("nickname", "JD").unwrap_err();
        assert!(matches!(err, EditError::UnknownField { field, .. } if field == "nickname"));
        assert_eq!(student, sample());
    }
}
