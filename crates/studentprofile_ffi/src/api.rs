//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level profile functions to Dart via FRB.
//! - Keep error semantics simple for the rendering layer.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Return values are UTF-8 strings with stable meaning.

use std::path::PathBuf;
use std::sync::OnceLock;
use studentprofile_core::db::open_db;
use studentprofile_core::screen::display::render_overview;
use studentprofile_core::{
    append, core_version as core_version_inner, delete_at, init_logging as init_logging_inner,
    ping as ping_inner, update_field, Course, CourseForm, InstitutionForm, ProfileState,
    RecordFields, SqliteProfileStore, Student, StudentHistory,
};

const PROFILE_DB_FILE_NAME: &str = "studentprofile.sqlite3";
static PROFILE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for profile mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ProfileActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Snapshot of the three collections, each as its persisted JSON encoding.
///
/// Absent store keys are filled from the in-memory defaults, so the host
/// always receives a complete, renderable aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSnapshotResponse {
    pub ok: bool,
    pub student_json: String,
    pub history_json: String,
    pub courses_json: String,
    pub message: String,
}

/// Loads the current profile aggregate for the edit screen.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - `ok=false` carries the failure reason in `message`; corrupt stored
///   values are reported, not masked with defaults.
#[flutter_rust_bridge::frb(sync)]
pub fn profile_load() -> ProfileSnapshotResponse {
    match load_state() {
        Ok(state) => ProfileSnapshotResponse {
            ok: true,
            student_json: serde_json::to_string(&state.student).unwrap_or_default(),
            history_json: serde_json::to_string(&state.history).unwrap_or_default(),
            courses_json: serde_json::to_string(&state.courses).unwrap_or_default(),
            message: "Profile loaded.".to_string(),
        },
        Err(err) => ProfileSnapshotResponse {
            ok: false,
            student_json: String::new(),
            history_json: String::new(),
            courses_json: String::new(),
            message: format!("profile_load failed: {err}"),
        },
    }
}

/// Loads the aggregate on entry to the edit screen.
///
/// Entering the edit screen re-runs the load, so only collections whose
/// store key is present overwrite the host's defaults; unsaved host-side
/// edits for absent keys survive re-entry.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn profile_edit_begin() -> ProfileSnapshotResponse {
    profile_load()
}

/// Renders the read-only display screen as plain text.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; failures are reported inside the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn profile_overview() -> ProfileActionResponse {
    match load_state() {
        Ok(state) => ProfileActionResponse::success(render_overview(&state)),
        Err(err) => ProfileActionResponse::failure(format!("profile_overview failed: {err}")),
    }
}

/// Persists the full aggregate from the edit screen's save action.
///
/// Each argument must be the JSON encoding of its collection; decoding
/// validates the shapes before any write happens.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Writes the three keys in fixed order: student, history, courses.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn profile_save(
    student_json: String,
    history_json: String,
    courses_json: String,
) -> ProfileActionResponse {
    let student: Student = match serde_json::from_str(&student_json) {
        Ok(value) => value,
        Err(err) => return ProfileActionResponse::failure(format!("invalid student: {err}")),
    };
    let history: StudentHistory = match serde_json::from_str(&history_json) {
        Ok(value) => value,
        Err(err) => return ProfileActionResponse::failure(format!("invalid history: {err}")),
    };
    let courses: Vec<Course> = match serde_json::from_str(&courses_json) {
        Ok(value) => value,
        Err(err) => return ProfileActionResponse::failure(format!("invalid courses: {err}")),
    };

    let state = ProfileState {
        student,
        history,
        courses,
    };

    let conn = match open_db(resolve_profile_db_path()) {
        Ok(conn) => conn,
        Err(err) => return ProfileActionResponse::failure(format!("profile DB open failed: {err}")),
    };
    let mut store = SqliteProfileStore::new(&conn);

    match state.save(&mut store) {
        Ok(()) => ProfileActionResponse::success("Profile saved."),
        Err(err) => ProfileActionResponse::failure(format!("profile_save failed: {err}")),
    }
}

/// Envelope for record-level edit calls operating on encoded collections.
///
/// The host owns the in-memory edit session: these calls transform one
/// encoded collection and hand it back without touching the store, so
/// unsaved edits keep their cancel semantics until `profile_save`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordListResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Updated JSON encoding of the collection; empty on failure.
    pub value_json: String,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl RecordListResponse {
    fn success(value_json: String, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            value_json,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            value_json: String::new(),
            message: message.into(),
        }
    }
}

/// Applies one keyed field update to the profile record.
///
/// # FFI contract
/// - Sync call, pure; no store access.
/// - Field names outside {name, age, email, phone} are rejected.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn student_set_field(student_json: String, field: String, value: String) -> RecordListResponse {
    let mut student: Student = match serde_json::from_str(&student_json) {
        Ok(value) => value,
        Err(err) => return RecordListResponse::failure(format!("invalid student: {err}")),
    };

    match student.set_field(&field, &value) {
        Ok(()) => RecordListResponse::success(
            serde_json::to_string(&student).unwrap_or_default(),
            "Student field updated.",
        ),
        Err(err) => RecordListResponse::failure(format!("student_set_field failed: {err}")),
    }
}

/// Appends one institution built from add-form input.
///
/// # FFI contract
/// - Sync call, pure; no store access.
/// - Every field is required; an incomplete submission leaves the list
///   unchanged and reports the first missing field.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn history_add(
    history_json: String,
    name: String,
    degree: String,
    year: String,
) -> RecordListResponse {
    let mut history: StudentHistory = match serde_json::from_str(&history_json) {
        Ok(value) => value,
        Err(err) => return RecordListResponse::failure(format!("invalid history: {err}")),
    };

    let mut form = InstitutionForm { name, degree, year };
    match form.submit() {
        Ok(record) => {
            history.institutions = append(&history.institutions, record);
            RecordListResponse::success(
                serde_json::to_string(&history).unwrap_or_default(),
                "Institution added.",
            )
        }
        Err(err) => RecordListResponse::failure(format!("history_add failed: {err}")),
    }
}

/// Replaces one field of the institution at `index`.
///
/// # FFI contract
/// - Sync call, pure; no store access.
/// - Never panics; out-of-range indices are reported in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn history_update_field(
    history_json: String,
    index: u32,
    field: String,
    value: String,
) -> RecordListResponse {
    let mut history: StudentHistory = match serde_json::from_str(&history_json) {
        Ok(value) => value,
        Err(err) => return RecordListResponse::failure(format!("invalid history: {err}")),
    };

    match update_field(&history.institutions, index as usize, &field, &value) {
        Ok(next) => {
            history.institutions = next;
            RecordListResponse::success(
                serde_json::to_string(&history).unwrap_or_default(),
                "Institution updated.",
            )
        }
        Err(err) => RecordListResponse::failure(format!("history_update_field failed: {err}")),
    }
}

/// Deletes the institution at `index`; later rows shift down one position.
///
/// # FFI contract
/// - Sync call, pure; no store access.
/// - Never panics; out-of-range indices are reported in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn history_delete(history_json: String, index: u32) -> RecordListResponse {
    let mut history: StudentHistory = match serde_json::from_str(&history_json) {
        Ok(value) => value,
        Err(err) => return RecordListResponse::failure(format!("invalid history: {err}")),
    };

    match delete_at(&history.institutions, index as usize) {
        Ok(next) => {
            history.institutions = next;
            RecordListResponse::success(
                serde_json::to_string(&history).unwrap_or_default(),
                "Institution deleted.",
            )
        }
        Err(err) => RecordListResponse::failure(format!("history_delete failed: {err}")),
    }
}

/// Appends one course built from add-form input.
///
/// # FFI contract
/// - Sync call, pure; no store access.
/// - Every field is required; an incomplete submission leaves the list
///   unchanged and reports the first missing field.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn courses_add(
    courses_json: String,
    name: String,
    instructor: String,
    duration: String,
) -> RecordListResponse {
    let courses: Vec<Course> = match serde_json::from_str(&courses_json) {
        Ok(value) => value,
        Err(err) => return RecordListResponse::failure(format!("invalid courses: {err}")),
    };

    let mut form = CourseForm {
        name,
        instructor,
        duration,
    };

    match form.submit() {
        Ok(record) => RecordListResponse::success(
            serde_json::to_string(&append(&courses, record)).unwrap_or_default(),
            "Course added.",
        ),
        Err(err) => RecordListResponse::failure(format!("courses_add failed: {err}")),
    }
}

/// Replaces one field of the course at `index`.
///
/// # FFI contract
/// - Sync call, pure; no store access.
/// - Never panics; out-of-range indices are reported in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn courses_update_field(
    courses_json: String,
    index: u32,
    field: String,
    value: String,
) -> RecordListResponse {
    let courses: Vec<Course> = match serde_json::from_str(&courses_json) {
        Ok(value) => value,
        Err(err) => return RecordListResponse::failure(format!("invalid courses: {err}")),
    };

    match update_field(&courses, index as usize, &field, &value) {
        Ok(next) => RecordListResponse::success(
            serde_json::to_string(&next).unwrap_or_default(),
            "Course updated.",
        ),
        Err(err) => RecordListResponse::failure(format!("courses_update_field failed: {err}")),
    }
}

/// Deletes the course at `index`; later rows shift down one position.
///
/// # FFI contract
/// - Sync call, pure; no store access.
/// - Never panics; out-of-range indices are reported in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn courses_delete(courses_json: String, index: u32) -> RecordListResponse {
    let courses: Vec<Course> = match serde_json::from_str(&courses_json) {
        Ok(value) => value,
        Err(err) => return RecordListResponse::failure(format!("invalid courses: {err}")),
    };

    match delete_at(&courses, index as usize) {
        Ok(next) => RecordListResponse::success(
            serde_json::to_string(&next).unwrap_or_default(),
            "Course deleted.",
        ),
        Err(err) => RecordListResponse::failure(format!("courses_delete failed: {err}")),
    }
}

fn load_state() -> Result<ProfileState, String> {
    let conn =
        open_db(resolve_profile_db_path()).map_err(|err| format!("profile DB open failed: {err}"))?;
    let store = SqliteProfileStore::new(&conn);
    let mut state = ProfileState::default();
    state.load(&store).map_err(|err| err.to_string())?;
    Ok(state)
}

fn resolve_profile_db_path() -> PathBuf {
    PROFILE_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("STUDENTPROFILE_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(PROFILE_DB_FILE_NAME)
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::{
        courses_add, courses_delete, courses_update_field, history_add, history_update_field,
        student_set_field,
    };
    use studentprofile_core::{Course, ScalarValue, Student, StudentHistory};

    fn seed_courses_json() -> String {
        serde_json::to_string(&vec![
            Course::new("Math", "John Snow", "3 months"),
            Course::new("History", "Arya Stark", "2 months"),
        ])
        .unwrap()
    }

    fn seed_history_json() -> String {
        "{\"institutions\":[{\"name\":\"Yale\",\"degree\":\"Bachelors\",\"year\":2020}]}"
            .to_string()
    }

    #[test]
    fn history_add_appends_and_preserves_order() {
        let response = history_add(
            seed_history_json(),
            "MIT".to_string(),
            "PhD".to_string(),
            "2025".to_string(),
        );

        assert!(response.ok);
        let history: StudentHistory = serde_json::from_str(&response.value_json).unwrap();
        assert_eq!(history.institutions.len(), 2);
        assert_eq!(history.institutions[0].name, "Yale");
        assert_eq!(history.institutions[1].name, "MIT");
        assert_eq!(
            history.institutions[1].year,
            ScalarValue::Text("2025".to_string())
        );
    }

    #[test]
    fn history_add_reports_first_missing_field() {
        let response = history_add(
            seed_history_json(),
            "MIT".to_string(),
            String::new(),
            "2025".to_string(),
        );

        assert!(!response.ok);
        assert!(response.value_json.is_empty());
        assert!(response.message.contains("degree"));
    }

    #[test]
    fn history_update_field_is_surgical() {
        let response = history_update_field(
            seed_history_json(),
            0,
            "degree".to_string(),
            "Doctorate".to_string(),
        );

        assert!(response.ok);
        let history: StudentHistory = serde_json::from_str(&response.value_json).unwrap();
        assert_eq!(history.institutions[0].degree, "Doctorate");
        assert_eq!(history.institutions[0].name, "Yale");
        assert_eq!(history.institutions[0].year, ScalarValue::Number(2020));
    }

    #[test]
    fn courses_add_rejects_malformed_collection() {
        let response = courses_add(
            "not valid json".to_string(),
            "Music".to_string(),
            "Brienne".to_string(),
            "1 month".to_string(),
        );

        assert!(!response.ok);
        assert!(response.message.contains("invalid courses"));
    }

    #[test]
    fn courses_delete_shifts_later_rows_down() {
        let response = courses_delete(seed_courses_json(), 0);

        assert!(response.ok);
        let courses: Vec<Course> = serde_json::from_str(&response.value_json).unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].name, "History");
    }

    #[test]
    fn courses_update_field_reports_out_of_range_index() {
        let response = courses_update_field(
            seed_courses_json(),
            5,
            "duration".to_string(),
            "4 months".to_string(),
        );

        assert!(!response.ok);
        assert!(response.message.contains("out of range"));
    }

    #[test]
    fn student_set_field_rejects_unknown_field() {
        let student_json = serde_json::to_string(&Student {
            name: "John Doe".to_string(),
            age: ScalarValue::Number(20),
            email: "john@doe.com".to_string(),
            phone: "1234567890".to_string(),
        })
        .unwrap();

        let response = student_set_field(student_json, "nickname".to_string(), "JD".to_string());

        assert!(!response.ok);
        assert!(response.message.contains("unknown student field"));
    }

    #[test]
    fn student_set_field_updates_one_field() {
        let student_json = serde_json::to_string(&Student {
            name: "John Doe".to_string(),
            age: ScalarValue::Number(20),
            email: "john@doe.com".to_string(),
            phone: "1234567890".to_string(),
        })
        .unwrap();

        let response = student_set_field(student_json, "age".to_string(), "21".to_string());

        assert!(response.ok);
        let student: Student = serde_json::from_str(&response.value_json).unwrap();
        assert_eq!(student.age, ScalarValue::Text("21".to_string()));
        assert_eq!(student.name, "John Doe");
    }
}
