//! Edit screen state machine and add-form handling.
//!
//! # Responsibility
//! - Drive the Display/Edit transitions, including the save and cancel paths.
//! - Hold the transient add-form state for the two record lists.
//! - Wire field changes and deletions into the list reconciler.
//!
//! # Invariants
//! - Entering the edit screen re-runs a load; only keys present in the
//!   store overwrite in-memory collections.
//! - Cancel never rolls back in-memory edits; only a later load can.
//! - An add form is cleared only when its submission succeeds.

use crate::model::record::{Course, EditError, Institution, RecordFields};
use crate::reconcile;
use crate::screen::Screen;
use crate::state::{ProfileState, StateError};
use crate::store::ProfileStore;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Required-field violation for an add-form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingField(&'static str),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is empty"),
        }
    }
}

impl Error for FormError {}

fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(())
}

/// Transient input state for the add-institution form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstitutionForm {
    pub name: String,
    pub degree: String,
    pub year: String,
}

impl InstitutionForm {
    /// Builds the record when every field is non-empty and clears the form;
    /// an incomplete submission leaves the form untouched.
    pub fn submit(&mut self) -> Result<Institution, FormError> {
        require("name", &self.name)?;
        require("degree", &self.degree)?;
        require("year", &self.year)?;

        let record = Institution::new(
            self.name.as_str(),
            self.degree.as_str(),
            self.year.as_str(),
        );
        *self = Self::default();
        Ok(record)
    }
}

/// Transient input state for the add-course form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseForm {
    pub name: String,
    pub instructor: String,
    pub duration: String,
}

impl CourseForm {
    /// Builds the record when every field is non-empty and clears the form;
    /// an incomplete submission leaves the form untouched.
    pub fn submit(&mut self) -> Result<Course, FormError> {
        require("name", &self.name)?;
        require("instructor", &self.instructor)?;
        require("duration", &self.duration)?;

        let record = Course::new(
            self.name.as_str(),
            self.instructor.as_str(),
            self.duration.as_str(),
        );
        *self = Self::default();
        Ok(record)
    }
}

/// Application shell: one owned state aggregate, one store, two screens.
///
/// Both screens operate on the same state container; navigating copies no
/// data.
pub struct ProfileApp<S: ProfileStore> {
    store: S,
    state: ProfileState,
    screen: Screen,
    institution_form: InstitutionForm,
    course_form: CourseForm,
}

impl<S: ProfileStore> ProfileApp<S> {
    /// Starts on the display screen: seed defaults, then overwrite each
    /// collection the store already holds.
    pub fn open(store: S) -> Result<Self, StateError> {
        let mut state = ProfileState::default();
        state.load(&store)?;
        Ok(Self {
            store,
            state,
            screen: Screen::Display,
            institution_form: InstitutionForm::default(),
            course_form: CourseForm::default(),
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn institution_form(&self) -> &InstitutionForm {
        &self.institution_form
    }

    pub fn institution_form_mut(&mut self) -> &mut InstitutionForm {
        &mut self.institution_form
    }

    pub fn course_form(&self) -> &CourseForm {
        &self.course_form
    }

    pub fn course_form_mut(&mut self) -> &mut CourseForm {
        &mut self.course_form
    }

    /// Display → Edit. Re-runs the load, so unsaved in-memory edits survive
    /// re-entry for any key the store does not hold yet.
    pub fn open_edit(&mut self) -> Result<(), StateError> {
        self.state.load(&self.store)?;
        self.screen = Screen::Edit;
        info!("event=screen_transition module=screen status=ok to=edit");
        Ok(())
    }

    /// Edit → Display via persistence of all three collections.
    pub fn save_profile(&mut self) -> Result<(), StateError> {
        self.state.save(&mut self.store)?;
        self.screen = Screen::Display;
        info!("event=screen_transition module=screen status=ok to=display via=save");
        Ok(())
    }

    /// Edit → Display without persisting. Edits already applied to the
    /// in-memory state stay there until the next load overwrites them.
    pub fn cancel(&mut self) {
        self.screen = Screen::Display;
        info!("event=screen_transition module=screen status=ok to=display via=cancel");
    }

    /// Keyed field update on the single profile record.
    pub fn set_student_field(&mut self, field: &str, value: &str) -> Result<(), EditError> {
        self.state.student.set_field(field, value)
    }

    pub fn set_institution_field(
        &mut self,
        index: usize,
        field: &str,
        value: &str,
    ) -> Result<(), EditError> {
        self.state.history.institutions =
            reconcile::update_field(&self.state.history.institutions, index, field, value)?;
        Ok(())
    }

    pub fn delete_institution(&mut self, index: usize) -> Result<(), EditError> {
        self.state.history.institutions =
            reconcile::delete_at(&self.state.history.institutions, index)?;
        Ok(())
    }

    /// Appends a record built from the add-institution form.
    pub fn submit_institution(&mut self) -> Result<(), FormError> {
        let record = self.institution_form.submit()?;
        self.state.history.institutions =
            reconcile::append(&self.state.history.institutions, record);
        Ok(())
    }

    pub fn set_course_field(
        &mut self,
        index: usize,
        field: &str,
        value: &str,
    ) -> Result<(), EditError> {
        self.state.courses = reconcile::update_field(&self.state.courses, index, field, value)?;
        Ok(())
    }

    pub fn delete_course(&mut self, index: usize) -> Result<(), EditError> {
        self.state.courses = reconcile::delete_at(&self.state.courses, index)?;
        Ok(())
    }

    /// Appends a record built from the add-course form.
    pub fn submit_course(&mut self) -> Result<(), FormError> {
        let record = self.course_form.submit()?;
        self.state.courses = reconcile::append(&self.state.courses, record);
        Ok(())
    }
}
