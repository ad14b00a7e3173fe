//! Read-only view rendering.
//!
//! # Responsibility
//! - Map state to plain-text views with field values rendered verbatim.
//! - Render the literal empty-state line when a list holds no rows.

use crate::model::record::{Course, StudentHistory};
use crate::model::student::Student;
use crate::state::ProfileState;
use std::fmt::Write;

/// Empty-state line for the academic-history list.
pub const NO_INSTITUTIONS: &str = "No institutions available";
/// Empty-state line for the course list.
pub const NO_COURSES: &str = "No courses available";

pub fn render_student(student: &Student) -> String {
    format!(
        "Student details\nName: {}\nAge: {}\nEmail: {}\nPhone: {}\n",
        student.name, student.age, student.email, student.phone
    )
}

pub fn render_history(history: &StudentHistory) -> String {
    let mut view = String::from("Student history\n");
    if history.institutions.is_empty() {
        view.push_str(NO_INSTITUTIONS);
        view.push('\n');
        return view;
    }

    for institution in &history.institutions {
        let _ = writeln!(
            view,
            "Name: {} Degree: {} Year: {}",
            institution.name, institution.degree, institution.year
        );
    }
    view
}

pub fn render_courses(courses: &[Course]) -> String {
    let mut view = String::from("Courses\n");
    if courses.is_empty() {
        view.push_str(NO_COURSES);
        view.push('\n');
        return view;
    }

    for course in courses {
        let _ = writeln!(
            view,
            "Course: {} Instructor: {} Duration: {}",
            course.name, course.instructor, course.duration
        );
    }
    view
}

/// Full display screen: the three sections in their fixed order.
pub fn render_overview(state: &ProfileState) -> String {
    let mut view = render_student(&state.student);
    view.push('\n');
    view.push_str(&render_history(&state.history));
    view.push('\n');
    view.push_str(&render_courses(&state.courses));
    view
}
