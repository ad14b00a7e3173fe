use studentprofile_core::screen::display::{
    render_courses, render_history, render_overview, render_student, NO_COURSES, NO_INSTITUTIONS,
};
use studentprofile_core::{
    Course, EditError, FormError, Institution, MemoryStore, ProfileApp, ProfileState, ScalarValue,
    Screen, StudentHistory,
};

#[test]
fn empty_lists_render_literal_empty_state_lines() {
    let history = StudentHistory {
        institutions: Vec::new(),
    };
    let courses: Vec<Course> = Vec::new();

    assert_eq!(render_history(&history), format!("Student history\n{NO_INSTITUTIONS}\n"));
    assert_eq!(render_courses(&courses), format!("Courses\n{NO_COURSES}\n"));
}

#[test]
fn single_records_render_field_values_verbatim() {
    let history = StudentHistory {
        institutions: vec![Institution::new("MIT", "PhD", 2025)],
    };
    let history_view = render_history(&history);
    assert!(history_view.contains("MIT"));
    assert!(history_view.contains("PhD"));
    assert!(history_view.contains("2025"));

    let courses = vec![Course::new("Math", "John Snow", "3 months")];
    let courses_view = render_courses(&courses);
    assert!(courses_view.contains("Math"));
    assert!(courses_view.contains("John Snow"));
    assert!(courses_view.contains("3 months"));
}

#[test]
fn student_renders_all_four_fields() {
    let state = ProfileState::default();
    let view = render_student(&state.student);

    assert!(view.contains("John Doe"));
    assert!(view.contains("Age: 20"));
    assert!(view.contains("john@doe.com"));
    assert!(view.contains("1234567890"));
}

#[test]
fn overview_contains_all_three_sections_in_order() {
    let view = render_overview(&ProfileState::default());

    let student_at = view.find("Student details").unwrap();
    let history_at = view.find("Student history").unwrap();
    let courses_at = view.find("Courses").unwrap();
    assert!(student_at < history_at);
    assert!(history_at < courses_at);
}

#[test]
fn app_starts_on_display_screen_with_defaults() {
    let app = ProfileApp::open(MemoryStore::new()).unwrap();

    assert_eq!(app.screen(), Screen::Display);
    assert_eq!(app.state(), &ProfileState::default());
}

#[test]
fn edit_save_flow_persists_added_institution() {
    let mut app = ProfileApp::open(MemoryStore::new()).unwrap();
    app.open_edit().unwrap();
    assert_eq!(app.screen(), Screen::Edit);

    let form = app.institution_form_mut();
    form.name = "MIT".to_string();
    form.degree = "PhD".to_string();
    form.year = "2025".to_string();
    app.submit_institution().unwrap();

    // Form is cleared on successful add.
    assert!(app.institution_form().name.is_empty());

    app.save_profile().unwrap();
    assert_eq!(app.screen(), Screen::Display);

    let mut reloaded = ProfileState::default();
    reloaded.load(app.store()).unwrap();
    let names: Vec<&str> = reloaded
        .history
        .institutions
        .iter()
        .map(|institution| institution.name.as_str())
        .collect();
    assert_eq!(names, vec!["Yale", "Harvard", "MIT"]);
    assert_eq!(
        reloaded.history.institutions[2].year,
        ScalarValue::Text("2025".to_string())
    );
}

#[test]
fn incomplete_add_submission_rejects_without_mutating() {
    let mut app = ProfileApp::open(MemoryStore::new()).unwrap();
    app.open_edit().unwrap();
    let courses_before = app.state().courses.clone();

    let form = app.course_form_mut();
    form.name = "Music".to_string();

    let err = app.submit_course().unwrap_err();
    assert_eq!(err, FormError::MissingField("instructor"));
    assert_eq!(app.state().courses, courses_before);
    // Incomplete input stays in the form for the user to finish.
    assert_eq!(app.course_form().name, "Music");
}

#[test]
fn cancel_keeps_unsaved_edits_in_memory() {
    let mut app = ProfileApp::open(MemoryStore::new()).unwrap();
    app.open_edit().unwrap();

    let form = app.course_form_mut();
    form.name = "Music".to_string();
    form.instructor = "Brienne".to_string();
    form.duration = "1 month".to_string();
    app.submit_course().unwrap();

    app.cancel();

    assert_eq!(app.screen(), Screen::Display);
    assert_eq!(app.state().courses.len(), 2);
    assert_eq!(app.state().courses[1].name, "Music");

    // The store has no `studentCourses` key yet, so re-entering the edit
    // screen re-loads without overwriting the unsaved course.
    app.open_edit().unwrap();
    assert_eq!(app.state().courses.len(), 2);
}

#[test]
fn reentering_edit_after_save_overwrites_later_in_memory_edits() {
    let mut app = ProfileApp::open(MemoryStore::new()).unwrap();
    app.open_edit().unwrap();
    app.save_profile().unwrap();

    app.open_edit().unwrap();
    app.delete_course(0).unwrap();
    assert!(app.state().courses.is_empty());
    app.cancel();

    // The saved key is present now, so the next load replaces the deletion.
    app.open_edit().unwrap();
    assert_eq!(app.state().courses.len(), 1);
    assert_eq!(app.state().courses[0].name, "Math");
}

#[test]
fn field_edits_wire_through_reconciler() {
    let mut app = ProfileApp::open(MemoryStore::new()).unwrap();
    app.open_edit().unwrap();

    app.set_student_field("age", "21").unwrap();
    assert_eq!(app.state().student.age, ScalarValue::Text("21".to_string()));

    app.set_institution_field(0, "degree", "Doctorate").unwrap();
    assert_eq!(app.state().history.institutions[0].degree, "Doctorate");
    assert_eq!(app.state().history.institutions[1].degree, "Masters");

    app.set_course_field(0, "duration", "4 months").unwrap();
    assert_eq!(app.state().courses[0].duration, "4 months");

    app.delete_institution(0).unwrap();
    assert_eq!(app.state().history.institutions.len(), 1);
    assert_eq!(app.state().history.institutions[0].name, "Harvard");
}

#[test]
fn unknown_student_field_is_rejected() {
    let mut app = ProfileApp::open(MemoryStore::new()).unwrap();
    app.open_edit().unwrap();

    let err = app.set_student_field("nickname", "JD").unwrap_err();
    assert!(matches!(err, EditError::UnknownField { .. }));
    assert_eq!(app.state().student, ProfileState::default().student);
}
