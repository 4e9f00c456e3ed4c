use super::*;

#[test]
fn course_parses_wire_field_names() {
    let course: Course = serde_json::from_value(serde_json::json!({
        "_id": "c1",
        "title": "Intro to Go",
        "description": "A first course.",
        "duration": "3 weeks",
        "instructor": "Pat",
        "createdBy": "u9"
    }))
    .unwrap();
    assert_eq!(course.id, "c1");
    assert_eq!(course.created_by.as_deref(), Some("u9"));
}

#[test]
fn course_tolerates_missing_created_by() {
    let course: Course = serde_json::from_value(serde_json::json!({
        "_id": "c2",
        "title": "Python Basics",
        "description": "Snakes.",
        "duration": "10 weeks",
        "instructor": "Sam"
    }))
    .unwrap();
    assert_eq!(course.created_by, None);
}

#[test]
fn course_draft_serializes_created_by_in_camel_case() {
    let draft = CourseDraft {
        title: "Advanced Go".to_owned(),
        description: "Goroutines and beyond.".to_owned(),
        duration: "6 weeks".to_owned(),
        instructor: "Pat".to_owned(),
        created_by: "admin-1".to_owned(),
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value["createdBy"], "admin-1");
    assert!(value.get("created_by").is_none());
}
