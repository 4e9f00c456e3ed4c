use super::*;

#[test]
fn add_course_action_creates_regardless_of_id_segment() {
    assert_eq!(FormMode::from_params(Some("add-course"), Some("null")), Some(FormMode::Create));
    assert_eq!(FormMode::from_params(Some("add-course"), Some("c1")), Some(FormMode::Create));
    assert_eq!(FormMode::from_params(Some("add-course"), None), Some(FormMode::Create));
}

#[test]
fn edit_course_action_requires_a_real_id() {
    assert_eq!(
        FormMode::from_params(Some("edit-course"), Some("c1")),
        Some(FormMode::Edit("c1".to_owned()))
    );
    assert_eq!(FormMode::from_params(Some("edit-course"), Some("null")), None);
    assert_eq!(FormMode::from_params(Some("edit-course"), Some("")), None);
    assert_eq!(FormMode::from_params(Some("edit-course"), None), None);
}

#[test]
fn unknown_actions_are_rejected() {
    assert_eq!(FormMode::from_params(Some("delete-course"), Some("c1")), None);
    assert_eq!(FormMode::from_params(None, Some("c1")), None);
}

#[test]
fn validate_draft_trims_and_stamps_created_by() {
    let draft =
        validate_draft(" Intro to Go ", " desc ", " 3 weeks ", " Pat ", "admin-1").unwrap();
    assert_eq!(draft.title, "Intro to Go");
    assert_eq!(draft.description, "desc");
    assert_eq!(draft.duration, "3 weeks");
    assert_eq!(draft.instructor, "Pat");
    assert_eq!(draft.created_by, "admin-1");
}

#[test]
fn validate_draft_rejects_any_blank_field() {
    assert!(validate_draft("", "d", "3 weeks", "Pat", "u").is_err());
    assert!(validate_draft("t", "   ", "3 weeks", "Pat", "u").is_err());
    assert!(validate_draft("t", "d", "", "Pat", "u").is_err());
    assert!(validate_draft("t", "d", "3 weeks", "", "u").is_err());
}
