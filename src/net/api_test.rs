use super::*;

#[test]
fn api_url_prefixes_configured_base() {
    assert_eq!(api_url("/users/login"), "/api/users/login");
}

#[test]
fn endpoint_helpers_format_expected_paths() {
    assert_eq!(course_endpoint("c123"), "/admin/course/c123");
    assert_eq!(course_mutation_endpoint("c123"), "/admin/courses/c123");
    assert_eq!(enroll_endpoint("c123"), "/users/enroll/c123");
}

#[test]
fn request_failed_message_formats_operation_and_status() {
    assert_eq!(request_failed_message("login", 401), "login failed: 401");
    assert_eq!(request_failed_message("delete course", 500), "delete course failed: 500");
}

#[test]
fn login_envelope_carries_token_under_data() {
    let body: ApiEnvelope<TokenPayload> =
        serde_json::from_str(r#"{"data":{"token":"h.p.s"}}"#).unwrap();
    assert_eq!(body.data.token, "h.p.s");
}

#[test]
fn catalog_envelope_nests_courses() {
    let raw = r#"{"data":{"courses":[{"_id":"c1","title":"Intro to Go","description":"d","duration":"3 weeks","instructor":"Pat"}]}}"#;
    let body: ApiEnvelope<CourseListPayload> = serde_json::from_str(raw).unwrap();
    assert_eq!(body.data.courses.len(), 1);
    assert_eq!(body.data.courses[0].id, "c1");
}

#[test]
fn admin_list_envelope_is_a_bare_array() {
    let raw = r#"{"data":[{"_id":"c1","title":"T","description":"d","duration":"6 weeks","instructor":"I","createdBy":"u1"}]}"#;
    let body: ApiEnvelope<Vec<crate::net::types::Course>> = serde_json::from_str(raw).unwrap();
    assert_eq!(body.data[0].created_by.as_deref(), Some("u1"));
}

#[test]
fn single_course_envelope_uses_plural_field() {
    let raw = r#"{"data":{"courses":{"_id":"c1","title":"T","description":"d","duration":"6 weeks","instructor":"I"}}}"#;
    let body: ApiEnvelope<SingleCoursePayload> = serde_json::from_str(raw).unwrap();
    assert_eq!(body.data.courses.id, "c1");
}

#[test]
fn enrollment_check_envelope_is_a_boolean() {
    let body: ApiEnvelope<bool> = serde_json::from_str(r#"{"data":true}"#).unwrap();
    assert!(body.data);
}

#[test]
fn enrollments_envelope_renames_enrolled_courses() {
    let raw = r#"{"data":{"enrolledCourses":[{"_id":"c1","title":"T","description":"d","duration":"6 weeks","instructor":"I"}]}}"#;
    let body: ApiEnvelope<EnrollmentsPayload> = serde_json::from_str(raw).unwrap();
    assert_eq!(body.data.enrolled_courses.len(), 1);
}
