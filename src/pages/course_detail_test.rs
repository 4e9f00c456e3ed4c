use super::*;

#[test]
fn enrolled_visitors_see_the_enrolled_label() {
    assert_eq!(enroll_button_label(true), "You're Enrolled");
}

#[test]
fn unenrolled_visitors_see_the_call_to_action() {
    assert_eq!(enroll_button_label(false), "Enroll Now - Start Learning Today");
}
