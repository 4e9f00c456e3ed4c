use super::*;

#[test]
fn welcome_heading_names_the_admin_dashboard() {
    assert_eq!(welcome_heading("admin", "u1"), "Welcome to Your Admin Dashboard, u1");
}

#[test]
fn welcome_heading_defaults_to_learning_dashboard() {
    assert_eq!(welcome_heading("student", "u2"), "Welcome to Your Learning Dashboard, u2");
}

#[test]
fn welcome_subtitle_tracks_role() {
    assert_eq!(welcome_subtitle("admin"), "Manage and optimize your learning platform");
    assert_eq!(welcome_subtitle("student"), "Your gateway to knowledge and skill development");
}
