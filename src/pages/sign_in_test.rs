use super::*;

#[test]
fn validate_user_id_input_trims_and_requires_value() {
    assert_eq!(validate_user_id_input("  learner-7  "), Ok("learner-7".to_owned()));
    assert_eq!(validate_user_id_input("   "), Err("Enter your User ID first."));
    assert_eq!(validate_user_id_input(""), Err("Enter your User ID first."));
}

#[test]
fn admins_land_on_the_admin_console() {
    assert_eq!(landing_route("admin"), "/admin");
}

#[test]
fn everyone_else_lands_on_home() {
    assert_eq!(landing_route("student"), "/");
    assert_eq!(landing_route(""), "/");
    assert_eq!(landing_route("ADMIN"), "/");
}
