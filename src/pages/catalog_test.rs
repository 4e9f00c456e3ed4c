use super::*;

fn course(id: &str, title: &str, instructor: &str, duration: &str) -> Course {
    Course {
        id: id.to_owned(),
        title: title.to_owned(),
        description: format!("{title} description"),
        duration: duration.to_owned(),
        instructor: instructor.to_owned(),
        created_by: None,
    }
}

fn sample_courses() -> Vec<Course> {
    vec![
        course("c1", "Intro to Go", "Pat", "3 weeks"),
        course("c2", "Advanced Go", "Sam", "6 weeks"),
        course("c3", "Python Basics", "Ada", "10 weeks"),
    ]
}

#[test]
fn parse_duration_weeks_reads_numeric_prefix() {
    assert_eq!(parse_duration_weeks("3 weeks"), Some(3));
    assert_eq!(parse_duration_weeks("10 weeks"), Some(10));
    assert_eq!(parse_duration_weeks("  6 weeks"), Some(6));
    assert_eq!(parse_duration_weeks("self-paced"), None);
    assert_eq!(parse_duration_weeks(""), None);
}

#[test]
fn short_filter_keeps_only_durations_up_to_four_weeks() {
    let filtered = filter_courses(&sample_courses(), "", DurationFilter::Short);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "c1");
}

#[test]
fn medium_and_long_buckets_partition_the_rest() {
    let courses = sample_courses();
    let medium = filter_courses(&courses, "", DurationFilter::Medium);
    assert_eq!(medium.len(), 1);
    assert_eq!(medium[0].id, "c2");

    let long = filter_courses(&courses, "", DurationFilter::Long);
    assert_eq!(long.len(), 1);
    assert_eq!(long[0].id, "c3");
}

#[test]
fn unparsable_duration_only_matches_all() {
    let courses = vec![course("c9", "Workshop", "Kim", "self-paced")];
    assert_eq!(filter_courses(&courses, "", DurationFilter::All).len(), 1);
    assert!(filter_courses(&courses, "", DurationFilter::Short).is_empty());
    assert!(filter_courses(&courses, "", DurationFilter::Long).is_empty());
}

#[test]
fn search_is_case_insensitive_over_titles() {
    let filtered = filter_courses(&sample_courses(), "go", DurationFilter::All);
    let ids: Vec<&str> = filtered.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["c1", "c2"]);
}

#[test]
fn search_also_covers_instructor_and_description() {
    let filtered = filter_courses(&sample_courses(), "ada", DurationFilter::All);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "c3");

    let filtered = filter_courses(&sample_courses(), "basics description", DurationFilter::All);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "c3");
}

#[test]
fn search_and_filter_compose() {
    let filtered = filter_courses(&sample_courses(), "go", DurationFilter::Medium);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "c2");
}

#[test]
fn empty_search_keeps_everything() {
    assert_eq!(filter_courses(&sample_courses(), "", DurationFilter::All).len(), 3);
}

#[test]
fn filter_values_map_from_dropdown_strings() {
    assert_eq!(DurationFilter::from_value("short"), DurationFilter::Short);
    assert_eq!(DurationFilter::from_value("medium"), DurationFilter::Medium);
    assert_eq!(DurationFilter::from_value("long"), DurationFilter::Long);
    assert_eq!(DurationFilter::from_value("all"), DurationFilter::All);
    assert_eq!(DurationFilter::from_value("bogus"), DurationFilter::All);
}
