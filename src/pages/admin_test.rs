use super::*;

fn course(id: &str, title: &str, instructor: &str, duration: &str) -> Course {
    Course {
        id: id.to_owned(),
        title: title.to_owned(),
        description: String::new(),
        duration: duration.to_owned(),
        instructor: instructor.to_owned(),
        created_by: Some("admin-1".to_owned()),
    }
}

#[test]
fn filter_by_title_is_case_insensitive_and_title_only() {
    let courses = vec![
        course("c1", "Intro to Go", "Pat", "3 weeks"),
        course("c2", "Advanced Go", "Sam", "6 weeks"),
        course("c3", "Python Basics", "Go Figure", "10 weeks"),
    ];
    let filtered = filter_by_title(&courses, "GO");
    let ids: Vec<&str> = filtered.iter().map(|c| c.id.as_str()).collect();
    // The instructor named "Go Figure" must not match: admin search is by title.
    assert_eq!(ids, ["c1", "c2"]);
}

#[test]
fn filter_by_title_empty_term_keeps_everything() {
    let courses = vec![course("c1", "A", "I", "1 week"), course("c2", "B", "I", "2 weeks")];
    assert_eq!(filter_by_title(&courses, "").len(), 2);
}

#[test]
fn distinct_instructor_count_dedupes_names() {
    let courses = vec![
        course("c1", "A", "Pat", "3 weeks"),
        course("c2", "B", "Pat", "6 weeks"),
        course("c3", "C", "Sam", "10 weeks"),
    ];
    assert_eq!(distinct_instructor_count(&courses), 2);
    assert_eq!(distinct_instructor_count(&[]), 0);
}

#[test]
fn average_duration_label_rounds_the_mean() {
    let courses = vec![
        course("c1", "A", "Pat", "3 weeks"),
        course("c2", "B", "Sam", "6 weeks"),
        course("c3", "C", "Ada", "10 weeks"),
    ];
    // (3 + 6 + 10) / 3 = 6.33 -> 6
    assert_eq!(average_duration_label(&courses), "6 weeks");
}

#[test]
fn average_duration_label_skips_unparsable_durations() {
    let courses = vec![
        course("c1", "A", "Pat", "4 weeks"),
        course("c2", "B", "Sam", "self-paced"),
    ];
    assert_eq!(average_duration_label(&courses), "4 weeks");
}

#[test]
fn average_duration_label_handles_empty_lists() {
    assert_eq!(average_duration_label(&[]), "n/a");
}
