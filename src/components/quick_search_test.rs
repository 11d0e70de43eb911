use super::{build_index, filter_entries};
use crate::net::types::{
    ClassSummary, DashboardData, GroupSummary, NameRef, RecentCourse, RecentExam,
};

fn sample() -> DashboardData {
    DashboardData {
        classes: vec![ClassSummary {
            id: "c1".into(),
            name: "Grade 10".into(),
            year: "2026".into(),
            ..ClassSummary::default()
        }],
        groups: vec![GroupSummary {
            id: "g1".into(),
            name: "Algebra A".into(),
            class_name: "Grade 10".into(),
            ..GroupSummary::default()
        }],
        recent_courses: vec![RecentCourse {
            id: "co1".into(),
            name: "Linear Algebra".into(),
            ..RecentCourse::default()
        }],
        recent_exams: vec![RecentExam {
            id: "e1".into(),
            title: "Midterm".into(),
            course_id: NameRef {
                name: "Linear Algebra".into(),
            },
            ..RecentExam::default()
        }],
        ..DashboardData::default()
    }
}

#[test]
fn index_covers_every_entity_kind() {
    let index = build_index(&sample());
    let kinds: Vec<&str> = index.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, ["Class", "Group", "Course", "Exam"]);
}

#[test]
fn blank_query_matches_nothing() {
    let index = build_index(&sample());
    assert!(filter_entries(&index, "").is_empty());
    assert!(filter_entries(&index, "   ").is_empty());
}

#[test]
fn match_is_case_insensitive_over_label_and_detail() {
    let index = build_index(&sample());
    let by_label = filter_entries(&index, "ALGEBRA");
    assert_eq!(by_label.len(), 2);

    // "grade 10" appears as a group's detail and as a class label.
    let by_detail = filter_entries(&index, "grade 10");
    assert_eq!(by_detail.len(), 2);
}

#[test]
fn results_are_capped() {
    let mut data = DashboardData::default();
    for i in 0..20 {
        data.classes.push(ClassSummary {
            id: format!("c{i}"),
            name: format!("Class {i}"),
            ..ClassSummary::default()
        });
    }
    let index = build_index(&data);
    assert_eq!(filter_entries(&index, "class").len(), 8);
}
