use super::schedule_order;
use crate::net::types::RecentExam;

fn exam(id: &str, start: &str) -> RecentExam {
    RecentExam {
        id: id.to_owned(),
        title: format!("Exam {id}"),
        start_time: start.to_owned(),
        ..RecentExam::default()
    }
}

#[test]
fn exams_sort_soonest_first() {
    let ordered = schedule_order(&[
        exam("b", "2026-09-20T10:00:00Z"),
        exam("a", "2026-09-01T09:00:00Z"),
        exam("c", "2026-10-02T13:30:00Z"),
    ]);
    let ids: Vec<&str> = ordered.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn unscheduled_exams_sink_to_the_end() {
    let ordered = schedule_order(&[exam("x", ""), exam("y", "2026-09-01T09:00:00Z")]);
    let ids: Vec<&str> = ordered.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["y", "x"]);
}

#[test]
fn empty_input_stays_empty() {
    assert!(schedule_order(&[]).is_empty());
}
