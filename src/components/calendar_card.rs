//! Upcoming exam schedule card.

use leptos::prelude::*;

use crate::net::types::RecentExam;

#[cfg(test)]
#[path = "calendar_card_test.rs"]
mod calendar_card_test;

/// Order exams by start time, soonest first.
///
/// Timestamps are ISO-8601 so a plain string sort is chronological; exams
/// without a start time sink to the end.
pub fn schedule_order(exams: &[RecentExam]) -> Vec<RecentExam> {
    let mut sorted: Vec<RecentExam> = exams.to_vec();
    sorted.sort_by(|a, b| match (a.start_time.is_empty(), b.start_time.is_empty()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => a.start_time.cmp(&b.start_time),
    });
    sorted
}

/// Trim an ISO timestamp down to `YYYY-MM-DD HH:MM` for display.
fn short_time(iso: &str) -> String {
    match (iso.get(..10), iso.get(11..16)) {
        (Some(date), Some(time)) => format!("{date} {time}"),
        _ => iso.to_owned(),
    }
}

#[component]
pub fn CalendarCard(exams: Vec<RecentExam>) -> impl IntoView {
    let ordered = schedule_order(&exams);

    view! {
        <section class="calendar-card" id="exams">
            <h2 class="calendar-card__title">"Exam schedule"</h2>
            {if ordered.is_empty() {
                view! { <p class="calendar-card__empty">"No exams scheduled"</p> }.into_any()
            } else {
                view! {
                    <ul class="calendar-card__rows">
                        {ordered
                            .into_iter()
                            .map(|exam| {
                                let when = short_time(&exam.start_time);
                                view! {
                                    <li class="calendar-card__row">
                                        <span class="calendar-card__when">{when}</span>
                                        <div class="calendar-card__text">
                                            <span class="calendar-card__exam">{exam.title}</span>
                                            <span class="calendar-card__course">
                                                {format!("{} · {}", exam.course_id.name, exam.class_id.name)}
                                            </span>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </section>
    }
}
