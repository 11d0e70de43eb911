//! Dashboard page: one authenticated read feeds every widget.

use leptos::prelude::*;

use crate::auth::Session;
use crate::components::alerts::AlertsCard;
use crate::components::calendar_card::CalendarCard;
use crate::components::header::Header;
use crate::components::list_card::{ListCard, ListRow};
use crate::components::quick_search::{SearchEntry, build_index};
use crate::components::sidebar::Sidebar;
use crate::components::simple_chart::SimpleChart;
use crate::components::stats_card::StatsCard;
use crate::net::types::DashboardData;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let search_index = expect_context::<RwSignal<Vec<SearchEntry>>>();

    let data = LocalResource::new({
        let session = session.clone();
        move || {
            let session = session.clone();
            async move { session.dashboard().await }
        }
    });

    // Feed the header search as soon as the aggregate lands.
    Effect::new(move || {
        if let Some(Ok(loaded)) = data.get() {
            search_index.set(build_index(&loaded));
        }
    });

    view! {
        <div class="dashboard">
            <Header/>
            <div class="dashboard__body">
                <Sidebar/>
                <main class="dashboard__main">
                    <Suspense fallback=move || {
                        view! {
                            <div class="page-loading">
                                <div class="page-loading__spinner"></div>
                            </div>
                        }
                    }>
                        {move || {
                            data.get()
                                .map(|result| match result {
                                    Ok(loaded) => {
                                        view! { <DashboardContent data=loaded/> }.into_any()
                                    }
                                    Err(err) => {
                                        let message = err
                                            .message_or("Could not load the dashboard")
                                            .to_owned();
                                        view! {
                                            <div class="dashboard__error">
                                                <p>{message}</p>
                                                <button
                                                    class="btn btn--primary"
                                                    on:click=move |_| data.refetch()
                                                >
                                                    "Try again"
                                                </button>
                                            </div>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </main>
            </div>
        </div>
    }
}

#[component]
fn DashboardContent(data: DashboardData) -> impl IntoView {
    let overview = data.overview.clone();

    let course_rows: Vec<ListRow> = data
        .recent_courses
        .iter()
        .map(|course| ListRow {
            primary: course.name.clone(),
            secondary: Some(format!("{} · {}", course.class_id.name, course.year)),
            meta: Some(format!("{} groups", course.group_ids.len())),
        })
        .collect();

    let class_rows: Vec<ListRow> = data
        .classes
        .iter()
        .map(|class| ListRow {
            primary: format!("{} ({})", class.name, class.year),
            secondary: Some(class.description.clone()).filter(|d| !d.is_empty()),
            meta: Some(format!("{} students", class.student_count)),
        })
        .collect();

    let group_rows: Vec<ListRow> = data
        .groups
        .iter()
        .map(|group| ListRow {
            primary: group.name.clone(),
            secondary: Some(group.class_name.clone()).filter(|c| !c.is_empty()),
            meta: Some(format!("{}/{} seats", group.student_count, group.max_students)),
        })
        .collect();

    let result_rows: Vec<ListRow> = data
        .recent_results
        .iter()
        .map(|result| ListRow {
            primary: result.student_id.name.clone(),
            secondary: Some(result.exam_id.title.clone()).filter(|t| !t.is_empty()),
            meta: Some(format!("{:.0}", result.score)),
        })
        .collect();

    let scores: Vec<f64> = data.recent_results.iter().map(|r| r.score).collect();
    let score_labels: Vec<String> = data
        .recent_results
        .iter()
        .map(|r| format!("{}: {:.0}", r.student_id.name, r.score))
        .collect();

    view! {
        <section class="dashboard__overview" id="overview">
            <StatsCard label="Classes" value=overview.total_classes.to_string()/>
            <StatsCard label="Groups" value=overview.total_groups.to_string()/>
            <StatsCard label="Courses" value=overview.total_courses.to_string()/>
            <StatsCard label="Exams" value=overview.total_exams.to_string()/>
            <StatsCard label="Students" value=overview.total_students.to_string()/>
            <StatsCard
                label="Results"
                value=overview.total_results.to_string()
                detail=format!(
                    "avg {:.1} · pass {:.0}%",
                    overview.average_score,
                    overview.pass_rate * 100.0,
                )
            />
        </section>

        <AlertsCard data=data.clone()/>

        <div class="dashboard__grid">
            <section class="chart-card" id="results">
                <h2 class="chart-card__title">"Recent scores"</h2>
                {if scores.is_empty() {
                    view! { <p class="chart-card__empty">"No results yet"</p> }.into_any()
                } else {
                    view! { <SimpleChart values=scores labels=score_labels/> }.into_any()
                }}
            </section>
            <CalendarCard exams=data.recent_exams.clone()/>
            <ListCard title="Classes" anchor="classes" rows=class_rows/>
            <ListCard title="Groups" anchor="groups" rows=group_rows/>
            <ListCard title="Recent courses" anchor="courses" rows=course_rows/>
            <ListCard title="Latest results" anchor="latest-results" rows=result_rows/>
        </div>
    }
}
