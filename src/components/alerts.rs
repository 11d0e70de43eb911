//! Attention panel derived from the dashboard aggregate.

use leptos::prelude::*;

use crate::net::types::DashboardData;

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

/// Pass rate below this fraction raises a warning.
const LOW_PASS_RATE: f64 = 0.6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub severity: Severity,
    pub text: String,
}

/// Derive the alert list from the aggregate. Pure so it can be tested
/// without a browser.
pub fn derive_alerts(data: &DashboardData) -> Vec<Alert> {
    let mut alerts = Vec::new();

    let overview = &data.overview;
    if overview.total_results > 0 && overview.pass_rate < LOW_PASS_RATE {
        alerts.push(Alert {
            severity: Severity::Warning,
            text: format!(
                "Pass rate is at {:.0}% across recent results",
                overview.pass_rate * 100.0
            ),
        });
    }

    for group in &data.groups {
        if group.max_students > 0 && group.available_slots == 0 {
            alerts.push(Alert {
                severity: Severity::Info,
                text: format!("Group \"{}\" is full", group.name),
            });
        }
    }

    alerts
}

#[component]
pub fn AlertsCard(data: DashboardData) -> impl IntoView {
    let alerts = derive_alerts(&data);

    view! {
        <section class="alerts-card">
            <h2 class="alerts-card__title">"Needs attention"</h2>
            {if alerts.is_empty() {
                view! { <p class="alerts-card__empty">"All clear"</p> }.into_any()
            } else {
                view! {
                    <ul class="alerts-card__rows">
                        {alerts
                            .into_iter()
                            .map(|alert| {
                                let class = match alert.severity {
                                    Severity::Warning => "alerts-card__row alerts-card__row--warning",
                                    Severity::Info => "alerts-card__row alerts-card__row--info",
                                };
                                view! { <li class=class>{alert.text}</li> }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </section>
    }
}
