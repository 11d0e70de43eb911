pub mod alerts;
pub mod calendar_card;
pub mod header;
pub mod list_card;
pub mod quick_search;
pub mod route_guard;
pub mod sidebar;
pub mod simple_chart;
pub mod stats_card;
