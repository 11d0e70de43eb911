pub mod browser;
pub mod query;
