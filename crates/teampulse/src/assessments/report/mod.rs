mod insights;
mod narrative;
mod recommendations;
pub mod views;

pub use insights::generate_insights;
pub use narrative::{InsightFilter, KeywordInsightFilter};
pub use recommendations::{generate_recommendations, Priority, Recommendation};

pub(crate) use views::section_views;
