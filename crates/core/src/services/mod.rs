pub mod aggregation_service;
pub mod insight_service;
pub mod journal_service;
pub mod weight_service;
