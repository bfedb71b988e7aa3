pub mod day;
pub mod entry;
pub mod goals;
pub mod journal;
pub mod settings;
pub mod summary;
pub mod weight;
