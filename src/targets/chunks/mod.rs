pub mod engine;
pub mod subject;
