pub mod database;
pub mod query_log;
