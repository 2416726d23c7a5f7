pub mod date;
pub mod error;
pub mod fetch;
pub mod models;
pub mod parser;
