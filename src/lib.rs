pub mod args;
pub mod batch;
pub mod client;
pub mod error;
pub mod models;
pub mod ops;
