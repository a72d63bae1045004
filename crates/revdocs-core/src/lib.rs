pub mod config;
pub mod logging;

pub mod batch;
pub mod catalog;
pub mod checksum;
pub mod error;
pub mod fetcher;
pub mod links;
pub mod storage;
pub mod url_model;

pub use error::FetchError;
