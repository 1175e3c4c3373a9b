pub mod auth;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod state;
pub mod store;
pub mod views;

pub use error::{AppError, Result};
pub use state::{CollectionCounts, WorkforceState};
