pub mod api;
pub mod controller;
pub mod error;
pub mod metrics;
pub mod state;
pub mod ui;
pub mod view_model;

pub use controller::{DashboardController, LoadState, Notifier, StatisticsSource};
pub use error::DataSourceError;
