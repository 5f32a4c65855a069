mod app_config;
pub mod cli;
mod milepost_app;
mod milepost_app_error;
mod route_writer;
mod summary_writer;

pub use app_config::{AppConfig, WeightUnit};
pub use milepost_app::MilepostApp;
pub use milepost_app_error::MilepostAppError;
