pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod range;
pub mod state;
pub mod ui;
pub mod upstream;

pub use app::router;
pub use config::Config;
pub use range::{RangePreset, ReportingRange};
pub use state::AppState;
