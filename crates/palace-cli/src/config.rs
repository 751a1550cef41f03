mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{TourOverrides, build_config};
pub use models::AppConfig;
