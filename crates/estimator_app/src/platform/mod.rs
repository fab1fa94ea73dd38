mod app;
mod effects;
pub mod logging;
pub mod settings;
mod ui;

pub use app::run_app;
