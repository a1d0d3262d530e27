pub mod app;
pub mod board;
pub mod config;
pub mod logging;
pub mod render;

pub use board::ResultBoard;
pub use config::AppConfig;
pub use render::OutputFormat;
