pub mod app;
pub mod data;
pub mod model;
pub mod quiz;
pub mod shortcode;
pub mod storage;
pub mod ui;

pub use app::LearnApp;
