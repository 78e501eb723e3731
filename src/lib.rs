pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod redirect;
pub mod resolver;
pub mod short_id;
pub mod shortener;
pub mod storage;

pub use app::create_app;
