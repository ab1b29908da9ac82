pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod router;
pub mod service;

pub use error::DesignerError;
