pub mod cms;
pub mod config;
pub mod contact;
pub mod error;
pub mod filter;
pub mod i18n;
pub mod render;
pub mod routes;
pub mod security;

pub use config::Config;
pub use routes::{router, AppState};
