pub mod api;
pub mod config;
pub mod entity;
pub mod error;
pub mod migration;
pub mod schema;
pub mod server;
pub mod service;
pub mod signal;
pub mod reexports {
    pub use sea_orm;
    pub use time;
}
