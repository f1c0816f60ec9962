pub mod api;
pub mod config;
pub mod router;
pub mod server;
pub mod store;
pub mod v2_endpoint;
