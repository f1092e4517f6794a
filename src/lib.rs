pub mod application;
pub mod commands;
pub mod config;
pub mod download;
pub mod http;
pub mod page;
pub mod release;
pub mod server;
