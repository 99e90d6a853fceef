//! Configuration for the Tokebi client.
//! TOML-based, layered: env > file > defaults. Plugin-host parameters can
//! be mapped in directly with [`TokebiConfig::from_plugin_parameters`].

pub mod defaults;
pub mod tokebi_config;

pub use tokebi_config::TokebiConfig;
