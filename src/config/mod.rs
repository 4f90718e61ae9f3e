//! `config.toml` handling.
//!
//! [`loader::load`] resolves the file (`--config`, else the XDG location,
//! else built-in defaults) into a [`schema::Config`]. `config init` writes
//! [`default::DEFAULT_CONFIG_TEMPLATE`].

pub mod default;
pub mod error;
pub mod loader;
pub mod schema;
pub mod xdg;
