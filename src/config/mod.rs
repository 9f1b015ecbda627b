//! Install manifest loading, parsing, and validation.
//!
//! The manifest (`outpost.yml`) declares everything that is constant for a
//! run: which daemon to install, where its repository goes, which OS
//! packages it needs, and which systemd unit to register. It is loaded
//! once at startup and never mutated.

pub mod loader;
pub mod schema;

pub use loader::{discover, load, CONFIG_FILE};
pub use schema::InstallConfig;
