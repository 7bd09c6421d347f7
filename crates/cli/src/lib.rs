//! `wms-cli`
//!
//! Interactive shell around the warehouse engine. Everything here is IO:
//! reading menu choices, printing outcomes, loading settings from the
//! environment and seeding demo stock.

pub mod config;
pub mod seed;
pub mod shell;

pub use config::CliConfig;
pub use shell::Shell;
