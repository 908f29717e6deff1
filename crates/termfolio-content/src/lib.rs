mod boot_script;
mod commands;
mod data;
pub mod provider;

pub use boot_script::default_boot_script;
pub use commands::register_portfolio_commands;
pub use provider::*;
