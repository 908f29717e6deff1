pub mod actions;
pub mod boot;
pub mod builtins;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod history;
pub mod locale;
mod messages;
pub mod model;
pub mod panel;
pub mod prefs;
pub mod registry;
pub mod session;
pub mod theme;

pub use actions::*;
pub use builtins::register_shell_commands;
pub use engine::*;
pub use error::*;
pub use events::*;
pub use locale::*;
pub use model::*;
pub use panel::*;
pub use registry::*;
pub use session::*;
