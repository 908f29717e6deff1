use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::ActionError;
use crate::locale::Locale;
use crate::model::CommandResult;
use crate::session::Session;

pub const CLEAR_COMMAND: &str = "clear";
pub const HELP_COMMAND: &str = "help";

/// Names the engine handles itself. Descriptors stored under them are never
/// dispatched or listed.
pub const RESERVED_COMMANDS: [&str; 2] = [CLEAR_COMMAND, HELP_COMMAND];

/// Actions see only their arguments and the session, never engine history or
/// panel state.
pub type CommandAction =
    Box<dyn Fn(&[String], &mut Session) -> Result<CommandResult, ActionError> + Send + Sync>;

pub struct CommandDescriptor {
    pub name: String,
    pub description: String,
    /// Offered as a suggestion button.
    pub visual: bool,
    translations: Vec<(Locale, String)>,
    action: CommandAction,
}

impl CommandDescriptor {
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, action: F) -> Self
    where
        F: Fn(&[String], &mut Session) -> Result<CommandResult, ActionError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            visual: false,
            translations: Vec::new(),
            action: Box::new(action),
        }
    }

    pub fn visual(mut self) -> Self {
        self.visual = true;
        self
    }

    pub fn translated(mut self, locale: Locale, description: impl Into<String>) -> Self {
        self.translations.retain(|(existing, _)| *existing != locale);
        self.translations.push((locale, description.into()));
        self
    }

    pub fn description_for(&self, locale: Locale) -> &str {
        self.translations
            .iter()
            .find(|(existing, _)| *existing == locale)
            .map_or(self.description.as_str(), |(_, text)| text.as_str())
    }

    pub fn run(&self, args: &[String], session: &mut Session) -> Result<CommandResult, ActionError> {
        (self.action)(args, session)
    }

    pub fn is_reserved(&self) -> bool {
        RESERVED_COMMANDS.contains(&self.name.as_str())
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("visual", &self.visual)
            .finish_non_exhaustive()
    }
}

/// Commands keyed by canonical name, iterated in registration order.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: IndexMap<String, CommandDescriptor>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces by name. A replaced command keeps its position.
    pub fn register(&mut self, descriptor: CommandDescriptor) -> Option<CommandDescriptor> {
        if descriptor.is_reserved() {
            debug!(command = %descriptor.name, "registered under a reserved name; it will not run");
        }
        let replaced = self.commands.insert(descriptor.name.clone(), descriptor);
        if let Some(previous) = &replaced {
            debug!(command = %previous.name, "command replaced");
        }
        replaced
    }

    pub fn unregister(&mut self, name: &str) -> Option<CommandDescriptor> {
        self.commands.shift_remove(name)
    }

    pub fn resolve(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.values()
    }

    /// Dispatchable commands, the reserved names excluded.
    pub fn listed(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.iter().filter(|descriptor| !descriptor.is_reserved())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
