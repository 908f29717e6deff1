use std::any::Any;
use std::panic;
use std::panic::AssertUnwindSafe;

use tracing::debug;
use tracing::warn;

use crate::actions::Direction;
use crate::actions::TerminalAction;
use crate::error::ActionError;
use crate::events::EngineEvent;
use crate::events::TranscriptStyle;
use crate::history::HistoryBuffer;
use crate::locale::Locale;
use crate::model::CommandResult;
use crate::panel::PanelState;
use crate::registry::CommandRegistry;
use crate::registry::CLEAR_COMMAND;
use crate::registry::HELP_COMMAND;
use crate::session::Session;

pub const DEFAULT_PROMPT: &str = "visitor@rmf:~$";

/// Turns typed lines into transcript output and panel state.
///
/// The engine owns the registry, the history, the panel and the live edit
/// buffer. Theme and locale live on the [`Session`] passed to each call.
#[derive(Debug)]
pub struct CommandEngine {
    registry: CommandRegistry,
    history: HistoryBuffer,
    panel: PanelState,
    input: String,
    prompt: String,
}

impl CommandEngine {
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            registry,
            history: HistoryBuffer::new(),
            panel: PanelState::default(),
            input: String::new(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn dispatch(
        &mut self,
        session: &mut Session,
        action: TerminalAction,
    ) -> Vec<EngineEvent> {
        match action {
            TerminalAction::InputChar(ch) => {
                self.insert_char(ch);
                Vec::new()
            }
            TerminalAction::InputBackspace => {
                self.backspace();
                Vec::new()
            }
            TerminalAction::SetInput(text) => {
                self.set_input(text);
                Vec::new()
            }
            TerminalAction::Submit => {
                let line = std::mem::take(&mut self.input);
                self.submit(session, &line)
            }
            TerminalAction::Execute(line) => self.submit(session, &line),
            TerminalAction::NavigateHistory(direction) => {
                self.navigate_history(direction);
                Vec::new()
            }
            TerminalAction::NavigatePanel(direction) => self.navigate_panel(direction),
            TerminalAction::SelectPage(index) => self.select_page(index),
            TerminalAction::DismissPanel => self.dismiss_panel(),
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Runs one line. Blank lines are ignored entirely.
    pub fn submit(&mut self, session: &mut Session, raw: &str) -> Vec<EngineEvent> {
        let line = raw.trim();
        if line.is_empty() {
            return Vec::new();
        }

        self.history.append(line);
        self.input.clear();
        let mut events = vec![EngineEvent::append(
            format!("{} {line}", self.prompt),
            TranscriptStyle::CommandEcho,
        )];

        let mut tokens = line.split(' ');
        let cmd = tokens.next().unwrap_or_default();
        let args: Vec<String> = tokens.map(str::to_string).collect();

        if cmd == CLEAR_COMMAND {
            events.push(EngineEvent::TranscriptClear);
            if self.panel.dismiss() {
                events.push(self.panel_changed());
            }
            return events;
        }

        let canonical = session.locale().resolve(cmd);
        debug!(command = canonical, args = args.len(), "dispatching");
        let was_showing = self.panel.is_showing();
        let result = self.run_command(session, canonical, &args);
        if was_showing && !self.panel.is_showing() {
            events.push(self.panel_changed());
        }

        match &result {
            CommandResult::Visual(payload) => {
                self.panel.show(payload.clone());
                events.push(self.panel_changed());
                let notice = session.locale().current().displaying(payload.kind());
                events.push(EngineEvent::append(notice, TranscriptStyle::Notice));
            }
            CommandResult::Text(text) if !text.is_empty() => {
                events.push(EngineEvent::append(text.clone(), TranscriptStyle::Plain));
            }
            CommandResult::Text(_) => {}
        }

        events.extend(session.take_events());
        events.push(EngineEvent::CommandExecuted {
            command: line.to_string(),
            result,
        });
        events
    }

    fn run_command(
        &mut self,
        session: &mut Session,
        canonical: &str,
        args: &[String],
    ) -> CommandResult {
        if canonical == HELP_COMMAND {
            return CommandResult::Text(self.help_text(session.locale().current()));
        }
        let Some(descriptor) = self.registry.resolve(canonical) else {
            debug!(command = canonical, "command not found");
            return CommandResult::text(session.locale().current().command_not_found());
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| descriptor.run(args, session)))
            .unwrap_or_else(|payload| Err(ActionError::new(panic_message(payload.as_ref()))));
        match outcome {
            Ok(result) => downgrade_empty(result, session.locale().current()),
            Err(err) => {
                warn!(command = canonical, %err, "command failed");
                session.discard_requests();
                self.panel.dismiss();
                CommandResult::Text(session.locale().current().action_failed(err.message()))
            }
        }
    }

    /// Moves through history and loads the recalled line into the live edit
    /// buffer. Returns whether the cursor moved.
    pub fn navigate_history(&mut self, direction: Direction) -> bool {
        let before = self.history.cursor();
        let recalled = self.history.navigate(direction).to_string();
        if self.history.cursor() == before {
            return false;
        }
        self.input = recalled;
        true
    }

    pub fn navigate_panel(&mut self, direction: Direction) -> Vec<EngineEvent> {
        if self.panel.paginate(direction) {
            vec![self.panel_changed()]
        } else {
            Vec::new()
        }
    }

    pub fn select_page(&mut self, index: usize) -> Vec<EngineEvent> {
        if self.panel.select_page(index) {
            vec![self.panel_changed()]
        } else {
            Vec::new()
        }
    }

    pub fn dismiss_panel(&mut self) -> Vec<EngineEvent> {
        if self.panel.dismiss() {
            vec![self.panel_changed()]
        } else {
            Vec::new()
        }
    }

    /// Labels of the commands offered as buttons, in the active locale.
    pub fn suggestions<'a>(&'a self, session: &Session) -> Vec<&'a str> {
        self.registry
            .listed()
            .filter(|descriptor| descriptor.visual)
            .map(|descriptor| session.locale().alias(&descriptor.name))
            .collect()
    }

    pub fn help_text(&self, locale: Locale) -> String {
        let mut lines = vec![
            locale.help_header().to_string(),
            format!("- {CLEAR_COMMAND}: {}", locale.clear_description()),
            format!("- {}: {}", locale.alias(HELP_COMMAND), locale.help_description()),
        ];
        lines.extend(self.registry.listed().map(|descriptor| {
            format!(
                "- {}: {}",
                locale.alias(&descriptor.name),
                descriptor.description_for(locale)
            )
        }));
        lines.join("\n")
    }

    fn panel_changed(&self) -> EngineEvent {
        EngineEvent::PanelChanged {
            panel: self.panel.clone(),
        }
    }
}

/// Text carried by a caught panic, for the failure reply.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "command panicked".to_string()
    }
}

/// A panel with nothing in it cannot render, so it becomes a message.
fn downgrade_empty(result: CommandResult, locale: Locale) -> CommandResult {
    match result {
        CommandResult::Visual(payload) if payload.is_empty() => {
            debug!(kind = payload.kind().as_str(), "empty panel downgraded to text");
            CommandResult::Text(locale.nothing_to_display(payload.kind()))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests;
