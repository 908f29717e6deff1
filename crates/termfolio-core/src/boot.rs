//! Boot reveal pacing.
//!
//! The intro is a glitching name followed by boot messages typed one
//! character at a time. Core never sleeps: it yields [`RevealEvent`]s, each
//! carrying how long the host should wait before applying it.

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::config::BootConfig;

/// Pause after the last glitch frame before the name fades.
pub const GLITCH_SETTLE: Duration = Duration::from_millis(1000);
/// Length of the name fade-out.
pub const NAME_FADE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlitchStage {
    pub text: String,
    pub hold_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootScript {
    pub stages: Vec<GlitchStage>,
    pub messages: Vec<String>,
}

impl BootScript {
    pub fn reveal(&self, config: &BootConfig) -> RevealSequence<'_> {
        RevealSequence {
            script: self,
            pacing: Pacing::from(config),
            enabled: config.enabled,
            cursor: Cursor::Stage(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reveal {
    /// Replace the displayed name.
    Name(String),
    /// Fade the name out and bring up the boot screen.
    HideName,
    Char(char),
    LineBreak,
    ShowTerminal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealEvent {
    pub wait: Duration,
    pub reveal: Reveal,
}

#[derive(Debug, Clone, Copy)]
struct Pacing {
    initial: Duration,
    message: Duration,
    typing: Duration,
    last: Duration,
}

impl From<&BootConfig> for Pacing {
    fn from(config: &BootConfig) -> Self {
        let typing_us = (config.typing_speed_ms.max(0.0) * 1000.0).round() as u64;
        Self {
            initial: Duration::from_millis(config.initial_delay_ms),
            message: Duration::from_millis(config.message_delay_ms),
            typing: Duration::from_micros(typing_us),
            last: Duration::from_millis(config.final_delay_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Stage(usize),
    Message { line: usize, offset: usize },
    Finished,
}

/// Lazy, finite walk over a [`BootScript`]. Clone it or call
/// [`RevealSequence::restart`] to replay from the top.
#[derive(Debug, Clone)]
pub struct RevealSequence<'a> {
    script: &'a BootScript,
    pacing: Pacing,
    enabled: bool,
    cursor: Cursor,
}

impl RevealSequence<'_> {
    pub fn restart(&mut self) {
        self.cursor = Cursor::Stage(0);
    }

    /// Sum of every remaining wait.
    pub fn total_duration(&self) -> Duration {
        self.clone().map(|event| event.wait).sum()
    }

    fn stage(&mut self, index: usize) -> RevealEvent {
        let script = self.script;
        let stages = &script.stages;
        if let Some(stage) = stages.get(index) {
            let wait = match index.checked_sub(1).and_then(|prev| stages.get(prev)) {
                Some(prev) => Duration::from_millis(prev.hold_ms),
                None => self.pacing.initial,
            };
            self.cursor = Cursor::Stage(index + 1);
            return event(wait, Reveal::Name(stage.text.clone()));
        }
        let wait = match stages.last() {
            Some(last) => Duration::from_millis(last.hold_ms) + GLITCH_SETTLE,
            None => self.pacing.initial,
        };
        self.cursor = Cursor::Message { line: 0, offset: 0 };
        event(wait, Reveal::HideName)
    }

    fn message(&mut self, line: usize, offset: usize) -> RevealEvent {
        let script = self.script;
        let Some(text) = script.messages.get(line) else {
            self.cursor = Cursor::Finished;
            let wait = if script.messages.is_empty() {
                NAME_FADE
            } else {
                self.pacing.message + self.pacing.last
            };
            return event(wait, Reveal::ShowTerminal);
        };

        let wait = match (line, offset) {
            (0, 0) => NAME_FADE,
            (_, 0) => self.pacing.message,
            _ => self.pacing.typing,
        };
        match text[offset..].chars().next() {
            Some(ch) => {
                self.cursor = Cursor::Message {
                    line,
                    offset: offset + ch.len_utf8(),
                };
                event(wait, Reveal::Char(ch))
            }
            None => {
                self.cursor = Cursor::Message {
                    line: line + 1,
                    offset: 0,
                };
                event(wait, Reveal::LineBreak)
            }
        }
    }
}

impl Iterator for RevealSequence<'_> {
    type Item = RevealEvent;

    fn next(&mut self) -> Option<RevealEvent> {
        if !self.enabled {
            if self.cursor == Cursor::Finished {
                return None;
            }
            self.cursor = Cursor::Finished;
            return Some(event(Duration::ZERO, Reveal::ShowTerminal));
        }
        match self.cursor {
            Cursor::Stage(index) => Some(self.stage(index)),
            Cursor::Message { line, offset } => Some(self.message(line, offset)),
            Cursor::Finished => None,
        }
    }
}

fn event(wait: Duration, reveal: Reveal) -> RevealEvent {
    RevealEvent { wait, reveal }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn script() -> BootScript {
        BootScript {
            stages: vec![
                GlitchStage {
                    text: "N4me".to_string(),
                    hold_ms: 300,
                },
                GlitchStage {
                    text: "Name".to_string(),
                    hold_ms: 200,
                },
            ],
            messages: vec!["ok".to_string(), "né".to_string()],
        }
    }

    #[test]
    fn sequence_is_finite_and_ordered() {
        let script = script();
        let reveals: Vec<Reveal> = script
            .reveal(&BootConfig::default())
            .map(|event| event.reveal)
            .collect();
        assert_eq!(
            reveals,
            vec![
                Reveal::Name("N4me".to_string()),
                Reveal::Name("Name".to_string()),
                Reveal::HideName,
                Reveal::Char('o'),
                Reveal::Char('k'),
                Reveal::LineBreak,
                Reveal::Char('n'),
                Reveal::Char('é'),
                Reveal::LineBreak,
                Reveal::ShowTerminal,
            ]
        );
    }

    #[test]
    fn waits_follow_config() {
        let script = script();
        let config = BootConfig::default();
        let waits: Vec<u128> = script
            .reveal(&config)
            .map(|event| event.wait.as_millis())
            .collect();
        assert_eq!(
            waits,
            vec![2200, 300, 1200, 500, 10, 10, 100, 10, 10, 1100]
        );
    }

    #[test]
    fn restart_replays_from_the_top() {
        let script = script();
        let config = BootConfig::fast();
        let mut sequence = script.reveal(&config);
        let first: Vec<RevealEvent> = sequence.by_ref().collect();
        assert!(sequence.next().is_none());

        sequence.restart();
        let second: Vec<RevealEvent> = sequence.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn disabled_boot_goes_straight_to_terminal() {
        let script = script();
        let config = BootConfig {
            enabled: false,
            ..BootConfig::default()
        };
        let events: Vec<RevealEvent> = script.reveal(&config).collect();
        assert_eq!(
            events,
            vec![RevealEvent {
                wait: Duration::ZERO,
                reveal: Reveal::ShowTerminal
            }]
        );
    }

    #[test]
    fn empty_script_still_shows_terminal() {
        let script = BootScript::default();
        let reveals: Vec<Reveal> = script
            .reveal(&BootConfig::fast())
            .map(|event| event.reveal)
            .collect();
        assert_eq!(reveals, vec![Reveal::HideName, Reveal::ShowTerminal]);
    }

    #[test]
    fn total_duration_sums_waits() {
        let script = script();
        let total = script.reveal(&BootConfig::default()).total_duration();
        assert_eq!(total.as_millis(), 5440);
    }
}
