use serde::Deserialize;
use serde::Serialize;

use crate::engine::DEFAULT_PROMPT;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub terminal: TerminalConfig,
    pub boot: BootConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            terminal: TerminalConfig::default(),
            boot: BootConfig::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TerminalConfig {
    pub prompt: String,
    pub initial_message: String,
    pub tip: String,
    pub crt_effect: bool,
    pub show_suggestions: bool,
    /// Where `download` points the visitor.
    pub resume_url: Option<String>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            initial_message: "Terminal Recovery Mode [Version 1.0]\nType 'help' for available commands."
                .to_string(),
            tip: "Tip: Press Tab to cycle the command buttons below or type \"projects\" to view portfolio"
                .to_string(),
            crt_effect: true,
            show_suggestions: true,
            resume_url: None,
        }
    }
}

/// Pacing of the boot reveal, in milliseconds.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BootConfig {
    pub enabled: bool,
    /// Before the name first appears.
    pub initial_delay_ms: u64,
    /// Between boot messages.
    pub message_delay_ms: u64,
    /// Per typed character; fractional values are allowed.
    pub typing_speed_ms: f64,
    /// After the last message, before the terminal shows.
    pub final_delay_ms: u64,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            initial_delay_ms: 2200,
            message_delay_ms: 100,
            typing_speed_ms: 10.0,
            final_delay_ms: 1000,
        }
    }
}

impl BootConfig {
    /// Near-instant pacing for development builds.
    pub fn fast() -> Self {
        Self {
            enabled: true,
            initial_delay_ms: 100,
            message_delay_ms: 20,
            typing_speed_ms: 0.5,
            final_delay_ms: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{"boot": {"enabled": false}}"#)
            .expect("config parses");
        assert!(!config.boot.enabled);
        assert_eq!(config.boot.initial_delay_ms, 2200);
        assert_eq!(config.terminal, TerminalConfig::default());
        assert_eq!(config.terminal.prompt, "visitor@rmf:~$");
    }
}
