use serde::Serialize;

use crate::locale::Locale;
use crate::model::CommandResult;
use crate::panel::PanelState;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptStyle {
    Plain,
    CommandEcho,
    Notice,
}

/// Side effects the host performs on the engine's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HostRequest {
    DownloadResume,
    Reboot,
}

/// What the rendering layer is told after each engine input, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    TranscriptAppend {
        text: String,
        style: TranscriptStyle,
    },
    TranscriptClear,
    PanelChanged {
        panel: PanelState,
    },
    ThemeChanged {
        theme: &'static Theme,
    },
    LocaleChanged {
        locale: Locale,
    },
    HostRequest {
        request: HostRequest,
    },
    CommandExecuted {
        command: String,
        result: CommandResult,
    },
}

impl EngineEvent {
    pub fn append(text: impl Into<String>, style: TranscriptStyle) -> Self {
        Self::TranscriptAppend {
            text: text.into(),
            style,
        }
    }
}
