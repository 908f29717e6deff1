use serde::Serialize;
use tracing::debug;

use crate::color::Color;
use crate::error::ThemeError;
use crate::prefs::store_best_effort;
use crate::prefs::PreferenceStore;
use crate::prefs::THEME_PREF_KEY;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub foreground: Color,
    pub prompt: Color,
    pub font_family: &'static str,
}

const COURIER: &str = "Courier New, monospace";

static THEMES: [Theme; 5] = [
    Theme {
        name: "matrix",
        background: Color::hex(0x00, 0x00, 0x00),
        foreground: Color::hex(0x00, 0xff, 0x00),
        prompt: Color::hex(0x88, 0xff, 0x88),
        font_family: COURIER,
    },
    Theme {
        name: "classic",
        background: Color::hex(0x00, 0x00, 0x00),
        foreground: Color::hex(0xff, 0xff, 0xff),
        prompt: Color::hex(0xaa, 0xaa, 0xff),
        font_family: COURIER,
    },
    Theme {
        name: "amber",
        background: Color::hex(0x00, 0x00, 0x00),
        foreground: Color::hex(0xff, 0xb0, 0x00),
        prompt: Color::hex(0xff, 0x60, 0x00),
        font_family: COURIER,
    },
    Theme {
        name: "blue",
        background: Color::hex(0x00, 0x00, 0x00),
        foreground: Color::hex(0x00, 0xbf, 0xff),
        prompt: Color::hex(0xff, 0x00, 0xff),
        font_family: COURIER,
    },
    Theme {
        name: "ubuntu",
        background: Color::hex(0x30, 0x0a, 0x24),
        foreground: Color::hex(0xff, 0xff, 0xff),
        prompt: Color::hex(0xe9, 0x54, 0x20),
        font_family: "Ubuntu Mono, monospace",
    },
];

/// The fixed, closed theme catalog. The first entry is the default.
pub fn catalog() -> &'static [Theme] {
    &THEMES
}

pub fn find_theme(name: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.name == name)
}

pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}

/// Colors a rendering surface needs, all derived from one theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub prompt: Color,
    pub accent: Color,
    pub accent_hover: Color,
    pub input_background: Color,
    pub accent_transparent: Color,
    pub border_light: Color,
}

impl Palette {
    pub fn derive(theme: &Theme) -> Self {
        Self {
            background: theme.background,
            foreground: theme.foreground,
            prompt: theme.prompt,
            accent: theme.foreground,
            accent_hover: theme.foreground.adjust_brightness(20),
            input_background: theme.background.adjust_brightness(20),
            accent_transparent: theme.foreground.to_transparent(0.2),
            border_light: theme.foreground.to_transparent(0.3),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThemeStore {
    active: &'static Theme,
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self {
            active: default_theme(),
        }
    }
}

impl ThemeStore {
    /// Restores the saved theme; an unknown saved name falls back to the default.
    pub fn load(prefs: &dyn PreferenceStore) -> Self {
        let active = prefs
            .get(THEME_PREF_KEY)
            .and_then(|name| {
                let found = find_theme(&name);
                if found.is_none() {
                    debug!(name = %name, "ignoring unknown saved theme");
                }
                found
            })
            .unwrap_or_else(default_theme);
        Self { active }
    }

    pub fn active(&self) -> &'static Theme {
        self.active
    }

    pub fn palette(&self) -> Palette {
        Palette::derive(self.active)
    }

    pub fn set_theme(
        &mut self,
        name: &str,
        prefs: &mut dyn PreferenceStore,
    ) -> Result<&'static Theme, ThemeError> {
        let theme = find_theme(name).ok_or_else(|| ThemeError::NotFound {
            name: name.to_string(),
        })?;
        self.active = theme;
        store_best_effort(prefs, THEME_PREF_KEY, theme.name);
        Ok(theme)
    }
}
