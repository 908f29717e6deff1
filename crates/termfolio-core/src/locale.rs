use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::error::LocaleError;
use crate::prefs::store_best_effort;
use crate::prefs::PreferenceStore;
use crate::prefs::LOCALE_PREF_KEY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Pt];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Pt => "Português",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Pt,
            Self::Pt => Self::En,
        }
    }

    fn aliases(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::En => &[],
            Self::Pt => &PT_ALIASES,
        }
    }

    /// Display label for a canonical command name.
    pub fn alias<'a>(self, canonical: &'a str) -> &'a str {
        self.aliases()
            .iter()
            .find(|(name, _)| *name == canonical)
            .map_or(canonical, |(_, label)| *label)
    }

    /// Maps a typed token back to its canonical command name. Tokens that are
    /// not a label of this locale pass through unchanged.
    pub fn resolve<'a>(self, token: &'a str) -> &'a str {
        self.aliases()
            .iter()
            .find(|(_, label)| *label == token)
            .map_or(token, |(name, _)| *name)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::parse(code).ok_or_else(|| LocaleError::Unsupported {
            code: code.to_string(),
        })
    }
}

// canonical name -> display label
static PT_ALIASES: [(&str, &str); 13] = [
    ("help", "ajuda"),
    ("projects", "projetos"),
    ("skills", "habilidades"),
    ("about", "sobre"),
    ("experience", "experiencia"),
    ("contact", "contato"),
    ("download", "baixar"),
    ("theme", "tema"),
    ("language", "idioma"),
    ("reboot", "reiniciar"),
    ("date", "data"),
    ("whoami", "quemsou"),
    ("echo", "eco"),
];

pub type LocaleListener = Box<dyn FnMut(Locale) + Send>;

/// Active locale plus the listeners told about every effective change.
pub struct LocaleStore {
    current: Locale,
    listeners: Vec<LocaleListener>,
}

impl fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleStore")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl LocaleStore {
    pub fn new(current: Locale) -> Self {
        Self {
            current,
            listeners: Vec::new(),
        }
    }

    pub fn load(prefs: &dyn PreferenceStore) -> Self {
        let current = prefs
            .get(LOCALE_PREF_KEY)
            .and_then(|code| Locale::parse(&code))
            .unwrap_or_default();
        Self::new(current)
    }

    pub fn current(&self) -> Locale {
        self.current
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Locale) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn set_locale(
        &mut self,
        code: &str,
        prefs: &mut dyn PreferenceStore,
    ) -> Result<Locale, LocaleError> {
        let locale = code.parse::<Locale>()?;
        self.set(locale, prefs);
        Ok(locale)
    }

    pub fn set(&mut self, locale: Locale, prefs: &mut dyn PreferenceStore) {
        store_best_effort(prefs, LOCALE_PREF_KEY, locale.code());
        if locale == self.current {
            return;
        }
        debug!(from = %self.current, to = %locale, "locale changed");
        self.current = locale;
        for listener in &mut self.listeners {
            listener(locale);
        }
    }

    pub fn toggle(&mut self, prefs: &mut dyn PreferenceStore) -> Locale {
        let next = self.current.toggled();
        self.set(next, prefs);
        next
    }

    pub fn alias<'a>(&self, canonical: &'a str) -> &'a str {
        self.current.alias(canonical)
    }

    pub fn resolve<'a>(&self, token: &'a str) -> &'a str {
        self.current.resolve(token)
    }
}
