use crate::error::LocaleError;
use crate::error::ThemeError;
use crate::events::EngineEvent;
use crate::events::HostRequest;
use crate::locale::Locale;
use crate::locale::LocaleStore;
use crate::prefs::MemoryPrefs;
use crate::prefs::PreferenceStore;
use crate::theme::Theme;
use crate::theme::ThemeStore;

/// Per-visitor context shared by the engine, command actions and the host.
///
/// Theme and locale changes made through a session queue the matching
/// events; the engine drains them after each command and a host that changes
/// the session directly drains them with [`Session::take_events`].
#[derive(Debug)]
pub struct Session {
    theme: ThemeStore,
    locale: LocaleStore,
    prefs: Box<dyn PreferenceStore>,
    outbox: Vec<EngineEvent>,
}

impl Session {
    /// Restores the saved theme and locale from `prefs`.
    pub fn new(prefs: impl PreferenceStore + 'static) -> Self {
        let prefs: Box<dyn PreferenceStore> = Box::new(prefs);
        Self {
            theme: ThemeStore::load(prefs.as_ref()),
            locale: LocaleStore::load(prefs.as_ref()),
            prefs,
            outbox: Vec::new(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryPrefs::new())
    }

    pub fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    pub fn locale(&self) -> &LocaleStore {
        &self.locale
    }

    /// Registers a listener told about every effective locale change. Changes
    /// themselves go through [`Session::set_locale`] or
    /// [`Session::toggle_locale`].
    pub fn subscribe_locale(&mut self, listener: impl FnMut(Locale) + Send + 'static) {
        self.locale.subscribe(listener);
    }

    pub fn prefs(&self) -> &dyn PreferenceStore {
        self.prefs.as_ref()
    }

    pub fn set_theme(&mut self, name: &str) -> Result<&'static Theme, ThemeError> {
        let theme = self.theme.set_theme(name, self.prefs.as_mut())?;
        self.outbox.push(EngineEvent::ThemeChanged { theme });
        Ok(theme)
    }

    pub fn set_locale(&mut self, code: &str) -> Result<Locale, LocaleError> {
        let locale = code.parse::<Locale>()?;
        self.switch_locale(locale);
        Ok(locale)
    }

    pub fn toggle_locale(&mut self) -> Locale {
        let next = self.locale.current().toggled();
        self.switch_locale(next);
        next
    }

    fn switch_locale(&mut self, locale: Locale) {
        let before = self.locale.current();
        self.locale.set(locale, self.prefs.as_mut());
        if before != locale {
            self.outbox.push(EngineEvent::LocaleChanged { locale });
        }
    }

    pub fn request(&mut self, request: HostRequest) {
        self.outbox.push(EngineEvent::HostRequest { request });
    }

    /// Drops queued host requests. Theme and locale changes already took
    /// effect, so their events stay.
    pub(crate) fn discard_requests(&mut self) {
        self.outbox
            .retain(|event| !matches!(event, EngineEvent::HostRequest { .. }));
    }

    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.outbox)
    }
}
