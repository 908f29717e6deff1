//! Engine and built-in command strings, per locale.

use crate::locale::Locale;
use crate::model::PanelKind;

impl Locale {
    pub fn command_not_found(self) -> &'static str {
        match self {
            Self::En => "Command not found. Type \"help\" for available commands.",
            Self::Pt => "Comando não encontrado. Digite \"ajuda\" para ver os comandos disponíveis.",
        }
    }

    pub fn action_failed(self, message: &str) -> String {
        match self {
            Self::En => format!("Error executing command: {message}"),
            Self::Pt => format!("Erro ao executar o comando: {message}"),
        }
    }

    pub fn panel_label(self, kind: PanelKind) -> &'static str {
        match (self, kind) {
            (Self::En, kind) => kind.as_str(),
            (Self::Pt, PanelKind::Project) => "projeto",
            (Self::Pt, PanelKind::Skills) => "habilidades",
            (Self::Pt, PanelKind::About) => "sobre",
            (Self::Pt, PanelKind::Experience) => "experiência",
            (Self::Pt, PanelKind::Contact) => "contato",
        }
    }

    pub fn displaying(self, kind: PanelKind) -> String {
        let label = self.panel_label(kind);
        match self {
            Self::En => format!("Displaying {label} information..."),
            Self::Pt => format!("Exibindo informações de {label}..."),
        }
    }

    pub fn nothing_to_display(self, kind: PanelKind) -> String {
        let label = self.panel_label(kind);
        match self {
            Self::En => format!("No {label} information available."),
            Self::Pt => format!("Nenhuma informação de {label} disponível."),
        }
    }

    pub fn help_header(self) -> &'static str {
        match self {
            Self::En => "Available commands:",
            Self::Pt => "Comandos disponíveis:",
        }
    }

    pub fn clear_description(self) -> &'static str {
        match self {
            Self::En => "Clear the terminal",
            Self::Pt => "Limpa o terminal",
        }
    }

    pub fn help_description(self) -> &'static str {
        match self {
            Self::En => "Display this help message",
            Self::Pt => "Exibe esta mensagem de ajuda",
        }
    }

    pub fn visitor(self) -> &'static str {
        match self {
            Self::En => "visitor (Guest User)",
            Self::Pt => "visitante (Usuário Convidado)",
        }
    }

    pub fn theme_list_header(self) -> &'static str {
        match self {
            Self::En => "Available themes:",
            Self::Pt => "Temas disponíveis:",
        }
    }

    pub fn theme_changed(self, name: &str) -> String {
        match self {
            Self::En => format!("Theme changed to {name}"),
            Self::Pt => format!("Tema alterado para {name}"),
        }
    }

    pub fn theme_not_found(self, name: &str) -> String {
        match self {
            Self::En => {
                format!("Theme \"{name}\" not found. Use \"theme list\" to see available themes.")
            }
            Self::Pt => {
                format!("Tema \"{name}\" não encontrado. Use \"tema list\" para ver os temas disponíveis.")
            }
        }
    }

    /// Confirmation phrased in the locale just switched to.
    pub fn locale_changed(self) -> String {
        match self {
            Self::En => format!("Language changed to {}", self.label()),
            Self::Pt => format!("Idioma alterado para {}", self.label()),
        }
    }

    pub fn locale_unsupported(self, code: &str) -> String {
        let supported = supported_codes();
        match self {
            Self::En => format!("Language \"{code}\" is not supported. Available: {supported}"),
            Self::Pt => format!("Idioma \"{code}\" não é suportado. Disponíveis: {supported}"),
        }
    }

    pub fn locale_status(self) -> String {
        let supported = supported_codes();
        match self {
            Self::En => format!(
                "Current language: {} ({}). Available: {supported}\nUsage: language <code> | language toggle",
                self.label(),
                self.code()
            ),
            Self::Pt => format!(
                "Idioma atual: {} ({}). Disponíveis: {supported}\nUso: idioma <código> | idioma toggle",
                self.label(),
                self.code()
            ),
        }
    }
}

fn supported_codes() -> String {
    Locale::ALL
        .iter()
        .map(|locale| locale.code())
        .collect::<Vec<_>>()
        .join(", ")
}
