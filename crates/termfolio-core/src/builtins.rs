use chrono::Local;

use crate::error::ActionError;
use crate::locale::Locale;
use crate::model::CommandResult;
use crate::registry::CommandDescriptor;
use crate::registry::CommandRegistry;
use crate::session::Session;
use crate::theme::catalog;

/// Registers the commands every terminal has regardless of content:
/// `echo`, `date`, `whoami`, `theme`, `language` and `lang`.
pub fn register_shell_commands(registry: &mut CommandRegistry) {
    registry.register(
        CommandDescriptor::new("echo", "Print the given text", |args, _| {
            Ok(CommandResult::text(args.join(" ")))
        })
        .translated(Locale::Pt, "Imprime o texto informado"),
    );
    registry.register(
        CommandDescriptor::new("date", "Show the current date and time", |_, _| {
            let now = Local::now();
            Ok(CommandResult::text(
                now.format("%a %b %d %Y %H:%M:%S %Z").to_string(),
            ))
        })
        .translated(Locale::Pt, "Mostra a data e hora atuais"),
    );
    registry.register(
        CommandDescriptor::new("whoami", "Display current user", |_, session| {
            Ok(CommandResult::text(session.locale().current().visitor()))
        })
        .translated(Locale::Pt, "Mostra o usuário atual"),
    );
    registry.register(
        CommandDescriptor::new(
            "theme",
            "Change terminal theme (theme list | theme <name>)",
            theme_command,
        )
        .translated(Locale::Pt, "Altera o tema do terminal (tema list | tema <nome>)"),
    );
    for name in ["language", "lang"] {
        registry.register(
            CommandDescriptor::new(
                name,
                "Change language (language <code> | language toggle)",
                language_command,
            )
            .translated(Locale::Pt, "Altera o idioma (idioma <código> | idioma toggle)"),
        );
    }
}

/// Doubled spaces tokenize to empty arguments; those are skipped.
fn first_word(args: &[String]) -> Option<&str> {
    args.iter().map(String::as_str).find(|arg| !arg.is_empty())
}

fn theme_command(args: &[String], session: &mut Session) -> Result<CommandResult, ActionError> {
    let locale = session.locale().current();
    let name = match first_word(args) {
        None | Some("list") => return Ok(CommandResult::text(theme_list(session))),
        Some(name) => name,
    };
    let text = match session.set_theme(name) {
        Ok(theme) => locale.theme_changed(theme.name),
        Err(_) => locale.theme_not_found(name),
    };
    Ok(CommandResult::text(text))
}

fn theme_list(session: &Session) -> String {
    let active = session.theme().active().name;
    let mut lines = vec![session.locale().current().theme_list_header().to_string()];
    lines.extend(catalog().iter().map(|theme| {
        if theme.name == active {
            format!("- {} *", theme.name)
        } else {
            format!("- {}", theme.name)
        }
    }));
    lines.join("\n")
}

fn language_command(
    args: &[String],
    session: &mut Session,
) -> Result<CommandResult, ActionError> {
    let before = session.locale().current();
    let text = match first_word(args) {
        None => before.locale_status(),
        Some("toggle") => session.toggle_locale().locale_changed(),
        Some(code) => match session.set_locale(code) {
            Ok(locale) => locale.locale_changed(),
            Err(_) => before.locale_unsupported(code),
        },
    };
    Ok(CommandResult::text(text))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run(registry: &CommandRegistry, session: &mut Session, name: &str, args: &[&str]) -> String {
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        registry
            .resolve(name)
            .expect("registered")
            .run(&args, session)
            .expect("runs")
            .as_text()
            .expect("text result")
            .to_string()
    }

    fn shell() -> (CommandRegistry, Session) {
        let mut registry = CommandRegistry::new();
        register_shell_commands(&mut registry);
        (registry, Session::in_memory())
    }

    #[test]
    fn echo_joins_arguments() {
        let (registry, mut session) = shell();
        assert_eq!(run(&registry, &mut session, "echo", &["hello", "world"]), "hello world");
        assert_eq!(run(&registry, &mut session, "echo", &[]), "");
    }

    #[test]
    fn whoami_follows_locale() {
        let (registry, mut session) = shell();
        assert_eq!(run(&registry, &mut session, "whoami", &[]), "visitor (Guest User)");
        session.set_locale("pt").expect("pt");
        assert_eq!(
            run(&registry, &mut session, "whoami", &[]),
            "visitante (Usuário Convidado)"
        );
    }

    #[test]
    fn theme_list_marks_active_theme() {
        let (registry, mut session) = shell();
        let listing = run(&registry, &mut session, "theme", &["list"]);
        assert!(listing.starts_with("Available themes:"));
        assert!(listing.contains("- matrix *"));
        assert!(listing.contains("- ubuntu"));
    }

    #[test]
    fn theme_switch_replies_with_name() {
        let (registry, mut session) = shell();
        assert_eq!(
            run(&registry, &mut session, "theme", &["amber"]),
            "Theme changed to amber"
        );
        assert_eq!(
            run(&registry, &mut session, "theme", &["neon"]),
            "Theme \"neon\" not found. Use \"theme list\" to see available themes."
        );
        assert_eq!(session.theme().active().name, "amber");
    }

    #[test]
    fn empty_arguments_are_skipped() {
        let (registry, mut session) = shell();
        assert_eq!(
            run(&registry, &mut session, "theme", &["", "amber"]),
            "Theme changed to amber"
        );
        assert_eq!(session.theme().active().name, "amber");
        assert_eq!(
            run(&registry, &mut session, "lang", &["", "pt"]),
            "Idioma alterado para Português"
        );
        assert_eq!(session.locale().current(), Locale::Pt);
    }

    #[test]
    fn unsupported_language_replies_in_current_locale() {
        let (registry, mut session) = shell();
        session.set_locale("pt").expect("pt");
        let reply = run(&registry, &mut session, "lang", &["fr"]);
        assert!(reply.starts_with("Idioma \"fr\" não é suportado"));
        assert_eq!(session.locale().current(), Locale::Pt);
    }

    #[test]
    fn language_switch_replies_in_new_locale() {
        let (registry, mut session) = shell();
        assert_eq!(
            run(&registry, &mut session, "language", &["pt"]),
            "Idioma alterado para Português"
        );
        assert_eq!(
            run(&registry, &mut session, "language", &["toggle"]),
            "Language changed to English"
        );
    }

    #[test]
    fn date_is_not_empty() {
        let (registry, mut session) = shell();
        assert!(!run(&registry, &mut session, "date", &[]).is_empty());
    }
}
