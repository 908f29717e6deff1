use std::sync::Arc;

use termfolio_core::CommandDescriptor;
use termfolio_core::CommandRegistry;
use termfolio_core::CommandResult;
use termfolio_core::HostRequest;
use termfolio_core::Locale;
use termfolio_core::PanelPayload;
use tracing::debug;

use crate::provider::ContentProvider;

/// Registers the portfolio commands backed by `provider`. The visual ones go
/// in suggestion-button order.
pub fn register_portfolio_commands(
    registry: &mut CommandRegistry,
    provider: Arc<dyn ContentProvider>,
) {
    let content = Arc::clone(&provider);
    registry.register(
        CommandDescriptor::new(
            "projects",
            "View my projects (projects <id> for one)",
            move |args, session| {
                let locale = session.locale().current();
                let Some(id) = args.iter().find(|arg| !arg.is_empty()) else {
                    return Ok(PanelPayload::Project(content.projects(locale)).into());
                };
                Ok(match content.project(locale, id) {
                    Some(project) => PanelPayload::Project(vec![project]).into(),
                    None => {
                        debug!(id = %id, "unknown project requested");
                        CommandResult::text(project_not_found(locale, id))
                    }
                })
            },
        )
        .visual()
        .translated(Locale::Pt, "Veja meus projetos (projetos <id> para um só)"),
    );

    let content = Arc::clone(&provider);
    registry.register(
        CommandDescriptor::new("skills", "View my technical skills", move |_, session| {
            let locale = session.locale().current();
            Ok(PanelPayload::Skills(content.skills(locale)).into())
        })
        .visual()
        .translated(Locale::Pt, "Veja minhas habilidades técnicas"),
    );

    let content = Arc::clone(&provider);
    registry.register(
        CommandDescriptor::new("about", "Learn more about me", move |_, session| {
            let locale = session.locale().current();
            Ok(PanelPayload::About(content.about(locale)).into())
        })
        .visual()
        .translated(Locale::Pt, "Saiba mais sobre mim"),
    );

    let content = Arc::clone(&provider);
    registry.register(
        CommandDescriptor::new("experience", "View my work experience", move |_, session| {
            let locale = session.locale().current();
            Ok(PanelPayload::Experience(content.experience(locale)).into())
        })
        .visual()
        .translated(Locale::Pt, "Veja minha experiência profissional"),
    );

    let content = Arc::clone(&provider);
    registry.register(
        CommandDescriptor::new("contact", "Get my contact information", move |_, session| {
            let locale = session.locale().current();
            Ok(PanelPayload::Contact(content.contact(locale)).into())
        })
        .visual()
        .translated(Locale::Pt, "Veja minhas informações de contato"),
    );

    registry.register(
        CommandDescriptor::new("download", "Download my resume", |_, session| {
            session.request(HostRequest::DownloadResume);
            Ok(CommandResult::text(match session.locale().current() {
                Locale::En => "Downloading resume...",
                Locale::Pt => "Baixando currículo...",
            }))
        })
        .translated(Locale::Pt, "Baixe meu currículo"),
    );

    registry.register(
        CommandDescriptor::new("reboot", "Restart the system", |_, session| {
            session.request(HostRequest::Reboot);
            Ok(CommandResult::text(match session.locale().current() {
                Locale::En => "Rebooting system...",
                Locale::Pt => "Reiniciando o sistema...",
            }))
        })
        .translated(Locale::Pt, "Reinicia o sistema"),
    );

    let content = provider;
    registry.register(
        CommandDescriptor::new("launch", "Launch a project", move |args, session| {
            let id = args.first().map(String::as_str).unwrap_or_default();
            let text = match id {
                "portfolio" => "Launching portfolio...".to_string(),
                _ => match content.project(session.locale().current(), id) {
                    Some(project) if project.demo_url.is_some() => {
                        format!("Launching {}...", project.title)
                    }
                    _ => format!("launch: project not found: {id}"),
                },
            };
            Ok(CommandResult::text(text))
        })
        .translated(Locale::Pt, "Abre um projeto"),
    );
}

fn project_not_found(locale: Locale, id: &str) -> String {
    match locale {
        Locale::En => format!("Project \"{id}\" not found. Type \"projects\" to see all of them."),
        Locale::Pt => format!("Projeto \"{id}\" não encontrado. Digite \"projetos\" para ver todos."),
    }
}
