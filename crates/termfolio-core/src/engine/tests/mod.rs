use pretty_assertions::assert_eq;

pub(super) use super::CommandEngine;
pub(super) use crate::actions::Direction;
pub(super) use crate::actions::TerminalAction;
pub(super) use crate::builtins::register_shell_commands;
pub(super) use crate::error::ActionError;
pub(super) use crate::events::EngineEvent;
pub(super) use crate::events::HostRequest;
pub(super) use crate::events::TranscriptStyle;
pub(super) use crate::locale::Locale;
pub(super) use crate::model::AboutInfo;
pub(super) use crate::model::CommandResult;
pub(super) use crate::model::Experience;
pub(super) use crate::model::PanelKind;
pub(super) use crate::model::PanelPayload;
pub(super) use crate::model::Project;
pub(super) use crate::panel::PanelState;
pub(super) use crate::registry::CommandDescriptor;
pub(super) use crate::registry::CommandRegistry;
pub(super) use crate::session::Session;

mod dispatch;
mod panel_navigation;

fn project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        title: id.to_uppercase(),
        description: format!("{id} description"),
        technologies: vec!["Rust".to_string()],
        image_url: None,
        demo_url: None,
        code_url: None,
    }
}

fn experience(count: usize) -> Vec<Experience> {
    (0..count)
        .map(|index| Experience {
            title: format!("Role {index}"),
            company: "Acme".to_string(),
            period: format!("{} - {}", 2018 + index, 2019 + index),
            responsibilities: vec!["Shipping".to_string()],
        })
        .collect()
}

fn about() -> AboutInfo {
    AboutInfo {
        name: "Visitor Host".to_string(),
        title: "Engineer".to_string(),
        bio: "Builds things.".to_string(),
        photo: "me.png".to_string(),
    }
}

/// Shell built-ins plus a small fixture content set: `projects [id]`,
/// `experience`, `about`, `empty`, `boom`, `crash` and `download`.
fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_shell_commands(&mut registry);

    let catalog = vec![project("automata"), project("portfolio")];
    registry.register(
        CommandDescriptor::new("projects", "List projects", move |args, _| {
            match args.first() {
                None => Ok(PanelPayload::Project(catalog.clone()).into()),
                Some(id) => match catalog.iter().find(|project| &project.id == id) {
                    Some(project) => Ok(PanelPayload::Project(vec![project.clone()]).into()),
                    None => Ok(CommandResult::text(format!("Project \"{id}\" not found."))),
                },
            }
        })
        .visual(),
    );
    registry.register(
        CommandDescriptor::new("experience", "Work history", |_, _| {
            Ok(PanelPayload::Experience(experience(4)).into())
        })
        .visual(),
    );
    registry.register(
        CommandDescriptor::new("about", "About me", |_, _| {
            Ok(PanelPayload::About(about()).into())
        })
        .visual(),
    );
    registry.register(CommandDescriptor::new("empty", "Nothing yet", |_, _| {
        Ok(PanelPayload::Project(Vec::new()).into())
    }));
    registry.register(CommandDescriptor::new("boom", "Always fails", |_, session| {
        session.request(HostRequest::DownloadResume);
        Err(ActionError::new("disk on fire"))
    }));
    registry.register(CommandDescriptor::new("crash", "Panics", |_, session| {
        session.request(HostRequest::Reboot);
        let items: Vec<Project> = Vec::new();
        Ok(CommandResult::text(items[3].title.clone()))
    }));
    registry.register(CommandDescriptor::new("download", "Resume", |_, session| {
        session.request(HostRequest::DownloadResume);
        Ok(CommandResult::text("Downloading resume..."))
    }));
    registry
}

fn engine() -> (CommandEngine, Session) {
    (CommandEngine::new(registry()), Session::in_memory())
}

fn submit(engine: &mut CommandEngine, session: &mut Session, line: &str) -> Vec<EngineEvent> {
    engine.dispatch(session, TerminalAction::Execute(line.to_string()))
}

/// The result carried by the trailing `CommandExecuted` event.
fn executed(events: &[EngineEvent]) -> &CommandResult {
    match events.last() {
        Some(EngineEvent::CommandExecuted { result, .. }) => result,
        other => panic!("expected CommandExecuted last, got {other:?}"),
    }
}

fn plain_text(events: &[EngineEvent]) -> Vec<&str> {
    events
        .iter()
        .filter_map(|event| match event {
            EngineEvent::TranscriptAppend {
                text,
                style: TranscriptStyle::Plain,
            } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

fn assert_panel_invariant(panel: &PanelState) {
    match panel {
        PanelState::Empty => assert_eq!(panel.page(), 0),
        PanelState::Showing { payload, page } => {
            assert!(!payload.is_empty());
            if payload.kind() == PanelKind::Experience {
                assert!(*page < payload.len());
            } else {
                assert_eq!(*page, 0);
            }
        }
    }
}
