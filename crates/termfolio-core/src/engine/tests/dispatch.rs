use super::*;
use pretty_assertions::assert_eq;

#[test]
fn blank_lines_do_nothing() {
    let (mut engine, mut session) = engine();
    for line in ["", "   ", "\t "] {
        assert!(submit(&mut engine, &mut session, line).is_empty());
    }
    assert!(engine.history().is_empty());
}

#[test]
fn submit_echoes_prompt_and_line() {
    let (mut engine, mut session) = engine();
    let events = submit(&mut engine, &mut session, "  echo hi there  ");

    assert_eq!(
        events.first(),
        Some(&EngineEvent::append(
            "visitor@rmf:~$ echo hi there",
            TranscriptStyle::CommandEcho
        ))
    );
    assert_eq!(plain_text(&events), vec!["hi there"]);
    assert_eq!(
        events.last(),
        Some(&EngineEvent::CommandExecuted {
            command: "echo hi there".to_string(),
            result: CommandResult::text("hi there"),
        })
    );
    assert_eq!(engine.history().iter().collect::<Vec<_>>(), vec!["echo hi there"]);
}

#[test]
fn submit_uses_live_edit_buffer_and_clears_it() {
    let (mut engine, mut session) = engine();
    for ch in "whoamiX".chars() {
        engine.dispatch(&mut session, TerminalAction::InputChar(ch));
    }
    engine.dispatch(&mut session, TerminalAction::InputBackspace);
    assert_eq!(engine.input(), "whoami");

    let events = engine.dispatch(&mut session, TerminalAction::Submit);
    assert_eq!(plain_text(&events), vec!["visitor (Guest User)"]);
    assert_eq!(engine.input(), "");
}

#[test]
fn unknown_command_is_text() {
    let (mut engine, mut session) = engine();
    let events = submit(&mut engine, &mut session, "sudo rm -rf /");
    assert_eq!(
        executed(&events),
        &CommandResult::text("Command not found. Type \"help\" for available commands.")
    );
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn clear_empties_panel_and_transcript() {
    let (mut engine, mut session) = engine();
    submit(&mut engine, &mut session, "about");
    assert!(engine.panel().is_showing());

    let events = submit(&mut engine, &mut session, "clear");
    assert!(events.contains(&EngineEvent::TranscriptClear));
    assert!(events.contains(&EngineEvent::PanelChanged {
        panel: PanelState::Empty
    }));
    assert!(!events
        .iter()
        .any(|event| matches!(event, EngineEvent::CommandExecuted { .. })));
    assert_eq!(engine.panel(), &PanelState::Empty);

    let events = submit(&mut engine, &mut session, "clear");
    assert!(events.contains(&EngineEvent::TranscriptClear));
}

#[test]
fn project_by_id_shows_single_item_panel() {
    let (mut engine, mut session) = engine();
    let events = submit(&mut engine, &mut session, "projects automata");

    assert_eq!(
        executed(&events),
        &CommandResult::Visual(PanelPayload::Project(vec![project("automata")]))
    );
    assert_eq!(engine.panel().kind(), Some(PanelKind::Project));
    assert!(events.contains(&EngineEvent::append(
        "Displaying project information...",
        TranscriptStyle::Notice
    )));
}

#[test]
fn missing_project_is_text() {
    let (mut engine, mut session) = engine();
    let events = submit(&mut engine, &mut session, "projects nope");
    let text = executed(&events).as_text().expect("text result");
    assert!(text.contains("not found"));
    assert!(!engine.panel().is_showing());
}

#[test]
fn text_result_keeps_panel() {
    let (mut engine, mut session) = engine();
    submit(&mut engine, &mut session, "about");
    submit(&mut engine, &mut session, "echo still here");
    assert_eq!(engine.panel().kind(), Some(PanelKind::About));
}

#[test]
fn empty_visual_result_is_downgraded() {
    let (mut engine, mut session) = engine();
    let events = submit(&mut engine, &mut session, "empty");
    assert_eq!(
        executed(&events),
        &CommandResult::text("No project information available.")
    );
    assert!(!engine.panel().is_showing());
}

#[test]
fn action_failure_resets_panel_and_drops_requests() {
    let (mut engine, mut session) = engine();
    submit(&mut engine, &mut session, "experience");

    let events = submit(&mut engine, &mut session, "boom");
    assert_eq!(
        executed(&events),
        &CommandResult::text("Error executing command: disk on fire")
    );
    assert!(events.contains(&EngineEvent::PanelChanged {
        panel: PanelState::Empty
    }));
    assert!(!events
        .iter()
        .any(|event| matches!(event, EngineEvent::HostRequest { .. })));
    assert_eq!(engine.panel(), &PanelState::Empty);
}

#[test]
fn panicking_action_is_contained_like_a_failure() {
    let (mut engine, mut session) = engine();
    submit(&mut engine, &mut session, "about");

    let events = submit(&mut engine, &mut session, "crash");
    let reply = executed(&events).as_text().expect("text");
    assert!(reply.starts_with("Error executing command: index out of bounds"));
    assert!(events.contains(&EngineEvent::PanelChanged {
        panel: PanelState::Empty
    }));
    assert!(!events
        .iter()
        .any(|event| matches!(event, EngineEvent::HostRequest { .. })));

    let events = submit(&mut engine, &mut session, "about");
    assert!(executed(&events).is_visual());
}

#[test]
fn host_requests_precede_command_executed() {
    let (mut engine, mut session) = engine();
    let events = submit(&mut engine, &mut session, "download");
    let tail: Vec<&EngineEvent> = events.iter().rev().take(2).collect();
    assert!(matches!(tail[0], EngineEvent::CommandExecuted { command, .. } if command == "download"));
    assert_eq!(
        tail[1],
        &EngineEvent::HostRequest {
            request: HostRequest::DownloadResume
        }
    );
}

#[test]
fn help_lists_builtins_then_registered_commands() {
    let (mut engine, mut session) = engine();
    let events = submit(&mut engine, &mut session, "help");
    let help = executed(&events).as_text().expect("text");
    let lines: Vec<&str> = help.lines().collect();

    assert_eq!(lines[0], "Available commands:");
    assert_eq!(lines[1], "- clear: Clear the terminal");
    assert_eq!(lines[2], "- help: Display this help message");
    assert_eq!(lines[3], "- echo: Print the given text");
    assert!(lines.contains(&"- projects: List projects"));
}

#[test]
fn suggestions_are_visual_commands() {
    let (engine, session) = engine();
    assert_eq!(engine.suggestions(&session), vec!["projects", "experience", "about"]);
}

#[test]
fn reserved_registrations_never_run() {
    let (mut engine, mut session) = engine();
    engine.registry_mut().register(CommandDescriptor::new("clear", "hijack", |_, _| {
        Ok(CommandResult::text("hijacked"))
    }));
    engine.registry_mut().register(CommandDescriptor::new("help", "hijack", |_, _| {
        Ok(CommandResult::text("hijacked"))
    }));

    let events = submit(&mut engine, &mut session, "help");
    assert!(executed(&events).as_text().expect("text").starts_with("Available commands:"));
    let events = submit(&mut engine, &mut session, "clear");
    assert!(plain_text(&events).is_empty());
}

#[test]
fn engine_and_session_are_send() {
    fn assert_send<T: Send>() {}
    assert_send::<CommandEngine>();
    assert_send::<Session>();
}
