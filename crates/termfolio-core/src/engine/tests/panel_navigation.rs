use super::*;
use pretty_assertions::assert_eq;

fn page_after(engine: &mut CommandEngine, session: &mut Session, direction: Direction) -> usize {
    engine.dispatch(session, TerminalAction::NavigatePanel(direction));
    assert_panel_invariant(engine.panel());
    engine.panel().page()
}

#[test]
fn experience_pagination_clamps() {
    let (mut engine, mut session) = engine();
    submit(&mut engine, &mut session, "experience");
    assert_eq!(engine.panel().page(), 0);

    assert_eq!(page_after(&mut engine, &mut session, Direction::Backward), 0);
    let pages: Vec<usize> = (0..4)
        .map(|_| page_after(&mut engine, &mut session, Direction::Forward))
        .collect();
    assert_eq!(pages, vec![1, 2, 3, 3]);
}

#[test]
fn page_moves_report_panel_changes_only_when_moving() {
    let (mut engine, mut session) = engine();
    submit(&mut engine, &mut session, "experience");

    assert!(engine.navigate_panel(Direction::Backward).is_empty());
    let events = engine.navigate_panel(Direction::Forward);
    assert!(matches!(
        events.as_slice(),
        [EngineEvent::PanelChanged {
            panel: PanelState::Showing { page: 1, .. }
        }]
    ));
}

#[test]
fn rerunning_experience_resets_to_first_page() {
    let (mut engine, mut session) = engine();
    submit(&mut engine, &mut session, "experience");
    engine.dispatch(&mut session, TerminalAction::SelectPage(3));
    assert_eq!(engine.panel().page(), 3);

    submit(&mut engine, &mut session, "experience");
    assert_eq!(engine.panel().page(), 0);
}

#[test]
fn navigation_is_ignored_for_other_panels() {
    let (mut engine, mut session) = engine();
    assert!(engine.navigate_panel(Direction::Forward).is_empty());

    submit(&mut engine, &mut session, "projects");
    assert!(engine.navigate_panel(Direction::Forward).is_empty());
    assert!(engine.select_page(1).is_empty());
    assert_eq!(engine.panel().page(), 0);
}

#[test]
fn dismiss_closes_panel_once() {
    let (mut engine, mut session) = engine();
    submit(&mut engine, &mut session, "about");

    let events = engine.dispatch(&mut session, TerminalAction::DismissPanel);
    assert_eq!(
        events,
        vec![EngineEvent::PanelChanged {
            panel: PanelState::Empty
        }]
    );
    assert!(engine.dismiss_panel().is_empty());
}

#[test]
fn invariant_holds_across_mixed_inputs() {
    let (mut engine, mut session) = engine();
    let script = [
        "experience",
        "projects automata",
        "experience",
        "boom",
        "about",
        "empty",
        "experience",
        "clear",
        "experience",
    ];
    for line in script {
        submit(&mut engine, &mut session, line);
        assert_panel_invariant(engine.panel());
        for direction in [Direction::Forward, Direction::Forward, Direction::Backward] {
            engine.navigate_panel(direction);
            assert_panel_invariant(engine.panel());
        }
    }
    assert_eq!(engine.panel().kind(), Some(PanelKind::Experience));
}
