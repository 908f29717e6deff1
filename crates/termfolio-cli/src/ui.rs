use std::io;
use std::time::Duration;
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Terminal;

use termfolio_core::boot::{BootScript, Reveal};
use termfolio_core::color::{Color as ThemeColor, Rgb};
use termfolio_core::config::{BootConfig, Config};
use termfolio_core::theme::Palette;
use termfolio_core::{
    CommandEngine, Direction, EngineEvent, HostRequest, Locale, PanelPayload, PanelState,
    Session, TerminalAction, TranscriptStyle, CLEAR_COMMAND,
};
use tracing::{debug, info, trace};

const TICK: Duration = Duration::from_millis(250);
const SKILL_BAR_WIDTH: usize = 20;

struct TuiGuard;

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    }
}

pub fn run(mut app: App) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
    let _guard = TuiGuard; // restores the terminal on exit or panic

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run_app(&mut terminal, &mut app).map_err(|e| e.into())
}

struct TranscriptLine {
    text: String,
    style: TranscriptStyle,
}

/// Host-side state around the engine: what the transcript shows and which
/// suggestion button Tab is on.
pub struct App {
    engine: CommandEngine,
    session: Session,
    config: Config,
    script: BootScript,
    transcript: Vec<TranscriptLine>,
    suggestion: Option<usize>,
    reboot: bool,
    quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Engine(TerminalAction),
    CycleSuggestion,
    ToggleLocale,
    Quit,
}

impl App {
    pub fn new(
        engine: CommandEngine,
        session: Session,
        config: Config,
        script: BootScript,
    ) -> Self {
        let mut app = Self {
            engine,
            session,
            config,
            script,
            transcript: Vec::new(),
            suggestion: None,
            reboot: false,
            quit: false,
        };
        app.reset_transcript();
        app
    }

    fn palette(&self) -> UiPalette {
        palette_for(&self.session.theme().palette())
    }

    fn reset_transcript(&mut self) {
        self.transcript.clear();
        self.suggestion = None;
        let banner = format!(
            "{}\n{}",
            self.config.terminal.initial_message, self.config.terminal.tip
        );
        self.push(&banner, TranscriptStyle::Notice);
    }

    fn push(&mut self, text: &str, style: TranscriptStyle) {
        self.transcript.extend(text.split('\n').map(|line| TranscriptLine {
            text: line.to_string(),
            style,
        }));
    }

    fn handle(&mut self, input: Input) {
        match input {
            Input::Quit => self.quit = true,
            Input::ToggleLocale => {
                let locale = self.session.toggle_locale();
                let events = self.session.take_events();
                self.apply(events);
                self.push(&locale.locale_changed(), TranscriptStyle::Notice);
            }
            Input::CycleSuggestion => {
                let labels = self.engine.suggestions(&self.session);
                if labels.is_empty() {
                    return;
                }
                let next = self.suggestion.map_or(0, |index| (index + 1) % labels.len());
                let label = labels[next].to_string();
                self.suggestion = Some(next);
                self.engine
                    .dispatch(&mut self.session, TerminalAction::SetInput(label));
            }
            Input::Engine(action) => {
                self.suggestion = None;
                let events = self.engine.dispatch(&mut self.session, action);
                self.apply(events);
            }
        }
    }

    fn apply(&mut self, events: Vec<EngineEvent>) {
        for event in events {
            trace!(
                event = %serde_json::to_string(&event).unwrap_or_default(),
                "engine event"
            );
            match event {
                EngineEvent::TranscriptAppend { text, style } => self.push(&text, style),
                EngineEvent::TranscriptClear => self.transcript.clear(),
                EngineEvent::ThemeChanged { theme } => debug!(theme = theme.name, "theme applied"),
                EngineEvent::LocaleChanged { locale } => {
                    self.suggestion = None;
                    debug!(locale = %locale, "locale applied");
                }
                EngineEvent::HostRequest {
                    request: HostRequest::DownloadResume,
                } => {
                    let locale = self.session.locale().current();
                    let notice = resume_notice(locale, self.config.terminal.resume_url.as_deref());
                    self.push(&notice, TranscriptStyle::Notice);
                }
                EngineEvent::HostRequest {
                    request: HostRequest::Reboot,
                } => self.reboot = true,
                EngineEvent::PanelChanged { .. } | EngineEvent::CommandExecuted { .. } => {}
            }
        }
    }
}

fn resume_notice(locale: Locale, url: Option<&str>) -> String {
    match (locale, url) {
        (Locale::En, Some(url)) => format!("Resume: {url}"),
        (Locale::Pt, Some(url)) => format!("Currículo: {url}"),
        (Locale::En, None) => "No resume file is configured.".to_string(),
        (Locale::Pt, None) => "Nenhum arquivo de currículo configurado.".to_string(),
    }
}

fn map_key(key: KeyEvent) -> Option<Input> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let input = match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => Input::Quit,
        KeyCode::Char('l') if ctrl => Input::Engine(TerminalAction::Execute(CLEAR_COMMAND.to_string())),
        KeyCode::Char('u') if ctrl => Input::Engine(TerminalAction::SetInput(String::new())),
        KeyCode::Char(digit @ '1'..='9') if alt => {
            let index = digit as usize - '1' as usize;
            Input::Engine(TerminalAction::SelectPage(index))
        }
        KeyCode::Char(_) if ctrl || alt => return None,
        KeyCode::Char(ch) => Input::Engine(TerminalAction::InputChar(ch)),
        KeyCode::Backspace => Input::Engine(TerminalAction::InputBackspace),
        KeyCode::Enter => Input::Engine(TerminalAction::Submit),
        KeyCode::Up => Input::Engine(TerminalAction::NavigateHistory(Direction::Backward)),
        KeyCode::Down => Input::Engine(TerminalAction::NavigateHistory(Direction::Forward)),
        KeyCode::Left => Input::Engine(TerminalAction::NavigatePanel(Direction::Backward)),
        KeyCode::Right => Input::Engine(TerminalAction::NavigatePanel(Direction::Forward)),
        KeyCode::Esc => Input::Engine(TerminalAction::DismissPanel),
        KeyCode::Tab => Input::CycleSuggestion,
        KeyCode::F(2) => Input::ToggleLocale,
        _ => return None,
    };
    Some(input)
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(map_key(*key), Some(Input::Quit))
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        let palette = app.palette();
        if !play_boot(terminal, &app.script, &app.config.boot, palette)? {
            return Ok(());
        }
        app.reboot = false;
        app.reset_transcript();

        while !app.quit && !app.reboot {
            terminal.draw(|f| draw(f, app))?;

            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if let Some(input) = map_key(key) {
                        app.handle(input);
                    }
                }
            }
        }

        if app.quit {
            return Ok(());
        }
        info!("rebooting");
        app.engine.dispatch(&mut app.session, TerminalAction::DismissPanel);
    }
}

#[derive(Debug, Default)]
struct BootView {
    name: Option<String>,
    log: Vec<String>,
}

impl BootView {
    fn apply(&mut self, reveal: Reveal) {
        match reveal {
            Reveal::Name(name) => self.name = Some(name),
            Reveal::HideName => {
                self.name = None;
                self.log.push(String::new());
            }
            Reveal::Char(ch) => match self.log.last_mut() {
                Some(line) => line.push(ch),
                None => self.log.push(ch.to_string()),
            },
            Reveal::LineBreak => self.log.push(String::new()),
            Reveal::ShowTerminal => {}
        }
    }
}

/// Plays the boot reveal. Any key skips it; returns false if the visitor
/// quit instead.
fn play_boot<B: Backend>(
    terminal: &mut Terminal<B>,
    script: &BootScript,
    config: &BootConfig,
    palette: UiPalette,
) -> io::Result<bool> {
    let mut view = BootView::default();
    for step in script.reveal(config) {
        if let Some(key) = wait_for_key(step.wait)? {
            debug!("boot skipped");
            return Ok(!is_quit(&key));
        }
        view.apply(step.reveal);
        terminal.draw(|f| draw_boot(f, &view, palette))?;
    }
    Ok(true)
}

fn wait_for_key(wait: Duration) -> io::Result<Option<KeyEvent>> {
    let deadline = Instant::now() + wait;
    loop {
        let left = deadline.saturating_duration_since(Instant::now());
        if left.is_zero() {
            return Ok(None);
        }
        if event::poll(left)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key));
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UiPalette {
    background: Color,
    foreground: Color,
    prompt: Color,
    accent: Color,
    accent_hover: Color,
    input_background: Color,
    accent_transparent: Color,
    border_light: Color,
}

fn palette_for(palette: &Palette) -> UiPalette {
    let background = palette.background.rgb();
    let convert = |color: ThemeColor| to_tui(color, background);
    UiPalette {
        background: convert(palette.background),
        foreground: convert(palette.foreground),
        prompt: convert(palette.prompt),
        accent: convert(palette.accent),
        accent_hover: convert(palette.accent_hover),
        input_background: convert(palette.input_background),
        accent_transparent: convert(palette.accent_transparent),
        border_light: convert(palette.border_light),
    }
}

/// Terminals have no alpha channel, so translucent colours are blended over
/// the background.
fn to_tui(color: ThemeColor, background: Rgb) -> Color {
    let alpha = color.alpha();
    let rgb = color.rgb();
    let blend = |fg: u8, bg: u8| {
        (f32::from(fg) * alpha + f32::from(bg) * (1.0 - alpha)).round() as u8
    };
    Color::Rgb(
        blend(rgb.r, background.r),
        blend(rgb.g, background.g),
        blend(rgb.b, background.b),
    )
}

fn text_style(palette: UiPalette, crt: bool) -> Style {
    let style = Style::default().fg(palette.foreground).bg(palette.background);
    if crt {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

fn draw_boot(f: &mut ratatui::Frame, view: &BootView, palette: UiPalette) {
    let area = f.area();
    let style = text_style(palette, true);
    f.render_widget(Block::default().style(style), area);

    if let Some(name) = &view.name {
        let rows = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Percentage(45),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);
        let title = Paragraph::new(name.as_str())
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(title, rows[1]);
        return;
    }

    let visible = usize::from(area.height);
    let skip = view.log.len().saturating_sub(visible);
    let lines: Vec<Line> = view
        .log
        .iter()
        .skip(skip)
        .map(|line| Line::from(line.as_str()))
        .collect();
    f.render_widget(Paragraph::new(lines).style(style), area);
}

fn draw(f: &mut ratatui::Frame, app: &App) {
    let palette = app.palette();
    let crt = app.config.terminal.crt_effect;
    let area = f.area();
    f.render_widget(Block::default().style(text_style(palette, false)), area);

    let panel_height = if app.engine.panel().is_showing() {
        area.height / 2
    } else {
        0
    };
    let suggestions_height = u16::from(app.config.terminal.show_suggestions);
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(panel_height),
            Constraint::Length(suggestions_height),
        ])
        .split(area);

    render_transcript(f, chunks[0], app, palette, crt);
    let locale = app.session.locale().current();
    if let PanelState::Showing { payload, page } = app.engine.panel() {
        render_panel(f, chunks[1], payload, *page, locale, palette, crt);
    }
    if app.config.terminal.show_suggestions {
        render_suggestions(f, chunks[2], app, palette);
    }
}

fn wrapped_rows(width: usize, columns: u16) -> usize {
    width.max(1).div_ceil(usize::from(columns.max(1)))
}

fn render_transcript(
    f: &mut ratatui::Frame,
    area: Rect,
    app: &App,
    palette: UiPalette,
    crt: bool,
) {
    let base = text_style(palette, crt);
    let prompt_style = base.fg(palette.prompt);
    let prompt = app.engine.prompt();

    let mut lines: Vec<Line> = app
        .transcript
        .iter()
        .map(|line| match line.style {
            TranscriptStyle::Plain => Line::from(Span::styled(line.text.as_str(), base)),
            TranscriptStyle::Notice => Line::from(Span::styled(
                line.text.as_str(),
                base.fg(palette.accent_hover).add_modifier(Modifier::ITALIC),
            )),
            TranscriptStyle::CommandEcho => match line.text.strip_prefix(prompt) {
                Some(rest) => Line::from(vec![
                    Span::styled(prompt, prompt_style),
                    Span::styled(rest, base),
                ]),
                None => Line::from(Span::styled(line.text.as_str(), prompt_style)),
            },
        })
        .collect();
    lines.push(Line::from(vec![
        Span::styled(prompt, prompt_style),
        Span::styled(" ", base),
        Span::styled(app.engine.input(), base),
        Span::styled("█", base),
    ]));

    let columns = area.width.saturating_sub(2);
    let rows: usize = lines.iter().map(|line| wrapped_rows(line.width(), columns)).sum();
    let visible = usize::from(area.height.saturating_sub(2));
    let scroll = u16::try_from(rows.saturating_sub(visible)).unwrap_or(u16::MAX);

    let title = format!(
        " termfolio | {} | {} ",
        app.session.theme().active().name,
        app.session.locale().current().code()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border_light))
        .style(Style::default().bg(palette.background))
        .title(title);
    let p = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(p, area);
}

fn render_panel(
    f: &mut ratatui::Frame,
    area: Rect,
    payload: &PanelPayload,
    page: usize,
    locale: Locale,
    palette: UiPalette,
    crt: bool,
) {
    let kind = payload.kind();
    let label = locale.panel_label(kind);
    let title = if kind.is_paginated() {
        format!(" {label} {}/{}  <- -> ", page + 1, payload.len())
    } else {
        format!(" {label} ")
    };
    let base = text_style(palette, crt).bg(palette.input_background);
    let heading = base.fg(palette.accent_hover).add_modifier(Modifier::BOLD);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(base)
        .title(title);
    let p = Paragraph::new(panel_lines(payload, page, base, heading))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(p, area);
}

fn skill_bar(level: u8, width: usize) -> String {
    let filled = (usize::from(level.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn panel_lines(
    payload: &PanelPayload,
    page: usize,
    base: Style,
    heading: Style,
) -> Vec<Line<'static>> {
    let text = |value: String| Line::from(Span::styled(value, base));
    let head = |value: String| Line::from(Span::styled(value, heading));
    let mut lines = Vec::new();
    match payload {
        PanelPayload::Project(projects) => {
            for project in projects {
                lines.push(head(format!("{} [{}]", project.title, project.id)));
                lines.push(text(project.description.clone()));
                lines.push(text(format!("> {}", project.technologies.join(", "))));
                for url in [&project.demo_url, &project.code_url].into_iter().flatten() {
                    lines.push(text(format!("  {url}")));
                }
                lines.push(Line::default());
            }
        }
        PanelPayload::Skills(categories) => {
            for category in categories {
                lines.push(head(category.name.clone()));
                for skill in &category.skills {
                    lines.push(text(format!(
                        "  {:<18} {} {:>3}%",
                        skill.name,
                        skill_bar(skill.level, SKILL_BAR_WIDTH),
                        skill.level
                    )));
                }
                lines.push(Line::default());
            }
        }
        PanelPayload::About(about) => {
            lines.push(head(about.name.clone()));
            lines.push(text(about.title.clone()));
            lines.push(Line::default());
            lines.push(text(about.bio.clone()));
        }
        PanelPayload::Experience(roles) => {
            if let Some(role) = roles.get(page) {
                lines.push(head(role.title.clone()));
                lines.push(text(format!("{} | {}", role.company, role.period)));
                lines.push(Line::default());
                lines.extend(role.responsibilities.iter().map(|item| text(format!("- {item}"))));
            }
        }
        PanelPayload::Contact(contact) => {
            lines.push(text(format!("email:    {}", contact.email)));
            lines.push(text(format!("linkedin: {}", contact.linkedin)));
            lines.push(text(format!("github:   {}", contact.github)));
            lines.push(text(format!("website:  {}", contact.website)));
            lines.push(Line::default());
            lines.push(head(contact.message.clone()));
        }
    }
    lines
}

fn render_suggestions(f: &mut ratatui::Frame, area: Rect, app: &App, palette: UiPalette) {
    let idle = Style::default().fg(palette.accent).bg(palette.accent_transparent);
    let selected = Style::default()
        .fg(palette.background)
        .bg(palette.accent)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    for (index, label) in app.engine.suggestions(&app.session).into_iter().enumerate() {
        let style = if app.suggestion == Some(index) {
            selected
        } else {
            idle
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::styled(" ", Style::default().bg(palette.background)));
    }
    spans.push(Span::styled(
        format!("F2: {}", app.session.locale().current().toggled().code()),
        Style::default().fg(palette.border_light).bg(palette.background),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
