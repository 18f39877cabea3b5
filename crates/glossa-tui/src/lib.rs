// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use glossa_app::{
    Controller, Intent, PageView, RandomSource, RandomTermView, SortField, ViewEvent, ViewState,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

const POLL_INTERVAL: Duration = Duration::from_millis(120);
const STATUS_CLEAR_AFTER: Duration = Duration::from_secs(4);
const MASKED_DEFINITION: &str = "(press space to reveal the definition)";
const EMPTY_RANDOM_PANEL: &str = "press r to draw a random term";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum InputMode {
    #[default]
    Browse,
    Filter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    Intent(Intent),
    EditFilter,
    ToggleHelp,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ViewData {
    input_mode: InputMode,
    help_visible: bool,
    status_line: Option<String>,
    status_token: u64,
}

pub fn run_app<R: RandomSource>(controller: &mut Controller<R>) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();
    info!(terms = controller.collection().len(), "browser session started");

    let mut result = Ok(());
    loop {
        process_internal_events(&mut view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, controller, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = match event::poll(POLL_INTERVAL).context("poll event") {
            Ok(has_event) => has_event,
            Err(error) => {
                result = Err(error);
                break;
            }
        };
        if has_event {
            match event::read().context("read event") {
                Ok(Event::Key(key)) => {
                    if handle_key_event(controller, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Ok(_) => {}
                Err(error) => {
                    result = Err(error);
                    break;
                }
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    info!(ok = result.is_ok(), "browser session ended");
    result
}

fn process_internal_events(view_data: &mut ViewData, rx: &Receiver<InternalEvent>) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                view_data.status_line = None;
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(STATUS_CLEAR_AFTER);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    view_data.status_line = Some(message.into());
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn handle_key_event<R: RandomSource>(
    controller: &mut Controller<R>,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
            emit_status(view_data, internal_tx, "help hidden");
        }
        return false;
    }

    if view_data.input_mode == InputMode::Filter {
        handle_filter_key(controller, view_data, internal_tx, key);
        return false;
    }

    match browse_command_for_key(key) {
        Some(BrowseCommand::Quit) => true,
        Some(BrowseCommand::ToggleHelp) => {
            view_data.help_visible = true;
            false
        }
        Some(BrowseCommand::EditFilter) => {
            view_data.input_mode = InputMode::Filter;
            emit_status(view_data, internal_tx, "filter: type to search, enter to finish");
            false
        }
        Some(BrowseCommand::Intent(intent)) => {
            dispatch_intent(controller, view_data, internal_tx, intent);
            false
        }
        None => false,
    }
}

fn browse_command_for_key(key: KeyEvent) -> Option<BrowseCommand> {
    let intent = match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return Some(BrowseCommand::Quit),
        (KeyCode::Char('?'), _) => return Some(BrowseCommand::ToggleHelp),
        (KeyCode::Char('/'), _) => return Some(BrowseCommand::EditFilter),
        (KeyCode::Char('1'), _) | (KeyCode::Char('n'), KeyModifiers::NONE) => {
            Intent::SetSort(SortField::Name)
        }
        (KeyCode::Char('2'), _) | (KeyCode::Char('d'), KeyModifiers::NONE) => {
            Intent::SetSort(SortField::Description)
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => Intent::GoFirst,
        (KeyCode::Char('h'), _) | (KeyCode::Left, _) | (KeyCode::PageUp, _) => Intent::GoPrev,
        (KeyCode::Char('l'), _) | (KeyCode::Right, _) | (KeyCode::PageDown, _) => Intent::GoNext,
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => Intent::GoLast,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Intent::DrawRandom,
        (KeyCode::Char(' '), _) | (KeyCode::Char('v'), KeyModifiers::NONE) => {
            Intent::RevealDefinition
        }
        _ => return None,
    };
    Some(BrowseCommand::Intent(intent))
}

fn handle_filter_key<R: RandomSource>(
    controller: &mut Controller<R>,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let mut text = controller.state().filter_text().to_owned();
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) | (KeyCode::Esc, _) => {
            view_data.input_mode = InputMode::Browse;
            emit_status(view_data, internal_tx, "filter closed");
        }
        (KeyCode::Char('u'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            if !text.is_empty() {
                let cleared = Intent::SetFilterText(String::new());
                dispatch_intent(controller, view_data, internal_tx, cleared);
            }
        }
        (KeyCode::Backspace, _) => {
            if text.pop().is_some() {
                dispatch_intent(controller, view_data, internal_tx, Intent::SetFilterText(text));
            }
        }
        (KeyCode::Char(ch), modifiers)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            text.push(ch);
            dispatch_intent(controller, view_data, internal_tx, Intent::SetFilterText(text));
        }
        _ => {}
    }
}

fn dispatch_intent<R: RandomSource>(
    controller: &mut Controller<R>,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    intent: Intent,
) {
    let unchanged = unchanged_message(&intent, controller.state());
    let events = controller.dispatch(intent);
    debug!(events = ?events, "applied key intent");
    let message = match events.first() {
        Some(event) => Some(event_message(event, controller.state())),
        None => unchanged,
    };
    if let Some(message) = message {
        emit_status(view_data, internal_tx, message);
    }
}

fn unchanged_message(intent: &Intent, state: &ViewState) -> Option<String> {
    match intent {
        Intent::GoFirst | Intent::GoPrev => Some("already on first page".to_owned()),
        Intent::GoNext | Intent::GoLast => Some("already on last page".to_owned()),
        Intent::RevealDefinition if state.selected_random().is_some() => {
            Some("definition already shown".to_owned())
        }
        Intent::RevealDefinition => Some("draw a term first (r)".to_owned()),
        Intent::SetFilterText(_) | Intent::SetSort(_) | Intent::DrawRandom => None,
    }
}

fn event_message(event: &ViewEvent, state: &ViewState) -> String {
    match event {
        ViewEvent::FilterChanged { filtered_count: 0 } => "no terms match".to_owned(),
        ViewEvent::FilterChanged { filtered_count } => {
            format!("{filtered_count} {} match", term_noun(*filtered_count))
        }
        ViewEvent::SortChanged { field, direction } => {
            format!("sort {} {}", field.label(), direction.label())
        }
        ViewEvent::PageChanged(page) => format!("page {page}/{}", state.total_pages()),
        ViewEvent::RandomDrawn(record) => format!("drew {}", record.name),
        ViewEvent::DefinitionRevealed if state.selected_random().is_none() => {
            "draw a term first (r)".to_owned()
        }
        ViewEvent::DefinitionRevealed => "definition shown".to_owned(),
    }
}

fn term_noun(count: usize) -> &'static str {
    if count == 1 { "term" } else { "terms" }
}

fn render<R: RandomSource>(
    frame: &mut ratatui::Frame<'_>,
    controller: &Controller<R>,
    view_data: &ViewData,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let state = controller.state();
    let page = controller.page_view();

    let filter_style = if view_data.input_mode == InputMode::Filter {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let filter_bar = Paragraph::new(filter_bar_text(state.filter_text(), view_data.input_mode))
        .style(filter_style)
        .block(Block::default().title(" glossa ").borders(Borders::ALL));
    frame.render_widget(filter_bar, layout[0]);

    render_table(frame, layout[1], &page);

    frame.render_widget(Paragraph::new(footer_text(&page)), layout[2]);

    let random_panel = Paragraph::new(random_panel_text(&controller.random_view()))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" random term ").borders(Borders::ALL));
    frame.render_widget(random_panel, layout[3]);

    let status = Paragraph::new(status_text(view_data)).style(Style::default().fg(Color::Gray));
    frame.render_widget(status, layout[4]);

    if view_data.help_visible {
        let area = centered_rect(frame.area(), 60, 14);
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title(" help ").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_table(frame: &mut ratatui::Frame<'_>, area: Rect, page: &PageView<'_>) {
    let header_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(
        SortField::ALL
            .iter()
            .map(|field| Cell::from(header_label(*field, page)).style(header_style)),
    );

    let rows = page.records.iter().map(|record| {
        Row::new(vec![
            Cell::from(record.name.clone()),
            Cell::from(record.description.clone()),
        ])
    });

    let widths = [Constraint::Percentage(30), Constraint::Percentage(70)];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .title(table_title(page))
                .borders(Borders::ALL),
        );
    frame.render_widget(table, area);
}

fn filter_bar_text(filter_text: &str, mode: InputMode) -> String {
    match mode {
        InputMode::Filter => format!("/ {filter_text}_"),
        InputMode::Browse if filter_text.is_empty() => "press / to filter by name".to_owned(),
        InputMode::Browse => format!("/ {filter_text}"),
    }
}

fn header_label(field: SortField, page: &PageView<'_>) -> String {
    match page.header_indicator(field) {
        Some(direction) => format!("{} {}", field.label(), direction.indicator()),
        None => field.label().to_owned(),
    }
}

fn table_title(page: &PageView<'_>) -> String {
    format!(
        " {} {} ",
        page.filtered_count,
        term_noun(page.filtered_count)
    )
}

fn footer_text(page: &PageView<'_>) -> String {
    let prev = if page.is_first_page() { " " } else { "‹" };
    let next = if page.is_last_page() { " " } else { "›" };
    format!(
        "{prev} page {}/{} {next}  g first | h prev | l next | G last | ? help",
        page.page, page.total_pages
    )
}

fn random_panel_text(view: &RandomTermView<'_>) -> String {
    let Some(record) = view.selected else {
        return EMPTY_RANDOM_PANEL.to_owned();
    };
    let definition = view.definition().unwrap_or(MASKED_DEFINITION);
    format!("{}\n{definition}", record.name)
}

fn status_text(view_data: &ViewData) -> String {
    let mode = match view_data.input_mode {
        InputMode::Browse => "browse",
        InputMode::Filter => "filter",
    };
    match &view_data.status_line {
        Some(message) => format!("[{mode}] {message}"),
        None => format!("[{mode}]"),
    }
}

fn help_overlay_text() -> &'static str {
    "/ filter by name (enter/esc finish, ctrl+u clear)\n\
1 or n  sort by name (again to flip)\n\
2 or d  sort by description (again to flip)\n\
g/home first page | G/end last page\n\
h/left/pgup prev page | l/right/pgdn next page\n\
r draw random term | space or v reveal definition\n\
? close help | q or ctrl+q quit"
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
