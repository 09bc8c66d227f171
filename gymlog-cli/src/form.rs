//! Full-screen form front-end.

use anyhow::Result;
use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gymlog::{WorkoutEntry, WorkoutStore};
use log::{debug, info};
use std::cell::Cell;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const HISTORY_PAGE: u16 = 5;
const KEY_HINTS: &str =
    "Tab/Shift-Tab: move | Enter: next / press button | PgUp/PgDn: scroll history | Esc: quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Name,
    Sets,
    Reps,
    Weight,
    AddButton,
    ViewButton,
}

const FOCUS_ORDER: [Focus; 6] = [
    Focus::Name,
    Focus::Sets,
    Focus::Reps,
    Focus::Weight,
    Focus::AddButton,
    Focus::ViewButton,
];

impl Focus {
    fn field_index(self) -> Option<usize> {
        match self {
            Focus::Name => Some(0),
            Focus::Sets => Some(1),
            Focus::Reps => Some(2),
            Focus::Weight => Some(3),
            Focus::AddButton | Focus::ViewButton => None,
        }
    }

    fn position(self) -> usize {
        FOCUS_ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        FOCUS_ORDER[(self.position() + 1) % FOCUS_ORDER.len()]
    }

    fn prev(self) -> Self {
        FOCUS_ORDER[(self.position() + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len()]
    }
}

const FIELD_LABELS: [&str; 4] = ["Exercise Name", "Sets", "Reps", "Weight (kg/lbs)"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Dialog {
    Error(String),
    Success(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Continue,
    Quit,
}

pub struct WorkoutForm<'a, S: WorkoutStore> {
    store: &'a mut S,
    fields: [String; 4],
    focus: Focus,
    history: Vec<String>,
    history_scroll: u16,
    // inner area of the history pane as of the last draw
    history_area: Cell<Rect>,
    dialog: Option<Dialog>,
}

impl<'a, S: WorkoutStore> WorkoutForm<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self {
            store,
            fields: Default::default(),
            focus: Focus::Name,
            history: Vec::new(),
            history_scroll: 0,
            history_area: Cell::new(Rect::default()),
            dialog: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return FormAction::Quit;
        }

        if self.dialog.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dialog = None;
            }
            return FormAction::Continue;
        }

        match key.code {
            KeyCode::Esc => return FormAction::Quit,
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => match self.focus {
                Focus::AddButton => self.add_workout(),
                Focus::ViewButton => self.view_history(),
                _ => self.focus = self.focus.next(),
            },
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(idx) = self.focus.field_index() {
                    self.fields[idx].push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(idx) = self.focus.field_index() {
                    self.fields[idx].pop();
                }
            }
            KeyCode::PageDown => {
                self.history_scroll = self
                    .history_scroll
                    .saturating_add(HISTORY_PAGE)
                    .min(self.max_history_scroll());
            }
            KeyCode::PageUp => {
                self.history_scroll = self.history_scroll.saturating_sub(HISTORY_PAGE);
            }
            _ => {}
        }
        FormAction::Continue
    }

    fn add_workout(&mut self) {
        let [name, sets, reps, weight] = &self.fields;
        match WorkoutEntry::parse(name, sets, reps, weight) {
            Ok(entry) => {
                self.store.add(entry);
                self.fields = Default::default();
                self.focus = Focus::Name;
                self.dialog = Some(Dialog::Success("Workout added successfully!".to_string()));
                self.view_history();
            }
            Err(e) => {
                debug!("Rejected form input for {}: {}", e.field(), e);
                self.dialog = Some(Dialog::Error(e.to_string()));
            }
        }
    }

    fn view_history(&mut self) {
        self.history = self.store.list();
        self.history_scroll = 0;
    }

    fn history_text(&self) -> Paragraph<'_> {
        Paragraph::new(self.history.join("\n")).wrap(Wrap { trim: false })
    }

    /// Largest offset that still keeps the pane filled, counted in wrapped rows.
    fn max_history_scroll(&self) -> u16 {
        let area = self.history_area.get();
        let rows = if area.width == 0 {
            self.history.len().saturating_sub(1)
        } else {
            self.history_text()
                .line_count(area.width)
                .saturating_sub(area.height as usize)
        };
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

        // Header
        let header = Paragraph::new("Gym Tracking System")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        // Inputs two to a row
        let halves = [Constraint::Percentage(50), Constraint::Percentage(50)];
        let inputs: Vec<Rect> = chunks[1..3]
            .iter()
            .flat_map(|row| Layout::horizontal(halves).split(*row).to_vec())
            .collect();
        for (idx, label) in FIELD_LABELS.iter().enumerate() {
            let focused = self.focus.field_index() == Some(idx);
            let style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let input = Paragraph::new(self.fields[idx].as_str())
                .style(style)
                .block(Block::default().borders(Borders::ALL).title(*label));
            frame.render_widget(input, inputs[idx]);
        }

        let buttons = Layout::horizontal(halves).split(chunks[3]);
        for (area, focus, label) in [
            (buttons[0], Focus::AddButton, "Add Workout"),
            (buttons[1], Focus::ViewButton, "View Workout History"),
        ] {
            let style = if self.focus == focus {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let button = Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(button, area);
        }

        let history_block = Block::default()
            .borders(Borders::ALL)
            .title("Workout History");
        self.history_area.set(history_block.inner(chunks[4]));
        let history = self
            .history_text()
            .scroll((self.history_scroll, 0))
            .block(history_block);
        frame.render_widget(history, chunks[4]);

        // Footer with key hints
        let footer = Paragraph::new(KEY_HINTS)
            .style(Style::default().fg(Color::White))
            .block(Block::default().borders(Borders::ALL).title("Keys"));
        frame.render_widget(footer, chunks[5]);

        if let Some(dialog) = &self.dialog {
            let (title, message, color) = match dialog {
                Dialog::Error(message) => ("Input Error", message.as_str(), Color::Red),
                Dialog::Success(message) => ("Message", message.as_str(), Color::Green),
            };
            let area = centered(frame.area(), 60, 7);
            frame.render_widget(Clear, area);
            let popup = Paragraph::new(format!("{}\n\nPress Enter to continue", message))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title(title));
            frame.render_widget(popup, area);
        }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    area
}

pub fn run_workout_form<S: WorkoutStore>(
    mut terminal: DefaultTerminal,
    store: &mut S,
) -> Result<()> {
    info!("Form started");
    let mut form = WorkoutForm::new(store);

    loop {
        terminal.draw(|frame| form.draw(frame))?;

        if let event::Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if form.handle_key(key) == FormAction::Quit {
                info!("Form exited");
                return Ok(());
            }
        }
    }
}
