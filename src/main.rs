use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use crossterm::{event, execute, terminal};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use idea_forge::client::{self, GeminiClient, IdeaSource};
use idea_forge::config::Config;
use idea_forge::format::{DisplayLine, format_idea};
use idea_forge::session::IdeaSession;

const APP_TITLE: &str = "Startup Idea Generator";
const INDUSTRY_HINT: &str = "e.g., Food, Technology, Healthcare";
const TREND_HINT: &str = "e.g., AI, Sustainability, Remote Work";
const GENERATE_LABEL: &str = "Generate Startup Idea (Enter)";
const LOADING_LABEL: &str = "Generating your next big idea...";

#[derive(Clone, Copy, PartialEq)]
enum Focus {
    Industry,
    Trend,
}

struct App {
    session: IdeaSession,
    source: Arc<dyn IdeaSource>,
    focus: Focus,
    /// Byte offset into the focused input, always on a char boundary
    cursor: usize,
    scroll: u16,
    response_rx: Option<mpsc::UnboundedReceiver<String>>,
    should_quit: bool,
}

impl App {
    fn new(source: Arc<dyn IdeaSource>) -> Self {
        Self {
            session: IdeaSession::new(),
            source,
            focus: Focus::Industry,
            cursor: 0,
            scroll: 0,
            response_rx: None,
            should_quit: false,
        }
    }

    fn focused_input(&self) -> &String {
        match self.focus {
            Focus::Industry => &self.session.industry,
            Focus::Trend => &self.session.trend,
        }
    }

    fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            Focus::Industry => &mut self.session.industry,
            Focus::Trend => &mut self.session.trend,
        }
    }

    /// Check for a settled generation without blocking the draw loop
    fn poll_response(&mut self) {
        if let Some(rx) = &mut self.response_rx {
            match rx.try_recv() {
                Ok(outcome) => {
                    self.session.finish(outcome);
                    self.response_rx = None;
                    self.scroll = 0;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    // The task died without reporting; settle anyway so the
                    // in-flight flag cannot stay stuck
                    self.session.finish(client::ERROR_FALLBACK.to_string());
                    self.response_rx = None;
                }
            }
        }
    }

    fn trigger_generate(&mut self) {
        // begin() refuses empty input and double triggers
        if let Some(request) = self.session.begin() {
            let (tx, rx) = mpsc::unbounded_channel();
            self.response_rx = Some(rx);
            self.scroll = 0;
            let source = Arc::clone(&self.source);
            tokio::spawn(async move {
                let outcome = client::generate_idea(source.as_ref(), &request).await;
                let _ = tx.send(outcome);
            });
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match (code, modifiers) {
            (KeyCode::Esc, _) => self.should_quit = true,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => self.should_quit = true,

            (KeyCode::Tab, _) | (KeyCode::BackTab, _) => {
                self.focus = match self.focus {
                    Focus::Industry => Focus::Trend,
                    Focus::Trend => Focus::Industry,
                };
                self.cursor = self.focused_input().len();
            }

            (KeyCode::Enter, _) => self.trigger_generate(),

            (KeyCode::Backspace, _) => {
                if self.cursor > 0 {
                    let prev = prev_boundary(self.focused_input(), self.cursor);
                    self.focused_input_mut().remove(prev);
                    self.cursor = prev;
                }
            }
            (KeyCode::Delete, _) => {
                if self.cursor < self.focused_input().len() {
                    let cursor = self.cursor;
                    self.focused_input_mut().remove(cursor);
                }
            }
            (KeyCode::Left, _) => self.cursor = prev_boundary(self.focused_input(), self.cursor),
            (KeyCode::Right, _) => self.cursor = next_boundary(self.focused_input(), self.cursor),
            (KeyCode::Home, _) => self.cursor = 0,
            (KeyCode::End, _) => self.cursor = self.focused_input().len(),

            (KeyCode::PageUp, _) => self.scroll = self.scroll.saturating_sub(5),
            (KeyCode::PageDown, _) => self.scroll = self.scroll.saturating_add(5),

            (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                let cursor = self.cursor;
                self.focused_input_mut().insert(cursor, c);
                self.cursor += c.len_utf8();
            }

            _ => {}
        }
    }
}

fn prev_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().last().map(|(i, _)| i).unwrap_or(0)
}

fn next_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map(|c| pos + c.len_utf8()).unwrap_or(pos)
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;
    let source: Arc<dyn IdeaSource> = Arc::new(GeminiClient::new(&config).map_err(|e| {
        eprintln!("{}", e);
        e
    })?);

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source);
    let res = run_app(&mut terminal, &mut app).await;

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.poll_response();

        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))?
            && let event::Event::Key(key) = event::read()?
        {
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.size());

    let header = Paragraph::new(Line::from(Span::styled(
        APP_TITLE,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let inputs = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_input(
        f,
        inputs[0],
        "Industry",
        &app.session.industry,
        INDUSTRY_HINT,
        app.focus == Focus::Industry,
        app.cursor,
    );
    render_input(
        f,
        inputs[1],
        "Trend",
        &app.session.trend,
        TREND_HINT,
        app.focus == Focus::Trend,
        app.cursor,
    );

    let action = if app.session.is_generating() {
        Span::styled(
            LOADING_LABEL,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(GENERATE_LABEL, Style::default().fg(Color::Yellow))
    };
    let action = Paragraph::new(Line::from(action))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(action, chunks[2]);

    let body: Vec<Line> = if let Some(idea) = &app.session.idea {
        idea_lines(idea)
    } else if app.session.is_generating() {
        Vec::new()
    } else {
        vec![Line::from(Span::styled(
            "Fill in both fields and press Enter.",
            Style::default().fg(Color::DarkGray),
        ))]
    };
    let output = Paragraph::new(body)
        .block(Block::default().borders(Borders::ALL).title("Idea"))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(output, chunks[3]);

    let help = Paragraph::new(Line::raw(
        "Keys: Esc quit • Tab switch field • Enter generate • PgUp/PgDn scroll",
    ))
    .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(help, chunks[4]);
}

fn render_input(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    hint: &str,
    focused: bool,
    cursor: usize,
) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let content = if value.is_empty() {
        Span::styled(hint, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value)
    };
    let input = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title.to_string()),
    );
    f.render_widget(input, area);

    if focused {
        let col = value[..cursor.min(value.len())].chars().count() as u16;
        f.set_cursor(area.x + 1 + col.min(area.width.saturating_sub(2)), area.y + 1);
    }
}

/// Style classified lines the way the idea card colors them: gold headings
/// and field titles, dotted bullets, plain paragraphs
fn idea_lines(text: &str) -> Vec<Line<'static>> {
    format_idea(text)
        .into_iter()
        .map(|line| match line {
            DisplayLine::Heading(text) => Line::from(Span::styled(
                text,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            DisplayLine::Field { title, content } => {
                if content.is_empty() {
                    Line::from(Span::styled(title, Style::default().fg(Color::Yellow)))
                } else {
                    Line::from(vec![
                        Span::styled(format!("{}: ", title), Style::default().fg(Color::Yellow)),
                        Span::raw(content),
                    ])
                }
            }
            DisplayLine::Bullet(text) => Line::from(vec![
                Span::styled("  • ", Style::default().fg(Color::Yellow)),
                Span::raw(text),
            ]),
            DisplayLine::Paragraph(text) => Line::raw(text),
        })
        .collect()
}
