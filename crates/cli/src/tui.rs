// Interactive TUI shell.
//
// Layout: title bar, query input, body (hero / loading / results /
// lead panel / error banner), status bar. Searches run on a background
// thread and report back over a channel tagged with the shell's
// generation counter; the shell drops stale results, so an abandoned
// search can never overwrite a newer one.

use std::io::stdout;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};

use propseek_client::{fixture, is_sentinel, ClientError, RecommendationClient};
use propseek_config::ai::ResolvedAiConfig;
use propseek_config::favorites::{FavoritesStore, JsonFileBackend};
use propseek_config::settings::Settings;
use propseek_model::labels::{categories, Labels};
use propseek_model::{Language, RecommendationResponse};

use crate::cards;
use crate::shell::{SearchPhase, Shell};

type SearchOutcome = (u64, Result<RecommendationResponse, ClientError>);

struct TuiApp {
    shell: Shell<JsonFileBackend>,
    settings: Settings,
    /// None when no API key is configured; the sentinel/demo path still
    /// works, real searches surface MissingKey in the error banner.
    client: Option<RecommendationClient>,
    input: String,
    selected: usize,
    show_help: bool,
    should_quit: bool,
    tx: mpsc::Sender<SearchOutcome>,
}

impl TuiApp {
    fn new(tx: mpsc::Sender<SearchOutcome>) -> Result<Self, String> {
        let settings = Settings::load();
        let favorites =
            FavoritesStore::open(JsonFileBackend::default()).map_err(|e| e.to_string())?;
        let config = ResolvedAiConfig::from_settings(&settings.ai);
        let client = RecommendationClient::from_config(&config).ok();
        Ok(Self {
            shell: Shell::new(settings.language, favorites),
            settings,
            client,
            input: String::new(),
            selected: 0,
            show_help: false,
            should_quit: false,
            tx,
        })
    }

    fn labels(&self) -> &'static Labels {
        Labels::for_lang(self.shell.lang())
    }

    fn searching(&self) -> bool {
        matches!(self.shell.phase(), SearchPhase::Searching)
    }

    /// Exactly one outstanding search: submission is disabled while one
    /// is in flight (the generation check would drop a stale result
    /// anyway, this just keeps the UI honest about it).
    fn submit(&mut self) {
        if self.searching() {
            return;
        }
        let Some(job) = self.shell.submit(&self.input) else {
            return;
        };
        self.selected = 0;
        let tx = self.tx.clone();
        let client = self.client.clone();
        thread::spawn(move || {
            let result = if is_sentinel(&job.query) {
                Ok(fixture::for_lang(job.lang))
            } else {
                match client {
                    Some(client) => client.fetch(&job.query, job.lang),
                    None => Err(ClientError::MissingKey),
                }
            };
            let _ = tx.send((job.generation, result));
        });
    }

    fn cycle_language(&mut self) {
        let lang = self.shell.lang().next();
        self.shell.set_lang(lang);
        self.settings.language = lang;
        self.settings.save_quiet();
    }

    fn toggle_selected_favorite(&mut self) {
        let link = self
            .shell
            .visible()
            .get(self.selected)
            .map(|p| p.link.clone());
        if let Some(link) = link {
            let _ = self.shell.toggle_favorite(&link);
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.shell.visible().len();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            // Any key dismisses help
            self.show_help = false;
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::F(1) => self.show_help = true,
            KeyCode::F(n @ (2 | 3)) => {
                let cats = categories(self.shell.lang());
                if let Some(cat) = cats.get(n as usize - 2) {
                    if !self.searching() {
                        self.input = cat.query.to_string();
                        self.submit();
                    }
                }
            }
            KeyCode::Char('l') if ctrl => self.cycle_language(),
            KeyCode::Char('f') if ctrl => {
                self.shell.toggle_favorites_only();
                self.selected = 0;
            }
            KeyCode::Char('b') if ctrl => self.toggle_selected_favorite(),
            KeyCode::Enter => self.submit(),
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected += 1,
            KeyCode::Backspace => {
                if !self.searching() {
                    self.input.pop();
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if !self.searching() {
                    self.input.push(c);
                }
            }
            _ => {}
        }
        self.clamp_selection();
    }

    // ── Drawing ─────────────────────────────────────────────────────

    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

        self.draw_title(frame, chunks[0]);
        self.draw_input(frame, chunks[1]);
        self.draw_body(frame, chunks[2]);
        self.draw_status(frame, chunks[3]);

        if self.show_help {
            self.draw_help(frame, area);
        }
    }

    fn draw_title(&self, frame: &mut Frame, area: Rect) {
        let title = format!(" propseek | {} ", self.labels().hero_title);
        let para = Paragraph::new(Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .style(Style::default().bg(Color::Cyan));
        frame.render_widget(para, area);
    }

    fn draw_input(&self, frame: &mut Frame, area: Rect) {
        let t = self.labels();
        let (text, style) = if self.input.is_empty() {
            (t.search_placeholder.to_string(), Style::default().fg(Color::DarkGray))
        } else {
            (self.input.clone(), Style::default().fg(Color::White))
        };

        let border_title = if self.searching() {
            format!(" {} ", t.loading)
        } else {
            format!(" {} ", t.search_btn)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(border_title)
            .border_style(if self.searching() {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Cyan)
            });
        frame.render_widget(Paragraph::new(text).style(style).block(block), area);
    }

    fn draw_body(&self, frame: &mut Frame, area: Rect) {
        match self.shell.phase() {
            SearchPhase::Idle => self.draw_hero(frame, area),
            SearchPhase::Searching => {
                let para = Paragraph::new(self.labels().loading)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow));
                frame.render_widget(para, area);
            }
            SearchPhase::Error(msg) => self.draw_error(frame, area, msg),
            SearchPhase::Results => {
                if self.shell.lead_panel() {
                    self.draw_summary_and_lead(frame, area);
                } else {
                    self.draw_results(frame, area);
                }
            }
        }
    }

    fn draw_hero(&self, frame: &mut Frame, area: Rect) {
        let t = self.labels();
        let cats = categories(self.shell.lang());
        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(
                t.hero_title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(t.hero_sub, Style::default().fg(Color::Gray))),
            Line::default(),
        ];
        for (i, cat) in cats.iter().enumerate() {
            lines.push(Line::from(Span::styled(
                format!("F{}: {}  ({})", i + 2, cat.label, cat.query),
                Style::default().fg(Color::Cyan),
            )));
        }
        let para = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(para, area);
    }

    fn draw_error(&self, frame: &mut Frame, area: Rect, msg: &str) {
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                msg.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Enter: retry",
                Style::default().fg(Color::Gray),
            )),
        ];
        let para = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(para, area);
    }

    fn draw_summary_and_lead(&self, frame: &mut Frame, area: Rect) {
        let t = self.labels();
        let chunks =
            Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).split(area);

        if let Some(summary) = self.shell.summary() {
            let para = Paragraph::new(summary.to_string())
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::White));
            frame.render_widget(para, chunks[0]);
        }

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                t.no_results_title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(t.no_results_sub, Style::default().fg(Color::Gray))),
            Line::default(),
            Line::from(Span::styled(
                format!("[ {} ]", t.notify_me),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));
        let para = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(para, chunks[1]);
    }

    fn draw_results(&self, frame: &mut Frame, area: Rect) {
        let chunks =
            Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).split(area);

        if let Some(summary) = self.shell.summary() {
            let para = Paragraph::new(summary.to_string())
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::White));
            frame.render_widget(para, chunks[0]);
        }

        let visible = self.shell.visible();
        if visible.is_empty() {
            // Favorites-only view with nothing saved from this result set
            let para = Paragraph::new(format!("{} (0)", self.labels().favorites))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(para, chunks[1]);
            return;
        }

        let cols = Layout::horizontal([Constraint::Length(36), Constraint::Min(20)])
            .split(chunks[1]);

        let mut list_lines: Vec<Line> = Vec::with_capacity(visible.len());
        for (i, property) in visible.iter().enumerate() {
            let marker = if self.shell.favorites().contains(&property.link) {
                "★ "
            } else {
                "  "
            };
            let style = if i == self.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            list_lines.push(Line::from(Span::styled(
                format!("{}{}", marker, property.title),
                style,
            )));
        }
        let list_block = Block::default().borders(Borders::RIGHT);
        frame.render_widget(Paragraph::new(list_lines).block(list_block), cols[0]);

        if let Some(property) = visible.get(self.selected) {
            let is_favorite = self.shell.favorites().contains(&property.link);
            let mut lines = cards::lines(property, is_favorite, self.shell.lang(), false);
            let sources = self.shell.sources();
            if !sources.is_empty() {
                lines.push(Line::default());
                for source in sources {
                    lines.push(Line::from(Span::styled(
                        format!("» {} - {}", source.title, source.uri),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
            let para = Paragraph::new(lines).wrap(Wrap { trim: false });
            frame.render_widget(para, cols[1]);
        }
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let t = self.labels();
        let filter = if self.shell.favorites_only() {
            format!("[{}] ", t.favorites)
        } else {
            String::new()
        };
        let left = format!(
            " {} ({})  {}lang: {}",
            t.favorites,
            self.shell.favorites().len(),
            filter,
            self.shell.lang()
        );
        let right = "F1: help  Esc: quit ".to_string();
        let padding = (area.width as usize)
            .saturating_sub(left.chars().count() + right.chars().count());
        let status = format!("{}{:pad$}{}", left, "", right, pad = padding);

        let para = Paragraph::new(Line::from(Span::styled(
            status,
            Style::default().fg(Color::Black).bg(Color::DarkGray),
        )))
        .style(Style::default().bg(Color::DarkGray));
        frame.render_widget(para, area);
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let t = self.labels();
        let help_lines: Vec<String> = vec![
            "".to_string(),
            "  Enter            submit query".to_string(),
            "  Up / Down        select card".to_string(),
            "  Ctrl+B           save/unsave selected".to_string(),
            format!("  Ctrl+F           {} filter", t.favorites),
            "  Ctrl+L           cycle language".to_string(),
            "  F2 / F3          category quick queries".to_string(),
            "  Esc              quit".to_string(),
            "".to_string(),
            format!("  {}", t.auction_help_title),
            format!("  {}", t.auction_help_step1),
            format!("  {}", t.auction_help_step2),
            format!("  {}", t.auction_help_step3),
            "".to_string(),
        ];

        let help_width: u16 = 52;
        let help_height: u16 = help_lines.len() as u16 + 2;
        let x = area.width.saturating_sub(help_width) / 2;
        let y = area.height.saturating_sub(help_height) / 2;
        let popup = Rect::new(
            area.x + x,
            area.y + y,
            help_width.min(area.width),
            help_height.min(area.height),
        );

        let lines: Vec<Line> = help_lines
            .into_iter()
            .map(|s| Line::from(Span::styled(s, Style::default().fg(Color::White))))
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" propseek ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(Color::Black));

        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }
}

/// Run the interactive shell until the user quits.
pub fn run() -> Result<(), String> {
    let (tx, rx) = mpsc::channel::<SearchOutcome>();
    let mut app = TuiApp::new(tx)?;

    terminal::enable_raw_mode().map_err(|e| format!("failed to enable raw mode: {}", e))?;
    stdout()
        .execute(EnterAlternateScreen)
        .map_err(|e| format!("failed to enter alternate screen: {}", e))?;

    struct Cleanup;
    impl Drop for Cleanup {
        fn drop(&mut self) {
            let _ = stdout().execute(LeaveAlternateScreen);
            let _ = terminal::disable_raw_mode();
        }
    }
    let _cleanup = Cleanup;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("failed to create terminal: {}", e))?;

    loop {
        terminal
            .draw(|frame| app.draw(frame))
            .map_err(|e| format!("draw error: {}", e))?;

        // Finished background searches; the shell drops stale ones
        while let Ok((generation, result)) = rx.try_recv() {
            app.shell.on_response(generation, result);
            app.clamp_selection();
        }

        if event::poll(Duration::from_millis(100))
            .map_err(|e| format!("event poll error: {}", e))?
        {
            if let Event::Key(key) =
                event::read().map_err(|e| format!("event read error: {}", e))?
            {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
