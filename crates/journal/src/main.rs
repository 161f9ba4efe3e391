use std::io::{self, Write, stdout};
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
};
use journal_background::{BackgroundState, render_sparkles, title_gradient};
use journal_config::Config;
use journal_core::{AccentTheme, DragTracker, EffectScheduler, Viewport};
use journal_glyphs::{Icon, MASCOT_HEIGHT, MASCOT_WIDTH, Mascot, build_mascot_art};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Position, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};
use tracing::{debug, info, warn};

mod canvas;
mod cards;
mod logging;
mod sticky_note;

use cards::JournalPage;

const TITLE: &str = "Journal Forms";
const SUBTITLE: &str = "Your cozy digital stationery space ✨";

/// Sparkle button size, borders included.
const BUTTON_WIDTH: u16 = 7;
const BUTTON_HEIGHT: u16 = 3;

/// Rows scrolled per wheel notch.
const SCROLL_STEP: i32 = 3;

/// Rows scrolled per PageUp/PageDown.
const PAGE_STEP: i32 = 10;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    let log_path = logging::init(&config.log_level);
    if let Some(e) = config_error {
        warn!(error = %e, "config ignored, using defaults");
    }
    info!(log = ?log_path, "journal starting");

    let terminal = ratatui::init();
    install_panic_hook();
    let result = execute!(stdout(), EnableMouseCapture)
        .map_err(color_eyre::Report::from)
        .and_then(|()| App::new(config).run(terminal));
    if let Err(e) = release_mouse(&mut stdout()) {
        warn!(error = %e, "failed to release mouse capture");
    }
    ratatui::restore();
    info!("journal stopped");
    result
}

/// Release mouse capture on panic, then hand over to the hook ratatui
/// installed to restore the terminal.
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = release_mouse(&mut stdout());
        hook(info);
    }));
}

/// Stop the terminal from reporting mouse events.
fn release_mouse(out: &mut impl Write) -> io::Result<()> {
    execute!(out, DisableMouseCapture)
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// User configuration.
    config: Config,
    /// Current accent palette.
    accent: AccentTheme,
    /// When the view was created; effect timers count from here.
    started: Instant,
    /// Sticky note drag state.
    drag: DragTracker,
    /// Mascot bounce and sparkle bursts.
    effects: EffectScheduler,
    /// Backdrop state.
    background: BackgroundState,
    /// The card grid.
    page: JournalPage,
    /// Frame size at the last draw; sparkles scatter over it.
    viewport: Viewport,
    /// Sparkle button area at the last draw.
    sparkle_button: Rect,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            accent: config.accent,
            config,
            started: Instant::now(),
            drag: DragTracker::new(),
            effects: EffectScheduler::new(0),
            background: BackgroundState::new(),
            page: JournalPage::new(),
            viewport: Viewport::default(),
            sparkle_button: Rect::default(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.effects.start();
        info!(tick_rate_ms = self.config.tick_rate_ms, "view started");

        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            self.effects.advance_to(self.elapsed_ms());
        }

        self.effects.teardown();
        Ok(())
    }

    /// Milliseconds since the view was created.
    fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let elapsed_ms = self.elapsed_ms();
        let area = frame.area();
        let color = self.accent.color();
        self.viewport = Viewport::new(area.width, area.height);

        self.background.render(frame, self.config.background);

        let chunks = Layout::vertical([
            Constraint::Length(1),                    // Top padding
            Constraint::Length(MASCOT_HEIGHT as u16), // Mascots and title
            Constraint::Length(1),                    // Subtitle
            Constraint::Length(1),                    // Date
            Constraint::Length(1),                    // Spacing
            Constraint::Fill(1),                      // Cards
            Constraint::Length(1),                    // Help text
        ])
        .split(area);

        self.render_header(frame, chunks[1]);

        let subtitle = Paragraph::new(SUBTITLE)
            .style(Style::new().fg(Color::Rgb(75, 85, 99)))
            .alignment(Alignment::Center);
        frame.render_widget(subtitle, chunks[2]);

        let date = Paragraph::new(Local::now().format("%A, %B %d, %Y").to_string())
            .style(Style::new().fg(Color::Rgb(156, 163, 175)))
            .alignment(Alignment::Center);
        frame.render_widget(date, chunks[3]);

        let grid = chunks[5].inner(Margin::new(2, 0));
        self.page.render(frame, grid, elapsed_ms, color);

        // Render help text
        let help = Line::from(vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "s".bold().fg(color),
            " sparkle  ".dark_gray(),
            "c".bold().fg(color),
            " accent  ".dark_gray(),
            "Tab".bold().fg(color),
            " next field  ".dark_gray(),
            "Esc".bold().fg(color),
            " unfocus".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[6]);

        self.render_sparkle_button(frame, color);
        render_sparkles(frame, self.effects.sparkles(), elapsed_ms);
        sticky_note::render(
            frame,
            self.drag.position(),
            self.drag.tilt(),
            &self.config.sticky_note,
        );
    }

    /// Mascots flanking the gradient title.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title_width = TITLE.chars().count() as u16;
        let [pen, _, title, _, smile] = Layout::horizontal([
            Constraint::Length(MASCOT_WIDTH as u16),
            Constraint::Length(2),
            Constraint::Length(title_width),
            Constraint::Length(2),
            Constraint::Length(MASCOT_WIDTH as u16),
        ])
        .flex(Flex::Center)
        .areas(area);

        let bouncing = self.effects.is_bouncing();
        for (mascot, rect, color) in [
            (Mascot::Pen, pen, Color::Rgb(168, 85, 247)),
            (Mascot::Smile, smile, Color::Rgb(236, 72, 153)),
        ] {
            let lines: Vec<Line> = build_mascot_art(mascot, bouncing)
                .into_iter()
                .map(|s| Line::from(s).style(Style::new().fg(color)))
                .collect();
            frame.render_widget(Paragraph::new(lines), rect);
        }

        // Title sits level with the middle of a resting mascot
        let last = TITLE.chars().count().saturating_sub(1).max(1) as f32;
        let spans: Vec<Span> = TITLE
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                Span::styled(
                    ch.to_string(),
                    Style::new()
                        .fg(title_gradient(i as f32 / last))
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        let row = Rect {
            y: title.y + 2,
            height: 1,
            ..title
        }
        .intersection(area);
        frame.render_widget(Paragraph::new(Line::from(spans)), row);
    }

    /// Floating sparkle button in the bottom-right corner.
    fn render_sparkle_button(&mut self, frame: &mut Frame, color: Color) {
        let area = frame.area();
        self.sparkle_button = Rect::new(
            area.right().saturating_sub(BUTTON_WIDTH + 2),
            area.bottom().saturating_sub(BUTTON_HEIGHT + 2),
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
        .intersection(area);

        let button = Paragraph::new(Icon::Sparkles.glyph())
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .style(Style::new().bg(color).fg(Color::White)),
            );
        frame.render_widget(button, self.sparkle_button);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with the configured tick rate so effects keep animating.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(self.config.tick_rate_ms))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if key.modifiers == KeyModifiers::CONTROL
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return;
        }

        // A focused field swallows plain keys
        if self.page.focused().is_some() {
            match key.code {
                KeyCode::Esc => self.page.clear_focus(),
                KeyCode::Tab => self.page.focus_next(),
                KeyCode::BackTab => self.page.focus_prev(),
                KeyCode::Enter => self.page.enter(),
                KeyCode::Backspace => self.page.backspace(),
                KeyCode::Char(ch) => self.page.type_char(ch),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            KeyCode::Char('s') => self.sparkle(),
            KeyCode::Char('c') => self.cycle_accent(),
            KeyCode::Tab => self.page.focus_next(),
            KeyCode::BackTab => self.page.focus_prev(),
            KeyCode::Up => self.page.scroll_by(-1),
            KeyCode::Down => self.page.scroll_by(1),
            KeyCode::PageUp => self.page.scroll_by(-PAGE_STEP),
            KeyCode::PageDown => self.page.scroll_by(PAGE_STEP),
            _ => {}
        }
    }

    /// Handles pointer events: sticky note drags, the sparkle button and
    /// clicks on the cards.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // The note floats above everything else
                if sticky_note::hit(self.drag.position(), column, row) {
                    self.drag.press_start();
                } else if self.sparkle_button.contains(Position::new(column, row)) {
                    self.sparkle();
                } else {
                    self.page.click(column, row);
                }
            }
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                self.drag.pointer_move(column, row)
            }
            MouseEventKind::Up(MouseButton::Left) => self.drag.press_end(),
            MouseEventKind::ScrollUp => self.page.scroll_by(-SCROLL_STEP),
            MouseEventKind::ScrollDown => self.page.scroll_by(SCROLL_STEP),
            _ => {}
        }
    }

    /// Scatter a fresh batch of sparkles over the screen.
    fn sparkle(&mut self) {
        let now_ms = self.elapsed_ms();
        debug!(
            width = self.viewport.width,
            height = self.viewport.height,
            now_ms,
            "sparkle requested"
        );
        self.effects.burst(now_ms, self.viewport);
    }

    /// Cycle through available accent themes.
    fn cycle_accent(&mut self) {
        self.accent = self.accent.next();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
