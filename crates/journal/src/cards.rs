//! The content grid: seven journal cards with local, non-persisted affordances.
//!
//! Cards are placed like a CSS grid with row auto-flow, so Creative Corner
//! spans two rows and the others fill in around it. The whole grid is drawn
//! into an offscreen buffer and the visible window is copied onto the frame,
//! which is what makes vertical scrolling possible.

use journal_background::lerp_rgb;
use journal_core::CardTint;
use journal_glyphs::Icon;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Widget},
};
use tracing::debug;

use crate::canvas::blit;

/// Mood options, single select.
pub const MOODS: [&str; 6] = ["😊", "😌", "🥰", "😴", "🤔", "✨"];

/// Coffee Corner options, single select.
pub const DRINKS: [&str; 4] = ["Latte", "Cappuccino", "Americano", "Tea"];

/// Tag chips shown under Creative Corner.
pub const TAGS: [&str; 4] = ["#creative", "#inspiration", "#art", "#ideas"];

/// Number of goal rows.
pub const GOALS: usize = 3;

/// Highest star rating.
pub const MAX_RATING: u8 = 5;

/// Height of a one-row card, borders included.
const CARD_HEIGHT: u16 = 10;
const ROW_GAP: u16 = 1;
const COLUMN_GAP: u16 = 2;

const FIELD_BG: Color = Color::Rgb(255, 255, 255);
const PLACEHOLDER: Color = Color::Rgb(156, 163, 175);
const STAR: Color = Color::Rgb(250, 204, 21);

/// Equalizer bars in Current Vibes: height in rows, color, pulse delay in ms.
const BARS: [(u16, (u8, u8, u8), u64); 4] = [
    (3, (134, 239, 172), 0),
    (2, (74, 222, 128), 100),
    (4, (34, 197, 94), 200),
    (1, (134, 239, 172), 300),
];
const PULSE_PERIOD_MS: u64 = 2000;

/// Number of grid columns for a given width.
pub fn columns_for_width(width: u16) -> u16 {
    if width >= 96 {
        3
    } else if width >= 64 {
        2
    } else {
        1
    }
}

/// The cards, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    DailyThoughts,
    Mood,
    CreativeCorner,
    Goals,
    Vibes,
    Reading,
    Coffee,
}

impl CardKind {
    pub const ALL: [CardKind; 7] = [
        CardKind::DailyThoughts,
        CardKind::Mood,
        CardKind::CreativeCorner,
        CardKind::Goals,
        CardKind::Vibes,
        CardKind::Reading,
        CardKind::Coffee,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CardKind::DailyThoughts => "Daily Thoughts",
            CardKind::Mood => "Mood Today",
            CardKind::CreativeCorner => "Creative Corner",
            CardKind::Goals => "Goals & Dreams",
            CardKind::Vibes => "Current Vibes",
            CardKind::Reading => "Reading List",
            CardKind::Coffee => "Coffee Corner",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            CardKind::DailyThoughts => Icon::Heart,
            CardKind::Mood => Icon::Smile,
            CardKind::CreativeCorner => Icon::Palette,
            CardKind::Goals => Icon::StarFilled,
            CardKind::Vibes => Icon::Music,
            CardKind::Reading => Icon::BookOpen,
            CardKind::Coffee => Icon::Coffee,
        }
    }

    pub fn tint(self) -> CardTint {
        match self {
            CardKind::DailyThoughts => CardTint::Pink,
            CardKind::Mood => CardTint::Purple,
            CardKind::CreativeCorner => CardTint::Blue,
            CardKind::Goals => CardTint::Yellow,
            CardKind::Vibes => CardTint::Green,
            CardKind::Reading => CardTint::Indigo,
            CardKind::Coffee => CardTint::Orange,
        }
    }

    pub fn row_span(self) -> u16 {
        match self {
            CardKind::CreativeCorner => 2,
            _ => 1,
        }
    }
}

/// Where a card lands in the grid, in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub kind: CardKind,
    pub column: u16,
    pub row: u16,
    pub row_span: u16,
}

/// Auto-place every card, row by row, skipping occupied cells.
pub fn place_cards(columns: u16) -> Vec<Placement> {
    let columns = columns.max(1);
    let mut occupied: Vec<(u16, u16)> = Vec::new();
    let mut placements = Vec::with_capacity(CardKind::ALL.len());
    let (mut row, mut column) = (0u16, 0u16);

    for kind in CardKind::ALL {
        let row_span = kind.row_span();
        loop {
            if column >= columns {
                column = 0;
                row += 1;
            }
            let free = (row..row + row_span).all(|r| !occupied.contains(&(column, r)));
            if free {
                break;
            }
            column += 1;
        }

        occupied.extend((row..row + row_span).map(|r| (column, r)));
        placements.push(Placement {
            kind,
            column,
            row,
            row_span,
        });
        column += 1;
    }

    placements
}

/// Text fields across all cards, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    DailyThoughts,
    MoodNote,
    CreativeIdeas,
    Dream1,
    Dream2,
    Dream3,
    Song,
    BookTitle,
    BookAuthor,
}

impl FieldId {
    pub const ALL: [FieldId; 9] = [
        FieldId::DailyThoughts,
        FieldId::MoodNote,
        FieldId::CreativeIdeas,
        FieldId::Dream1,
        FieldId::Dream2,
        FieldId::Dream3,
        FieldId::Song,
        FieldId::BookTitle,
        FieldId::BookAuthor,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn dream(goal: usize) -> FieldId {
        match goal {
            0 => FieldId::Dream1,
            1 => FieldId::Dream2,
            _ => FieldId::Dream3,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldId::DailyThoughts => "What's on your mind today? ✨",
            FieldId::MoodNote => "Describe your mood...",
            FieldId::CreativeIdeas => "Sketch your ideas with words...",
            FieldId::Dream1 => "Dream 1...",
            FieldId::Dream2 => "Dream 2...",
            FieldId::Dream3 => "Dream 3...",
            FieldId::Song => "What song matches your mood?",
            FieldId::BookTitle => "Book title...",
            FieldId::BookAuthor => "Author...",
        }
    }

    pub fn multiline(self) -> bool {
        matches!(self, FieldId::DailyThoughts | FieldId::CreativeIdeas)
    }
}

/// An editable text field. Contents live only as long as the page.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: String,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn push(&mut self, ch: char) {
        self.value.push(ch);
    }

    fn backspace(&mut self) {
        self.value.pop();
    }

    /// Lines as they appear in a field `width` columns wide.
    ///
    /// Multi-line fields wrap; single-line fields show the tail of the text
    /// so the end being typed stays visible.
    fn visual_lines(&self, width: usize, multiline: bool) -> Vec<String> {
        if width == 0 {
            return Vec::new();
        }
        if !multiline {
            let chars: Vec<char> = self.value.chars().collect();
            let start = chars.len().saturating_sub(width);
            return vec![chars[start..].iter().collect()];
        }

        let mut lines = Vec::new();
        for logical in self.value.split('\n') {
            let chars: Vec<char> = logical.chars().collect();
            if chars.is_empty() {
                lines.push(String::new());
                continue;
            }
            lines.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
        }
        // A full last line pushes the cursor onto a fresh row
        if lines.last().is_some_and(|line| line.chars().count() == width) {
            lines.push(String::new());
        }
        lines
    }
}

/// Something clickable inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Field(FieldId),
    Mood(usize),
    Drink(usize),
    Star(u8),
    Goal(usize),
}

/// State of the card grid.
#[derive(Debug, Default)]
pub struct JournalPage {
    fields: [TextField; 9],
    focus: Option<FieldId>,
    mood: Option<usize>,
    drink: Option<usize>,
    rating: u8,
    goals: [bool; GOALS],
    /// First grid row shown at the top of the viewport.
    scroll: u16,
    max_scroll: u16,
    /// Screen area the grid was last drawn into.
    viewport: Rect,
    /// Clickable regions from the last render, in grid coordinates.
    hits: Vec<(Rect, HitTarget)>,
}

impl JournalPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<FieldId> {
        self.focus
    }

    pub fn field(&self, id: FieldId) -> &TextField {
        &self.fields[id.index()]
    }

    pub fn mood(&self) -> Option<usize> {
        self.mood
    }

    pub fn drink(&self) -> Option<usize> {
        self.drink
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn goal_done(&self, goal: usize) -> bool {
        self.goals.get(goal).copied().unwrap_or(false)
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Move focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        let next = match self.focus {
            Some(id) => (id.index() + 1) % FieldId::ALL.len(),
            None => 0,
        };
        self.focus = Some(FieldId::ALL[next]);
    }

    /// Move focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        let len = FieldId::ALL.len();
        let prev = match self.focus {
            Some(id) => (id.index() + len - 1) % len,
            None => len - 1,
        };
        self.focus = Some(FieldId::ALL[prev]);
    }

    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    /// Type into the focused field.
    pub fn type_char(&mut self, ch: char) {
        if let Some(id) = self.focus {
            self.fields[id.index()].push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(id) = self.focus {
            self.fields[id.index()].backspace();
        }
    }

    /// Newline in multi-line fields, next field otherwise.
    pub fn enter(&mut self) {
        match self.focus {
            Some(id) if id.multiline() => self.fields[id.index()].push('\n'),
            Some(_) => self.focus_next(),
            None => {}
        }
    }

    /// Select a mood; selecting the current one clears it.
    pub fn select_mood(&mut self, mood: usize) {
        if mood >= MOODS.len() {
            return;
        }
        self.mood = if self.mood == Some(mood) { None } else { Some(mood) };
        debug!(mood = ?self.mood.map(|m| MOODS[m]), "mood picked");
    }

    /// Select a drink; selecting the current one clears it.
    pub fn select_drink(&mut self, drink: usize) {
        if drink >= DRINKS.len() {
            return;
        }
        self.drink = if self.drink == Some(drink) { None } else { Some(drink) };
        debug!(drink = ?self.drink.map(|d| DRINKS[d]), "drink picked");
    }

    /// Set the star rating; rating the current value again clears it.
    pub fn rate(&mut self, stars: u8) {
        let stars = stars.min(MAX_RATING);
        self.rating = if self.rating == stars { 0 } else { stars };
    }

    pub fn toggle_goal(&mut self, goal: usize) {
        if let Some(done) = self.goals.get_mut(goal) {
            *done = !*done;
        }
    }

    /// Scroll by `delta` rows, clamped to the grid.
    pub fn scroll_by(&mut self, delta: i32) {
        let scrolled = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll));
        self.scroll = scrolled as u16;
    }

    /// Whether a screen cell lies in the grid viewport.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.viewport.contains(Position::new(column, row))
    }

    /// Handle a click at a screen cell.
    ///
    /// Clicking a field focuses it; clicking anything else in the grid drops
    /// focus. Returns what was hit, if anything.
    pub fn click(&mut self, column: u16, row: u16) -> Option<HitTarget> {
        if !self.contains(column, row) {
            return None;
        }
        let grid = Position::new(
            column - self.viewport.x,
            row - self.viewport.y + self.scroll,
        );
        let target = self
            .hits
            .iter()
            .find(|(rect, _)| rect.contains(grid))
            .map(|(_, target)| *target);

        self.focus = None;
        match target {
            Some(HitTarget::Field(id)) => self.focus = Some(id),
            Some(HitTarget::Mood(mood)) => self.select_mood(mood),
            Some(HitTarget::Drink(drink)) => self.select_drink(drink),
            Some(HitTarget::Star(stars)) => self.rate(stars),
            Some(HitTarget::Goal(goal)) => self.toggle_goal(goal),
            None => {}
        }
        target
    }

    /// Render the grid into `area` of the frame.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, elapsed_ms: u64, accent: Color) {
        self.viewport = area;
        self.hits.clear();
        if area.is_empty() {
            return;
        }

        let columns = columns_for_width(area.width);
        let placements = place_cards(columns);
        let rows = placements
            .iter()
            .map(|p| p.row + p.row_span)
            .max()
            .unwrap_or(0);
        let content_height = rows * CARD_HEIGHT + rows.saturating_sub(1) * ROW_GAP;
        self.max_scroll = content_height.saturating_sub(area.height);
        self.scroll = self.scroll.min(self.max_scroll);

        let column_width = area.width.saturating_sub(COLUMN_GAP * (columns - 1)) / columns;
        let mut grid = Buffer::empty(Rect::new(0, 0, area.width, content_height));
        let window = Rect::new(0, self.scroll, area.width, area.height);

        for placement in &placements {
            let rect = Rect::new(
                placement.column * (column_width + COLUMN_GAP),
                placement.row * (CARD_HEIGHT + ROW_GAP),
                column_width,
                placement.row_span * CARD_HEIGHT + (placement.row_span - 1) * ROW_GAP,
            );
            self.render_card(&mut grid, placement.kind, rect, elapsed_ms, accent);

            let visible = rect.intersection(window);
            if !visible.is_empty() {
                blit(
                    &grid,
                    visible,
                    frame.buffer_mut(),
                    i32::from(area.x),
                    i32::from(area.y) - i32::from(self.scroll),
                );
            }
        }
    }

    fn render_card(
        &mut self,
        buf: &mut Buffer,
        kind: CardKind,
        rect: Rect,
        elapsed_ms: u64,
        accent: Color,
    ) {
        let tint = kind.tint();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(tint.border()))
            .style(Style::new().bg(tint.wash()).fg(tint.ink()));
        let inner = block.inner(rect);
        block.render(rect, buf);

        // One column of padding on each side
        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };
        if inner.is_empty() {
            return;
        }

        let glyph = kind.icon().glyph();
        let icon_width = Span::raw(glyph).width() as u16;
        buf.set_string(inner.x, inner.y, glyph, Style::new().fg(tint.accent()));
        buf.set_stringn(
            inner.x + icon_width + 1,
            inner.y,
            kind.title(),
            inner.width.saturating_sub(icon_width + 1) as usize,
            Style::new().fg(tint.ink()).add_modifier(Modifier::BOLD),
        );

        let body = Rect {
            y: inner.y + 2,
            height: inner.height.saturating_sub(2),
            ..inner
        };

        match kind {
            CardKind::DailyThoughts => self.render_daily(buf, body, tint, accent),
            CardKind::Mood => self.render_mood(buf, body, tint, accent),
            CardKind::CreativeCorner => self.render_creative(buf, body, tint, accent),
            CardKind::Goals => self.render_goals(buf, body, tint, accent),
            CardKind::Vibes => self.render_vibes(buf, body, tint, accent, elapsed_ms),
            CardKind::Reading => self.render_reading(buf, body, tint, accent),
            CardKind::Coffee => self.render_coffee(buf, body, tint),
        }
    }

    fn render_daily(&mut self, buf: &mut Buffer, body: Rect, tint: CardTint, accent: Color) {
        if let Some(rect) = band(body, 0, 4) {
            self.render_field(buf, FieldId::DailyThoughts, rect, tint, accent);
        }
        if let Some(rect) = band(body, 5, 1) {
            let dots = [
                Color::Rgb(249, 168, 212),
                Color::Rgb(244, 114, 182),
                Color::Rgb(236, 72, 153),
            ];
            for (i, color) in dots.into_iter().enumerate() {
                buf.set_string(rect.x + i as u16 * 2, rect.y, "●", Style::new().fg(color));
            }
        }
    }

    fn render_mood(&mut self, buf: &mut Buffer, body: Rect, tint: CardTint, accent: Color) {
        let per_row = 3;
        let button_width = body.width.saturating_sub(per_row - 1) / per_row;
        for (i, emoji) in MOODS.iter().enumerate() {
            let (row, column) = (i as u16 / per_row, i as u16 % per_row);
            let Some(line) = band(body, row, 1) else {
                continue;
            };
            let rect = Rect::new(
                line.x + column * (button_width + 1),
                line.y,
                button_width,
                1,
            );
            render_button(buf, rect, emoji, self.mood == Some(i), tint);
            self.hits.push((rect, HitTarget::Mood(i)));
        }
        if let Some(rect) = band(body, 3, 1) {
            self.render_field(buf, FieldId::MoodNote, rect, tint, accent);
        }
    }

    fn render_creative(&mut self, buf: &mut Buffer, body: Rect, tint: CardTint, accent: Color) {
        if let Some(zone) = band(body, 0, 4) {
            let style = Style::new().fg(tint.border()).bg(FIELD_BG);
            dashed_box(buf, zone, style);
            center(buf, zone, 1, Icon::Camera.glyph(), Style::new().fg(tint.accent()));
            center(buf, zone, 2, "Drop your inspiration here", Style::new().fg(tint.ink()));
        }
        if let Some(rect) = band(body, 5, 6) {
            self.render_field(buf, FieldId::CreativeIdeas, rect, tint, accent);
        }

        let chip = Style::new()
            .bg(Color::Rgb(191, 219, 254))
            .fg(Color::Rgb(29, 78, 216));
        let (mut x, mut row) = (body.x, 12);
        for tag in TAGS {
            let label = format!(" {tag} ");
            let width = Span::raw(label.as_str()).width() as u16;
            if x > body.x && x + width > body.right() {
                x = body.x;
                row += 1;
            }
            let Some(line) = band(body, row, 1) else {
                break;
            };
            buf.set_stringn(x, line.y, &label, body.right().saturating_sub(x) as usize, chip);
            x += width + 1;
        }
    }

    fn render_goals(&mut self, buf: &mut Buffer, body: Rect, tint: CardTint, accent: Color) {
        for goal in 0..GOALS {
            let Some(line) = band(body, goal as u16 * 2, 1) else {
                continue;
            };
            let checkbox = if self.goals[goal] { "☑" } else { "☐" };
            buf.set_string(line.x, line.y, checkbox, Style::new().fg(tint.accent()));
            self.hits
                .push((Rect::new(line.x, line.y, 1, 1), HitTarget::Goal(goal)));

            let field = Rect {
                x: line.x + 2,
                width: line.width.saturating_sub(2),
                ..line
            };
            self.render_field(buf, FieldId::dream(goal), field, tint, accent);
        }
    }

    fn render_vibes(
        &mut self,
        buf: &mut Buffer,
        body: Rect,
        tint: CardTint,
        accent: Color,
        elapsed_ms: u64,
    ) {
        if let Some(rect) = band(body, 0, 1) {
            self.render_field(buf, FieldId::Song, rect, tint, accent);
        }
        let Some(bars) = band(body, 2, 4) else {
            return;
        };
        let wash = rgb(tint.wash());
        for (i, (height, color, delay)) in BARS.into_iter().enumerate() {
            let phase = (elapsed_ms + PULSE_PERIOD_MS - delay) % PULSE_PERIOD_MS;
            let angle = phase as f32 / PULSE_PERIOD_MS as f32 * std::f32::consts::TAU;
            let opacity = 0.75 + 0.25 * angle.cos();
            let style = Style::new().fg(lerp_rgb(wash, color, opacity));
            let x = bars.x + i as u16 * 2;
            for y in bars.bottom().saturating_sub(height)..bars.bottom() {
                buf.set_string(x, y, "█", style);
            }
        }
    }

    fn render_reading(&mut self, buf: &mut Buffer, body: Rect, tint: CardTint, accent: Color) {
        if let Some(rect) = band(body, 0, 1) {
            self.render_field(buf, FieldId::BookTitle, rect, tint, accent);
        }
        if let Some(rect) = band(body, 2, 1) {
            self.render_field(buf, FieldId::BookAuthor, rect, tint, accent);
        }
        if let Some(line) = band(body, 4, 1) {
            for star in 1..=MAX_RATING {
                let icon = if star <= self.rating {
                    Icon::StarFilled
                } else {
                    Icon::Star
                };
                let x = line.x + u16::from(star - 1) * 2;
                buf.set_string(x, line.y, icon.glyph(), Style::new().fg(STAR));
                self.hits
                    .push((Rect::new(x, line.y, 1, 1), HitTarget::Star(star)));
            }
        }
    }

    fn render_coffee(&mut self, buf: &mut Buffer, body: Rect, tint: CardTint) {
        if let Some(line) = band(body, 0, 1) {
            buf.set_stringn(
                line.x,
                line.y,
                format!("Today's fuel {}", Icon::Coffee.glyph()),
                line.width as usize,
                Style::new().fg(tint.accent()),
            );
        }
        let button_width = body.width.saturating_sub(1) / 2;
        for (i, drink) in DRINKS.iter().enumerate() {
            let (row, column) = (i as u16 / 2, i as u16 % 2);
            let Some(line) = band(body, 2 + row * 2, 1) else {
                continue;
            };
            let rect = Rect::new(
                line.x + column * (button_width + 1),
                line.y,
                button_width,
                1,
            );
            render_button(buf, rect, drink, self.drink == Some(i), tint);
            self.hits.push((rect, HitTarget::Drink(i)));
        }
    }

    fn render_field(
        &mut self,
        buf: &mut Buffer,
        id: FieldId,
        rect: Rect,
        tint: CardTint,
        accent: Color,
    ) {
        self.hits.push((rect, HitTarget::Field(id)));
        buf.set_style(rect, Style::new().bg(FIELD_BG));

        let field = &self.fields[id.index()];
        let focused = self.focus == Some(id);
        if field.is_empty() && !focused {
            buf.set_stringn(
                rect.x,
                rect.y,
                id.placeholder(),
                rect.width as usize,
                Style::new().fg(PLACEHOLDER).add_modifier(Modifier::ITALIC),
            );
            return;
        }

        // Leave a column for the cursor
        let width = rect.width.saturating_sub(1) as usize;
        let lines = field.visual_lines(width, id.multiline());
        let start = lines.len().saturating_sub(rect.height as usize);
        let visible = &lines[start..];
        for (row, line) in visible.iter().enumerate() {
            buf.set_stringn(
                rect.x,
                rect.y + row as u16,
                line,
                width,
                Style::new().fg(tint.ink()),
            );
        }

        if focused && let Some(last) = visible.last() {
            let x = rect.x + (Span::raw(last.as_str()).width() as u16).min(width as u16);
            let y = rect.y + visible.len() as u16 - 1;
            buf.set_string(x, y, "▏", Style::new().fg(accent));
        }
    }
}

/// A `height`-row band of `body` starting `offset` rows down, if it fits.
fn band(body: Rect, offset: u16, height: u16) -> Option<Rect> {
    if offset + height > body.height || body.width == 0 {
        return None;
    }
    Some(Rect::new(body.x, body.y + offset, body.width, height))
}

fn render_button(buf: &mut Buffer, rect: Rect, label: &str, selected: bool, tint: CardTint) {
    let bg = if selected { tint.border() } else { FIELD_BG };
    buf.set_style(rect, Style::new().bg(bg));
    let mut style = Style::new().fg(tint.ink());
    if selected {
        style = style.add_modifier(Modifier::BOLD);
    }
    center(buf, rect, 0, label, style);
}

/// Write `text` centered on row `row` of `rect`.
fn center(buf: &mut Buffer, rect: Rect, row: u16, text: &str, style: Style) {
    if row >= rect.height {
        return;
    }
    let width = Span::raw(text).width() as u16;
    let x = rect.x + rect.width.saturating_sub(width) / 2;
    buf.set_stringn(x, rect.y + row, text, rect.width as usize, style);
}

/// Draw a dashed outline and fill the inside.
fn dashed_box(buf: &mut Buffer, rect: Rect, style: Style) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    buf.set_style(rect, style);
    let horizontal = "╌".repeat(rect.width as usize - 2);
    buf.set_string(rect.x, rect.y, format!("╭{horizontal}╮"), style);
    buf.set_string(rect.x, rect.bottom() - 1, format!("╰{horizontal}╯"), style);
    for y in rect.y + 1..rect.bottom() - 1 {
        buf.set_string(rect.x, y, "╎", style);
        buf.set_string(rect.right() - 1, y, "╎", style);
    }
}

fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (255, 255, 255),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn placement(placements: &[Placement], kind: CardKind) -> (u16, u16) {
        let p = placements.iter().find(|p| p.kind == kind).unwrap();
        (p.column, p.row)
    }

    fn no_overlaps(placements: &[Placement]) -> bool {
        let mut cells = Vec::new();
        for p in placements {
            for row in p.row..p.row + p.row_span {
                if cells.contains(&(p.column, row)) {
                    return false;
                }
                cells.push((p.column, row));
            }
        }
        true
    }

    #[test]
    fn test_columns_for_width() {
        assert_eq!(columns_for_width(120), 3);
        assert_eq!(columns_for_width(80), 2);
        assert_eq!(columns_for_width(40), 1);
    }

    #[test]
    fn test_three_column_placement() {
        let placements = place_cards(3);
        assert_eq!(placement(&placements, CardKind::CreativeCorner), (2, 0));
        assert_eq!(placement(&placements, CardKind::Goals), (0, 1));
        assert_eq!(placement(&placements, CardKind::Vibes), (1, 1));
        assert_eq!(placement(&placements, CardKind::Reading), (0, 2));
        assert_eq!(placement(&placements, CardKind::Coffee), (1, 2));
        assert!(no_overlaps(&placements));
    }

    #[test]
    fn test_two_column_placement() {
        let placements = place_cards(2);
        assert_eq!(placement(&placements, CardKind::CreativeCorner), (0, 1));
        assert_eq!(placement(&placements, CardKind::Goals), (1, 1));
        assert_eq!(placement(&placements, CardKind::Vibes), (1, 2));
        assert_eq!(placement(&placements, CardKind::Reading), (0, 3));
        assert!(no_overlaps(&placements));
    }

    #[test]
    fn test_single_column_is_sequential() {
        let placements = place_cards(1);
        let rows: Vec<u16> = placements.iter().map(|p| p.row).collect();
        assert_eq!(rows, vec![0, 1, 2, 4, 5, 6, 7]);
        assert!(no_overlaps(&placements));
    }

    #[test]
    fn test_single_select_toggles() {
        let mut page = JournalPage::new();
        page.select_mood(2);
        assert_eq!(page.mood(), Some(2));
        page.select_mood(4);
        assert_eq!(page.mood(), Some(4));
        page.select_mood(4);
        assert_eq!(page.mood(), None);
        page.select_mood(99);
        assert_eq!(page.mood(), None);

        page.select_drink(1);
        page.select_drink(1);
        assert_eq!(page.drink(), None);
    }

    #[test]
    fn test_rating_and_goals() {
        let mut page = JournalPage::new();
        page.rate(4);
        assert_eq!(page.rating(), 4);
        page.rate(4);
        assert_eq!(page.rating(), 0);
        page.rate(9);
        assert_eq!(page.rating(), MAX_RATING);

        page.toggle_goal(1);
        assert!(page.goal_done(1));
        page.toggle_goal(1);
        assert!(!page.goal_done(1));
        page.toggle_goal(7);
        assert!(!page.goal_done(7));
    }

    #[test]
    fn test_focus_cycle_and_typing() {
        let mut page = JournalPage::new();
        page.type_char('x');
        assert!(FieldId::ALL.iter().all(|id| page.field(*id).is_empty()));

        page.focus_prev();
        assert_eq!(page.focused(), Some(FieldId::BookAuthor));
        page.focus_next();
        assert_eq!(page.focused(), Some(FieldId::DailyThoughts));

        for ch in "hi".chars() {
            page.type_char(ch);
        }
        page.enter();
        page.type_char('!');
        assert_eq!(page.field(FieldId::DailyThoughts).value(), "hi\n!");
        page.backspace();
        assert_eq!(page.field(FieldId::DailyThoughts).value(), "hi\n");

        page.focus_next();
        page.enter();
        assert_eq!(page.focused(), Some(FieldId::CreativeIdeas));
        page.clear_focus();
        assert_eq!(page.focused(), None);
    }

    #[test]
    fn test_visual_lines() {
        let field = TextField {
            value: "abcdefg\nhi".to_string(),
        };
        assert_eq!(field.visual_lines(3, true), vec!["abc", "def", "g", "hi"]);
        let single = TextField {
            value: "abcdefg".to_string(),
        };
        assert_eq!(single.visual_lines(3, false), vec!["efg"]);
        assert!(field.visual_lines(0, true).is_empty());

        let full = TextField {
            value: "abc".to_string(),
        };
        assert_eq!(full.visual_lines(3, true), vec!["abc", ""]);
    }

    #[test]
    fn test_click_maps_through_scroll() {
        let mut page = JournalPage::new();
        let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
        let area = Rect::new(0, 4, 120, 14);

        terminal
            .draw(|frame| page.render(frame, area, 0, Color::Magenta))
            .unwrap();
        page.scroll_by(1000);
        assert!(page.scroll() > 0);
        terminal
            .draw(|frame| page.render(frame, area, 0, Color::Magenta))
            .unwrap();

        let (star, _) = *page
            .hits
            .iter()
            .find(|(_, target)| *target == HitTarget::Star(3))
            .unwrap();
        let column = star.x + area.x;
        let row = star.y + area.y - page.scroll();
        assert_eq!(terminal.backend().buffer()[(column, row)].symbol(), "☆");
        assert_eq!(page.click(column, row), Some(HitTarget::Star(3)));
        assert_eq!(page.rating(), 3);

        terminal
            .draw(|frame| page.render(frame, area, 0, Color::Magenta))
            .unwrap();
        assert_eq!(terminal.backend().buffer()[(column, row)].symbol(), "★");
    }

    #[test]
    fn test_click_outside_grid_is_ignored() {
        let mut page = JournalPage::new();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let area = Rect::new(0, 5, 120, 30);
        terminal
            .draw(|frame| page.render(frame, area, 0, Color::Magenta))
            .unwrap();

        page.focus_next();
        assert_eq!(page.click(10, 1), None);
        assert_eq!(page.focused(), Some(FieldId::DailyThoughts));
    }

    #[test]
    fn test_click_field_focuses_it() {
        let mut page = JournalPage::new();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let area = Rect::new(0, 5, 120, 34);
        terminal
            .draw(|frame| page.render(frame, area, 0, Color::Magenta))
            .unwrap();

        let (rect, _) = *page
            .hits
            .iter()
            .find(|(_, target)| *target == HitTarget::Field(FieldId::Song))
            .unwrap();
        page.click(rect.x + area.x, rect.y + area.y);
        assert_eq!(page.focused(), Some(FieldId::Song));
    }
}
