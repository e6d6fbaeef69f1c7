//! Immediate-mode drawing of the chrome and slide bodies.
//!
//! Every block is measured before it is drawn so that grids can share a
//! common cell height. Drawing functions return the height they consumed.

use fuel_deck::constants::*;
use fuel_deck::content::{Bar, Block, Card, Content, Image, Metric, Section, Step, Table};
use fuel_deck::deck::{DECK_TITLE, FOOTER_TEXT};
use fuel_deck::layout::{Bounds, Chrome, wrap_text};
use fuel_deck::{Frame, Indicator, Slide};
use raylib::prelude::*;

use crate::texture_loader::Textures;
use crate::view::theme;

const PADDING: f32 = 18.0;
const LIST_INDENT: f32 = 32.0;
const TABLE_ROW_HEIGHT: f32 = 46.0;
const BAR_HEIGHT: f32 = 38.0;
const PLACEHOLDER_HEIGHT: f32 = 240.0;
const MAX_IMAGE_HEIGHT: f32 = 420.0;
const STEP_ARROW: f32 = 44.0;

fn rect(b: Bounds) -> Rectangle {
    Rectangle::new(b.x, b.y, b.width, b.height)
}

fn text_width(text: &str, size: i32) -> f32 {
    measure_text(text, size) as f32
}

fn line_height(size: i32) -> f32 {
    size as f32 * 1.35
}

fn wrapped(text: &str, width: f32, size: i32) -> Vec<String> {
    wrap_text(text, width, |s| text_width(s, size))
}

fn draw_lines<D: RaylibDraw>(d: &mut D, lines: &[String], x: f32, y: f32, size: i32, color: Color) -> f32 {
    for (i, line) in lines.iter().enumerate() {
        d.draw_text(line, x as i32, (y + i as f32 * line_height(size)) as i32, size, color);
    }
    lines.len() as f32 * line_height(size)
}

fn draw_centered<D: RaylibDraw>(d: &mut D, text: &str, b: Bounds, size: i32, color: Color) {
    let x = b.x + (b.width - text_width(text, size)) * 0.5;
    let y = b.y + (b.height - size as f32) * 0.5;
    d.draw_text(text, x as i32, y as i32, size, color);
}

fn draw_right_aligned<D: RaylibDraw>(d: &mut D, text: &str, b: Bounds, size: i32, color: Color) {
    let x = b.right() - text_width(text, size);
    d.draw_text(text, x as i32, b.y as i32, size, color);
}

fn panel<D: RaylibDraw>(d: &mut D, b: Bounds, fill: Color) {
    d.draw_rectangle_rounded(rect(b), theme::ROUNDNESS, theme::SEGMENTS, fill);
}

// --- Chrome ---

pub fn draw_chrome<D, C>(d: &mut D, chrome: &Chrome, frame: &Frame<'_, C>, indicators: impl Iterator<Item = Indicator>)
where
    D: RaylibDraw,
{
    d.draw_rectangle_rec(rect(chrome.header), theme::HEADER);
    d.draw_text(
        DECK_TITLE,
        chrome.deck_title.x as i32,
        chrome.deck_title.y as i32,
        DECK_TITLE_SIZE,
        theme::TEXT,
    );

    for (indicator, b) in indicators.zip(chrome.indicators.iter()) {
        if indicator.active {
            panel(d, *b, theme::ACCENT);
            draw_centered(d, &indicator.label, *b, BODY_SIZE, theme::TEXT_ON_ACCENT);
        } else {
            d.draw_rectangle_lines_ex(rect(*b), 2.0, theme::PANEL_BORDER);
            draw_centered(d, &indicator.label, *b, BODY_SIZE, theme::TEXT_MUTED);
        }
    }

    draw_right_aligned(d, &frame.position.to_string(), chrome.counter, BODY_SIZE, theme::TEXT_MUTED);
    draw_right_aligned(d, frame.title, chrome.current_title, BODY_SIZE, theme::TEXT);

    draw_nav_button(d, chrome.previous, "< Previous", frame.can_go_previous);
    draw_nav_button(d, chrome.next, "Next >", frame.can_go_next);

    d.draw_rectangle_rec(rect(chrome.footer), theme::FOOTER);
    let footer_y = chrome.footer.y + (chrome.footer.height - SMALL_SIZE as f32) * 0.5;
    d.draw_text(FOOTER_TEXT, MARGIN as i32, footer_y as i32, SMALL_SIZE, theme::TEXT_MUTED);
}

fn draw_nav_button<D: RaylibDraw>(d: &mut D, b: Bounds, label: &str, enabled: bool) {
    let (fill, text) = if enabled {
        (theme::ACCENT, theme::TEXT_ON_ACCENT)
    } else {
        (theme::DISABLED, theme::TEXT_MUTED)
    };
    panel(d, b, fill);
    draw_centered(d, label, b, CARD_TITLE_SIZE, text);
}

// --- Slide body ---

/// Draw a full slide with its top edge at `area.y - scroll`. Returns the
/// height of the laid out content, independent of scrolling.
pub fn draw_slide<D: RaylibDraw>(
    d: &mut D,
    slide: &Slide<Content>,
    area: Bounds,
    scroll: f32,
    textures: &Textures,
) -> f32 {
    let top = area.y - scroll;
    let mut y = top;

    d.draw_text(&slide.title, area.x as i32, y as i32, SLIDE_TITLE_SIZE, theme::TEXT);
    y += line_height(SLIDE_TITLE_SIZE);
    if let Some(subtitle) = &slide.subtitle {
        d.draw_text(subtitle, area.x as i32, y as i32, SUBTITLE_SIZE, theme::ACCENT);
        y += line_height(SUBTITLE_SIZE);
    }
    y += GAP;

    for row in &slide.content.rows {
        let columns = Bounds::new(area.x, y, area.width, 0.0).columns(row.len(), GAP * 1.5);
        let height = row
            .iter()
            .zip(columns)
            .map(|(section, column)| draw_section(d, section, column, textures))
            .fold(0.0, f32::max);
        y += height + GAP;
    }

    y - top
}

fn draw_section<D: RaylibDraw>(d: &mut D, section: &Section, column: Bounds, textures: &Textures) -> f32 {
    let mut y = column.y;
    if let Some(heading) = section.heading {
        d.draw_text(heading, column.x as i32, y as i32, HEADING_SIZE, theme::HIGHLIGHT);
        y += line_height(HEADING_SIZE) + 6.0;
    }
    for block in &section.blocks {
        let area = Bounds::new(column.x, y, column.width, 0.0);
        y += draw_block(d, block, area, textures) + GAP * 0.6;
    }
    y - column.y
}

fn draw_block<D: RaylibDraw>(d: &mut D, block: &Block, area: Bounds, textures: &Textures) -> f32 {
    match block {
        Block::Paragraph(text) => {
            let lines = wrapped(text, area.width, BODY_SIZE);
            draw_lines(d, &lines, area.x, area.y, BODY_SIZE, theme::TEXT)
        }
        Block::List { ordered, items } => draw_list(d, *ordered, items, area),
        Block::Cards { columns, cards } => draw_cards(d, *columns, cards, area),
        Block::Metrics(metrics) => draw_metrics(d, metrics, area),
        Block::Steps(steps) => draw_steps(d, steps, area),
        Block::Table(table) => draw_table(d, table, area),
        Block::Bars(bars) => draw_bars(d, bars, area),
        Block::Images(images) => draw_images(d, images, area, textures),
        Block::Callout { title, text } => draw_callout(d, title, text, area),
    }
}

fn draw_list<D: RaylibDraw>(d: &mut D, ordered: bool, items: &[&str], area: Bounds) -> f32 {
    let mut y = area.y;
    for (i, item) in items.iter().enumerate() {
        let marker = if ordered { format!("{}.", i + 1) } else { "-".to_string() };
        d.draw_text(&marker, area.x as i32, y as i32, BODY_SIZE, theme::ACCENT);
        let lines = wrapped(item, area.width - LIST_INDENT, BODY_SIZE);
        y += draw_lines(d, &lines, area.x + LIST_INDENT, y, BODY_SIZE, theme::TEXT) + 4.0;
    }
    y - area.y
}

fn card_height(card: &Card, width: f32) -> f32 {
    let inner = width - 2.0 * PADDING;
    let title = wrapped(card.title, inner, CARD_TITLE_SIZE).len() as f32 * line_height(CARD_TITLE_SIZE);
    let body: f32 = card
        .lines
        .iter()
        .map(|l| wrapped(l, inner, BODY_SIZE).len() as f32 * line_height(BODY_SIZE))
        .sum();
    2.0 * PADDING + title + 6.0 + body
}

fn draw_cards<D: RaylibDraw>(d: &mut D, columns: usize, cards: &[Card], area: Bounds) -> f32 {
    let columns = columns.clamp(1, cards.len().max(1));
    let gap = GAP * 0.6;
    let cell_width = (area.width - gap * (columns - 1) as f32) / columns as f32;
    let cell_height = cards.iter().map(|c| card_height(c, cell_width)).fold(0.0, f32::max);
    let cells = area.grid(cards.len(), columns, cell_height, gap);

    for (card, cell) in cards.iter().zip(cells.iter()) {
        panel(d, *cell, theme::PANEL);
        d.draw_rectangle_rec(Rectangle::new(cell.x, cell.y + PADDING, 5.0, cell.height - 2.0 * PADDING), theme::ACCENT);

        let inner = cell.inset(PADDING);
        let title = wrapped(card.title, inner.width, CARD_TITLE_SIZE);
        let mut y = inner.y;
        y += draw_lines(d, &title, inner.x, y, CARD_TITLE_SIZE, theme::TEXT) + 6.0;
        for line in &card.lines {
            let lines = wrapped(line, inner.width, BODY_SIZE);
            y += draw_lines(d, &lines, inner.x, y, BODY_SIZE, theme::TEXT_MUTED);
        }
    }

    cells.last().map_or(0.0, |last| last.bottom() - area.y)
}

fn metric_height(metric: &Metric, width: f32) -> f32 {
    let inner = width - 2.0 * PADDING;
    let label = wrapped(metric.label, inner, BODY_SIZE).len() as f32 * line_height(BODY_SIZE);
    let note = metric
        .note
        .map_or(0.0, |n| wrapped(n, inner, SMALL_SIZE).len() as f32 * line_height(SMALL_SIZE));
    2.0 * PADDING + line_height(METRIC_VALUE_SIZE) + label + note
}

fn draw_metrics<D: RaylibDraw>(d: &mut D, metrics: &[Metric], area: Bounds) -> f32 {
    let columns = area.columns(metrics.len(), GAP * 0.6);
    let height = metrics
        .iter()
        .zip(columns.iter())
        .map(|(m, c)| metric_height(m, c.width))
        .fold(0.0, f32::max);

    for (metric, column) in metrics.iter().zip(columns.iter()) {
        let cell = Bounds::new(column.x, column.y, column.width, height);
        panel(d, cell, theme::PANEL);
        let inner = cell.inset(PADDING);
        let mut y = inner.y;

        let value_row = Bounds::new(inner.x, y, inner.width, METRIC_VALUE_SIZE as f32);
        draw_centered(d, metric.value, value_row, METRIC_VALUE_SIZE, theme::HIGHLIGHT);
        y += line_height(METRIC_VALUE_SIZE);

        for line in wrapped(metric.label, inner.width, BODY_SIZE) {
            draw_centered(d, &line, Bounds::new(inner.x, y, inner.width, BODY_SIZE as f32), BODY_SIZE, theme::TEXT);
            y += line_height(BODY_SIZE);
        }
        if let Some(note) = metric.note {
            for line in wrapped(note, inner.width, SMALL_SIZE) {
                let row = Bounds::new(inner.x, y, inner.width, SMALL_SIZE as f32);
                draw_centered(d, &line, row, SMALL_SIZE, theme::TEXT_MUTED);
                y += line_height(SMALL_SIZE);
            }
        }
    }
    height
}

fn draw_steps<D: RaylibDraw>(d: &mut D, steps: &[Step], area: Bounds) -> f32 {
    let columns = area.columns(steps.len(), STEP_ARROW);
    let radius = 22.0;
    let mut height: f32 = 0.0;

    for (i, (step, column)) in steps.iter().zip(columns.iter()).enumerate() {
        let cx = column.x + column.width * 0.5;
        let cy = column.y + radius;
        d.draw_circle(cx as i32, cy as i32, radius, theme::ACCENT);
        draw_centered(
            d,
            &(i + 1).to_string(),
            Bounds::new(cx - radius, cy - radius, radius * 2.0, radius * 2.0),
            CARD_TITLE_SIZE,
            theme::TEXT_ON_ACCENT,
        );

        let mut y = column.y + radius * 2.0 + 12.0;
        for line in wrapped(step.title, column.width, CARD_TITLE_SIZE) {
            let row = Bounds::new(column.x, y, column.width, CARD_TITLE_SIZE as f32);
            draw_centered(d, &line, row, CARD_TITLE_SIZE, theme::TEXT);
            y += line_height(CARD_TITLE_SIZE);
        }
        for line in wrapped(step.text, column.width, SMALL_SIZE) {
            let row = Bounds::new(column.x, y, column.width, SMALL_SIZE as f32);
            draw_centered(d, &line, row, SMALL_SIZE, theme::TEXT_MUTED);
            y += line_height(SMALL_SIZE);
        }
        height = height.max(y - column.y);

        if i + 1 < steps.len() {
            draw_arrow(d, column.right(), cy);
        }
    }
    height
}

fn draw_arrow<D: RaylibDraw>(d: &mut D, x: f32, y: f32) {
    let start = Vector2::new(x + 8.0, y);
    let tip = Vector2::new(x + STEP_ARROW - 8.0, y);
    d.draw_line_ex(start, Vector2::new(tip.x - 10.0, y), 4.0, theme::ACCENT_SOFT);
    d.draw_triangle(
        tip,
        Vector2::new(tip.x - 14.0, y - 9.0),
        Vector2::new(tip.x - 14.0, y + 9.0),
        theme::ACCENT_SOFT,
    );
}

fn draw_table<D: RaylibDraw>(d: &mut D, table: &Table, area: Bounds) -> f32 {
    let count = table.header.len().max(1);
    let first = area.width * 0.4;
    let rest = (area.width - first) / (count.saturating_sub(1).max(1)) as f32;
    let column_x = |i: usize| if i == 0 { area.x } else { area.x + first + (i - 1) as f32 * rest };
    let text_y = |row_y: f32| row_y + (TABLE_ROW_HEIGHT - BODY_SIZE as f32) * 0.5;

    let header = Bounds::new(area.x, area.y, area.width, TABLE_ROW_HEIGHT);
    d.draw_rectangle_rec(rect(header), theme::ACCENT_SOFT);
    for (i, cell) in table.header.iter().enumerate() {
        d.draw_text(cell, (column_x(i) + 12.0) as i32, text_y(header.y) as i32, BODY_SIZE, theme::TEXT_ON_ACCENT);
    }

    let mut y = header.bottom();
    for (r, row) in table.rows.iter().enumerate() {
        let bounds = Bounds::new(area.x, y, area.width, TABLE_ROW_HEIGHT);
        let (fill, color) = if table.highlight == Some(r) {
            (theme::HIGHLIGHT, theme::BACKGROUND)
        } else if r % 2 == 0 {
            (theme::PANEL, theme::TEXT)
        } else {
            (theme::BACKGROUND, theme::TEXT)
        };
        d.draw_rectangle_rec(rect(bounds), fill);
        for (i, cell) in row.iter().enumerate() {
            d.draw_text(cell, (column_x(i) + 12.0) as i32, text_y(y) as i32, BODY_SIZE, color);
        }
        y += TABLE_ROW_HEIGHT;
    }
    d.draw_rectangle_lines_ex(rect(Bounds::new(area.x, area.y, area.width, y - area.y)), 1.0, theme::PANEL_BORDER);
    y - area.y
}

fn draw_bars<D: RaylibDraw>(d: &mut D, bars: &[Bar], area: Bounds) -> f32 {
    let mut y = area.y;
    for bar in bars {
        let track = Bounds::new(area.x, y, area.width, BAR_HEIGHT);
        panel(d, track, theme::PANEL);
        let fill = Bounds::new(track.x, track.y, track.width * bar.fraction.clamp(0.0, 1.0), track.height);
        panel(d, fill, theme::ACCENT_SOFT);
        let text_y = track.y + (BAR_HEIGHT - BODY_SIZE as f32) * 0.5;
        d.draw_text(bar.label, (track.x + 12.0) as i32, text_y as i32, BODY_SIZE, theme::TEXT);
        y += BAR_HEIGHT + 10.0;
    }
    y - area.y
}

fn image_size(texture: &Texture2D, max_width: f32) -> (f32, f32) {
    let (w, h) = (texture.width() as f32, texture.height() as f32);
    let scale = (max_width / w).min(MAX_IMAGE_HEIGHT / h).min(1.0);
    (w * scale, h * scale)
}

fn draw_images<D: RaylibDraw>(d: &mut D, images: &[Image], area: Bounds, textures: &Textures) -> f32 {
    let columns = area.columns(images.len(), GAP * 0.6);
    let mut height: f32 = 0.0;

    for (image, column) in images.iter().zip(columns.iter()) {
        match textures.get(image.file) {
            Some(texture) => {
                let (w, h) = image_size(texture, column.width);
                let x = column.x + (column.width - w) * 0.5;
                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                    Rectangle::new(x, column.y, w, h),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE,
                );
                height = height.max(h);
            }
            None => {
                let b = Bounds::new(column.x, column.y, column.width, PLACEHOLDER_HEIGHT);
                panel(d, b, theme::PLACEHOLDER);
                d.draw_rectangle_lines_ex(rect(b), 2.0, theme::PANEL_BORDER);
                draw_centered(d, image.alt, b, BODY_SIZE, theme::TEXT_MUTED);
                height = height.max(PLACEHOLDER_HEIGHT);
            }
        }
    }
    height
}

fn draw_callout<D: RaylibDraw>(d: &mut D, title: &str, text: &str, area: Bounds) -> f32 {
    let inner_width = area.width - 2.0 * PADDING;
    let lines = wrapped(text, inner_width, BODY_SIZE);
    let height = 2.0 * PADDING + line_height(HEADING_SIZE) + lines.len() as f32 * line_height(BODY_SIZE);
    let b = Bounds::new(area.x, area.y, area.width, height);

    panel(d, b, theme::PANEL);
    d.draw_rectangle_lines_ex(rect(b), 2.0, theme::HIGHLIGHT);
    let inner = b.inset(PADDING);
    d.draw_text(title, inner.x as i32, inner.y as i32, HEADING_SIZE, theme::HIGHLIGHT);
    draw_lines(d, &lines, inner.x, inner.y + line_height(HEADING_SIZE), BODY_SIZE, theme::TEXT);
    height
}
