//! Skill card widget
//!
//! Renders each skill as a bordered tile with:
//! - Matrix coordinate label `[row,col]`
//! - Gradient accent bar
//! - Icon + title (bold, matched text highlighted)
//! - Description (wrapped, dimmed)
//! - Footer: item count, or the first item matching the search

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::text::{highlight_spans, truncate, wrap};
use super::theme::{gradient_stops, lerp_color, tailwind_color, Palette};
use crate::content::{Skill, MATRIX_COLUMNS};
use crate::search::match_ranges;

/// Rows a card occupies, borders included
pub const CARD_HEIGHT: u16 = 7;

/// Coordinate label colour per matrix cell, row-major
const CELL_COLORS: [&str; 9] = [
    "orange-400",
    "blue-400",
    "green-400",
    "purple-400",
    "red-400",
    "yellow-400",
    "cyan-400",
    "pink-400",
    "indigo-400",
];

/// `[row,col]` label for a matrix cell
pub fn coord_label((row, col): (usize, usize)) -> String {
    format!("[{},{}]", row, col)
}

/// Accent colour of a matrix cell; None outside the 3×3 matrix
pub fn cell_color((row, col): (usize, usize)) -> Option<Color> {
    if col >= MATRIX_COLUMNS {
        return None;
    }
    CELL_COLORS
        .get(row * MATRIX_COLUMNS + col)
        .and_then(|name| tailwind_color(name))
}

/// Skill card widget.
///
/// Style derives entirely from the state flags, there is no hover state.
pub struct SkillCard<'a> {
    skill: &'a Skill,
    palette: &'a Palette,
    selected: bool,
    expanded: bool,
    query: &'a str,
}

impl<'a> SkillCard<'a> {
    pub fn new(skill: &'a Skill, palette: &'a Palette) -> Self {
        Self {
            skill,
            palette,
            selected: false,
            expanded: false,
            query: "",
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Applied search query, for highlighting
    pub fn query(mut self, query: &'a str) -> Self {
        self.query = query;
        self
    }

    fn footer_line(&self, width: usize) -> Line<'a> {
        let p = self.palette;
        let dim = Style::default().fg(p.text_secondary);
        let hit = Style::default().fg(p.accent).add_modifier(Modifier::BOLD);

        // Show why the card matched when it was not the title or description
        let title_or_desc = !match_ranges(self.skill.title, self.query).is_empty()
            || !match_ranges(self.skill.description, self.query).is_empty();
        if !title_or_desc {
            if let Some(item) = self
                .skill
                .items
                .iter()
                .find(|item| !match_ranges(item, self.query).is_empty())
            {
                let mut spans = vec![Span::styled("▸ ", hit)];
                spans.extend(highlight_spans(item, self.query, dim, hit));
                return clip_line(spans, width);
            }
        }

        let marker = if self.expanded { "▾" } else { "▸" };
        Line::from(Span::styled(
            format!("{} {} items", marker, self.skill.items.len()),
            dim,
        ))
    }
}

impl<'a> Widget for SkillCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }
        let p = self.palette;
        let (from, to) = gradient_stops(self.skill.color).unwrap_or((p.accent, p.accent_secondary));

        let (border_color, border_set) = match (self.expanded, self.selected) {
            (true, _) => (from, border::THICK),
            (false, true) => (p.accent, border::ROUNDED),
            (false, false) => (p.border, border::ROUNDED),
        };
        let bg = if self.selected { p.surface } else { p.card };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_set(border_set)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(bg));
        if let Some(coord) = self.skill.matrix_coord() {
            let style = match cell_color(coord) {
                Some(color) => Style::default().fg(color).add_modifier(Modifier::BOLD),
                None => Style::default().fg(p.text_secondary),
            };
            block = block.title_top(
                Line::from(Span::styled(format!(" {} ", coord_label(coord)), style)).right_aligned(),
            );
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let width = inner.width as usize;

        // Gradient bar across the top of the card
        for dx in 0..inner.width {
            let t = if inner.width > 1 {
                dx as f32 / (inner.width - 1) as f32
            } else {
                0.0
            };
            if let Some(cell) = buf.cell_mut((inner.x + dx, inner.y)) {
                cell.set_symbol("▀").set_fg(lerp_color(from, to, t)).set_bg(bg);
            }
        }

        let mut lines = Vec::new();

        let title_style = Style::default()
            .fg(if self.selected { p.accent } else { p.text })
            .add_modifier(Modifier::BOLD);
        let hit = Style::default()
            .fg(p.accent_secondary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        let mut title = vec![Span::raw(format!("{} ", self.skill.icon))];
        title.extend(highlight_spans(self.skill.title, self.query, title_style, hit));
        lines.push(clip_line(title, width));

        let desc_rows = inner.height.saturating_sub(3) as usize;
        let desc_style = Style::default().fg(p.text_secondary);
        let mut desc = wrap(self.skill.description, width);
        if desc.len() > desc_rows {
            desc.truncate(desc_rows);
            if let Some(last) = desc.last_mut() {
                *last = truncate(&format!("{} …", last), width);
            }
        }
        for row in desc {
            let spans: Vec<Span> = highlight_spans(&row, self.query, desc_style, hit)
                .into_iter()
                .map(|s| Span::styled(s.content.into_owned(), s.style))
                .collect();
            lines.push(Line::from(spans));
        }

        let body = Rect {
            y: inner.y + 1,
            height: inner.height - 1,
            ..inner
        };
        let footer_y = body.y + body.height - 1;
        Paragraph::new(lines).render(
            Rect {
                height: body.height.saturating_sub(1),
                ..body
            },
            buf,
        );
        if body.height > 1 {
            Paragraph::new(self.footer_line(width)).render(
                Rect {
                    y: footer_y,
                    height: 1,
                    ..body
                },
                buf,
            );
        }
    }
}

/// Keep only as much of a line as fits in `width` columns
fn clip_line<'a>(spans: Vec<Span<'a>>, width: usize) -> Line<'a> {
    let mut used = 0;
    let mut out = Vec::new();
    for span in spans {
        let w = span.width();
        if used + w <= width {
            used += w;
            out.push(span);
        } else {
            let rest = truncate(&span.content, width - used);
            out.push(Span::styled(rest, span.style));
            break;
        }
    }
    Line::from(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SKILLS;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_card_renders_title_and_count() {
        let palette = Palette::dark();
        let area = Rect::new(0, 0, 40, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);

        SkillCard::new(&SKILLS[0], &palette).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("FOUNDATIONS"));
        assert!(text.contains("8 items"));
    }

    #[test]
    fn test_card_shows_matching_item() {
        let palette = Palette::dark();
        let area = Rect::new(0, 0, 60, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);

        SkillCard::new(&SKILLS[0], &palette)
            .query("fail2ban")
            .render(area, &mut buf);

        assert!(buffer_text(&buf).contains("fail2ban"));
    }

    #[test]
    fn test_selected_border_uses_accent() {
        let palette = Palette::dark();
        let area = Rect::new(0, 0, 30, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);

        SkillCard::new(&SKILLS[1], &palette)
            .selected(true)
            .render(area, &mut buf);

        assert_eq!(buf[(0, 0)].fg, palette.accent);
    }

    #[test]
    fn test_card_shows_matrix_coord() {
        let palette = Palette::dark();
        let area = Rect::new(0, 0, 40, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);

        SkillCard::new(&SKILLS[4], &palette).render(area, &mut buf);

        let top: String = (0..area.width).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(top.contains("[1,1]"));
        let x = (0..area.width).find(|&x| buf[(x, 0)].symbol() == "[").unwrap();
        assert_eq!(Some(buf[(x, 0)].fg), tailwind_color("red-400"));
    }

    #[test]
    fn test_cell_color() {
        assert_eq!(cell_color((0, 0)), tailwind_color("orange-400"));
        assert_eq!(cell_color((2, 2)), tailwind_color("indigo-400"));
        assert_eq!(cell_color((3, 0)), None);
        assert_eq!(cell_color((0, 3)), None);
        assert_eq!(coord_label((2, 1)), "[2,1]");
    }

    #[test]
    fn test_tiny_area_is_ignored() {
        let palette = Palette::light();
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        SkillCard::new(&SKILLS[0], &palette).render(area, &mut buf);
        assert!(buffer_text(&buf).trim().is_empty());
    }

    #[test]
    fn test_clip_line() {
        let line = clip_line(vec![Span::raw("abc"), Span::raw("defgh")], 6);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "abcde…");
    }
}
