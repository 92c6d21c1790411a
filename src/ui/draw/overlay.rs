//! Overlays drawn on top of the page: expanded skill detail and theme picker

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::page::HERO_HEIGHT;
use crate::app::{App, HitTarget};
use crate::content::Skill;
use crate::ui::skill_card::{cell_color, coord_label};
use crate::ui::text::highlight_spans;
use crate::ui::theme::{gradient_stops, Palette, ThemeKind};

/// Namespace shown in the detail manifest
const DETAILS_NAMESPACE: &str = "portfolio-shreeshesh";

/// Span colours for the YAML detail view
struct YamlStyle {
    key: Style,
    punct: Style,
    string: Style,
}

impl YamlStyle {
    fn new(palette: &Palette) -> Self {
        Self {
            key: Style::default().fg(palette.accent_secondary),
            punct: Style::default().fg(palette.accent),
            string: Style::default().fg(palette.text),
        }
    }

    /// `key:` and an optional value, indented by `depth` levels
    fn entry<'a>(&self, depth: usize, key: &'a str, value: Vec<Span<'a>>) -> Line<'a> {
        let mut spans = vec![
            Span::raw("  ".repeat(depth)),
            Span::styled(key, self.key),
            Span::styled(":", self.punct),
        ];
        if !value.is_empty() {
            spans.push(Span::raw(" "));
            spans.extend(value);
        }
        Line::from(spans)
    }
}

/// Body of the expanded card: the skill as a ConfigMap manifest
fn skill_details<'a>(skill: &'a Skill, query: &str, palette: &Palette) -> Vec<Line<'a>> {
    let yaml = YamlStyle::new(palette);
    let dim = Style::default().fg(palette.text_secondary);
    let hit = Style::default()
        .fg(palette.accent_secondary)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let mut lines = Vec::new();
    if let Some(coord) = skill.matrix_coord() {
        let color = cell_color(coord).unwrap_or(palette.text_secondary);
        lines.push(Line::from(vec![
            Span::styled(coord_label(coord), Style::default().fg(color)),
            Span::styled(" NODE_DETAILS", dim),
        ]));
        lines.push(Line::default());
    }

    lines.push(yaml.entry(0, "apiVersion", vec![Span::styled("v1", yaml.string)]));
    lines.push(yaml.entry(0, "kind", vec![Span::styled("ConfigMap", yaml.string)]));
    lines.push(yaml.entry(0, "metadata", Vec::new()));
    lines.push(yaml.entry(
        1,
        "name",
        vec![Span::styled(format!("{}-details", skill.id), yaml.string)],
    ));
    lines.push(yaml.entry(1, "namespace", vec![Span::styled(DETAILS_NAMESPACE, yaml.string)]));
    lines.push(yaml.entry(0, "data", Vec::new()));
    lines.push(yaml.entry(1, "summary", vec![Span::styled("|", yaml.punct)]));

    let summary_style = dim.add_modifier(Modifier::ITALIC);
    let mut summary = vec![Span::styled("    \"", summary_style)];
    summary.extend(highlight_spans(skill.description, query, summary_style, hit));
    summary.push(Span::styled("\"", summary_style));
    lines.push(Line::from(summary));

    lines.push(yaml.entry(1, "capabilities", Vec::new()));
    for item in skill.items {
        let mut spans = vec![Span::raw("    "), Span::styled("- ", yaml.punct)];
        spans.extend(highlight_spans(item, query, yaml.string, hit));
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("--- END OF SPEC ---", dim)).centered());
    lines
}

/// Expanded skill card: detail manifest over the grid
pub(crate) fn draw_skill_overlay(f: &mut Frame, app: &mut App, skill: &Skill, palette: &Palette) {
    let screen = f.area();
    // Keep the hero visible, cover the grid
    let below_hero = Rect {
        y: screen.y + HERO_HEIGHT.min(screen.height),
        height: screen.height.saturating_sub(HERO_HEIGHT),
        ..screen
    };
    let query = app.query().to_string();
    let lines = skill_details(skill, &query, palette);

    let height = (lines.len() as u16 + 2).min(below_hero.height);
    let area = centered_rect(60, height, below_hero);
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (from, _) = gradient_stops(skill.color).unwrap_or((palette.accent, palette.accent_secondary));
    let icon_color = skill
        .matrix_coord()
        .and_then(cell_color)
        .unwrap_or(palette.text);
    let title_style = Style::default().fg(palette.text).add_modifier(Modifier::BOLD);
    let hit = Style::default()
        .fg(palette.accent_secondary)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let mut title = vec![Span::styled(format!(" {} ", skill.icon), Style::default().fg(icon_color))];
    title.extend(highlight_spans(skill.title, &query, title_style, hit));
    title.push(Span::raw(" "));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::THICK)
        .border_style(Style::default().fg(from))
        .title(Line::from(title))
        .title_top(
            Line::from(Span::styled(" ✕ ", Style::default().fg(palette.text_secondary)))
                .right_aligned(),
        )
        .title_bottom(
            Line::from(Span::styled(
                format!(" {} items ", skill.items.len()),
                Style::default().fg(palette.text_secondary),
            ))
            .right_aligned(),
        )
        .style(Style::default().bg(palette.surface));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
    app.register_hit(area, HitTarget::Overlay);
}

/// Light/dark chooser with a swatch of every colour role
pub(crate) fn draw_theme_picker(f: &mut Frame, app: &mut App, palette: &Palette) {
    let rows = ThemeKind::ALL.len() as u16 * 2 + 4;
    let area = centered_rect(50, rows, f.area());
    if area.width < 4 || area.height < 3 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .title(Span::styled(
            " Theme ",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(" Enter: apply  ESC: cancel ").alignment(Alignment::Center))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let current = app.theme().kind();
    let selected = app.picker_selected();
    let swatches: Vec<_> = ThemeKind::ALL
        .iter()
        .map(|kind| (*kind, app.theme().resolve(*kind)))
        .collect();

    for (i, (kind, option)) in swatches.into_iter().enumerate() {
        let y = inner.y + 1 + i as u16 * 2;
        if y >= inner.bottom() {
            break;
        }
        let marker = if kind == current { "●" } else { "○" };
        let style = if kind == selected {
            Style::default()
                .fg(palette.background)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };

        let mut spans = vec![Span::styled(
            format!(" {} {} {:<6}", marker, kind.icon(), kind.label()),
            style,
        )];
        spans.push(Span::raw(" "));
        for (_, color) in option.roles() {
            spans.push(Span::styled("█", Style::default().fg(color)));
        }

        let row = Rect {
            y,
            height: 1,
            ..inner
        };
        f.render_widget(Paragraph::new(Line::from(spans)), row);
        app.register_hit(row, HitTarget::ThemeOption(kind));
    }
}

/// Rect of `percent_x` width and `height` rows, centred in `r`
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let width = (r.width as u32 * percent_x as u32 / 100) as u16;
    let width = width.max(30).min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
