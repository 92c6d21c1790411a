//! Page drawing functions
//!
//! This module renders everything outside the overlays:
//! - Hero header with particles, status badges and links
//! - Search bar
//! - Skill grid or project list
//! - Footer and status bar

use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, FooterLink, Focus, HitTarget, Section, View};
use crate::content::CONTACT;
use crate::ui::layout::GridLayout;
use crate::ui::project_card::{ProjectCard, PROJECT_CARD_HEIGHT};
use crate::ui::skill_card::{SkillCard, CARD_HEIGHT};
use crate::ui::theme::{tailwind_color, Palette};

/// Hero header height, borders included
pub(crate) const HERO_HEIGHT: u16 = 7;
/// Gap between grid columns
const COLUMN_GAP: u16 = 2;
/// Gap between hero links and footer entries
const LINK_GAP: u16 = 3;

pub(crate) fn draw_page(f: &mut Frame, app: &mut App, palette: &Palette) {
    let area = f.area();
    let bg_block = Block::default().style(Style::default().bg(palette.background));
    f.render_widget(bg_block, area);

    let chunks = Layout::vertical([
        Constraint::Length(HERO_HEIGHT), // Hero
        Constraint::Length(3),           // Search bar
        Constraint::Min(CARD_HEIGHT),    // Skills / projects
        Constraint::Length(2),           // Footer
        Constraint::Length(1),           // Status bar
    ])
    .split(area);

    draw_hero(f, app, chunks[0], palette);
    draw_search_bar(f, app, chunks[1], palette);
    match app.view() {
        View::Skills => draw_skill_grid(f, app, chunks[2], palette),
        View::Projects => draw_projects(f, app, chunks[2], palette),
    }
    draw_footer(f, app, chunks[3], palette);
    draw_status_bar(f, app, chunks[4], palette);
}

/// Border style for a section, pulsing while it is highlighted
fn section_border(app: &App, section: Section, palette: &Palette) -> Style {
    if app.is_highlighted(section) {
        let on = (app.elapsed().as_millis() / 400) % 2 == 0;
        let color = if on { palette.accent } else { palette.glow };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.border)
    }
}

/// x offset that centres `width` inside `area`
fn centered_x(area: Rect, width: u16) -> u16 {
    area.x + area.width.saturating_sub(width) / 2
}

fn draw_hero(f: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let theme = app.theme().kind();
    let badge = format!(" {} {} ", theme.icon(), theme.label());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(section_border(app, Section::Contact, palette))
        .title_top(
            Line::from(Span::styled(
                badge.clone(),
                Style::default().fg(palette.accent).bg(palette.surface),
            ))
            .right_aligned(),
        )
        .style(Style::default().bg(palette.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let badge_width = badge.width() as u16;
    app.register_hit(
        Rect {
            x: area.right().saturating_sub(badge_width + 1),
            y: area.y,
            width: badge_width,
            height: 1,
        },
        HitTarget::ThemeBadge,
    );

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    draw_particles(f, app, inner, palette);

    // Name, last word in accent
    let upper = CONTACT.name.to_uppercase();
    let (first, last) = upper.rsplit_once(' ').unwrap_or(("", upper.as_str()));
    let name_style = Style::default().fg(palette.text).add_modifier(Modifier::BOLD);
    let name = Line::from(vec![
        Span::styled(format!("{} ", first), name_style),
        Span::styled(last.to_string(), name_style.fg(palette.accent)),
    ]);

    let divider = Line::from(Span::styled(
        "─".repeat(inner.width.min(40) as usize),
        Style::default().fg(palette.border),
    ));

    let dot = |color: &str| {
        Span::styled(
            "● ",
            Style::default().fg(tailwind_color(color).unwrap_or(palette.accent)),
        )
    };
    let label = Style::default().fg(palette.text_secondary);
    let status = Line::from(vec![
        dot("green-500"),
        Span::styled("STATUS: ONLINE   ", label),
        dot("blue-500"),
        Span::styled(format!("ROLE: {}   ", CONTACT.role), label),
        dot("purple-500"),
        Span::styled(format!("Location: {}", CONTACT.location), label),
    ]);

    let header = Paragraph::new(vec![name, divider, status]).alignment(Alignment::Center);
    f.render_widget(
        header,
        Rect {
            height: inner.height.min(3),
            ..inner
        },
    );

    if inner.height >= 5 {
        draw_links(f, app, Rect { y: inner.y + 4, height: 1, ..inner }, palette);
    }
}

/// Rising streaks behind the hero text
fn draw_particles(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let elapsed = app.elapsed();
    let buf = f.buffer_mut();
    for particle in app.particles().iter() {
        let x = area.x + ((particle.left / 100.0) * area.width as f32) as u16;
        let rise = (particle.phase(elapsed) * area.height as f32) as u16;
        let y = area.y + area.height.saturating_sub(1).saturating_sub(rise.min(area.height - 1));
        if x >= area.right() {
            continue;
        }
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol("│").set_fg(palette.border);
        }
    }
}

/// Contact and social links, each a click target
fn draw_links(f: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let focused = app.focused_link().map(|_| app.link_selected());
    let items: Vec<(String, usize)> = app
        .links()
        .iter()
        .enumerate()
        .map(|(i, link)| (format!(" {} {} ", link.icon, link.label), i))
        .collect();

    let total: u16 = items.iter().map(|(text, _)| text.width() as u16).sum::<u16>()
        + LINK_GAP * items.len().saturating_sub(1) as u16;
    let mut x = centered_x(area, total);

    for (text, index) in items {
        let width = (text.width() as u16).min(area.right().saturating_sub(x));
        if width == 0 {
            break;
        }
        let style = if focused == Some(index) {
            Style::default()
                .fg(palette.background)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text).bg(palette.surface)
        };
        f.buffer_mut().set_stringn(x, area.y, &text, width as usize, style);
        app.register_hit(
            Rect {
                x,
                y: area.y,
                width,
                height: 1,
            },
            HitTarget::Link(index),
        );
        x += width + LINK_GAP;
    }
}

fn draw_search_bar(f: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let config = app.config();
    let searching = app.is_searching();
    let visible = app.visible_skills().len();
    let total = crate::content::SKILLS.len();

    let text = if app.input().is_empty() {
        Line::from(vec![
            Span::styled(config.appearance.prompt.clone(), Style::default().fg(palette.accent)),
            Span::styled(
                config.appearance.placeholder.clone(),
                Style::default().fg(palette.text_secondary),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(config.appearance.prompt.clone(), Style::default().fg(palette.accent)),
            Span::styled(app.input().to_string(), Style::default().fg(palette.text)),
        ])
    };

    let border = if searching { palette.accent } else { palette.border };
    let pending = if app.has_pending_search() { " ⋯" } else { "" };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" Search ")
        .title_top(Line::from(format!(" {}/{}{} ", visible, total, pending)).right_aligned())
        .style(Style::default().bg(palette.background));
    if !app.input().is_empty() {
        block = block.title_bottom(Line::from(vec![
            Span::styled(" Searching for: ", Style::default().fg(palette.text_secondary)),
            Span::styled(
                format!("\"{}\" ", app.input()),
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let inner = block.inner(area);
    f.render_widget(Paragraph::new(text).block(block), area);
    app.register_hit(area, HitTarget::SearchBar);

    if !app.input().is_empty() && inner.width > 4 {
        let clear = Rect {
            x: inner.right() - 3,
            y: inner.y,
            width: 3,
            height: 1,
        };
        f.buffer_mut()
            .set_string(clear.x, clear.y, " ✕ ", Style::default().fg(palette.text_secondary));
        app.register_hit(clear, HitTarget::ClearSearch);
    }

    if searching {
        // Use display width (not byte length) for proper Unicode handling
        let prompt_width = app.config().appearance.prompt.width() as u16;
        let input_width = app.input().width() as u16;
        let cursor_x = (inner.x + prompt_width + input_width).min(inner.right().saturating_sub(1));
        f.set_cursor_position((cursor_x, inner.y));
    }
}

/// Skill cards on a responsive grid
fn draw_skill_grid(f: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(section_border(app, Section::Skills, palette))
        .title(Line::from(vec![
            Span::styled(" TECHNICAL ", Style::default().fg(palette.text).add_modifier(Modifier::BOLD)),
            Span::styled("SKILLS ", Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
        ]))
        .style(Style::default().bg(palette.background));
    let inner = block.inner(area);

    if inner.width == 0 || inner.height == 0 {
        f.render_widget(block, area);
        return;
    }

    let skills = app.visible_skills();
    if skills.is_empty() {
        let msg = Paragraph::new(Line::from(vec![
            Span::styled("No skills match ", Style::default().fg(palette.text_secondary)),
            Span::styled(format!("\"{}\"", app.query().trim()), Style::default().fg(palette.accent)),
        ]))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let columns = GridLayout::responsive(app.config().appearance.columns(), inner.width, COLUMN_GAP);
    let rows = (inner.height / CARD_HEIGHT).max(1);
    let grid = GridLayout::new(columns, rows);
    // Size cards by the grid actually laid out
    let columns = grid.columns;
    app.set_grid_layout(grid);

    let selected = app.selected_index();
    let range = grid.visible_range(selected, skills.len());
    let pages = skills.len().div_ceil(grid.visible_count());
    let block = if pages > 1 {
        let page = selected / grid.visible_count() + 1;
        block.title_bottom(Line::from(format!(" page {}/{} ", page, pages)).right_aligned())
    } else {
        block
    };
    f.render_widget(block, area);

    let column_width =
        (inner.width.saturating_sub(COLUMN_GAP * (columns - 1))) / columns;
    let query = app.query().to_string();

    for (local_idx, skill) in skills[range.clone()].iter().enumerate() {
        let global_idx = range.start + local_idx;
        let (row, col) = grid.index_to_position(local_idx);

        let card_area = Rect {
            x: inner.x + col * (column_width + COLUMN_GAP),
            y: inner.y + row * CARD_HEIGHT,
            width: column_width,
            height: CARD_HEIGHT.min(inner.bottom().saturating_sub(inner.y + row * CARD_HEIGHT)),
        };
        if card_area.height == 0 {
            continue;
        }

        let card = SkillCard::new(skill, palette)
            .selected(global_idx == selected && app.focus() == Focus::Main)
            .expanded(app.is_expanded(skill.id))
            .query(&query);
        f.render_widget(card, card_area);
        app.register_hit(card_area, HitTarget::Card(global_idx));
    }
}

fn draw_projects(f: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(section_border(app, Section::Projects, palette))
        .title(Span::styled(
            " PROJECTS ",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(palette.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let per_page = (inner.height / PROJECT_CARD_HEIGHT).max(1) as usize;
    let selected = app.project_selected();
    let start = (selected / per_page) * per_page;

    for (offset, project) in app.projects().iter().enumerate().skip(start).take(per_page) {
        let row = (offset - start) as u16;
        let y = inner.y + row * PROJECT_CARD_HEIGHT;
        let card_area = Rect {
            y,
            height: PROJECT_CARD_HEIGHT.min(inner.bottom().saturating_sub(y)),
            ..inner
        };
        if card_area.height == 0 {
            break;
        }
        let card = ProjectCard::new(project, palette)
            .index(offset)
            .selected(offset == selected);
        f.render_widget(card, card_area);
        app.register_hit(card_area, HitTarget::Project(offset));
    }
}

fn draw_footer(f: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    if area.height == 0 {
        return;
    }
    let labels: Vec<(FooterLink, String)> = FooterLink::ALL
        .iter()
        .enumerate()
        .map(|(i, link)| (*link, format!("{} {}", i + 1, link.label())))
        .collect();

    let total: u16 = labels.iter().map(|(_, l)| l.width() as u16).sum::<u16>()
        + LINK_GAP * (labels.len() as u16 - 1);
    let mut x = centered_x(area, total);

    for (link, text) in labels {
        let width = (text.width() as u16).min(area.right().saturating_sub(x));
        if width == 0 {
            break;
        }
        let style = if app.is_highlighted(link.target()) {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        f.buffer_mut().set_stringn(x, area.y, &text, width as usize, style);
        app.register_hit(
            Rect {
                x,
                y: area.y,
                width,
                height: 1,
            },
            HitTarget::Footer(link),
        );
        x += width + LINK_GAP;
    }

    if area.height > 1 {
        let year = chrono::Local::now().year();
        let copyright = Paragraph::new(format!(
            "© {} {} • Built for Modern DevOps Landscapes",
            year, CONTACT.name
        ))
        .style(Style::default().fg(palette.text_secondary))
        .alignment(Alignment::Center);
        f.render_widget(copyright, Rect { y: area.y + 1, height: 1, ..area });
    }
}

/// Draw the status bar
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hints = match app.focus() {
        Focus::Search => " Enter: apply | ESC: clear | ↓: cards".to_string(),
        Focus::ThemePicker => " ↑↓: choose | Enter: apply | ESC: cancel".to_string(),
        Focus::Links => match app.focused_link() {
            Some(link) => format!(" {} | ←→: links | Enter: open | ESC: back", link.url),
            None => String::new(),
        },
        Focus::Main if app.expanded().is_some() => {
            " ←→: browse | Enter/ESC: close | t: theme".to_string()
        }
        Focus::Main => match app.view() {
            View::Skills => format!(
                " {}/{} | ↑↓←→: nav | Enter: expand | /: search | p: projects | c: contact | t/T: theme | 1-3: footer | q: quit",
                (app.selected_index() + 1).min(app.visible_skills().len()),
                app.visible_skills().len()
            ),
            View::Projects => {
                let urls: Vec<String> = app
                    .selected_project()
                    .map(|project| {
                        [("g", project.github_link), ("d", project.demo_link)]
                            .into_iter()
                            .filter_map(|(key, url)| url.map(|url| format!("{}: {}", key, url)))
                            .collect()
                    })
                    .unwrap_or_default();
                if urls.is_empty() {
                    " ↑↓: nav | p: skills | t/T: theme | q: quit".to_string()
                } else {
                    format!(
                        " {} | ↑↓: nav | p: skills | t/T: theme | q: quit",
                        urls.join(" | ")
                    )
                }
            }
        },
    };

    let status_bar = Paragraph::new(hints)
        .style(Style::default().fg(palette.text_secondary).bg(palette.surface));
    f.render_widget(status_bar, area);
}
