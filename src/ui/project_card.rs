//! Project card widget: title, description, technology tags and links

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::theme::Palette;
use crate::content::Project;

pub const PROJECT_CARD_HEIGHT: u16 = 7;

pub struct ProjectCard<'a> {
    project: &'a Project,
    palette: &'a Palette,
    index: Option<usize>,
    selected: bool,
}

impl<'a> ProjectCard<'a> {
    pub fn new(project: &'a Project, palette: &'a Palette) -> Self {
        Self {
            project,
            palette,
            index: None,
            selected: false,
        }
    }

    /// Zero-based position, shown as `#N` in the top right corner
    pub fn index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl<'a> Widget for ProjectCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let border = if self.selected { p.accent } else { p.border };
        let bg = if self.selected { p.surface } else { p.card };

        let title_style = Style::default()
            .fg(if self.selected { p.accent } else { p.text })
            .add_modifier(Modifier::BOLD);
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(format!(" {} ", self.project.title), title_style))
            .style(Style::default().bg(bg));
        if let Some(index) = self.index {
            let color = if self.selected { p.accent } else { p.text_secondary };
            block = block.title_top(
                Line::from(Span::styled(
                    format!(" #{} ", index + 1),
                    Style::default().fg(color),
                ))
                .right_aligned(),
            );
        }

        let mut tags = Vec::new();
        for tech in self.project.technologies {
            tags.push(Span::styled(
                format!(" {} ", tech),
                Style::default().fg(p.accent_secondary).bg(p.gradient2),
            ));
            tags.push(Span::raw(" "));
        }

        // Full URLs go to the status bar for the selected card
        let key_style = Style::default().fg(p.accent);
        let label_style = Style::default().fg(p.text).add_modifier(Modifier::BOLD);
        let mut links = Vec::new();
        if self.project.github_link.is_some() {
            links.push(Span::styled("[g] ", key_style));
            links.push(Span::styled("🐙 View Code", label_style));
            links.push(Span::raw("   "));
        }
        if self.project.demo_link.is_some() {
            links.push(Span::styled("[d] ", key_style));
            links.push(Span::styled("🌐 Live Demo", label_style));
        }

        let lines = vec![
            Line::from(Span::styled(
                self.project.description,
                Style::default().fg(p.text_secondary),
            )),
            Line::from(tags),
            Line::from(links),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
