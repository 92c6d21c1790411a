//! Drawing functions for the TUI
//!
//! This module contains all rendering logic, split by layer:
//! - `page` - Hero, search bar, skill grid / projects, footer, status
//! - `overlay` - Expanded skill detail and theme picker

mod overlay;
mod page;

use ratatui::Frame;

use crate::app::{App, Focus};

use overlay::{draw_skill_overlay, draw_theme_picker};
use page::draw_page;

/// Main draw function
///
/// Rebuilds the click targets for the frame, so hit testing always
/// matches what is on screen.
pub fn draw(f: &mut Frame, app: &mut App) {
    let palette = *app.theme().palette();
    app.clear_hit_regions();

    draw_page(f, app, &palette);

    if let Some(skill) = app.expanded() {
        draw_skill_overlay(f, app, skill, &palette);
    }
    if app.focus() == Focus::ThemePicker {
        draw_theme_picker(f, app, &palette);
    }
}
