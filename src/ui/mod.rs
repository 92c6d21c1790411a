//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Page and overlay draw functions
//! - `theme.rs` - Light/dark palettes and the theme context
//! - `layout.rs` - Grid layout logic
//! - `skill_card.rs` / `project_card.rs` - Card widgets
//! - `text.rs` - Truncation, wrapping and match highlighting

mod draw;
pub mod layout;
pub mod project_card;
pub mod skill_card;
pub mod text;
pub mod theme;

// Re-export main draw function
pub use draw::draw;
