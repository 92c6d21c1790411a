use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::content::{Project, Skill, CONTACT, PROJECTS, SKILLS, SOCIAL_LINKS};
use crate::links::Link;
use crate::particles::Particles;
use crate::search::{self, Debouncer};
use crate::ui::layout::GridLayout;
use crate::ui::theme::{ThemeContext, ThemeKind};

/// Page sections that can be highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Hero header with contact and social links
    Contact,
    Skills,
    Projects,
}

/// What the main panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Skills,
    Projects,
}

/// Where keyboard input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Skill grid or project list, depending on the view
    Main,
    Search,
    Links,
    ThemePicker,
}

/// Footer links; each jumps to a section and pulses it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterLink {
    BuildLogs,
    SystemInfo,
    DeployStatus,
}

impl FooterLink {
    pub const ALL: [FooterLink; 3] = [
        FooterLink::BuildLogs,
        FooterLink::SystemInfo,
        FooterLink::DeployStatus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FooterLink::BuildLogs => "BUILD_LOGS",
            FooterLink::SystemInfo => "SYSTEM_INFO",
            FooterLink::DeployStatus => "DEPLOY_STATUS",
        }
    }

    pub fn target(self) -> Section {
        match self {
            FooterLink::BuildLogs => Section::Skills,
            FooterLink::SystemInfo => Section::Contact,
            FooterLink::DeployStatus => Section::Projects,
        }
    }
}

/// A section pulsing after a footer link was activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub section: Section,
    pub until: Instant,
}

/// Clickable things, registered by the draw pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Index into the filtered skill list
    Card(usize),
    /// The expanded skill overlay (body and close control)
    Overlay,
    Project(usize),
    /// Index into the hero links
    Link(usize),
    Footer(FooterLink),
    ThemeBadge,
    ThemeOption(ThemeKind),
    SearchBar,
    ClearSearch,
}

/// Side effects the event loop has to carry out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Quit,
    OpenUrl(String),
}

/// Application state
pub struct App {
    /// All bundled skills
    skills: &'static [Skill],
    /// Skills matching the applied query, in original order
    filtered: Vec<&'static Skill>,
    /// Selected index in the filtered list
    selected: usize,
    /// Id of the expanded skill card, at most one
    expanded: Option<&'static str>,
    /// Search text as typed
    input: String,
    /// Search text the filter was last applied with
    query: String,
    debouncer: Debouncer<String>,
    focus: Focus,
    view: View,
    projects: &'static [Project],
    project_selected: usize,
    links: Vec<Link>,
    link_selected: usize,
    picker_selected: ThemeKind,
    highlight: Option<Highlight>,
    highlight_duration: Duration,
    theme: ThemeContext,
    particles: Particles,
    started: Instant,
    /// Grid geometry from the last frame
    grid: GridLayout,
    hit_regions: Vec<(Rect, HitTarget)>,
    config: Config,
}

impl App {
    pub fn new(config: Config, theme: ThemeContext, particles: Particles) -> Self {
        let skills = SKILLS;
        let filtered = skills.iter().collect();
        let picker_selected = theme.kind();

        Self {
            skills,
            filtered,
            selected: 0,
            expanded: None,
            input: String::new(),
            query: String::new(),
            debouncer: Debouncer::new(config.search.debounce()),
            focus: Focus::Main,
            view: View::Skills,
            projects: PROJECTS,
            project_selected: 0,
            links: Link::hero_links(&CONTACT, SOCIAL_LINKS),
            link_selected: 0,
            picker_selected,
            highlight: None,
            highlight_duration: config.highlight.duration(),
            theme,
            particles,
            started: Instant::now(),
            grid: GridLayout::new(config.appearance.columns(), 3),
            hit_regions: Vec::new(),
            config,
        }
    }

    // ----- Skills -----

    /// Currently visible skills, in original order
    pub fn visible_skills(&self) -> Vec<&'static Skill> {
        self.filtered.clone()
    }

    pub fn selected_skill(&self) -> Option<&'static Skill> {
        self.filtered.get(self.selected).copied()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn expanded(&self) -> Option<&'static Skill> {
        self.expanded.and_then(Skill::by_id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded == Some(id)
    }

    /// Expand the card, or collapse it if it is the expanded one.
    /// Expanding a card collapses whichever was open before.
    pub fn toggle_expanded(&mut self, id: &'static str) {
        self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        // Browsing while a card is open keeps the overlay on the selection
        if self.expanded.is_some() {
            self.expanded = self.selected_skill().map(|s| s.id);
        }
    }

    // ----- Search -----

    /// Search text as typed
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Query currently applied to the grid
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_searching(&self) -> bool {
        self.focus == Focus::Search
    }

    pub fn start_search(&mut self) {
        self.focus = Focus::Search;
        self.view = View::Skills;
    }

    pub fn push_search_char(&mut self, c: char, now: Instant) {
        self.input.push(c);
        self.debouncer.submit(self.input.clone(), now);
    }

    pub fn pop_search_char(&mut self, now: Instant) {
        self.input.pop();
        self.debouncer.submit(self.input.clone(), now);
    }

    /// Empty the search box and show every skill right away
    pub fn clear_search(&mut self) {
        self.input.clear();
        self.debouncer.cancel();
        self.apply_query(String::new());
    }

    /// Apply whatever is typed without waiting for the debounce
    pub fn submit_search(&mut self) {
        if let Some(query) = self.debouncer.flush() {
            self.apply_query(query);
        }
        self.focus = Focus::Main;
    }

    pub fn has_pending_search(&self) -> bool {
        self.debouncer.is_pending()
    }

    fn apply_query(&mut self, query: String) {
        if query == self.query {
            return;
        }
        tracing::debug!("Applying search query {:?}", query);
        self.filtered = search::filter_skills(self.skills, &query);
        self.query = query;

        if self.selected >= self.filtered.len() {
            self.selected = 0;
        }
        // A card filtered out of view cannot stay open
        if let Some(id) = self.expanded {
            if !self.filtered.iter().any(|s| s.id == id) {
                self.expanded = None;
            }
        }
    }

    // ----- Timers -----

    /// Advance time-driven state: debounced search and highlight expiry
    pub fn tick(&mut self, now: Instant) {
        if let Some(query) = self.debouncer.poll(now) {
            self.apply_query(query);
        }
        if matches!(self.highlight, Some(h) if now >= h.until) {
            tracing::debug!("Highlight expired");
            self.highlight = None;
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    // ----- Footer highlight -----

    pub fn activate_footer(&mut self, link: FooterLink, now: Instant) {
        let section = link.target();
        match section {
            Section::Skills => self.view = View::Skills,
            Section::Projects => self.view = View::Projects,
            Section::Contact => {}
        }
        self.focus = if section == Section::Contact {
            Focus::Links
        } else {
            Focus::Main
        };
        // An unrepresentable deadline expires on the next tick
        let until = now.checked_add(self.highlight_duration).unwrap_or(now);
        self.highlight = Some(Highlight { section, until });
    }

    pub fn is_highlighted(&self, section: Section) -> bool {
        self.highlight.is_some_and(|h| h.section == section)
    }

    // ----- Theme -----

    pub fn theme(&self) -> &ThemeContext {
        &self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        self.picker_selected = self.theme.kind();
    }

    pub fn set_theme(&mut self, kind: ThemeKind) {
        self.theme.set(kind);
        self.picker_selected = kind;
    }

    pub fn open_theme_picker(&mut self) {
        self.picker_selected = self.theme.kind();
        self.focus = Focus::ThemePicker;
    }

    pub fn picker_selected(&self) -> ThemeKind {
        self.picker_selected
    }

    // ----- Projects & links -----

    pub fn view(&self) -> View {
        self.view
    }

    pub fn switch_view(&mut self) {
        self.view = match self.view {
            View::Skills => View::Projects,
            View::Projects => View::Skills,
        };
        self.collapse();
    }

    pub fn projects(&self) -> &'static [Project] {
        self.projects
    }

    pub fn project_selected(&self) -> usize {
        self.project_selected
    }

    pub fn selected_project(&self) -> Option<&'static Project> {
        self.projects.get(self.project_selected)
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn link_selected(&self) -> usize {
        self.link_selected
    }

    pub fn focused_link(&self) -> Option<&Link> {
        if self.focus == Focus::Links {
            self.links.get(self.link_selected)
        } else {
            None
        }
    }

    // ----- Accessors for drawing -----

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn particles(&self) -> &Particles {
        &self.particles
    }

    /// Record the grid geometry the last frame was drawn with
    pub fn set_grid_layout(&mut self, grid: GridLayout) {
        self.grid = grid;
    }

    pub fn clear_hit_regions(&mut self) {
        self.hit_regions.clear();
    }

    pub fn register_hit(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.hit_regions.push((area, target));
        }
    }

    /// Topmost target under a cell; later registrations draw on top
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        self.hit_regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| *target)
    }

    // ----- Input -----

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<Effect> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Effect::Quit);
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key, now),
            Focus::ThemePicker => self.handle_picker_key(key),
            Focus::Links => self.handle_links_key(key, now),
            Focus::Main if self.expanded.is_some() => self.handle_overlay_key(key, now),
            Focus::Main => match self.view {
                View::Skills => self.handle_grid_key(key, now),
                View::Projects => self.handle_projects_key(key, now),
            },
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) -> Option<Effect> {
        match key.code {
            KeyCode::Esc => {
                if self.input.is_empty() {
                    self.focus = Focus::Main;
                } else {
                    self.clear_search();
                }
            }
            KeyCode::Enter | KeyCode::Down => self.submit_search(),
            KeyCode::Backspace => self.pop_search_char(now),
            KeyCode::Char(c) => self.push_search_char(c, now),
            _ => {}
        }
        None
    }

    fn handle_picker_key(&mut self, key: KeyEvent) -> Option<Effect> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.focus = Focus::Main,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.set_theme(self.picker_selected);
                self.focus = Focus::Main;
            }
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::Char('j')
            | KeyCode::Char('k') => self.picker_selected = self.picker_selected.toggle(),
            _ => {}
        }
        None
    }

    fn handle_links_key(&mut self, key: KeyEvent, now: Instant) -> Option<Effect> {
        let total = self.links.len();
        match key.code {
            KeyCode::Esc | KeyCode::Down => self.focus = Focus::Main,
            KeyCode::Char('q') => return Some(Effect::Quit),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
                self.link_selected = (self.link_selected + total - 1) % total.max(1);
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                self.link_selected = (self.link_selected + 1) % total.max(1);
            }
            KeyCode::Enter => {
                return self
                    .links
                    .get(self.link_selected)
                    .map(|l| Effect::OpenUrl(l.url.clone()));
            }
            KeyCode::Char(c @ '1'..='3') => self.footer_key(c, now),
            _ => {}
        }
        None
    }

    fn handle_overlay_key(&mut self, key: KeyEvent, now: Instant) -> Option<Effect> {
        let total = self.filtered.len();
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('x') => {
                self.collapse()
            }
            KeyCode::Char('q') => return Some(Effect::Quit),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
                self.select(self.grid.tab_prev(self.selected, total))
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                self.select(self.grid.tab_next(self.selected, total))
            }
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char(c @ '1'..='3') => {
                self.collapse();
                self.footer_key(c, now);
            }
            _ => {}
        }
        None
    }

    fn handle_grid_key(&mut self, key: KeyEvent, now: Instant) -> Option<Effect> {
        let total = self.filtered.len();
        let grid = self.grid;
        match key.code {
            KeyCode::Esc => {
                if self.input.is_empty() {
                    return Some(Effect::Quit);
                }
                self.clear_search();
            }
            KeyCode::Char('q') => return Some(Effect::Quit),
            KeyCode::Char('/') => self.start_search(),
            KeyCode::Up | KeyCode::Char('k') => {
                if grid.move_up(self.selected) == self.selected {
                    self.focus = Focus::Search;
                } else {
                    self.select(grid.move_up(self.selected));
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.select(grid.move_down(self.selected, total)),
            KeyCode::Left | KeyCode::Char('h') => self.select(grid.move_left(self.selected)),
            KeyCode::Right | KeyCode::Char('l') => {
                self.select(grid.move_right(self.selected, total))
            }
            KeyCode::Tab => self.select(grid.tab_next(self.selected, total)),
            KeyCode::BackTab => self.select(grid.tab_prev(self.selected, total)),
            KeyCode::Home => self.select(0),
            KeyCode::End => self.select(grid.move_end(total)),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(skill) = self.selected_skill() {
                    self.toggle_expanded(skill.id);
                }
            }
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('T') => self.open_theme_picker(),
            KeyCode::Char('p') => self.switch_view(),
            KeyCode::Char('c') => self.focus = Focus::Links,
            KeyCode::Char(c @ '1'..='3') => self.footer_key(c, now),
            KeyCode::Char(c) if c.is_alphanumeric() => {
                // Start searching immediately on any other char
                self.start_search();
                self.push_search_char(c, now);
            }
            _ => {}
        }
        None
    }

    fn handle_projects_key(&mut self, key: KeyEvent, now: Instant) -> Option<Effect> {
        let total = self.projects.len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('p') => self.view = View::Skills,
            KeyCode::Char('q') => return Some(Effect::Quit),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.project_selected = self.project_selected.saturating_sub(1)
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                if self.project_selected + 1 < total {
                    self.project_selected += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char('g') => {
                return self
                    .selected_project()
                    .and_then(|p| p.github_link)
                    .map(|url| Effect::OpenUrl(url.to_string()));
            }
            KeyCode::Char('d') => {
                return self
                    .selected_project()
                    .and_then(|p| p.demo_link)
                    .map(|url| Effect::OpenUrl(url.to_string()));
            }
            KeyCode::Char('/') => self.start_search(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('T') => self.open_theme_picker(),
            KeyCode::Char('c') => self.focus = Focus::Links,
            KeyCode::Char(c @ '1'..='3') => self.footer_key(c, now),
            _ => {}
        }
        None
    }

    fn footer_key(&mut self, c: char, now: Instant) {
        let index = (c as usize).saturating_sub('1' as usize);
        if let Some(&link) = FooterLink::ALL.get(index) {
            self.activate_footer(link, now);
        }
    }

    /// Handle a left click at a terminal cell
    pub fn handle_click(&mut self, column: u16, row: u16, now: Instant) -> Option<Effect> {
        let target = self.hit_test(column, row);
        tracing::debug!("Click at ({}, {}) -> {:?}", column, row, target);

        // Clicking anywhere else dismisses the theme picker
        if self.focus == Focus::ThemePicker && !matches!(target, Some(HitTarget::ThemeOption(_))) {
            self.focus = Focus::Main;
            return None;
        }

        match target? {
            HitTarget::Card(index) => {
                self.focus = Focus::Main;
                self.selected = index;
                if let Some(skill) = self.selected_skill() {
                    self.toggle_expanded(skill.id);
                }
            }
            HitTarget::Overlay => self.collapse(),
            HitTarget::Project(index) => {
                self.focus = Focus::Main;
                self.project_selected = index;
            }
            HitTarget::Link(index) => {
                self.link_selected = index;
                return self.links.get(index).map(|l| Effect::OpenUrl(l.url.clone()));
            }
            HitTarget::Footer(link) => {
                self.collapse();
                self.activate_footer(link, now);
            }
            HitTarget::ThemeBadge => self.toggle_theme(),
            HitTarget::ThemeOption(kind) => {
                self.set_theme(kind);
                self.focus = Focus::Main;
            }
            HitTarget::SearchBar => self.start_search(),
            HitTarget::ClearSearch => {
                self.clear_search();
                self.focus = Focus::Search;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn app() -> App {
        App::new(
            Config::default(),
            ThemeContext::detached(ThemeKind::Dark),
            Particles::generate(4, Some(7)),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_str(app: &mut App, s: &str, now: Instant) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c)), now);
        }
    }

    #[test]
    fn test_only_one_card_expanded() {
        let mut app = app();
        app.toggle_expanded("foundations");
        assert!(app.is_expanded("foundations"));

        app.toggle_expanded("cloud");
        assert!(app.is_expanded("cloud"));
        assert!(!app.is_expanded("foundations"));

        app.toggle_expanded("cloud");
        assert!(app.expanded().is_none());
    }

    #[test]
    fn test_enter_toggles_selected_card() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(key(KeyCode::Right), now);
        app.handle_key(key(KeyCode::Enter), now);
        assert_eq!(app.expanded().map(|s| s.id), Some("automation"));

        app.handle_key(key(KeyCode::Esc), now);
        assert!(app.expanded().is_none());
    }

    #[test]
    fn test_browsing_while_expanded_moves_overlay() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(key(KeyCode::Enter), now);
        app.handle_key(key(KeyCode::Right), now);
        assert_eq!(app.expanded().map(|s| s.id), Some("automation"));
        assert_eq!(app.selected_index(), 1);
    }

    #[test]
    fn test_search_is_debounced() {
        let mut app = app();
        let start = Instant::now();

        app.handle_key(key(KeyCode::Char('/')), start);
        type_str(&mut app, "kubernetes", start);
        assert_eq!(app.input(), "kubernetes");
        assert_eq!(app.visible_skills().len(), SKILLS.len());

        app.tick(start + Duration::from_millis(299));
        assert_eq!(app.visible_skills().len(), SKILLS.len());

        app.tick(start + Duration::from_millis(300));
        assert_eq!(app.query(), "kubernetes");
        assert!(app.visible_skills().iter().any(|s| s.title == "KUBERNETES"));
        assert!(app.visible_skills().len() < SKILLS.len());
    }

    #[test]
    fn test_each_keystroke_resets_debounce() {
        let mut app = app();
        let start = Instant::now();
        app.start_search();

        app.push_search_char('h', start);
        app.push_search_char('e', start + Duration::from_millis(200));
        app.tick(start + Duration::from_millis(400));
        assert_eq!(app.query(), "");

        app.tick(start + Duration::from_millis(500));
        assert_eq!(app.query(), "he");
    }

    #[test]
    fn test_clear_search_applies_immediately() {
        let mut app = app();
        let now = Instant::now();
        app.start_search();
        type_str(&mut app, "helm", now);
        app.handle_key(key(KeyCode::Enter), now);
        assert_eq!(app.query(), "helm");
        assert_eq!(app.focus(), Focus::Main);

        app.handle_key(key(KeyCode::Char('/')), now);
        app.handle_key(key(KeyCode::Esc), now);
        assert_eq!(app.query(), "");
        assert_eq!(app.visible_skills().len(), SKILLS.len());
        assert!(!app.has_pending_search());
    }

    #[test]
    fn test_filtering_out_expanded_card_collapses_it() {
        let mut app = app();
        app.toggle_expanded("foundations");
        app.start_search();
        type_str(&mut app, "argocd", Instant::now());
        app.submit_search();
        assert!(app.expanded().is_none());
        assert!(app.visible_skills().iter().all(|s| s.id != "foundations"));
    }

    #[test]
    fn test_unbound_char_starts_search() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(key(KeyCode::Char('a')), now);
        assert!(app.is_searching());
        assert_eq!(app.input(), "a");
    }

    #[test]
    fn test_theme_toggle_keys() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(key(KeyCode::Char('t')), now);
        assert_eq!(app.theme().kind(), ThemeKind::Light);
        app.handle_key(key(KeyCode::Char('t')), now);
        assert_eq!(app.theme().kind(), ThemeKind::Dark);

        app.handle_key(key(KeyCode::Char('T')), now);
        assert_eq!(app.focus(), Focus::ThemePicker);
        app.handle_key(key(KeyCode::Down), now);
        app.handle_key(key(KeyCode::Enter), now);
        assert_eq!(app.theme().kind(), ThemeKind::Light);
        assert_eq!(app.focus(), Focus::Main);
    }

    #[test]
    fn test_footer_highlight_expires() {
        let mut app = app();
        let now = Instant::now();

        app.handle_key(key(KeyCode::Char('3')), now);
        assert_eq!(app.view(), View::Projects);
        assert!(app.is_highlighted(Section::Projects));

        app.tick(now + Duration::from_millis(4999));
        assert!(app.is_highlighted(Section::Projects));

        app.tick(now + Duration::from_secs(5));
        assert!(!app.is_highlighted(Section::Projects));
    }

    #[test]
    fn test_new_footer_link_restarts_highlight() {
        let mut app = app();
        let now = Instant::now();
        app.activate_footer(FooterLink::BuildLogs, now);
        app.activate_footer(FooterLink::SystemInfo, now + Duration::from_secs(3));

        app.tick(now + Duration::from_secs(6));
        assert!(app.is_highlighted(Section::Contact));
        assert!(!app.is_highlighted(Section::Skills));
        assert_eq!(app.focus(), Focus::Links);
    }

    #[test]
    fn test_huge_highlight_duration_is_clamped() {
        let config = Config::parse("[highlight]\nduration_secs = 9223372036854775807").unwrap();
        let mut app = App::new(
            config,
            ThemeContext::detached(ThemeKind::Dark),
            Particles::generate(0, Some(1)),
        );
        let now = Instant::now();

        app.activate_footer(FooterLink::BuildLogs, now);
        app.tick(now + Duration::from_secs(60));
        assert!(app.is_highlighted(Section::Skills));

        app.tick(now + Duration::from_secs(3600));
        assert!(!app.is_highlighted(Section::Skills));
    }

    #[test]
    fn test_project_links() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(key(KeyCode::Char('p')), now);
        app.handle_key(key(KeyCode::Down), now);

        let effect = app.handle_key(key(KeyCode::Char('d')), now);
        assert_eq!(
            effect,
            Some(Effect::OpenUrl("https://demo.shreeshesh.com".to_string()))
        );
    }

    #[test]
    fn test_contact_links() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(key(KeyCode::Char('c')), now);
        assert_eq!(app.focus(), Focus::Links);
        app.handle_key(key(KeyCode::Right), now);

        let effect = app.handle_key(key(KeyCode::Enter), now);
        assert_eq!(effect, Some(Effect::OpenUrl(CONTACT.tel())));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        let now = Instant::now();
        assert_eq!(app.handle_key(key(KeyCode::Char('q')), now), Some(Effect::Quit));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        app.start_search();
        assert_eq!(app.handle_key(ctrl_c, now), Some(Effect::Quit));
    }

    #[test]
    fn test_click_hit_regions() {
        let mut app = app();
        let now = Instant::now();
        app.register_hit(Rect::new(0, 0, 10, 5), HitTarget::Card(2));
        app.register_hit(Rect::new(5, 2, 10, 5), HitTarget::Overlay);

        // Topmost wins where regions overlap
        assert_eq!(app.hit_test(6, 3), Some(HitTarget::Overlay));
        assert_eq!(app.hit_test(1, 1), Some(HitTarget::Card(2)));
        assert_eq!(app.hit_test(50, 50), None);

        app.handle_click(1, 1, now);
        assert_eq!(app.expanded().map(|s| s.id), Some(SKILLS[2].id));

        app.handle_click(6, 3, now);
        assert!(app.expanded().is_none());
    }
}
