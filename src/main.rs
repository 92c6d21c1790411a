mod app;
mod config;
mod content;
mod links;
mod particles;
mod preferences;
mod search;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Effect};
use config::Config;
use particles::Particles;
use ui::theme::{ThemeContext, ThemeKind};

/// Frame / input poll interval
const TICK: Duration = Duration::from_millis(50);

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "DevOps portfolio in the terminal")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "~/.config/devops-folio/config.toml")]
    config: String,

    /// Start with this theme (and remember it)
    #[arg(long)]
    theme: Option<ThemeKind>,

    /// Seed for the hero particle field
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn default_log_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("devops-folio")
        .join("folio.log")
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(path: PathBuf) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devops_folio=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

/// Leave raw mode, the alternate screen and mouse capture.
///
/// Safe to call more than once, and after a setup that only got part way.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    );
}

/// Runs its closure once when dropped: on normal exit, on an early `?`
/// return and while unwinding from a panic.
struct RestoreGuard<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self(Some(restore))
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.0.take() {
            restore();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Restore the terminal before the panic message is printed
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    init_logging(cli.log_file.clone().unwrap_or_else(default_log_file))?;

    // Load config
    let config = Config::load(&cli.config)?;

    // Restore the theme; an explicit --theme wins and is persisted
    let mut theme = ThemeContext::load(
        config.theme.preferences(),
        config.theme.light,
        config.theme.dark,
    );
    if let Some(kind) = cli.theme {
        theme.set(kind);
    }

    let count = if config.particles.enabled {
        config.particles.count
    } else {
        0
    };
    let particles = Particles::generate(count, cli.seed.or(config.particles.seed));
    tracing::info!("Generated {} particles", particles.len());

    // Setup terminal
    enable_raw_mode()?;
    let guard = RestoreGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config, theme, particles);

    // Run main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    drop(guard);

    if let Err(ref e) = result {
        tracing::error!("Exited with error: {:#}", e);
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(TICK)? {
            let now = Instant::now();
            let effect = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key, now),
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    app.handle_click(mouse.column, mouse.row, now)
                }
                _ => None,
            };

            match effect {
                Some(Effect::Quit) => return Ok(()),
                Some(Effect::OpenUrl(url)) => links::open_url(&url),
                None => {}
            }
        }

        app.tick(Instant::now());
    }
}
