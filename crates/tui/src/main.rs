//! spark-alert-demo - show one alert in the terminal and report the choice.
//!
//! Responsibilities:
//! - Orchestrate startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the event loop until a button is activated or the user quits.
//!
//! Does NOT handle:
//! - Alert layout, rendering, or hit-testing (see `spark_alert::controller`).
//! - Style resolution (see `runtime::config`).
//!
//! Invariants:
//! - The demo enters raw mode and alternate screen on startup.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.
//! - The chosen button is printed only after the terminal is restored.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use spark_alert::AlertController;
use spark_alert::cli::Cli;
use spark_alert::runtime::{config::load_alert_configuration, terminal::TerminalGuard};

/// Remembers the first button the user activated.
#[derive(Default)]
struct Choice {
    index: Cell<Option<usize>>,
}

impl spark_alert::AlertDelegate for Choice {
    fn alert_action(&self, index: usize, controller: &AlertController) {
        let title = controller.configuration().buttons().get(index);
        tracing::info!(index, ?title, "Alert button chosen");
        if self.index.get().is_none() {
            self.index.set(Some(index));
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let no_mouse = cli.no_mouse;

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&cli.log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "spark-alert.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let configuration = load_alert_configuration(&cli)?;
    let labels: Vec<String> = configuration.buttons().to_vec();

    let mut alert = AlertController::new(configuration);
    let choice = Rc::new(Choice::default());
    alert.set_delegate(&choice);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if no_mouse {
        execute!(stdout, EnterAlternateScreen)?;
    } else {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let _cleanup_guard = TerminalGuard::new(no_mouse);
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventStream::new();
    loop {
        terminal.draw(|f| alert.render(f))?;

        let Some(event) = events.next().await else {
            break;
        };
        match event? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => break,
                _ => {
                    alert.handle_key(key);
                }
            },
            Event::Mouse(mouse) if !no_mouse => {
                alert.handle_mouse(mouse);
            }
            _ => {}
        }

        if choice.index.get().is_some() {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    if no_mouse {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    } else {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    }
    terminal.show_cursor()?;

    match choice.index.get().and_then(|i| labels.get(i).map(|l| (i, l))) {
        Some((index, label)) => println!("{index}: {label}"),
        None => println!("dismissed"),
    }

    Ok(())
}
