mod cli;
mod output;
mod render;
mod repl;
mod script;

use clap::Parser;
use cli::{Cli, Commands};
use render::ListRenderer;
use std::rc::Rc;
use todo_core::AppConfig;
use todo_surface::TodoSurface;

fn init_tracing() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TODO_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();

    let mut config = AppConfig::load();
    if let Some(seed_text) = cli.seed_text {
        config.seed_text = Some(seed_text);
    }

    let mut surface = TodoSurface::from_config(&config);
    tracing::info!("Started session seeded with '{}'", config.effective_seed_text());

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            surface.subscribe(Rc::new(ListRenderer));
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            repl::run(&mut surface, stdin.lock(), &mut stdout)?;
        }
        Commands::Run { script } => {
            if let Err(e) = script::handle_run(&mut surface, &script) {
                output::output_error(&e.to_string());
            }
        }
    }

    Ok(())
}
