use anyhow::Context;
use clap::Parser;
use cynosure::{
    cli::{Cli, Command},
    headless,
};
use cynosure_core::{config::Config, Catalog};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/cynosure-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("cynosure debug log started — tail -f /tmp/cynosure-debug.log");
    }

    let mut config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config unreadable, using built-in defaults");
        Config::defaults()
    });
    if let Some(path) = cli.data {
        config.data.path = path;
    }

    let catalog = Catalog::load(&config.data.path)
        .with_context(|| format!("could not open the schedule at {}", config.data.path.display()))?;

    match cli.command {
        None => cynosure_tui::run(&catalog, config),
        Some(Command::Search(args)) => {
            let show_brochure = args.brochure || config.ui.show_brochure;
            print!(
                "{}",
                headless::render_search(&catalog, &args.query(), &args.filters(), show_brochure)
            );
            Ok(())
        }
        Some(Command::Timeline { day }) => {
            let days = headless::resolve_days(&config.schedule.days, day.as_deref());
            print!("{}", headless::render_timeline(&catalog, &days));
            Ok(())
        }
    }
}
