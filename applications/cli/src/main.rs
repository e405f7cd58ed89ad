/// Carousel - playlist, queue and history playback simulator
use carousel_cli::{demo_sections, run_script, CliConfig, Command, ConsoleSink, ScriptSummary};
use carousel_playback::{PlaybackController, Playlist};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "carousel")]
#[command(about = "Simulate playlist playback with a play-next queue and history", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Shuffle seed (overrides configuration)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demonstration
    Demo,
    /// Run a sequence of commands
    ///
    /// Commands: play, pause, next, prev, shuffle, queue:<index>, dequeue, show
    Run {
        #[arg(required = true)]
        commands: Vec<Command>,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carousel=info,carousel_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if cli.seed.is_some() {
        config.playback.seed = cli.seed;
    }
    config.validate()?;

    tracing::info!("Loaded {} songs", config.songs.len());

    let playlist: Playlist = config.songs.iter().cloned().collect();
    let mut controller =
        PlaybackController::with_config(playlist, ConsoleSink::stdout(), &config.playback);
    let mut stdout = io::stdout();

    let summary = match cli.command {
        Commands::Demo => {
            let mut total = ScriptSummary::default();
            for (index, (title, commands)) in demo_sections().into_iter().enumerate() {
                if index > 0 {
                    writeln!(stdout)?;
                }
                writeln!(stdout, "{title}")?;
                let summary = run_script(&mut controller, &commands, &mut stdout)?;
                total.executed += summary.executed;
                total.failed += summary.failed;
            }
            total
        }
        Commands::Run { commands } => run_script(&mut controller, &commands, &mut stdout)?,
    };

    tracing::info!(
        "Ran {} commands ({} rejected)",
        summary.executed,
        summary.failed
    );

    Ok(())
}
