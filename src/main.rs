use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use flutter_summary::cli::Output;
use flutter_summary::config::ConfigLoader;

#[derive(Parser)]
#[command(name = "flutter-summary")]
#[command(
    version,
    about = "Summarize classes and function signatures of a Dart/Flutter codebase"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(long, global = true, help = "Show debug logs")]
    verbose: bool,

    #[arg(long, short, global = true, help = "Only log errors")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize .dart files into flutter_code_summary.txt (default)
    Scan {
        #[arg(help = "Directory to scan (defaults to the current directory)")]
        path: Option<PathBuf>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mflutter-summary encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }

        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Output::new().error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ConfigLoader::load()?;

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    ConfigLoader::log_sources();

    let result = match cli.command {
        None => flutter_summary::cli::commands::scan::run(None, &config),
        Some(Commands::Scan { path }) => flutter_summary::cli::commands::scan::run(path, &config),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show { format } => flutter_summary::cli::commands::config::show(&format),
            ConfigAction::Path => flutter_summary::cli::commands::config::path(),
        },
    };

    if let Err(e) = &result {
        tracing::debug!(stage = %e.stage(), "Run aborted");
    }

    result?;
    Ok(())
}
