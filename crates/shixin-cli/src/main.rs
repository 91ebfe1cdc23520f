use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "shixin", version, about = "Shixin, a quiet clinic for everyday obsessions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the quiz and receive a consultation
    Quiz {
        #[command(subcommand)]
        action: commands::quiz::QuizAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// API credential management
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
}

fn init_tracing() {
    // Diagnostics go to stderr so piped output stays clean.
    let filter = tracing_subscriber::EnvFilter::try_from_env("SHIXIN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Quiz { action } => commands::quiz::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Auth { action } => commands::auth::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
