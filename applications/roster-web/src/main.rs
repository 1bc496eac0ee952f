/// Roster Web - user list in the browser
use clap::{Parser, Subcommand};
use roster_web::{api::page, build_state, WebConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-web")]
#[command(about = "Browse and edit a remote user collection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "ROSTER_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Load the collection once and print the rendered page
    Render {
        /// Configuration file path
        #[arg(short, long, env = "ROSTER_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `render` output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster_web=info,roster_view=info,roster_client=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            let config = load_config(config)?;
            tracing::info!("Starting Roster");
            roster_web::serve(config).await?;
        }
        Commands::Render { config } => {
            let config = load_config(config)?;
            render(&config).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<WebConfig> {
    let config = WebConfig::load(path.as_deref())?;
    config.validate()?;
    Ok(config)
}

async fn render(config: &WebConfig) -> anyhow::Result<()> {
    let state = build_state(config)?;
    state.mount().await;
    print!("{}", page::render_page(&state).await);
    Ok(())
}
