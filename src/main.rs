use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use linkscope::api::HttpApiClient;
use linkscope::config::Config;
use linkscope::dashboard::DashboardService;
use linkscope::render::{ChartRenderer, RenderSink, TermRenderer};

#[derive(Parser)]
#[command(name = "linkscope")]
#[command(about = "Dashboard client for the link shortener", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the analytics dashboard for a short link
    Stats {
        /// Short code or full short URL
        short_link: String,
        /// Re-fetch and redraw every N seconds
        #[arg(long)]
        refresh: Option<u64>,
    },
    /// Shorten a URL
    Shorten {
        /// The URL to shorten
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let api = Arc::new(HttpApiClient::new(&config)?);
    let renderer = Arc::new(TermRenderer::new());
    let sink: Arc<dyn RenderSink> = renderer.clone();
    let chart: Arc<dyn ChartRenderer> = renderer;
    let service = DashboardService::new(api, sink, chart);

    match cli.command {
        Commands::Stats {
            short_link,
            refresh,
        } => {
            service.show_analytics(&short_link).await;

            if let Some(secs) = refresh {
                info!(interval_secs = secs, "refreshing until interrupted");
                let mut ticker = tokio::time::interval(Duration::from_secs(secs.max(1)));
                // The first tick fires immediately and the dashboard was
                // just drawn, so skip it.
                ticker.tick().await;
                loop {
                    ticker.tick().await;
                    service.refresh().await;
                }
            }
        }
        Commands::Shorten { url } => {
            service.shorten(&url).await;
        }
    }

    Ok(())
}
