//! vidpick - list, rank and download video formats via yt-dlp

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vidpick::cli;
use vidpick::extractor::YtDlpExtractor;
use vidpick::invoker::YtDlpInvoker;
use vidpick::utils::AppSettings;

#[derive(Parser)]
#[command(name = "vidpick", version, about = "Pick a video format and let yt-dlp download it")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available formats for a video URL, best first
    Formats {
        url: String,
        /// Sort key: resolution, filesize, bitrate or fps
        #[arg(long)]
        sort: Option<String>,
    },
    /// Download a previously listed format
    Download {
        url: String,
        format_id: String,
        /// Override the configured download directory
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Show or update persisted settings
    Config {
        /// Set the download directory
        #[arg(long)]
        download_dir: Option<PathBuf>,
        /// Set the default sort key
        #[arg(long)]
        sort: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config_path = AppSettings::config_path();
    let mut settings = AppSettings::load_or_default(&config_path);

    match args.command {
        Command::Formats { url, sort } => {
            let extractor = YtDlpExtractor::new()?;
            let sort_key = cli::resolve_sort_key(sort.as_deref(), &settings);
            let (title, entries) = cli::list_formats(&extractor, &url, sort_key).await?;
            print!("{}", cli::render_listing(&title, &entries));
        }
        Command::Download {
            url,
            format_id,
            output_dir,
        } => {
            let invoker = YtDlpInvoker::new()?;
            let download_dir = output_dir.unwrap_or_else(|| settings.effective_download_dir());
            cli::download(&invoker, &url, &format_id, download_dir).await?;
            println!("Download finished");
        }
        Command::Config { download_dir, sort } => {
            if cli::update_settings(&mut settings, download_dir, sort.as_deref())? {
                settings.save(&config_path)?;
            }
            println!("download dir: {}", settings.download_dir.display());
            println!("sort key:     {}", settings.sort_key);
        }
    }

    Ok(())
}
