//! novel-editor - Serve and split plain-text novels into chapters

mod config;
mod http;

use anyhow::{Context, Result};
use chapter_split::{TxtLibrary, segment};
use clap::{Parser, Subcommand};
use config::EditorConfig;
use http::HttpServer;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "novel-editor")]
#[command(about = "Split plain-text novels into chapters and serve them to the browser editor", long_about = None)]
#[command(version)]
struct Args {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Subcommands (defaults to `serve`)
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to listen on (overrides config)
        #[arg(short, long)]
        listen: Option<String>,

        /// Directory of .txt novels (overrides config)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// List the .txt novels in the input directory
    List {
        /// Directory of .txt novels (overrides config)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Split a text file into chapters and print them as JSON
    Split {
        /// Path to the text file
        file: PathBuf,

        /// Print a chapter table instead of JSON
        #[arg(short, long)]
        summary: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the directory of .txt novels
    SetDir {
        /// Directory path
        path: PathBuf,
    },
    /// Set the HTTP listen address
    SetListen {
        /// Address, e.g. 127.0.0.1:3000
        addr: String,
    },
    /// Enable or disable CORS
    SetCors {
        /// true or false
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    match args.command {
        Some(Commands::Config { action }) => handle_config_command(&action),
        Some(Commands::List { dir }) => list_novels(dir),
        Some(Commands::Split { file, summary }) => split_file(&file, summary),
        Some(Commands::Serve { listen, dir }) => serve(listen, dir).await,
        None => serve(None, None).await,
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

async fn serve(listen: Option<String>, dir: Option<PathBuf>) -> Result<()> {
    let mut config = EditorConfig::load().context("Failed to load configuration")?;
    if let Some(listen) = listen {
        config.listen_addr = listen;
    }
    if let Some(dir) = dir {
        config.input_dir = dir;
    }

    HttpServer::new(config).run().await
}

fn list_novels(dir: Option<PathBuf>) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir,
        None => EditorConfig::load()?.input_dir,
    };

    let names = TxtLibrary::new(dir).list()?;
    if names.is_empty() {
        eprintln!("No .txt files found");
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

fn split_file(path: &Path, summary: bool) -> Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    let chapters = segment(&text);
    log::info!("{}: {} chapters", path.display(), chapters.len());

    if summary {
        for (idx, chapter) in chapters.iter().enumerate() {
            let subtitle = if chapter.subtitle.is_empty() {
                String::new()
            } else {
                format!(" - {}", chapter.subtitle)
            };
            println!(
                "{:>4}  {}{}  ({} words)",
                idx,
                chapter.title,
                subtitle,
                chapter.word_count()
            );
        }
    } else {
        let output = serde_json::json!({ "chapters": chapters });
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    Ok(())
}

/// Handle config subcommands
fn handle_config_command(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = EditorConfig::load()?;
            println!("Configuration file: {}", EditorConfig::config_path()?.display());
            println!();
            println!("input_dir = \"{}\"", config.input_dir.display());
            println!("listen_addr = \"{}\"", config.listen_addr);
            println!("cors_enabled = {}", config.cors_enabled);
            println!("max_body_bytes = {}", config.max_body_bytes);
        }
        ConfigAction::SetDir { path } => {
            let mut config = EditorConfig::load()?;
            config.input_dir = path.clone();
            config.save()?;
            println!("Input directory set to: {}", path.display());
        }
        ConfigAction::SetListen { addr } => {
            addr.parse::<std::net::SocketAddr>()
                .with_context(|| format!("Invalid listen address: {}", addr))?;
            let mut config = EditorConfig::load()?;
            config.listen_addr = addr.clone();
            config.save()?;
            println!("Listen address set to: {}", addr);
        }
        ConfigAction::SetCors { enabled } => {
            let mut config = EditorConfig::load()?;
            config.cors_enabled = *enabled;
            config.save()?;
            println!("CORS {}", if *enabled { "enabled" } else { "disabled" });
        }
    }
    Ok(())
}
