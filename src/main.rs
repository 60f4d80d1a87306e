use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colorstories::session::run_session;
use colorstories::{DirectorySink, Studio, StudioConfig};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "colorstories", version, about = "Random color story cards as PNG")]
struct Cli {
    /// Adjective list location (path or URL)
    #[arg(long, global = true)]
    adjectives: Option<String>,

    /// Noun list location (path or URL)
    #[arg(long, global = true)]
    nouns: Option<String>,

    /// Base URL that relative list locations are fetched from
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Directory the PNG is saved into
    #[arg(long, global = true, default_value = ".")]
    out: PathBuf,

    /// Seed for reproducible stories
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// HTTP timeout in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one story card and save it
    Generate {
        /// Only print the story, do not write the PNG
        #[arg(long)]
        no_save: bool,

        /// Also print the card as a data: URL
        #[arg(long)]
        data_url: bool,
    },
    /// Read `generate` / `save` commands from stdin, one per line
    Session,
}

impl Cli {
    fn config(&self) -> StudioConfig {
        let mut cfg = StudioConfig {
            base_url: self.base_url.clone(),
            output_dir: self.out.clone(),
            seed: self.seed,
            ..Default::default()
        };
        if let Some(a) = &self.adjectives {
            cfg.adjectives_location = a.clone();
        }
        if let Some(n) = &self.nouns {
            cfg.nouns_location = n.clone();
        }
        if let Some(t) = self.timeout_ms {
            cfg.timeout_ms = t;
        }
        cfg
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    let mut studio = Studio::new(cli.config());

    // lists must be loaded before the generate trigger is accepted; load
    // failures are logged by the studio and leave the list empty
    studio.load().await.context("invalid configuration")?;

    match cli.command {
        Command::Generate { no_save, data_url } => run_generate(&mut studio, no_save, data_url).await,
        Command::Session => {
            let sink = DirectorySink::new(studio.config().output_dir.clone());
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            // unlocked handle: stdout is locked per reply, never across an await
            run_session(&mut studio, &sink, input, io::stdout()).await?;
            Ok(())
        }
    }
}

fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}

async fn run_generate(studio: &mut Studio, no_save: bool, data_url: bool) -> anyhow::Result<()> {
    let story = studio.generate().await?;
    println!("{}", story.record.color);
    println!("{}", story.record.description());
    if data_url {
        println!("{}", story.image.to_data_url());
    }

    if !no_save {
        let sink = DirectorySink::new(studio.config().output_dir.clone());
        let path = studio.export(&sink).context("saving story card")?;
        println!("saved {}", path.display());
    }
    Ok(())
}
