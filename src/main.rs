use clap::Parser;
use log::warn;
use promptdeck::core::config::{self, CliOverrides, DeckConfig};
use promptdeck::core::pools::{load_pools, source_for};
use promptdeck::core::state::App;
use promptdeck::print::{self, PrintFormat};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "promptdeck", about = "Party prompt cards in your terminal")]
struct Args {
    /// Topics document: a path or an http(s) URL
    #[arg(short, long)]
    topics: Option<String>,

    /// Seed for a reproducible deck
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print this many cards to stdout instead of starting the UI
    #[arg(short, long, value_name = "N")]
    print: Option<usize>,

    /// With --print, emit HTML fragments
    #[arg(long, requires = "print")]
    html: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to promptdeck.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("promptdeck.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}, using defaults", e);
        DeckConfig::default()
    });
    let cli = CliOverrides {
        topics: args.topics,
        seed: args.seed,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!("promptdeck starting up with topics from {}", resolved.topics);

    // The UI only starts once the pools have settled
    let source = source_for(&resolved.topics);
    let loaded = load_pools(source.as_ref()).await;
    let mut app = App::from_config(loaded, &resolved);

    if let Some(count) = args.print {
        let format = if args.html {
            PrintFormat::Html
        } else {
            PrintFormat::Plain
        };
        let stdout = std::io::stdout();
        print::run(&mut app, count, format, &mut stdout.lock())?;
        return Ok(());
    }

    promptdeck::tui::run(app, &resolved)
}
