//! Tehran Market Retail-Flow Bot
//!
//! Fetches the daily retail-flow statistics page, derives trend
//! indicators, and pushes the report to a Telegram channel.

use bourse_bot::{
    client::PageClient,
    config::Config,
    market::Series,
    narrative::Narrator,
    notify::Notifier,
    report,
    sentiment::GaugeReading,
    speech::Synthesizer,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bourse-bot")]
#[command(about = "Daily Tehran market retail-flow report bot")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, analyze and push the daily report
    Run {
        /// Print the report instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
    /// Fetch and print the analysis to stdout
    Snapshot,
    /// Test Telegram notification
    TestNotify,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Run { dry_run } => run(config, dry_run).await,
        Commands::Snapshot => snapshot(config).await,
        Commands::TestNotify => test_notify(config).await,
    }
}

async fn run(config: Config, dry_run: bool) -> anyhow::Result<()> {
    tracing::info!("Starting daily retail-flow run");

    let notifier = match (&config.telegram, dry_run) {
        (Some(tg), false) => Notifier::new(tg.bot_token.clone(), tg.chat_id.clone()),
        (None, false) => {
            tracing::warn!("Telegram not configured, notifications disabled");
            Notifier::disabled()
        }
        (_, true) => {
            tracing::warn!("Dry run: report goes to stdout, nothing is sent");
            Notifier::disabled()
        }
    };

    // Fetch and analyze. A scrape failure is the one fatal error: there
    // is nothing to report without data.
    let series = match fetch_series(&config).await {
        Ok(series) => series,
        Err(e) => {
            tracing::error!("Failed to fetch statistics page: {}", e);
            if config.telegram.as_ref().is_some_and(|tg| tg.notify_errors) {
                let _ = notifier.error("Daily fetch failed", &e.to_string()).await;
            }
            return Err(e.into());
        }
    };
    tracing::info!("Series built with {} trading days", series.len());

    let market_report = report::build(&series, &config.alerts);
    let mut message = market_report.html.clone();

    // Optional LLM commentary; failure degrades to a report without it
    if let Some(llm) = config.llm.clone() {
        let narrator = Narrator::new(llm);
        let plain = report::plain_text(&market_report.html);
        match narrator.commentary(&plain).await {
            Ok(text) => {
                message.push_str(&format!("\n🧠 <b>Analyst view</b>\n{text}\n"));
            }
            Err(e) => tracing::warn!("LLM commentary failed: {}", e),
        }
    }

    if dry_run {
        println!("{}", report::plain_text(&message));
        return Ok(());
    }

    if let Err(e) = notifier.send(&message).await {
        tracing::error!("Failed to send report: {}", e);
        return Err(e.into());
    }
    tracing::info!("Report sent");

    // Optional audio rendition; failure only skips the audio step
    let wants_audio = config.telegram.as_ref().is_some_and(|tg| tg.send_audio);
    if wants_audio {
        if let Some(speech) = config.speech.clone() {
            send_audio_report(&notifier, speech, &message).await;
        } else {
            tracing::warn!("send_audio is set but [speech] is not configured");
        }
    }

    Ok(())
}

async fn send_audio_report(notifier: &Notifier, speech: bourse_bot::config::SpeechConfig, message: &str) {
    let synthesizer = Synthesizer::new(speech);
    let plain = report::plain_text(message);
    match synthesizer.synthesize(&plain).await {
        Ok(path) => {
            if let Err(e) = notifier.send_audio(&path, "🎧 Audio report").await {
                tracing::warn!("Failed to send audio report: {}", e);
            } else {
                tracing::info!("Audio report sent");
            }
        }
        Err(e) => tracing::warn!("Speech synthesis failed: {}", e),
    }
}

async fn snapshot(config: Config) -> anyhow::Result<()> {
    let series = fetch_series(&config).await?;
    let market_report = report::build(&series, &config.alerts);

    println!("{}", report::plain_text(&market_report.html));

    let gauge: GaugeReading = market_report.gauge;
    println!(
        "gauge: {} at {:.0}% ({:.0}°)",
        gauge.bucket.label(),
        gauge.position * 100.0,
        gauge.angle_deg
    );
    Ok(())
}

async fn test_notify(config: Config) -> anyhow::Result<()> {
    let Some(tg) = &config.telegram else {
        anyhow::bail!("telegram is not configured");
    };
    let notifier = Notifier::new(tg.bot_token.clone(), tg.chat_id.clone());
    notifier.startup().await?;
    println!("Test notification sent to chat {}", tg.chat_id);
    Ok(())
}

async fn fetch_series(config: &Config) -> bourse_bot::error::Result<Series> {
    let client = PageClient::new(&config.source)?;
    let rows = client.fetch_history().await?;
    Ok(Series::from_rows(rows))
}
