use std::{path::PathBuf, str::FromStr};

use apalis::{
    layers::{retry::RetryPolicy, sentry::SentryLayer},
    prelude::*,
};
use apalis_cron::{CronStream, Tick};
use clap::{Parser, Subcommand};
use cron::Schedule;
use transcript_store::JsonFsStore;

use channel_pulse::{
    openai::OpenAIClient, tracing::init_tracing_subscriber, yt::YouTubeClient, PipelineBuilder,
};

#[derive(Parser)]
#[command(name = "channel-pulse", about = "YouTube channel transcript summarizer")]
struct Cli {
    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY")]
    youtube_api_key: String,

    /// Channel to ingest
    #[arg(long, env = "CHANNEL_ID")]
    channel_id: String,

    /// Summarization service API key
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_api_key: String,

    /// Summarization model identifier
    #[arg(long, env = "LLM_MODEL")]
    llm_model: String,

    /// Summarization service base URL
    #[arg(long, env = "OPENAI_API_URL", default_value = "https://api.openai.com/v1")]
    openai_api_url: String,

    /// Maximum videos to consider per run
    #[arg(long, env = "MAX_VIDEOS_TO_PROCESS", default_value = "10")]
    max_videos: usize,

    /// Directory for transcript and summary artifacts
    #[arg(long, env = "DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the pipeline once and exit
    Run,
    /// Start the cron scheduler
    Cron {
        /// Cron schedule expression
        #[arg(long, env = "CRON_SCHEDULE", default_value = "0 0 */4 * * *")]
        schedule: String,
    },
}

#[derive(Clone)]
struct Config {
    youtube_api_key: String,
    channel_id: String,
    openai_api_key: String,
    llm_model: String,
    openai_api_url: String,
    max_videos: usize,
    data_dir: PathBuf,
}

async fn run_pipeline(config: &Config) -> anyhow::Result<()> {
    let store = JsonFsStore::init(&config.data_dir).await?;

    // one client serves both the lister and fetcher seams
    let youtube = YouTubeClient::new(&config.youtube_api_key);
    let openai = OpenAIClient::new(&config.openai_api_key, &config.llm_model)
        .with_base_url(&config.openai_api_url);

    let pipeline = PipelineBuilder::new(&config.channel_id)
        .store(store)
        .lister(youtube.clone())
        .fetcher(youtube)
        .summarizer(openai)
        .max_videos(config.max_videos)
        .build();

    pipeline.run().await
}

async fn handle_tick(_tick: Tick, config: Data<Config>) -> anyhow::Result<()> {
    tracing::info!(
        channel_id = %config.channel_id,
        max_videos = config.max_videos,
        "Running scheduled pipeline..."
    );
    run_pipeline(&config).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let config = Config {
        youtube_api_key: cli.youtube_api_key,
        channel_id: cli.channel_id,
        openai_api_key: cli.openai_api_key,
        llm_model: cli.llm_model,
        openai_api_url: cli.openai_api_url,
        max_videos: cli.max_videos,
        data_dir: cli.data_dir,
    };

    match cli.command {
        Command::Run => {
            tracing::info!(channel_id = %config.channel_id, "Running pipeline once...");
            run_pipeline(&config).await?;
        }
        Command::Cron { schedule } => {
            tracing::info!(%schedule, "Starting cron scheduler...");
            let schedule = Schedule::from_str(&schedule)?;

            let worker = WorkerBuilder::new("channel-pulse-cron")
                .backend(CronStream::new(schedule))
                .retry(RetryPolicy::retries(3))
                .layer(SentryLayer::new())
                .data(config)
                .build(handle_tick);

            worker.run().await?;
        }
    }

    Ok(())
}
