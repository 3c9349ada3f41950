use anyhow::Result;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use movie_quiz::{
    args::Args,
    db::{self, records::SqliteRecordStore},
    questions::MovieQuestionSource,
    statistics::StatisticsTracker,
    ui::run_ui,
};

/// Log to a file in the data directory; the terminal belongs to the UI.
fn init_tracing() -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::never(db::data_dir()?, "movie-quiz.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = init_tracing()?;

    let pool = db::create_pool().await?;
    let store = SqliteRecordStore::new(pool);
    let stats = StatisticsTracker::new(Box::new(store))?;

    let cache_path = db::data_dir()?.join("movies.json");
    let source = MovieQuestionSource::new(args.total, args.offline, cache_path);

    run_ui(Box::new(source), stats, args.total)
}
