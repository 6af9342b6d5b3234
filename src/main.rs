use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing_subscriber::EnvFilter;

use starlog::{
    config::Config,
    error::Error,
    model::report::{Leaderboard, Metric},
    scheduler::{leaderboard::refresh_leaderboard, Scheduler},
    service::{
        event::{ApplyReport, EventService},
        report::ReportService,
    },
    startup,
};

/// Capacity of the channel between leaderboard producers and the report consumer.
const LEADERBOARD_CHANNEL_CAPACITY: usize = 16;

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    tracing::info!("Connected to database and applied migrations");

    let (leaderboard_tx, leaderboard_rx) = mpsc::channel(LEADERBOARD_CHANNEL_CAPACITY);
    tokio::spawn(consume_leaderboards(leaderboard_rx));

    let metric = config.leaderboard_metric;
    let mut scheduler = Scheduler::new(db.clone(), leaderboard_tx.clone()).await?;
    scheduler
        .schedule_job(
            &config.leaderboard_cron,
            "leaderboard refresh",
            move |db, leaderboards| refresh_leaderboard(db, leaderboards, metric),
        )
        .await?;
    let mut sched = scheduler.start().await?;

    let event_service =
        EventService::new(&db).with_started_event_policy(config.started_event_policy);

    tracing::info!("Reading telemetry payloads from stdin");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.map_err(|e| {
        Error::InternalError(format!("Failed to read telemetry from stdin: {}", e))
    })? {
        if line.trim().is_empty() {
            continue;
        }

        let report = ApplyReport::from(event_service.apply_json(&line).await);
        match &report.error {
            Some(e) => tracing::error!("Failed to apply telemetry payload: {}", e),
            None => tracing::debug!("Applied telemetry payload with status {}", report.status),
        }

        if report.refreshes_leaderboard() {
            send_current_leaderboard(&db, &leaderboard_tx, metric).await;
        }
    }

    tracing::info!("Telemetry input closed, shutting down");
    sched.shutdown().await?;

    Ok(())
}

/// Rebuilds the current leaderboard right after a red star closes during the event.
async fn send_current_leaderboard(
    db: &DatabaseConnection,
    leaderboards: &mpsc::Sender<Leaderboard>,
    metric: Metric,
) {
    match ReportService::new(db)
        .refresh_if_active(Utc::now(), metric)
        .await
    {
        Ok(Some(leaderboard)) => {
            if leaderboards.send(leaderboard).await.is_err() {
                tracing::warn!("Leaderboard consumer is closed");
            }
        }
        Ok(None) => {}
        Err(e) => tracing::error!("Failed to refresh leaderboard: {}", e),
    }
}

async fn consume_leaderboards(mut leaderboards: mpsc::Receiver<Leaderboard>) {
    while let Some(leaderboard) = leaderboards.recv().await {
        tracing::info!(
            "Season {} leaderboard by {}: {} players, total score {:?}",
            leaderboard.season,
            leaderboard.metric,
            leaderboard.rows.len(),
            leaderboard.total_score
        );

        for (position, row) in leaderboard.rows.iter().enumerate() {
            tracing::info!(
                "{:>3}. {} ({}): {:.2}",
                position + 1,
                row.name,
                row.player_id,
                row.value
            );
        }
    }
}
