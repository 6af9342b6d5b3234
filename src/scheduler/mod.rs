//! Scheduler for periodic leaderboard refreshes.
//!
//! While a season's event is running, the current leaderboard is rebuilt on a cron schedule and
//! sent to the report consumer over a channel. Outside the active window the job does nothing.

pub mod leaderboard;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::mpsc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::Error, model::report::Leaderboard};

/// Job scheduler for background leaderboard refresh tasks.
pub struct Scheduler {
    db: DatabaseConnection,
    leaderboards: mpsc::Sender<Leaderboard>,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Arguments
    /// - `db` - Database connection used by the scheduled jobs
    /// - `leaderboards` - Channel receiving every leaderboard a job produces
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(
        db: DatabaseConnection,
        leaderboards: mpsc::Sender<Leaderboard>,
    ) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self {
            db,
            leaderboards,
            sched,
        })
    }

    /// Starts the scheduler with every registered job.
    ///
    /// Returns the running [`JobScheduler`] so the caller can shut it down.
    pub async fn start(self) -> Result<JobScheduler, Error> {
        self.sched.start().await?;

        Ok(self.sched)
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// The job receives clones of the database connection and the leaderboard sender. Its
    /// result is logged: the number of leaderboards sent on success, the error otherwise.
    ///
    /// # Arguments
    /// - `cron` - Cron expression with seconds (e.g. `"0 */15 * * * *"` for every 15 minutes)
    /// - `name` - Human-readable job name used in log messages
    /// - `function` - Async job returning how many leaderboards it sent
    ///
    /// # Returns
    /// - `Ok(())` - Job registered
    /// - `Err(Error::SchedulerError(_))` - Invalid cron expression or scheduler failure
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(DatabaseConnection, mpsc::Sender<Leaderboard>) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<usize, Error>> + Send + 'static,
    {
        let db = self.db.clone();
        let leaderboards = self.leaderboards.clone();
        let job_name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let leaderboards = leaderboards.clone();
                let name = job_name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(db, leaderboards).await {
                        Ok(count) => tracing::debug!("Sent {} {}(s)", count, name),
                        Err(e) => tracing::error!("Error running {} job: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        tracing::info!("Scheduled {} job with cron {}", name, cron);

        Ok(())
    }
}
