//! The single monitored art poll.
//!
//! The pointer is stored as two `vars` rows, one for the channel and one for the message. It
//! only counts as set when both are present.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{data::var::VarRepository, error::Error, model::poll::MonitoredPoll};

pub static POLL_CHANNEL_KEY: &str = "art_poll_channel_id";
pub static POLL_MESSAGE_KEY: &str = "art_poll_message_id";

pub struct PollService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PollService<'a> {
    /// Creates a new instance of [`PollService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self) -> Result<Option<MonitoredPoll>, Error> {
        let var_repo = VarRepository::new(self.db);

        let channel_id = var_repo.get_value(POLL_CHANNEL_KEY).await?;
        let message_id = var_repo.get_value(POLL_MESSAGE_KEY).await?;

        Ok(match (channel_id, message_id) {
            (Some(channel_id), Some(message_id)) => Some(MonitoredPoll {
                channel_id,
                message_id,
            }),
            _ => None,
        })
    }

    /// Points the tracker at a new poll, replacing the previous one.
    pub async fn set(&self, poll: &MonitoredPoll) -> Result<(), Error> {
        self.write(Some(poll.channel_id.clone()), Some(poll.message_id.clone()))
            .await?;

        tracing::info!(
            "Monitoring poll {} in channel {}",
            poll.message_id,
            poll.channel_id
        );

        Ok(())
    }

    pub async fn clear(&self) -> Result<(), Error> {
        self.write(None, None).await?;

        tracing::info!("Stopped monitoring poll");

        Ok(())
    }

    async fn write(
        &self,
        channel_id: Option<String>,
        message_id: Option<String>,
    ) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let var_repo = VarRepository::new(&txn);
        var_repo.upsert(POLL_CHANNEL_KEY, channel_id).await?;
        var_repo.upsert(POLL_MESSAGE_KEY, message_id).await?;

        txn.commit().await?;

        Ok(())
    }
}
