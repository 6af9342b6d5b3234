use sea_orm::TransactionTrait;

use crate::{
    config::StartedEventPolicy,
    data::{
        player::PlayerRepository,
        red_star::{participation::ParticipationRepository, star::StarRepository},
    },
    error::Error,
    model::event::{dedupe_players, StarEnded, StarStarted},
    service::event::EventService,
};

impl<'a> EventService<'a> {
    /// Inserts the star of a "started" event.
    ///
    /// Under [`StartedEventPolicy::Strict`] a re-delivered event fails on the primary key.
    pub(super) async fn start_star(&self, event: &StarStarted) -> Result<(), Error> {
        let star_repo = StarRepository::new(self.db);

        if self.started_event_policy == StartedEventPolicy::Deduplicate
            && star_repo.get(&event.star_id).await?.is_some()
        {
            tracing::debug!("Star {} already started, skipping insert", event.star_id);
            return Ok(());
        }

        star_repo.create(event).await?;

        Ok(())
    }

    /// Closes a star and records who contributed to it.
    ///
    /// Contributors are upserted even when the star is unknown, but participation rows are
    /// only written for stars that exist.
    pub(super) async fn end_star(&self, event: &StarEnded) -> Result<(), Error> {
        let contributors = dedupe_players(&event.contributors);
        let player_count = i32::try_from(contributors.len()).map_err(|_| {
            Error::InternalError(format!(
                "Star {} has {} contributors, more than fits a player count",
                event.star_id,
                contributors.len()
            ))
        })?;

        let txn = self.db.begin().await?;

        let closed = StarRepository::new(&txn)
            .close(&event.star_id, event.timestamp, event.points, player_count)
            .await?;

        PlayerRepository::new(&txn)
            .upsert_many(&contributors)
            .await?;

        if closed == 0 {
            tracing::warn!(
                "Received end of unknown star {}, skipping {} participation rows",
                event.star_id,
                contributors.len()
            );
        } else {
            let player_ids: Vec<String> = contributors
                .into_iter()
                .map(|player| player.player_id)
                .collect();

            ParticipationRepository::new(&txn)
                .create_many(&event.star_id, &player_ids)
                .await?;
        }

        txn.commit().await?;

        Ok(())
    }
}
