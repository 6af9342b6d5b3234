use sea_orm::TransactionTrait;

use crate::{
    config::StartedEventPolicy,
    data::{
        player::PlayerRepository,
        white_star::{
            corporation::CorporationRepository, participation::WsParticipationRepository,
            white_star::WhiteStarRepository,
        },
    },
    error::Error,
    model::event::{dedupe_players, DuelEnded, DuelStarted},
    service::event::EventService,
};

impl<'a> EventService<'a> {
    /// Records a new white star with both corporations and the ranked rosters.
    pub(super) async fn start_white_star(&self, event: &DuelStarted) -> Result<(), Error> {
        if self.started_event_policy == StartedEventPolicy::Deduplicate
            && WhiteStarRepository::new(self.db)
                .get(&event.white_star_id)
                .await?
                .is_some()
        {
            tracing::debug!(
                "White star {} already started, skipping insert",
                event.white_star_id
            );
            return Ok(());
        }

        let players: Vec<_> = event
            .allies
            .iter()
            .chain(event.opponents.iter())
            .cloned()
            .collect();
        let players = dedupe_players(&players);

        let txn = self.db.begin().await?;

        CorporationRepository::new(&txn)
            .upsert_many(&[event.corporation.clone(), event.opponent.clone()])
            .await?;

        WhiteStarRepository::new(&txn).create(event).await?;

        PlayerRepository::new(&txn).upsert_many(&players).await?;

        WsParticipationRepository::new(&txn)
            .create_roster(
                &event.white_star_id,
                event.slot,
                &event.allies,
                &event.opponents,
            )
            .await?;

        txn.commit().await?;

        Ok(())
    }

    /// Stores the final scores of a white star.
    pub(super) async fn end_white_star(&self, event: &DuelEnded) -> Result<(), Error> {
        let finished = WhiteStarRepository::new(self.db).finish(event).await?;

        if finished == 0 {
            tracing::warn!(
                "Received end of unknown white star {}",
                event.white_star_id
            );
        }

        Ok(())
    }
}
