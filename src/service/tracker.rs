//! White star elimination tracking.
//!
//! A white star is active for [`WHITE_STAR_DURATION`] after it starts and each slot shows the
//! most recently started active white star. Participants are addressed by their rank index,
//! which is unique per slot. Eliminations are stored with the time the ship respawns, so the
//! set of destroyed ships is derived from the clock rather than stored.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::white_star::{
        corporation::CorporationRepository, participation::WsParticipationRepository,
        respawn::WsRespawnRepository, white_star::WhiteStarRepository,
    },
    error::{tracker::TrackerError, Error},
    model::{
        db::{WhiteStarModel, WsParticipationModel, WsRespawnModel},
        white_star::{
            respawn_delay, ActiveWhiteStar, Elimination, RankedPlayer, ShipType, WhiteStarSide,
            WHITE_STAR_DURATION,
        },
    },
};

pub struct TrackerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackerService<'a> {
    /// Creates a new instance of [`TrackerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active white stars, one per slot, most recently started first.
    ///
    /// A white star is active from its start until [`WHITE_STAR_DURATION`] later.
    async fn active_white_stars(&self, now: DateTime<Utc>) -> Result<Vec<WhiteStarModel>, Error> {
        let white_stars = WhiteStarRepository::new(self.db)
            .get_started_between(now - WHITE_STAR_DURATION, now)
            .await?;

        let mut active: Vec<WhiteStarModel> = Vec::with_capacity(2);
        for white_star in white_stars {
            if !active.iter().any(|ws| ws.slot == white_star.slot) {
                active.push(white_star);
            }
        }

        Ok(active)
    }

    /// Resolves a rank index to its white star and roster entry, most recent white star first.
    async fn resolve_rank(
        &self,
        rank_index: i32,
        now: DateTime<Utc>,
    ) -> Result<(WhiteStarModel, WsParticipationModel), Error> {
        let active = self.active_white_stars(now).await?;
        let white_star_ids: Vec<String> = active.iter().map(|ws| ws.id.clone()).collect();

        let matches = WsParticipationRepository::new(self.db)
            .find_by_rank_index(&white_star_ids, rank_index)
            .await?;

        active
            .into_iter()
            .find_map(|white_star| {
                matches
                    .iter()
                    .find(|p| p.white_star_id == white_star.id)
                    .cloned()
                    .map(|participation| (white_star, participation))
            })
            .ok_or_else(|| TrackerError::UnknownRankIndex(rank_index).into())
    }

    /// Records the destruction of a participant's ship.
    ///
    /// `time_offset` is the time left on the match clock when the ship was destroyed. The ship
    /// respawns after its type's delay, measured from that moment.
    ///
    /// # Returns
    /// - `Ok(WsRespawnModel)` - The stored elimination
    /// - `Err(Error::TrackerError(TrackerError::TimeOffsetOutOfRange { .. }))` - Offset outside the match duration
    /// - `Err(Error::TrackerError(TrackerError::UnknownRankIndex(_)))` - No active white star has the rank index
    pub async fn record_elimination(
        &self,
        rank_index: i32,
        time_offset: Duration,
        ship_type: ShipType,
        now: DateTime<Utc>,
    ) -> Result<WsRespawnModel, Error> {
        if time_offset < Duration::zero() || time_offset > WHITE_STAR_DURATION {
            return Err(TrackerError::TimeOffsetOutOfRange {
                offset_seconds: time_offset.num_seconds(),
            }
            .into());
        }

        let (white_star, participation) = self.resolve_rank(rank_index, now).await?;

        let destroyed_at = white_star.started_at.and_utc() + WHITE_STAR_DURATION - time_offset;
        let respawns_at = destroyed_at + respawn_delay(ship_type);

        let respawn = WsRespawnRepository::new(self.db)
            .create(
                &white_star.id,
                &participation.player_id,
                ship_type,
                respawns_at,
            )
            .await?;

        tracing::info!(
            "Recorded {:?} elimination of rank {} in white star {}, respawns at {}",
            ship_type,
            rank_index,
            white_star.id,
            respawns_at
        );

        Ok(respawn)
    }

    /// Removes the most recently recorded pending elimination of a ship.
    ///
    /// Returns whether a row was removed.
    pub async fn clear_elimination(
        &self,
        rank_index: i32,
        ship_type: ShipType,
        now: DateTime<Utc>,
    ) -> Result<bool, Error> {
        let (white_star, participation) = self.resolve_rank(rank_index, now).await?;

        let removed = WsRespawnRepository::new(self.db)
            .delete_latest_pending(&white_star.id, &participation.player_id, ship_type, now)
            .await?;

        Ok(removed)
    }

    /// Everything needed to draw the live poll of each active white star, ordered by slot.
    pub async fn active_info(&self, now: DateTime<Utc>) -> Result<Vec<ActiveWhiteStar>, Error> {
        let mut active = self.active_white_stars(now).await?;
        if active.is_empty() {
            return Ok(Vec::new());
        }
        active.sort_by_key(|ws| ws.slot);

        let white_star_ids: Vec<String> = active.iter().map(|ws| ws.id.clone()).collect();
        let corporation_ids: Vec<String> = active
            .iter()
            .flat_map(|ws| [ws.our_corporation_id.clone(), ws.opponent_corporation_id.clone()])
            .collect();

        let corporations = CorporationRepository::new(self.db)
            .get_many(&corporation_ids)
            .await?;
        let rosters = WsParticipationRepository::new(self.db)
            .get_rosters(&white_star_ids)
            .await?;
        let pending = WsRespawnRepository::new(self.db)
            .get_pending(&white_star_ids, now)
            .await?;

        // (white star, player) -> (roster entry, name)
        let mut roster_index: HashMap<(&str, &str), (&WsParticipationModel, &str)> = HashMap::new();
        for (participation, player) in &rosters {
            let name = player
                .as_ref()
                .map(|player| player.name.as_str())
                .unwrap_or(participation.player_id.as_str());
            roster_index.insert(
                (
                    participation.white_star_id.as_str(),
                    participation.player_id.as_str(),
                ),
                (participation, name),
            );
        }

        let mut info = Vec::with_capacity(active.len());
        for white_star in active {
            let mut us = WhiteStarSide {
                corporation: corporations
                    .iter()
                    .find(|c| c.id == white_star.our_corporation_id)
                    .cloned(),
                ..Default::default()
            };
            let mut them = WhiteStarSide {
                corporation: corporations
                    .iter()
                    .find(|c| c.id == white_star.opponent_corporation_id)
                    .cloned(),
                ..Default::default()
            };

            for (participation, player) in rosters
                .iter()
                .filter(|(p, _)| p.white_star_id == white_star.id)
            {
                let side = if participation.opponent { &mut them } else { &mut us };
                side.players.push(RankedPlayer {
                    player_id: participation.player_id.clone(),
                    name: player
                        .as_ref()
                        .map(|player| player.name.clone())
                        .unwrap_or_else(|| participation.player_id.clone()),
                    rank_index: participation.rank_index,
                });
            }

            for respawn in pending.iter().filter(|r| r.white_star_id == white_star.id) {
                let Some((participation, name)) = roster_index
                    .get(&(respawn.white_star_id.as_str(), respawn.player_id.as_str()))
                else {
                    continue;
                };

                let side = if participation.opponent { &mut them } else { &mut us };
                side.down.push(Elimination {
                    player_id: respawn.player_id.clone(),
                    name: name.to_string(),
                    rank_index: participation.rank_index,
                    ship_type: respawn.ship_type,
                    respawns_at: respawn.respawns_at.and_utc(),
                });
            }

            let started_at = white_star.started_at.and_utc();
            info.push(ActiveWhiteStar {
                white_star_id: white_star.id,
                slot: white_star.slot,
                started_at,
                ends_at: started_at + WHITE_STAR_DURATION,
                us,
                them,
            });
        }

        Ok(info)
    }
}
