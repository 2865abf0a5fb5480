//! Room Ranking
//!
//! ## Overview
//!
//! Ranking applies [`ComfortScorer::score_room`] to every room snapshot and
//! orders the results by final score, highest first.
//!
//! - The sort is stable: rooms with equal scores keep their input order.
//! - Ranks are sequential and 1-based. Equal scores still get distinct
//!   consecutive ranks, so rank N is always the N-th entry.
//! - Empty input gives empty output.
//!
//! [`recommend`] adds a facility filter in front of the ranking. Rooms that
//! declare no facilities only pass an empty requirement set.
//!
//! ## Usage Example
//!
//! ```rust
//! use comfortroom_core::{rank_rooms, RoomSnapshot, SensorReading, Weights};
//!
//! let rooms = vec![
//!     RoomSnapshot::new(1, SensorReading::new(22.0, 650.0, 50.0, 32.0)).with_name("A"),
//!     RoomSnapshot::new(2, SensorReading::new(24.5, 850.0, 45.0, 38.0)).with_name("B"),
//!     RoomSnapshot::new(3, SensorReading::new(21.0, 550.0, 55.0, 28.0)).with_name("C"),
//! ];
//!
//! let ranked = rank_rooms(&rooms, &Weights::default(), None);
//! let order: Vec<_> = ranked.iter().map(|r| r.room_name.as_str()).collect();
//! assert_eq!(order, ["C", "A", "B"]);
//! assert_eq!(ranked[0].rank, 1);
//! ```

use alloc::{collections::BTreeMap, format, string::String, vec::Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    aggregate::ComfortScorer,
    criteria::Criterion,
    reading::{DesiredProfile, SensorReading, Weights},
};

/// Physical facilities of a room
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Facilities {
    /// Building identifier
    pub building: Option<String>,
    /// Floor number, negative below ground
    pub floor: Option<i32>,
    /// Seated capacity
    pub capacity: u32,
    /// Projector installed
    pub has_projector: bool,
    /// Whiteboard installed
    pub has_whiteboard: bool,
    /// Number of power outlets
    pub has_power_outlets: u32,
    /// Step-free access
    pub is_accessible: bool,
}

/// Facility requirements for [`recommend`]
///
/// Unset fields impose no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoomRequirements {
    /// Minimum seated capacity
    pub min_capacity: Option<u32>,
    /// Room must have a projector
    pub needs_projector: bool,
    /// Room must have a whiteboard
    pub needs_whiteboard: bool,
    /// Room must be accessible
    pub needs_accessible: bool,
    /// Minimum number of power outlets
    pub min_power_outlets: Option<u32>,
}

impl RoomRequirements {
    /// True when no constraint is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check a room's facilities against these requirements
    pub fn matches(&self, facilities: Option<&Facilities>) -> bool {
        let Some(f) = facilities else {
            return self.is_empty();
        };

        self.min_capacity.map_or(true, |min| f.capacity >= min)
            && (!self.needs_projector || f.has_projector)
            && (!self.needs_whiteboard || f.has_whiteboard)
            && (!self.needs_accessible || f.is_accessible)
            && self.min_power_outlets.map_or(true, |min| f.has_power_outlets >= min)
    }
}

/// One room as seen by the ranker
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoomSnapshot {
    /// Room identifier
    pub room_id: u64,
    /// Display name, if known
    #[cfg_attr(feature = "serde", serde(default))]
    pub room_name: Option<String>,
    /// Latest sensor values
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub reading: SensorReading,
    /// Declared facilities, if known
    #[cfg_attr(feature = "serde", serde(default))]
    pub facilities: Option<Facilities>,
}

impl RoomSnapshot {
    /// Snapshot without name or facilities
    pub fn new(room_id: u64, reading: SensorReading) -> Self {
        Self {
            room_id,
            room_name: None,
            reading,
            facilities: None,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.room_name = Some(name.into());
        self
    }

    /// Set the facilities
    pub fn with_facilities(mut self, facilities: Facilities) -> Self {
        self.facilities = Some(facilities);
        self
    }

    /// Name to show, `Room <id>` when none is set
    pub fn display_name(&self) -> String {
        match &self.room_name {
            Some(name) => name.clone(),
            None => format!("Room {}", self.room_id),
        }
    }
}

/// A scored room with its position in the ranking
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankedRoom {
    /// 1-based position
    pub rank: usize,
    /// Room identifier
    pub room_id: u64,
    /// Display name
    pub room_name: String,
    /// Final comfort score
    pub score: f64,
    /// Rounded score per present criterion
    pub individual_scores: BTreeMap<Criterion, f64>,
    /// Sensor values the score was computed from
    pub sensor_values: SensorReading,
    /// Facilities, copied from the snapshot
    pub facilities: Option<Facilities>,
}

impl ComfortScorer<'_> {
    /// Score and rank rooms, best first
    pub fn rank_rooms(
        &self,
        rooms: &[RoomSnapshot],
        weights: &Weights,
        profile: Option<&DesiredProfile>,
    ) -> Vec<RankedRoom> {
        let mut ranked: Vec<RankedRoom> = rooms
            .iter()
            .map(|room| {
                let result = self.score_room(&room.reading, weights, profile);
                log_trace!("room {} scored {}", room.room_id, result.final_score);
                RankedRoom {
                    rank: 0,
                    room_id: room.room_id,
                    room_name: room.display_name(),
                    score: result.final_score,
                    individual_scores: result.individual_scores,
                    sensor_values: room.reading,
                    facilities: room.facilities.clone(),
                }
            })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        for (i, room) in ranked.iter_mut().enumerate() {
            room.rank = i + 1;
        }
        ranked
    }

    /// Rank only the rooms that satisfy `requirements`
    pub fn recommend(
        &self,
        rooms: &[RoomSnapshot],
        requirements: &RoomRequirements,
        weights: &Weights,
        profile: Option<&DesiredProfile>,
    ) -> Vec<RankedRoom> {
        let eligible: Vec<RoomSnapshot> = rooms
            .iter()
            .filter(|room| requirements.matches(room.facilities.as_ref()))
            .cloned()
            .collect();

        if eligible.len() < rooms.len() {
            log_debug!(
                "{} of {} rooms meet the facility requirements",
                eligible.len(),
                rooms.len()
            );
        }
        self.rank_rooms(&eligible, weights, profile)
    }
}

/// Rank rooms against the standard thresholds
pub fn rank_rooms(
    rooms: &[RoomSnapshot],
    weights: &Weights,
    profile: Option<&DesiredProfile>,
) -> Vec<RankedRoom> {
    ComfortScorer::default().rank_rooms(rooms, weights, profile)
}

/// Filter rooms by facilities, then rank them against the standard thresholds
pub fn recommend(
    rooms: &[RoomSnapshot],
    requirements: &RoomRequirements,
    weights: &Weights,
    profile: Option<&DesiredProfile>,
) -> Vec<RankedRoom> {
    ComfortScorer::default().recommend(rooms, requirements, weights, profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn lecture_hall() -> Facilities {
        Facilities {
            building: Some("A".into()),
            floor: Some(1),
            capacity: 120,
            has_projector: true,
            has_whiteboard: true,
            has_power_outlets: 40,
            is_accessible: true,
        }
    }

    fn study_room() -> Facilities {
        Facilities {
            building: Some("B".into()),
            floor: Some(-1),
            capacity: 6,
            has_projector: false,
            has_whiteboard: true,
            has_power_outlets: 4,
            is_accessible: false,
        }
    }

    #[test]
    fn empty_input() {
        assert!(rank_rooms(&[], &Weights::default(), None).is_empty());
    }

    #[test]
    fn display_name_fallback() {
        let room = RoomSnapshot::new(42, SensorReading::default());
        assert_eq!(room.display_name(), "Room 42");
        assert_eq!(room.with_name("Atrium").display_name(), "Atrium");
    }

    #[test]
    fn ties_keep_input_order() {
        let same = SensorReading::new(22.0, 600.0, 50.0, 30.0);
        let rooms = vec![
            RoomSnapshot::new(7, same),
            RoomSnapshot::new(3, same),
            RoomSnapshot::new(9, same),
        ];
        let ranked = rank_rooms(&rooms, &Weights::default(), None);
        let ids: Vec<u64> = ranked.iter().map(|r| r.room_id).collect();
        assert_eq!(ids, vec![7, 3, 9]);
        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn ranked_output_carries_inputs() {
        let reading = SensorReading::default().with_co2(1200.0);
        let rooms = vec![RoomSnapshot::new(1, reading).with_facilities(study_room())];
        let ranked = rank_rooms(&rooms, &Weights::default(), None);
        assert_eq!(ranked[0].sensor_values, reading);
        assert_eq!(ranked[0].facilities, Some(study_room()));
        assert_eq!(ranked[0].score, 60.0);
        assert_eq!(ranked[0].individual_scores.get(&Criterion::Co2), Some(&60.0));
    }

    #[test]
    fn requirement_matching() {
        let hall = lecture_hall();
        let study = study_room();

        let none = RoomRequirements::default();
        assert!(none.is_empty());
        assert!(none.matches(Some(&study)));
        assert!(none.matches(None));

        let projector = RoomRequirements { needs_projector: true, ..Default::default() };
        assert!(projector.matches(Some(&hall)));
        assert!(!projector.matches(Some(&study)));
        assert!(!projector.matches(None));

        let big = RoomRequirements { min_capacity: Some(10), ..Default::default() };
        assert!(big.matches(Some(&hall)));
        assert!(!big.matches(Some(&study)));

        let outlets = RoomRequirements { min_power_outlets: Some(4), ..Default::default() };
        assert!(outlets.matches(Some(&study)));
    }

    #[test]
    fn recommend_filters_then_ranks() {
        let rooms = vec![
            RoomSnapshot::new(1, SensorReading::new(21.0, 550.0, 55.0, 28.0))
                .with_facilities(study_room()),
            RoomSnapshot::new(2, SensorReading::new(24.5, 850.0, 45.0, 38.0))
                .with_facilities(lecture_hall()),
            RoomSnapshot::new(3, SensorReading::new(22.0, 650.0, 50.0, 32.0)),
        ];
        let req = RoomRequirements { needs_accessible: true, ..Default::default() };
        let ranked = recommend(&rooms, &req, &Weights::default(), None);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].room_id, 2);
        assert_eq!(ranked[0].rank, 1);
    }

    #[test]
    fn huge_weights_keep_scores_ordered() {
        let rooms = vec![
            RoomSnapshot::new(1, SensorReading::new(24.5, 850.0, 45.0, 38.0)),
            RoomSnapshot::new(2, SensorReading::default().with_co2(1200.0)),
            RoomSnapshot::new(3, SensorReading::new(21.0, 550.0, 55.0, 28.0)),
            RoomSnapshot::new(4, SensorReading::default().with_sound(30.0)),
            RoomSnapshot::new(5, SensorReading::new(22.0, 650.0, 50.0, 32.0)),
        ];
        let huge = Weights::new(1e308, 1e308, 1e308, 1e308);
        let ranked = rank_rooms(&rooms, &huge, None);

        let ids: Vec<u64> = ranked.iter().map(|r| r.room_id).collect();
        assert_eq!(ids, vec![4, 3, 5, 1, 2]);
        for room in &ranked {
            assert!((0.0..=100.0).contains(&room.score), "{}", room.score);
        }
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn value_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RoomSnapshot>();
        assert_send_sync::<RankedRoom>();
        assert_send_sync::<ComfortScorer<'static>>();
    }
}
