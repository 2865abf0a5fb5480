//! Shared fixtures for integration tests
//!
//! Provides:
//! - The five-room campus sample used across ranking tests
//! - Facility presets for requirement filtering
//! - A small deterministic reading generator for bulk tests

#![allow(dead_code)]

use comfortroom_core::{Facilities, RoomSnapshot, SensorReading};

/// Lecture hall with every facility
pub fn lecture_hall(building: &str) -> Facilities {
    Facilities {
        building: Some(building.into()),
        floor: Some(0),
        capacity: 80,
        has_projector: true,
        has_whiteboard: true,
        has_power_outlets: 24,
        is_accessible: true,
    }
}

/// Seminar room: projector, no step-free access
pub fn seminar_room(building: &str) -> Facilities {
    Facilities {
        building: Some(building.into()),
        floor: Some(2),
        capacity: 30,
        has_projector: true,
        has_whiteboard: true,
        has_power_outlets: 10,
        is_accessible: false,
    }
}

/// Small group study room
pub fn study_room(building: &str) -> Facilities {
    Facilities {
        building: Some(building.into()),
        floor: Some(1),
        capacity: 8,
        has_projector: false,
        has_whiteboard: true,
        has_power_outlets: 6,
        is_accessible: true,
    }
}

/// Campus sample, in the order a catalogue query returns it
///
/// | id | name | temp | CO2  | RH | dB |
/// |----|------|------|------|----|----|
/// | 1  | A101 | 22.0 | 650  | 50 | 32 |
/// | 2  | A102 | 24.5 | 850  | 45 | 38 |
/// | 3  | A201 | 21.0 | 550  | 55 | 28 |
/// | 4  | B101 | 25.0 | 1100 | 62 | 42 |
/// | 5  | B102 | 19.5 | 720  | 38 | 35 |
pub fn campus_rooms() -> Vec<RoomSnapshot> {
    vec![
        RoomSnapshot::new(1, SensorReading::new(22.0, 650.0, 50.0, 32.0))
            .with_name("Room A101")
            .with_facilities(lecture_hall("A")),
        RoomSnapshot::new(2, SensorReading::new(24.5, 850.0, 45.0, 38.0))
            .with_name("Room A102")
            .with_facilities(seminar_room("A")),
        RoomSnapshot::new(3, SensorReading::new(21.0, 550.0, 55.0, 28.0))
            .with_name("Room A201")
            .with_facilities(study_room("A")),
        RoomSnapshot::new(4, SensorReading::new(25.0, 1100.0, 62.0, 42.0))
            .with_name("Room B101")
            .with_facilities(lecture_hall("B")),
        RoomSnapshot::new(5, SensorReading::new(19.5, 720.0, 38.0, 35.0))
            .with_name("Room B102")
            .with_facilities(seminar_room("B")),
    ]
}

/// Ids of a ranking, in rank order
pub fn ids(ranked: &[comfortroom_core::RankedRoom]) -> Vec<u64> {
    ranked.iter().map(|r| r.room_id).collect()
}

/// Deterministic reading generator (LCG)
pub struct ReadingGenerator {
    seed: u32,
}

impl ReadingGenerator {
    /// Create a generator with a fixed seed
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    fn next_unit(&mut self) -> f64 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        self.seed as f64 / u32::MAX as f64
    }

    fn range(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }

    /// Plausible indoor reading; roughly one sensor in ten is offline
    pub fn reading(&mut self) -> SensorReading {
        let mut reading = SensorReading::default();
        if self.next_unit() > 0.1 {
            reading.temperature = Some(self.range(16.0, 30.0));
        }
        if self.next_unit() > 0.1 {
            reading.co2 = Some(self.range(400.0, 2000.0));
        }
        if self.next_unit() > 0.1 {
            reading.humidity = Some(self.range(20.0, 80.0));
        }
        if self.next_unit() > 0.1 {
            reading.sound = Some(self.range(25.0, 65.0));
        }
        reading
    }

    /// `count` anonymous rooms with ids starting at 1
    pub fn rooms(&mut self, count: usize) -> Vec<RoomSnapshot> {
        (1..=count as u64)
            .map(|id| RoomSnapshot::new(id, self.reading()))
            .collect()
    }
}
