//! Ranking Rooms
//!
//! Ranks a small campus with the default weights, then again with CO2
//! prioritised, then filtered by facilities.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_rank_rooms
//! ```

use comfortroom_core::{
    rank_rooms, recommend, Criterion, Facilities, RankedRoom, RoomRequirements, RoomSnapshot,
    SensorReading, Weights,
};

fn facilities(capacity: u32, has_projector: bool, is_accessible: bool) -> Facilities {
    Facilities {
        building: Some("Main".into()),
        floor: Some(1),
        capacity,
        has_projector,
        has_whiteboard: true,
        has_power_outlets: capacity / 4,
        is_accessible,
    }
}

fn print_ranking(ranked: &[RankedRoom]) {
    println!("{:-<60}", "");
    for room in ranked {
        println!("  #{} {}: Score = {:.1}", room.rank, room.room_name, room.score);
        let show = |c: Criterion| match room.individual_scores.get(&c) {
            Some(score) => format!("{score:.1}"),
            None => "N/A".to_string(),
        };
        println!(
            "      Temp: {}, CO2: {}, Humidity: {}, Sound: {}",
            show(Criterion::Temperature),
            show(Criterion::Co2),
            show(Criterion::Humidity),
            show(Criterion::Sound),
        );
    }
    println!();
}

fn main() {
    println!("ComfortRoom Ranking Example");
    println!("===========================\n");

    let rooms = vec![
        RoomSnapshot::new(1, SensorReading::new(22.0, 650.0, 50.0, 32.0))
            .with_name("Room A101")
            .with_facilities(facilities(80, true, true)),
        RoomSnapshot::new(2, SensorReading::new(24.5, 850.0, 45.0, 38.0))
            .with_name("Room A102")
            .with_facilities(facilities(30, true, false)),
        RoomSnapshot::new(3, SensorReading::new(21.0, 550.0, 55.0, 28.0))
            .with_name("Room A201")
            .with_facilities(facilities(8, false, true)),
        RoomSnapshot::new(4, SensorReading::new(25.0, 1100.0, 62.0, 42.0))
            .with_name("Room B101")
            .with_facilities(facilities(80, true, true)),
        RoomSnapshot::new(5, SensorReading::new(19.5, 720.0, 38.0, 35.0))
            .with_name("Room B102")
            .with_facilities(facilities(30, true, false)),
        // No sensors reporting yet, no name on file
        RoomSnapshot::new(6, SensorReading::default()),
    ];

    let weights = Weights::default();
    println!(
        "Default weights: temp={}, co2={}, humidity={}, sound={}",
        weights.temperature, weights.co2, weights.humidity, weights.sound
    );
    print_ranking(&rank_rooms(&rooms, &weights, None));

    let co2_first = Weights::air_quality_priority();
    println!(
        "CO2 priority: temp={}, co2={}, humidity={}, sound={}",
        co2_first.temperature, co2_first.co2, co2_first.humidity, co2_first.sound
    );
    print_ranking(&rank_rooms(&rooms, &co2_first, None));

    let requirements = RoomRequirements {
        needs_projector: true,
        needs_accessible: true,
        ..Default::default()
    };
    println!("Projector + step-free access:");
    print_ranking(&recommend(&rooms, &requirements, &weights, None));
}
