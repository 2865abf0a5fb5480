//! Desired Profiles
//!
//! Shows how a personal comfort profile shifts scores. Temperature, CO2
//! and sound overrides move a single reference point; a humidity override
//! moves the whole ideal window.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_desired_profile
//! ```

use comfortroom_core::{
    rank_rooms, ComfortScorer, Criterion, DesiredProfile, RoomSnapshot, ScoringError,
    SensorReading, Weights,
};

fn main() -> Result<(), ScoringError> {
    println!("ComfortRoom Desired Profile Example");
    println!("===================================\n");

    let scorer = ComfortScorer::default();

    println!("Temperature, ideal 22 vs 23.5:");
    for value in [21.0, 22.0, 23.0, 23.5, 24.0] {
        let standard = scorer.score_criterion(Criterion::Temperature, value, None)?;
        let warm = scorer.score_criterion(Criterion::Temperature, value, Some(23.5))?;
        println!("   {value:>5.1} °C  standard {standard:5.1}  warm {warm:5.1}");
    }

    println!("\nHumidity, ideal window [45, 55] vs 42 ± 5:");
    for value in [36.0, 40.0, 45.0, 50.0, 55.0, 58.0] {
        let standard = scorer.score_criterion(Criterion::Humidity, value, None)?;
        let dry = scorer.score_criterion(Criterion::Humidity, value, Some(42.0))?;
        println!("   {value:>5.1} %   standard {standard:5.1}  dry {dry:5.1}");
    }

    println!("\nOut-of-band ideals are clamped (temperature ideal 30 acts as 24):");
    let clamped = scorer.score_criterion(Criterion::Temperature, 24.0, Some(30.0))?;
    println!("   24.0 °C -> {clamped:.1}");

    let rooms = vec![
        RoomSnapshot::new(1, SensorReading::new(22.0, 650.0, 50.0, 32.0)).with_name("Cool"),
        RoomSnapshot::new(2, SensorReading::new(23.5, 650.0, 42.0, 32.0)).with_name("Warm and dry"),
    ];
    let profile = DesiredProfile::default()
        .with_temperature(23.5)
        .with_humidity(42.0);

    println!("\nRanking without and with the profile:");
    for (label, profile) in [("standard", None), ("personal", Some(&profile))] {
        let ranked = rank_rooms(&rooms, &Weights::default(), profile);
        let order: Vec<String> = ranked
            .iter()
            .map(|r| format!("{} ({:.1})", r.room_name, r.score))
            .collect();
        println!("   {label:<9} {}", order.join(" > "));
    }

    Ok(())
}
