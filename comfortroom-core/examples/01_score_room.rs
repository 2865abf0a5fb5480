//! Scoring a Single Room
//!
//! Walks through the four comfort curves and then combines them into one
//! weighted score.
//!
//! ## What You'll Learn
//!
//! - Scoring individual criteria with the per-criterion scorers
//! - Classifying raw values into comfort bands
//! - Aggregating a full or partial reading into a final score
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_score_room
//! ```

use comfortroom_core::{
    score_room, ComfortScorer, Criterion, ScoringError, SensorReading, Weights,
};

fn main() -> Result<(), ScoringError> {
    println!("ComfortRoom Scoring Example");
    println!("===========================\n");

    let scorer = ComfortScorer::default();

    let samples: [(Criterion, &[f64]); 4] = [
        (Criterion::Temperature, &[18.0, 20.0, 22.0, 24.0, 26.0, 28.0]),
        (Criterion::Co2, &[400.0, 600.0, 800.0, 1000.0, 1200.0, 1400.0, 1600.0]),
        (Criterion::Humidity, &[25.0, 35.0, 45.0, 50.0, 55.0, 65.0, 75.0]),
        (Criterion::Sound, &[25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0]),
    ];

    for (i, (criterion, values)) in samples.iter().enumerate() {
        println!("{}. {} scoring:", i + 1, criterion);
        for &value in values.iter() {
            let score = scorer.score_criterion(*criterion, value, None)?;
            let band = scorer.band(*criterion, value);
            println!(
                "   {:>7.1} {:<3} -> {:5.1}  ({})",
                value,
                criterion.unit(),
                score,
                band.description()
            );
        }
        println!();
    }

    println!("5. Weighted aggregation:");
    let weights = Weights::default();
    let reading = SensorReading::new(22.0, 650.0, 50.0, 32.0);
    let result = score_room(&reading, &weights, None);
    for (criterion, score) in &result.individual_scores {
        println!("   {:<12} {:5.1}  (weight {:.2})", criterion, score, weights.get(*criterion));
    }
    println!("   final        {:5.1}\n", result.final_score);

    println!("6. Partial reading (CO2 sensor only):");
    let co2_only = SensorReading::default().with_co2(600.0);
    let result = score_room(&co2_only, &weights, None);
    println!("   final        {:5.1}", result.final_score);

    let nothing = score_room(&SensorReading::default(), &weights, None);
    println!("   no sensors   {:5.1}", nothing.final_score);

    Ok(())
}
