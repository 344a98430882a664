//! Train/test evaluation on a generated categorical dataset.
//!
//! Plays the caller role end to end: builds domains from the observed
//! values, splits the rows, trains in pseudo-random seed mode, and
//! reports hold-out accuracy.

use aq_rs::{AqLearner, Config, SeedMode};

fn main() {
    let rows = generate_rows(200);

    // domains from the full observed value space, in first-seen order
    let n_attrs = rows[0].0.len();
    let mut domains: Vec<Vec<u8>> = vec![Vec::new(); n_attrs];
    for (row, _) in &rows {
        for (i, value) in row.iter().enumerate() {
            if !domains[i].contains(value) {
                domains[i].push(*value);
            }
        }
    }

    let split = rows.len() * 4 / 5;
    let (train, test) = rows.split_at(split);

    let config = Config::builder()
        .beam_width(3)
        .seed_mode(SeedMode::PseudoRandom)
        .rng_seed(42)
        .build()
        .expect("valid config");
    let mut learner = AqLearner::new(config, domains).expect("valid domains");

    learner.load_training_data(train).expect("rows match the domains");
    let report = learner.induce_rules().expect("non-empty dataset");

    println!(
        "Trained on {} rows -> {} rules ({} unseparable)",
        train.len(),
        report.rules_built,
        report.unseparable_residual
    );

    let mut correct = 0;
    let mut no_match = 0;
    for (row, label) in test {
        match learner.classify(row).expect("known values") {
            Some(predicted) if predicted == *label => correct += 1,
            Some(_) => {}
            None => no_match += 1
        }
    }
    println!(
        "Hold-out accuracy: {:.1}% ({no_match} rows matched no rule)",
        correct as f64 / test.len() as f64 * 100.0
    );
}

/// Edibility-style rows: the label follows two of the five attributes.
fn generate_rows(n: usize) -> Vec<(Vec<u8>, &'static str)> {
    (0..n)
        .map(|i| {
            let row: Vec<u8> = (0..5).map(|j| ((i * (2 * j + 1) + j * j) % 4) as u8).collect();
            let label = if (row[1] + row[3]) % 2 == 0 { "edible" } else { "poisonous" };
            (row, label)
        })
        .collect()
}
