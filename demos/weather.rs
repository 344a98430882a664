//! Rule induction on the classic play-tennis table.

use aq_rs::{AqLearner, Config};

fn main() {
    let domains = vec![
        vec!["sunny", "overcast", "rain"],
        vec!["hot", "mild", "cool"],
        vec!["high", "normal"],
        vec!["weak", "strong"],
    ];

    let data = vec![
        (vec!["sunny", "hot", "high", "weak"], "no"),
        (vec!["sunny", "hot", "high", "strong"], "no"),
        (vec!["overcast", "hot", "high", "weak"], "yes"),
        (vec!["rain", "mild", "high", "weak"], "yes"),
        (vec!["rain", "cool", "normal", "weak"], "yes"),
        (vec!["rain", "cool", "normal", "strong"], "no"),
        (vec!["overcast", "cool", "normal", "strong"], "yes"),
        (vec!["sunny", "mild", "high", "weak"], "no"),
        (vec!["sunny", "cool", "normal", "weak"], "yes"),
        (vec!["rain", "mild", "normal", "weak"], "yes"),
        (vec!["sunny", "mild", "normal", "strong"], "yes"),
        (vec!["overcast", "mild", "high", "strong"], "yes"),
        (vec!["overcast", "hot", "normal", "weak"], "yes"),
        (vec!["rain", "mild", "high", "strong"], "no"),
    ];

    let config = Config::builder().beam_width(2).build().expect("valid config");
    let mut learner = AqLearner::new(config, domains).expect("valid domains");

    learner.load_training_data(&data).expect("rows match the domains");
    let report = learner.induce_rules().expect("non-empty dataset");

    println!("Induced {} rules from {} examples:", report.rules_built, data.len());
    for line in learner.describe_rules() {
        println!("  {line}");
    }

    let correct = data
        .iter()
        .filter(|(row, label)| learner.classify(row).expect("known values") == Some(*label))
        .count();
    println!(
        "\nTraining accuracy: {:.1}%",
        correct as f64 / data.len() as f64 * 100.0
    );

    let unseen = vec!["overcast", "cool", "high", "weak"];
    match learner.classify(&unseen).expect("known values") {
        Some(label) => println!("Unseen {unseen:?} -> {label}"),
        None => println!("Unseen {unseen:?} -> no rule matched")
    }
}
