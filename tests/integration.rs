//! Integration tests for the AQ learner.

use aq_rs::{AqLearner, Config, SeedMode};

type Row = (Vec<&'static str>, &'static str);

fn weather_domains() -> Vec<Vec<&'static str>> {
    vec![
        vec!["sunny", "overcast", "rain"],
        vec!["hot", "mild", "cool"],
        vec!["high", "normal"],
        vec!["weak", "strong"],
    ]
}

fn weather_data() -> Vec<Row> {
    vec![
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
    ]
}

fn trained(config: Config) -> AqLearner<&'static str, &'static str> {
    let mut learner = AqLearner::new(config, weather_domains()).unwrap();
    learner.load_training_data(&weather_data()).unwrap();
    learner.induce_rules().unwrap();
    learner
}

#[test]
fn weather_training_set_fully_learned() {
    let config = Config::builder().beam_width(2).build().unwrap();
    let mut learner = AqLearner::new(config, weather_domains()).unwrap();
    learner.load_training_data(&weather_data()).unwrap();

    let report = learner.induce_rules().unwrap();

    // conflict-free data: every rule covers only its own class, so the
    // training set classifies back perfectly
    assert_eq!(report.unseparable_residual, 0);
    assert!(report.rules_built >= 2);
    for (row, label) in weather_data() {
        assert_eq!(learner.classify(&row).unwrap(), Some(label));
    }
}

#[test]
fn every_beam_width_learns_the_training_set() {
    for m in 1..=4 {
        let learner = trained(Config::builder().beam_width(m).build().unwrap());

        for (row, label) in weather_data() {
            assert_eq!(learner.classify(&row).unwrap(), Some(label), "beam width {m}");
        }
    }
}

#[test]
fn deterministic_mode_reproduces_rules() {
    let config = Config::builder().beam_width(2).build().unwrap();

    let a = trained(config);
    let b = trained(config);

    assert_eq!(a.rules(), b.rules());
}

#[test]
fn pseudo_random_mode_reproduces_rules() {
    let config = Config::builder()
        .beam_width(2)
        .seed_mode(SeedMode::PseudoRandom)
        .rng_seed(1234)
        .build()
        .unwrap();

    let a = trained(config);
    let b = trained(config);

    assert_eq!(a.rules(), b.rules());
    for (row, label) in weather_data() {
        assert_eq!(a.classify(&row).unwrap(), Some(label));
    }
}

#[test]
fn unseen_rows_classify_without_error() {
    let learner = trained(Config::builder().beam_width(2).build().unwrap());

    let unseen = vec![
        vec!["overcast", "cool", "high", "weak"],
        vec!["rain", "hot", "normal", "strong"],
        vec!["sunny", "hot", "normal", "weak"],
    ];
    for row in &unseen {
        // any verdict including no-match is fine, errors are not
        assert!(learner.classify(row).is_ok());
    }
}

#[test]
fn rule_dump_names_domain_values() {
    let learner = trained(Config::builder().beam_width(2).build().unwrap());

    let described = learner.describe_rules();

    assert_eq!(described.len(), learner.rules().len());
    for line in &described {
        assert!(line.starts_with("IF "));
        assert!(line.contains(" THEN "));
    }
}

#[test]
fn conflicting_rows_are_reported() {
    let domains = vec![vec!["a", "b"], vec!["x", "y"]];
    let mut learner = AqLearner::quick(1, domains);
    learner
        .load_training_data(&[
            (vec!["a", "x"], "pos"),
            (vec!["b", "y"], "neg"),
            (vec!["a", "x"], "neg"),
        ])
        .unwrap();

    let report = learner.induce_rules().unwrap();

    assert_eq!(report.unseparable_residual, 2);
    // induction still terminates with every example covered
    assert_eq!(learner.induce_rules().unwrap().rules_built, 0);
}

#[cfg(feature = "serde")]
#[test]
fn rules_round_trip_through_serde() {
    use aq_rs::Rule;

    let learner = trained(Config::builder().beam_width(2).build().unwrap());

    let json = serde_json::to_string(learner.rules()).unwrap();
    let restored: Vec<Rule<String>> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.len(), learner.rules().len());
    for (restored, original) in restored.iter().zip(learner.rules()) {
        assert_eq!(restored.complex(), original.complex());
        assert_eq!(restored.label(), original.label());
    }
}
