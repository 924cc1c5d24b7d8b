//! Integration tests for the risk scoring contract
//!
//! These pin down the scorer's externally observable properties:
//! - probability bounds and band consistency over the input domain
//! - determinism
//! - per-covariate monotonicity
//! - the exact boundary and extreme scenarios of the model

use heartwatch::{score, score_detailed, ClinicalInput, RiskBand};

/// Every covariate at its lowest-risk tier.
fn baseline() -> ClinicalInput {
    ClinicalInput {
        age: 30,
        sex: 0,
        cp: 0,
        trestbps: 110,
        chol: 180,
        fbs: 0,
        restecg: 0,
        thalach: 160,
        exang: 0,
        oldpeak: 0.0,
        slope: 0,
        ca: 0,
        thal: 0,
    }
}

fn band_for(probability: f64) -> RiskBand {
    if probability >= 0.7 {
        RiskBand::High
    } else if probability >= 0.4 {
        RiskBand::Moderate
    } else {
        RiskBand::Low
    }
}

fn assert_non_decreasing(probabilities: &[f64], covariate: &str) {
    for pair in probabilities.windows(2) {
        assert!(
            pair[1] >= pair[0],
            "{covariate}: probability dropped from {} to {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn probability_bounded_and_band_consistent_over_domain_grid() {
    // Coarse grid over the five highest-weight covariates; the rest stay
    // at baseline
    for age in [1u8, 35, 45, 55, 65, 120] {
        for cp in 0u8..=3 {
            for thalach in [50u16, 110, 130, 150, 250] {
                for oldpeak in [0.0, 0.5, 1.5, 2.5, 10.0] {
                    for ca in 0u8..=3 {
                        let input = ClinicalInput {
                            age,
                            cp,
                            thalach,
                            oldpeak,
                            ca,
                            ..baseline()
                        };
                        let assessment = score(&input);
                        assert!(
                            (0.0..=1.0).contains(&assessment.probability),
                            "probability {} out of bounds for {input:?}",
                            assessment.probability
                        );
                        assert_eq!(
                            assessment.risk,
                            band_for(assessment.probability),
                            "band inconsistent with probability for {input:?}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn scoring_is_deterministic() {
    let input = ClinicalInput {
        age: 57,
        cp: 2,
        trestbps: 142,
        chol: 239,
        fbs: 1,
        thalach: 131,
        oldpeak: 1.8,
        ca: 2,
        thal: 1,
        ..baseline()
    };
    let first = score(&input);
    for _ in 0..10 {
        assert_eq!(score(&input), first);
    }
}

#[test]
fn risk_monotone_in_age() {
    let probabilities: Vec<f64> = (1..=120)
        .map(|age| score(&ClinicalInput { age, ..baseline() }).probability)
        .collect();
    assert_non_decreasing(&probabilities, "age");
}

#[test]
fn risk_monotone_in_chest_pain() {
    let probabilities: Vec<f64> = (0..=3)
        .map(|cp| score(&ClinicalInput { cp, ..baseline() }).probability)
        .collect();
    assert_non_decreasing(&probabilities, "cp");
}

#[test]
fn risk_monotone_in_resting_bp() {
    let probabilities: Vec<f64> = (50..=250)
        .map(|trestbps| score(&ClinicalInput { trestbps, ..baseline() }).probability)
        .collect();
    assert_non_decreasing(&probabilities, "trestbps");
}

#[test]
fn risk_monotone_in_cholesterol() {
    let probabilities: Vec<f64> = (100..=600)
        .map(|chol| score(&ClinicalInput { chol, ..baseline() }).probability)
        .collect();
    assert_non_decreasing(&probabilities, "chol");
}

#[test]
fn risk_monotone_in_st_depression() {
    let probabilities: Vec<f64> = (0..=100)
        .map(|tenths| {
            let oldpeak = f64::from(tenths) / 10.0;
            score(&ClinicalInput { oldpeak, ..baseline() }).probability
        })
        .collect();
    assert_non_decreasing(&probabilities, "oldpeak");
}

#[test]
fn risk_monotone_in_major_vessels() {
    let probabilities: Vec<f64> = (0..=3)
        .map(|ca| score(&ClinicalInput { ca, ..baseline() }).probability)
        .collect();
    assert_non_decreasing(&probabilities, "ca");
    // Strictly increasing arithmetic sequence: +0.10 per vessel
    for pair in probabilities.windows(2) {
        assert!((pair[1] - pair[0] - 0.1).abs() < 1e-9);
    }
}

#[test]
fn risk_monotone_in_thalassemia() {
    let probabilities: Vec<f64> = (0..=2)
        .map(|thal| score(&ClinicalInput { thal, ..baseline() }).probability)
        .collect();
    assert_non_decreasing(&probabilities, "thal");
}

#[test]
fn risk_antitone_in_max_heart_rate() {
    // Higher max heart rate must never increase the probability
    let probabilities: Vec<f64> = (50..=250)
        .rev()
        .map(|thalach| score(&ClinicalInput { thalach, ..baseline() }).probability)
        .collect();
    assert_non_decreasing(&probabilities, "thalach (descending)");
}

#[test]
fn zero_scenario_scores_zero_low() {
    let assessment = score(&baseline());
    assert_eq!(assessment.probability, 0.0);
    assert_eq!(assessment.risk, RiskBand::Low);
}

#[test]
fn maximal_scenario_clamps_to_one_high() {
    let input = ClinicalInput {
        age: 65,
        cp: 3,
        trestbps: 150,
        chol: 250,
        fbs: 1,
        thalach: 100,
        exang: 1,
        oldpeak: 3.0,
        ca: 3,
        thal: 2,
        ..baseline()
    };
    let report = score_detailed(&input);
    assert!((report.raw_score - 1.75).abs() < 1e-9);
    assert_eq!(report.assessment.probability, 1.0);
    assert_eq!(report.assessment.risk, RiskBand::High);
}

#[test]
fn exact_band_boundaries_are_inclusive() {
    // 0.2 (age > 60) + 0.2 (cp == 3) = exactly 0.40
    let moderate = ClinicalInput {
        age: 61,
        cp: 3,
        ..baseline()
    };
    assert_eq!(score(&moderate).risk, RiskBand::Moderate);

    // + 0.15 (exang) + 0.15 (thal == 2) = exactly 0.70
    let high = ClinicalInput {
        exang: 1,
        thal: 2,
        ..moderate
    };
    assert_eq!(score(&high).risk, RiskBand::High);
}

#[test]
fn detailed_report_carries_band_recommendations() {
    let report = score_detailed(&baseline());
    assert_eq!(
        report.recommendations,
        heartwatch::advice::recommendations(report.assessment.risk)
    );
    assert_eq!(report.contributions.len(), 10);
    assert!(report.contributions.iter().all(|c| c.points >= 0.0));
}
