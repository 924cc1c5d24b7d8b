//! Per-covariate scoring rules
//!
//! Each rule maps one covariate to its point contribution. Tiers within
//! a rule are mutually exclusive: only the single highest matching tier
//! pays out. All threshold comparisons are strict (`>` for risk that
//! rises with the value, `<` for `thalach`, where lower is riskier).

use crate::models::ClinicalInput;

/// Highest tier whose threshold the value strictly exceeds.
/// Tiers must be ordered by descending threshold.
fn above_tiers(value: f64, tiers: &[(f64, f64)]) -> f64 {
    tiers
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map_or(0.0, |(_, points)| *points)
}

/// Lowest tier whose threshold the value is strictly below.
/// Tiers must be ordered by ascending threshold.
fn below_tiers(value: f64, tiers: &[(f64, f64)]) -> f64 {
    tiers
        .iter()
        .find(|(threshold, _)| value < *threshold)
        .map_or(0.0, |(_, points)| *points)
}

pub(super) fn age(input: &ClinicalInput) -> f64 {
    above_tiers(
        f64::from(input.age),
        &[(60.0, 0.2), (50.0, 0.15), (40.0, 0.1)],
    )
}

pub(super) fn chest_pain(input: &ClinicalInput) -> f64 {
    match input.cp {
        3 => 0.2,
        2 => 0.15,
        1 => 0.1,
        _ => 0.0,
    }
}

pub(super) fn resting_bp(input: &ClinicalInput) -> f64 {
    above_tiers(f64::from(input.trestbps), &[(140.0, 0.15), (120.0, 0.1)])
}

pub(super) fn cholesterol(input: &ClinicalInput) -> f64 {
    above_tiers(f64::from(input.chol), &[(240.0, 0.15), (200.0, 0.1)])
}

pub(super) fn fasting_blood_sugar(input: &ClinicalInput) -> f64 {
    if input.fbs == 1 {
        0.1
    } else {
        0.0
    }
}

pub(super) fn max_heart_rate(input: &ClinicalInput) -> f64 {
    below_tiers(f64::from(input.thalach), &[(120.0, 0.15), (140.0, 0.1)])
}

pub(super) fn exercise_angina(input: &ClinicalInput) -> f64 {
    if input.exang == 1 {
        0.15
    } else {
        0.0
    }
}

pub(super) fn st_depression(input: &ClinicalInput) -> f64 {
    above_tiers(input.oldpeak, &[(2.0, 0.2), (1.0, 0.15)])
}

/// Linear in the vessel count, not tiered.
pub(super) fn major_vessels(input: &ClinicalInput) -> f64 {
    f64::from(input.ca) * 0.1
}

pub(super) fn thalassemia(input: &ClinicalInput) -> f64 {
    match input.thal {
        2 => 0.15,
        1 => 0.1,
        _ => 0.0,
    }
}
