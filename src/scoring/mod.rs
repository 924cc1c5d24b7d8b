//! Rule-based heart-disease risk scorer
//!
//! The model is a simple additive point system: each covariate is
//! evaluated independently against fixed tiers and contributes at most
//! one tier's points (except `ca`, which is linear in the vessel count).
//! There are no interaction terms, no randomness, and no state — scoring
//! is a fold over an ordered list of (covariate, rule) pairs, so every
//! rule can be exercised in isolation.
//!
//! # Scoring pipeline
//!
//! ```text
//! raw    = Σ rule(input)            (non-negative, at most 1.75)
//! p_raw  = clamp(raw, 0, 1)
//! p      = round(p_raw * 100) / 100 (two decimals)
//! band   = Low   if p < 0.40
//!          Moderate if 0.40 <= p < 0.70
//!          High  if p >= 0.70
//! ```
//!
//! The weights and thresholds are a fixed contract: identical input must
//! always produce an identical probability, bit for bit.

mod rules;

use crate::advice;
use crate::models::{ClinicalInput, CovariateContribution, RiskAssessment, RiskBand, RiskReport};
use tracing::debug;

type RuleFn = fn(&ClinicalInput) -> f64;

/// Ordered (covariate, rule) pairs. Order matters only for reporting;
/// the sum is the same either way.
const RULES: &[(&str, RuleFn)] = &[
    ("age", rules::age),
    ("cp", rules::chest_pain),
    ("trestbps", rules::resting_bp),
    ("chol", rules::cholesterol),
    ("fbs", rules::fasting_blood_sugar),
    ("thalach", rules::max_heart_rate),
    ("exang", rules::exercise_angina),
    ("oldpeak", rules::st_depression),
    ("ca", rules::major_vessels),
    ("thal", rules::thalassemia),
];

/// Score one intake record.
///
/// Pure and total over in-domain inputs (see [`crate::intake`] for the
/// domains); behavior outside them is unspecified. Never fails.
pub fn score(input: &ClinicalInput) -> RiskAssessment {
    let raw: f64 = RULES.iter().map(|(_, rule)| rule(input)).sum();
    assessment_from_raw(raw)
}

/// Score one intake record and keep the per-covariate breakdown.
///
/// Same probability and band as [`score`], plus each rule's contribution
/// and the recommendation text for the resulting band.
pub fn score_detailed(input: &ClinicalInput) -> RiskReport {
    let mut raw = 0.0;
    let mut contributions = Vec::with_capacity(RULES.len());
    for &(covariate, rule) in RULES {
        let points = rule(input);
        debug!("covariate {covariate}: +{points:.2}");
        raw += points;
        contributions.push(CovariateContribution { covariate, points });
    }

    let assessment = assessment_from_raw(raw);
    RiskReport {
        assessment,
        contributions,
        raw_score: raw,
        recommendations: advice::recommendations(assessment.risk),
    }
}

fn assessment_from_raw(raw: f64) -> RiskAssessment {
    let probability = round_two_decimals(raw.clamp(0.0, 1.0));
    RiskAssessment {
        probability,
        risk: RiskBand::from_probability(probability),
    }
}

/// Two-decimal rounding, half away from zero (matches `Math.round(p*100)/100`).
fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
