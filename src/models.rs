//! Core data models for heartwatch
//!
//! These models are value types: an input record is scored into an
//! assessment, the assessment lives for one results-view render, and
//! nothing is ever persisted or mutated after creation.

use serde::{Deserialize, Serialize};

/// One clinical intake record — the thirteen covariates of the risk model.
///
/// Field names follow the UCI heart-disease dataset convention, which is
/// also the wire format of the remote `/predict` endpoint. Domains are
/// documented per field and enforced by [`crate::intake`], not here: the
/// scorer is total over in-domain inputs and unspecified outside them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClinicalInput {
    /// Age in years, 1-120
    pub age: u8,
    /// Biological sex: 0 = female, 1 = male
    pub sex: u8,
    /// Chest pain type, 0-3 (3 carries the most risk)
    pub cp: u8,
    /// Resting blood pressure in mmHg, 50-250
    pub trestbps: u16,
    /// Serum cholesterol in mg/dl, 100-600
    pub chol: u16,
    /// Fasting blood sugar > 120 mg/dl: 0 or 1
    pub fbs: u8,
    /// Resting ECG result, 0-2
    pub restecg: u8,
    /// Maximum heart rate achieved, 50-250 (lower is riskier)
    pub thalach: u16,
    /// Exercise-induced angina: 0 or 1
    pub exang: u8,
    /// ST depression induced by exercise, 0.0-10.0
    pub oldpeak: f64,
    /// Slope of the peak exercise ST segment, 0-2
    pub slope: u8,
    /// Number of major vessels colored by fluoroscopy, 0-3
    pub ca: u8,
    /// Thalassemia category, 0-2
    pub thal: u8,
}

/// Risk bands, ordered Low < Moderate < High.
///
/// Serialized with capitalized labels to match the remote wire format
/// (`"risk": "High"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    /// Bucket a two-decimal probability into a band.
    ///
    /// Lower bounds are inclusive: exactly 0.40 is Moderate and exactly
    /// 0.70 is High.
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.7 {
            RiskBand::High
        } else if probability >= 0.4 {
            RiskBand::Moderate
        } else {
            RiskBand::Low
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskBand::Low => write!(f, "Low"),
            RiskBand::Moderate => write!(f, "Moderate"),
            RiskBand::High => write!(f, "High"),
        }
    }
}

/// Result of one scoring call: probability in [0, 1] rounded to two
/// decimals, and the band it falls in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub probability: f64,
    pub risk: RiskBand,
}

/// Contribution of a single covariate to the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CovariateContribution {
    /// Covariate field name (`"age"`, `"cp"`, ...)
    pub covariate: &'static str,
    /// Points added by this covariate's rule, 0.0 if no tier matched
    pub points: f64,
}

/// Full report for a results view: the assessment, the per-covariate
/// breakdown behind it, and the recommendation text for the band.
#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
    pub assessment: RiskAssessment,
    /// One entry per covariate rule, in scoring order
    pub contributions: Vec<CovariateContribution>,
    /// Raw additive score before clamping to [0, 1]
    pub raw_score: f64,
    pub recommendations: &'static [&'static str],
}
