//! Static recommendation text keyed by risk band
//!
//! The results view renders these verbatim; nothing here depends on the
//! individual covariates, only on the band.

use crate::models::RiskBand;

const HIGH_RISK_RECOMMENDATIONS: &[&str] = &[
    "Consult with a cardiologist immediately",
    "Monitor blood pressure and cholesterol regularly",
    "Adopt a heart-healthy diet low in saturated fats",
    "Engage in regular physical activity as advised by your doctor",
    "Consider stress management techniques",
    "Quit smoking if applicable",
];

const MODERATE_RISK_RECOMMENDATIONS: &[&str] = &[
    "Schedule a check-up with your healthcare provider",
    "Monitor your heart health regularly",
    "Maintain a balanced, heart-healthy diet",
    "Exercise regularly (30 minutes daily)",
    "Manage stress through relaxation techniques",
    "Keep blood pressure and cholesterol in check",
];

const LOW_RISK_RECOMMENDATIONS: &[&str] = &[
    "Continue maintaining a healthy lifestyle",
    "Regular exercise and balanced diet",
    "Annual health check-ups recommended",
    "Stay active and manage stress",
    "Monitor blood pressure occasionally",
];

/// Shown on every results view regardless of band.
pub const MEDICAL_DISCLAIMER: &str = "This prediction is based on statistical models and should \
    not replace professional medical advice. Always consult with qualified healthcare providers \
    for proper diagnosis and treatment.";

/// Extra notice rendered only for the High band.
pub const HIGH_RISK_NOTICE: &str = "This result indicates an elevated risk. Please consult with \
    a healthcare professional immediately.";

/// Recommendation list for a band.
pub fn recommendations(band: RiskBand) -> &'static [&'static str] {
    match band {
        RiskBand::High => HIGH_RISK_RECOMMENDATIONS,
        RiskBand::Moderate => MODERATE_RISK_RECOMMENDATIONS,
        RiskBand::Low => LOW_RISK_RECOMMENDATIONS,
    }
}
