//! Heartwatch - heart-disease risk assessment core
//!
//! A deterministic, rule-based risk scorer over thirteen clinical
//! covariates, with an optional remote scoring service and silent
//! fallback to the local model.
//!
//! The library has no UI of its own: a form collaborator validates the
//! intake record ([`intake`]), calls [`scoring::score`] (or
//! [`remote::RemoteScorer::assess`]), and renders the resulting
//! [`models::RiskAssessment`] together with the recommendation text
//! from [`advice`].

pub mod advice;
pub mod config;
pub mod intake;
pub mod models;
pub mod remote;
pub mod scoring;

pub use intake::ValidationError;
pub use models::{ClinicalInput, RiskAssessment, RiskBand, RiskReport};
pub use remote::{RemoteError, RemoteScorer};
pub use scoring::{score, score_detailed};
