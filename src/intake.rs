//! Intake-form domain validation
//!
//! The scorer is total only over in-domain inputs, and performs no
//! defensive checks of its own; the form collaborator must reject a
//! submission here before calling [`crate::scoring::score`]. Bounds are
//! inclusive and match the intake form's field constraints.

use crate::models::ClinicalInput;
use thiserror::Error;

/// Inclusive numeric domain of one intake field.
#[derive(Clone, Copy)]
pub struct FieldDomain {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    value: fn(&ClinicalInput) -> f64,
}

impl std::fmt::Debug for FieldDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDomain")
            .field("field", &self.field)
            .field("min", &self.min)
            .field("max", &self.max)
            .finish()
    }
}

/// Domains of all thirteen covariates, in wire-field order.
pub const FIELD_DOMAINS: &[FieldDomain] = &[
    FieldDomain { field: "age", min: 1.0, max: 120.0, value: |i| f64::from(i.age) },
    FieldDomain { field: "sex", min: 0.0, max: 1.0, value: |i| f64::from(i.sex) },
    FieldDomain { field: "cp", min: 0.0, max: 3.0, value: |i| f64::from(i.cp) },
    FieldDomain { field: "trestbps", min: 50.0, max: 250.0, value: |i| f64::from(i.trestbps) },
    FieldDomain { field: "chol", min: 100.0, max: 600.0, value: |i| f64::from(i.chol) },
    FieldDomain { field: "fbs", min: 0.0, max: 1.0, value: |i| f64::from(i.fbs) },
    FieldDomain { field: "restecg", min: 0.0, max: 2.0, value: |i| f64::from(i.restecg) },
    FieldDomain { field: "thalach", min: 50.0, max: 250.0, value: |i| f64::from(i.thalach) },
    FieldDomain { field: "exang", min: 0.0, max: 1.0, value: |i| f64::from(i.exang) },
    FieldDomain { field: "oldpeak", min: 0.0, max: 10.0, value: |i| i.oldpeak },
    FieldDomain { field: "slope", min: 0.0, max: 2.0, value: |i| f64::from(i.slope) },
    FieldDomain { field: "ca", min: 0.0, max: 3.0, value: |i| f64::from(i.ca) },
    FieldDomain { field: "thal", min: 0.0, max: 2.0, value: |i| f64::from(i.thal) },
];

/// An intake field outside its declared domain.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field} = {value} is outside its domain [{min}, {max}]")]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// Check every field against its domain; `Err` carries the first
/// violation in field order. Use [`violations`] to collect all of them.
pub fn validate(input: &ClinicalInput) -> Result<(), ValidationError> {
    match violations(input).into_iter().next() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// All out-of-domain fields of a record, in wire-field order.
pub fn violations(input: &ClinicalInput) -> Vec<ValidationError> {
    FIELD_DOMAINS
        .iter()
        .filter_map(|domain| {
            let value = (domain.value)(input);
            if value < domain.min || value > domain.max || !value.is_finite() {
                Some(ValidationError {
                    field: domain.field,
                    value,
                    min: domain.min,
                    max: domain.max,
                })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_domain() -> ClinicalInput {
        ClinicalInput {
            age: 54,
            sex: 1,
            cp: 2,
            trestbps: 130,
            chol: 246,
            fbs: 0,
            restecg: 1,
            thalach: 150,
            exang: 0,
            oldpeak: 1.5,
            slope: 1,
            ca: 0,
            thal: 2,
        }
    }

    #[test]
    fn test_in_domain_record_passes() {
        assert!(validate(&in_domain()).is_ok());
        assert!(violations(&in_domain()).is_empty());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut input = in_domain();
        input.age = 1;
        input.trestbps = 250;
        input.chol = 100;
        input.oldpeak = 10.0;
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn test_out_of_domain_age() {
        let mut input = in_domain();
        input.age = 0;
        let error = validate(&input).unwrap_err();
        assert_eq!(error.field, "age");
        assert_eq!(error.value, 0.0);
        assert_eq!(error.to_string(), "age = 0 is outside its domain [1, 120]");
    }

    #[test]
    fn test_out_of_domain_oldpeak() {
        let mut input = in_domain();
        input.oldpeak = 10.5;
        let error = validate(&input).unwrap_err();
        assert_eq!(error.field, "oldpeak");
    }

    #[test]
    fn test_nan_oldpeak_rejected() {
        let mut input = in_domain();
        input.oldpeak = f64::NAN;
        assert!(validate(&input).is_err());
    }

    #[test]
    fn test_collects_all_violations_in_field_order() {
        let mut input = in_domain();
        input.sex = 2;
        input.cp = 4;
        input.thal = 9;
        let errors = violations(&input);
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["sex", "cp", "thal"]);
    }

    #[test]
    fn test_domain_table_covers_all_fields() {
        assert_eq!(FIELD_DOMAINS.len(), 13);
    }
}
