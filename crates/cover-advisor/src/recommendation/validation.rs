use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::domain::{RiskTolerance, UserProfile};

pub const MINIMUM_AGE: u64 = 7;

/// Raw request body. Fields stay untyped so every violation can be reported at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub income: Option<Value>,
    #[serde(default)]
    pub number_of_dependents: Option<Value>,
    #[serde(default)]
    pub risk_tolerance: Option<Value>,
}

impl From<UserProfile> for RecommendationRequest {
    fn from(profile: UserProfile) -> Self {
        Self {
            age: Some(Value::from(profile.age)),
            income: Some(Value::from(profile.income)),
            number_of_dependents: Some(Value::from(profile.number_of_dependents)),
            risk_tolerance: Some(Value::from(profile.risk_tolerance.label())),
        }
    }
}

/// Single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All field violations found in a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details = self
            .fields
            .iter()
            .map(|error| format!("{} {}", error.field, error.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "invalid user details: {details}")
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|error| error.field == field)
    }
}

impl RecommendationRequest {
    /// Check every field and build the typed profile.
    pub fn validate(&self) -> Result<UserProfile, ValidationError> {
        let mut errors = Vec::new();

        let age = integer_field("age", self.age.as_ref(), MINIMUM_AGE, &mut errors)
            .and_then(|value| narrow("age", value, &mut errors));
        let income = integer_field("income", self.income.as_ref(), 0, &mut errors);
        let number_of_dependents = integer_field(
            "number_of_dependents",
            self.number_of_dependents.as_ref(),
            0,
            &mut errors,
        )
        .and_then(|value| narrow("number_of_dependents", value, &mut errors));
        let risk_tolerance = risk_tolerance_field(self.risk_tolerance.as_ref(), &mut errors);

        match (age, income, number_of_dependents, risk_tolerance) {
            (Some(age), Some(income), Some(number_of_dependents), Some(risk_tolerance))
                if errors.is_empty() =>
            {
                Ok(UserProfile {
                    age,
                    income,
                    number_of_dependents,
                    risk_tolerance,
                })
            }
            _ => Err(ValidationError { fields: errors }),
        }
    }
}

fn integer_field(
    field: &'static str,
    value: Option<&Value>,
    minimum: u64,
    errors: &mut Vec<FieldError>,
) -> Option<u64> {
    let Some(value) = value.filter(|value| !value.is_null()) else {
        errors.push(FieldError {
            field,
            message: "is required".to_string(),
        });
        return None;
    };

    let parsed = match value {
        Value::Number(number) => {
            if let Some(unsigned) = number.as_u64() {
                Some(Integer::InRange(unsigned))
            } else if number.as_i64().is_some() {
                Some(Integer::Negative)
            } else {
                number
                    .as_f64()
                    .filter(|float| float.fract() == 0.0)
                    .map(|float| {
                        if float < 0.0 {
                            Integer::Negative
                        } else if float >= U64_LIMIT {
                            Integer::TooLarge
                        } else {
                            Integer::InRange(float as u64)
                        }
                    })
            }
        }
        _ => None,
    };

    let message = match parsed {
        Some(Integer::InRange(number)) if number >= minimum => return Some(number),
        Some(Integer::InRange(_) | Integer::Negative) => format!("must be at least {minimum}"),
        Some(Integer::TooLarge) => format!("must be at most {}", u64::MAX),
        None => "must be an integer".to_string(),
    };
    errors.push(FieldError { field, message });
    None
}

/// 2^64, the first whole float `u64` cannot hold.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

enum Integer {
    InRange(u64),
    Negative,
    TooLarge,
}

fn narrow(field: &'static str, value: u64, errors: &mut Vec<FieldError>) -> Option<u32> {
    match u32::try_from(value) {
        Ok(narrowed) => Some(narrowed),
        Err(_) => {
            errors.push(FieldError {
                field,
                message: format!("must be at most {}", u32::MAX),
            });
            None
        }
    }
}

fn risk_tolerance_field(
    value: Option<&Value>,
    errors: &mut Vec<FieldError>,
) -> Option<RiskTolerance> {
    match value {
        None | Some(Value::Null) => {
            errors.push(FieldError {
                field: "risk_tolerance",
                message: "is required".to_string(),
            });
            None
        }
        Some(value) => {
            let parsed = value.as_str().and_then(RiskTolerance::parse);
            if parsed.is_none() {
                errors.push(FieldError {
                    field: "risk_tolerance",
                    message: "must be one of: low, medium, high".to_string(),
                });
            }
            parsed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> RecommendationRequest {
        serde_json::from_value(body).expect("request shape")
    }

    #[test]
    fn accepts_well_formed_details() {
        let profile = request(json!({
            "age": 22,
            "income": 35000,
            "number_of_dependents": 2,
            "risk_tolerance": "medium"
        }))
        .validate()
        .expect("valid details");

        assert_eq!(profile.age, 22);
        assert_eq!(profile.income, 35000);
        assert_eq!(profile.number_of_dependents, 2);
        assert_eq!(profile.risk_tolerance, RiskTolerance::Medium);
    }

    #[test]
    fn rejects_age_below_minimum() {
        let error = request(json!({
            "age": 5,
            "income": 35000,
            "number_of_dependents": 0,
            "risk_tolerance": "low"
        }))
        .validate()
        .expect_err("age 5 rejected");

        assert_eq!(
            error.fields,
            vec![FieldError {
                field: "age",
                message: "must be at least 7".to_string(),
            }]
        );
    }

    #[test]
    fn reports_every_violation_together() {
        let error = request(json!({
            "income": 1200.5,
            "number_of_dependents": -1,
            "risk_tolerance": "reckless"
        }))
        .validate()
        .expect_err("invalid body");

        assert!(error.has_field("age"));
        assert!(error.has_field("income"));
        assert!(error.has_field("number_of_dependents"));
        assert!(error.has_field("risk_tolerance"));
        assert_eq!(error.fields.len(), 4);
    }

    #[test]
    fn rejects_whole_floats_beyond_u64() {
        let error = request(json!({
            "age": 30,
            "income": 1e20,
            "number_of_dependents": 0,
            "risk_tolerance": "low"
        }))
        .validate()
        .expect_err("oversized income rejected");

        assert_eq!(
            error.fields,
            vec![FieldError {
                field: "income",
                message: format!("must be at most {}", u64::MAX),
            }]
        );
    }

    #[test]
    fn accepts_integral_floats_and_rejects_strings() {
        let profile = request(json!({
            "age": 30.0,
            "income": 0,
            "number_of_dependents": 0,
            "risk_tolerance": "high"
        }))
        .validate()
        .expect("integral float accepted");
        assert_eq!(profile.age, 30);

        let error = request(json!({
            "age": "30",
            "income": 50000,
            "number_of_dependents": 0,
            "risk_tolerance": "high"
        }))
        .validate()
        .expect_err("string age rejected");
        assert_eq!(error.fields[0].message, "must be an integer");
    }
}
