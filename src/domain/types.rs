//! Validated house records and candidate-model identifiers.
//!
//! `RawRecord` is the strongly-typed replacement for a loosely-typed tabular
//! row: every field is validated at construction, so downstream stages never
//! see an out-of-domain value they did not opt into. `RawInput` is the
//! all-strings form every front end (CSV ingest, CLI prompts, a desktop form)
//! funnels through, making `RawRecord::from_input` the single validation
//! boundary.

use serde::{Deserialize, Serialize};

use crate::domain::schema::CategoricalField;
use crate::domain::schema::NumericField;
use crate::error::PipelineError;

/// A binary yes/no attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Canonical lowercase label (the value the encoder sees).
    pub fn label(self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }

    pub fn parse(field: &'static str, value: &str) -> Result<Self, PipelineError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(YesNo::Yes),
            "no" => Ok(YesNo::No),
            other => Err(PipelineError::SchemaViolation {
                field,
                value: other.to_string(),
                expected: "yes, no".to_string(),
            }),
        }
    }
}

/// Furnishing status of the house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FurnishingStatus {
    Furnished,
    SemiFurnished,
    Unfurnished,
}

impl FurnishingStatus {
    /// Canonical lowercase label (the value the encoder sees).
    pub fn label(self) -> &'static str {
        match self {
            FurnishingStatus::Furnished => "furnished",
            FurnishingStatus::SemiFurnished => "semi-furnished",
            FurnishingStatus::Unfurnished => "unfurnished",
        }
    }

    pub fn parse(field: &'static str, value: &str) -> Result<Self, PipelineError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "furnished" => Ok(FurnishingStatus::Furnished),
            "semi-furnished" => Ok(FurnishingStatus::SemiFurnished),
            "unfurnished" => Ok(FurnishingStatus::Unfurnished),
            other => Err(PipelineError::SchemaViolation {
                field,
                value: other.to_string(),
                expected: "furnished, semi-furnished, unfurnished".to_string(),
            }),
        }
    }
}

/// One house's raw attribute values, validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub area: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub stories: u32,
    pub parking: u32,
    pub mainroad: YesNo,
    pub guestroom: YesNo,
    pub basement: YesNo,
    pub hotwaterheating: YesNo,
    pub airconditioning: YesNo,
    pub prefarea: YesNo,
    pub furnishingstatus: FurnishingStatus,
}

/// One house's attributes as text, exactly as a form or prompt supplies them.
#[derive(Debug, Clone, Default)]
pub struct RawInput {
    pub area: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub stories: String,
    pub parking: String,
    pub mainroad: String,
    pub guestroom: String,
    pub basement: String,
    pub hotwaterheating: String,
    pub airconditioning: String,
    pub prefarea: String,
    pub furnishingstatus: String,
}

impl RawRecord {
    /// Parse and validate an all-strings input into a record.
    ///
    /// This is the shared boundary for every front end: numeric text that
    /// does not parse is a `Parse` error, categorical text outside its
    /// declared domain is a `SchemaViolation`. Neither is ever coerced.
    pub fn from_input(input: &RawInput) -> Result<Self, PipelineError> {
        Ok(RawRecord {
            area: parse_area(&input.area)?,
            bedrooms: parse_count("bedrooms", &input.bedrooms)?,
            bathrooms: parse_count("bathrooms", &input.bathrooms)?,
            stories: parse_count("stories", &input.stories)?,
            parking: parse_count("parking", &input.parking)?,
            mainroad: YesNo::parse("mainroad", &input.mainroad)?,
            guestroom: YesNo::parse("guestroom", &input.guestroom)?,
            basement: YesNo::parse("basement", &input.basement)?,
            hotwaterheating: YesNo::parse("hotwaterheating", &input.hotwaterheating)?,
            airconditioning: YesNo::parse("airconditioning", &input.airconditioning)?,
            prefarea: YesNo::parse("prefarea", &input.prefarea)?,
            furnishingstatus: FurnishingStatus::parse(
                "furnishingstatus",
                &input.furnishingstatus,
            )?,
        })
    }

    /// Numeric value of a field, in canonical units.
    pub fn numeric(&self, field: NumericField) -> f64 {
        match field {
            NumericField::Area => self.area,
            NumericField::Bedrooms => f64::from(self.bedrooms),
            NumericField::Bathrooms => f64::from(self.bathrooms),
            NumericField::Stories => f64::from(self.stories),
            NumericField::Parking => f64::from(self.parking),
        }
    }

    /// Canonical lowercase label of a categorical field.
    pub fn categorical(&self, field: CategoricalField) -> &'static str {
        match field {
            CategoricalField::Mainroad => self.mainroad.label(),
            CategoricalField::Guestroom => self.guestroom.label(),
            CategoricalField::Basement => self.basement.label(),
            CategoricalField::Hotwaterheating => self.hotwaterheating.label(),
            CategoricalField::Airconditioning => self.airconditioning.label(),
            CategoricalField::Prefarea => self.prefarea.label(),
            CategoricalField::Furnishingstatus => self.furnishingstatus.label(),
        }
    }
}

/// Parse a positive, finite floor area.
pub fn parse_area(value: &str) -> Result<f64, PipelineError> {
    let v: f64 = value.trim().parse().map_err(|_| PipelineError::Parse {
        field: "area",
        value: value.trim().to_string(),
    })?;
    validate_area(v)
}

/// Validate an already-numeric floor area.
pub fn validate_area(v: f64) -> Result<f64, PipelineError> {
    if !v.is_finite() || v <= 0.0 {
        return Err(PipelineError::Parse {
            field: "area",
            value: format!("{v}"),
        });
    }
    Ok(v)
}

/// Parse a non-negative integer count (bedrooms, stories, ...).
pub fn parse_count(field: &'static str, value: &str) -> Result<u32, PipelineError> {
    value.trim().parse().map_err(|_| PipelineError::Parse {
        field,
        value: value.trim().to_string(),
    })
}

/// Candidate regressors, in fixed enumeration order.
///
/// This order matters: `select_best` breaks exact R² ties toward the
/// earlier candidate, so selection is deterministic and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    LinearRegression,
    RandomForest,
    GradientBoosting,
}

impl CandidateKind {
    pub const ALL: [CandidateKind; 3] = [
        CandidateKind::LinearRegression,
        CandidateKind::RandomForest,
        CandidateKind::GradientBoosting,
    ];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            CandidateKind::LinearRegression => "Linear Regression",
            CandidateKind::RandomForest => "Random Forest",
            CandidateKind::GradientBoosting => "Gradient Boosting",
        }
    }
}

/// Held-out evaluation of one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub kind: CandidateKind,
    pub mse: f64,
    pub r2: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RawInput {
        RawInput {
            area: "3000".to_string(),
            bedrooms: "3".to_string(),
            bathrooms: "2".to_string(),
            stories: "2".to_string(),
            parking: "1".to_string(),
            mainroad: "yes".to_string(),
            guestroom: "no".to_string(),
            basement: "no".to_string(),
            hotwaterheating: "no".to_string(),
            airconditioning: "yes".to_string(),
            prefarea: "no".to_string(),
            furnishingstatus: "semi-furnished".to_string(),
        }
    }

    #[test]
    fn from_input_accepts_valid_record() {
        let record = RawRecord::from_input(&valid_input()).unwrap();
        assert_eq!(record.bedrooms, 3);
        assert_eq!(record.mainroad, YesNo::Yes);
        assert_eq!(record.furnishingstatus, FurnishingStatus::SemiFurnished);
    }

    #[test]
    fn categorical_values_are_lowercased_before_matching() {
        let mut input = valid_input();
        input.mainroad = "Yes".to_string();
        input.furnishingstatus = "SEMI-FURNISHED".to_string();
        let record = RawRecord::from_input(&input).unwrap();
        assert_eq!(record.mainroad, YesNo::Yes);
    }

    #[test]
    fn out_of_domain_categorical_is_schema_violation() {
        let mut input = valid_input();
        input.mainroad = "maybe".to_string();
        let err = RawRecord::from_input(&input).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::SchemaViolation {
                field: "mainroad",
                ..
            }
        ));
    }

    #[test]
    fn bad_numeric_text_is_parse_error() {
        let mut input = valid_input();
        input.bedrooms = "three".to_string();
        let err = RawRecord::from_input(&input).unwrap_err();
        assert!(matches!(err, PipelineError::Parse { field: "bedrooms", .. }));
    }

    #[test]
    fn non_positive_area_is_rejected() {
        let mut input = valid_input();
        input.area = "-10".to_string();
        assert!(RawRecord::from_input(&input).is_err());
    }
}
