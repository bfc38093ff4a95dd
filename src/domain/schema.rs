//! Static feature schema.
//!
//! The schema declares which attributes are numeric vs. categorical, their
//! valid domains, and — crucially — their canonical order. The `ALL` arrays
//! below define the column order every other stage (encoder, scaler, model)
//! is fit against, so they are the single source of truth for layout.

use serde::{Deserialize, Serialize};

/// Numeric house attributes, in canonical column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericField {
    Area,
    Bedrooms,
    Bathrooms,
    Stories,
    Parking,
}

impl NumericField {
    pub const ALL: [NumericField; 5] = [
        NumericField::Area,
        NumericField::Bedrooms,
        NumericField::Bathrooms,
        NumericField::Stories,
        NumericField::Parking,
    ];

    /// CSV column / feature name.
    pub fn name(self) -> &'static str {
        match self {
            NumericField::Area => "area",
            NumericField::Bedrooms => "bedrooms",
            NumericField::Bathrooms => "bathrooms",
            NumericField::Stories => "stories",
            NumericField::Parking => "parking",
        }
    }
}

/// Categorical house attributes, in canonical column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoricalField {
    Mainroad,
    Guestroom,
    Basement,
    Hotwaterheating,
    Airconditioning,
    Prefarea,
    Furnishingstatus,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 7] = [
        CategoricalField::Mainroad,
        CategoricalField::Guestroom,
        CategoricalField::Basement,
        CategoricalField::Hotwaterheating,
        CategoricalField::Airconditioning,
        CategoricalField::Prefarea,
        CategoricalField::Furnishingstatus,
    ];

    /// CSV column / feature name.
    pub fn name(self) -> &'static str {
        match self {
            CategoricalField::Mainroad => "mainroad",
            CategoricalField::Guestroom => "guestroom",
            CategoricalField::Basement => "basement",
            CategoricalField::Hotwaterheating => "hotwaterheating",
            CategoricalField::Airconditioning => "airconditioning",
            CategoricalField::Prefarea => "prefarea",
            CategoricalField::Furnishingstatus => "furnishingstatus",
        }
    }

    /// Declared domain of the field, in lexicographic order.
    ///
    /// Values outside this set are rejected at record construction; the
    /// encoder additionally restricts transforms to the domain actually
    /// observed at fit time.
    pub fn declared_domain(self) -> &'static [&'static str] {
        match self {
            CategoricalField::Furnishingstatus => {
                &["furnished", "semi-furnished", "unfurnished"]
            }
            _ => &["no", "yes"],
        }
    }
}
