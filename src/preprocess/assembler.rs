//! Feature assembly: raw record → unscaled feature vector.
//!
//! The assembler owns no state. It concatenates, in fixed order, the numeric
//! fields (schema order) followed by the encoded indicator columns (scheme
//! order). This ordering is load-bearing: the scaler statistics and the
//! regressor coefficients were both fit against it, so any permutation
//! silently corrupts every downstream prediction.

use crate::domain::{NumericField, RawRecord};
use crate::error::PipelineError;
use crate::preprocess::encoder::EncodingScheme;

/// Build the unscaled feature vector for one record.
pub fn assemble(record: &RawRecord, scheme: &EncodingScheme) -> Result<Vec<f64>, PipelineError> {
    let mut out = Vec::with_capacity(NumericField::ALL.len() + scheme.encoded_len());
    for field in NumericField::ALL {
        out.push(record.numeric(field));
    }
    out.extend(scheme.encode(record)?);
    Ok(out)
}

/// Build the unscaled feature matrix for many records.
pub fn assemble_matrix(
    records: &[RawRecord],
    scheme: &EncodingScheme,
) -> Result<Vec<Vec<f64>>, PipelineError> {
    records.iter().map(|r| assemble(r, scheme)).collect()
}

/// The explicit, named column-order artifact of the pipeline.
///
/// This is persisted inside the bundle and cross-checked at load time, so
/// the training-time and inference-time layouts can never drift apart
/// unnoticed.
pub fn column_order(scheme: &EncodingScheme) -> Vec<String> {
    NumericField::ALL
        .iter()
        .map(|f| f.name().to_string())
        .chain(scheme.encoded_columns())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FurnishingStatus, YesNo};

    fn full_domain_rows() -> Vec<RawRecord> {
        // Every categorical field sees both/all of its values, so the scheme
        // has the full 8-indicator layout (6 binary + 2 furnishing).
        let base = RawRecord {
            area: 1000.0,
            bedrooms: 2,
            bathrooms: 1,
            stories: 1,
            parking: 0,
            mainroad: YesNo::No,
            guestroom: YesNo::No,
            basement: YesNo::No,
            hotwaterheating: YesNo::No,
            airconditioning: YesNo::No,
            prefarea: YesNo::No,
            furnishingstatus: FurnishingStatus::Furnished,
        };
        let mut flipped = base.clone();
        flipped.mainroad = YesNo::Yes;
        flipped.guestroom = YesNo::Yes;
        flipped.basement = YesNo::Yes;
        flipped.hotwaterheating = YesNo::Yes;
        flipped.airconditioning = YesNo::Yes;
        flipped.prefarea = YesNo::Yes;
        flipped.furnishingstatus = FurnishingStatus::SemiFurnished;
        let mut third = base.clone();
        third.furnishingstatus = FurnishingStatus::Unfurnished;
        vec![base, flipped, third]
    }

    #[test]
    fn feature_count_is_numerics_plus_domain_sizes_minus_one() {
        let scheme = EncodingScheme::fit(&full_domain_rows()).unwrap();
        // 5 numerics + 6 * (2 - 1) + (3 - 1) = 13.
        assert_eq!(column_order(&scheme).len(), 13);
    }

    #[test]
    fn numerics_come_first_then_indicators_in_fit_order() {
        let scheme = EncodingScheme::fit(&full_domain_rows()).unwrap();

        let record = RawRecord {
            area: 3000.0,
            bedrooms: 3,
            bathrooms: 2,
            stories: 2,
            parking: 1,
            mainroad: YesNo::No,
            guestroom: YesNo::No,
            basement: YesNo::No,
            hotwaterheating: YesNo::No,
            airconditioning: YesNo::No,
            prefarea: YesNo::No,
            furnishingstatus: FurnishingStatus::SemiFurnished,
        };
        let vector = assemble(&record, &scheme).unwrap();

        assert_eq!(&vector[..5], &[3000.0, 3.0, 2.0, 2.0, 1.0]);
        // All yes/no fields are "no" (the reference), so their indicators are 0.
        assert_eq!(&vector[5..11], &[0.0; 6]);
        // Exactly one 1 among the furnishingstatus indicators
        // ("furnished" is the dropped reference, "semi-furnished" is kept).
        assert_eq!(&vector[11..], &[1.0, 0.0]);

        let columns = column_order(&scheme);
        assert_eq!(columns[0], "area");
        assert_eq!(columns[5], "mainroad_yes");
        assert_eq!(columns[11], "furnishingstatus_semi-furnished");
    }

    #[test]
    fn assemble_matrix_preserves_row_order() {
        let rows = full_domain_rows();
        let scheme = EncodingScheme::fit(&rows).unwrap();
        let matrix = assemble_matrix(&rows, &scheme).unwrap();
        assert_eq!(matrix.len(), rows.len());
        assert_eq!(matrix[0], assemble(&rows[0], &scheme).unwrap());
    }
}
