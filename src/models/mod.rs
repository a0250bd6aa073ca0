//! Typed rows and domain enums for the dashboard tables
//!
//! Every table row is a plain `serde`-derived struct deserialized from
//! the dataset record batches. The enums name the disorder series the
//! charts are built from, so queries never address columns by string.

pub mod disorder;
pub mod records;

pub use disorder::{AgeBand, Disorder, DisorderCategory};
pub use records::{
    AgeBurdenRecord, DalysRecord, DisorderTypeRecord, GenderRecord, MergedRecord,
    PrevalenceRecord,
};

/// First year covered by the extracts
pub const MIN_YEAR: i64 = 1990;
/// Last year covered by the extracts
pub const MAX_YEAR: i64 = 2019;
