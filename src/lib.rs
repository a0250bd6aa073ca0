//! A Rust library for reading the Global Burden of Disease mental-health
//! extracts with schema validation, joining, and filtering.
//!
//! Five CSV extracts load once into immutable in-memory tables; the
//! query layer then derives the row subsets and aggregates each
//! dashboard chart renders.

pub mod assets;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod join;
pub mod loader;
pub mod models;
pub mod query;
pub mod reader;
pub mod schema;
pub mod view;

// Re-export the most common types for easier use
// Core types
pub use config::GbdReaderConfig;
pub use error::{DataLoadError, Result};
pub use loader::{DashboardTables, load};

// Arrow types
pub use arrow::datatypes::Schema as ArrowSchema;
pub use arrow::record_batch::RecordBatch;

// Domain model
pub use models::{AgeBand, Disorder, DisorderCategory, MAX_YEAR, MIN_YEAR};

// Filtering and aggregation
pub use filter::{ALL_COUNTRIES, CountrySelection, filter_by_year_and_country};
pub use query::{
    GenderSplit, gender_split, mean_overall_prevalence, mean_prevalence, rank_disorders,
    sum_age_bands,
};

// Chart-ready derivations
pub use view::{
    AgeBreakdown, ChoroplethPoint, age_breakdown, country_options, dalys_choropleth,
    dalys_years, disorder_ranking, gender_disparity, prevalence_choropleth,
};

// Decorative assets
pub use assets::{AnimationSource, HttpAnimationSource};
