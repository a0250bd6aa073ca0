//! Canonical Arrow schemas for the five dashboard extracts

mod age;
mod dalys;
mod disorder_type;
mod gender;
mod prevalence;

pub use age::age_schema;
pub use dalys::dalys_schema;
pub use disorder_type::disorder_type_schema;
pub use gender::gender_schema;
pub use prevalence::prevalence_schema;
