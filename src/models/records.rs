//! Typed rows for the five extracts and the merged dashboard table

use arrow::record_batch::RecordBatch;
use serde::{Deserialize, Serialize};

use super::disorder::{AgeBand, Disorder, DisorderCategory};
use crate::error::Result;

/// One row of the base prevalence extract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrevalenceRecord {
    /// Country display name
    pub country: String,
    /// ISO alpha-3 country code
    pub code: String,
    /// Calendar year
    pub year: i64,
    /// Share of population with any mental or substance-use disorder
    pub mental_disorder: f64,
}

impl PrevalenceRecord {
    /// Deserialize a batch of prevalence rows
    pub fn from_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        Ok(serde_arrow::from_record_batch(batch)?)
    }
}

/// One row of the per-disorder prevalence extract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisorderTypeRecord {
    /// Country display name
    pub country: String,
    /// ISO alpha-3 country code
    pub code: String,
    /// Calendar year
    pub year: i64,
    /// Schizophrenia prevalence
    pub schizophrenia: f64,
    /// Bipolar disorder prevalence
    pub bipolar_disorder: f64,
    /// Eating disorder prevalence
    pub eating_disorders: f64,
    /// Anxiety disorder prevalence
    pub anxiety_disorders: f64,
    /// Drug use disorder prevalence
    pub drug_use_disorders: f64,
    /// Depression prevalence
    pub depression: f64,
    /// Alcohol use disorder prevalence
    pub alcohol_use_disorders: f64,
}

impl DisorderTypeRecord {
    /// Deserialize a batch of per-disorder rows
    pub fn from_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        Ok(serde_arrow::from_record_batch(batch)?)
    }

    /// Prevalence value of one disorder series
    #[must_use]
    pub fn value(&self, disorder: Disorder) -> f64 {
        match disorder {
            Disorder::Schizophrenia => self.schizophrenia,
            Disorder::BipolarDisorder => self.bipolar_disorder,
            Disorder::EatingDisorders => self.eating_disorders,
            Disorder::AnxietyDisorders => self.anxiety_disorders,
            Disorder::DrugUseDisorders => self.drug_use_disorders,
            Disorder::Depression => self.depression,
            Disorder::AlcoholUseDisorders => self.alcohol_use_disorders,
        }
    }
}

/// One row of the per-gender prevalence extract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderRecord {
    /// Country display name
    pub country: String,
    /// ISO alpha-3 country code
    pub code: String,
    /// Calendar year
    pub year: i64,
    pub depression_male: f64,
    pub depression_female: f64,
    pub anxiety_male: f64,
    pub anxiety_female: f64,
    pub bipolar_male: f64,
    pub bipolar_female: f64,
    pub eating_male: f64,
    pub eating_female: f64,
    pub schizophrenia_male: f64,
    pub schizophrenia_female: f64,
}

impl GenderRecord {
    /// Deserialize a batch of per-gender rows
    pub fn from_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        Ok(serde_arrow::from_record_batch(batch)?)
    }
}

/// One row of the disease burden extract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DalysRecord {
    /// Country display name
    pub country: String,
    /// ISO alpha-3 country code
    pub code: String,
    /// Calendar year
    pub year: i64,
    /// Share of total disease burden attributable to mental and
    /// substance-use disorders
    pub dalys: f64,
}

impl DalysRecord {
    /// Deserialize a batch of burden rows
    pub fn from_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        Ok(serde_arrow::from_record_batch(batch)?)
    }
}

/// One row of the per-age-band burden extract
///
/// Field names follow the extract's original column headers; the eating
/// and bipolar series have no under-5 band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBurdenRecord {
    /// Country display name
    pub country: String,
    /// Calendar year
    pub year: i64,
    #[serde(rename = "Anxiety- age: <5")]
    pub anxiety_under_5: f64,
    #[serde(rename = "Anxiety- age: 5-14")]
    pub anxiety_5_14: f64,
    #[serde(rename = "Anxiety- age: 15-49")]
    pub anxiety_15_49: f64,
    #[serde(rename = "Anxiety- age: 50-69")]
    pub anxiety_50_69: f64,
    #[serde(rename = "Anxiety- age: 70+")]
    pub anxiety_70_plus: f64,
    #[serde(rename = "depression- age: <5")]
    pub depression_under_5: f64,
    #[serde(rename = "depression- age: 5-14")]
    pub depression_5_14: f64,
    #[serde(rename = "depression- age: 15-49")]
    pub depression_15_49: f64,
    #[serde(rename = "depression- age: 50-69")]
    pub depression_50_69: f64,
    #[serde(rename = "depression- age: 70+")]
    pub depression_70_plus: f64,
    #[serde(rename = "Schiz- age: <5")]
    pub schizophrenia_under_5: f64,
    #[serde(rename = "Schiz- age: 5-14")]
    pub schizophrenia_5_14: f64,
    #[serde(rename = "Schiz- age: 15-49")]
    pub schizophrenia_15_49: f64,
    #[serde(rename = "Schiz- age: 50-69")]
    pub schizophrenia_50_69: f64,
    #[serde(rename = "Schiz- age: 70+")]
    pub schizophrenia_70_plus: f64,
    #[serde(rename = "bipolar- age: 5-14")]
    pub bipolar_5_14: f64,
    #[serde(rename = "bipolar- age: 15-49")]
    pub bipolar_15_49: f64,
    #[serde(rename = "bipolar- age: 50-69")]
    pub bipolar_50_69: f64,
    #[serde(rename = "bipolar- age: 70+")]
    pub bipolar_70_plus: f64,
    #[serde(rename = "eating- age: 5-14")]
    pub eating_5_14: f64,
    #[serde(rename = "eating- age: 15-49")]
    pub eating_15_49: f64,
    #[serde(rename = "eating- age: 50-69")]
    pub eating_50_69: f64,
    #[serde(rename = "eating- age: 70+")]
    pub eating_70_plus: f64,
}

impl AgeBurdenRecord {
    /// Deserialize a batch of per-age-band rows
    pub fn from_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        Ok(serde_arrow::from_record_batch(batch)?)
    }

    /// DALY value for one (category, band) cell
    ///
    /// `None` for the under-5 band of the eating and bipolar series,
    /// which the extract does not carry.
    #[must_use]
    pub fn band(&self, category: DisorderCategory, band: AgeBand) -> Option<f64> {
        use AgeBand::{Age5To14, Age15To49, Age50To69, Age70Plus, Under5};
        use DisorderCategory::{Anxiety, Bipolar, Depression, Eating, Schizophrenia};

        match (category, band) {
            (Anxiety, Under5) => Some(self.anxiety_under_5),
            (Anxiety, Age5To14) => Some(self.anxiety_5_14),
            (Anxiety, Age15To49) => Some(self.anxiety_15_49),
            (Anxiety, Age50To69) => Some(self.anxiety_50_69),
            (Anxiety, Age70Plus) => Some(self.anxiety_70_plus),
            (Depression, Under5) => Some(self.depression_under_5),
            (Depression, Age5To14) => Some(self.depression_5_14),
            (Depression, Age15To49) => Some(self.depression_15_49),
            (Depression, Age50To69) => Some(self.depression_50_69),
            (Depression, Age70Plus) => Some(self.depression_70_plus),
            (Schizophrenia, Under5) => Some(self.schizophrenia_under_5),
            (Schizophrenia, Age5To14) => Some(self.schizophrenia_5_14),
            (Schizophrenia, Age15To49) => Some(self.schizophrenia_15_49),
            (Schizophrenia, Age50To69) => Some(self.schizophrenia_50_69),
            (Schizophrenia, Age70Plus) => Some(self.schizophrenia_70_plus),
            (Bipolar, Age5To14) => Some(self.bipolar_5_14),
            (Bipolar, Age15To49) => Some(self.bipolar_15_49),
            (Bipolar, Age50To69) => Some(self.bipolar_50_69),
            (Bipolar, Age70Plus) => Some(self.bipolar_70_plus),
            (Eating, Age5To14) => Some(self.eating_5_14),
            (Eating, Age15To49) => Some(self.eating_15_49),
            (Eating, Age50To69) => Some(self.eating_50_69),
            (Eating, Age70Plus) => Some(self.eating_70_plus),
            (Bipolar | Eating, Under5) => None,
        }
    }
}

/// One row of the merged dashboard table
///
/// Inner join of the prevalence, disorder-type, and per-gender extracts
/// on (country, code, year).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    /// Country display name
    pub country: String,
    /// ISO alpha-3 country code
    pub code: String,
    /// Calendar year
    pub year: i64,
    /// Share of population with any mental or substance-use disorder
    pub mental_disorder: f64,
    pub schizophrenia: f64,
    pub bipolar_disorder: f64,
    pub eating_disorders: f64,
    pub anxiety_disorders: f64,
    pub drug_use_disorders: f64,
    pub depression: f64,
    pub alcohol_use_disorders: f64,
    pub depression_male: f64,
    pub depression_female: f64,
    pub anxiety_male: f64,
    pub anxiety_female: f64,
    pub bipolar_male: f64,
    pub bipolar_female: f64,
    pub eating_male: f64,
    pub eating_female: f64,
    pub schizophrenia_male: f64,
    pub schizophrenia_female: f64,
}

impl MergedRecord {
    /// Prevalence value of one disorder series
    #[must_use]
    pub fn disorder(&self, disorder: Disorder) -> f64 {
        match disorder {
            Disorder::Schizophrenia => self.schizophrenia,
            Disorder::BipolarDisorder => self.bipolar_disorder,
            Disorder::EatingDisorders => self.eating_disorders,
            Disorder::AnxietyDisorders => self.anxiety_disorders,
            Disorder::DrugUseDisorders => self.drug_use_disorders,
            Disorder::Depression => self.depression,
            Disorder::AlcoholUseDisorders => self.alcohol_use_disorders,
        }
    }

    /// Male prevalence of one gender-split category
    #[must_use]
    pub fn male(&self, category: DisorderCategory) -> f64 {
        match category {
            DisorderCategory::Depression => self.depression_male,
            DisorderCategory::Anxiety => self.anxiety_male,
            DisorderCategory::Bipolar => self.bipolar_male,
            DisorderCategory::Eating => self.eating_male,
            DisorderCategory::Schizophrenia => self.schizophrenia_male,
        }
    }

    /// Female prevalence of one gender-split category
    #[must_use]
    pub fn female(&self, category: DisorderCategory) -> f64 {
        match category {
            DisorderCategory::Depression => self.depression_female,
            DisorderCategory::Anxiety => self.anxiety_female,
            DisorderCategory::Bipolar => self.bipolar_female,
            DisorderCategory::Eating => self.eating_female,
            DisorderCategory::Schizophrenia => self.schizophrenia_female,
        }
    }
}
