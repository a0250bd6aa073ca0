//! Shared fixtures for the integration tests.
//!
//! Each test binary uses its own subset of these helpers.
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use gbd_reader::models::{AgeBurdenRecord, MergedRecord};

/// Absolute difference comparison for values produced by float arithmetic
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// A merged row with representative values for the non-key columns
///
/// Tests override individual fields where a scenario pins a value.
pub fn merged_row(country: &str, code: &str, year: i64, mental_disorder: f64) -> MergedRecord {
    MergedRecord {
        country: country.to_owned(),
        code: code.to_owned(),
        year,
        mental_disorder,
        schizophrenia: 0.2,
        bipolar_disorder: 0.6,
        eating_disorders: 0.15,
        anxiety_disorders: 3.8,
        drug_use_disorders: 0.9,
        depression: 3.4,
        alcohol_use_disorders: 1.4,
        depression_male: 2.8,
        depression_female: 4.0,
        anxiety_male: 3.0,
        anxiety_female: 4.6,
        bipolar_male: 0.55,
        bipolar_female: 0.65,
        eating_male: 0.1,
        eating_female: 0.2,
        schizophrenia_male: 0.22,
        schizophrenia_female: 0.18,
    }
}

/// An age-burden row with a distinct value per (category, band) cell
pub fn age_row(country: &str, year: i64) -> AgeBurdenRecord {
    AgeBurdenRecord {
        country: country.to_owned(),
        year,
        anxiety_under_5: 1.0,
        anxiety_5_14: 2.0,
        anxiety_15_49: 3.0,
        anxiety_50_69: 4.0,
        anxiety_70_plus: 5.0,
        depression_under_5: 0.5,
        depression_5_14: 1.5,
        depression_15_49: 2.5,
        depression_50_69: 3.5,
        depression_70_plus: 4.5,
        schizophrenia_under_5: 0.1,
        schizophrenia_5_14: 0.2,
        schizophrenia_15_49: 0.3,
        schizophrenia_50_69: 0.4,
        schizophrenia_70_plus: 0.5,
        bipolar_5_14: 1.1,
        bipolar_15_49: 1.2,
        bipolar_50_69: 1.3,
        bipolar_70_plus: 1.4,
        eating_5_14: 2.1,
        eating_15_49: 2.2,
        eating_50_69: 2.3,
        eating_70_plus: 2.4,
    }
}

/// Write the five sample extracts into `dir`
///
/// The sample carries the Afghanistan/2000 gender scenario, three
/// countries for 2019 with mental_disorder values 10/20/30, and one
/// prevalence row ("Utopia") absent from the other tables so the inner
/// join drops it. The disorder-type file shuffles its column order to
/// show that columns are located by header, not position.
pub fn write_sample_data(dir: &Path) {
    fs::write(
        dir.join("mental_substance_disorder.csv"),
        "country,code,year,mental_disorder\n\
         Afghanistan,AFG,2000,12\n\
         Afghanistan,AFG,2019,10\n\
         Albania,ALB,2019,20\n\
         Algeria,DZA,2019,30\n\
         Utopia,UTO,2000,5\n",
    )
    .expect("write prevalence fixture");

    fs::write(
        dir.join("disorder_type.csv"),
        "year,code,country,depression,schizophrenia,bipolar_disorder,eating_disorders,anxiety_disorders,drug_use_disorders,alcohol_use_disorders\n\
         2000,AFG,Afghanistan,4.5,0.2,0.7,0.1,4.8,1.9,0.6\n\
         2019,AFG,Afghanistan,3.5,0.3,0.8,0.2,4.0,1.0,1.5\n\
         2019,ALB,Albania,2.9,0.25,0.6,0.3,3.2,0.8,1.1\n\
         2019,DZA,Algeria,3.8,0.28,0.9,0.25,4.4,1.2,0.9\n",
    )
    .expect("write disorder-type fixture");

    fs::write(
        dir.join("mentalhealth_perGender.csv"),
        "country,code,year,depression_male,depression_female,anxiety_male,anxiety_female,bipolar_male,bipolar_female,eating_male,eating_female,schizophrenia_male,schizophrenia_female\n\
         Afghanistan,AFG,2000,3.0,6.0,4.1,5.5,0.65,0.75,0.05,0.15,0.22,0.18\n\
         Afghanistan,AFG,2019,3.1,3.9,3.6,4.4,0.75,0.85,0.1,0.3,0.32,0.28\n\
         Albania,ALB,2019,2.5,3.3,2.8,3.6,0.55,0.65,0.2,0.4,0.27,0.23\n\
         Algeria,DZA,2019,3.4,4.2,4.0,4.8,0.85,0.95,0.15,0.35,0.3,0.26\n",
    )
    .expect("write gender fixture");

    fs::write(
        dir.join("Dalys.csv"),
        "country,code,year,dalys\n\
         Afghanistan,AFG,2000,4.7\n\
         Afghanistan,AFG,2019,5.9\n\
         Albania,ALB,2019,4.1\n\
         Algeria,DZA,2019,6.3\n",
    )
    .expect("write dalys fixture");

    fs::write(
        dir.join("Age-mental.csv"),
        "country,year,Anxiety- age: <5,Anxiety- age: 5-14,Anxiety- age: 15-49,Anxiety- age: 50-69,Anxiety- age: 70+,depression- age: <5,depression- age: 5-14,depression- age: 15-49,depression- age: 50-69,depression- age: 70+,Schiz- age: <5,Schiz- age: 5-14,Schiz- age: 15-49,Schiz- age: 50-69,Schiz- age: 70+,bipolar- age: 5-14,bipolar- age: 15-49,bipolar- age: 50-69,bipolar- age: 70+,eating- age: 5-14,eating- age: 15-49,eating- age: 50-69,eating- age: 70+\n\
         Afghanistan,2000,1.0,2.0,3.0,4.0,5.0,0.5,1.5,2.5,3.5,4.5,0.1,0.2,0.3,0.4,0.5,1.1,1.2,1.3,1.4,2.1,2.2,2.3,2.4\n\
         Afghanistan,2019,1.5,2.5,3.5,4.5,5.5,0.6,1.6,2.6,3.6,4.6,0.15,0.25,0.35,0.45,0.55,1.15,1.25,1.35,1.45,2.15,2.25,2.35,2.45\n\
         Albania,2019,0.8,1.8,2.8,3.8,4.8,0.4,1.4,2.4,3.4,4.4,0.05,0.15,0.25,0.35,0.45,1.05,1.15,1.25,1.35,2.05,2.15,2.25,2.35\n",
    )
    .expect("write age fixture");
}
