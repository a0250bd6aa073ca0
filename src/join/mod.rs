//! Inner join of the prevalence extracts on (country, code, year).

use log::debug;
use rustc_hash::FxHashMap;

use crate::models::{DisorderTypeRecord, GenderRecord, MergedRecord, PrevalenceRecord};

/// Join key shared by the prevalence, disorder-type, and gender tables
type JoinKey = (String, String, i64);

fn key_of(country: &str, code: &str, year: i64) -> JoinKey {
    (country.to_owned(), code.to_owned(), year)
}

/// Inner-join the three source tables into the merged dashboard table
///
/// All three keys must match exactly; rows present in only some of the
/// sources are dropped, so callers must not assume row-count
/// preservation. Output order follows the prevalence table.
#[must_use]
pub fn merge_tables(
    prevalence: &[PrevalenceRecord],
    types: &[DisorderTypeRecord],
    gender: &[GenderRecord],
) -> Vec<MergedRecord> {
    let mut by_type: FxHashMap<JoinKey, &DisorderTypeRecord> = FxHashMap::default();
    for row in types {
        by_type.insert(key_of(&row.country, &row.code, row.year), row);
    }

    let mut by_gender: FxHashMap<JoinKey, &GenderRecord> = FxHashMap::default();
    for row in gender {
        by_gender.insert(key_of(&row.country, &row.code, row.year), row);
    }

    let mut merged = Vec::with_capacity(prevalence.len());
    for base in prevalence {
        let key = key_of(&base.country, &base.code, base.year);
        let (Some(types_row), Some(gender_row)) = (by_type.get(&key), by_gender.get(&key))
        else {
            continue;
        };

        merged.push(MergedRecord {
            country: base.country.clone(),
            code: base.code.clone(),
            year: base.year,
            mental_disorder: base.mental_disorder,
            schizophrenia: types_row.schizophrenia,
            bipolar_disorder: types_row.bipolar_disorder,
            eating_disorders: types_row.eating_disorders,
            anxiety_disorders: types_row.anxiety_disorders,
            drug_use_disorders: types_row.drug_use_disorders,
            depression: types_row.depression,
            alcohol_use_disorders: types_row.alcohol_use_disorders,
            depression_male: gender_row.depression_male,
            depression_female: gender_row.depression_female,
            anxiety_male: gender_row.anxiety_male,
            anxiety_female: gender_row.anxiety_female,
            bipolar_male: gender_row.bipolar_male,
            bipolar_female: gender_row.bipolar_female,
            eating_male: gender_row.eating_male,
            eating_female: gender_row.eating_female,
            schizophrenia_male: gender_row.schizophrenia_male,
            schizophrenia_female: gender_row.schizophrenia_female,
        });
    }

    let dropped = prevalence.len() - merged.len();
    if dropped > 0 {
        debug!(
            "inner join dropped {dropped} of {} prevalence rows",
            prevalence.len()
        );
    }

    merged
}
