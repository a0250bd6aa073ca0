//! Aggregations over filtered row subsets.
//!
//! Every function is total over empty input: the empty mean is `None`
//! and the empty sum is zero, so a filter combination with no rows never
//! aborts a chart.

use std::cmp::Ordering;

use itertools::Itertools;

use crate::models::{AgeBand, AgeBurdenRecord, Disorder, DisorderCategory, MergedRecord};

/// Per-gender prevalence for one disorder category, in (male, female) order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenderSplit {
    /// Male prevalence
    pub male: f64,
    /// Female prevalence
    pub female: f64,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (count, sum) = values.fold((0_usize, 0.0), |(count, sum), value| {
        (count + 1, sum + value)
    });
    (count > 0).then(|| sum / count as f64)
}

/// Arithmetic mean of one disorder series over the subset
///
/// `None` when the subset is empty: the mean of nothing is undefined,
/// not zero, and callers render the placeholder state instead.
#[must_use]
pub fn mean_prevalence(subset: &[&MergedRecord], disorder: Disorder) -> Option<f64> {
    mean(subset.iter().map(|row| row.disorder(disorder)))
}

/// Arithmetic mean of the any-disorder share over the subset
///
/// Same empty-subset contract as [`mean_prevalence`], for the combined
/// mental-or-substance-disorder column.
#[must_use]
pub fn mean_overall_prevalence(subset: &[&MergedRecord]) -> Option<f64> {
    mean(subset.iter().map(|row| row.mental_disorder))
}

/// Male and female prevalence for one category over the subset
///
/// With several matching rows (the all-countries selection) each gender
/// is averaged across the rows; a single row reproduces its values
/// exactly. Empty subset yields `None`.
#[must_use]
pub fn gender_split(subset: &[&MergedRecord], category: DisorderCategory) -> Option<GenderSplit> {
    let male = mean(subset.iter().map(|row| row.male(category)))?;
    let female = mean(subset.iter().map(|row| row.female(category)))?;
    Some(GenderSplit { male, female })
}

/// Sort labeled means ascending by value
///
/// The sort is stable: equal values keep their input order.
#[must_use]
pub fn rank_disorders(means: Vec<(Disorder, f64)>) -> Vec<(Disorder, f64)> {
    means
        .into_iter()
        .sorted_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
        .collect()
}

/// Sum each age band of one category over the subset
///
/// Bands follow the category's band order; every band sums to `0.0`
/// over an empty subset.
#[must_use]
pub fn sum_age_bands(
    subset: &[&AgeBurdenRecord],
    category: DisorderCategory,
) -> Vec<(AgeBand, f64)> {
    category
        .age_bands()
        .iter()
        .map(|&band| {
            let total = subset
                .iter()
                .filter_map(|row| row.band(category, band))
                .sum();
            (band, total)
        })
        .collect()
}
