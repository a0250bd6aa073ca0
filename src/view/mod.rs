//! Chart-ready data for the dashboard figures.
//!
//! One derivation per figure: the overview choropleth, the ranked
//! disorder bars, the gender disparity bars, the animated burden map,
//! and the per-category age pies. Each derivation is a pure function of
//! the loaded tables and the selected filters; rendering concerns
//! (colors, layout, projections) stay with the presentation layer.

use itertools::Itertools;

use crate::filter::{
    ALL_COUNTRIES, CountrySelection, CountryYearKeyed, filter_by_year_and_country,
};
use crate::models::{
    AgeBand, AgeBurdenRecord, DalysRecord, Disorder, DisorderCategory, MergedRecord,
};
use crate::query::{GenderSplit, gender_split, mean_prevalence, rank_disorders, sum_age_bands};

/// One (country, value) entry of a choropleth series
#[derive(Debug, Clone, PartialEq)]
pub struct ChoroplethPoint {
    /// ISO alpha-3 country code locating the value on the map
    pub code: String,
    /// Country display name for hover text
    pub country: String,
    /// Value coloring the country
    pub value: f64,
}

/// Age-band slices for one category's pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct AgeBreakdown {
    /// Category the slices belong to
    pub category: DisorderCategory,
    /// Per-band DALY sums, youngest band first
    pub slices: Vec<(AgeBand, f64)>,
}

/// Share of population with any mental disorder, one point per matching row
#[must_use]
pub fn prevalence_choropleth(
    merged: &[MergedRecord],
    year: i64,
    country: &CountrySelection,
) -> Vec<ChoroplethPoint> {
    filter_by_year_and_country(merged, year, country)
        .into_iter()
        .map(|row| ChoroplethPoint {
            code: row.code.clone(),
            country: row.country.clone(),
            value: row.mental_disorder,
        })
        .collect()
}

/// Mean prevalence per disorder, ranked ascending for the overview bars
///
/// Disorders with no matching rows are omitted rather than charted as
/// zero.
#[must_use]
pub fn disorder_ranking(
    merged: &[MergedRecord],
    year: i64,
    country: &CountrySelection,
) -> Vec<(Disorder, f64)> {
    let subset = filter_by_year_and_country(merged, year, country);
    let means = Disorder::ALL
        .iter()
        .filter_map(|&disorder| {
            mean_prevalence(&subset, disorder).map(|value| (disorder, value))
        })
        .collect();
    rank_disorders(means)
}

/// Male and female prevalence for the gender disparity bars
#[must_use]
pub fn gender_disparity(
    merged: &[MergedRecord],
    year: i64,
    country: &CountrySelection,
    category: DisorderCategory,
) -> Option<GenderSplit> {
    gender_split(
        &filter_by_year_and_country(merged, year, country),
        category,
    )
}

/// DALY share by country for one frame of the animated burden map
#[must_use]
pub fn dalys_choropleth(dalys: &[DalysRecord], year: i64) -> Vec<ChoroplethPoint> {
    dalys
        .iter()
        .filter(|row| row.year == year)
        .map(|row| ChoroplethPoint {
            code: row.code.clone(),
            country: row.country.clone(),
            value: row.dalys,
        })
        .collect()
}

/// Distinct years present in the burden table, in first-appearance order
#[must_use]
pub fn dalys_years(dalys: &[DalysRecord]) -> Vec<i64> {
    dalys.iter().map(|row| row.year).unique().collect()
}

/// Age-band burden slices for one category's pie chart
#[must_use]
pub fn age_breakdown(
    age: &[AgeBurdenRecord],
    year: i64,
    country: &CountrySelection,
    category: DisorderCategory,
) -> AgeBreakdown {
    let subset = filter_by_year_and_country(age, year, country);
    AgeBreakdown {
        category,
        slices: sum_age_bands(&subset, category),
    }
}

/// Country selector options: the sentinel first, then each country once
/// in first-appearance order
///
/// Works over any of the loaded tables; the overview selector reads the
/// merged table and the burden selector reads the age table.
#[must_use]
pub fn country_options<T: CountryYearKeyed>(rows: &[T]) -> Vec<String> {
    std::iter::once(ALL_COUNTRIES.to_owned())
        .chain(rows.iter().map(|row| row.country().to_owned()).unique())
        .collect()
}
