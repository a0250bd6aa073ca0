//! Year and country filtering over the loaded tables.
//!
//! Filter state is passed explicitly to every query instead of being
//! read from ambient UI state, so each function here is a pure function
//! of its arguments and testable without any presentation layer.

use std::fmt;

use crate::models::{
    AgeBurdenRecord, DalysRecord, DisorderTypeRecord, GenderRecord, MergedRecord,
    PrevalenceRecord,
};

/// The sentinel value the country selector uses for "no country filter"
pub const ALL_COUNTRIES: &str = "All Countries";

/// Country restriction for a query
///
/// `AllCountries` is a filter value, never a dataset key: no row carries
/// it, and selecting it applies no country predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountrySelection {
    /// No country restriction; aggregates run across all countries
    AllCountries,
    /// Restrict to one country by display name
    Country(String),
}

impl CountrySelection {
    /// Parse a selector value, mapping the sentinel to `AllCountries`
    #[must_use]
    pub fn from_option(value: &str) -> Self {
        if value == ALL_COUNTRIES {
            Self::AllCountries
        } else {
            Self::Country(value.to_owned())
        }
    }

    /// Whether the given country passes this selection
    #[must_use]
    pub fn matches(&self, country: &str) -> bool {
        match self {
            Self::AllCountries => true,
            Self::Country(selected) => selected == country,
        }
    }
}

impl fmt::Display for CountrySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllCountries => f.write_str(ALL_COUNTRIES),
            Self::Country(name) => f.write_str(name),
        }
    }
}

/// Row types addressable by the (country, year) filter key
pub trait CountryYearKeyed {
    /// Country display name of the row
    fn country(&self) -> &str;

    /// Calendar year of the row
    fn year(&self) -> i64;
}

impl CountryYearKeyed for PrevalenceRecord {
    fn country(&self) -> &str {
        &self.country
    }

    fn year(&self) -> i64 {
        self.year
    }
}

impl CountryYearKeyed for DisorderTypeRecord {
    fn country(&self) -> &str {
        &self.country
    }

    fn year(&self) -> i64 {
        self.year
    }
}

impl CountryYearKeyed for GenderRecord {
    fn country(&self) -> &str {
        &self.country
    }

    fn year(&self) -> i64 {
        self.year
    }
}

impl CountryYearKeyed for DalysRecord {
    fn country(&self) -> &str {
        &self.country
    }

    fn year(&self) -> i64 {
        self.year
    }
}

impl CountryYearKeyed for AgeBurdenRecord {
    fn country(&self) -> &str {
        &self.country
    }

    fn year(&self) -> i64 {
        self.year
    }
}

impl CountryYearKeyed for MergedRecord {
    fn country(&self) -> &str {
        &self.country
    }

    fn year(&self) -> i64 {
        self.year
    }
}

/// Return the rows matching the requested year and country selection
///
/// An empty result is a value, not an error; callers render a
/// placeholder when nothing matches.
#[must_use]
pub fn filter_by_year_and_country<'a, T: CountryYearKeyed>(
    rows: &'a [T],
    year: i64,
    country: &CountrySelection,
) -> Vec<&'a T> {
    rows.iter()
        .filter(|row| row.year() == year && country.matches(row.country()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_parses_to_all_countries() {
        assert_eq!(
            CountrySelection::from_option("All Countries"),
            CountrySelection::AllCountries
        );
        assert_eq!(
            CountrySelection::from_option("Lebanon"),
            CountrySelection::Country("Lebanon".to_owned())
        );
    }

    #[test]
    fn all_countries_matches_everything() {
        assert!(CountrySelection::AllCountries.matches("Lebanon"));
        assert!(CountrySelection::Country("Lebanon".to_owned()).matches("Lebanon"));
        assert!(!CountrySelection::Country("Lebanon".to_owned()).matches("Jordan"));
    }
}
