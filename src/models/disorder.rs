//! Disorder and age-band enumerations
//!
//! Two views of the disorder space exist in the extracts: the seven
//! ranked prevalence series of the disorder-type table, and the five
//! categories that carry per-gender and per-age breakdowns.

use std::fmt;

/// The seven disorder prevalence series tracked by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disorder {
    /// Breakdown between thoughts, emotions, and behavior
    Schizophrenia,
    /// Swings in energy, mood, and activity levels
    BipolarDisorder,
    /// Anorexia, bulimia, and binge eating
    EatingDisorders,
    /// Persistent feeling of fear
    AnxietyDisorders,
    /// Drug addiction
    DrugUseDisorders,
    /// Persistent feeling of sadness
    Depression,
    /// Alcoholism and binge drinking
    AlcoholUseDisorders,
}

impl Disorder {
    /// All series, in the order the overview chart lists them
    pub const ALL: [Self; 7] = [
        Self::Schizophrenia,
        Self::BipolarDisorder,
        Self::EatingDisorders,
        Self::AnxietyDisorders,
        Self::DrugUseDisorders,
        Self::Depression,
        Self::AlcoholUseDisorders,
    ];

    /// Column name of this series in the disorder-type extract
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Schizophrenia => "schizophrenia",
            Self::BipolarDisorder => "bipolar_disorder",
            Self::EatingDisorders => "eating_disorders",
            Self::AnxietyDisorders => "anxiety_disorders",
            Self::DrugUseDisorders => "drug_use_disorders",
            Self::Depression => "depression",
            Self::AlcoholUseDisorders => "alcohol_use_disorders",
        }
    }

    /// Human-readable chart label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Schizophrenia => "Schizophrenia",
            Self::BipolarDisorder => "Bipolar Disorder",
            Self::EatingDisorders => "Eating Disorders",
            Self::AnxietyDisorders => "Anxiety Disorders",
            Self::DrugUseDisorders => "Drug Use Disorders",
            Self::Depression => "Depression",
            Self::AlcoholUseDisorders => "Alcohol Use Disorders",
        }
    }
}

impl fmt::Display for Disorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The five categories with per-gender and per-age breakdowns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisorderCategory {
    /// Depressive disorders
    Depression,
    /// Anxiety disorders
    Anxiety,
    /// Bipolar disorder
    Bipolar,
    /// Eating disorders
    Eating,
    /// Schizophrenia
    Schizophrenia,
}

impl DisorderCategory {
    /// All categories, in the order the selector lists them
    pub const ALL: [Self; 5] = [
        Self::Depression,
        Self::Anxiety,
        Self::Bipolar,
        Self::Eating,
        Self::Schizophrenia,
    ];

    /// Parse a selector value
    #[must_use]
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "depression" | "depressive" => Some(Self::Depression),
            "anxiety" => Some(Self::Anxiety),
            "bipolar" | "bipolar disorder" => Some(Self::Bipolar),
            "eating" | "eating disorders" => Some(Self::Eating),
            "schizophrenia" => Some(Self::Schizophrenia),
            _ => None,
        }
    }

    /// Human-readable chart label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Depression => "Depression",
            Self::Anxiety => "Anxiety",
            Self::Bipolar => "Bipolar Disorder",
            Self::Eating => "Eating Disorders",
            Self::Schizophrenia => "Schizophrenia",
        }
    }

    /// Age bands available for this category
    ///
    /// The eating and bipolar burden series start at the 5-14 band.
    #[must_use]
    pub fn age_bands(self) -> &'static [AgeBand] {
        match self {
            Self::Eating | Self::Bipolar => &AgeBand::FROM_5,
            _ => &AgeBand::ALL,
        }
    }
}

impl fmt::Display for DisorderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Age bands of the per-age-band burden extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBand {
    /// Under five years
    Under5,
    /// Five to fourteen years
    Age5To14,
    /// Fifteen to forty-nine years
    Age15To49,
    /// Fifty to sixty-nine years
    Age50To69,
    /// Seventy years and above
    Age70Plus,
}

impl AgeBand {
    /// All five bands, youngest first
    pub const ALL: [Self; 5] = [
        Self::Under5,
        Self::Age5To14,
        Self::Age15To49,
        Self::Age50To69,
        Self::Age70Plus,
    ];

    /// The four bands available for the eating and bipolar series
    pub const FROM_5: [Self; 4] = [
        Self::Age5To14,
        Self::Age15To49,
        Self::Age50To69,
        Self::Age70Plus,
    ];

    /// Band label as it appears in the extract headers
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Under5 => "<5",
            Self::Age5To14 => "5-14",
            Self::Age15To49 => "15-49",
            Self::Age50To69 => "50-69",
            Self::Age70Plus => "70+",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
