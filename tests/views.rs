//! Integration tests for the chart-ready derivations and the asset
//! degradation policy.

mod common;

use gbd_reader::assets::{AnimationSource, HttpAnimationSource};
use gbd_reader::models::{AgeBand, DalysRecord, DisorderCategory};
use gbd_reader::{ALL_COUNTRIES, CountrySelection, view};
use serde_json::Value;

use common::{age_row, merged_row};

fn sample_dalys() -> Vec<DalysRecord> {
    vec![
        DalysRecord {
            country: "Afghanistan".to_owned(),
            code: "AFG".to_owned(),
            year: 2000,
            dalys: 4.7,
        },
        DalysRecord {
            country: "Afghanistan".to_owned(),
            code: "AFG".to_owned(),
            year: 2019,
            dalys: 5.9,
        },
        DalysRecord {
            country: "Albania".to_owned(),
            code: "ALB".to_owned(),
            year: 2019,
            dalys: 4.1,
        },
    ]
}

#[test]
fn prevalence_choropleth_has_one_point_per_matching_row() {
    let rows = vec![
        merged_row("Afghanistan", "AFG", 2019, 10.0),
        merged_row("Albania", "ALB", 2019, 20.0),
        merged_row("Afghanistan", "AFG", 2000, 12.0),
    ];

    let points = view::prevalence_choropleth(&rows, 2019, &CountrySelection::AllCountries);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].code, "AFG");
    assert_eq!(points[0].value, 10.0);
    assert_eq!(points[1].country, "Albania");
}

#[test]
fn disorder_ranking_is_ascending_and_covers_all_series() {
    let rows = vec![merged_row("Afghanistan", "AFG", 2019, 10.0)];

    let ranking = view::disorder_ranking(&rows, 2019, &CountrySelection::AllCountries);
    assert_eq!(ranking.len(), 7);
    assert!(ranking.windows(2).all(|pair| pair[0].1 <= pair[1].1));
}

#[test]
fn disorder_ranking_is_empty_when_nothing_matches() {
    let rows = vec![merged_row("Afghanistan", "AFG", 2019, 10.0)];

    let ranking = view::disorder_ranking(&rows, 1995, &CountrySelection::AllCountries);
    assert!(ranking.is_empty());
}

#[test]
fn gender_disparity_reads_the_selected_category() {
    let mut row = merged_row("Afghanistan", "AFG", 2000, 12.0);
    row.depression_male = 3.0;
    row.depression_female = 6.0;
    let rows = vec![row];

    let selection = CountrySelection::Country("Afghanistan".to_owned());
    let split = view::gender_disparity(&rows, 2000, &selection, DisorderCategory::Depression)
        .expect("one matching row");
    assert_eq!(split.male, 3.0);
    assert_eq!(split.female, 6.0);
}

#[test]
fn dalys_choropleth_selects_one_frame() {
    let points = view::dalys_choropleth(&sample_dalys(), 2019);
    assert_eq!(points.len(), 2);
    assert!(points.iter().all(|point| point.value > 0.0));
}

#[test]
fn dalys_years_are_unique_in_first_appearance_order() {
    assert_eq!(view::dalys_years(&sample_dalys()), vec![2000, 2019]);
}

#[test]
fn age_breakdown_carries_the_category_band_order() {
    let rows = vec![age_row("Afghanistan", 2000)];
    let selection = CountrySelection::Country("Afghanistan".to_owned());

    let breakdown =
        view::age_breakdown(&rows, 2000, &selection, DisorderCategory::Depression);
    assert_eq!(breakdown.category, DisorderCategory::Depression);
    assert_eq!(breakdown.category.to_string(), "Depression");
    assert_eq!(breakdown.slices.len(), 5);
    assert_eq!(breakdown.slices[0], (AgeBand::Under5, 0.5));
    assert_eq!(breakdown.slices[0].0.label(), "<5");

    let eating = view::age_breakdown(&rows, 2000, &selection, DisorderCategory::Eating);
    assert_eq!(eating.slices.len(), 4);
    assert_eq!(eating.slices[0].0, AgeBand::Age5To14);
}

#[test]
fn country_options_lead_with_the_sentinel() {
    let rows = vec![
        merged_row("Afghanistan", "AFG", 2000, 12.0),
        merged_row("Afghanistan", "AFG", 2019, 10.0),
        merged_row("Albania", "ALB", 2019, 20.0),
    ];

    let options = view::country_options(&rows);
    assert_eq!(options, vec![ALL_COUNTRIES, "Afghanistan", "Albania"]);
}

#[test]
fn country_options_cover_the_age_table_too() {
    let rows = vec![age_row("Afghanistan", 2000), age_row("Albania", 2019)];

    let options = view::country_options(&rows);
    assert_eq!(options, vec![ALL_COUNTRIES, "Afghanistan", "Albania"]);
}

#[test]
fn failed_animation_fetch_degrades_to_none() {
    let source = HttpAnimationSource::new().expect("build http client");
    // Nothing serves on the discard port; the fetch must degrade, not fail
    let animation = source.fetch_animation("http://127.0.0.1:9/animation.json");
    assert!(animation.is_none());
}

#[test]
fn animation_sources_are_swappable_behind_the_trait() {
    struct CannedSource(Value);

    impl AnimationSource for CannedSource {
        fn fetch_animation(&self, _url: &str) -> Option<Value> {
            Some(self.0.clone())
        }
    }

    let source = CannedSource(serde_json::json!({ "v": "5.5.7", "layers": [] }));
    let descriptor = source
        .fetch_animation("https://example.com/animation.json")
        .expect("canned descriptor");
    assert_eq!(descriptor["v"], "5.5.7");
}
