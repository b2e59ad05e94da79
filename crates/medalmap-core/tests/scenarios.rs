use medalmap_core::prelude::*;

fn row(team: &str, year: i32, sport: &str, event: &str, medal: Option<Medal>) -> ResultRow {
    ResultRow::new(team, year, sport, event, medal)
}

#[test]
fn single_american_gold() {
    let rows = vec![row("USA", 2000, "Swimming", "100m", Some(Medal::Gold))];

    let filtered = filter_by_country(&rows, "United States", MatchMode::Contains);
    assert_eq!(filtered.len(), 1);

    let sports = aggregate_by_sport(&dedup_events(filtered.iter().copied()));
    assert_eq!(sports, vec![SportCount { sport: "Swimming".into(), count: 1 }]);

    let pct = medal_percentages(filtered.iter().copied()).unwrap();
    assert_eq!(pct, MedalPercentages { gold: 100.0, silver: 0.0, bronze: 0.0 });
}

#[test]
fn relay_of_two_athletes_is_one_event() {
    let rows = vec![
        row("Jamaica", 2008, "Athletics", "4x100m Relay", Some(Medal::Gold)),
        row("Jamaica", 2008, "Athletics", "4x100m Relay", Some(Medal::Gold)),
    ];
    assert_eq!(dedup_events(&rows).len(), 1);
}

#[test]
fn england_is_great_britain() {
    assert_eq!(normalize_country_name("England"), "Great Britain");
    assert_eq!(normalize_country_name("France"), "France");
}

#[test]
fn country_without_rows_reports_no_data() {
    let dataset = Dataset::from_rows(vec![row("USA", 2000, "Swimming", "100m", Some(Medal::Gold))]);
    let report = dataset.country_report("Tuvalu", &ReportOptions::default());

    assert!(report.top_sports.is_empty());
    assert!(!report.has_data());
    assert_eq!(report.percentages, None);
    assert_eq!(report.comparison.own, None);
    assert_eq!(NO_DATA_MESSAGE, "No data available.");
}

#[test]
fn most_and_least_over_three_countries() {
    let mut rows = Vec::new();
    for event in ["100m", "200m", "400m", "800m", "1500m"] {
        rows.push(row("A", 2000, "Athletics", event, Some(Medal::Gold)));
    }
    rows.push(row("B", 2000, "Swimming", "100m", Some(Medal::Silver)));
    rows.push(row("C", 2000, "Rowing", "Eights", Some(Medal::Bronze)));

    let index = MedalIndex::build(&rows);
    let most = index.most().unwrap();
    let least = index.least().unwrap();
    assert_eq!((most.country.as_str(), most.count), ("A", 5));
    assert_eq!((least.country.as_str(), least.count), ("B", 1));
}

#[test]
fn ranking_bounds_hold_for_every_country() {
    let rows = vec![
        row("USA", 2000, "Swimming", "100m", Some(Medal::Gold)),
        row("USA", 2000, "Swimming", "200m", Some(Medal::Gold)),
        row("UK", 2000, "Rowing", "Pairs", Some(Medal::Gold)),
        row("Kenya", 2000, "Athletics", "Marathon", Some(Medal::Silver)),
        row("Kenya", 2004, "Athletics", "Marathon", Some(Medal::Silver)),
        row("Kenya", 2008, "Athletics", "Marathon", Some(Medal::Gold)),
    ];
    let index = MedalIndex::build(&rows);
    let most = index.most().unwrap().count;
    let least = index.least().unwrap().count;
    for entry in index.countries() {
        assert!(most >= entry.count && entry.count >= least, "{entry:?}");
    }
    assert_eq!(index.most().unwrap().country, "Kenya");
    assert_eq!(index.least().unwrap().country, "Great Britain");
}

#[test]
fn filtering_an_empty_dataset_is_not_an_error() {
    let state = DatasetState::Ready(Dataset::empty());
    let report = state.country_report("France", &ReportOptions::default());
    assert!(!report.has_data());
    assert!(report.comparison.most.is_none());
}

#[test]
fn percentages_count_athletes_while_sports_count_events() {
    let dataset = Dataset::from_rows(vec![
        row("Canada", 2010, "Ice Hockey", "Men", Some(Medal::Gold)),
        row("Canada", 2010, "Ice Hockey", "Men", Some(Medal::Gold)),
        row("Canada", 2010, "Ice Hockey", "Men", Some(Medal::Gold)),
        row("Canada", 2010, "Speed Skating", "500m", Some(Medal::Bronze)),
    ]);
    let report = dataset.country_report("Canada", &ReportOptions::default());
    assert_eq!(report.top_sports[0], SportCount { sport: "Ice Hockey".into(), count: 1 });
    let pct = report.percentages.unwrap();
    assert_eq!(pct.gold, 75.0);
    assert_eq!(pct.bronze, 25.0);
}
