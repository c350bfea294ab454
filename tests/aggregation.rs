//! Aggregation Integration Tests
//!
//! Counting and size invariants of the per-provider summary.

use streamcheck::domain::{Movie, WatchProviders};
use streamcheck::Aggregator;

const GIB: u64 = 1 << 30;

fn availability(json: &str) -> WatchProviders {
    WatchProviders::from_json(json).unwrap()
}

fn flatrate_in(region: &str, providers: &[&str]) -> WatchProviders {
    let entries: Vec<String> = providers
        .iter()
        .map(|p| format!(r#"{{"provider_name": "{}"}}"#, p))
        .collect();
    availability(&format!(
        r#"{{"results": {{"{}": {{"flatrate": [{}]}}}}}}"#,
        region,
        entries.join(",")
    ))
}

#[test]
fn test_two_movie_scenario() {
    let a = Movie::new(1, "A", 2 * GIB);
    let b = Movie::new(2, "B", GIB);
    let a_providers = flatrate_in("AU", &["Netflix", "Stan"]);
    let b_providers = flatrate_in("AU", &["Netflix"]);

    let summary = Aggregator::summarize("AU", [(&a, &a_providers), (&b, &b_providers)]);

    assert_eq!(summary.len(), 2);
    let netflix = summary.get("Netflix").unwrap();
    assert_eq!(netflix.count, 2);
    assert_eq!(netflix.gigabytes, 3.0);
    let stan = summary.get("Stan").unwrap();
    assert_eq!(stan.count, 1);
    assert_eq!(stan.gigabytes, 2.0);
}

#[test]
fn test_repeated_entry_counted_once_per_movie() {
    let movie = Movie::new(1, "A", GIB);
    let providers = availability(
        r#"{"results": {"AU": {"flatrate": [
            {"provider_name": "Netflix", "provider_id": 8},
            {"provider_name": "Netflix", "provider_id": 1796},
            {"provider_name": "Netflix", "provider_id": 8}
        ]}}}"#,
    );

    let summary = Aggregator::summarize("AU", [(&movie, &providers)]);
    let netflix = summary.get("Netflix").unwrap();
    assert_eq!(netflix.count, 1);
    assert_eq!(netflix.gigabytes, 1.0);
}

#[test]
fn test_zero_size_still_counts() {
    let movie = Movie::new(1, "Missing file", 0);
    let providers = flatrate_in("AU", &["BINGE"]);

    let summary = Aggregator::summarize("AU", [(&movie, &providers)]);
    let binge = summary.get("BINGE").unwrap();
    assert_eq!(binge.count, 1);
    assert_eq!(binge.gigabytes, 0.0);
}

#[test]
fn test_movie_outside_region_contributes_nothing() {
    let movie = Movie::new(1, "A", GIB);
    let us_only = flatrate_in("US", &["Hulu"]);
    let empty = availability(r#"{"id": 1, "results": {}}"#);

    let summary = Aggregator::summarize("AU", [(&movie, &us_only), (&movie, &empty)]);
    assert!(summary.is_empty());
}

#[test]
fn test_rent_only_region_contributes_nothing() {
    let movie = Movie::new(1, "A", GIB);
    let providers = availability(
        r#"{"results": {"AU": {
            "rent": [{"provider_name": "Apple TV"}],
            "buy": [{"provider_name": "Google Play Movies"}]
        }}}"#,
    );

    let summary = Aggregator::summarize("AU", [(&movie, &providers)]);
    assert!(summary.is_empty());
}

#[test]
fn test_sizes_rounded_per_movie_before_summing() {
    // 0.004 GB rounds to 0.00 on its own, so three of them still sum to 0.00
    let tiny = (GIB as f64 * 0.004) as u64;
    let movies: Vec<Movie> = (0..3).map(|i| Movie::new(i, "tiny", tiny)).collect();
    let providers = flatrate_in("AU", &["Stan"]);

    let summary = Aggregator::summarize("AU", movies.iter().map(|m| (m, &providers)));
    let stan = summary.get("Stan").unwrap();
    assert_eq!(stan.count, 3);
    assert_eq!(stan.gigabytes, 0.0);
}

#[test]
fn test_total_kept_at_two_decimals() {
    // 1.1 GB and 2.2 GB would drift in plain float addition
    let a = Movie::new(1, "A", (GIB as f64 * 1.1) as u64);
    let b = Movie::new(2, "B", (GIB as f64 * 2.2) as u64);
    let providers = flatrate_in("AU", &["Netflix"]);

    let summary = Aggregator::summarize("AU", [(&a, &providers), (&b, &providers)]);
    assert_eq!(summary.get("Netflix").unwrap().gigabytes, 3.3);
}

#[test]
fn test_unlisted_providers_are_aggregated() {
    let movie = Movie::new(1, "A", GIB);
    let providers = flatrate_in("AU", &["Hulu", "Kanopy", "Netflix"]);

    let summary = Aggregator::summarize("AU", [(&movie, &providers)]);
    assert_eq!(summary.len(), 3);
    assert!(summary.get("Hulu").is_some());
    assert!(summary.get("Kanopy").is_some());
}

#[test]
fn test_summary_is_order_independent() {
    let movies = vec![
        Movie::new(1, "A", 3 * GIB + 123_456_789),
        Movie::new(2, "B", 987_654_321),
        Movie::new(3, "C", 0),
        Movie::new(4, "D", 7 * GIB),
    ];
    let providers = vec![
        flatrate_in("AU", &["Netflix", "Stan"]),
        flatrate_in("AU", &["Stan", "BINGE"]),
        flatrate_in("AU", &["Netflix"]),
        flatrate_in("US", &["Netflix"]),
    ];

    let forward = Aggregator::summarize("AU", movies.iter().zip(providers.iter()));
    let backward = Aggregator::summarize("AU", movies.iter().zip(providers.iter()).rev());
    let again = Aggregator::summarize("AU", movies.iter().zip(providers.iter()));

    assert_eq!(forward, backward);
    assert_eq!(
        forward.to_pretty_json().unwrap(),
        again.to_pretty_json().unwrap()
    );
    assert_eq!(forward.get("Netflix").unwrap().count, 2);
    assert_eq!(forward.get("Stan").unwrap().count, 2);
}

#[test]
fn test_half_hundredth_sizes_round_to_even() {
    // Odd multiples of 2^27 bytes land exactly on x.xx5 GB
    let eighth = Movie::new(1, "A", 1 << 27);
    let five_eighths = Movie::new(2, "B", 5 << 27);
    assert_eq!(eighth.size_gb(), 0.12);
    assert_eq!(five_eighths.size_gb(), 0.62);

    let netflix = flatrate_in("AU", &["Netflix"]);
    let stan = flatrate_in("AU", &["Stan"]);
    let summary = Aggregator::summarize("AU", [(&eighth, &netflix), (&five_eighths, &stan)]);

    assert_eq!(summary.get("Netflix").unwrap().gigabytes, 0.12);
    assert_eq!(summary.get("Stan").unwrap().gigabytes, 0.62);
}
