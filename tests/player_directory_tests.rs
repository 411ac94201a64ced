use chrono::{DateTime, Duration, TimeZone, Utc};
use dynasty_analyzer::{
    config::Config,
    data_fetcher::api::create_http_client_with_timeout,
    data_fetcher::cache::{Clock, PlayerDirectoryCache},
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// 2025-08-17, the day the age expectations below are computed for
fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 17, 15, 30, 0).unwrap()
}

fn adjustable_clock(start: DateTime<Utc>) -> (Clock, Arc<Mutex<DateTime<Utc>>>) {
    let now = Arc::new(Mutex::new(start));
    let handle = Arc::clone(&now);
    let clock: Clock = Arc::new(move || *handle.lock().unwrap());
    (clock, now)
}

fn directory_response() -> Value {
    json!({
        "6794": {
            "first_name": "Justin",
            "last_name": "Jefferson",
            "position": "WR",
            "team": "MIN",
            "birth_date": "930182400000",
            "years_exp": 5,
            "number": 18,
            "status": "Active"
        },
        "4034": {
            "first_name": "Christian",
            "last_name": "McCaffrey",
            "position": "RB",
            "team": "SF",
            "birth_date": 810691200000_i64,
            "years_exp": 8,
            "number": 23,
            "status": "Active"
        },
        "9999": {
            "first_name": "No",
            "last_name": "Birthday",
            "position": "TE",
            "team": null,
            "years_exp": 0,
            "number": null,
            "status": "Inactive"
        },
        "8888": {
            "position": "K",
            "birth_date": "sometime in the nineties"
        }
    })
}

async fn mount_directory(mock_server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/players/nfl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(directory_response()))
        .expect(expected_calls)
        .mount(mock_server)
        .await;
}

fn cache_for(mock_server: &MockServer, clock: Clock) -> PlayerDirectoryCache {
    let config = Config {
        api_domain: mock_server.uri(),
        ..Config::default()
    };
    PlayerDirectoryCache::with_clock(create_http_client_with_timeout(10).unwrap(), config, clock)
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[tokio::test]
async fn test_resolve_players_full_records() {
    let mock_server = MockServer::start().await;
    mount_directory(&mock_server, 1).await;
    let (clock, _) = adjustable_clock(reference_now());
    let cache = cache_for(&mock_server, clock);

    let players = cache.resolve_players(&ids(&["6794", "4034"])).await;

    assert_eq!(players.len(), 2);

    let jefferson = &players["6794"];
    assert_eq!(jefferson.name, "Justin Jefferson");
    assert_eq!(jefferson.position.as_deref(), Some("WR"));
    assert_eq!(jefferson.age, Some(26));
    assert_eq!(jefferson.team.as_deref(), Some("MIN"));
    assert_eq!(jefferson.number, Some(json!(18)));
    assert_eq!(jefferson.status.as_deref(), Some("Active"));
    assert_eq!(jefferson.experience, Some(json!(5)));

    // Numeric birth date, birthday not reached yet this year
    let mccaffrey = &players["4034"];
    assert_eq!(mccaffrey.age, Some(29));
}

#[tokio::test]
async fn test_missing_and_malformed_birth_dates_only_affect_age() {
    let mock_server = MockServer::start().await;
    mount_directory(&mock_server, 1).await;
    let (clock, _) = adjustable_clock(reference_now());
    let cache = cache_for(&mock_server, clock);

    let players = cache.resolve_players(&ids(&["9999", "8888", "6794"])).await;

    let no_birthday = &players["9999"];
    assert_eq!(no_birthday.name, "No Birthday");
    assert_eq!(no_birthday.age, None);
    assert_eq!(no_birthday.position.as_deref(), Some("TE"));
    assert_eq!(no_birthday.team, None);
    assert_eq!(no_birthday.experience, Some(json!(0)));
    assert_eq!(no_birthday.status.as_deref(), Some("Inactive"));

    let kicker = &players["8888"];
    assert_eq!(kicker.name, "");
    assert_eq!(kicker.age, None);
    assert_eq!(kicker.position.as_deref(), Some("K"));

    // The bad record did not disturb the rest of the batch
    assert_eq!(players["6794"].age, Some(26));
}

#[tokio::test]
async fn test_unknown_ids_are_omitted() {
    let mock_server = MockServer::start().await;
    mount_directory(&mock_server, 1).await;
    let (clock, _) = adjustable_clock(reference_now());
    let cache = cache_for(&mock_server, clock);

    let players = cache.resolve_players(&ids(&["unknown-id", "6794"])).await;

    assert_eq!(players.len(), 1);
    assert!(!players.contains_key("unknown-id"));
    assert!(players.contains_key("6794"));
}

#[tokio::test]
async fn test_empty_request_on_fresh_cache_does_not_fetch() {
    let mock_server = MockServer::start().await;
    mount_directory(&mock_server, 1).await;
    let (clock, _) = adjustable_clock(reference_now());
    let cache = cache_for(&mock_server, clock);

    cache.resolve_players(&ids(&["6794"])).await;
    let players = cache.resolve_players(&[]).await;

    assert!(players.is_empty());
    // MockServer verifies the single fetch on drop
}

#[tokio::test]
async fn test_repeated_resolve_is_identical_and_fetches_once() {
    let mock_server = MockServer::start().await;
    mount_directory(&mock_server, 1).await;
    let (clock, _) = adjustable_clock(reference_now());
    let cache = cache_for(&mock_server, clock);

    let request = ids(&["6794", "4034", "9999", "unknown-id"]);
    let first = cache.resolve_players(&request).await;
    let second = cache.resolve_players(&request).await;

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first["6794"]).unwrap(),
        serde_json::to_vec(&second["6794"]).unwrap()
    );
}

#[tokio::test]
async fn test_refetch_after_a_day() {
    let mock_server = MockServer::start().await;
    mount_directory(&mock_server, 2).await;
    let (clock, now) = adjustable_clock(reference_now());
    let cache = cache_for(&mock_server, clock);

    cache.resolve_players(&ids(&["6794"])).await;

    *now.lock().unwrap() = reference_now() + Duration::hours(12);
    cache.resolve_players(&ids(&["6794"])).await;

    *now.lock().unwrap() = reference_now() + Duration::days(1);
    let players = cache.resolve_players(&ids(&["6794"])).await;
    assert_eq!(players["6794"].name, "Justin Jefferson");

    let info = cache.snapshot_info().await.unwrap();
    assert_eq!(info.refreshed_at, reference_now() + Duration::days(1));
}

#[tokio::test]
async fn test_age_follows_the_clock_between_refreshes() {
    let mock_server = MockServer::start().await;
    mount_directory(&mock_server, 1).await;
    let start = Utc.with_ymd_and_hms(2025, 9, 9, 12, 0, 0).unwrap();
    let (clock, now) = adjustable_clock(start);
    let cache = cache_for(&mock_server, clock);

    let before = cache.resolve_players(&ids(&["4034"])).await;
    assert_eq!(before["4034"].age, Some(29));

    // Next day is the 1995-09-10 birthday; snapshot is still fresh
    *now.lock().unwrap() = start + Duration::hours(12);
    let after = cache.resolve_players(&ids(&["4034"])).await;
    assert_eq!(after["4034"].age, Some(30));
}

#[tokio::test]
async fn test_failed_first_fetch_returns_empty_mapping() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/players/nfl"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    let (clock, _) = adjustable_clock(reference_now());
    let cache = cache_for(&mock_server, clock);

    let players = cache.resolve_players(&ids(&["6794"])).await;

    assert!(players.is_empty());
    assert!(cache.snapshot_info().await.is_none());
}

#[tokio::test]
async fn test_failed_refresh_keeps_stale_snapshot() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/players/nfl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(directory_response()))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/players/nfl"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let (clock, now) = adjustable_clock(reference_now());
    let cache = cache_for(&mock_server, clock);

    cache.resolve_players(&ids(&["6794"])).await;

    *now.lock().unwrap() = reference_now() + Duration::days(2);
    let players = cache.resolve_players(&ids(&["6794"])).await;

    assert_eq!(players["6794"].name, "Justin Jefferson");
    let info = cache.snapshot_info().await.unwrap();
    assert_eq!(info.refreshed_at, reference_now());
}

#[tokio::test]
async fn test_refresh_timeout_is_silent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/players/nfl"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(directory_response())
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = Config {
        api_domain: mock_server.uri(),
        ..Config::default()
    };
    let (clock, _) = adjustable_clock(reference_now());
    let cache = PlayerDirectoryCache::with_clock(
        create_http_client_with_timeout(1).unwrap(),
        config,
        clock,
    );

    let players = cache.resolve_players(&ids(&["6794"])).await;
    assert!(players.is_empty());
}

#[tokio::test]
async fn test_concurrent_resolves_share_one_refresh() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/players/nfl"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(directory_response())
                .set_delay(std::time::Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (clock, _) = adjustable_clock(reference_now());
    let cache = Arc::new(cache_for(&mock_server, clock));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.resolve_players(&ids(&["6794", "4034"])).await })
        })
        .collect();

    for handle in handles {
        let players = handle.await.unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players["6794"].name, "Justin Jefferson");
    }
}

#[tokio::test]
async fn test_concurrent_resolves_share_one_failed_refresh() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/players/nfl"))
        .respond_with(
            ResponseTemplate::new(503).set_delay(std::time::Duration::from_millis(400)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (clock, _) = adjustable_clock(reference_now());
    let cache = Arc::new(cache_for(&mock_server, clock));

    let started = std::time::Instant::now();
    let handles: Vec<_> = (0..5)
        .map(|_| {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.resolve_players(&ids(&["6794"])).await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_empty());
    }

    // One shared attempt, not five back to back
    assert!(started.elapsed() < std::time::Duration::from_millis(1200));
    assert!(cache.snapshot_info().await.is_none());
}

#[tokio::test]
async fn test_next_request_after_failed_refresh_tries_again() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/players/nfl"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_directory(&mock_server, 1).await;

    let (clock, _) = adjustable_clock(reference_now());
    let cache = cache_for(&mock_server, clock);

    assert!(cache.resolve_players(&ids(&["6794"])).await.is_empty());
    let players = cache.resolve_players(&ids(&["6794"])).await;
    assert_eq!(players["6794"].name, "Justin Jefferson");
}
