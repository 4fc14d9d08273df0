#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use pv_dashboard::hooks::use_readings::DataState;
    use pv_dashboard::models::{
        error::AppError,
        i18n::{Language, TextKey},
        reading::{Readings, power_stats},
        view_state::{TimeWindow, ViewAction, ViewState, merge_query},
    };
    use pv_dashboard::services::api::{
        ApiConfig, Fetched, decode_body, fetch_history, fetch_latest, latest_from_json,
    };
    use serde_json::json;
    use std::rc::Rc;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    // Helper function to start a local HTTP server answering every request
    // with `status` and `body`. Returns its base URL and a request counter.
    async fn serve(status: u16, body: &str) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let response = format!(
            "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let counter = hits.clone();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                counter.fetch_add(1, Ordering::SeqCst);
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        (format!("http://{addr}"), hits)
    }

    // Helper function to create an out-of-order history response
    fn unordered_history() -> serde_json::Value {
        json!([
            {"timestamp": "2025-06-01T12:00:00Z", "power": 300.0},
            {"timestamp": "2025-06-01T10:00:00Z", "power": 100.0},
            {"timestamp": "2025-06-01T11:00:00Z", "power": 200.0}
        ])
    }

    // ===== Translation Tests =====

    #[test]
    fn test_every_key_translated_in_every_language() {
        for language in Language::all() {
            for key in TextKey::all() {
                assert!(
                    !language.text(*key).trim().is_empty(),
                    "{key:?} missing for {language}"
                );
            }
        }
    }

    #[test]
    fn test_time_window_labels_translated() {
        for window in TimeWindow::all() {
            assert_ne!(
                Language::En.text(window.label_key()),
                Language::De.text(window.label_key())
            );
        }
    }

    // ===== URL / View State Tests =====

    #[test]
    fn test_query_round_trip_initial_load() {
        let state = ViewState::resolve(None, "lang=de&kiosk=1&slide=0", t0());

        assert_eq!(state.language, Language::De);
        assert!(state.kiosk);
        assert!(!state.slideshow_enabled);
    }

    #[test]
    fn test_reload_with_edited_url_beats_saved_state() {
        let saved = ViewState::new(t0());
        let state = ViewState::resolve(Some(saved), "lang=de&kiosk=1&slide=0", t0());

        assert_eq!(state.language, Language::De);
        assert!(state.kiosk);
        assert!(!state.slideshow_enabled);
        // Only the missing api parameter gets written back
        assert_eq!(
            merge_query("lang=de&kiosk=1&slide=0", &state.query_pairs()).as_deref(),
            Some("lang=de&kiosk=1&slide=0&api=http%3A%2F%2Flocalhost%3A5000")
        );
    }

    #[test]
    fn test_query_pairs_echo_state() {
        let state = ViewState::from_query("?lang=de&kiosk=yes", t0());
        let pairs = state.query_pairs();

        assert!(pairs.contains(&("lang", "de".to_string())));
        assert!(pairs.contains(&("kiosk", "1".to_string())));
        assert!(pairs.contains(&("slide", "0".to_string())));
    }

    #[test]
    fn test_kiosk_does_not_change_requests() {
        let normal = ViewState::new(t0());
        let kiosk = normal.apply(ViewAction::SetKiosk(true)).unwrap();

        assert_eq!(normal.history_query(t0()), kiosk.history_query(t0()));
        assert_eq!(normal.api_base, kiosk.api_base);

        let config = ApiConfig::builder().base_url(&kiosk.api_base).build();
        assert_eq!(
            config.history_url(&normal.history_query(t0())),
            config.history_url(&kiosk.history_query(t0()))
        );
    }

    // ===== Slideshow Tests =====

    #[test]
    fn test_slideshow_alternates_languages() {
        let mut state = ViewState::from_query("lang=en&slide=1", t0());
        assert!(state.slideshow_enabled);

        assert!(!state.tick_slideshow(t0() + Duration::seconds(9)));
        assert_eq!(state.language, Language::En);

        assert!(state.tick_slideshow(t0() + Duration::seconds(10)));
        assert_eq!(state.language, Language::De);

        assert!(!state.tick_slideshow(t0() + Duration::seconds(15)));
        assert_eq!(state.language, Language::De);

        assert!(state.tick_slideshow(t0() + Duration::seconds(21)));
        assert_eq!(state.language, Language::En);
    }

    #[test]
    fn test_slideshow_via_actions() {
        let state = ViewState::from_query("slide=true", t0());

        let next = state
            .apply(ViewAction::Tick(t0() + Duration::seconds(12)))
            .expect("language should flip");
        assert_eq!(next.language, Language::De);
        assert_eq!(next.slide_last_switch, t0() + Duration::seconds(12));
    }

    // ===== History Normalization Tests =====

    #[test]
    fn test_history_sorted_ascending() {
        let readings = Readings::from_json(unordered_history()).unwrap();
        let series = readings.power_series(42);

        assert_eq!(series.power, vec![100.0, 200.0, 300.0]);
        assert_eq!(
            series.labels,
            vec!["2025-06-01 10:00", "2025-06-01 11:00", "2025-06-01 12:00"]
        );
    }

    #[test]
    fn test_history_ts_column() {
        let readings = Readings::from_json(json!([
            {"ts": "2025-06-01T11:00:00", "power": "2"},
            {"ts": "2025-06-01T10:00:00", "power": "1"}
        ]))
        .unwrap();

        assert_eq!(readings.power_series(42).power, vec![1.0, 2.0]);
    }

    #[test]
    fn test_history_rows_without_time_are_dropped_from_series() {
        let readings = Readings::from_json(json!([
            {"timestamp": "garbage", "power": 5},
            {"timestamp": "2025-06-01T10:00:00Z", "power": 1}
        ]))
        .unwrap();

        assert_eq!(readings.len(), 2);
        assert_eq!(readings.power_series(42).power, vec![1.0]);
    }

    #[test]
    fn test_empty_history() {
        let readings = Readings::from_json(json!([])).unwrap();
        assert!(readings.is_empty());
        assert!(readings.power_series(42).is_empty());
    }

    // ===== Metrics Tests =====

    #[test]
    fn test_latest_metrics() {
        let reading = latest_from_json(json!({"reading": {"power": 250.0}})).unwrap();
        let stats = power_stats(reading.power).unwrap();

        assert_eq!(format!("{:.1} W", stats.total), "250.0 W");
        assert_eq!(stats.average, 250.0);
    }

    #[test]
    fn test_latest_without_power_has_no_metrics() {
        let reading = latest_from_json(json!({"reading": {"voltage": 230}})).unwrap();
        assert!(power_stats(reading.power).is_none());
    }

    // ===== Fetch Fallback Tests =====

    #[test]
    fn test_non_2xx_falls_back_to_empty() {
        let fetched: Fetched<Readings> =
            Fetched::from_result(decode_body(500, "boom").and_then(Readings::from_json), t0());

        assert!(fetched.data.is_empty());
        assert!(matches!(
            fetched.warning,
            Some(AppError::Status { status: 500, .. })
        ));
    }

    #[test]
    fn test_invalid_json_falls_back_to_empty() {
        let fetched =
            Fetched::from_result(decode_body(200, "{not json").and_then(latest_from_json), t0());

        assert!(fetched.data.is_empty());
        assert!(matches!(fetched.warning, Some(AppError::Parse(_))));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_falls_back_to_empty() {
        // Port 1 is never listening
        let base = "http://127.0.0.1:1";

        let latest = fetch_latest(base, Utc::now()).await;
        assert!(latest.data.is_empty());
        assert!(matches!(latest.warning, Some(AppError::Network(_))));

        let query = TimeWindow::Day.history_query(Utc::now());
        let history = fetch_history(base, &query, Utc::now()).await;
        assert!(history.data.is_empty());
        assert!(matches!(history.warning, Some(AppError::Network(_))));
    }

    #[tokio::test]
    async fn test_server_error_falls_back_through_fetch() {
        let (base, hits) = serve(500, "internal error").await;

        let latest = fetch_latest(&base, t0()).await;
        assert!(latest.data.is_empty());
        assert!(matches!(
            latest.warning,
            Some(AppError::Status { status: 500, .. })
        ));
        assert_eq!(latest.fetched_at, t0());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_json_falls_back_through_fetch() {
        let (base, _) = serve(200, "{not json").await;

        let query = TimeWindow::Week.history_query(t0());
        let history = fetch_history(&base, &query, t0()).await;
        assert!(history.data.is_empty());
        assert!(matches!(history.warning, Some(AppError::Parse(_))));
    }

    #[tokio::test]
    async fn test_history_served_end_to_end() {
        let body = unordered_history().to_string();
        let (base, _) = serve(200, &body).await;

        let query = TimeWindow::Day.history_query(t0());
        let history = fetch_history(&base, &query, t0()).await;
        assert!(history.warning.is_none());
        assert_eq!(history.data.power_series(42).power, vec![100.0, 200.0, 300.0]);
    }

    #[tokio::test]
    async fn test_repeat_fetch_within_ttl_uses_cache() {
        let (base, hits) = serve(200, r#"{"reading": {"power": 250.0}}"#).await;

        let first = fetch_latest(&base, t0()).await;
        let second = fetch_latest(&base, t0() + Duration::seconds(14)).await;
        assert_eq!(first.data, second.data);
        assert_eq!(second.data.power, Some(250.0));
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        let expired = fetch_latest(&base, t0() + Duration::seconds(15)).await;
        assert_eq!(expired.data.power, Some(250.0));
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let (base, hits) = serve(503, "maintenance").await;

        fetch_latest(&base, t0()).await;
        fetch_latest(&base, t0() + Duration::seconds(1)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    // ===== DataState Tests =====

    #[test]
    fn test_data_state_accessors() {
        let loading: DataState<Readings> = DataState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());
        assert!(loading.warning().is_none());

        assert!(loading.fetched_at().is_none());

        let failed = DataState::Loaded(Rc::new(Fetched::<Readings>::from_result(
            Err(AppError::Network("refused".to_string())),
            t0(),
        )));
        assert!(!failed.is_loading());
        assert!(failed.data().unwrap().is_empty());
        assert!(failed.warning().is_some());
        assert_eq!(failed.fetched_at(), Some(t0()));
    }
}
