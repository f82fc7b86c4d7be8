#[cfg(test)]
mod tests {
    use chrono::Utc;
    use futures::executor::block_on;
    use movie_dashboard::hooks::use_dashboard::DashboardState;
    use movie_dashboard::models::{
        entries::{ThemeEntry, normalize_themes},
        error::AppError,
        stats::{MovieStats, format_millions_of_votes},
        view_model::DashboardViewModel,
    };
    use movie_dashboard::services::api::{Endpoints, JsonSource};
    use movie_dashboard::services::loader::load_dashboard;
    use serde_json::{Value, json};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory backend keyed by endpoint path
    struct FakeBackend {
        bodies: HashMap<String, Value>,
        requested: RefCell<Vec<String>>,
    }

    impl FakeBackend {
        fn healthy() -> Self {
            let endpoints = Endpoints::default();
            let mut bodies = HashMap::new();

            bodies.insert(
                endpoints.distribution.clone(),
                json!({
                    "status": "success",
                    "data": [{"period": 1980, "count": 40}, {"period": 1990, "count": 95}],
                    "metadata": {"total_movies": 135},
                    "avg_votes": 125000,
                    "avg_rating": 6.48,
                    "avg_duration": 118.6
                }),
            );
            bodies.insert(
                endpoints.themes.clone(),
                json!({"data": {"drama": 5, "action": 3}}),
            );
            bodies.insert(
                endpoints.companies.clone(),
                json!({"data": [{"name": "Warner Bros.", "movie_count": 12}]}),
            );
            bodies.insert(
                endpoints.countries.clone(),
                json!({"data": [{"name": "France", "movie_count": 9}]}),
            );
            bodies.insert(
                endpoints.directors.clone(),
                json!({"data": [
                    {"director_name": "Agnès Varda", "movie_count": 8},
                    {"director_name": "Akira Kurosawa", "movie_count": 6}
                ]}),
            );
            bodies.insert(
                endpoints.top_rated.clone(),
                json!({"data": [{"title": "Seven Samurai", "rating": 8.6, "votes": 320000}]}),
            );

            Self {
                bodies,
                requested: RefCell::new(Vec::new()),
            }
        }

        fn without(mut self, path: &str) -> Self {
            self.bodies.remove(path);
            self
        }

        fn with_body(mut self, path: &str, body: Value) -> Self {
            self.bodies.insert(path.to_string(), body);
            self
        }
    }

    impl JsonSource for FakeBackend {
        async fn get_json(&self, path: &str) -> Result<Value, AppError> {
            self.requested.borrow_mut().push(path.to_string());
            self.bodies
                .get(path)
                .cloned()
                .ok_or_else(|| AppError::ApiError(format!("Network error: {path}")))
        }
    }

    /// Backend whose themes request fails while top-rated never answers
    struct StalledBackend {
        endpoints: Endpoints,
    }

    impl JsonSource for StalledBackend {
        async fn get_json(&self, path: &str) -> Result<Value, AppError> {
            if path == self.endpoints.top_rated {
                futures::future::pending::<()>().await;
            }
            if path == self.endpoints.themes {
                return Err(AppError::ApiError("Network error: themes".to_string()));
            }
            Ok(json!({"data": []}))
        }
    }

    fn load(backend: &FakeBackend) -> Result<DashboardViewModel, AppError> {
        block_on(load_dashboard(backend, &Endpoints::default()))
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_display() {
        let error = AppError::DataError("Invalid data".to_string());
        assert_eq!(error.to_string(), "Data error: Invalid data");
        assert_eq!(AppError::RateLimited.to_string(), "Rate limited");
    }

    // ===== Loader Tests =====

    #[test]
    fn test_load_requests_all_six_endpoints() {
        let backend = FakeBackend::healthy();
        load(&backend).unwrap();

        let mut requested = backend.requested.borrow().clone();
        requested.sort();
        let mut expected: Vec<String> = Endpoints::default()
            .all()
            .iter()
            .map(ToString::to_string)
            .collect();
        expected.sort();
        assert_eq!(requested, expected);
    }

    #[test]
    fn test_load_binds_payloads() {
        let view = load(&FakeBackend::healthy()).unwrap();

        assert_eq!(view.stats.total_movies, Some(135.0));
        assert_eq!(view.distribution.len(), 2);
        assert_eq!(view.distribution[1].decade, "1990");
        assert_eq!(view.companies[0].name, "Warner Bros.");
        assert_eq!(view.countries[0].name, "France");
        assert_eq!(view.directors[0].director_name, "Agnès Varda");
    }

    #[test]
    fn test_top_rated_result_is_not_bound() {
        let view = load(&FakeBackend::healthy()).unwrap();

        assert!(view.top_rated.is_empty());
        assert!(view.rating_trends.is_empty());
        assert!(view.rating_distribution.is_empty());
    }

    #[test]
    fn test_theme_mapping_normalized_in_key_order() {
        let view = load(&FakeBackend::healthy()).unwrap();

        assert_eq!(
            view.themes,
            vec![
                ThemeEntry {
                    theme: "drama".to_string(),
                    count: 5.0
                },
                ThemeEntry {
                    theme: "action".to_string(),
                    count: 3.0
                },
            ]
        );
    }

    #[test]
    fn test_theme_array_passes_through() {
        let endpoints = Endpoints::default();
        let backend = FakeBackend::healthy().with_body(
            &endpoints.themes,
            json!({"data": [{"theme": "war", "count": 2}, {"theme": "love", "count": 7}]}),
        );

        let view = load(&backend).unwrap();
        assert_eq!(view.themes[0].theme, "war");
        assert_eq!(view.themes[1].count, 7.0);
    }

    #[test]
    fn test_any_failed_fetch_fails_the_batch() {
        for path in Endpoints::default().all() {
            let backend = FakeBackend::healthy().without(path);
            let result = load(&backend);
            assert!(
                matches!(result, Err(AppError::ApiError(_))),
                "batch should fail when {path} fails"
            );
        }
    }

    #[test]
    fn test_first_error_resolves_without_waiting_for_pending_requests() {
        let endpoints = Endpoints::default();
        let backend = StalledBackend {
            endpoints: endpoints.clone(),
        };

        let result = block_on(load_dashboard(&backend, &endpoints));
        match result {
            Err(AppError::ApiError(msg)) => assert!(msg.contains("themes")),
            other => panic!("expected the themes error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_payload_fails_the_batch() {
        let endpoints = Endpoints::default();
        let backend =
            FakeBackend::healthy().with_body(&endpoints.directors, json!({"data": "oops"}));

        assert!(matches!(load(&backend), Err(AppError::DataError(_))));
    }

    #[test]
    fn test_normalize_themes_direct() {
        let themes = normalize_themes(&json!({"drama": 5, "action": 3})).unwrap();
        assert_eq!(themes[0].theme, "drama");
        assert_eq!(themes[1].theme, "action");
    }

    // ===== Formatting Tests =====

    #[test]
    fn test_summary_labels() {
        let view = load(&FakeBackend::healthy()).unwrap();
        let stats = &view.stats;

        assert_eq!(stats.total_movies_label(), "135");
        assert_eq!(stats.avg_votes_label(), "125.0k");
        assert_eq!(stats.avg_rating_label(), "6.5");
        assert_eq!(stats.avg_duration_label(), "119 min");
    }

    #[test]
    fn test_votes_in_millions() {
        assert_eq!(format_millions_of_votes(2_500_000.0), "2.5M votos");
        assert_eq!(format_millions_of_votes(320_000.0), "0.3M votos");
    }

    #[test]
    fn test_missing_stats_render_not_available() {
        let stats = MovieStats::from_payload(&json!({"data": []})).unwrap();
        assert_eq!(stats.total_movies_label(), "N/A");
        assert_eq!(stats.avg_duration_label(), "N/A");
    }

    // ===== DashboardState Tests =====

    #[test]
    fn test_dashboard_state_data_extraction() {
        let view = Rc::new(load(&FakeBackend::healthy()).unwrap());
        let loaded = DashboardState::Loaded(view.clone());

        assert_eq!(loaded.data(), Some(&view));
        assert!(DashboardState::Loading.data().is_none());
        assert!(DashboardState::Error("boom".to_string()).data().is_none());
    }

    #[test]
    fn test_series_follow_entries() {
        let view = load(&FakeBackend::healthy()).unwrap();
        let (labels, values) = view.distribution_series();

        assert_eq!(labels, vec!["1980", "1990"]);
        assert_eq!(values, vec![40.0, 95.0]);
        assert!(view.loaded_at <= Utc::now());
    }
}
