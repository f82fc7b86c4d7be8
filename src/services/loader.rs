use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::models::{
    entries::{data_field, normalize_themes, parse_optional_records, parse_records},
    error::AppError,
    stats::MovieStats,
    view_model::DashboardViewModel,
};
use crate::services::api::{Endpoints, JsonSource};

/// Raw bodies of one load batch, one per bound endpoint.
#[derive(Debug, Clone)]
pub struct Payloads {
    pub distribution: Value,
    pub themes: Value,
    pub companies: Value,
    pub countries: Value,
    pub directors: Value,
}

/// Fetches all six endpoints concurrently and builds the view model.
///
/// The batch fails as a whole: the first error drops the requests still in
/// flight and nothing is built.
pub async fn load_dashboard<S: JsonSource>(
    source: &S,
    endpoints: &Endpoints,
) -> Result<DashboardViewModel, AppError> {
    let (distribution, themes, companies, countries, directors, _top_rated) = futures::try_join!(
        source.get_json(&endpoints.distribution),
        source.get_json(&endpoints.themes),
        source.get_json(&endpoints.companies),
        source.get_json(&endpoints.countries),
        source.get_json(&endpoints.directors),
        source.get_json(&endpoints.top_rated),
    )?;

    build_view_model(
        &Payloads {
            distribution,
            themes,
            companies,
            countries,
            directors,
        },
        Utc::now(),
    )
}

/// Decodes a settled batch. Any malformed payload rejects the whole batch.
pub fn build_view_model(
    payloads: &Payloads,
    loaded_at: DateTime<Utc>,
) -> Result<DashboardViewModel, AppError> {
    Ok(DashboardViewModel {
        stats: MovieStats::from_payload(&payloads.distribution)?,
        distribution: parse_records(data_field(&payloads.distribution)?)?,
        themes: normalize_themes(data_field(&payloads.themes)?)?,
        companies: parse_optional_records(&payloads.companies)?,
        countries: parse_optional_records(&payloads.countries)?,
        directors: parse_records(data_field(&payloads.directors)?)?,
        rating_trends: Vec::new(),
        rating_distribution: Vec::new(),
        top_rated: Vec::new(),
        loaded_at,
    })
}
