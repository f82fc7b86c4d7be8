use chrono::{DateTime, Utc};

use super::entries::{
    CompanyEntry, CountryEntry, DirectorEntry, DistributionEntry, RatingDistributionEntry,
    RatingTrendEntry, ThemeEntry, TopRatedMovie,
};
use super::stats::MovieStats;

/// Everything the dashboard renders, built once per successful load.
///
/// The view is swapped in whole; no field is ever updated on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardViewModel {
    pub stats: MovieStats,
    pub distribution: Vec<DistributionEntry>,
    pub themes: Vec<ThemeEntry>,
    pub companies: Vec<CompanyEntry>,
    pub countries: Vec<CountryEntry>,
    pub directors: Vec<DirectorEntry>,
    /// No endpoint feeds these three yet; they render empty.
    pub rating_trends: Vec<RatingTrendEntry>,
    pub rating_distribution: Vec<RatingDistributionEntry>,
    pub top_rated: Vec<TopRatedMovie>,
    pub loaded_at: DateTime<Utc>,
}

impl DashboardViewModel {
    /// `(x, y)` series for the distribution-by-decade bar chart
    pub fn distribution_series(&self) -> (Vec<String>, Vec<f64>) {
        self.distribution
            .iter()
            .map(|e| (e.decade.clone(), e.count))
            .unzip()
    }

    pub fn theme_series(&self) -> (Vec<String>, Vec<f64>) {
        self.themes
            .iter()
            .map(|e| (e.theme.clone(), e.count))
            .unzip()
    }

    pub fn rating_trend_series(&self) -> (Vec<String>, Vec<f64>) {
        self.rating_trends
            .iter()
            .map(|e| (e.year.clone(), e.average_rating))
            .unzip()
    }

    pub fn rating_distribution_series(&self) -> (Vec<String>, Vec<f64>) {
        self.rating_distribution
            .iter()
            .map(|e| (e.rating.clone(), e.count))
            .unzip()
    }

    pub fn loaded_at_label(&self) -> String {
        self.loaded_at.format("%H:%M").to_string()
    }
}
