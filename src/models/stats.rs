use serde::Deserialize;
use serde_json::Value;

use super::error::AppError;

const NOT_AVAILABLE: &str = "N/A";

/// Aggregate figures shown on the summary cards.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MovieStats {
    #[serde(default)]
    pub total_movies: Option<f64>,
    #[serde(default)]
    pub avg_votes: Option<f64>,
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub avg_duration: Option<f64>,
}

#[derive(Deserialize)]
struct StatsMetadata {
    #[serde(default)]
    total_movies: Option<f64>,
}

impl MovieStats {
    /// Reads the stats from a whole response body.
    ///
    /// The distribution endpoint reports its movie count under `metadata`,
    /// so that value fills `total_movies` when the top level lacks one.
    pub fn from_payload(payload: &Value) -> Result<Self, AppError> {
        let mut stats = Self::deserialize(payload)?;

        if stats.total_movies.is_none() {
            if let Some(metadata) = payload.get("metadata") {
                let metadata = StatsMetadata::deserialize(metadata)?;
                stats.total_movies = metadata.total_movies;
            }
        }

        Ok(stats)
    }

    pub fn total_movies_label(&self) -> String {
        match self.total_movies {
            Some(total) if total != 0.0 => total.to_string(),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn avg_votes_label(&self) -> String {
        match self.avg_votes {
            Some(votes) if votes != 0.0 => format_thousands(votes),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    /// Zero is a real rating and still renders as `0.0`.
    pub fn avg_rating_label(&self) -> String {
        self.avg_rating
            .map_or_else(|| NOT_AVAILABLE.to_string(), |rating| format!("{rating:.1}"))
    }

    pub fn avg_duration_label(&self) -> String {
        match self.avg_duration {
            Some(minutes) if minutes != 0.0 => format_minutes(minutes),
            _ => NOT_AVAILABLE.to_string(),
        }
    }
}

/// `125000.0` -> `"125.0k"`
pub fn format_thousands(value: f64) -> String {
    format!("{:.1}k", value / 1_000.0)
}

/// `2500000` -> `"2.5M votos"`
pub fn format_millions_of_votes(votes: f64) -> String {
    format!("{:.1}M votos", votes / 1_000_000.0)
}

/// Rounds half away from zero, so `118.5` -> `"119 min"`.
#[allow(clippy::cast_possible_truncation)]
pub fn format_minutes(minutes: f64) -> String {
    format!("{} min", minutes.round() as i64)
}
