use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::error::AppError;

/// Custom deserializer for text fields that arrive as strings, numbers or null
fn deserialize_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "Expected a label, got '{}'",
            other
        ))),
    }
}

/// Custom deserializer for numeric fields; null reads as zero
fn deserialize_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DistributionEntry {
    /// The backend calls the bucket `period`
    #[serde(alias = "period", deserialize_with = "deserialize_label")]
    pub decade: String,
    #[serde(deserialize_with = "deserialize_number")]
    pub count: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeEntry {
    #[serde(deserialize_with = "deserialize_label")]
    pub theme: String,
    #[serde(deserialize_with = "deserialize_number")]
    pub count: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompanyEntry {
    #[serde(alias = "production_company", deserialize_with = "deserialize_label")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_number")]
    pub movie_count: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CountryEntry {
    #[serde(alias = "country", deserialize_with = "deserialize_label")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_number")]
    pub movie_count: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DirectorEntry {
    #[serde(deserialize_with = "deserialize_label")]
    pub director_name: String,
    #[serde(deserialize_with = "deserialize_number")]
    pub movie_count: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RatingDistributionEntry {
    #[serde(deserialize_with = "deserialize_label")]
    pub rating: String,
    #[serde(deserialize_with = "deserialize_number")]
    pub count: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RatingTrendEntry {
    #[serde(deserialize_with = "deserialize_label")]
    pub year: String,
    #[serde(deserialize_with = "deserialize_number")]
    pub average_rating: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TopRatedMovie {
    #[serde(deserialize_with = "deserialize_label")]
    pub title: String,
    #[serde(deserialize_with = "deserialize_number")]
    pub rating: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub votes: f64,
}

#[derive(Deserialize)]
struct WordCount {
    #[serde(default, deserialize_with = "deserialize_number")]
    count: f64,
}

/// A value in the theme mapping: a plain count, or the per-decade word list
/// the themes service returns.
#[derive(Deserialize)]
#[serde(untagged)]
enum ThemeCount {
    Count(f64),
    Words(Vec<WordCount>),
}

impl ThemeCount {
    fn total(&self) -> f64 {
        match self {
            Self::Count(count) => *count,
            Self::Words(words) => words.iter().map(|w| w.count).sum(),
        }
    }
}

/// Pulls the `data` member out of an endpoint's response body.
pub fn data_field(payload: &Value) -> Result<&Value, AppError> {
    payload
        .get("data")
        .ok_or_else(|| AppError::DataError("Response has no 'data' field".to_string()))
}

/// Decodes a `data` array into typed records.
pub fn parse_records<T>(data: &Value) -> Result<Vec<T>, AppError>
where
    T: for<'de> Deserialize<'de>,
{
    Ok(Vec::<T>::deserialize(data)?)
}

/// Decodes records for slots nothing renders.
///
/// Accepts a `{data: [...]}` body or a bare list; any other shape reads as
/// no records.
pub fn parse_optional_records<T>(payload: &Value) -> Result<Vec<T>, AppError>
where
    T: for<'de> Deserialize<'de>,
{
    let data = payload.get("data").unwrap_or(payload);
    if data.is_array() {
        parse_records(data)
    } else {
        Ok(Vec::new())
    }
}

/// Normalizes the themes payload into a sequence of entries.
///
/// A sequence is taken as-is. A mapping becomes one entry per key, in the
/// mapping's insertion order.
pub fn normalize_themes(data: &Value) -> Result<Vec<ThemeEntry>, AppError> {
    match data {
        Value::Array(_) => parse_records(data),
        Value::Object(map) => map
            .iter()
            .map(|(theme, count)| {
                let count = ThemeCount::deserialize(count).map_err(|_| {
                    AppError::DataError(format!("Theme '{theme}' has no usable count"))
                })?;
                Ok(ThemeEntry {
                    theme: theme.clone(),
                    count: count.total(),
                })
            })
            .collect(),
        other => Err(AppError::DataError(format!(
            "Themes must be a list or a mapping, got '{other}'"
        ))),
    }
}
