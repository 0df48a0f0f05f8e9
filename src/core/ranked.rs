use serde::Serialize;
use serde_json::Value;

/// Ranked match returned to the caller: the original payload plus its score.
///
/// Serializes as the payload's own fields with an added `match` field, so the
/// payload must serialize to a map (struct or map type).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult<T> {
    /// Caller-owned record that matched
    #[serde(flatten)]
    pub payload: T,

    /// Similarity score (0.0 - 1.0)
    #[serde(rename = "match")]
    pub score: f64,
}

impl<T> RankedResult<T> {
    pub fn new(payload: T, score: f64) -> Self {
        Self { payload, score }
    }
}

/// Flatten ranked results into JSON objects for an external response.
///
/// Results whose payload cannot be represented as a JSON object are skipped
/// and logged; the remaining rows keep their order.
pub fn to_json_rows<T: Serialize>(results: &[RankedResult<T>]) -> Vec<Value> {
    results
        .iter()
        .enumerate()
        .filter_map(|(rank, result)| match serde_json::to_value(result) {
            Ok(row @ Value::Object(_)) => Some(row),
            Ok(other) => {
                tracing::warn!(rank, kind = ?other, "skipping result that is not a JSON object");
                None
            }
            Err(e) => {
                tracing::warn!(rank, error = %e, "skipping result that failed to serialize");
                None
            }
        })
        .collect()
}
