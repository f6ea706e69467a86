//! Response envelopes returned by the record store
//!
//! Every endpoint wraps its payload in a `success`/`message` envelope.
//! Write endpoints additionally report a per-record outcome list, since a
//! batch can partially fail while the request itself succeeds.

use serde::Deserialize;

/// Envelope for query endpoints. `data` is absent on failure.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct FetchEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope for create, update and delete endpoints.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct WriteEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub results: Vec<RecordResult<T>>,
}

/// Outcome for a single record within a write batch.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct RecordResult<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_envelope_tolerates_missing_data_on_failure() {
        let envelope: FetchEnvelope<Vec<i64>> =
            serde_json::from_str(r#"{"success":false,"message":"no such collection"}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("no such collection"));
    }

    #[test]
    fn write_envelope_carries_per_record_outcomes() {
        let envelope: WriteEnvelope<i64> = serde_json::from_str(
            r#"{"success":true,"results":[{"success":true,"data":7},{"success":false,"message":"bad row"}]}"#,
        )
        .unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.results.len(), 2);
        assert_eq!(envelope.results[0].data, Some(7));
        assert_eq!(envelope.results[1].message.as_deref(), Some("bad row"));
    }
}
