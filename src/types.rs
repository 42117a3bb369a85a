use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Outcome of one verification routine.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl CheckResult {
    pub fn pass(name: &str, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            detail: detail.into(),
            hint: None,
        }
    }

    pub fn fail(name: &str, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            detail: detail.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// One location record as the batch endpoint expects it.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub city: String,
}

/// Body of a POST /api/air-quality/batch request.
#[derive(Debug, Serialize)]
pub struct BatchRequest {
    pub locations: Vec<Location>,
}

/// Air-quality reading as returned by the backend. Every field is optional:
/// which ones are populated depends on which upstream provider answered.
#[derive(Debug, Deserialize)]
pub struct AirQualityReading {
    pub aqi: Option<f64>,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub co: Option<f64>,
    pub no2: Option<f64>,
    pub so2: Option<f64>,
    pub o3: Option<f64>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    #[serde(rename = "windSpeed")]
    pub wind_speed: Option<f64>,
    pub provider: Option<String>,
    pub city: Option<String>,
    pub timestamp: Option<String>,
}

/// Batch responses map city label to reading. BTreeMap keeps display order
/// stable across runs.
pub type BatchReadings = BTreeMap<String, AirQualityReading>;

/// Error body the backend uses for 4xx/5xx answers.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub message: Option<String>,
}

/// Render an optional numeric field, substituting a placeholder when the
/// provider did not report it.
pub fn fmt_metric(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => format!("{v:.1}"),
        None => "n/a".to_string(),
    }
}

pub fn fmt_text(value: Option<&str>) -> &str {
    value.unwrap_or("n/a")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_deserializes_full_payload() {
        let json = r#"{
            "aqi": 156, "pm25": 88, "pm10": 120, "co": 250.5, "no2": 12.3,
            "so2": 4.1, "o3": 60.2, "temperature": 22, "humidity": 61,
            "windSpeed": 7, "provider": "Open-Meteo",
            "timestamp": "2025-01-01T00:00:00.000Z", "city": "Kathmandu"
        }"#;
        let reading: AirQualityReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.aqi, Some(156.0));
        assert_eq!(reading.wind_speed, Some(7.0));
        assert_eq!(reading.provider.as_deref(), Some("Open-Meteo"));
    }

    #[test]
    fn test_reading_tolerates_missing_and_unknown_fields() {
        let json = r#"{"aqi": 55, "provider": "WAQI", "coordinates": {"lat": 27.7, "lng": 85.3}}"#;
        let reading: AirQualityReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.aqi, Some(55.0));
        assert!(reading.pm25.is_none());
        assert!(reading.temperature.is_none());
    }

    #[test]
    fn test_batch_request_serializes_expected_shape() {
        let request = BatchRequest {
            locations: vec![Location {
                lat: 27.7172,
                lng: 85.3240,
                city: "Kathmandu".to_string(),
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["locations"][0]["city"], "Kathmandu");
        assert_eq!(json["locations"][0]["lat"], 27.7172);
    }

    #[test]
    fn test_fmt_metric_substitutes_placeholder() {
        assert_eq!(fmt_metric(Some(42.0)), "42");
        assert_eq!(fmt_metric(Some(61.5)), "61.5");
        assert_eq!(fmt_metric(None), "n/a");
    }

    #[test]
    fn test_check_result_json_omits_empty_hint() {
        let result = CheckResult::pass("Health Check", "200 OK");
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("hint").is_none());
        assert_eq!(json["passed"], true);
    }
}
