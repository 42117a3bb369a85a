use console::Style;
use indicatif::ProgressBar;
use reqwest::StatusCode;

use crate::client::{ApiResponse, BackendClient, ClientError};
use crate::progress::{check_spinner, finish_check};
use crate::types::{
    AirQualityReading, BatchReadings, BatchRequest, CheckResult, Location, fmt_metric, fmt_text,
};

/// Reference location for the single-fetch check.
const SINGLE_CITY: (f64, f64, &str) = (27.7172, 85.3240, "Kathmandu");

fn batch_locations() -> Vec<Location> {
    vec![
        Location {
            lat: 27.7172,
            lng: 85.3240,
            city: "Kathmandu".to_string(),
        },
        Location {
            lat: 28.2096,
            lng: 83.9856,
            city: "Pokhara".to_string(),
        },
        Location {
            lat: 27.6588,
            lng: 85.3240,
            city: "Lalitpur".to_string(),
        },
    ]
}

/// Run every routine in its fixed order. A routine that fails never stops the
/// ones after it; each failure is folded into its own CheckResult.
pub async fn run_all(client: &BackendClient, verbose: bool) -> Vec<CheckResult> {
    vec![
        health_check(client, verbose).await,
        single_fetch_check(client, verbose).await,
        batch_fetch_check(client, verbose).await,
        error_handling_check(client, verbose).await,
    ]
}

/// The backend is alive if /health answers within the quick timeout with a
/// decodable JSON payload.
pub async fn health_check(client: &BackendClient, verbose: bool) -> CheckResult {
    let pb = check_spinner("Checking /health ...");
    match client.get_health().await {
        Ok(resp) => match serde_json::from_str::<serde_json::Value>(&resp.body) {
            Ok(payload) => {
                finish_check(&pb, true);
                println!("  payload: {payload}");
                if verbose {
                    println!("  raw: {}", resp.body.trim());
                }
                CheckResult::pass("Health Check", format!("{} in {:?}", resp.status, resp.duration))
            }
            Err(e) => {
                finish_check(&pb, false);
                println!("  payload is not JSON: {e}");
                CheckResult::fail(
                    "Health Check",
                    format!("{} but payload is not JSON: {e}", resp.status),
                )
            }
        },
        Err(e) => fail_transport(&pb, "Health Check", &e, client),
    }
}

/// One parameterized read for the reference city. Passes on any OK-class
/// status with a decodable reading; absent fields display as placeholders.
pub async fn single_fetch_check(client: &BackendClient, verbose: bool) -> CheckResult {
    let (lat, lng, city) = SINGLE_CITY;
    let pb = check_spinner(&format!("Fetching air quality for {city} ..."));
    match client.get_air_quality(lat, lng, city).await {
        Ok(resp) if resp.status.is_success() => {
            match serde_json::from_str::<AirQualityReading>(&resp.body) {
                Ok(reading) => {
                    finish_check(&pb, true);
                    print_reading(&reading);
                    if verbose {
                        println!("  raw: {}", resp.body.trim());
                    }
                    CheckResult::pass(
                        "Single City Fetch",
                        format!("{} for {city} in {:?}", resp.status, resp.duration),
                    )
                }
                Err(e) => {
                    finish_check(&pb, false);
                    println!("  malformed payload: {e}");
                    CheckResult::fail(
                        "Single City Fetch",
                        format!("{} but malformed payload: {e}", resp.status),
                    )
                }
            }
        }
        Ok(resp) => {
            finish_check(&pb, false);
            let excerpt = error_excerpt(&resp);
            println!("  {} {excerpt}", resp.status);
            CheckResult::fail(
                "Single City Fetch",
                format!("expected 200 OK, got {}: {excerpt}", resp.status),
            )
        }
        Err(e) => fail_transport(&pb, "Single City Fetch", &e, client),
    }
}

/// One write-style request carrying three locations. Passes when the backend
/// answers OK with a city-to-reading mapping.
pub async fn batch_fetch_check(client: &BackendClient, verbose: bool) -> CheckResult {
    let batch = BatchRequest {
        locations: batch_locations(),
    };
    let pb = check_spinner(&format!(
        "Fetching batch air quality for {} cities ...",
        batch.locations.len()
    ));
    match client.post_air_quality_batch(&batch).await {
        Ok(resp) if resp.status.is_success() => {
            match serde_json::from_str::<BatchReadings>(&resp.body) {
                Ok(readings) => {
                    finish_check(&pb, true);
                    for (city, reading) in &readings {
                        println!(
                            "  {city}: aqi {} ({})",
                            fmt_metric(reading.aqi),
                            fmt_text(reading.provider.as_deref())
                        );
                    }
                    if verbose {
                        println!("  raw: {}", resp.body.trim());
                    }
                    CheckResult::pass(
                        "Batch Fetch",
                        format!("{} readings in {:?}", readings.len(), resp.duration),
                    )
                }
                Err(e) => {
                    finish_check(&pb, false);
                    println!("  payload is not a city mapping: {e}");
                    CheckResult::fail(
                        "Batch Fetch",
                        format!("{} but payload is not a city mapping: {e}", resp.status),
                    )
                }
            }
        }
        Ok(resp) => {
            finish_check(&pb, false);
            let excerpt = error_excerpt(&resp);
            println!("  {} {excerpt}", resp.status);
            CheckResult::fail(
                "Batch Fetch",
                format!("expected 200 OK, got {}: {excerpt}", resp.status),
            )
        }
        Err(e) => fail_transport(&pb, "Batch Fetch", &e, client),
    }
}

/// The backend must reject a parameterless request with 400. Anything else,
/// a transport failure included, counts as a failed check.
pub async fn error_handling_check(client: &BackendClient, verbose: bool) -> CheckResult {
    let pb = check_spinner("Probing input validation (missing parameters) ...");
    match client.get_air_quality_unparameterized().await {
        Ok(resp) if resp.status == StatusCode::BAD_REQUEST => {
            finish_check(&pb, true);
            println!("  rejected with {}: {}", resp.status, error_excerpt(&resp));
            if verbose {
                println!("  raw: {}", resp.body.trim());
            }
            CheckResult::pass("Error Handling", format!("{} as expected", resp.status))
        }
        Ok(resp) => {
            finish_check(&pb, false);
            println!("  expected 400 Bad Request, got {}", resp.status);
            CheckResult::fail(
                "Error Handling",
                format!("expected 400 Bad Request, got {}", resp.status),
            )
        }
        Err(e) => fail_transport(&pb, "Error Handling", &e, client),
    }
}

fn print_reading(reading: &AirQualityReading) {
    println!("  provider:    {}", fmt_text(reading.provider.as_deref()));
    println!("  aqi:         {}", fmt_metric(reading.aqi));
    println!("  pm2.5:       {}", fmt_metric(reading.pm25));
    println!("  pm10:        {}", fmt_metric(reading.pm10));
    println!("  temperature: {} C", fmt_metric(reading.temperature));
    println!("  humidity:    {} %", fmt_metric(reading.humidity));
    println!("  wind speed:  {} km/h", fmt_metric(reading.wind_speed));
}

/// Pull the backend's error description out of a non-OK response, falling
/// back to the first body line when the body is not the usual error shape.
fn error_excerpt(resp: &ApiResponse) -> String {
    match serde_json::from_str::<crate::types::ApiErrorBody>(&resp.body) {
        Ok(body) => match body.message {
            Some(message) => format!("{} ({message})", body.error),
            None => body.error,
        },
        Err(_) => resp.body.lines().next().unwrap_or("").trim().to_string(),
    }
}

fn fail_transport(
    pb: &ProgressBar,
    name: &str,
    err: &ClientError,
    client: &BackendClient,
) -> CheckResult {
    finish_check(pb, false);
    println!("  {}", Style::new().red().apply_to(err));
    let result = CheckResult::fail(name, err.to_string());
    if matches!(err, ClientError::Connect { .. }) {
        result.with_hint(format!(
            "Make sure the backend is running at {} (cd backend && npm run dev)",
            client.base_url()
        ))
    } else {
        result
    }
}
