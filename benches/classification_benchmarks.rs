//! Performance benchmarks for the compliance engine.
//!
//! This benchmark suite verifies that classification meets performance targets:
//! - Single employee: < 100μs mean
//! - Fleet of 100 employees: < 5ms mean
//! - Fleet of 1000 employees: < 50ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use compliance_engine::api::{AppState, create_router};
use compliance_engine::config::ConfigLoader;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/compliance").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a classification request with the specified number of employees.
///
/// Expiry dates cycle across the classifier windows so every status bucket
/// gets exercised.
fn create_request_body(employee_count: usize) -> String {
    let expiry_dates = [
        "2026-08-03", // expired
        "2026-08-11", // critical
        "2026-08-20", // warning
        "2026-09-20", // upcoming
        "2026-11-04", // valid
    ];

    let employees: Vec<serde_json::Value> = (0..employee_count)
        .map(|i| {
            serde_json::json!({
                "id": format!("emp_{:04}", i),
                "name": format!("Employee {}", i),
                "branch": if i % 2 == 0 { "riyadh_main" } else { "jeddah_corniche" },
                "documents": {
                    "iqama": {
                        "expiry_date": expiry_dates[i % expiry_dates.len()],
                        "has_image": true
                    },
                    "health_certificate": {
                        "expiry_date": expiry_dates[(i + 1) % expiry_dates.len()],
                        "has_image": false
                    },
                    "contract": if i % 7 == 0 {
                        serde_json::json!({})
                    } else {
                        serde_json::json!({ "expiry_date": expiry_dates[(i + 2) % expiry_dates.len()] })
                    }
                }
            })
        })
        .collect();

    let request_json = serde_json::json!({
        "as_of": "2026-08-06T10:30:00",
        "employees": employees
    });

    request_json.to_string()
}

/// Benchmark: Single employee classification.
///
/// Target: < 100μs mean
fn bench_single_employee(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_request_body(1);

    c.bench_function("single_employee", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/classify")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Fleets of increasing size.
///
/// Targets: 100 employees < 5ms mean, 1000 employees < 50ms mean
fn bench_fleet_sizes(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("fleet_classification");
    for size in [100usize, 1000] {
        let body = create_request_body(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &body, |b, body| {
            b.to_async(&rt).iter(|| async {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/classify")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_employee, bench_fleet_sizes);
criterion_main!(benches);
