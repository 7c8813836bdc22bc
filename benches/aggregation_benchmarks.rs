//! Performance benchmarks for the Staffing Insight Engine.
//!
//! This benchmark suite tracks the cost of the two read endpoints over
//! rosters of increasing size, plus the raw aggregation passes they are
//! built from.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use staffing_engine::aggregation::{compute_overtime_risks, compute_weekly_coverage, week_bounds};
use staffing_engine::api::{AppState, create_router};
use staffing_engine::clock::FixedClock;
use staffing_engine::config::EngineConfig;
use staffing_engine::models::{Assignment, Employee, Requirement, Rule, Shift, User};
use staffing_engine::store::{MemoryStore, ScheduleStore};

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tower::ServiceExt;

fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Seeds one org with `employee_count` employees, each working five 8-hour
/// shifts in the week of Monday 2026-01-12, plus one requirement per weekday.
fn seeded_store(employee_count: usize) -> MemoryStore {
    let mut store = MemoryStore::new();

    store.insert_rule(Rule {
        id: "rule_std".to_string(),
        name: "Standard week".to_string(),
        value: 40,
        org_id: "org_bench".to_string(),
    });

    for i in 0..employee_count {
        store.insert_user(User {
            id: format!("user_{i:04}"),
            name: format!("Employee {i:04}"),
            role: "employee".to_string(),
        });
        store.insert_employee(Employee {
            id: format!("emp_{i:04}"),
            user_id: format!("user_{i:04}"),
            org_id: "org_bench".to_string(),
            location_id: "loc_bench".to_string(),
            weekly_hours_limit: None,
            rule_id: Some("rule_std".to_string()),
            hourly_rate: Some(Decimal::new(2000, 2)),
        });

        for (d, day) in ["12", "13", "14", "15", "16"].iter().enumerate() {
            let shift_id = format!("shift_{i:04}_{d}");
            store.insert_shift(Shift {
                id: shift_id.clone(),
                org_id: "org_bench".to_string(),
                location_id: "loc_bench".to_string(),
                area_id: "area_bench".to_string(),
                date: make_date(&format!("2026-01-{day}")),
                start_time: "09:00".to_string(),
                end_time: "17:00".to_string(),
            });
            store.insert_assignment(Assignment {
                id: format!("asg_{i:04}_{d}"),
                shift_id,
                employee_id: format!("emp_{i:04}"),
                role_id: Some("role_bench".to_string()),
            });
        }
    }

    for day in ["monday", "tuesday", "wednesday", "thursday", "friday"] {
        store.insert_requirement(Requirement {
            id: format!("req_{day}"),
            org_id: "org_bench".to_string(),
            location_id: "loc_bench".to_string(),
            area_id: "area_bench".to_string(),
            role_id: "role_bench".to_string(),
            day_of_week: day.to_string(),
            count: 3,
        });
    }

    store
}

fn create_bench_state(employee_count: usize) -> AppState {
    AppState::new(
        Arc::new(seeded_store(employee_count)),
        EngineConfig::default(),
        Arc::new(FixedClock::new(make_date("2026-01-14"))),
    )
}

/// Benchmark: dashboard endpoint over rosters of increasing size.
fn bench_dashboard(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("dashboard");

    for employee_count in [10, 50, 200].iter() {
        let router = create_router(create_bench_state(*employee_count));

        group.throughput(Throughput::Elements(*employee_count as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            employee_count,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("GET")
                                .uri("/dashboard/stats")
                                .header("x-org-id", "org_bench")
                                .body(Body::empty())
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: payroll endpoint over rosters of increasing size.
fn bench_payroll(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("payroll");

    for employee_count in [10, 50, 200].iter() {
        let router = create_router(create_bench_state(*employee_count));

        group.throughput(Throughput::Elements(*employee_count as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            employee_count,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("GET")
                                .uri("/payroll?startDate=2026-01-12&endDate=2026-01-18&locationId=loc_bench")
                                .body(Body::empty())
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: the overtime scan by itself, without HTTP or store overhead.
fn bench_overtime_scan(c: &mut Criterion) {
    let store = seeded_store(200);
    let (start, end) = week_bounds(make_date("2026-01-14"));
    let roster = store.roster("org_bench").unwrap();
    let week_shifts = store
        .assigned_shifts_in_range("org_bench", start, end)
        .unwrap();
    let threshold = EngineConfig::default().overtime_risk_threshold;

    c.bench_function("overtime_scan_200", |b| {
        b.iter(|| {
            black_box(compute_overtime_risks(
                black_box(&roster),
                black_box(&week_shifts),
                40,
                threshold,
            ))
        })
    });
}

/// Benchmark: the weekly coverage pass by itself.
fn bench_coverage_pass(c: &mut Criterion) {
    let store = seeded_store(200);
    let (start, end) = week_bounds(make_date("2026-01-14"));
    let requirements = store.requirements("org_bench").unwrap();
    let week_shifts = store
        .assigned_shifts_in_range("org_bench", start, end)
        .unwrap();

    c.bench_function("coverage_pass_200", |b| {
        b.iter(|| {
            black_box(compute_weekly_coverage(
                black_box(&requirements),
                black_box(&week_shifts),
                start,
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_dashboard,
    bench_payroll,
    bench_overtime_scan,
    bench_coverage_pass,
);
criterion_main!(benches);
