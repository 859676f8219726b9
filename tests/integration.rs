//! Integration tests for the Timecard Engine.
//!
//! This test suite covers the full pipeline against the sample dataset:
//! - Regular-only weeks
//! - Weeks crossing into overtime
//! - Weeks crossing into doubletime
//! - Batch ordering and isolation
//! - Error cases
//! - The HTTP endpoint

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use timecard_engine::api::{AppState, create_router};
use timecard_engine::calculation::{
    calculate_employee_timecard, calculate_employee_timecard_breakdown,
    calculate_employee_timecards, calculate_employee_timecards_isolated,
    calculate_timepunch_hours, format_fixed,
};
use timecard_engine::config::{ConfigLoader, Dataset, JobRateTable, load_dataset};
use timecard_engine::error::EngineError;
use timecard_engine::models::{Employee, EmployeeTimecard, Timepunch};

// =============================================================================
// Test Helpers
// =============================================================================

fn dataset() -> Dataset {
    load_dataset("./data/timecards.json").expect("Failed to load dataset")
}

fn rates() -> JobRateTable {
    JobRateTable::from_jobs(dataset().jobs).expect("Failed to build job table")
}

fn employee(name: &str) -> Employee {
    dataset()
        .employees
        .into_iter()
        .find(|e| e.name == name)
        .expect("Employee missing from dataset")
}

fn timecard(
    employee: &str,
    regular: &str,
    overtime: &str,
    doubletime: &str,
    wage_total: &str,
    benefit_total: &str,
) -> EmployeeTimecard {
    EmployeeTimecard {
        employee: employee.to_string(),
        regular: regular.to_string(),
        overtime: overtime.to_string(),
        doubletime: doubletime.to_string(),
        wage_total: wage_total.to_string(),
        benefit_total: benefit_total.to_string(),
    }
}

fn expected_mike() -> EmployeeTimecard {
    timecard("Mike", "39.2856", "0.0000", "0.0000", "943.5819", "33.8080")
}

fn expected_steve() -> EmployeeTimecard {
    timecard("Steve", "40.0000", "8.0000", "1.1658", "1325.3896", "40.4573")
}

fn expected_alex() -> EmployeeTimecard {
    timecard("Alex", "40.0000", "3.6428", "0.0000", "808.0333", "42.0714")
}

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config").expect("Failed to load config");
    create_router(AppState::new(config))
}

async fn post_timecards(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/timecards")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

// =============================================================================
// Single employee
// =============================================================================

#[test]
fn test_employee_without_overtime() {
    let result = calculate_employee_timecard(&employee("Mike"), &rates()).unwrap();
    assert_eq!(result, expected_mike());
}

#[test]
fn test_employee_with_overtime() {
    let result = calculate_employee_timecard(&employee("Alex"), &rates()).unwrap();
    assert_eq!(result, expected_alex());
}

#[test]
fn test_employee_with_overtime_and_doubletime() {
    let result = calculate_employee_timecard(&employee("Steve"), &rates()).unwrap();
    assert_eq!(result, expected_steve());
}

#[test]
fn test_tier_totals_account_for_every_hour() {
    let rates = rates();

    for employee in dataset().employees {
        let breakdown = calculate_employee_timecard_breakdown(&employee, &rates).unwrap();
        let elapsed: f64 = employee
            .timepunches
            .iter()
            .map(|t| calculate_timepunch_hours(t).unwrap())
            .sum();

        assert!(
            (breakdown.totals.total_hours() - elapsed).abs() < 1e-9,
            "hours lost for {}",
            employee.name
        );
        assert!(breakdown.totals.regular <= 40.0);
        assert!(breakdown.totals.overtime <= 8.0);
    }
}

#[test]
fn test_timecard_is_idempotent() {
    let rates = rates();
    let steve = employee("Steve");

    assert_eq!(
        calculate_employee_timecard(&steve, &rates).unwrap(),
        calculate_employee_timecard(&steve, &rates).unwrap()
    );
}

#[test]
fn test_reordering_timepunches_moves_overtime_between_jobs() {
    let rates = rates();
    let mut steve = employee("Steve");
    let in_order = calculate_employee_timecard(&steve, &rates).unwrap();

    steve.timepunches.reverse();
    let reversed = calculate_employee_timecard(&steve, &rates).unwrap();

    // Hour totals do not depend on order, pay does.
    assert_eq!(reversed.regular, in_order.regular);
    assert_eq!(reversed.overtime, in_order.overtime);
    assert_eq!(reversed.doubletime, in_order.doubletime);
    assert_eq!(reversed.benefit_total, in_order.benefit_total);
    assert_ne!(reversed.wage_total, in_order.wage_total);
}

#[test]
fn test_pay_totals_round_from_the_accumulated_doubles() {
    // Each day is 1h 05m 15s. A single day's benefit rounds down from a
    // double just below 0.54375, while the weekly sum is exactly 2.71875 in
    // binary and rounds up.
    let timepunches = (14..=18)
        .map(|day| {
            Timepunch::new(
                "Hospital - Laborer",
                format!("2022-02-{} 08:00:00", day),
                format!("2022-02-{} 09:05:15", day),
            )
        })
        .collect();
    let employee = Employee::new("Tie", timepunches);

    let breakdown = calculate_employee_timecard_breakdown(&employee, &rates()).unwrap();
    let timecard = breakdown.to_timecard();

    assert_eq!(format_fixed(breakdown.timepunches[0].benefit), "0.5437");
    assert_eq!(timecard.regular, "5.4375");
    assert_eq!(timecard.wage_total, "108.7500");
    assert_eq!(timecard.benefit_total, "2.7188");
}

// =============================================================================
// Timepunch hours
// =============================================================================

#[test]
fn test_timepunch_hours() {
    let punch = Timepunch::new("anything", "2022-02-19 07:03:41", "2022-02-19 10:00:45");

    let hours = calculate_timepunch_hours(&punch).unwrap();

    assert_eq!(format_fixed(hours), "2.9511");
}

#[test]
fn test_timepunch_hours_without_seconds_or_time() {
    let minutes = Timepunch::new("anything", "2022-02-19 07:03", "2022-02-19T10:00");
    let days = Timepunch::new("anything", "2022-02-19", "2022-02-20");

    assert_eq!(calculate_timepunch_hours(&minutes).unwrap(), 2.95);
    assert_eq!(calculate_timepunch_hours(&days).unwrap(), 24.0);
}

#[test]
fn test_timepunch_hours_ignore_ordering() {
    let forward = Timepunch::new("anything", "2022-02-19 07:03:41", "2022-02-19 10:00:45");
    let backward = Timepunch::new("anything", "2022-02-19 10:00:45", "2022-02-19 07:03:41");

    assert_eq!(
        calculate_timepunch_hours(&forward).unwrap(),
        calculate_timepunch_hours(&backward).unwrap()
    );
}

// =============================================================================
// Batch
// =============================================================================

#[test]
fn test_batch_of_employees() {
    let timecards = calculate_employee_timecards(&dataset().employees, &rates()).unwrap();

    assert_eq!(
        timecards,
        vec![expected_mike(), expected_steve(), expected_alex()]
    );
}

#[test]
fn test_batch_with_yaml_job_table_matches_dataset_jobs() {
    let config = ConfigLoader::load("./config").unwrap();

    let timecards = calculate_employee_timecards(&dataset().employees, config.rates()).unwrap();

    assert_eq!(timecards[1], expected_steve());
}

#[test]
fn test_isolated_batch_keeps_good_employees() {
    let mut employees = dataset().employees;
    employees.insert(1, Employee::new("Nobody", vec![]));

    let results = calculate_employee_timecards_isolated(&employees, &rates());

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().unwrap(), &expected_mike());
    assert!(matches!(
        results[1],
        Err(EngineError::EmptyTimepunchList { .. })
    ));
    assert_eq!(results[2].as_ref().unwrap(), &expected_steve());
    assert_eq!(results[3].as_ref().unwrap(), &expected_alex());
}

// =============================================================================
// Error cases
// =============================================================================

#[test]
fn test_unknown_job_raises_job_not_found() {
    let employee = Employee::new(
        "Mike",
        vec![Timepunch::new(
            "Warehouse - Driver",
            "2022-02-14 08:00:00",
            "2022-02-14 16:00:00",
        )],
    );

    match calculate_employee_timecard(&employee, &rates()).unwrap_err() {
        EngineError::JobNotFound { job } => assert_eq!(job, "Warehouse - Driver"),
        other => panic!("Expected JobNotFound, got {:?}", other),
    }
}

#[test]
fn test_empty_timepunch_list_raises_error() {
    match calculate_employee_timecard(&Employee::new("Mike", vec![]), &rates()).unwrap_err() {
        EngineError::EmptyTimepunchList { employee } => assert_eq!(employee, "Mike"),
        other => panic!("Expected EmptyTimepunchList, got {:?}", other),
    }
}

#[test]
fn test_one_bad_employee_aborts_the_batch() {
    let mut employees = dataset().employees;
    employees[2].timepunches[0].start = "not a timestamp".to_string();

    assert!(matches!(
        calculate_employee_timecards(&employees, &rates()),
        Err(EngineError::InvalidTimestamp { .. })
    ));
}

// =============================================================================
// HTTP API
// =============================================================================

#[tokio::test]
async fn test_api_returns_dataset_timecards() {
    let employees = serde_json::to_value(dataset().employees).unwrap();

    let (status, body) =
        post_timecards(create_router_for_test(), json!({ "employees": employees })).await;

    assert_eq!(status, StatusCode::OK);
    let timecards = body["timecards"].as_array().unwrap();
    assert_eq!(timecards.len(), 3);
    assert_eq!(timecards[1]["employee"], "Steve");
    assert_eq!(timecards[1]["doubletime"], "1.1658");
    assert_eq!(timecards[1]["wageTotal"], "1325.3896");
    assert_eq!(timecards[2]["overtime"], "3.6428");
    assert!(body["calculation_id"].is_string());
    assert!(body["failures"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_api_unknown_job_is_bad_request() {
    let body = json!({
        "employees": [{
            "employee": "Mike",
            "timepunches": [
                {"job": "Warehouse - Driver", "start": "2022-02-14 08:00:00", "end": "2022-02-14 16:00:00"}
            ]
        }]
    });

    let (status, body) = post_timecards(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "JOB_NOT_FOUND");
}

#[tokio::test]
async fn test_api_invalid_timestamp_is_bad_request() {
    let body = json!({
        "employees": [{
            "employee": "Mike",
            "timepunches": [
                {"job": "Shop - Laborer", "start": "Monday morning", "end": "2022-02-14 16:00:00"}
            ]
        }]
    });

    let (status, body) = post_timecards(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_TIMESTAMP");
    assert!(body["message"].as_str().unwrap().contains("Monday morning"));
}

#[tokio::test]
async fn test_api_isolated_mode() {
    let body = json!({
        "batch_mode": "isolated",
        "employees": [
            {"employee": "Nobody", "timepunches": []},
            {
                "employee": "Alex",
                "timepunches": [
                    {"job": "Shop - Laborer", "start": "2022-02-14 08:00:00", "end": "2022-02-14 17:00:00"}
                ]
            }
        ]
    });

    let (status, body) = post_timecards(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timecards"][0]["employee"], "Alex");
    assert_eq!(body["failures"][0]["employee"], "Nobody");
    assert_eq!(body["failures"][0]["error"]["code"], "EMPTY_TIMEPUNCH_LIST");
}
