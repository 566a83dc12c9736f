//! End-to-end tests driving the router without a network socket.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use spendwise_api::{AppState, create_router};
use spendwise_core::period::FixedClock;
use spendwise_db::Store;
use tower::ServiceExt;

const USER: &str = "0192a0c4-6d1e-7cc4-a5a6-0f4e2b1c9d01";
const OTHER_USER: &str = "0192a0c4-6d1e-7cc4-a5a6-0f4e2b1c9d02";

fn app() -> Router {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
    create_router(AppState::new(Store::new(), Arc::new(FixedClock::new(now))))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn decimal(value: &Value) -> Decimal {
    serde_json::from_value(value.clone()).unwrap()
}

async fn expense(app: &Router, category: &str, amount: &str, date: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        &format!("/api/v1/users/{USER}/transactions"),
        Some(json!({
            "amount": amount,
            "category": category,
            "type": "expense",
            "date": date,
            "description": format!("{category} purchase"),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

async fn budget(app: &Router, category: &str, amount: &str, period: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        &format!("/api/v1/users/{USER}/budgets"),
        Some(json!({ "category": category, "amount": amount, "period": period })),
    )
    .await
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "spendwise");
    assert_eq!(body["now"], "2026-10-19T12:00:00Z");
}

#[tokio::test]
async fn test_transaction_lifecycle() {
    let app = app();
    let created = expense(&app, "Groceries", "42.50", "2026-10-05T10:00:00Z").await;
    let uri = format!("/api/v1/users/{USER}/transactions/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "Groceries");
    assert_eq!(body["type"], "expense");

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "amount": "40" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&body["amount"]), Decimal::from(40));

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_transaction_list_filters_and_isolation() {
    let app = app();
    expense(&app, "Groceries", "30", "2026-10-01T08:00:00Z").await;
    expense(&app, "Dining", "25", "2026-10-10T19:30:00Z").await;

    let (_, all) = send(&app, Method::GET, &format!("/api/v1/users/{USER}/transactions"), None).await;
    let all = all.as_array().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0]["category"], "Dining");

    let (_, filtered) = send(
        &app,
        Method::GET,
        &format!("/api/v1/users/{USER}/transactions?search=grocer"),
        None,
    )
    .await;
    assert_eq!(filtered.as_array().unwrap().len(), 1);

    let (_, blank_category) = send(
        &app,
        Method::GET,
        &format!("/api/v1/users/{USER}/transactions?category="),
        None,
    )
    .await;
    assert_eq!(blank_category.as_array().unwrap().len(), 2);

    let (_, other) = send(
        &app,
        Method::GET,
        &format!("/api/v1/users/{OTHER_USER}/transactions"),
        None,
    )
    .await;
    assert!(other.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_transaction_amount_is_bad_request() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/v1/users/{USER}/transactions"),
        Some(json!({
            "amount": "0",
            "category": "Groceries",
            "type": "expense",
            "date": "2026-10-05T10:00:00Z",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_amount_above_limit_is_bad_request() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/v1/users/{USER}/transactions"),
        Some(json!({
            "amount": "1000000000000.01",
            "category": "Yachts",
            "type": "expense",
            "date": "2026-10-05T10:00:00Z",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");

    let (status, _) = budget(&app, "Yachts", "5000000000000", "monthly").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_budget_create_conflict_and_validation() {
    let app = app();

    let (status, body) = budget(&app, "Groceries", "200", "monthly").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["period"], "monthly");

    let (status, body) = budget(&app, "Groceries", "300", "monthly").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");

    let (status, _) = budget(&app, "Groceries", "2400", "yearly").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = budget(&app, "Dining", "-5", "monthly").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = budget(&app, "Dining", "50", "weekly").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_budget_list_defaults_to_monthly() {
    let app = app();
    budget(&app, "Rent", "1000", "monthly").await;
    budget(&app, "Insurance", "600", "yearly").await;

    let (_, monthly) = send(&app, Method::GET, &format!("/api/v1/users/{USER}/budgets"), None).await;
    let monthly = monthly.as_array().unwrap();
    assert_eq!(monthly.len(), 1);
    assert_eq!(monthly[0]["category"], "Rent");

    let (_, yearly) = send(
        &app,
        Method::GET,
        &format!("/api/v1/users/{USER}/budgets?period=yearly"),
        None,
    )
    .await;
    assert_eq!(yearly[0]["category"], "Insurance");
}

#[tokio::test]
async fn test_budget_update_and_delete() {
    let app = app();
    let (_, created) = budget(&app, "Dining", "100", "monthly").await;
    let uri = format!("/api/v1/users/{USER}/budgets/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "period": "quarterly" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["period"], "quarterly");

    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({ "period": "daily" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_budget_summary() {
    let app = app();
    budget(&app, "Groceries", "200", "monthly").await;
    budget(&app, "Dining", "100", "monthly").await;
    expense(&app, "Groceries", "150", "2026-10-03T12:00:00Z").await;
    expense(&app, "Dining", "130", "2026-10-12T12:00:00Z").await;
    // Outside the current month.
    expense(&app, "Groceries", "500", "2026-09-30T23:59:59Z").await;
    // No budget for this category.
    expense(&app, "Travel", "999", "2026-10-15T12:00:00Z").await;

    let (status, report) = send(
        &app,
        Method::GET,
        &format!("/api/v1/users/{USER}/budgets/summary?period=monthly"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["period"], "monthly");
    assert_eq!(report["start_date"], "2026-10-01T00:00:00Z");

    let budgets = report["budgets"].as_array().unwrap();
    assert_eq!(budgets.len(), 2);

    let dining = &budgets[0];
    assert_eq!(dining["category"], "Dining");
    assert_eq!(decimal(&dining["remaining"]), Decimal::from(-30));
    assert_eq!(decimal(&dining["percentage"]), Decimal::ONE_HUNDRED);
    assert_eq!(dining["status"], "exceeded");

    let groceries = &budgets[1];
    assert_eq!(decimal(&groceries["spent"]), Decimal::from(150));
    assert_eq!(decimal(&groceries["percentage"]), Decimal::from(75));
    assert_eq!(groceries["status"], "good");

    let totals = &report["totals"];
    assert_eq!(decimal(&totals["budgeted"]), Decimal::from(300));
    assert_eq!(decimal(&totals["spent"]), Decimal::from(280));
    assert_eq!(totals["status"], "warning");
}

#[tokio::test]
async fn test_budget_summary_unknown_period_falls_back_to_monthly() {
    let app = app();
    let (status, report) = send(
        &app,
        Method::GET,
        &format!("/api/v1/users/{USER}/budgets/summary?period=weekly"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["period"], "monthly");
    assert!(report["budgets"].as_array().unwrap().is_empty());
    assert_eq!(decimal(&report["totals"]["percentage"]), Decimal::ZERO);
    assert_eq!(report["totals"]["status"], "good");
}

#[tokio::test]
async fn test_category_rules() {
    let app = app();
    let base = format!("/api/v1/users/{USER}/categories");

    let (status, fuel) = send(&app, Method::POST, &base, Some(json!({ "name": "Fuel" }))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, Method::POST, &base, Some(json!({ "name": "Fuel" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/v1/users/{USER}/transactions"),
        Some(json!({
            "amount": "60",
            "category": "Fuel",
            "category_id": fuel["id"],
            "type": "expense",
            "date": "2026-10-02T07:00:00Z",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("{base}/{}", fuel["id"].as_str().unwrap());
    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "BUSINESS_RULE_VIOLATION");

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "name": "Petrol" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Petrol");

    let (_, list) = send(&app, Method::GET, &base, None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_dashboard() {
    let app = app();
    send(
        &app,
        Method::POST,
        &format!("/api/v1/users/{USER}/transactions"),
        Some(json!({
            "amount": "3000",
            "category": "Salary",
            "type": "income",
            "date": "2026-10-01T09:00:00Z",
        })),
    )
    .await;
    expense(&app, "Rent", "1200", "2026-10-02T09:00:00Z").await;
    expense(&app, "Groceries", "80", "2026-08-20T09:00:00Z").await;

    let (status, body) = send(&app, Method::GET, &format!("/api/v1/users/{USER}/dashboard"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&body["total_income"]), Decimal::from(3000));
    assert_eq!(decimal(&body["total_expenses"]), Decimal::from(1280));
    assert_eq!(decimal(&body["balance"]), Decimal::from(1720));

    let months = body["monthly_data"].as_array().unwrap();
    assert_eq!(months.len(), 6);
    assert_eq!(months[0]["month"], "May");
    assert_eq!(months[5]["month"], "Oct");
    assert_eq!(decimal(&months[3]["expense"]), Decimal::from(80));

    let recent = body["recent_transactions"].as_array().unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0]["category"], "Rent");
    assert_eq!(decimal(&body["category_summary"]["Groceries"]), Decimal::from(80));
}

#[tokio::test]
async fn test_malformed_user_id_is_rejected() {
    let app = app();
    let (status, _) = send(&app, Method::GET, "/api/v1/users/not-a-uuid/dashboard", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
