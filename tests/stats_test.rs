mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{create_subject, get, login, post, setup};

async fn add_session(
    app: &axum::Router,
    cookie: &str,
    subject: i64,
    minutes: i64,
    date: &str,
) {
    let (status, _) = post(
        app,
        "/api/study-sessions",
        Some(cookie),
        json!({ "subject_id": subject, "duration_minutes": minutes, "date": date }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn empty_week_yields_zero_totals() {
    let (app, _pool) = setup().await;
    let (cookie, _) = login(&app, "lucas.mendes", "lucas123").await;

    let (status, body) = get(
        &app,
        "/api/stats/weekly?week_start=2024-01-08",
        Some(&cookie),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_hours"], json!(0.0));
    assert!(body["by_subject"].as_array().unwrap().is_empty());
    assert!(body["daily"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn fifty_minutes_of_math_is_point_eight_three_hours() {
    let (app, _pool) = setup().await;
    let (cookie, _) = login(&app, "admin", "admin123").await;
    let math = create_subject(&app, &cookie, "Math", "#FF0000").await;
    add_session(&app, &cookie, math, 50, "2024-01-08").await;

    let (status, body) = get(
        &app,
        "/api/stats/weekly?week_start=2024-01-08",
        Some(&cookie),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_hours"], json!(0.83));
    assert_eq!(
        body["by_subject"],
        json!([{ "name": "Math", "color": "#FF0000", "total_minutes": 50 }])
    );
    assert_eq!(
        body["daily"],
        json!([{ "date": "2024-01-08", "total_minutes": 50, "session_count": 1 }])
    );
}

#[tokio::test]
async fn week_window_is_half_open() {
    let (app, _pool) = setup().await;
    let (cookie, _) = login(&app, "lucas.mendes", "lucas123").await;
    let subject = create_subject(&app, &cookie, "Physics", "#0000FF").await;

    add_session(&app, &cookie, subject, 60, "2024-01-07").await; // day before
    add_session(&app, &cookie, subject, 60, "2024-01-08").await; // first day
    add_session(&app, &cookie, subject, 60, "2024-01-14").await; // last day
    add_session(&app, &cookie, subject, 60, "2024-01-15").await; // week_start + 7

    let (_, body) = get(
        &app,
        "/api/stats/weekly?week_start=2024-01-08",
        Some(&cookie),
    )
    .await;
    assert_eq!(body["total_hours"], json!(2.0));
    let daily = body["daily"].as_array().unwrap();
    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0]["date"], json!("2024-01-08"));
    assert_eq!(daily[1]["date"], json!("2024-01-14"));
}

#[tokio::test]
async fn by_subject_descends_and_daily_ascends() {
    let (app, _pool) = setup().await;
    let (cookie, _) = login(&app, "lucas.mendes", "lucas123").await;
    let minor = create_subject(&app, &cookie, "Minor", "#111111").await;
    let major = create_subject(&app, &cookie, "Major", "#222222").await;

    // Insert out of date order; aggregation must not care.
    add_session(&app, &cookie, major, 45, "2024-01-10").await;
    add_session(&app, &cookie, minor, 30, "2024-01-09").await;
    add_session(&app, &cookie, major, 45, "2024-01-09").await;

    let (_, body) = get(
        &app,
        "/api/stats/weekly?week_start=2024-01-08",
        Some(&cookie),
    )
    .await;

    let by_subject = body["by_subject"].as_array().unwrap();
    assert_eq!(by_subject[0]["name"], json!("Major"));
    assert_eq!(by_subject[0]["total_minutes"], json!(90));
    assert_eq!(by_subject[1]["name"], json!("Minor"));
    assert_eq!(by_subject[1]["total_minutes"], json!(30));

    let daily = body["daily"].as_array().unwrap();
    assert_eq!(daily[0]["date"], json!("2024-01-09"));
    assert_eq!(daily[0]["total_minutes"], json!(75));
    assert_eq!(daily[0]["session_count"], json!(2));
    assert_eq!(daily[1]["date"], json!("2024-01-10"));

    assert_eq!(body["total_hours"], json!(2.0));
}

#[tokio::test]
async fn stats_are_scoped_to_the_caller() {
    let (app, _pool) = setup().await;
    let (lucas, _) = login(&app, "lucas.mendes", "lucas123").await;
    let (ana, _) = login(&app, "ana.beatriz", "ana123").await;
    let subject = create_subject(&app, &lucas, "Math", "#FF0000").await;
    add_session(&app, &lucas, subject, 120, "2024-01-08").await;

    let (_, body) = get(&app, "/api/stats/weekly?week_start=2024-01-08", Some(&ana)).await;
    assert_eq!(body["total_hours"], json!(0.0));
    assert!(body["by_subject"].as_array().unwrap().is_empty());

    let (_, body) = get(
        &app,
        "/api/stats/weekly?week_start=2024-01-08",
        Some(&lucas),
    )
    .await;
    assert_eq!(body["total_hours"], json!(2.0));
}

#[tokio::test]
async fn week_start_defaults_to_today() {
    let (app, _pool) = setup().await;
    let (cookie, _) = login(&app, "lucas.mendes", "lucas123").await;
    let subject = create_subject(&app, &cookie, "Focus", "#0000FF").await;

    // A pomodoro lands on today's date, inside the default window.
    let (status, _) = post(
        &app,
        "/api/timer/pomodoro",
        Some(&cookie),
        json!({ "subject_id": subject, "duration_minutes": 30 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&app, "/api/stats/weekly", Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_hours"], json!(0.5));
    assert_eq!(body["daily"].as_array().unwrap().len(), 1);
}
