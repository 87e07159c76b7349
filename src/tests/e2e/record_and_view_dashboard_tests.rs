use crate::modules::weekly_metrics::core::dashboard::DashboardState;
use crate::modules::weekly_metrics::use_cases::record_week::handler::RecordWeekHandler;
use crate::shared::infrastructure::remote_store::client::StoreClient;
use crate::shared::infrastructure::remote_store::in_memory::InMemoryRemoteStore;
use crate::shared::infrastructure::session::Session;
use crate::shell::graphql::{build_schema, routes};
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::shell::workers::spawn_dashboard_projector;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::timeout;
use tower::ServiceExt;

async fn wait_for_weeks(receiver: &mut watch::Receiver<DashboardState>, len: usize) {
    timeout(
        Duration::from_secs(2),
        receiver.wait_for(|state| state.dashboard().is_some_and(|d| d.history.len() == len)),
    )
    .await
    .expect("timed out waiting for the dashboard")
    .expect("projector stopped");
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn records_a_week_and_serves_the_rebuilt_dashboard() {
    let store = Arc::new(InMemoryRemoteStore::new());
    let client = StoreClient::ready(store);
    let session = Arc::new(Session::new());
    session.sign_in(&client, None).await.unwrap();

    let (mut dashboard, projector) =
        spawn_dashboard_projector("e2e-app", client.clone(), session.clone());
    let state = AppState {
        record_week_handler: Arc::new(RecordWeekHandler::new("e2e-app", client, session)),
        dashboard: dashboard.clone(),
    };
    let app = router(state.clone()).merge(routes(build_schema(state)));

    // An empty collection is seeded with the sample weeks.
    wait_for_weeks(&mut dashboard, 9).await;
    let (status, json) = send(&app, Request::get("/dashboard").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["summary"]["totalMeetings"], 8);
    assert_eq!(json["latestWeek"]["label"], "8/4/2025");

    let (status, json) = send(
        &app,
        Request::post("/record-week")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"weekStartDate":"2025-08-11","newLeads":"120","emailsDelivered":"400","callsDialed":"60","callsConnected":"6","meetingsBooked":"2"}"#,
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["weekStartDate"], "2025-08-11");

    wait_for_weeks(&mut dashboard, 10).await;
    let (_, json) = send(&app, Request::get("/dashboard").body(Body::empty()).unwrap()).await;
    assert_eq!(json["summary"]["totalMeetings"], 10);
    assert_eq!(json["summary"]["totalOutboundAllTime"], 4704 + 460);
    assert_eq!(json["latestWeek"]["label"], "8/11/2025");

    // Recording the same week again replaces it.
    let (status, _) = send(
        &app,
        Request::post("/gql")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"query":"mutation { recordWeek(input: { weekStartDate: \"2025-08-11\", meetingsBooked: 5 }) }"}"#,
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    timeout(
        Duration::from_secs(2),
        dashboard.wait_for(|state| {
            state
                .dashboard()
                .is_some_and(|d| d.summary.total_meetings == 13)
        }),
    )
    .await
    .expect("timed out waiting for the overwrite")
    .unwrap();

    let (_, json) = send(&app, Request::get("/weeks").body(Body::empty()).unwrap()).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0]["id"], "2025-08-11");
    assert_eq!(rows[0]["newLeads"], 0);
    assert_eq!(rows[0]["meetingsBooked"], 5);

    projector.abort();
}
