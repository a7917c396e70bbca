// End-to-end test over a real TCP socket, exercising the same serve path as
// production with the middleware stack attached.
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use prediction_service::server::api::create_api_router;

async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = create_api_router().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn serves_predictions_over_tcp() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/predict"))
        .body("{}")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["prediction_score"], 0.85);
    assert_eq!(body["model_version"], "1.0.2");
}

#[tokio::test]
async fn serves_health_over_tcp() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client.get(format!("{base}/health")).send().await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), r#"{"status":"ok"}"#);
}

#[tokio::test]
async fn wrong_method_and_unknown_path_over_tcp() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client.get(format!("{base}/predict")).send().await.unwrap();
    assert_eq!(response.status(), 405);

    let response = client
        .get(format!("{base}/nonexistent"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}
