use std::sync::{Arc, Mutex};

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use countdown_timer::{
    audio::AudioSink,
    create_router,
    state::{AppState, Preset},
};

#[derive(Clone, Default)]
struct RecordingAudio(Arc<Mutex<Vec<String>>>);

impl RecordingAudio {
    fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, looped: bool) {
        self.0.lock().unwrap().push(format!("play looped={looped}"));
    }
    fn pause(&mut self) {
        self.0.lock().unwrap().push("pause".to_string());
    }
    fn rewind(&mut self) {
        self.0.lock().unwrap().push("rewind".to_string());
    }
}

fn setup() -> (Arc<AppState>, Router, RecordingAudio) {
    let audio = RecordingAudio::default();
    let state = Arc::new(AppState::new(
        0,
        "127.0.0.1".to_string(),
        vec![Preset::new("Tea", 180), Preset::new("Ninety", 90)],
        Box::new(audio.clone()),
    ));
    let router = create_router(Arc::clone(&state));
    (state, router, audio)
}

async fn call(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let (_, router, _) = setup();
    let (status, body) = call(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn initial_status_is_idle() {
    let (_, router, _) = setup();
    let (status, body) = call(&router, Method::GET, "/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["phase"], "initial");
    assert_eq!(body["timer"]["display"], "00:00:00");
    assert_eq!(body["timer"]["controls"]["start"], true);
    assert_eq!(body["timer"]["sound_label"], "Sound: On");
    assert_eq!(body["timer"]["theme"], "light");
    assert!(body["last_action"].is_null());
}

#[tokio::test]
async fn start_with_body_runs_countdown() {
    let (_, router, _) = setup();
    let (status, body) = call(
        &router,
        Method::POST,
        "/start",
        Some(json!({"hours": 0, "minutes": "2", "seconds": 5})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["timer"]["remaining_seconds"], 125);
    assert_eq!(body["timer"]["display"], "00:02:05");
    assert_eq!(body["timer"]["controls"]["pause"], true);
    assert_eq!(body["timer"]["controls"]["start"], false);
}

#[tokio::test]
async fn start_with_zero_stays_initial() {
    let (_, router, _) = setup();
    let (_, body) = call(
        &router,
        Method::POST,
        "/start",
        Some(json!({"hours": "abc", "minutes": null})),
    )
    .await;

    assert_eq!(body["status"], "initial");
    assert_eq!(body["timer"]["remaining_seconds"], 0);
    assert_eq!(body["timer"]["display"], "00:00:00");
}

#[tokio::test]
async fn edited_fields_are_used_by_start() {
    let (_, router, _) = setup();
    let (status, body) = call(
        &router,
        Method::PUT,
        "/time",
        Some(json!({"hours": "1", "minutes": "", "seconds": "30"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["fields"]["hours"], "1");

    let (_, body) = call(&router, Method::POST, "/start", None).await;
    assert_eq!(body["timer"]["remaining_seconds"], 3630);
}

#[tokio::test]
async fn pause_then_resume() {
    let (state, router, _) = setup();
    call(&router, Method::POST, "/start", Some(json!({"seconds": 10}))).await;
    for _ in 0..3 {
        state.tick(1).unwrap();
    }

    let (_, body) = call(&router, Method::POST, "/pause", None).await;
    assert_eq!(body["status"], "paused");
    assert_eq!(body["timer"]["remaining_seconds"], 7);
    assert_eq!(body["timer"]["controls"]["start_label"], "Resume");

    let (_, body) = call(&router, Method::POST, "/start", None).await;
    assert_eq!(body["status"], "running");
    assert_eq!(body["timer"]["remaining_seconds"], 7);
    assert_eq!(body["timer"]["last_set_seconds"], 10);
}

#[tokio::test]
async fn alarm_rings_until_stopped() {
    let (state, router, audio) = setup();
    call(&router, Method::POST, "/start", Some(json!({"seconds": 2}))).await;
    state.tick(1).unwrap();
    state.tick(1).unwrap();

    let (_, body) = call(&router, Method::GET, "/status", None).await;
    assert_eq!(body["timer"]["phase"], "alarm_ringing");
    assert_eq!(body["timer"]["controls"]["stop_alarm"], true);
    assert_eq!(body["timer"]["controls"]["alarm_animating"], true);
    assert_eq!(audio.calls(), vec!["play looped=true"]);

    let (_, body) = call(&router, Method::POST, "/pause", None).await;
    assert_eq!(body["status"], "alarm_ringing");

    let (_, body) = call(&router, Method::POST, "/stop-alarm", None).await;
    assert_eq!(body["status"], "initial");
    assert_eq!(audio.calls(), vec!["play looped=true", "pause", "rewind"]);
}

#[tokio::test]
async fn muted_timer_finishes_quietly() {
    let (state, router, audio) = setup();
    let (_, body) = call(&router, Method::POST, "/sound/toggle", None).await;
    assert_eq!(body["timer"]["sound_enabled"], false);
    assert_eq!(body["timer"]["sound_label"], "Sound: Off");

    call(&router, Method::POST, "/start", Some(json!({"seconds": 1}))).await;
    state.tick(1).unwrap();

    let (_, body) = call(&router, Method::GET, "/status", None).await;
    assert_eq!(body["timer"]["phase"], "finished");
    assert!(audio.calls().is_empty());
}

#[tokio::test]
async fn reset_clears_everything() {
    let (_, router, _) = setup();
    call(&router, Method::POST, "/start", Some(json!({"seconds": 5}))).await;

    let (_, body) = call(&router, Method::POST, "/reset", None).await;
    assert_eq!(body["status"], "initial");
    assert_eq!(body["timer"]["remaining_seconds"], 0);
    assert_eq!(body["timer"]["last_set_seconds"], 0);
    assert_eq!(body["timer"]["display"], "00:00:00");
}

#[tokio::test]
async fn presets_are_listed_and_applied() {
    let (_, router, _) = setup();
    let (_, body) = call(&router, Method::GET, "/presets", None).await;
    assert_eq!(body["presets"][0]["label"], "Tea");
    assert_eq!(body["presets"][1]["seconds"], 90);

    call(&router, Method::POST, "/start", Some(json!({"seconds": 300}))).await;
    call(&router, Method::POST, "/pause", None).await;

    let (status, body) = call(&router, Method::POST, "/presets/Ninety", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "initial");
    assert_eq!(body["timer"]["remaining_seconds"], 90);
    assert_eq!(body["timer"]["last_set_seconds"], 90);
    assert_eq!(body["timer"]["display"], "00:01:30");
}

#[tokio::test]
async fn unknown_preset_is_not_found() {
    let (_, router, _) = setup();
    let (status, _) = call(&router, Method::POST, "/presets/Soup", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn theme_toggle_flips_label() {
    let (_, router, _) = setup();
    let (_, body) = call(&router, Method::POST, "/theme/toggle", None).await;
    assert_eq!(body["timer"]["theme"], "dark");
    assert_eq!(body["timer"]["theme_label"], "Light Mode");

    let (_, body) = call(&router, Method::GET, "/status", None).await;
    assert_eq!(body["last_action"], "toggle-theme");
}
