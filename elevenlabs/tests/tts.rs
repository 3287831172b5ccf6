//! Wire-level tests against a local fake synthesis service.

use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Path, RawQuery, State},
    http::HeaderMap,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use bytes::Bytes;

use elevenlabs_sdk::{Client, Error, TtsRequest, MODEL_MULTILINGUAL_V2, OUTPUT_MP3_44100_128};

/// What the fake service returns from the synthesis endpoints.
enum Scenario {
    /// Stream these chunks, then end the body normally.
    Chunks(Vec<Vec<u8>>),
    /// Like `Chunks`, but with a non-200 success status.
    ChunksWithStatus(u16, Vec<Vec<u8>>),
    /// Stream these chunks, then abort the connection.
    FailAfter(Vec<Vec<u8>>),
    /// Respond with an API error envelope.
    ApiError { http_status: u16, body: String },
}

/// The synthesis request as observed by the fake service.
#[derive(Debug, Clone)]
struct Captured {
    voice_id: String,
    query: String,
    api_key: String,
    body: serde_json::Value,
}

#[derive(Clone)]
struct AppState {
    scenario: Arc<Scenario>,
    captured: Arc<Mutex<Option<Captured>>>,
}

/// Starts the fake service and returns its base URL plus the capture slot.
async fn spawn_server(scenario: Scenario) -> (String, Arc<Mutex<Option<Captured>>>) {
    let captured = Arc::new(Mutex::new(None));
    let state = AppState {
        scenario: Arc::new(scenario),
        captured: captured.clone(),
    };

    let app = Router::new()
        .route("/v1/text-to-speech/{voice_id}", post(handle_synthesis))
        .route("/v1/text-to-speech/{voice_id}/stream", post(handle_synthesis))
        .route("/v1/voices", get(handle_voices))
        .route("/v1/models", get(handle_models))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), captured)
}

async fn handle_synthesis(
    State(state): State<AppState>,
    Path(voice_id): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    *state.captured.lock().unwrap() = Some(Captured {
        voice_id,
        query: query.unwrap_or_default(),
        api_key: headers
            .get("xi-api-key")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string(),
        body: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
    });

    match state.scenario.as_ref() {
        Scenario::Chunks(chunks) => {
            let chunks: Vec<Result<Bytes, io::Error>> = chunks
                .iter()
                .map(|c| Ok(Bytes::copy_from_slice(c)))
                .collect();
            Body::from_stream(futures::stream::iter(chunks)).into_response()
        }
        Scenario::ChunksWithStatus(code, chunks) => {
            let chunks: Vec<Result<Bytes, io::Error>> = chunks
                .iter()
                .map(|c| Ok(Bytes::copy_from_slice(c)))
                .collect();
            Response::builder()
                .status(*code)
                .body(Body::from_stream(futures::stream::iter(chunks)))
                .unwrap()
        }
        Scenario::FailAfter(chunks) => {
            let chunks = chunks.clone();
            let stream = async_stream::stream! {
                for c in chunks {
                    yield Ok::<Bytes, io::Error>(Bytes::from(c));
                    // Let each frame flush before aborting the connection.
                    tokio::time::sleep(Duration::from_millis(20)).await;
                }
                yield Err(io::Error::new(io::ErrorKind::ConnectionReset, "synthesis aborted"));
            };
            Body::from_stream(stream).into_response()
        }
        Scenario::ApiError { http_status, body } => Response::builder()
            .status(*http_status)
            .header("content-type", "application/json")
            .body(Body::from(body.clone()))
            .unwrap(),
    }
}

async fn handle_voices(State(_state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "voices": [
            {"voice_id": "JBFqnCBsd6RMkjVDRZzb", "name": "George", "category": "premade"},
            {"voice_id": "EXAVITQu4vr4xnSDxMaL", "name": "Sarah", "category": "premade"}
        ]
    }))
}

async fn handle_models(State(_state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!([
        {
            "model_id": "eleven_multilingual_v2",
            "name": "Eleven Multilingual v2",
            "can_do_text_to_speech": true,
            "languages": [{"language_id": "en", "name": "English"}]
        }
    ]))
}

fn client_for(base_url: &str) -> Client {
    Client::builder("test-key").base_url(base_url).build().unwrap()
}

fn sample_request() -> TtsRequest {
    TtsRequest {
        voice_id: "JBFqnCBsd6RMkjVDRZzb".to_string(),
        model_id: MODEL_MULTILINGUAL_V2.to_string(),
        output_format: OUTPUT_MP3_44100_128.to_string(),
        text: "The first move is what sets everything in motion.".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn streams_audio_to_file() {
    let (url, _) = spawn_server(Scenario::Chunks(vec![
        b"ID3".to_vec(),
        b"restofmp3data".to_vec(),
    ]))
    .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.mp3");

    let written = client_for(&url)
        .tts()
        .convert_to_file(&sample_request(), &path)
        .await
        .unwrap();

    assert_eq!(written, 16);
    assert_eq!(std::fs::read(&path).unwrap(), b"ID3restofmp3data");
}

#[tokio::test]
async fn accepts_any_success_status_when_streaming() {
    let (url, _) = spawn_server(Scenario::ChunksWithStatus(202, vec![b"accepted".to_vec()])).await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.mp3");

    client_for(&url)
        .tts()
        .convert_to_file(&sample_request(), &path)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"accepted");
}

#[tokio::test]
async fn request_fields_pass_through_unmodified() {
    let (url, captured) = spawn_server(Scenario::Chunks(vec![b"audio".to_vec()])).await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.mp3");

    client_for(&url)
        .tts()
        .convert_to_file(&sample_request(), &path)
        .await
        .unwrap();

    let captured = captured.lock().unwrap().clone().expect("request not seen");
    assert_eq!(captured.voice_id, "JBFqnCBsd6RMkjVDRZzb");
    assert_eq!(captured.query, "output_format=mp3_44100_128");
    assert_eq!(captured.api_key, "test-key");
    assert_eq!(
        captured.body,
        serde_json::json!({
            "text": "The first move is what sets everything in motion.",
            "model_id": "eleven_multilingual_v2",
        })
    );
}

#[tokio::test]
async fn rerun_overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.mp3");

    let (url, _) = spawn_server(Scenario::Chunks(vec![b"first run, longer audio".to_vec()])).await;
    client_for(&url)
        .tts()
        .convert_to_file(&sample_request(), &path)
        .await
        .unwrap();

    let (url, _) = spawn_server(Scenario::Chunks(vec![b"second".to_vec()])).await;
    client_for(&url)
        .tts()
        .convert_to_file(&sample_request(), &path)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"second");
}

#[tokio::test]
async fn midstream_failure_returns_error_and_keeps_partial_file() {
    let (url, _) = spawn_server(Scenario::FailAfter(vec![b"partialaudio".to_vec()])).await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.mp3");

    let err = client_for(&url)
        .tts()
        .convert_to_file(&sample_request(), &path)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Http(_)));

    assert_eq!(std::fs::read(&path).unwrap(), b"partialaudio");
}

#[tokio::test]
async fn api_error_maps_to_error_api() {
    let (url, _) = spawn_server(Scenario::ApiError {
        http_status: 401,
        body: r#"{"detail":{"status":"invalid_api_key","message":"Invalid API key."}}"#.to_string(),
    })
    .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.mp3");

    let err = client_for(&url)
        .tts()
        .convert_to_file(&sample_request(), &path)
        .await
        .unwrap_err();

    assert!(err.is_invalid_api_key());
    // The request failed before any chunk arrived, so no file was created.
    assert!(!path.exists());
}

#[tokio::test]
async fn buffered_convert_returns_whole_payload() {
    let (url, captured) = spawn_server(Scenario::Chunks(vec![
        b"ID3".to_vec(),
        b"restofmp3data".to_vec(),
    ]))
    .await;

    let audio = client_for(&url)
        .tts()
        .convert(&sample_request())
        .await
        .unwrap();

    assert_eq!(&audio[..], b"ID3restofmp3data");
    let captured = captured.lock().unwrap().clone().expect("request not seen");
    assert_eq!(captured.voice_id, "JBFqnCBsd6RMkjVDRZzb");
}

#[tokio::test]
async fn lists_voices_and_models() {
    let (url, _) = spawn_server(Scenario::Chunks(vec![])).await;
    let client = client_for(&url);

    let voices = client.voices().list().await.unwrap();
    assert_eq!(voices.voices.len(), 2);
    assert_eq!(voices.voices[0].voice_id, "JBFqnCBsd6RMkjVDRZzb");
    assert_eq!(voices.voices[1].name, "Sarah");

    let models = client.models().list().await.unwrap();
    assert_eq!(models.len(), 1);
    assert!(models[0].can_do_text_to_speech);
    assert_eq!(models[0].languages[0].language_id, "en");
}
