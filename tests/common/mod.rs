//! Local stand-in for the LLM backends
//!
//! A warp server that records every request it receives and answers with a
//! canned status and body.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use warp::http::{HeaderMap, StatusCode};
use warp::path::FullPath;
use warp::Filter;

/// A request captured by the stub
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<RecordedRequest>>>);

impl Recorder {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.0.lock().unwrap().clone()
    }

    pub fn single(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }

    fn push(&self, request: RecordedRequest) {
        self.0.lock().unwrap().push(request);
    }
}

/// Pick a port nothing is listening on
pub fn free_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

/// Poll until something accepts connections on `addr`
pub async fn wait_until_listening(addr: SocketAddr) {
    for _ in 0..100 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("server on {} did not start", addr);
}

/// Start a stub answering every POST with `status` and the raw `body`
///
/// Returns the stub's root URL, e.g. `http://127.0.0.1:PORT`.
pub async fn spawn_stub_raw(status: u16, body: &str) -> (String, Recorder) {
    let recorder = Recorder::default();
    let status = StatusCode::from_u16(status).unwrap();
    let body = body.to_string();

    let captured = recorder.clone();
    let stub = warp::post()
        .and(warp::path::full())
        .and(warp::header::headers_cloned())
        .and(warp::body::json())
        .map(move |path: FullPath, headers: HeaderMap, json: serde_json::Value| {
            captured.push(RecordedRequest {
                path: path.as_str().to_string(),
                headers,
                body: json,
            });
            warp::reply::with_status(
                warp::reply::with_header(body.clone(), "content-type", "application/json"),
                status,
            )
        });

    let addr = free_addr();
    tokio::spawn(warp::serve(stub).run(addr));
    wait_until_listening(addr).await;

    (format!("http://{}", addr), recorder)
}

/// Start a stub answering every POST with `status` and a JSON body
pub async fn spawn_stub(status: u16, body: serde_json::Value) -> (String, Recorder) {
    spawn_stub_raw(status, &body.to_string()).await
}

/// OpenAI-style success body
pub fn completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

/// Gemini-style success body
pub fn gemini_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 10,
            "candidatesTokenCount": 3,
            "totalTokenCount": 13
        }
    })
}
