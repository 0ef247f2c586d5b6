use std::cell::Cell;

use serde_json::{json, Value};

use super::hit_endpoint;
use crate::api::transport::testing::{MockTransport, Seen};
use crate::api::transport::Payload;

#[tokio::test]
async fn json_payload_goes_out_as_json() {
    let transport = MockTransport::json_reply(r#"{"bot_move": "Q16"}"#);
    let args = json!({"moves": ["D4"], "config": {"randomness": 0.5}});

    let got: Cell<Option<Value>> = Cell::new(None);
    hit_endpoint(&transport, "/select-move/leela_gtp_bot", args.clone().into(), |v| {
        got.set(Some(v));
    })
    .await;

    assert_eq!(got.take().unwrap()["bot_move"], json!("Q16"));
    assert_eq!(
        transport.requests(),
        vec![Seen::Json {
            url: "/select-move/leela_gtp_bot".to_string(),
            body: args
        }]
    );
}

#[tokio::test]
async fn file_payload_goes_out_as_multipart() {
    let transport = MockTransport::json_reply(r#"{"result": "ok"}"#);

    let called = Cell::new(false);
    hit_endpoint(
        &transport,
        "/upload-sgf",
        Payload::file("game.sgf", b"(;GM[1]SZ[19])".to_vec()),
        |_| called.set(true),
    )
    .await;

    assert!(called.get());
    assert_eq!(
        transport.requests(),
        vec![Seen::File {
            url: "/upload-sgf".to_string(),
            name: "game.sgf".to_string()
        }]
    );
}

#[tokio::test]
async fn completion_fires_exactly_once_on_success() {
    let transport = MockTransport::json_reply("{}");
    let calls = Cell::new(0u32);
    hit_endpoint(&transport, "/ping", json!({}).into(), |_| {
        calls.set(calls.get() + 1);
    })
    .await;
    assert_eq!(calls.get(), 1);
}

#[tokio::test]
async fn transport_failure_never_invokes_completion() {
    let transport = MockTransport::failing("connection failed");
    let called = Cell::new(false);
    hit_endpoint(&transport, "/select-move/leela_gtp_bot", json!({}).into(), |_| {
        called.set(true);
    })
    .await;
    assert!(!called.get());
}

#[tokio::test]
async fn unparseable_body_never_invokes_completion() {
    let transport = MockTransport::json_reply("<html>gateway error</html>");
    let called = Cell::new(false);
    hit_endpoint(&transport, "/ping", json!({}).into(), |_| called.set(true)).await;
    assert!(!called.get());
}

#[tokio::test]
async fn non_2xx_json_bodies_still_complete() {
    // fetch-style semantics: an HTTP error status with a JSON body is a
    // completed exchange, not a failure
    let transport = MockTransport::replying(vec![Ok(crate::api::transport::Reply {
        status: 500,
        content_type: Some("application/json".to_string()),
        body: br#"{"error": "no such bot"}"#.to_vec(),
    })]);

    let got: Cell<Option<Value>> = Cell::new(None);
    hit_endpoint(&transport, "/select-move/nope", json!({}).into(), |v| {
        got.set(Some(v));
    })
    .await;
    assert_eq!(got.take().unwrap()["error"], json!("no such bot"));
}
