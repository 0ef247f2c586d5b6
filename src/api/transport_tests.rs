use serde_json::json;

use super::*;

#[derive(serde::Serialize)]
struct MoveRequest {
    board_size: u32,
    moves: Vec<String>,
}

#[test]
fn payload_json_serializes_structs() {
    let payload = Payload::json(&MoveRequest {
        board_size: 19,
        moves: vec!["Q16".to_string(), "D4".to_string()],
    })
    .unwrap();
    match payload {
        Payload::Json(v) => {
            assert_eq!(v, json!({"board_size": 19, "moves": ["Q16", "D4"]}));
        }
        Payload::File(_) => panic!("expected a JSON payload"),
    }
}

#[test]
fn payload_from_value_is_json() {
    let payload = Payload::from(json!({"komi": 7.5}));
    assert!(matches!(payload, Payload::Json(_)));
}

#[test]
fn payload_file_defaults_to_no_mime() {
    match Payload::file("game.sgf", b"(;GM[1])".to_vec()) {
        Payload::File(f) => {
            assert_eq!(f.name, "game.sgf");
            assert_eq!(f.bytes, b"(;GM[1])");
            assert!(f.mime.is_none());
        }
        Payload::Json(_) => panic!("expected a file payload"),
    }
}

#[test]
fn reply_json_parses_the_body() {
    let reply = Reply {
        status: 200,
        content_type: Some("application/json".to_string()),
        body: br#"{"diagnostics": {"winprob": 0.42}}"#.to_vec(),
    };
    let value = reply.json().unwrap();
    assert_eq!(value["diagnostics"]["winprob"], json!(0.42));
}

#[test]
fn reply_json_rejects_non_json_bodies() {
    let reply = Reply {
        status: 200,
        content_type: Some("text/html".to_string()),
        body: b"<html>oops</html>".to_vec(),
    };
    assert!(matches!(
        reply.json(),
        Err(crate::error::AhauxError::Json(_))
    ));
}

#[test]
fn multipart_field_name_is_file() {
    // the backend reads uploads from this exact form field
    assert_eq!(MULTIPART_FIELD, "file");
}

#[tokio::test]
async fn mock_transport_records_requests_in_order() {
    use super::testing::{MockTransport, Seen};

    let transport = MockTransport::replying(vec![
        Ok(Reply {
            status: 200,
            content_type: None,
            body: b"{}".to_vec(),
        }),
        Ok(Reply {
            status: 200,
            content_type: None,
            body: b"{}".to_vec(),
        }),
    ]);

    transport.post_json("/a", &json!({"n": 1})).await.unwrap();
    transport
        .post_file(
            "/b",
            &FileUpload {
                name: "x.sgf".to_string(),
                bytes: vec![1],
                mime: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(
        transport.requests(),
        vec![
            Seen::Json {
                url: "/a".to_string(),
                body: json!({"n": 1})
            },
            Seen::File {
                url: "/b".to_string(),
                name: "x.sgf".to_string()
            },
        ]
    );
}
