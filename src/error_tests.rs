use std::path::PathBuf;

use super::*;

#[test]
fn no_such_container_names_the_handle() {
    let err = AhauxError::NoSuchContainer("#eval_graph".to_string());
    assert_eq!(err.to_string(), "no container registered under '#eval_graph'");
}

#[test]
fn transport_error_carries_url_and_detail() {
    let err = AhauxError::Transport {
        url: "http://localhost:2718/select-move".to_string(),
        detail: "connection failed".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("http://localhost:2718/select-move"));
    assert!(msg.contains("connection failed"));
}

#[test]
fn save_error_displays_target_path() {
    let err = AhauxError::Save {
        path: PathBuf::from("/tmp/out.sgf"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.to_string().contains("/tmp/out.sgf"));
}

#[test]
fn json_error_converts_via_from() {
    let parse = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err = AhauxError::from(parse);
    assert!(matches!(err, AhauxError::Json(_)));
}
