//! Test helpers for writing CLI input files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

use crate::recommend::RecommendConfig;
use eventrank_scorer::RecommendOptions;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// A temporary directory holding the JSON inputs for `recommend`.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_json(&self, name: &str, value: &Value) -> Utf8PathBuf {
        let path = self.path(name);
        let payload = serde_json::to_vec_pretty(value).expect("encode fixture");
        write_utf8(&path, &payload);
        path
    }

    /// Write the music fan and the two candidate events used across tests.
    pub(super) fn music_fan_inputs(&self) -> RecommendConfig {
        let user = self.write_json(
            "user.json",
            &json!({
                "attendedEvents": ["e1"],
                "preferences": ["music"],
            }),
        );
        let events = self.write_json(
            "events.json",
            &json!([
                { "id": "e1", "categories": ["music"], "popularity": 1.0 },
                { "id": "e3", "categories": ["sports"], "popularity": 0.1 },
                { "id": "e2", "categories": ["music"], "popularity": 0.8 },
            ]),
        );
        RecommendConfig {
            user,
            events,
            similarity: None,
            weights: None,
            options: RecommendOptions::default(),
            explain: false,
        }
    }
}

/// Decode the JSON written by a command.
pub(super) fn decode_output(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("command output should be JSON")
}

/// Extract the `id` of each event in a plain `recommend` listing.
pub(super) fn listed_ids(output: &Value) -> Vec<String> {
    output
        .as_array()
        .expect("output should be an array")
        .iter()
        .map(|event| {
            event
                .get("id")
                .and_then(Value::as_str)
                .expect("event should carry an id")
                .to_owned()
        })
        .collect()
}
