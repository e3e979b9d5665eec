//! Contract fixture loader.
//!
//! Each fixture at `contracts/http/{service}/{id}.json` describes one HTTP
//! assertion: requests to seed state, the request to send and the expected
//! response.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

/// A single HTTP contract assertion.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    /// Unique identifier within the service (matches the filename stem).
    pub id: String,
    /// Human-readable description shown on failure.
    pub description: String,
    /// Requests sent, in order, before `request`. Their responses are not checked.
    #[serde(default)]
    pub seed: Vec<Request>,
    pub request: Request,
    pub expect: Expect,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Expect {
    pub status: u16,
    /// Exact JSON body, when given.
    pub body: Option<Value>,
}

impl Fixture {
    /// Load and parse a fixture JSON file at `workspace_root/path`.
    ///
    /// Panics if the file is missing or invalid.
    pub fn load(relative_path: &str) -> Self {
        Self::load_path(&workspace_root().join(relative_path))
    }

    /// Load every fixture under `contracts/http/{service}/`, sorted by id.
    pub fn load_service(service: &str) -> Vec<Self> {
        let dir = workspace_root().join("contracts/http").join(service);
        let entries = std::fs::read_dir(&dir)
            .unwrap_or_else(|e| panic!("cannot read {}: {}", dir.display(), e));
        let mut fixtures: Vec<Self> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .map(|p| Self::load_path(&p))
            .collect();
        fixtures.sort_by(|a, b| a.id.cmp(&b.id));
        fixtures
    }

    fn load_path(path: &Path) -> Self {
        let contents = std::fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("fixture not found at {}: {}", path.display(), e));
        serde_json::from_str(&contents)
            .unwrap_or_else(|e| panic!("invalid fixture {}: {}", path.display(), e))
    }
}

/// Walk up from this crate to the directory holding `contracts/`.
fn workspace_root() -> PathBuf {
    let start = Path::new(env!("CARGO_MANIFEST_DIR"));
    start
        .ancestors()
        .find(|a| a.join("contracts").is_dir())
        .unwrap_or(start)
        .to_path_buf()
}
