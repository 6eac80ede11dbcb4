//! Test helpers for writing request files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use courier_core::{Algorithm, OptimizationRequest, Stop, StopSet};
use tempfile::TempDir;

/// Temporary directory holding the files a test writes.
#[derive(Debug)]
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

    pub(super) fn request_path(&self) -> Utf8PathBuf {
        self.path("request.json")
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

pub(super) fn write_request(path: &Utf8Path, request: &OptimizationRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialise request");
    write_utf8(path, payload.as_bytes());
}

/// Depot plus two weight-5 stops on a straight line, ten units long.
pub(super) fn collinear_request() -> OptimizationRequest {
    OptimizationRequest::new(
        StopSet::new(vec![
            Stop::at(0, 0.0, 0.0, 0),
            Stop::at(1, 3.0, 4.0, 5),
            Stop::at(2, 6.0, 8.0, 5),
        ]),
        Algorithm::Greedy,
    )
}

/// Stops where the greedy tour (length 11) loses to the optimum (length 9).
pub(super) fn greedy_trap_request() -> OptimizationRequest {
    OptimizationRequest::new(
        StopSet::new(vec![
            Stop::at(0, 0.0, 0.0, 0),
            Stop::at(1, 1.0, 0.0, 1),
            Stop::at(2, -2.0, 0.0, 1),
            Stop::at(3, 5.0, 0.0, 1),
        ]),
        Algorithm::Greedy,
    )
}
