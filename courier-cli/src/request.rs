//! Locating, decoding and validating request files.

use std::io::{BufReader, ErrorKind};

use camino::Utf8Path;
use courier_core::OptimizationRequest;
use courier_fs::open_utf8_file;

use crate::CliError;

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match courier_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == ErrorKind::NotFound => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads a JSON-encoded [`OptimizationRequest`] from disk.
pub(crate) fn load_request(path: &Utf8Path) -> Result<OptimizationRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

/// Reject requests the algorithms cannot safely run.
pub(crate) fn validate_request(
    request: &OptimizationRequest,
    path: &Utf8Path,
) -> Result<(), CliError> {
    request
        .validate()
        .map_err(|source| CliError::InvalidRequest {
            path: path.to_path_buf(),
            source,
        })
}
