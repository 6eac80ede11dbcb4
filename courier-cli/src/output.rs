//! JSON output to stdout or a file.

use std::io::Write;

use camino::Utf8Path;
use serde::Serialize;

use crate::CliError;

/// Write `payload` to `output` when given, otherwise to `stdout`.
pub(crate) fn emit<T: Serialize>(
    output: Option<&Utf8Path>,
    stdout: &mut dyn Write,
    payload: &T,
) -> Result<(), CliError> {
    match output {
        Some(path) => {
            let mut file =
                courier_fs::create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                    path: path.to_path_buf(),
                    source,
                })?;
            write_json(&mut file, payload)?;
            log::info!("wrote output to {path}");
            Ok(())
        }
        None => write_json(stdout, payload),
    }
}

/// Pretty-print `payload` as JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(
    writer: &mut dyn Write,
    payload: &T,
) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(payload).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(rendered.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    writer.flush().map_err(CliError::WriteOutput)
}
