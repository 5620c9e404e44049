//! Text sources: files and direct entry

use std::fs;
use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use crate::config::END_TEXT_SENTINEL;
use crate::errors::{CliError, Result};

/// Reads a UTF-8 text file.
///
/// # Errors
/// `CliError::InputUnavailable` if the file is missing, unreadable or not UTF-8.
pub fn load_file(path: impl AsRef<Path>) -> Result<String> {
  let path = path.as_ref();
  let text = fs::read_to_string(path).map_err(|e| CliError::input_unavailable(path, e))?;
  debug!(path = %path.display(), bytes = text.len(), "text file read");
  Ok(text)
}

/// Reads one line without its terminator; `None` at end of input.
///
/// The whole line is consumed even when it is not UTF-8, so the next read
/// starts on the following line.
///
/// # Errors
/// - `CliError::InvalidEncoding` if the line is not valid UTF-8
/// - `CliError::Io` if the reader fails
pub fn read_text_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
  let mut buf = Vec::new();
  if reader.read_until(b'\n', &mut buf)? == 0 {
    return Ok(None);
  }
  let line = String::from_utf8(buf).map_err(|_| CliError::InvalidEncoding)?;
  Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Collects lines until one equals [`END_TEXT_SENTINEL`] or input ends.
///
/// The sentinel line itself is not included. Lines are joined with `\n`.
///
/// # Errors
/// `CliError::InvalidEncoding` if any entered line is not UTF-8. Reading still
/// continues through the sentinel so the rest of the entry is not taken as
/// menu commands.
pub fn read_until_sentinel<R: BufRead>(reader: &mut R) -> Result<String> {
  let mut lines = Vec::new();
  let mut invalid = 0usize;
  loop {
    match read_text_line(reader) {
      Ok(None) => break,
      Ok(Some(line)) if line == END_TEXT_SENTINEL => break,
      Ok(Some(line)) => lines.push(line),
      Err(CliError::InvalidEncoding) => invalid += 1,
      Err(err) => return Err(err),
    }
  }
  debug!(lines = lines.len(), invalid, "direct text entry finished");
  if invalid > 0 {
    return Err(CliError::InvalidEncoding);
  }
  Ok(lines.join("\n"))
}
