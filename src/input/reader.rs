use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{self, Read};

/// Largest input accepted for one translation request.
pub const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

pub struct InputReader;

impl InputReader {
    /// Reads the text to translate from `file_path`, or stdin when absent.
    ///
    /// A single trailing newline is stripped, since shells and editors add
    /// one that is not part of the text.
    pub fn read(file_path: Option<&str>) -> Result<String> {
        let text = match file_path {
            Some(path) => {
                let file =
                    File::open(path).with_context(|| format!("Failed to access file: {path}"))?;
                Self::read_bounded(file).with_context(|| format!("Failed to read file: {path}"))?
            }
            None => Self::read_bounded(io::stdin().lock()).context("Failed to read from stdin")?,
        };

        Ok(strip_trailing_newline(text))
    }

    /// Reads all of `source` as UTF-8, failing once it exceeds the limit.
    pub fn read_bounded<R: Read>(source: R) -> Result<String> {
        let mut buffer = Vec::new();
        // Read one byte past the limit so oversize input is detectable.
        source
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_end(&mut buffer)?;

        if buffer.len() > MAX_INPUT_SIZE {
            bail!(
                "Input exceeds maximum allowed size (1 MB).\n\n\
                 Consider splitting the text into smaller parts."
            );
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
