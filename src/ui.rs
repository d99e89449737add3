// UI layer: everything the probe prints. Output goes to a caller-supplied
// writer so tests can capture it; the spinner draws on stderr only.

use crate::api::ApiResponse;
use crate::error::{ProbeError, Result};
use crate::image::ImagePayload;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::io::Write;
use std::time::Duration;

/// How a request that reached the backend ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 200 with a JSON collection of flashcards.
    Generated { count: usize, body: Value },
    /// Any other status. Not an error for exit-code purposes.
    Rejected { status: u16, body: String },
}

impl Outcome {
    /// Classify a raw response. A 200 body must be a JSON array or object.
    pub fn from_response(res: ApiResponse) -> Result<Self> {
        if res.status != 200 {
            return Ok(Outcome::Rejected {
                status: res.status,
                body: res.body,
            });
        }
        let body: Value = serde_json::from_str(&res.body)
            .map_err(|e| ProbeError::InvalidResponse(e.to_string()))?;
        let count = match &body {
            Value::Array(cards) => cards.len(),
            Value::Object(fields) => fields.len(),
            other => {
                return Err(ProbeError::InvalidResponse(format!(
                    "expected a JSON array of flashcards, got {}",
                    other
                )))
            }
        };
        Ok(Outcome::Generated { count, body })
    }
}

/// Lines printed before the request goes out.
pub fn print_preflight(out: &mut impl Write, image: &ImagePayload, url: &str) -> Result<()> {
    writeln!(out, "Testing Image to Flashcards endpoint...")?;
    writeln!(out, "Image: {} ({})", image.path.display(), image.mime_type)?;
    writeln!(out, "Base64 length: {} characters", image.encoded_len())?;
    writeln!(out, "Sending request to {}...", url)?;
    writeln!(out)?;
    Ok(())
}

/// Printed as soon as a response arrives, before the body is looked at.
pub fn print_status(out: &mut impl Write, status: u16) -> Result<()> {
    writeln!(out, "Response Status: {}", status)?;
    writeln!(out)?;
    Ok(())
}

pub fn print_outcome(out: &mut impl Write, outcome: &Outcome) -> Result<()> {
    match outcome {
        Outcome::Generated { count, body } => {
            let pretty = serde_json::to_string_pretty(body)
                .map_err(|e| ProbeError::InvalidResponse(e.to_string()))?;
            let pretty = escape_non_ascii(&pretty);
            writeln!(out, "✅ Success! Generated {} flashcards", count)?;
            writeln!(out)?;
            writeln!(out, "{}", pretty)?;
        }
        Outcome::Rejected { status, body } => {
            writeln!(out, "❌ Error: {}", status)?;
            writeln!(out, "{}", body)?;
        }
    }
    Ok(())
}

/// Rewrite every non-ASCII char as a `\uXXXX` escape (surrogate pairs
/// above the BMP). Only valid on serialized JSON, where such chars can only
/// occur inside strings.
pub fn escape_non_ascii(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() {
            escaped.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                escaped.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    escaped
}

/// Spinner shown while waiting on the backend. Hidden automatically when
/// stderr is not a terminal.
pub fn waiting_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} [{elapsed}]") {
        spinner.set_style(style);
    }
    spinner.set_message("Waiting for flashcards...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
