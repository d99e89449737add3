// Library root
// -----------
// Probe for the image-to-flashcards endpoint. The binary (`main.rs`)
// parses arguments and calls `run`; everything else lives here so it can
// be driven from tests.
//
// Module responsibilities:
// - `image`: read and base64-encode the image, infer its MIME type.
// - `payload`: the JSON request body and its fixed defaults.
// - `api`: blocking HTTP client for the backend.
// - `ui`: what gets printed, and the waiting spinner.
// - `error`: failures that end a run with a non-zero status.
pub mod api;
pub mod error;
pub mod image;
pub mod payload;
pub mod ui;

use std::io::Write;
use std::path::Path;

use api::{ApiClient, ProbeConfig};
use error::Result;
use image::ImagePayload;
use payload::{FlashcardRequest, RequestDefaults};
use ui::Outcome;

/// One probe run: load the image, send it once, print the result to `out`.
///
/// A missing image fails before any network traffic. Non-200 answers come
/// back as `Outcome::Rejected` rather than an error.
pub fn run(
    config: &ProbeConfig,
    defaults: &RequestDefaults,
    image_path: &Path,
    token: &str,
    out: &mut impl Write,
) -> Result<Outcome> {
    let image = ImagePayload::load(image_path)?;
    let request = FlashcardRequest::new(defaults, &image);

    let mut api = ApiClient::new(config)?;
    api.set_token(token);

    ui::print_preflight(out, &image, &api.generate_image_url())?;
    out.flush()?;

    let spinner = ui::waiting_spinner();
    let response = api.generate_from_image(&request);
    spinner.finish_and_clear();
    let response = response?;

    ui::print_status(out, response.status)?;
    let outcome = Outcome::from_response(response)?;
    ui::print_outcome(out, &outcome)?;
    if let Outcome::Rejected { status, .. } = &outcome {
        tracing::warn!(status, "backend rejected the request");
    }
    Ok(outcome)
}
