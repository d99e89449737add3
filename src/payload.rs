// Request body for the image-to-flashcards endpoint.

use crate::image::ImagePayload;
use serde::Serialize;

/// Fixed fields of every request. The defaults are the test fixtures the
/// endpoint is normally probed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDefaults {
    pub deck_id: String,
    pub user_id: String,
    pub prompt: String,
    pub count: u32,
    pub difficulty: String,
    pub category: String,
    pub model: String,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        RequestDefaults {
            deck_id: "test-deck-123".into(),
            user_id: "test-user-456".into(),
            prompt: "Generate flashcards from this image focusing on key concepts and details"
                .into(),
            count: 5,
            difficulty: "MEDIUM".into(),
            category: "Test".into(),
            model: "GPT_4O".into(),
        }
    }
}

/// JSON payload, field names as the backend expects them.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardRequest {
    pub deck_id: String,
    pub user_id: String,
    pub image_base64: String,
    pub image_mime_type: String,
    pub prompt: String,
    pub count: u32,
    pub difficulty: String,
    pub category: String,
    pub model: String,
}

impl FlashcardRequest {
    pub fn new(defaults: &RequestDefaults, image: &ImagePayload) -> Self {
        FlashcardRequest {
            deck_id: defaults.deck_id.clone(),
            user_id: defaults.user_id.clone(),
            image_base64: image.base64.clone(),
            image_mime_type: image.mime_type.to_string(),
            prompt: defaults.prompt.clone(),
            count: defaults.count,
            difficulty: defaults.difficulty.clone(),
            category: defaults.category.clone(),
            model: defaults.model.clone(),
        }
    }
}
