use serde::{Deserialize, Serialize};

pub const DEFAULT_UPLOADER_CAPTION: &str = "Drop image here or click to select";

/// Host-provided presentation settings. Only the render descriptors read these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub width: String,
    pub height: String,
    /// Background image per quiz step, in step order.
    pub quiz_backgrounds: Vec<String>,
    pub uploader_caption: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            width: "25rem".to_string(),
            height: "15rem".to_string(),
            quiz_backgrounds: Vec::new(),
            uploader_caption: DEFAULT_UPLOADER_CAPTION.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Background for the quiz step at `index`, falling back to the first one.
    pub fn background_for(&self, index: usize) -> String {
        self.quiz_backgrounds
            .get(index)
            .or_else(|| self.quiz_backgrounds.first())
            .cloned()
            .unwrap_or_default()
    }
}
