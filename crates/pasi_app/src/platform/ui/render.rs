use pasi_core::{Step, ViewDescriptor};

const PREVIEW_CHARS: usize = 48;

/// Turns a view descriptor into the lines printed for the user.
pub fn render(view: &ViewDescriptor) -> Vec<String> {
    let mut lines = Vec::new();
    match view {
        ViewDescriptor::Quiz(quiz) => {
            lines.push(format!(
                "[question {} of 3] {}x{}",
                question_number(quiz.step),
                quiz.width,
                quiz.height
            ));
            if quiz.background_url.is_empty() {
                lines.push("(no image)".to_string());
            } else {
                lines.push(format!("image: {}", quiz.background_url));
            }
            lines.push("type `click` to continue".to_string());
        }
        ViewDescriptor::Uploader(uploader) => {
            let frame = if uploader.drag_over {
                "[[ drop zone ]]"
            } else {
                "[ drop zone ]"
            };
            lines.push(format!("{frame} {}x{}", uploader.width, uploader.height));
            lines.push(uploader.caption.clone());
            if let Some(preview) = &uploader.preview {
                lines.push(format!("preview: {}", abbreviate(preview)));
            }
            if uploader.busy {
                lines.push("analyzing...".to_string());
            }
        }
        ViewDescriptor::Results(results) => {
            lines.push("[results]".to_string());
            lines.extend(results.result.lines().map(ToOwned::to_owned));
            if let Some(preview) = &results.preview {
                lines.push(format!("image: {}", abbreviate(preview)));
            }
        }
    }
    lines
}

fn question_number(step: Step) -> usize {
    step.index() + 1
}

fn abbreviate(payload: &str) -> String {
    match payload.char_indices().nth(PREVIEW_CHARS) {
        Some((end, _)) => format!("{}... ({} chars)", &payload[..end], payload.len()),
        None => payload.to_string(),
    }
}
