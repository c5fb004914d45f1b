/// UI building blocks
///
/// - photo_list.rs: the clickable JPEG list on the left
/// - viewer.rs: the preview pane and its fit-to-width scaling

pub mod photo_list;
pub mod viewer;

/// Padding and spacing around the preview pane
const CHROME_WIDTH: f32 = 40.0;

/// Smallest width the preview is ever scaled to
const MIN_PREVIEW_WIDTH: f32 = 200.0;

/// Width available to the preview for a given window width
pub fn preview_width(window_width: f32) -> f32 {
    (window_width - photo_list::LIST_WIDTH - CHROME_WIDTH).max(MIN_PREVIEW_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_width() {
        assert_eq!(preview_width(1200.0), 910.0);
        assert_eq!(preview_width(100.0), MIN_PREVIEW_WIDTH);
    }
}
