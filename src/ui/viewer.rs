/// Preview pane: the current photo scaled to the pane width,
/// or a message when there is nothing to show
use iced::widget::{container, image, scrollable, text};
use iced::{ContentFit, Element, Length};

use crate::state::{Outcome, PhotoDisplay, FINISHED_MESSAGE};
use crate::Message;

/// Message shown when the folder has no JPEGs
pub const EMPTY_MESSAGE: &str = "No JPEG files in this folder";

/// Scale an image to `target_width`, keeping its aspect ratio
///
/// Returns (width, height) in logical pixels. Degenerate sizes collapse to zero.
pub fn fit_to_width(image_size: (u32, u32), target_width: f32) -> (f32, f32) {
    let (width, height) = image_size;
    if width == 0 || height == 0 || target_width <= 0.0 {
        return (0.0, 0.0);
    }

    let scale = target_width / width as f32;
    (target_width, height as f32 * scale)
}

pub fn view<'a>(
    display: Option<&'a PhotoDisplay>,
    outcome: Outcome,
    pane_width: f32,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match (display, outcome) {
        (Some(display), Outcome::Show(_)) => {
            let photo = image(image::Handle::from_path(&display.path));
            let photo = match display.pixel_size {
                Some(size) => {
                    let (width, height) = fit_to_width(size, pane_width);
                    photo
                        .width(Length::Fixed(width))
                        .height(Length::Fixed(height))
                        .content_fit(ContentFit::Fill)
                }
                None => photo.width(Length::Fill).content_fit(ContentFit::Contain),
            };
            scrollable(photo).height(Length::Fill).into()
        }
        (_, Outcome::Finished) => message(FINISHED_MESSAGE),
        (_, Outcome::Empty) => message(EMPTY_MESSAGE),
        (None, Outcome::Show(_)) => message("Cannot read this photo"),
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn message<'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).size(24))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
