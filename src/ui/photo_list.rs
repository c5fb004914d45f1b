use iced::widget::{button, scrollable, text, Column};
use iced::{Element, Length, Theme};

use crate::state::{PhotoEntry, RawFormat};
use crate::Message;

/// Width of the photo list column
pub const LIST_WIDTH: f32 = 250.0;

/// Clickable list of JPEGs; the current one is highlighted
pub fn view<'a>(
    photos: &'a [PhotoEntry],
    raw_format: RawFormat,
    selected: Option<usize>,
) -> Element<'a, Message> {
    let items = photos.iter().enumerate().map(|(index, photo)| -> Element<'a, Message> {
        let style: fn(&Theme, button::Status) -> button::Style = if selected == Some(index) {
            button::primary
        } else {
            button::text
        };

        button(text(photo.label(raw_format)).size(14))
            .on_press(Message::PhotoSelected(index))
            .width(Length::Fill)
            .style(style)
            .into()
    });

    scrollable(Column::with_children(items).spacing(2))
        .width(Length::Fixed(LIST_WIDTH))
        .height(Length::Fill)
        .into()
}
