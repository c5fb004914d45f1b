use clap::Parser;
use iced::widget::{button, column, container, pick_list, row, text, Column};
use iced::{keyboard, window, Alignment, Element, Length, Size, Subscription, Task, Theme};
use rfd::FileDialog;

mod config;
mod metadata;
mod state;
mod ui;

use config::{Cli, Settings};
use state::{Outcome, PhotoDisplay, RawFormat, TriageResult, TriageSession, NO_SELECTION};

/// Initial window size
const WINDOW_SIZE: Size = Size::new(1200.0, 800.0);

/// Main application state
struct PhotoTriage {
    /// The folder being triaged, its photo list and cursor
    session: TriageSession,
    /// Details of the current photo (None when finished or empty)
    display: Option<PhotoDisplay>,
    /// Last action failure, shown under the controls
    notice: Option<String>,
    /// Current window width, used to scale the preview
    window_width: f32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked "Select Folder"
    SelectFolder,
    /// User picked another RAW extension
    RawFormatSelected(RawFormat),
    /// User clicked a photo in the list
    PhotoSelected(usize),
    /// Keep JPEG and RAW (Q)
    KeepAll,
    /// Keep the JPEG, delete the RAW (W)
    KeepJpeg,
    /// Delete JPEG and RAW (E)
    DeleteAll,
    /// Window was resized
    WindowResized(Size),
}

impl PhotoTriage {
    /// Create a new instance of the application
    fn new(settings: Settings) -> (Self, Task<Message>) {
        let session = TriageSession::new(settings.directory, settings.raw_format);
        let mut app = PhotoTriage {
            session,
            display: None,
            notice: None,
            window_width: WINDOW_SIZE.width,
        };
        app.refresh();

        // Without a folder on the command line, ask for one right away
        let task = if settings.pick_folder_on_start {
            Task::done(Message::SelectFolder)
        } else {
            Task::none()
        };

        (app, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Folder")
                    .set_directory(self.session.directory())
                    .pick_folder();

                if let Some(folder_path) = folder {
                    self.session.set_directory(folder_path);
                    self.notice = None;
                    self.refresh();
                }
            }
            Message::RawFormatSelected(raw_format) => {
                self.session.set_raw_format(raw_format);
                self.notice = None;
                self.refresh();
            }
            Message::PhotoSelected(index) => {
                self.session.select(isize::try_from(index).unwrap_or(NO_SELECTION));
                self.notice = None;
                self.refresh();
            }
            Message::KeepAll => {
                let outcome = self.session.keep_all();
                self.after_action(Ok(outcome));
            }
            Message::KeepJpeg => {
                let result = self.session.keep_jpeg();
                self.after_action(result);
            }
            Message::DeleteAll => {
                let result = self.session.delete_all();
                self.after_action(result);
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
            }
        }

        Task::none()
    }

    /// Show a failed action as a notice and redisplay whatever is current
    fn after_action(&mut self, result: TriageResult<Outcome>) {
        self.notice = match result {
            Ok(_) => None,
            Err(e) => Some(e.to_string()),
        };
        self.refresh();
    }

    /// Re-read the current photo's details from disk
    fn refresh(&mut self) {
        self.display = self.session.display();
        if let Some(display) = &self.display {
            log::debug!("{}", display.status());
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let folder_label = match &self.display {
            Some(display) => display.folder_label(),
            None => format!("Current Folder: {}", self.session.directory().display()),
        };
        let file_label = match &self.display {
            Some(display) => display.file_label(),
            None => "Current File:".to_string(),
        };

        let header = row![
            text(folder_label).size(14).width(Length::FillPortion(1)),
            text(file_label).size(14).width(Length::FillPortion(2)),
        ]
        .spacing(20);

        let body = row![
            ui::photo_list::view(
                self.session.photos(),
                self.session.raw_format(),
                self.session.cursor(),
            ),
            ui::viewer::view(
                self.display.as_ref(),
                self.session.outcome(),
                ui::preview_width(self.window_width),
            ),
        ]
        .spacing(10)
        .height(Length::Fill);

        let can_act = !self.session.is_finished() && !self.session.photos().is_empty();
        let controls = row![
            button("Select Folder")
                .on_press(Message::SelectFolder)
                .padding(10),
            button("Keep All (Q)")
                .on_press_maybe(can_act.then_some(Message::KeepAll))
                .padding(10),
            button("Keep JPG (W)")
                .on_press_maybe(can_act.then_some(Message::KeepJpeg))
                .padding(10),
            button("Delete All (E)")
                .on_press_maybe(can_act.then_some(Message::DeleteAll))
                .style(button::danger)
                .padding(10),
            pick_list(
                &RawFormat::ALL[..],
                Some(self.session.raw_format()),
                Message::RawFormatSelected,
            ),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let mut content: Column<Message> = column![header, body, controls]
            .spacing(10)
            .padding(10);

        if let Some(notice) = self.notice.as_deref().or(self.session.load_error()) {
            content = content.push(text(notice).size(14).style(text::danger));
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Keyboard shortcuts and window resizes
    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            keyboard::on_key_press(shortcut),
            window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
        ])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Map Q / W / E (any case, no modifiers) to the triage actions
fn shortcut(key: keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    let keyboard::Key::Character(c) = key.as_ref() else {
        return None;
    };

    match c.to_ascii_lowercase().as_str() {
        "q" => Some(Message::KeepAll),
        "w" => Some(Message::KeepJpeg),
        "e" => Some(Message::DeleteAll),
        _ => None,
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("photo_triage=info"),
    )
    .init();

    let settings = Settings::from_cli(Cli::parse());
    log::info!(
        "🎨 Photo Triage starting in {} ({})",
        settings.directory.display(),
        settings.raw_format
    );

    iced::application("Photo Triage", PhotoTriage::update, PhotoTriage::view)
        .theme(PhotoTriage::theme)
        .subscription(PhotoTriage::subscription)
        .window_size(WINDOW_SIZE)
        .centered()
        .run_with(move || PhotoTriage::new(settings))
}
