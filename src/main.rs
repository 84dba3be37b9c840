// Hide the console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use iced::widget::{button, column, container, pick_list, radio, row, text, text_input, Column};
use iced::{event, window, Alignment, Element, Event, Length, Size, Subscription, Task, Theme};
use std::path::PathBuf;
use tracing::info;

mod config;
mod error;
mod logging;
mod resize;
mod state;
mod ui;

use resize::Outcome;
use state::{Preset, ResizeRequest, SaveMode};
use ui::dialogs::{MessageDialogNotifier, SaveDialog};

/// Main application state (the view-model the resize request is built from)
struct ImageResizer {
    /// Source path as shown in the text field
    source: String,
    /// Selected target size
    preset: Preset,
    /// Selected destination policy
    save_mode: SaveMode,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User typed in the source field
    SourceEdited(String),
    /// User clicked "Browse..."
    Browse,
    /// A file was dropped onto the window
    FileDropped(PathBuf),
    /// User picked a size
    PresetSelected(Preset),
    /// User picked a destination policy
    SaveModeSelected(SaveMode),
    /// User clicked "Resize"
    Execute,
}

impl ImageResizer {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        info!("🎨 {} started", config::APP_TITLE);

        (
            ImageResizer {
                source: String::new(),
                preset: Preset::default(),
                save_mode: SaveMode::default(),
                status: "Ready.".to_string(),
            },
            Task::none(),
        )
    }

    /// Snapshot the current selections into an immutable request
    fn request(&self) -> ResizeRequest {
        ResizeRequest::new(self.source.as_str(), self.preset, self.save_mode)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SourceEdited(source) => {
                self.source = source;
            }
            Message::Browse => {
                if let Some(path) = ui::dialogs::pick_source(&self.source) {
                    info!(source = %path.display(), "📂 Selected file");
                    self.source = path.to_string_lossy().into_owned();
                }
            }
            Message::FileDropped(path) => {
                self.source = ui::drop::normalize_drop_path(&path.to_string_lossy());
                info!(source = %self.source, "📥 Dropped file");
            }
            Message::PresetSelected(preset) => {
                self.preset = preset;
            }
            Message::SaveModeSelected(save_mode) => {
                self.save_mode = save_mode;
            }
            Message::Execute => {
                // Runs on the UI thread; no other message is handled until it returns
                let result = resize::execute(&self.request(), &SaveDialog);

                match &result {
                    Ok(Outcome::Saved(destination)) => {
                        self.status = format!("✅ Saved {}", destination.display());
                    }
                    Ok(Outcome::Cancelled) => {}
                    Err(err) => {
                        self.status = format!("❌ {}", err);
                    }
                }

                resize::report(&result, &MessageDialogNotifier);
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let source = row![
            text_input("Drop an image here or browse...", &self.source)
                .on_input(Message::SourceEdited)
                .padding(5),
            button("Browse...").on_press(Message::Browse),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let size = pick_list(Preset::ALL, Some(self.preset), Message::PresetSelected)
            .width(Length::Fill);

        let destination = column![
            radio(
                "Save in the same folder (name_resized)",
                SaveMode::SameFolder,
                Some(self.save_mode),
                Message::SaveModeSelected,
            ),
            radio(
                "Choose a folder when saving",
                SaveMode::ArbitraryFolder,
                Some(self.save_mode),
                Message::SaveModeSelected,
            ),
        ]
        .spacing(6);

        let content: Column<Message> = column![
            text("1. Select an image (drag & drop supported)").size(14),
            source,
            text("2. Select a size").size(14),
            size,
            text("3. Destination").size(14),
            destination,
            button(text("Resize").width(Length::Fill).align_x(Alignment::Center))
                .on_press(Message::Execute)
                .width(Length::Fill)
                .padding(10),
            text(&self.status).size(12),
        ]
        .spacing(10)
        .padding(15);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Forward file drops on the window to the source field
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    logging::init();

    let (width, height) = config::WINDOW_SIZE;

    iced::application(config::APP_TITLE, ImageResizer::update, ImageResizer::view)
        .subscription(ImageResizer::subscription)
        .theme(ImageResizer::theme)
        .window_size(Size::new(width, height))
        .centered()
        .run_with(ImageResizer::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> ImageResizer {
        ImageResizer::new().0
    }

    #[test]
    fn test_defaults() {
        let app = app();
        let request = app.request();

        assert_eq!(request.preset, Preset::ALL[0]);
        assert_eq!(request.save_mode, SaveMode::SameFolder);
        assert!(request.source.as_os_str().is_empty());
        assert_eq!(app.status, "Ready.");
    }

    #[test]
    fn test_drop_sets_cleaned_source() {
        let mut app = app();
        let _ = app.update(Message::FileDropped(PathBuf::from("{/home/me/My Pictures/cat.png}")));

        assert_eq!(app.source, "/home/me/My Pictures/cat.png");
        assert_eq!(app.request().source, PathBuf::from("/home/me/My Pictures/cat.png"));
    }

    #[test]
    fn test_request_reflects_selections() {
        let mut app = app();
        let hd = Preset::from_label("HD (1280 x 720)").unwrap();

        let _ = app.update(Message::SourceEdited("/a/b/photo.JPG".to_string()));
        let _ = app.update(Message::PresetSelected(hd));
        let _ = app.update(Message::SaveModeSelected(SaveMode::ArbitraryFolder));

        assert_eq!(
            app.request(),
            ResizeRequest::new("/a/b/photo.JPG", hd, SaveMode::ArbitraryFolder)
        );
    }
}
