use iced::widget::{button, column, container, text, Row};
use iced::{Element, Length, Task, Theme};
use std::sync::Arc;

use gym_progress::config;
use gym_progress::platform::{DialogPicker, SystemShare};
use gym_progress::state::library::ProgressLibrary;
use gym_progress::ui::calendar_screen::{self, CalendarScreen};
use gym_progress::ui::gallery::{self, GalleryScreen};
use gym_progress::ui::upload::{self, UploadScreen};

/// Tabs of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Calendar,
    Upload,
    Gallery,
}

impl Screen {
    const ALL: [Screen; 3] = [Screen::Calendar, Screen::Upload, Screen::Gallery];

    fn label(self) -> &'static str {
        match self {
            Screen::Calendar => "Calendar",
            Screen::Upload => "Upload",
            Screen::Gallery => "History",
        }
    }
}

/// Main application state
struct GymProgress {
    screen: Screen,
    calendar: CalendarScreen,
    upload: UploadScreen,
    gallery: GalleryScreen,
    dark_theme: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    TabSelected(Screen),
    Calendar(calendar_screen::Message),
    Upload(upload::Message),
    Gallery(gallery::Message),
}

impl GymProgress {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = config::load();
        let progress_dir = config.resolve_progress_dir();
        tracing::info!("📁 Progress photos live in {}", progress_dir.display());

        let library = ProgressLibrary::new(progress_dir);

        let calendar = CalendarScreen::new(library.clone(), config.swipe_threshold);
        let upload = UploadScreen::new(
            library.clone(),
            Arc::new(DialogPicker),
            config::staging_dir(),
        );
        let mut gallery = GalleryScreen::new(library, Arc::new(SystemShare));

        let startup = Task::batch([
            calendar.refresh().map(Message::Calendar),
            gallery.refresh().map(Message::Gallery),
        ]);

        (
            GymProgress {
                screen: Screen::Calendar,
                calendar,
                upload,
                gallery,
                dark_theme: config.dark_theme,
            },
            startup,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(screen) => {
                self.screen = screen;

                // Tabs read the directory fresh whenever they are opened
                match screen {
                    Screen::Calendar => self.calendar.refresh().map(Message::Calendar),
                    Screen::Gallery => self.gallery.refresh().map(Message::Gallery),
                    Screen::Upload => Task::none(),
                }
            }
            Message::Upload(upload::Message::VerifyUploads) => {
                self.update(Message::TabSelected(Screen::Gallery))
            }
            Message::Calendar(message) => self.calendar.update(message).map(Message::Calendar),
            Message::Upload(message) => self.upload.update(message).map(Message::Upload),
            Message::Gallery(message) => self.gallery.update(message).map(Message::Gallery),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let tabs = Row::with_children(Screen::ALL.iter().map(|&screen| -> Element<Message> {
            let style = if screen == self.screen {
                button::primary
            } else {
                button::secondary
            };

            button(text(screen.label()))
                .on_press(Message::TabSelected(screen))
                .style(style)
                .padding([8, 20])
                .into()
        }))
        .spacing(8);

        let content = match self.screen {
            Screen::Calendar => self.calendar.view().map(Message::Calendar),
            Screen::Upload => self.upload.view().map(Message::Upload),
            Screen::Gallery => self.gallery.view().map(Message::Gallery),
        };

        column![
            container(tabs).padding(10).center_x(Length::Fill),
            container(content).width(Length::Fill).height(Length::Fill),
        ]
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        if self.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn main() -> iced::Result {
    // Set RUST_LOG=debug for detailed logs
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    tracing::info!("🏋️ Gym Progress starting...");

    iced::application("Gym Progress", GymProgress::update, GymProgress::view)
        .theme(GymProgress::theme)
        .centered()
        .run_with(GymProgress::new)
}
