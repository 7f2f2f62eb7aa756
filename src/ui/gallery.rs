/// Progress history screen
///
/// Lists every saved photo (newest first), previews one in a modal or
/// hands it to the OS. The listing only changes on an explicit refresh.
use iced::widget::image::Handle;
use iced::widget::{button, center, column, container, row, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length, Task};
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Error;
use crate::photo::preview::load_preview;
use crate::platform::{Share, JPEG_MIME};
use crate::state::data::ProgressEntry;
use crate::state::library::ProgressLibrary;
use crate::ui::notice::{self, Notice};
use crate::ui::preview::{self, Preview};

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    Loaded(Result<Vec<ProgressEntry>, Error>),
    Preview(String),
    PreviewLoaded(PathBuf, Result<Handle, Error>),
    ClosePreview,
    Share(String),
    DismissNotice,
}

/// State of the file listing
#[derive(Debug, Clone)]
pub enum Listing {
    Loading,
    Failed(String),
    Ready(Vec<ProgressEntry>),
}

pub struct GalleryScreen {
    library: ProgressLibrary,
    share: Arc<dyn Share>,
    listing: Listing,
    preview: Option<Preview>,
    notice: Option<Notice>,
}

impl GalleryScreen {
    pub fn new(library: ProgressLibrary, share: Arc<dyn Share>) -> Self {
        Self {
            library,
            share,
            listing: Listing::Loading,
            preview: None,
            notice: None,
        }
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Re-read the progress directory
    pub fn refresh(&mut self) -> Task<Message> {
        self.listing = Listing::Loading;

        let library = self.library.clone();
        Task::perform(async move { library.list().await }, Message::Loaded)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Refresh => self.refresh(),
            Message::Loaded(Ok(entries)) => {
                tracing::info!("📂 {} progress photos in history", entries.len());
                self.listing = Listing::Ready(entries);
                Task::none()
            }
            Message::Loaded(Err(err)) => {
                tracing::error!("❌ File loading error: {}", err);
                self.listing = Listing::Failed("Failed to load files".to_string());
                Task::none()
            }
            Message::Preview(filename) => {
                let path = self.library.path_of(&filename);
                self.preview = Some(Preview::loading(path.clone()));

                Task::perform(load_preview(path.clone()), move |result| {
                    Message::PreviewLoaded(path.clone(), result)
                })
            }
            Message::PreviewLoaded(path, result) => {
                let Some(preview) = self.preview.as_mut() else {
                    return Task::none();
                };
                if preview.path() != path.as_path() {
                    return Task::none();
                }

                match result {
                    Ok(handle) => preview.show(handle),
                    Err(err) => {
                        tracing::error!("❌ Failed to load {}: {}", path.display(), err);
                        self.preview = None;
                        self.notice = Some(Notice::new("Error", "Failed to load image"));
                    }
                }
                Task::none()
            }
            Message::ClosePreview => {
                self.preview = None;
                Task::none()
            }
            Message::Share(filename) => {
                let path = self.library.path_of(&filename);
                if let Err(err) = self.share.share(&path, JPEG_MIME) {
                    tracing::error!("❌ Sharing failed: {}", err);
                    self.notice = Some(Notice::new("Error", "Could not share file"));
                }
                Task::none()
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        let body: Element<Message> = match &self.listing {
            Listing::Loading => center(text("Loading…").size(18)).into(),
            Listing::Failed(error) => center(text(error).size(16).style(text::danger)).into(),
            Listing::Ready(entries) if entries.is_empty() => {
                center(text("No progress images found").size(16)).into()
            }
            Listing::Ready(entries) => {
                let rows = entries.iter().map(entry_row);
                scrollable(Column::with_children(rows).spacing(12))
                    .height(Length::Fill)
                    .into()
            }
        };

        let content: Element<Message> = column![
            text("Progress History").size(28),
            container(body).height(Length::Fill),
            button(text("Refresh List"))
                .on_press(Message::Refresh)
                .padding(12)
                .width(Length::Fill),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Alignment::Center)
        .into();

        let content = preview::overlay(content, self.preview.as_ref(), Message::ClosePreview);
        notice::overlay(content, self.notice.as_ref(), Message::DismissNotice)
    }
}

fn entry_row(entry: &ProgressEntry) -> Element<Message> {
    let actions = row![
        button(text("Preview"))
            .on_press(Message::Preview(entry.filename.clone()))
            .style(button::primary)
            .padding([8, 16]),
        button(text("Share"))
            .on_press(Message::Share(entry.filename.clone()))
            .style(button::success)
            .padding([8, 16]),
    ]
    .spacing(10);

    container(
        row![text(&entry.filename).size(14), Space::with_width(Length::Fill), actions]
            .align_y(Alignment::Center),
    )
    .padding(15)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}
