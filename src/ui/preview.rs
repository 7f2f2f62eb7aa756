use iced::widget::image::Handle;
use iced::widget::{button, center, column, container, image, opaque, row, stack, text, Space};
use iced::{Alignment, Color, ContentFit, Element, Length};
use std::path::{Path, PathBuf};

/// A photo shown full-screen over a list or calendar
#[derive(Debug, Clone)]
pub struct Preview {
    path: PathBuf,
    /// Decoded pixels; `None` while decoding is in flight
    image: Option<Handle>,
}

impl Preview {
    pub fn loading(path: PathBuf) -> Self {
        Self { path, image: None }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loading(&self) -> bool {
        self.image.is_none()
    }

    pub fn show(&mut self, image: Handle) {
        self.image = Some(image);
    }
}

/// Draw `preview` as a modal over `base`
pub fn overlay<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    preview: Option<&'a Preview>,
    on_close: Message,
) -> Element<'a, Message> {
    let Some(preview) = preview else {
        return base;
    };

    let title = preview
        .path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    let header = row![
        text(title).size(16),
        Space::with_width(Length::Fill),
        button(text("✕").size(20)).on_press(on_close).padding([4, 12]),
    ]
    .align_y(Alignment::Center);

    let body: Element<'a, Message> = match &preview.image {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => center(text("Loading…").size(18)).into(),
    };

    let modal = container(column![header, body].spacing(12))
        .padding(20)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.9).into()),
            text_color: Some(Color::WHITE),
            ..container::Style::default()
        });

    stack![base, opaque(modal)].into()
}
