/// Modal notices
///
/// The desktop counterpart of an alert dialog: a title, a line of
/// explanation and an OK button, drawn over the screen that raised it.
use iced::widget::{button, center, column, container, opaque, stack, text};
use iced::{Color, Element};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Draw `notice` over `base`, or return `base` unchanged when there is none
pub fn overlay<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    notice: Option<&'a Notice>,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let Some(notice) = notice else {
        return base;
    };

    let dialog = container(
        column![
            text(&notice.title).size(20),
            text(&notice.body).size(16),
            button("OK").on_press(on_dismiss).padding([6, 24]),
        ]
        .spacing(12),
    )
    .padding(24)
    .max_width(420.0)
    .style(container::rounded_box);

    let backdrop = center(dialog).style(|_theme| container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.6).into()),
        ..container::Style::default()
    });

    stack![base, opaque(backdrop)].into()
}
