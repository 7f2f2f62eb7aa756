/// Calendar screen with date-linked preview
///
/// Pages through months by drag or buttons, and shows the progress photo
/// saved for a tapped day. A tap walks the preview flow:
/// `Idle -> Checking -> Displaying | NotFound | Failed -> Idle`.
use iced::widget::image::Handle;
use iced::widget::{button, column, row, text, Canvas, Space};
use iced::{Alignment, Element, Length, Task};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::photo::preview::load_preview;
use crate::state::data::Lookup;
use crate::state::date::{DateId, MonthDelta, MonthId};
use crate::state::library::ProgressLibrary;
use crate::state::navigator::MonthNavigator;
use crate::state::selector::DateSelector;
use crate::ui::calendar::MonthGrid;
use crate::ui::notice::{self, Notice};
use crate::ui::preview::{self, Preview};

#[derive(Debug, Clone)]
pub enum Message {
    /// A drag on the grid was released with this horizontal displacement
    Swiped(f32),
    /// Month title buttons
    Step(MonthDelta),
    DayPressed(DateId),
    Checked(DateId, Result<Lookup, Error>),
    PreviewLoaded(PathBuf, Result<Handle, Error>),
    MarksLoaded(MonthId, Result<Vec<DateId>, Error>),
    ClosePreview,
    DismissNotice,
}

/// Where the date-linked preview currently stands
#[derive(Debug, Clone)]
pub enum PreviewFlow {
    Idle,
    Checking(DateId),
    Displaying(Preview),
    NotFound(DateId),
    Failed(DateId),
}

pub struct CalendarScreen {
    library: ProgressLibrary,
    navigator: MonthNavigator,
    selector: DateSelector,
    /// Days of the current month that have a photo
    marked: HashSet<DateId>,
    flow: PreviewFlow,
    notice: Option<Notice>,
}

impl CalendarScreen {
    pub fn new(library: ProgressLibrary, swipe_threshold: f32) -> Self {
        let today = DateId::today();
        Self {
            library,
            navigator: MonthNavigator::new(today.month(), swipe_threshold),
            selector: DateSelector::new(today),
            marked: HashSet::new(),
            flow: PreviewFlow::Idle,
            notice: None,
        }
    }

    pub fn current_month(&self) -> MonthId {
        self.navigator.current()
    }

    pub fn selected_date(&self) -> DateId {
        self.selector.selected()
    }

    pub fn flow(&self) -> &PreviewFlow {
        &self.flow
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Path of the photo shown full-screen, if any
    pub fn preview_uri(&self) -> Option<&Path> {
        match &self.flow {
            PreviewFlow::Displaying(preview) => Some(preview.path()),
            _ => None,
        }
    }

    /// Whether a lookup or decode is in flight
    pub fn is_loading(&self) -> bool {
        match &self.flow {
            PreviewFlow::Checking(_) => true,
            PreviewFlow::Displaying(preview) => preview.is_loading(),
            _ => false,
        }
    }

    /// Reload the photo marks for the month on display
    pub fn refresh(&self) -> Task<Message> {
        let library = self.library.clone();
        let month = self.navigator.current();

        Task::perform(
            async move { library.dates_in_month(month).await },
            move |result| Message::MarksLoaded(month, result),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Swiped(dx) => {
                if self.navigator.on_release(dx).is_some() {
                    self.marked.clear();
                    return self.refresh();
                }
                Task::none()
            }
            Message::Step(delta) => {
                self.navigator.step(delta);
                self.marked.clear();
                self.refresh()
            }
            Message::DayPressed(date) => {
                self.flow = PreviewFlow::Checking(date);

                let library = self.library.clone();
                Task::perform(
                    async move { library.lookup(date).await },
                    move |result| Message::Checked(date, result),
                )
            }
            Message::Checked(date, result) => {
                // A newer tap or a closed preview supersedes this answer
                if !matches!(self.flow, PreviewFlow::Checking(pending) if pending == date) {
                    return Task::none();
                }

                match result {
                    Ok(Lookup::Found(path)) => {
                        self.selector.select(date);
                        self.flow = PreviewFlow::Displaying(Preview::loading(path.clone()));

                        Task::perform(load_preview(path.clone()), move |result| {
                            Message::PreviewLoaded(path.clone(), result)
                        })
                    }
                    Ok(Lookup::Missing) => {
                        tracing::info!("🔍 {}", Error::NotFound(date));
                        self.flow = PreviewFlow::NotFound(date);
                        self.notice = Some(Notice::new(
                            "No image found",
                            "No progress image for this date",
                        ));
                        Task::none()
                    }
                    Ok(Lookup::NoLibrary) => {
                        self.flow = PreviewFlow::Idle;
                        self.notice = Some(Notice::new(
                            "No progress found",
                            "You haven't saved any progress yet",
                        ));
                        Task::none()
                    }
                    Err(err) => {
                        tracing::error!("❌ Error checking image for {}: {}", date, err);
                        self.flow = PreviewFlow::Failed(date);
                        self.notice = Some(Notice::new("Error", "Failed to check for image"));
                        Task::none()
                    }
                }
            }
            Message::PreviewLoaded(path, result) => {
                let PreviewFlow::Displaying(preview) = &mut self.flow else {
                    return Task::none();
                };
                if preview.path() != path.as_path() {
                    return Task::none();
                }

                match result {
                    Ok(handle) => preview.show(handle),
                    Err(err) => {
                        tracing::error!("❌ Failed to load {}: {}", path.display(), err);
                        self.flow = PreviewFlow::Idle;
                        self.notice = Some(Notice::new("Error", "Failed to load image"));
                    }
                }
                Task::none()
            }
            Message::MarksLoaded(month, result) => {
                if month != self.navigator.current() {
                    return Task::none();
                }

                match result {
                    Ok(dates) => self.marked = dates.into_iter().collect(),
                    Err(err) => tracing::warn!("⚠️  Could not read photos for {}: {}", month, err),
                }
                Task::none()
            }
            Message::ClosePreview => {
                self.flow = PreviewFlow::Idle;
                Task::none()
            }
            Message::DismissNotice => {
                self.notice = None;
                if matches!(self.flow, PreviewFlow::NotFound(_) | PreviewFlow::Failed(_)) {
                    self.flow = PreviewFlow::Idle;
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        let month = self.navigator.current();

        let header = row![
            button(text("‹").size(20))
                .on_press(Message::Step(MonthDelta::Previous))
                .padding([4, 14]),
            Space::with_width(Length::Fill),
            text(month.title()).size(22),
            Space::with_width(Length::Fill),
            button(text("›").size(20))
                .on_press(Message::Step(MonthDelta::Next))
                .padding([4, 14]),
        ]
        .align_y(Alignment::Center);

        let status = if self.is_loading() { "Loading…" } else { "" };

        let grid = Canvas::new(MonthGrid {
            month,
            selected: self.selector.selected(),
            today: DateId::today(),
            marked: self.marked.clone(),
        })
        .width(Length::Fill)
        .height(Length::Fixed(360.0));

        let content: Element<Message> = column![
            text(format!("Selected date: {}", self.selector.selected())).size(16),
            header,
            grid,
            text(status).size(14),
        ]
        .spacing(16)
        .padding(20)
        .into();

        let preview = match &self.flow {
            PreviewFlow::Displaying(preview) => Some(preview),
            _ => None,
        };

        let content = preview::overlay(content, preview, Message::ClosePreview);
        notice::overlay(content, self.notice.as_ref(), Message::DismissNotice)
    }
}
