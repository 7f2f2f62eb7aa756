use chrono::Datelike;
use iced::alignment;
use iced::mouse::{self, Cursor};
use iced::touch;
use iced::widget::canvas::{self, event, Frame, Path, Program, Stroke, Text};
use iced::{Pixels, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::collections::HashSet;

use crate::state::date::{DateId, MonthId};
use crate::ui::calendar_screen::Message;

/// Releases closer than this to the press point are taps, not drags
pub const TAP_SLOP: f32 = 10.0;

/// Height of the weekday header row
const HEADER_HEIGHT: f32 = 28.0;
const WEEKS: usize = 6;
const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month grid drawn on a canvas.
///
/// Besides drawing, the grid is the gesture recognizer for the calendar:
/// a press followed by a short release taps a day, a longer one is
/// reported as a horizontal drag for the month navigator to judge.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub month: MonthId,
    pub selected: DateId,
    pub today: DateId,
    /// Days that already have a progress photo
    pub marked: HashSet<DateId>,
}

/// Per-widget gesture state
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    /// Month the pending press belongs to
    month: Option<MonthId>,
    /// Press position relative to the grid
    press: Option<Point>,
}

/// What a press/release pair amounted to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Tap(Point),
    Drag { dx: f32 },
}

pub fn classify(press: Point, release: Point) -> Gesture {
    if press.distance(release) <= TAP_SLOP {
        Gesture::Tap(press)
    } else {
        Gesture::Drag {
            dx: release.x - press.x,
        }
    }
}

/// Date shown in grid cell `index` (row-major, Sunday first), if any
pub fn cell_date(month: MonthId, index: usize) -> Option<DateId> {
    let leading = month.first_day().weekday().num_days_from_sunday() as usize;
    let day = index.checked_sub(leading)? + 1;

    if day as u32 > month.days_in_month() {
        return None;
    }

    DateId::from_ymd(month.year(), month.month(), day as u32)
}

/// Bounds of grid cell `index` in a grid of `size`
fn cell_bounds(size: Size, index: usize) -> Rectangle {
    let width = size.width / 7.0;
    let height = (size.height - HEADER_HEIGHT).max(0.0) / WEEKS as f32;
    let column = (index % 7) as f32;
    let row = (index / 7) as f32;

    Rectangle {
        x: column * width,
        y: HEADER_HEIGHT + row * height,
        width,
        height,
    }
}

/// Date under `point` (relative to the grid) in a grid of `size`
pub fn date_at(month: MonthId, size: Size, point: Point) -> Option<DateId> {
    if point.x < 0.0 || point.y < HEADER_HEIGHT || point.x >= size.width || point.y >= size.height {
        return None;
    }

    let column = (point.x / (size.width / 7.0)) as usize;
    let row = ((point.y - HEADER_HEIGHT) / ((size.height - HEADER_HEIGHT) / WEEKS as f32)) as usize;
    if column >= 7 || row >= WEEKS {
        return None;
    }

    cell_date(month, row * 7 + column)
}

impl MonthGrid {
    fn release(&self, press: Point, release: Point, size: Size) -> Option<Message> {
        match classify(press, release) {
            Gesture::Tap(point) => date_at(self.month, size, point).map(Message::DayPressed),
            Gesture::Drag { dx } => Some(Message::Swiped(dx)),
        }
    }
}

impl Program<Message> for MonthGrid {
    type State = GestureState;

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (event::Status, Option<Message>) {
        // A press made on another month must not complete on this one
        if state.month != Some(self.month) {
            state.month = Some(self.month);
            state.press = None;
        }

        let origin = Vector::new(bounds.x, bounds.y);

        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    state.press = Some(position);
                    return (event::Status::Captured, None);
                }
            }

            canvas::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if bounds.contains(position) {
                    state.press = Some(position - origin);
                    return (event::Status::Captured, None);
                }
            }

            // Keep the drag to ourselves while it is in progress
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. })
            | canvas::Event::Touch(touch::Event::FingerMoved { .. }) => {
                if state.press.is_some() {
                    return (event::Status::Captured, None);
                }
            }

            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if let Some(press) = state.press.take() {
                    let message = cursor
                        .position()
                        .and_then(|position| self.release(press, position - origin, bounds.size()));
                    return (event::Status::Captured, message);
                }
            }

            canvas::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
                if let Some(press) = state.press.take() {
                    let message = self.release(press, position - origin, bounds.size());
                    return (event::Status::Captured, message);
                }
            }

            canvas::Event::Touch(touch::Event::FingerLost { .. }) => {
                state.press = None;
            }

            _ => {}
        }

        (event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let palette = theme.extended_palette();
        let size = bounds.size();
        let column_width = size.width / 7.0;

        for (i, name) in WEEKDAYS.iter().enumerate() {
            frame.fill_text(Text {
                content: name.to_string(),
                position: Point::new(column_width * (i as f32 + 0.5), HEADER_HEIGHT / 2.0),
                color: palette.background.strong.color,
                size: Pixels(13.0),
                horizontal_alignment: alignment::Horizontal::Center,
                vertical_alignment: alignment::Vertical::Center,
                ..Text::default()
            });
        }

        for index in 0..WEEKS * 7 {
            let Some(date) = cell_date(self.month, index) else {
                continue;
            };

            let cell = cell_bounds(size, index);
            let center = cell.center();
            let radius = cell.width.min(cell.height) * 0.38;
            let mut color = palette.background.base.text;

            if date == self.selected {
                frame.fill(&Path::circle(center, radius), palette.primary.strong.color);
                color = palette.primary.strong.text;
            } else if date == self.today {
                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default()
                        .with_color(palette.primary.base.color)
                        .with_width(1.5),
                );
            }

            frame.fill_text(Text {
                content: date.date().day().to_string(),
                position: center,
                color,
                size: Pixels(16.0),
                horizontal_alignment: alignment::Horizontal::Center,
                vertical_alignment: alignment::Vertical::Center,
                ..Text::default()
            });

            if self.marked.contains(&date) {
                let dot = Point::new(center.x, center.y + radius * 0.7);
                frame.fill(&Path::circle(dot, 3.0), palette.success.base.color);
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if state.press.is_some() {
            return mouse::Interaction::Grabbing;
        }

        match cursor.position_in(bounds) {
            Some(point) if date_at(self.month, bounds.size(), point).is_some() => {
                mouse::Interaction::Pointer
            }
            _ => mouse::Interaction::default(),
        }
    }
}
