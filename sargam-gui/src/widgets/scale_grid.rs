//! # Scale Grid Widget
//!
//! This module draws one row of 12 cells for a candidate tonic. Occupied
//! slots of the presence vector are filled, empty slots stay white, and each
//! cell carries a centered label (a sargam symbol or a Western pitch name).
//!
//! ## Features
//! - Fixed 12-cell row that stretches to the available width
//! - Orange fill for occupied slots
//! - Bold centered labels

use iced::widget::canvas::{self, Fill, Geometry, Path, Stroke, Text};
use iced::widget::container;
use iced::{mouse, Color, Element, Font, Length, Point, Rectangle, Renderer, Size, Theme};
use sargam_core::notation::SEMITONES;
use sargam_core::PresenceVector;

use crate::ui::layout;

/// One labelled row of the candidate grid.
#[derive(Debug, Clone)]
pub struct ScaleGrid {
    /// Which of the 12 cells are filled.
    presence: PresenceVector,
    /// Label drawn in each cell.
    labels: [&'static str; SEMITONES],
}

impl ScaleGrid {
    pub fn new(presence: PresenceVector, labels: [&'static str; SEMITONES]) -> Self {
        Self { presence, labels }
    }

    pub fn view(self) -> Element<'static, crate::Message> {
        container(
            canvas::Canvas::new(self)
                .width(Length::Fill)
                .height(Length::Fixed(layout::CELL_HEIGHT)),
        )
        .into()
    }
}

impl<Message> canvas::Program<Message> for ScaleGrid {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let cell_width = (bounds.width / SEMITONES as f32).min(layout::CELL_MAX_WIDTH);
        let cell_height = bounds.height;
        let bold = Font {
            weight: iced::font::Weight::Bold,
            ..Font::DEFAULT
        };

        for (i, occupied) in self.presence.iter().enumerate() {
            let x = i as f32 * cell_width;
            let color = if occupied { layout::OCCUPIED_COLOR } else { Color::WHITE };

            frame.fill_rectangle(
                Point::new(x, 0.0),
                Size::new(cell_width, cell_height),
                Fill::from(color),
            );
            frame.stroke(
                &Path::rectangle(Point::new(x, 0.0), Size::new(cell_width, cell_height)),
                Stroke::default().with_color(Color::BLACK),
            );

            frame.fill_text(Text {
                content: self.labels[i].to_string(),
                position: Point::new(x + cell_width / 2.0, cell_height / 2.0),
                color: Color::BLACK,
                size: layout::LABEL_SIZE.into(),
                font: bold,
                horizontal_alignment: iced::alignment::Horizontal::Center,
                vertical_alignment: iced::alignment::Vertical::Center,
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}
