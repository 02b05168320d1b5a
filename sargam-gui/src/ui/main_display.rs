//! # Main Display Module
//!
//! This module contains the main display components and layout logic
//! for the Sargam application: the input panel, the error notification and
//! the ranked candidate grids.

use iced::widget::{button, column, container, row, scrollable, text, text_input, Column, Row, Space};
use iced::{Alignment, Element, Length};
use sargam_core::{notation, report};
use sargam_core::{Analysis, CandidateResult, ScaleDegree};

use super::layout;
use crate::widgets::scale_grid::ScaleGrid;

/// Creates the complete main application view
pub fn create_main_view(data: &crate::AppDisplayData) -> Element<'static, crate::Message> {
    tracing::trace!("Rendering GUI...");

    // An invalid input blocks everything else until it is acknowledged.
    if let Some(message) = &data.error {
        return create_error_notification(message);
    }

    let title = text("Sargam").size(28);
    let input_panel = create_input_panel(data);

    let mut content = column![title, Space::with_height(20), input_panel].spacing(10);

    if let Some(analysis) = &data.analysis {
        content = content
            .push(Space::with_height(10))
            .push(text(report::western_scale_line(analysis)).size(16))
            .push(Space::with_height(10))
            .push(text(report::figure_title(analysis)).size(20))
            .push(create_results_grid(analysis));
    } else {
        content = content.push(text(placeholder_hint()).size(14));
    }

    container(scrollable(content.padding(20)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Creates the scale / base pitch inputs and the Calculate button.
fn create_input_panel(data: &crate::AppDisplayData) -> Element<'static, crate::Message> {
    let scale_input = text_input("S R G P D", &data.scale_input)
        .on_input(crate::Message::ScaleInputChanged)
        .on_submit(crate::Message::Calculate)
        .padding(8)
        .size(16);

    let base_pitch_input = text_input("C", &data.base_pitch_input)
        .on_input(crate::Message::BasePitchInputChanged)
        .on_submit(crate::Message::Calculate)
        .padding(8)
        .size(16)
        .width(Length::Fixed(80.0));

    let calculate = button(text("Calculate").size(16))
        .padding([8, 16])
        .on_press(crate::Message::Calculate);

    container(
        column![
            text("Scale notes (S, r, R, g, G, m, M, P, d, D, n, N)").size(14),
            row![
                scale_input,
                Space::with_width(10),
                column![text("Base pitch").size(14), base_pitch_input].spacing(5),
                Space::with_width(10),
                calculate,
            ]
            .align_y(Alignment::End),
        ]
        .spacing(5),
    )
    .width(Length::Fill)
    .into()
}

/// Creates the blocking notification shown for invalid input.
fn create_error_notification(message: &str) -> Element<'static, crate::Message> {
    let dialog = column![
        text("Invalid input").size(24),
        Space::with_height(10),
        text(message.to_string()).size(16).color(layout::ERROR_COLOR),
        Space::with_height(20),
        button(text("OK").size(16))
            .padding([8, 24])
            .on_press(crate::Message::DismissError),
    ]
    .align_x(Alignment::Center)
    .spacing(5)
    .max_width(600.0);

    container(dialog)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Lays the candidate blocks out `layout::COLUMNS` per row, best first.
fn create_results_grid(analysis: &Analysis) -> Element<'static, crate::Message> {
    let rows = analysis.candidates.chunks(layout::COLUMNS).map(|chunk| -> Element<'static, crate::Message> {
        let mut blocks: Vec<Element<'static, crate::Message>> =
            chunk.iter().map(create_candidate_block).collect();
        // Keep a lone last block at half width.
        while blocks.len() < layout::COLUMNS {
            blocks.push(Space::with_width(Length::FillPortion(1)).into());
        }
        Row::with_children(blocks).spacing(20).into()
    });

    Column::with_children(rows).spacing(30).into()
}

/// Creates the block for one candidate: titles, notation line and both grids.
fn create_candidate_block(result: &CandidateResult) -> Element<'static, crate::Message> {
    let indian_labels = ScaleDegree::ALL.map(|d| d.symbol());
    let western_labels = result.tonic.rotated_names();

    container(
        column![
            text(report::candidate_title(result)).size(18),
            text(report::sa_means_line(result)).size(14),
            text(format!(
                "Indian notation: {}",
                report::join_degrees(&result.indian_notation())
            ))
            .size(14),
            Space::with_height(5),
            ScaleGrid::new(result.presence, indian_labels).view(),
            ScaleGrid::new(result.presence, western_labels).view(),
        ]
        .spacing(4),
    )
    .width(Length::FillPortion(1))
    .into()
}

/// Text shown under the inputs when no analysis has run yet.
fn placeholder_hint() -> String {
    format!(
        "Enter a scale and a base pitch (one of {}), then press Calculate.",
        notation::western_names()
    )
}
