//! # Sargam - Tonic Finder GUI
//!
//! This module contains the main GUI application for Sargam. The user enters
//! a scale in Hindustani notation and a base pitch; the application ranks
//! all 12 instrument pitches and draws a two-row grid for each of them.
//!
//! ## Architecture
//! - **Main Thread**: Iced GUI application with dark theme
//! - **Analysis**: Runs synchronously in `update` when Calculate is pressed
//! - **Errors**: Invalid input replaces the view with a notification until dismissed

mod ui;
mod widgets;

use anyhow::Context;
use iced::{Element, Theme};
use sargam_core::{analyze, notation, Analysis};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::main_display::create_main_view;

/// Environment variable pre-filling the scale input.
const SCALE_ENV: &str = "SARGAM_SCALE";
/// Environment variable pre-filling the base pitch input.
const BASE_PITCH_ENV: &str = "SARGAM_BASE_PITCH";
/// Environment variable with the log filter used when RUST_LOG is not set.
const LOG_ENV: &str = "SARGAM_LOG";

/// Main entry point for the Sargam application.
pub fn main() -> anyhow::Result<()> {
    let default_filter = std::env::var(LOG_ENV).unwrap_or_else(|_| "sargam_gui=info,sargam_core=info".into());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    notation::validate_tables()
        .map_err(anyhow::Error::msg)
        .context("Notation tables are inconsistent")?;

    info!("Starting Sargam application...");
    let result = iced::application("Sargam", SargamApp::update, SargamApp::view)
        .theme(SargamApp::theme)
        .run();
    info!("Application finished with result: {:?}", result);
    result.context("GUI terminated with an error")
}

/// Application message types for the Iced GUI framework.
#[derive(Debug, Clone)]
pub enum Message {
    ScaleInputChanged(String),     // Scale text field edited
    BasePitchInputChanged(String), // Base pitch text field edited
    Calculate,                     // Calculate pressed or Enter in a field
    DismissError,                  // OK pressed on the error notification
}

/// UI-specific data needed for rendering the interface.
///
/// This struct contains only the data that the UI components need
#[derive(Debug, Clone, Default)]
pub struct AppDisplayData {
    // Raw input as typed
    pub scale_input: String,
    pub base_pitch_input: String,

    // Outcome of the last Calculate; at most one of these is set
    pub analysis: Option<Analysis>,
    pub error: Option<String>,
}

/// Main application state for Sargam.
#[derive(Debug)]
struct SargamApp {
    // Single source of truth for all display data
    display_data: AppDisplayData,
}

impl Default for SargamApp {
    /// Creates the app, pre-filling the inputs from the environment.
    ///
    /// If both inputs are pre-filled the analysis runs immediately.
    fn default() -> Self {
        debug!("Creating SargamApp...");
        let mut app = Self {
            display_data: AppDisplayData {
                scale_input: std::env::var(SCALE_ENV).unwrap_or_default(),
                base_pitch_input: std::env::var(BASE_PITCH_ENV).unwrap_or_default(),
                ..AppDisplayData::default()
            },
        };

        if !app.display_data.scale_input.trim().is_empty()
            && !app.display_data.base_pitch_input.trim().is_empty()
        {
            info!("Inputs pre-filled from environment, calculating");
            app.calculate();
        }
        app
    }
}

impl SargamApp {
    /// Handles application state updates based on incoming messages.
    fn update(&mut self, message: Message) {
        tracing::trace!("Received message: {:?}", message);

        match message {
            Message::ScaleInputChanged(value) => {
                self.display_data.scale_input = value;
            }
            Message::BasePitchInputChanged(value) => {
                self.display_data.base_pitch_input = value;
            }
            Message::Calculate => self.calculate(),
            Message::DismissError => {
                debug!("Error notification dismissed");
                self.display_data.error = None;
            }
        }
    }

    /// Runs the analysis on the current inputs.
    ///
    /// On invalid input the previous results are cleared, so nothing stale is
    /// shown behind the notification.
    fn calculate(&mut self) {
        match analyze(&self.display_data.scale_input, &self.display_data.base_pitch_input) {
            Ok(analysis) => {
                info!(
                    "Calculated {} candidates for {} notes at {}",
                    analysis.candidates.len(),
                    analysis.scale.len(),
                    analysis.base_pitch
                );
                self.display_data.analysis = Some(analysis);
                self.display_data.error = None;
            }
            Err(e) => {
                warn!("Rejected input: {}", e);
                self.display_data.analysis = None;
                self.display_data.error = Some(e.to_string());
            }
        }
    }

    /// Renders the main application interface.
    ///
    /// Delegates all UI rendering to the main_display module.
    fn view(&self) -> Element<'_, Message> {
        create_main_view(&self.display_data)
    }

    /// Returns the application theme.
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(scale: &str, base_pitch: &str) -> SargamApp {
        let mut app = SargamApp {
            display_data: AppDisplayData::default(),
        };
        app.update(Message::ScaleInputChanged(scale.into()));
        app.update(Message::BasePitchInputChanged(base_pitch.into()));
        app
    }

    #[test]
    fn calculate_stores_ranked_analysis() {
        let mut app = app_with("S R G P D", "C");
        app.update(Message::Calculate);

        let analysis = app.display_data.analysis.as_ref().unwrap();
        assert_eq!(analysis.candidates.len(), 12);
        assert_eq!(analysis.candidates[0].tonic.name(), "C");
        assert!(app.display_data.error.is_none());
    }

    #[test]
    fn invalid_input_clears_previous_results() {
        let mut app = app_with("S R G P D", "C");
        app.update(Message::Calculate);
        assert!(app.display_data.analysis.is_some());

        app.update(Message::ScaleInputChanged("S X".into()));
        app.update(Message::Calculate);
        assert!(app.display_data.analysis.is_none());
        assert!(app.display_data.error.as_deref().unwrap().contains("X"));

        app.update(Message::DismissError);
        assert!(app.display_data.error.is_none());
        assert_eq!(app.display_data.scale_input, "S X");
    }

    #[test]
    fn invalid_base_pitch_is_reported() {
        let mut app = app_with("S R", "H");
        app.update(Message::Calculate);
        let error = app.display_data.error.unwrap();
        assert!(error.contains("C, C#, D"));
    }
}
