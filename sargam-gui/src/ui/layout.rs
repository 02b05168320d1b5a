//! Layout and colour settings for the result grids.

use iced::Color;

/// Height of one grid row in pixels.
pub const CELL_HEIGHT: f32 = 50.0;
/// Cells never grow wider than this, so a full row is at most 600 px.
pub const CELL_MAX_WIDTH: f32 = 50.0;
/// Font size of the cell labels.
pub const LABEL_SIZE: f32 = 12.0;
/// Candidate blocks per row of the results area.
pub const COLUMNS: usize = 2;
/// Fill of occupied cells.
pub const OCCUPIED_COLOR: Color = Color::from_rgb(1.0, 0.65, 0.0);
/// Colour of the error text in the notification.
pub const ERROR_COLOR: Color = Color::from_rgb(0.9, 0.3, 0.3);
