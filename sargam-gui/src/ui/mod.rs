//! # UI Module
//!
//! This module contains the layout code for the Sargam application.

pub mod layout;
pub mod main_display;
