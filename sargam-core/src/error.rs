//! Error type for sargam-core

use thiserror::Error;

/// Result type for sargam-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Invalid user input.
///
/// This is the only way an analysis can fail: conversion, evaluation and
/// ranking are total over validated input. Each variant carries the offending
/// token verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A scale token is not one of the 12 sargam symbols
    #[error("Invalid note: {0}. Please enter valid Hindustani notes ({valid}).", valid = crate::notation::degree_symbols())]
    InvalidNote(String),

    /// The base pitch is not one of the 12 Western names
    #[error("Invalid base pitch: {0}. Please choose from: {valid}", valid = crate::notation::western_names())]
    InvalidBasePitch(String),
}

impl Error {
    /// Both variants are triggers of the same invalid-input kind.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidNote(_) | Error::InvalidBasePitch(_))
    }

    /// The token that failed validation.
    pub fn token(&self) -> &str {
        match self {
            Error::InvalidNote(token) | Error::InvalidBasePitch(token) => token,
        }
    }
}
