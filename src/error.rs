#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the contributor feed crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.
//!
//! Every variant is fatal for a run: the binary prints the message and exits
//! with status 1. Nothing is recovered locally.

use std::path::{Path, PathBuf};

/// Unified error type returned by the fetch, render and write stages.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Required settings are missing or malformed. Raised before any network
    /// activity takes place.
    #[error("configuration error: {message}")]
    Configuration {
        /// Human readable description of the problem.
        message: String
    },
    /// The upstream API answered with a non-success status.
    #[error("GitHub API error: {status} {body}")]
    Upstream {
        /// HTTP status code of the failing response.
        status: u16,
        /// Raw response body as returned by the API.
        body:   String
    },
    /// The request could not be sent or its body could not be read.
    #[error("GitHub request failed: {message}")]
    Transport {
        /// Description reported by the HTTP client.
        message: String
    },
    /// A page body was not a JSON array of contributors.
    #[error("failed to decode contributors page {page}: {source}")]
    Decode {
        /// Page number whose body failed to decode.
        page:   u32,
        /// Underlying decoding error.
        source: serde_json::Error
    },
    /// Writing the rendered document failed.
    #[error("failed to write output to {path:?}: {source}")]
    Io {
        /// Destination of the document.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    },
    /// Reading the settings file failed.
    #[error("failed to read settings from {path:?}: {source}")]
    ConfigIo {
        /// Location of the settings file.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// The settings file is not valid YAML for the expected document.
    #[error("failed to parse settings: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    }
}

impl Error {
    /// Constructs a configuration error from the provided message.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the configuration problem.
    pub fn configuration<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Configuration {
            message: message.into()
        }
    }

    /// Constructs a transport error from the provided message.
    pub fn transport<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Transport {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// Intended for the CLI, where the variant name does not add value to end
    /// users. The returned string matches the [`std::fmt::Display`]
    /// implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport {
            message: error.to_string()
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Destination of the document that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::ConfigIo`] variant capturing the failing path and
/// source.
pub fn config_io_error(path: &Path, source: std::io::Error) -> Error {
    Error::ConfigIo {
        path: path.to_path_buf(),
        source
    }
}
