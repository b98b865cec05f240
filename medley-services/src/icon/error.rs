// SPDX-License-Identifier: LGPL-3.0-only
//! Error types for icon resolution.

use thiserror::Error;

/// Errors that can occur during icon resolution.
#[derive(Error, Debug)]
pub enum IconError {
    /// No icon could be produced for the entry.
    #[error("no icon for entry: {0}")]
    NotFound(String),

    /// The resolve queue is no longer accepting work.
    #[error("resolve queue closed: {0}")]
    QueueClosed(String),

    /// I/O error during theme lookup.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
