// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for scene construction and export

use std::path::PathBuf;
use std::process::ExitStatus;

/// Everything that can go wrong while building or exporting a scene
#[derive(Debug, thiserror::Error)]
pub enum ScadError {
    /// A constructor, transform or factory received a value it cannot accept
    #[error("`{context}` {message}")]
    InvalidArgument {
        context: &'static str,
        message: String,
    },

    /// The renderer ran but exited unsuccessfully
    #[error("renderer exited with {status}: {stderr}")]
    RenderFailure { status: ExitStatus, stderr: String },

    /// The renderer could not be launched at all
    #[error("failed to launch renderer `{program}`")]
    RendererUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A scene description is not well-formed JSON of the expected shape
    #[error("malformed scene description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScadError {
    pub(crate) fn invalid(context: &'static str, message: impl Into<String>) -> Self {
        ScadError::InvalidArgument {
            context,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScadError::Io {
            path: path.into(),
            source,
        }
    }

    /// Name of the operation that rejected its arguments, if this is a validation error
    pub fn context(&self) -> Option<&'static str> {
        match self {
            ScadError::InvalidArgument { context, .. } => Some(context),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScadError>;
