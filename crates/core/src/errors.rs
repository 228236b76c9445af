use std::path::PathBuf;

use thiserror::Error;

/// Failure to read a data file. Callers of the `load_or_builtin` helpers never see this;
/// it is logged and replaced by built-in content.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("could not read data file `{path}`: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("could not parse data file `{path}`: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
}

impl DataError {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }

    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                "missing"
            }
            Self::Read { .. } => "unreadable",
            Self::Parse { .. } => "corrupt",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("could not write export `{path}`: {message}")]
    Export { path: PathBuf, message: String },
    #[error("could not serialize session: {message}")]
    Serialize { message: String },
    #[error("could not read transcript `{path}`: {message}")]
    TranscriptRead { path: PathBuf, message: String },
    #[error("transcript is not a session export or message list: {message}")]
    TranscriptParse { message: String },
    #[error("nothing to export: the conversation is empty")]
    EmptyTranscript,
}

impl SessionError {
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Export { .. } => "export_io",
            Self::Serialize { .. } => "serialization",
            Self::TranscriptRead { .. } => "transcript_io",
            Self::TranscriptParse { .. } => "transcript_parse",
            Self::EmptyTranscript => "empty_transcript",
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Export { .. } | Self::Serialize { .. } => {
                "The chat could not be exported. Check the export directory and try again."
            }
            Self::TranscriptRead { .. } | Self::TranscriptParse { .. } => {
                "The transcript could not be loaded. Provide a JSON export from a chat session."
            }
            Self::EmptyTranscript => "Start a conversation to export!",
        }
    }
}
