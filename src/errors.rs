use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur around a chapter analysis
#[derive(Debug)]
pub enum ChapterRateError {
    Timeline(TimelineError),
    Config(ConfigError),
    Sink(SinkError),
    Json(serde_json::Error),
    Other(io::Error),
}

/// Chapter list / playlist timeline specific errors
#[derive(Debug)]
pub struct TimelineError {
    pub message: String,
}

impl TimelineError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Analysis configuration errors
#[derive(Debug)]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Raised by a chapter sink that could not take a finished chapter
#[derive(Debug)]
pub struct SinkError {
    pub message: String,
}

impl SinkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ChapterRateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChapterRateError::Other(err) => write!(f, "I/O error: {}", err),
            ChapterRateError::Timeline(err) => write!(f, "Timeline error: {}", err),
            ChapterRateError::Config(err) => write!(f, "Config error: {}", err),
            ChapterRateError::Sink(err) => write!(f, "Sink error: {}", err),
            ChapterRateError::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl fmt::Display for TimelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ChapterRateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChapterRateError::Json(err) => Some(err),
            ChapterRateError::Other(err) => Some(err),
            _ => None,
        }
    }
}
impl Error for TimelineError {}
impl Error for ConfigError {}
impl Error for SinkError {}

// Conversion implementations
impl From<io::Error> for ChapterRateError {
    fn from(err: io::Error) -> Self {
        ChapterRateError::Other(err)
    }
}

impl From<TimelineError> for ChapterRateError {
    fn from(err: TimelineError) -> Self {
        ChapterRateError::Timeline(err)
    }
}

impl From<ConfigError> for ChapterRateError {
    fn from(err: ConfigError) -> Self {
        ChapterRateError::Config(err)
    }
}

impl From<SinkError> for ChapterRateError {
    fn from(err: SinkError) -> Self {
        ChapterRateError::Sink(err)
    }
}

impl From<serde_json::Error> for ChapterRateError {
    fn from(err: serde_json::Error) -> Self {
        ChapterRateError::Json(err)
    }
}

// Type alias for Result with ChapterRateError
pub type ChapterRateResult<T> = Result<T, ChapterRateError>;
