use std::fmt::{Display, Formatter, Result as FmtResult};

/// Root error type for the entire application
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Domain(ValidationError),
    Configuration(ConfigurationError),
    Network(DrawFetchError),
    Ui(UiError),
}

/// Rejected domain values
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NumberOutOfRange(u32),
    NonPositiveDrawNumber(i64),
    WrongSetSize { expected: usize, actual: usize },
    DuplicateNumber(u8),
}

/// Invalid `AppConfig` values
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    Malformed(String),
    ZeroValue(&'static str),
}

/// Why a single draw lookup produced no record.
///
/// Never surfaced past the fetcher port: every variant collapses to `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawFetchError {
    Transport(String),
    HttpStatus(u16),
    Malformed(String),
    Rejected,
}

/// Rendering surface failures
#[derive(Debug, Clone, PartialEq)]
pub enum UiError {
    ElementNotFound(String),
    BrowserApi(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Domain(e) => write!(f, "Domain Error: {}", e),
            AppError::Configuration(e) => write!(f, "Configuration Error: {}", e),
            AppError::Network(e) => write!(f, "Network Error: {}", e),
            AppError::Ui(e) => write!(f, "UI Error: {}", e),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ValidationError::NumberOutOfRange(n) => write!(f, "number {} outside 1..=45", n),
            ValidationError::NonPositiveDrawNumber(n) => {
                write!(f, "draw number must be positive, got {}", n)
            }
            ValidationError::WrongSetSize { expected, actual } => {
                write!(f, "expected {} numbers, got {}", expected, actual)
            }
            ValidationError::DuplicateNumber(n) => write!(f, "duplicate number {}", n),
        }
    }
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ConfigurationError::Malformed(msg) => write!(f, "malformed config: {}", msg),
            ConfigurationError::ZeroValue(field) => {
                write!(f, "{} must be greater than zero", field)
            }
        }
    }
}

impl Display for DrawFetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DrawFetchError::Transport(msg) => write!(f, "request failed: {}", msg),
            DrawFetchError::HttpStatus(code) => write!(f, "HTTP error: {}", code),
            DrawFetchError::Malformed(msg) => write!(f, "malformed response: {}", msg),
            DrawFetchError::Rejected => write!(f, "service answered returnValue=fail"),
        }
    }
}

impl Display for UiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UiError::ElementNotFound(id) => write!(f, "element '{}' not found", id),
            UiError::BrowserApi(msg) => write!(f, "browser API failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for ValidationError {}
impl std::error::Error for ConfigurationError {}
impl std::error::Error for DrawFetchError {}
impl std::error::Error for UiError {}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Domain(err)
    }
}

impl From<ConfigurationError> for AppError {
    fn from(err: ConfigurationError) -> Self {
        AppError::Configuration(err)
    }
}

impl From<DrawFetchError> for AppError {
    fn from(err: DrawFetchError) -> Self {
        AppError::Network(err)
    }
}

impl From<UiError> for AppError {
    fn from(err: UiError) -> Self {
        AppError::Ui(err)
    }
}

pub type DomainResult<T> = Result<T, ValidationError>;
pub type UiResult<T> = Result<T, UiError>;
