use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    InvalidInput(String),
    Overflow(String),
    TemplateError(String),
    ConfigError(String),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            UnitError::Overflow(msg) => write!(f, "Overflow: {}", msg),
            UnitError::TemplateError(msg) => write!(f, "Template error: {}", msg),
            UnitError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for UnitError {}
