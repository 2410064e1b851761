use std::fmt;

#[derive(Debug)]
pub enum EngineError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (bad scan depth, empty file path, etc.).
    ConfigValidation(String),
    /// A designated role column does not exist in the table headers.
    UnknownColumn { role: &'static str, column: String },
    /// A role column was never designated; reconciliation refuses to guess.
    UnresolvedRole { role: &'static str },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::UnknownColumn { role, column } => {
                write!(f, "{role} column '{column}' is not present in the headers")
            }
            Self::UnresolvedRole { role } => {
                write!(f, "no {role} column designated; assign one before reconciling")
            }
        }
    }
}

impl std::error::Error for EngineError {}
