use miette::Diagnostic;
use thiserror::Error;

/// Main error type for chalk operations
#[derive(Error, Diagnostic, Debug)]
pub enum ChalkError {
    #[error("Coordinate ({x}, {y}) is outside the 16x16 canvas")]
    #[diagnostic(code(chalk::out_of_range), help("Coordinates must be in 0..16"))]
    OutOfRange { x: i32, y: i32 },

    #[error("Unsupported canvas format version {version}")]
    #[diagnostic(
        code(chalk::codec::version),
        help("Only legacy (no version), 1 and 2 can be read")
    )]
    UnsupportedVersion { version: u32 },

    #[error("Palette is full, cannot register '{token}'")]
    #[diagnostic(code(chalk::palette::full))]
    PaletteFull { token: String },

    #[error("Unknown token: {token}")]
    #[diagnostic(code(chalk::token))]
    UnknownToken {
        token: String,
        #[help]
        help: Option<String>,
    },

    #[error("Check failed with {errors} error(s) and {warnings} warning(s)")]
    #[diagnostic(code(chalk::check))]
    CheckFailed { errors: usize, warnings: usize },

    #[error("IO error: {0}")]
    #[diagnostic(code(chalk::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(chalk::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(chalk::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(chalk::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, ChalkError>;
