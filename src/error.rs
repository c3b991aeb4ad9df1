use miette::Diagnostic;
use thiserror::Error;

/// Main error type for signgrid operations
#[derive(Error, Diagnostic, Debug)]
pub enum SignError {
    #[error("IO error: {0}")]
    #[diagnostic(code(signgrid::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(signgrid::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Could not decode image: {message}")]
    #[diagnostic(
        code(signgrid::decode),
        help("Supported formats are PNG, JPEG, GIF, BMP and WebP")
    )]
    Decode { message: String },

    #[error("Image scales down to {width}x{height}, which has no pixels")]
    #[diagnostic(
        code(signgrid::invalid_image),
        help("Use a larger --image-size or an image that is not a thin strip")
    )]
    InvalidImage { width: u32, height: u32 },

    #[error("No objects found in template blueprint")]
    #[diagnostic(
        code(signgrid::empty_template),
        help("The template must contain at least one sign object to clone")
    )]
    EmptyTemplate,

    #[error("Blueprint writer did not produce a main file header")]
    #[diagnostic(code(signgrid::no_header))]
    NoHeaderProduced,

    #[error("Could not encode blueprint: {message}")]
    #[diagnostic(code(signgrid::encode))]
    Encode { message: String },

    #[error("Build error: {message}")]
    #[diagnostic(code(signgrid::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(signgrid::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SignError>;
