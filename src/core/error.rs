use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JudoError {
    #[error("The media file does not exist: {}", .path.display())]
    MissingAsset { path: PathBuf },

    #[error("There are no joysticks plugged in. Judo Dance requires a joystick.")]
    NoInputDevice,

    #[error("No connected joystick has the GUID {0}")]
    UnknownDevice(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Window error: {0}")]
    Window(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, JudoError>;
