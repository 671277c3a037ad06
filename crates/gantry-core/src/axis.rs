//! Orthogonal profile axes.
//!
//! A deployment target is a point in the space
//! `base variant × package set × port`. Each axis is an enumerated choice;
//! new targets are composed from axis values rather than copy-pasted
//! profile records.

use serde::{Deserialize, Serialize};

/// Python interpreter line the base image ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PythonVersion {
    #[serde(rename = "3.10")]
    Py310,
    #[serde(rename = "3.12")]
    Py312,
}

impl PythonVersion {
    /// Version tag as it appears in the image reference.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Py310 => "3.10",
            Self::Py312 => "3.12",
        }
    }
}

/// Base image variant.
///
/// `slim` strips docs, locales and most of the Debian userland; `full`
/// keeps it, which matters when a wheel falls back to building from source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseVariant {
    Slim,
    Full,
}

/// Image reference for a version/variant pair, e.g. `python:3.10-slim`.
pub fn base_image(python: PythonVersion, variant: BaseVariant) -> String {
    match variant {
        BaseVariant::Slim => format!("python:{}-slim", python.tag()),
        BaseVariant::Full => format!("python:{}", python.tag()),
    }
}

/// Native libraries the image-processing stack needs at import time.
///
/// Serde tags are the short names used in `gantry.toml`; [`apt_name`]
/// maps to the Debian package installed in the image.
///
/// [`apt_name`]: SystemPackage::apt_name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemPackage {
    /// OpenGL stub; opencv imports `libGL.so.1` even headless.
    #[serde(rename = "gl")]
    OpenGl,
    #[serde(rename = "glib")]
    Glib,
    /// JPEG codec for Pillow.
    #[serde(rename = "jpeg")]
    Jpeg,
    /// PNG runtime library.
    #[serde(rename = "png")]
    Png,
    /// PNG development headers, for source builds of Pillow.
    #[serde(rename = "png-dev")]
    PngDev,
    /// Media transcoding; optional, only video-handling targets carry it.
    #[serde(rename = "ffmpeg")]
    Ffmpeg,
    /// Native build toolchain for wheels that compile C/C++ at install time.
    #[serde(rename = "build-toolchain")]
    BuildToolchain,
    /// C++ runtime needed by onnxruntime on slim bases.
    #[serde(rename = "stdcpp")]
    StdCpp,
}

impl SystemPackage {
    /// Debian package name passed to `apt-get install`.
    pub fn apt_name(self) -> &'static str {
        match self {
            Self::OpenGl => "libgl1",
            Self::Glib => "libglib2.0-0",
            Self::Jpeg => "libjpeg62-turbo",
            Self::Png => "libpng16-16",
            Self::PngDev => "libpng-dev",
            Self::Ffmpeg => "ffmpeg",
            Self::BuildToolchain => "build-essential",
            Self::StdCpp => "libstdc++6",
        }
    }
}
