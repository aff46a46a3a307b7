use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[cfg(feature = "svg-io")]
pub mod svg;

/// Generic I/O errors.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    /// The output file could not be created.
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    Unimplemented(String),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            CreateOutput { path, source } => {
                write!(f, "Could not create {}: {source}", path.display())
            },
            Unimplemented(msg) => write!(f, "Feature is not implemented: {msg}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::StdIo(error) | IoError::CreateOutput { source: error, .. } => Some(error),
            IoError::Unimplemented(_) => None,
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

/// Where a finished drawing goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// A file; the path already carries the `.svg` suffix.
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    /// `Some("gears")` becomes the file `gears.svg`; `None` or an empty name means stdout.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(name) if !name.is_empty() => Self::File(PathBuf::from(format!("{name}.svg"))),
            _ => Self::Stdout,
        }
    }

    /// Open the target for writing. A file is created (or truncated) here, so a failure
    /// surfaces before any rendering output is produced.
    pub fn open(&self) -> Result<Box<dyn Write>, IoError> {
        match self {
            Self::File(path) => {
                let file = File::create(path).map_err(|source| IoError::CreateOutput {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufWriter::new(file)))
            },
            Self::Stdout => Ok(Box::new(BufWriter::new(std::io::stdout().lock()))),
        }
    }
}

/// Write `drawing` as SVG to `target`, flushing before returning. The writer is dropped
/// (and a file closed) on every path out of this function.
#[cfg(feature = "svg-io")]
pub fn write_drawing(drawing: &crate::drawing::Drawing, target: &OutputTarget) -> Result<(), IoError> {
    use self::svg::ToSVG;

    let mut writer = target.open()?;
    drawing.write_svg(&mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(not(feature = "svg-io"))]
pub fn write_drawing(_drawing: &crate::drawing::Drawing, _target: &OutputTarget) -> Result<(), IoError> {
    Err(IoError::Unimplemented("SVG output requires the `svg-io` feature".to_string()))
}
