//! Filesystem access for the README.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use super::error::ReadmeError;
use super::splice::{END_MARKER, START_MARKER};

/// Loads the README at `path`, or a default document when it does not exist.
///
/// # Errors
///
/// Returns [`ReadmeError::NotUtf8`] for undecodable content and
/// [`ReadmeError::Read`] for any other failure. A missing file is not an
/// error.
pub fn load_or_default(path: &Utf8Path) -> Result<String, ReadmeError> {
    let (dir, file_name) = open_parent(path).map_err(|error| read_error(path, &error))?;

    match dir.read_to_string(file_name) {
        Ok(content) => Ok(content),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            tracing::info!("{path} not found, starting from the default template");
            Ok(default_readme())
        }
        Err(error) if error.kind() == io::ErrorKind::InvalidData => Err(ReadmeError::NotUtf8 {
            path: path.to_owned(),
        }),
        Err(error) => Err(read_error(path, &error)),
    }
}

/// Overwrites the file at `path` with `content` in a single write.
///
/// # Errors
///
/// Returns [`ReadmeError::Write`] when the parent directory cannot be opened
/// or the write fails.
pub fn write(path: &Utf8Path, content: &str) -> Result<(), ReadmeError> {
    let write_error = |error: &io::Error| ReadmeError::Write {
        path: path.to_owned(),
        message: error.to_string(),
    };
    let (dir, file_name) = open_parent(path).map_err(|error| write_error(&error))?;
    dir.write(file_name, content)
        .map_err(|error| write_error(&error))
}

/// README used when no file exists yet.
#[must_use]
pub fn default_readme() -> String {
    format!(
        "# My Open Source Contributions\n\n{START_MARKER}\n{END_MARKER}\n\n---\n*This README is automatically updated via GitHub Actions*\n"
    )
}

fn open_parent(path: &Utf8Path) -> io::Result<(Dir, &str)> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{path}' does not name a file"),
        )
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

fn read_error(path: &Utf8Path, error: &io::Error) -> ReadmeError {
    ReadmeError::Read {
        path: Utf8PathBuf::from(path),
        message: error.to_string(),
    }
}
