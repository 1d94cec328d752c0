use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SourceReadError>;

/// GraphQL source text along with the file it was read from, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Source {
    pub(crate) file_path: Option<PathBuf>,
    pub(crate) text: String,
}
impl Source {
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Read a source file from disk. The file must exist and be valid utf-8.
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        if !file_path.is_file() {
            return Err(SourceReadError::PathIsNotAFile(file_path.to_path_buf()));
        }

        let bytes = std::fs::read(file_path)
            .map_err(|err| SourceReadError::FileReadError {
                file_path: file_path.to_path_buf(),
                err,
            })?;

        let text = String::from_utf8(bytes)
            .map_err(|err| SourceReadError::FileDecodeError {
                file_path: file_path.to_path_buf(),
                err,
            })?;

        log::trace!("Read {} bytes of GraphQL source from {file_path:?}.", text.len());
        Ok(Self {
            file_path: Some(file_path.to_path_buf()),
            text,
        })
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            file_path: None,
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }
}

#[derive(Debug, Error)]
pub enum SourceReadError {
    #[error("Failed to decode {file_path:?} as utf-8: {err}")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("{0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
impl std::cmp::PartialEq for SourceReadError {
    fn eq(&self, other: &Self) -> bool {
        use SourceReadError::*;
        match (self, other) {
            (FileDecodeError { file_path: a_path, err: a_err },
             FileDecodeError { file_path: b_path, err: b_err })
                => a_path == b_path && a_err == b_err,

            // io::Error isn't PartialEq, so compare by kind.
            (FileReadError { file_path: a_path, err: a_err },
             FileReadError { file_path: b_path, err: b_err })
                => a_path == b_path && a_err.kind() == b_err.kind(),

            (PathIsNotAFile(a_path), PathIsNotAFile(b_path))
                => a_path == b_path,

            _ => false,
        }
    }
}
