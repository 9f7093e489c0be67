// src/source.rs
//
// Where a document comes from: a local file or a plain-http URL.

use std::{fmt, fs, path::PathBuf};

use crate::{core::net, error::LoadError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Http(String),
}

impl Source {
    /// Anything that looks like a URL is fetched; everything else is a path.
    pub fn parse(text: &str) -> Self {
        let t = text.trim();
        if t.starts_with("http://") || t.starts_with("https://") {
            Source::Http(s!(t))
        } else {
            Source::File(PathBuf::from(t))
        }
    }

    pub fn read_to_string(&self) -> Result<String, LoadError> {
        match self {
            Source::File(path) => fs::read_to_string(path).map_err(|err| LoadError::Io {
                origin: self.to_string(),
                err,
            }),
            Source::Http(url) => net::http_get(url).map_err(|e| LoadError::Http {
                origin: self.to_string(),
                msg: e.to_string(),
            }),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Http(url) => f.write_str(url),
        }
    }
}
