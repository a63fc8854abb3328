use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error")]
    Io(io::Error),
    #[error("hyper error")]
    Hyper(hyper::Error),
    #[error("connection refused")]
    ConnectionRefused(Box<dyn std::error::Error + Send + Sync>),
    #[error("connection reset")]
    ConnectionReset(Box<dyn std::error::Error + Send + Sync>),
    #[error("json error")]
    Json(#[from] serde_json::Error),
    #[error("http error")]
    Http(#[from] http::Error),
    #[error("invalid uri")]
    InvalidUri {
        var: String,
        source: http::uri::InvalidUri,
    },
}

impl From<hyper::Error> for Error {
    fn from(err: hyper::Error) -> Self {
        if err.is_connect() {
            use std::error::Error as _;
            return match err
                .source()
                .and_then(|e| e.downcast_ref::<io::Error>())
                .map(|e| e.kind())
            {
                Some(io::ErrorKind::ConnectionRefused) => Error::ConnectionRefused(Box::new(err)),
                Some(io::ErrorKind::ConnectionReset) => Error::ConnectionReset(Box::new(err)),
                _ => Error::Hyper(err),
            };
        }
        Error::Hyper(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::ConnectionRefused => Error::ConnectionRefused(Box::new(err)),
            io::ErrorKind::ConnectionReset => Error::ConnectionReset(Box::new(err)),
            _ => Error::Io(err),
        }
    }
}
