extern crate anyhow;
extern crate reqwest;
extern crate serde_json;
extern crate std;

pub type LizNextResult<T> = std::result::Result<T, LizNextError>;

#[derive(Debug)]
pub enum LizNextError {
    HttpError(reqwest::Error),
    IoError(std::io::Error),
    MalformedDataError(serde_json::Error),
    ContextError(anyhow::Error),
    SimpleError(String),
}

pub fn make_error(msg: &str) -> LizNextError {
    return LizNextError::SimpleError(msg.to_string());
}

impl std::fmt::Display for LizNextError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            LizNextError::HttpError(ref err) => {
                return write!(f, "HTTP Error: {}", err);
            },
            LizNextError::IoError(ref err) => {
                return write!(f, "IO Error: {}", err);
            },
            LizNextError::MalformedDataError(ref err) => {
                return write!(f, "Malformed Data Error: {}", err);
            },
            LizNextError::ContextError(ref err) => {
                return write!(f, "Error: {:#}", err);
            },
            LizNextError::SimpleError(ref msg) => {
                return write!(f, "Error: {}", msg);
            },
        }
    }
}

impl std::error::Error for LizNextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            LizNextError::HttpError(ref err) => Some(err),
            LizNextError::IoError(ref err) => Some(err),
            LizNextError::MalformedDataError(ref err) => Some(err),
            LizNextError::ContextError(ref err) => Some(err.as_ref()),
            LizNextError::SimpleError(_) => None,
        }
    }
}

impl From<reqwest::Error> for LizNextError {
    fn from(err: reqwest::Error) -> LizNextError {
        return LizNextError::HttpError(err);
    }
}

impl From<std::io::Error> for LizNextError {
    fn from(err: std::io::Error) -> LizNextError {
        return LizNextError::IoError(err);
    }
}

impl From<serde_json::Error> for LizNextError {
    fn from(err: serde_json::Error) -> LizNextError {
        return LizNextError::MalformedDataError(err);
    }
}

impl From<anyhow::Error> for LizNextError {
    fn from(err: anyhow::Error) -> LizNextError {
        return LizNextError::ContextError(err);
    }
}
