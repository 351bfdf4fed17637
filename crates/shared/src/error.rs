#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("the recipe catalog is empty")]
    EmptyCatalog,

    #[error("date is outside the supported calendar range")]
    DateOutOfRange,

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    Invalid(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<time::error::ComponentRange> for Error {
    fn from(value: time::error::ComponentRange) -> Self {
        Self::InvalidDate(value.to_string())
    }
}

impl From<time::error::Parse> for Error {
    fn from(value: time::error::Parse) -> Self {
        Self::InvalidDate(value.to_string())
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Invalid(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Invalid(format!("{}", $err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Invalid(format!($fmt, $($arg)*)))
    };
}
