extern crate mysql_sys as mysql;

use std::fmt::Display;

use thiserror::Error as ThisError;

/// Errors returned by dbconnector.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A query failed; the text depends on the [`ErrorLevel`].
    #[error("{0}")]
    Message(String),
    /// A query failed and the detail is withheld.
    #[error("AnyError")]
    AnyError,
    /// A driver error that is not an operational failure.
    #[error(transparent)]
    Driver(#[from] mysql::Error),
}

/// How much a failed query tells its caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorLevel {
    /// Swallow the failure and return the default value.
    AlwaysOk,
    /// Report `Error::AnyError` only.
    Release,
    /// Report a short message such as `exec error`.
    Develop,

    #[cfg(debug_assertions)]
    /// Append the driver's error text to the message.
    /// Debug builds only.
    Debug,
}

impl Default for ErrorLevel {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            ErrorLevel::Develop
        } else {
            ErrorLevel::Release
        }
    }
}

impl Error {
    /// Turn a failed query into the result the level asks for.
    #[allow(unused_variables)]
    pub(crate) fn new<T: Default>(error_level: &ErrorLevel, err_msg: &str, detail_msg: impl Display) -> Result<T, Error> {
        match error_level {
            ErrorLevel::AlwaysOk => Ok(T::default()),
            ErrorLevel::Release  => Err(Error::AnyError),
            ErrorLevel::Develop  => Err(Error::Message(err_msg.to_string())),
            #[cfg(debug_assertions)]
            ErrorLevel::Debug    => Err(Error::Message(format!("{}: {}", err_msg, detail_msg))),
        }
    }
}

/// Whether a driver error is an operational failure of the connection attempt.
///
/// Operational failures are network, protocol, TLS and server-side rejections
/// (unreachable host, bad credentials, unknown database).
/// Malformed options and value conversion errors are not.
pub fn is_operational(err: &mysql::Error) -> bool {
    !matches!(
        err,
        mysql::Error::UrlError(_) | mysql::Error::FromValueError(_) | mysql::Error::FromRowError(_)
    )
}
