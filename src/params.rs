extern crate mysql_sys as mysql;

use std::fmt;

use mysql::{Opts, OptsBuilder};

/// TCP port every connection is made on.
pub const DEFAULT_PORT: u16 = 3306;

/// Parameters of a connection attempt.
///
/// Strings are passed to the driver as given, empty ones included.
/// The port is always [`DEFAULT_PORT`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConnectionParameters {
    pub host:     String,
    pub user:     String,
    pub password: String,
    pub database: String,
}

impl ConnectionParameters {
    pub fn new(host: &str, user: &str, password: &str, database: &str) -> Self {
        Self {
            host:     host.to_string(),
            user:     user.to_string(),
            password: password.to_string(),
            database: database.to_string(),
        }
    }

    /// Always [`DEFAULT_PORT`].
    #[inline]
    pub fn port(&self) -> u16 {
        DEFAULT_PORT
    }

    pub(crate) fn to_opts(&self) -> Opts {
        OptsBuilder::new()
            .ip_or_hostname(Some(self.host.as_str()))
            .tcp_port(self.port())
            .user(Some(self.user.as_str()))
            .pass(Some(self.password.as_str()))
            .db_name(Some(self.database.as_str()))
            .into()
    }
}

impl fmt::Debug for ConnectionParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParameters")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("port", &self.port())
            .finish()
    }
}
