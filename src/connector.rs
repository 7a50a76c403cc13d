extern crate mysql_sys as mysql;

use mysql::Conn;
use tracing::{debug, error, info};

use crate::connection::Connection;
use crate::error::is_operational;
use crate::params::ConnectionParameters;
use crate::Result;

/// Logged once a session is open.
pub const SUCCESS_MESSAGE: &str = "Connection established successfully.";

/// Prefix of the line logged when a session could not be opened.
pub const FAILURE_MESSAGE: &str = "Error connecting to the database";

/// Open a connection to `database` on `host`, port 3306.
///
/// Returns `Ok(None)` when the attempt fails for an operational reason
/// (unreachable host, rejected credentials, unknown database); the failure is
/// logged with the driver's error text. Any other driver error is returned
/// as `Err`.
///
/// # Examples
///
/// ```no_run
/// if let Some(conn) = dbconnector::connect("localhost", "root", "", "test").unwrap() {
///     for row in conn.rows("SELECT name FROM users").unwrap() {
///         println!("name = {}", row.get("name").unwrap_or("NULL"));
///     }
///     conn.close();
/// }
/// ```
#[inline]
pub fn connect(host: &str, user: &str, password: &str, database: &str) -> Result<Option<Connection>> {
    connect_with(&ConnectionParameters::new(host, user, password, database))
}

/// Same as [`connect`], taking the parameters as a value.
pub fn connect_with(params: &ConnectionParameters) -> Result<Option<Connection>> {
    debug!(host = %params.host, user = %params.user, database = %params.database, port = params.port(), "connecting");

    match Conn::new(params.to_opts()) {
        Ok(conn) => {
            info!("{}", SUCCESS_MESSAGE);
            Ok(Some(Connection::new(conn)))
        }
        Err(e) if is_operational(&e) => {
            error!("{}: {}", FAILURE_MESSAGE, e);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::capture_logs;

    #[test]
    fn unresolvable_host() {
        let (result, logs) = capture_logs(|| connect("nonexistent.invalid", "root", "", "test"));
        assert!(result.unwrap().is_none());

        let lines: Vec<&str> = logs.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Error connecting to the database: "));
        assert!(lines[0].len() > FAILURE_MESSAGE.len() + 2);
        assert!(!logs.contains(SUCCESS_MESSAGE));
    }

    #[test]
    fn empty_parameters() {
        let (result, logs) = capture_logs(|| connect_with(&ConnectionParameters::default()));
        assert!(result.unwrap().is_none());
        assert_eq!(logs.lines().count(), 1);
        assert!(logs.starts_with(FAILURE_MESSAGE));
    }
}

#[cfg(all(test, feature = "server-tests"))]
mod server_tests {
    use super::*;
    use crate::test_utils::capture_logs;

    #[test]
    fn success_message() {
        let (result, logs) = capture_logs(|| connect("localhost", "root", "", "test"));
        let conn = result.unwrap().unwrap();
        assert_eq!(logs, "Connection established successfully.\n");
        conn.close();
    }

    #[test]
    fn wrong_password_message() {
        let (result, logs) = capture_logs(|| connect("localhost", "root", "wrong", "test"));
        assert!(result.unwrap().is_none());

        let lines: Vec<&str> = logs.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with(FAILURE_MESSAGE));
        assert!(lines[0].contains("Access denied"));
    }
}
