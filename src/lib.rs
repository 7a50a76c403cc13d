//! # dbconnector
//!
//! `dbconnector` opens a session to a MySQL server and reports the outcome.
//! Rows of the session come back as mappings from column name to value.
//!
//! ```rust,no_run
//! use dbconnector::prelude::*;
//!
//! fn main() -> dbconnector::Result<()> {
//!     dbconnector::logging::init();
//!
//!     // Logs "Connection established successfully." or
//!     // "Error connecting to the database: <reason>".
//!     if let Some(conn) = connect("localhost", "root", "", "test")? {
//!         for row in conn.rows("SELECT name, age FROM users")? {
//!             println!("{} is {}", row.get("name").unwrap_or("NULL"), row.get_into::<_, u32>("age").unwrap_or(0));
//!         }
//!         conn.close();
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Only operational failures (network, authentication, unknown database) are
//! turned into `Ok(None)`. Other driver errors come back as `Err`.

#![allow(clippy::needless_doctest_main)]

mod connection;
mod connector;
mod error;
mod params;
mod row;
pub mod logging;

#[cfg(test)]
mod test_utils;

pub use crate::connection::{Connection, IsolationLevel};
pub use crate::connector::{connect, connect_with, FAILURE_MESSAGE, SUCCESS_MESSAGE};
pub use crate::error::{is_operational, Error, ErrorLevel};
pub use crate::params::{ConnectionParameters, DEFAULT_PORT};
pub use crate::row::{Get, Row};

pub mod prelude {
    //! Re-exports important traits and types.

    pub use crate::connection::{Connection, IsolationLevel};
    pub use crate::connector::{connect, connect_with};
    pub use crate::error::{Error, ErrorLevel};
    pub use crate::params::ConnectionParameters;
    pub use crate::row::{Get, Row};
}

/// A typedef of the result returned by many methods.
pub type Result<T, E = crate::error::Error> = std::result::Result<T, E>;
