extern crate mysql_sys as mysql;

use std::cell::{Cell, RefCell};
use std::fmt;

use mysql::prelude::*;
use mysql::Conn;
use tracing::debug;

use crate::error::{Error, ErrorLevel};
use crate::row::Row;
use crate::Result;

/// Isolation level of the next transaction started by [`Connection::begin`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IsolationLevel {
    ReadUncommitted,
    ReadCommitted,
    #[default]
    RepeatableRead,
    Serializable,
}

impl IsolationLevel {
    pub fn as_sql(&self) -> &'static str {
        match self {
            IsolationLevel::ReadUncommitted => "READ UNCOMMITTED",
            IsolationLevel::ReadCommitted   => "READ COMMITTED",
            IsolationLevel::RepeatableRead  => "REPEATABLE READ",
            IsolationLevel::Serializable    => "SERIALIZABLE",
        }
    }
}

impl fmt::Display for IsolationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// An open session to a MySQL server.
///
/// Query results come back keyed by column name.
/// The session is released by [`close`](Connection::close) or when the value is dropped.
/// Calls made on the session while [`iterate`](Connection::iterate) is running
/// fail with "connection busy" instead of blocking.
pub struct Connection {
    conn:        RefCell<Conn>,
    id:          u32,
    error_level: Cell<ErrorLevel>,
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("connection_id", &self.id)
            .field("error_level", &self.error_level.get())
            .finish()
    }
}

fn micros(us: u32) -> String {
    if us == 0 {
        String::new()
    } else {
        format!(".{:06}", us)
    }
}

/// Text form of a column value, `None` for `NULL`.
fn column_text(value: Option<&mysql::Value>) -> Option<String> {
    use mysql::Value::*;

    let text = match value? {
        NULL => return None,
        Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        Int(i) => i.to_string(),
        UInt(u) => u.to_string(),
        Float(f) => f.to_string(),
        Double(d) => d.to_string(),
        Date(y, m, d, 0, 0, 0, 0) => format!("{:04}-{:02}-{:02}", y, m, d),
        Date(y, m, d, h, i, s, us) =>
            format!("{:04}-{:02}-{:02} {:02}:{:02}:{:02}{}", y, m, d, h, i, s, micros(*us)),
        Time(neg, days, h, i, s, us) => format!(
            "{}{:02}:{:02}:{:02}{}",
            if *neg { "-" } else { "" },
            *days * 24 + u32::from(*h), i, s, micros(*us)
        ),
    };
    Some(text)
}

fn to_row(row: &mysql::Row) -> Row {
    let columns = row.columns_ref();
    let mut result = Row::with_capacity(columns.len());
    for (i, column) in columns.iter().enumerate() {
        result.insert(column.name_str().into_owned(), column_text(row.as_ref(i)));
    }
    result
}

impl Connection {
    pub(crate) fn new(conn: Conn) -> Self {
        Self {
            id:          conn.connection_id(),
            conn:        RefCell::new(conn),
            error_level: Cell::new(ErrorLevel::default()),
        }
    }

    /// Execute a statement without processing the resulting rows if any.
    pub fn execute(&self, query: &str) -> Result<()> {
        let error_level = self.error_level.get();
        let mut conn = match self.conn.try_borrow_mut() {
            Ok(conn) => conn,
            Err(_) => return Error::new(&error_level, "exec error", "connection busy"),
        };
        match conn.query_drop(query) {
            Ok(()) => Ok(()),
            Err(e) => Error::new(&error_level, "exec error", e),
        }
    }

    /// Execute a statement and process the resulting rows as plain text.
    ///
    /// The callback is triggered for each row with `(column, value)` pairs.
    /// If the callback returns `false`, no more rows will be processed.
    pub fn iterate<F>(&self, query: &str, mut callback: F) -> Result<()>
    where
        F: FnMut(&[(&str, Option<&str>)]) -> bool,
    {
        let error_level = self.error_level.get();
        let mut conn = match self.conn.try_borrow_mut() {
            Ok(conn) => conn,
            Err(_) => return Error::new(&error_level, "exec error", "connection busy"),
        };
        let mut result = match conn.query_iter(query) {
            Ok(result) => result,
            Err(e) => return Error::new(&error_level, "exec error", e),
        };

        while let Some(result_set) = result.iter() {
            for row in result_set {
                let row = match row {
                    Ok(row) => to_row(&row),
                    Err(e) => return Error::new(&error_level, "exec error", e),
                };
                let pairs: Vec<(&str, Option<&str>)> = row.iter().collect();
                if !callback(&pairs) {
                    return Error::new(&error_level, "exec error", "query aborted");
                }
            }
        }

        Ok(())
    }

    /// Execute a statement and returns the rows.
    pub fn rows(&self, query: &str) -> Result<Vec<Row>> {
        let error_level = self.error_level.get();
        let mut conn = match self.conn.try_borrow_mut() {
            Ok(conn) => conn,
            Err(_) => return Error::new(&error_level, "exec error", "connection busy"),
        };
        match conn.query::<mysql::Row, _>(query) {
            Ok(rows) => Ok(rows.iter().map(to_row).collect()),
            Err(e) => Error::new(&error_level, "exec error", e),
        }
    }

    /// Start a transaction with the given isolation level.
    pub fn begin(&self, level: IsolationLevel) -> Result<()> {
        debug!(connection_id = self.id, isolation = %level, "begin transaction");
        self.execute(&format!("SET TRANSACTION ISOLATION LEVEL {}", level))?;
        self.execute("START TRANSACTION")
    }

    pub fn commit(&self) -> Result<()> {
        debug!(connection_id = self.id, "commit");
        self.execute("COMMIT")
    }

    pub fn rollback(&self) -> Result<()> {
        debug!(connection_id = self.id, "rollback");
        self.execute("ROLLBACK")
    }

    /// Whether the server still answers on this session.
    ///
    /// `false` also while the session is busy with [`iterate`](Connection::iterate).
    pub fn ping(&self) -> bool {
        match self.conn.try_borrow_mut() {
            Ok(mut conn) => conn.ping().is_ok(),
            Err(_) => false,
        }
    }

    /// Server-side id of this session.
    #[inline]
    pub fn connection_id(&self) -> u32 {
        self.id
    }

    /// Sets how much detail query errors carry.
    /// Defaults to `ErrorLevel::Develop` in debug builds and `ErrorLevel::Release` otherwise.
    pub fn error_level(&self, level: ErrorLevel) {
        self.error_level.set(level);
    }

    /// Release the session.
    pub fn close(self) {
        debug!(connection_id = self.id, "closing connection");
        drop(self);
    }
}
