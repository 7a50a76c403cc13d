use std::str::FromStr;

use indexmap::IndexMap;

/// A single result row of a query.
///
/// Columns are keyed by name and keep the order of the result set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    columns: IndexMap<String, Option<String>>,
}

/// A column can be looked up by name or by position.
pub trait Get {
    #[doc(hidden)]
    fn get<'a>(&self, row: &'a Row) -> Option<&'a Option<String>>;
}

impl Get for &str {
    #[inline]
    fn get<'a>(&self, row: &'a Row) -> Option<&'a Option<String>> {
        row.columns.get(*self)
    }
}

impl Get for String {
    #[inline]
    fn get<'a>(&self, row: &'a Row) -> Option<&'a Option<String>> {
        row.columns.get(self.as_str())
    }
}

impl Get for usize {
    #[inline]
    fn get<'a>(&self, row: &'a Row) -> Option<&'a Option<String>> {
        row.columns.get_index(*self).map(|(_, value)| value)
    }
}

impl Row {
    #[inline]
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self { columns: IndexMap::with_capacity(n) }
    }

    #[inline]
    pub(crate) fn insert(&mut self, key: String, value: Option<String>) {
        self.columns.insert(key, value);
    }

    /// Get the value of a column of the result row.
    ///
    /// Returns `None` for a missing column and for `NULL`.
    ///
    /// ```
    /// # use dbconnector::Row;
    /// # let row = Row::default();
    /// let name = row.get("name").unwrap_or("NULL");
    /// let first = row.get(0usize);
    /// ```
    #[inline]
    pub fn get<K: Get>(&self, key: K) -> Option<&str> {
        key.get(self)?.as_deref()
    }

    /// Transforms and gets the columns of the result row.
    #[inline]
    pub fn get_into<K: Get, T: FromStr>(&self, key: K) -> Result<T, <T as FromStr>::Err> {
        T::from_str(self.get(key).unwrap_or(""))
    }

    /// Return the number of columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get all the column names in result set order.
    #[inline]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}
