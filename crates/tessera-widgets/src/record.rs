//! Records and schema-checked tables.
//!
//! A [`Table`] fixes its column schema from the first record pushed (or from
//! [`Table::with_schema`]) and holds every later record to it: missing fields
//! are padded with the empty string, unknown fields are rejected. Values are
//! stored in schema order, so a row is just a slice of strings.

use std::cell::{Ref, RefMut};
use std::rc::Rc;
use std::sync::Arc;
use thiserror::Error;

/// One row of data: field names mapped to display values, in insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value` (builder variant of [`insert`](Record::insert)).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set `name` to `value`, returning the previous value. A new field goes
    /// to the end; an existing one keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    /// The value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the record has a field called `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Record {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Errors from building or editing a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A record carried a field the schema does not have.
    #[error("field `{field}` is not in the table schema")]
    UnknownField {
        /// The offending field name.
        field: String,
    },
    /// A row index past the end of the table.
    #[error("row {index} is out of range for a table of {len} rows")]
    RowOutOfRange {
        /// The requested index.
        index: usize,
        /// Rows in the table.
        len: usize,
    },
}

/// An ordered sequence of records sharing one schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    schema: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// An empty table whose schema is fixed by the first record pushed.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty table with a fixed schema.
    pub fn with_schema<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            schema: Some(names.into_iter().map(Into::into).collect()),
            rows: Vec::new(),
        }
    }

    /// Build a table from records; the first fixes the schema.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Result<Self, TableError> {
        let mut table = Table::new();
        for record in records {
            table.push(record)?;
        }
        Ok(table)
    }

    /// Build a table whose schema is the union of every record's fields, in
    /// first-seen order. Each record is padded with empty strings for the
    /// fields it lacks, so this never fails.
    pub fn unified(records: impl IntoIterator<Item = Record>) -> Self {
        let records: Vec<Record> = records.into_iter().collect();
        let mut schema: Vec<String> = Vec::new();
        for record in &records {
            for name in record.names() {
                if !schema.iter().any(|s| s == name) {
                    schema.push(name.to_string());
                }
            }
        }
        let rows = records
            .iter()
            .map(|r| {
                schema
                    .iter()
                    .map(|name| r.get(name).unwrap_or_default().to_string())
                    .collect()
            })
            .collect();
        Self {
            schema: Some(schema),
            rows,
        }
    }

    /// Append a record, padding missing fields with `""`.
    ///
    /// Fails with [`TableError::UnknownField`] if the record has a field the
    /// schema lacks; the table is left unchanged.
    pub fn push(&mut self, record: Record) -> Result<(), TableError> {
        let schema = self
            .schema
            .get_or_insert_with(|| record.names().map(str::to_string).collect());
        if let Some(field) = record.names().find(|n| !schema.iter().any(|s| s == n)) {
            return Err(TableError::UnknownField {
                field: field.to_string(),
            });
        }
        let row = schema
            .iter()
            .map(|name| record.get(name).unwrap_or_default().to_string())
            .collect();
        self.rows.push(row);
        Ok(())
    }

    /// Column names in display order. Empty until the schema is fixed.
    pub fn schema(&self) -> &[String] {
        self.schema.as_deref().unwrap_or_default()
    }

    /// Whether a schema has been fixed.
    pub fn has_schema(&self) -> bool {
        self.schema.is_some()
    }

    /// Position of `field` in the schema.
    pub fn position(&self, field: &str) -> Option<usize> {
        self.schema().iter().position(|s| s == field)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of row `index`, in schema order.
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Every row, in table order.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// The value of `field` in row `index`.
    pub fn get(&self, index: usize, field: &str) -> Option<&str> {
        let col = self.position(field)?;
        self.rows.get(index)?.get(col).map(String::as_str)
    }

    /// Replace the value of `field` in row `index`.
    pub fn set(
        &mut self,
        index: usize,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), TableError> {
        let col = self
            .position(field)
            .ok_or_else(|| TableError::UnknownField {
                field: field.to_string(),
            })?;
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or(TableError::RowOutOfRange { index, len })?;
        row[col] = value.into();
        Ok(())
    }

    /// Remove and return row `index`.
    pub fn remove(&mut self, index: usize) -> Result<Record, TableError> {
        if index >= self.rows.len() {
            return Err(TableError::RowOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        let values = self.rows.remove(index);
        Ok(self.schema().iter().cloned().zip(values).collect())
    }

    /// Row `index` as a [`Record`].
    pub fn record(&self, index: usize) -> Option<Record> {
        let values = self.rows.get(index)?;
        Some(self.schema().iter().zip(values).map(|(n, v)| (n.clone(), v.clone())).collect())
    }

    /// A copy with an extra first column `name`, valued per row by `value`.
    pub(crate) fn prefixed(&self, name: &str, value: impl Fn(usize) -> String) -> Table {
        let schema = std::iter::once(name.to_string())
            .chain(self.schema().iter().cloned())
            .collect();
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| std::iter::once(value(i)).chain(row.iter().cloned()).collect())
            .collect();
        Table {
            schema: Some(schema),
            rows,
        }
    }

    /// Every value of `field`, in table order.
    pub fn column(&self, field: &str) -> Option<Vec<&str>> {
        let col = self.position(field)?;
        Some(self.rows.iter().map(|r| r[col].as_str()).collect())
    }
}

/// Something a table accessor can hand back: an owned [`Table`], a
/// reference, a `RefCell` borrow, or a shared pointer.
pub trait AsTable {
    /// View as a table.
    fn as_table(&self) -> &Table;
}

impl AsTable for Table {
    fn as_table(&self) -> &Table {
        self
    }
}

impl AsTable for &Table {
    fn as_table(&self) -> &Table {
        self
    }
}

impl AsTable for &mut Table {
    fn as_table(&self) -> &Table {
        self
    }
}

impl AsTable for Ref<'_, Table> {
    fn as_table(&self) -> &Table {
        self
    }
}

impl AsTable for RefMut<'_, Table> {
    fn as_table(&self) -> &Table {
        self
    }
}

impl AsTable for Rc<Table> {
    fn as_table(&self) -> &Table {
        self
    }
}

impl AsTable for Arc<Table> {
    fn as_table(&self) -> &Table {
        self
    }
}

impl AsTable for Box<Table> {
    fn as_table(&self) -> &Table {
        self
    }
}
