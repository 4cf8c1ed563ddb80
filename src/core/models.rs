use std::collections::BTreeMap;
use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::core::IssError;

/// One record of an ISS table: column name to scalar value, in the column order of the response.
///
/// Values are passed through untouched. ISS emits strings, integers, floats and `null`.
pub type TableRow = serde_json::Map<String, serde_json::Value>;

/// The rows of one ISS table, in server order.
pub type Table = Vec<TableRow>;

/// A set of named ISS tables, as decoded from one response or aggregated across many.
///
/// Iteration order is the order in which each table name was first seen. Appending rows to
/// an existing name extends that table in place, which is what keeps table identity stable
/// when pages are concatenated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tables {
    entries: Vec<(String, Table)>,
}

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct tables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Table> {
        self.position(name).map(|i| &self.entries[i].1)
    }

    /// Removes a table, keeping the relative order of the others.
    pub fn remove(&mut self, name: &str) -> Option<Table> {
        self.position(name).map(|i| self.entries.remove(i).1)
    }

    /// The first table of the set, if any.
    pub fn first(&self) -> Option<(&str, &Table)> {
        self.entries.first().map(|(n, t)| (n.as_str(), t))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Table)> {
        self.entries.iter().map(|(n, t)| (n.as_str(), t))
    }

    /// Appends `rows` to the table called `name`, creating it on first occurrence.
    pub fn append(&mut self, name: impl Into<String>, mut rows: Table) {
        let name = name.into();
        match self.position(&name) {
            Some(i) => self.entries[i].1.append(&mut rows),
            None => self.entries.push((name, rows)),
        }
    }

    /// Appends every table of `other` to this set, table by table.
    pub fn merge(&mut self, other: Tables) {
        for (name, rows) in other {
            self.append(name, rows);
        }
    }

    /// Borrows a table by name.
    ///
    /// # Errors
    ///
    /// Returns [`IssError::MissingTable`] if no table with that name is present.
    pub fn table(&self, name: &str) -> Result<&Table, IssError> {
        self.get(name).ok_or_else(|| IssError::MissingTable {
            table: name.to_string(),
        })
    }

    /// Takes a table by name out of the set, dropping the rest.
    ///
    /// # Errors
    ///
    /// Returns [`IssError::MissingTable`] if no table with that name is present.
    pub fn select(mut self, name: &str) -> Result<Table, IssError> {
        self.remove(name).ok_or_else(|| IssError::MissingTable {
            table: name.to_string(),
        })
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }
}

impl IntoIterator for Tables {
    type Item = (String, Table);
    type IntoIter = std::vec::IntoIter<(String, Table)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, Table)> for Tables {
    fn from_iter<I: IntoIterator<Item = (String, Table)>>(iter: I) -> Self {
        let mut tables = Self::new();
        for (name, rows) in iter {
            tables.append(name, rows);
        }
        tables
    }
}

impl<'de> Deserialize<'de> for Tables {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TablesVisitor;

        impl<'de> Visitor<'de> for TablesVisitor {
            type Value = Tables;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping table names to arrays of rows")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Tables, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut tables = Tables::new();
                while let Some((name, rows)) = map.next_entry::<String, Table>()? {
                    tables.append(name, rows);
                }
                Ok(tables)
            }
        }

        deserializer.deserialize_map(TablesVisitor)
    }
}

impl Serialize for Tables {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, rows) in &self.entries {
            map.serialize_entry(name, rows)?;
        }
        map.end()
    }
}

/// Query-string parameters of an ISS request.
///
/// Values are kept in their wire form. Keys are unique; inserting an existing key replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Query(BTreeMap<String, String>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copies every parameter of `other` into this query, `other` winning on conflicts.
    pub fn extend(&mut self, other: &Query) {
        for (k, v) in other.iter() {
            self.insert(k, v);
        }
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (k, v) in iter {
            query.insert(k, v);
        }
        query
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (k, v) in self.iter() {
            if !first {
                f.write_str("&")?;
            }
            first = false;
            write!(f, "{k}={v}")?;
        }
        Ok(())
    }
}
