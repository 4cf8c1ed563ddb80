use serde::Deserialize;
use serde_json::Value;

use crate::core::{IssError, Table, Tables};

/// Reserved table carrying the server-side pagination state.
pub(crate) const CURSOR_TABLE: &str = "history.cursor";

/// Decodes an `iss.json=extended` body: `[metadata, {table: [row, ...], ...}]`.
/// The metadata element is discarded.
pub(crate) fn decode_block(body: &str) -> Result<Tables, IssError> {
    let envelope: Value = serde_json::from_str(body)
        .map_err(|e| IssError::Protocol(format!("json parse error: {e}")))?;

    let Value::Array(mut parts) = envelope else {
        return Err(IssError::Protocol(
            "expected a [metadata, tables] array".into(),
        ));
    };
    if parts.len() != 2 {
        return Err(IssError::Protocol(format!(
            "expected a two-element envelope, got {} elements",
            parts.len()
        )));
    }

    let tables = parts.swap_remove(1);
    serde_json::from_value(tables)
        .map_err(|e| IssError::Protocol(format!("malformed tables block: {e}")))
}

/// The single row of `history.cursor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub(crate) struct Cursor {
    #[serde(rename = "INDEX")]
    pub(crate) index: u64,
    #[serde(rename = "PAGESIZE")]
    pub(crate) page_size: u64,
    #[serde(rename = "TOTAL")]
    pub(crate) total: u64,
}

/// One decoded block, tagged by whether the server sent pagination state with it.
#[derive(Debug)]
pub(crate) enum Page {
    /// `end` is the offset right after this block, `INDEX + PAGESIZE`.
    Cursor {
        tables: Tables,
        cursor: Cursor,
        end: u64,
    },
    Plain { tables: Tables },
}

impl Page {
    /// Splits the cursor table off `tables`, validating it against the offset that was requested.
    ///
    /// The cursor must hold exactly one row whose `INDEX` equals `offset`, and `INDEX + PAGESIZE`
    /// must fit in a `u64`.
    pub(crate) fn classify(mut tables: Tables, offset: u64) -> Result<Self, IssError> {
        let Some(rows) = tables.remove(CURSOR_TABLE) else {
            return Ok(Self::Plain { tables });
        };

        let [row] = rows.as_slice() else {
            return Err(malformed_cursor(&rows));
        };
        let cursor: Cursor = serde_json::from_value(Value::Object(row.clone()))
            .map_err(|_| malformed_cursor(&rows))?;
        if cursor.index != offset {
            return Err(malformed_cursor(&rows));
        }
        let Some(end) = offset.checked_add(cursor.page_size) else {
            return Err(malformed_cursor(&rows));
        };

        Ok(Self::Cursor {
            tables,
            cursor,
            end,
        })
    }
}

fn malformed_cursor(rows: &Table) -> IssError {
    let raw = serde_json::to_string(rows).unwrap_or_default();
    IssError::Protocol(format!("malformed cursor data {CURSOR_TABLE}: {raw}"))
}
