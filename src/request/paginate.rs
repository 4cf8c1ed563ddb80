use crate::core::wire::Page;
use crate::core::{IssError, Tables};

/// Decides what follows the block fetched at `offset`.
///
/// Returns the block to hand out (cursor removed) and the offset of the next round trip,
/// or `None` when the resource is exhausted.
pub(super) fn advance(tables: Tables, offset: u64) -> Result<(Tables, Option<u64>), IssError> {
    match Page::classify(tables, offset)? {
        Page::Cursor {
            tables,
            cursor,
            end,
        } => {
            let next = (end < cursor.total).then_some(end);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                offset,
                page_size = cursor.page_size,
                total = cursor.total,
                next = ?next,
                "cursor page"
            );

            Ok((tables, next))
        }
        Page::Plain { tables } => {
            // Only the first table is counted; multi-table blocks without a cursor are
            // assumed to page in lockstep.
            let block_size = tables.first().map_or(0, |(_, rows)| rows.len() as u64);
            let next = if block_size > 0 {
                Some(offset.checked_add(block_size).ok_or_else(|| {
                    IssError::Protocol(format!("row offset overflow: {offset} + {block_size}"))
                })?)
            } else {
                None
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(offset, block_size, next = ?next, "plain page");

            Ok((tables, next))
        }
    }
}
