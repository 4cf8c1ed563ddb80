use chrono::NaiveDate;

use crate::core::Query;
use crate::core::wire::CURSOR_TABLE;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Semantic inputs of an ISS query, translated to wire parameters by [`build`](Self::build).
///
/// | input      | parameter                         |
/// |------------|-----------------------------------|
/// | `question` | `q`                               |
/// | `interval` | `interval`                        |
/// | `start`    | `from`                            |
/// | `end`      | `till`                            |
/// | `date`     | `date`                            |
/// | `table`    | `iss.only={table},history.cursor` |
/// | `columns`  | `{table}.columns=a,b,c`           |
///
/// Unset or empty inputs produce no parameter. Columns are only sent together with a table,
/// since ISS addresses them through the table name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    question: Option<String>,
    interval: Option<u32>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    date: Option<NaiveDate>,
    table: Option<String>,
    columns: Vec<String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search over codes, names, ISINs and registration numbers.
    #[must_use]
    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    /// Candle size, in the ISS interval code.
    #[must_use]
    pub fn interval(mut self, interval: u32) -> Self {
        self.interval = Some(interval);
        self
    }

    /// First date of the range (inclusive).
    #[must_use]
    pub fn start(mut self, start: Option<NaiveDate>) -> Self {
        self.start = start;
        self
    }

    /// Last date of the range (inclusive).
    #[must_use]
    pub fn end(mut self, end: Option<NaiveDate>) -> Self {
        self.end = end;
        self
    }

    /// The date the data should be reported for.
    #[must_use]
    pub fn date(mut self, date: Option<NaiveDate>) -> Self {
        self.date = date;
        self
    }

    /// Restricts the response to `table` (and the pagination cursor).
    #[must_use]
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Restricts the selected table to `columns`, in that order.
    #[must_use]
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(&self) -> Query {
        let mut query = Query::new();
        if let Some(q) = self.question.as_deref().filter(|q| !q.is_empty()) {
            query.insert("q", q);
        }
        if let Some(interval) = self.interval.filter(|i| *i != 0) {
            query.insert("interval", interval);
        }
        if let Some(start) = self.start {
            query.insert("from", start.format(DATE_FORMAT));
        }
        if let Some(end) = self.end {
            query.insert("till", end.format(DATE_FORMAT));
        }
        if let Some(date) = self.date {
            query.insert("date", date.format(DATE_FORMAT));
        }
        if let Some(table) = self.table.as_deref().filter(|t| !t.is_empty()) {
            query.insert("iss.only", format!("{table},{CURSOR_TABLE}"));
            if !self.columns.is_empty() {
                query.insert(format!("{table}.columns"), self.columns.join(","));
            }
        }
        query
    }
}
