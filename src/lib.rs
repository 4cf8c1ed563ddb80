//! moex-iss: async client for the MOEX Information & Statistics Server (ISS).
//!
//! ISS is a REST service answering with named tables of rows. Large results are split into
//! blocks; [`IssRequest`] follows the server's `history.cursor` hint (or counts rows when there
//! is none) and stitches the blocks back into one [`Tables`] set.
//!
//! The endpoint modules ([`reference`], [`history`], [`candles`], [`statistics`]) wrap the most
//! common resources. Any other resource can be reached with an [`Endpoint`], a [`QueryParams`]
//! and [`IssClient::request`].
//!
//! ```no_run
//! # use moex_iss::{IssClient, history};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = IssClient::default();
//! let rows = history::get_board_history(&client, "SNGSP", None, None).await?;
//! for row in rows.iter().take(3) {
//!     println!("{} {}", row["TRADEDATE"], row["CLOSE"]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod endpoint;
pub mod request;

pub mod candles;
pub mod history;
pub mod reference;
pub mod statistics;

pub use crate::core::{
    IssClient, IssClientBuilder, IssError, Query, RawResponse, Table, TableRow, Tables, Transport,
};
pub use crate::endpoint::{Endpoint, QueryParams, Scope, Venue, get_long_data, get_short_data};
pub use crate::request::IssRequest;

pub use candles::{CandleInterval, CandlesBuilder};
pub use history::HistoryBuilder;
