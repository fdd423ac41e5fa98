//! Historical sports-betting line sheets come as paired table rows, one row
//! per team per game, away row directly above home row. This crate turns a
//! season of those rows into one canonical per-game record per pair:
//! truncated date codes resolved against the season anchor, sentinel odds
//! tokens zeroed, adjacent rows paired, signed spreads derived, and the
//! result projected into a fixed per-sport schema.

pub mod archive;
pub mod dates;
pub mod derive;
pub mod driver;
pub mod engine;
pub mod export;
pub mod fault;
pub mod htmltab;
pub mod http_client;
pub mod pairing;
pub mod rows;
pub mod schema;
pub mod sentinel;
pub mod source;
pub mod sport;
pub mod translate;
