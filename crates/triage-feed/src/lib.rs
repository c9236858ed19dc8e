//! Report feed loading for the triage board.
//!
//! A feed produces a [`Seed`](triage_models::Seed): either a flat list of
//! reports or a per-stage partition. Three sources are supported:
//!
//! - `mock`: five built-in sample reports
//! - a JSON file on disk
//! - an `http://` or `https://` endpoint returning JSON
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use triage_feed::{load, FeedSource};
//!
//! let source: FeedSource = "http://localhost:8000/reports".parse().unwrap();
//! let seed = load(&source, Duration::from_secs(10)).unwrap();
//! println!("{} reports", seed.len());
//! ```

pub mod decode;
pub mod error;
pub mod mock;
pub mod source;

pub use decode::decode_seed;
pub use error::{FeedError, Result};
pub use mock::mock_reports;
pub use source::{load, FeedSource};
