//! Field extraction from raw spreadsheet rows
//!
//! Header normalization, header-driven value resolution and lenient numeric
//! coercion. Everything here is pure and infallible.

pub mod coerce;
pub mod normalize;
pub mod resolve;

pub use coerce::{parse_amount, to_amount};
pub use normalize::{headers_match, normalize_header};
pub use resolve::{CellValue, find_header_index, resolve};
