//! # Boxtable - Box-Drawn Text Tables
//!
//! `boxtable` renders a grid of strings with a header row as a bordered
//! table, ready to be written to a terminal or any other text stream.
//!
//! ## Core Concepts
//!
//! - [`Table`]: Owns headers and rows, computes column widths once and
//!   renders on demand
//! - [`TableOptions`]: Bold headers, ASCII borders and cell padding; set
//!   through chained setters or loaded from YAML
//! - [`SymbolSet`]: The border glyphs (Unicode box-drawing or ASCII)
//! - [`stripped_len`]: Length of a string ignoring embedded SGR escape
//!   sequences, so pre-styled values don't disturb the layout
//!
//! ## Quick Start
//!
//! ```rust
//! use boxtable::Table;
//!
//! let mut table = Table::new(
//!     vec![vec!["88", "0x7ffee784e96c"], vec!["89", "0x7ffee784e960"]],
//!     vec!["Value", "Address"],
//! ).unwrap();
//!
//! table.set_bold_headers(true).set_padding_right(2);
//! print!("{}", table);
//! ```
//!
//! ## Output
//!
//! ```text
//! ┌───────┬────────────────┐
//! │ Value │ Address        │
//! ├───────┼────────────────┤
//! │ 88    │ 0x7ffee784e96c │
//! ├───────┼────────────────┤
//! │ 89    │ 0x7ffee784e960 │
//! └───────┴────────────────┘
//! ```
//!
//! Cells are left-aligned and never wrapped or truncated. Lengths are
//! counted in characters, not terminal display columns.

mod border;
mod error;
mod options;
mod table;
mod util;

pub use border::{Glyphs, Role, SymbolSet};
pub use error::{Result, TableError};
pub use options::TableOptions;
pub use table::Table;
pub use util::{bold, strip_styles, stripped_len};
