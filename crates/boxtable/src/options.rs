//! Rendering options.
//!
//! Options can be set one at a time through the fluent setters on
//! [`Table`](crate::Table), or loaded as a whole from YAML:
//!
//! ```rust
//! use boxtable::TableOptions;
//!
//! let options = TableOptions::from_yaml(r#"
//! bold_headers: true
//! padding_right: 2
//! "#).unwrap();
//!
//! assert!(options.bold_headers);
//! assert!(!options.ascii);
//! assert_eq!(options.padding_left, 1);
//! assert_eq!(options.padding_right, 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::border::SymbolSet;
use crate::error::Result;

/// How a table is drawn. Changing options never changes column widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableOptions {
    /// Render header cells (including their padding) in bold.
    pub bold_headers: bool,
    /// Draw borders with `+`, `-` and `|` instead of box-drawing characters.
    pub ascii: bool,
    /// Spaces added before every cell value.
    pub padding_left: usize,
    /// Spaces added after every cell value.
    pub padding_right: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            bold_headers: false,
            ascii: false,
            padding_left: 1,
            padding_right: 1,
        }
    }
}

impl TableOptions {
    /// Parses options from a YAML document. Missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// The glyph set selected by [`ascii`](Self::ascii).
    pub fn symbol_set(&self) -> SymbolSet {
        SymbolSet::from_ascii(self.ascii)
    }

    /// Total horizontal padding inside one cell.
    pub fn padding(&self) -> usize {
        self.padding_left + self.padding_right
    }
}
