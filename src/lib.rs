//! Kill counts per episode from the Supernatural wiki's "Table of Death".
//!
//! The table rows are walked into `(episode, description)` pairs, each description
//! is classified into angels, demons or humans with a count, and the counts are
//! summed per episode into a [`KillTable`].

mod error;
#[doc(hidden)]
pub mod macros;
mod request;

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod export;
pub mod html;
pub mod process;
pub mod sort;
pub mod source;
pub mod table;

pub use aggregate::{aggregate, KillTable};
pub use classify::{Category, CategoryCounts, Classifier, Lexicon};
pub use error::{Error, Result};
pub use table::{walk, Cell, Row, TableWalker};

pub const SOURCE_URL: &str = "http://www.supernaturalwiki.com/Table_of_Death";
pub const CACHE_FILE: &str = "raw/table-of-death.html";
pub const OUTPUT_DIR: &str = "formatted";
pub const EXPORT_FILE: &str = "kills.json";
