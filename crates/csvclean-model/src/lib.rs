pub mod cell;
pub mod error;
pub mod table;

pub use cell::{Cell, GroupKey, format_numeric};
pub use error::{EngineError, Result};
pub use table::Table;
