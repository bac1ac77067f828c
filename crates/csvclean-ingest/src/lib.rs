pub mod discovery;
pub mod loader;
pub mod writer;

pub use discovery::list_csv_files;
pub use loader::{DELIMITERS, load_table};
pub use writer::write_table;
