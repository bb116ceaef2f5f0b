pub mod table;
pub mod format;

pub use table::Table;
pub use format::{format_stars, format_usd, to_fixed};
