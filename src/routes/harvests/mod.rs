mod delete;
mod get;
mod post;
mod report;

pub use delete::clear_harvest_entries;
pub use get::show_harvest_table;
pub use post::{save_batch, save_harvest_batch};
pub use report::show_harvest_report;
