pub mod entry;
pub mod listing;

pub use entry::Entry;
pub use listing::{Child, list_children};
