//! Actions applied to matched entries.

pub mod archive;
pub mod delete;
pub mod list;

pub use archive::{archive_file, archive_target};
pub use delete::{DeletionLog, delete_file};
pub use list::list_file;
