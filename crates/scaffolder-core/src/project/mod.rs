//! Project naming and target directory handling

pub mod directory;
pub mod name;

pub use directory::{classify, DirectoryState};
pub use name::{is_valid_package_name, to_valid_package_name};
