pub mod catalog_file;
pub mod filters;
pub mod publish;

#[cfg(test)]
pub mod test_utils;

pub use catalog_file::*;
pub use filters::*;
pub use publish::*;
