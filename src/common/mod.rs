pub mod download;
pub mod error;
pub mod metadata;
pub mod records;

pub use download::*;
pub use error::*;
pub use metadata::*;
pub use records::*;
