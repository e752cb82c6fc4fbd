pub mod calendar;
pub mod clock;
pub mod date_range;
pub mod error;
pub mod preset;
pub mod resolver;
pub mod selection;

pub use calendar::*;
pub use clock::*;
pub use date_range::*;
pub use error::*;
pub use preset::*;
pub use resolver::*;
pub use selection::*;
