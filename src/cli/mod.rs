mod catalog;
mod files;
mod plan;

pub use catalog::*;
pub use files::*;
pub use plan::*;
