mod catalog;
mod error;
mod export;
mod favorite;
mod filter;
mod import;
mod normalize;
mod seed;
mod tagging;

pub use catalog::*;
pub use error::*;
pub use export::*;
pub use favorite::*;
pub use filter::*;
pub use import::*;
pub use normalize::*;
pub use seed::*;
pub use tagging::*;

pub use grubmaster_shared::recipe::*;
