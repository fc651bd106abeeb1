mod roster;
mod schedule;

pub use roster::*;
pub use schedule::*;

pub use grubmaster_shared::duty::*;
