mod aggregation;
mod staples;

pub use aggregation::*;
pub use staples::*;

pub use grubmaster_shared::shopping::*;
