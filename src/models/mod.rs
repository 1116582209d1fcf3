// Data models (structs)
pub mod coerce;
pub mod duration;
pub mod info;
pub mod rental;
pub mod settings;
pub mod totals;

pub use duration::*;
pub use info::*;
pub use rental::*;
pub use settings::*;
pub use totals::*;
