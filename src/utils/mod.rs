// Shared helpers: paths, clock, countdown math, currency display
pub mod clock;
pub mod countdown;
pub mod currency;
pub mod paths;

pub use clock::*;
pub use countdown::*;
pub use currency::*;
pub use paths::*;
