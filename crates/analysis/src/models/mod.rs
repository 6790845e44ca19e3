pub mod intent;
pub mod round;
pub mod timestamp;

pub use intent::Intent;
pub use round::{NormalizedRound, RawRound};
pub use timestamp::Timestamp;
