pub mod loader;
pub mod types;

pub use self::loader::InputFormat;
pub use self::types::{AlignmentIssue, RaceMap, RaceState, Racer};
