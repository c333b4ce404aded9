pub mod config;
pub mod error;
pub mod race;
pub mod records;
pub mod scorer;
pub mod timecode;
// cmd and reports are modules of the binary crate (main.rs).
