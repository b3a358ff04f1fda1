//! Process-level helpers shared by both services: logging setup and shutdown signalling.

pub mod utils;
