//! Command implementations.

pub mod export;
pub mod map;
pub mod replay;
pub mod suspects;

pub use self::export::execute_export;
pub use self::map::execute_map;
pub use self::replay::execute_replay;
pub use self::suspects::execute_suspects;
