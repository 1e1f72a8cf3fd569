pub mod world_config;

pub use self::world_config::*;
