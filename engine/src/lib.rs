pub mod config;
pub mod defaults;
pub mod error;
pub mod game;
pub mod logger;
pub mod session;
pub mod session_rng;

pub use error::EngineError;
pub use session_rng::SessionRng;
