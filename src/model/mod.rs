pub mod config;
pub mod intent;
pub mod store;
pub mod task;

pub use config::*;
pub use intent::*;
pub use store::*;
pub use task::*;
