pub mod seed;
pub mod store;
pub mod types;

pub use seed::*;
pub use store::*;
pub use types::*;
