pub mod effect;
pub mod store;

pub use effect::{ActionSender, Effect};
pub use store::Store;
