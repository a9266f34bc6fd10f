mod types;

pub use types::{Action, MintAuth};
