mod builder;

mod collection;
mod contract;
mod nep171;

pub(crate) use collection::*;
pub(crate) use contract::*;

pub(crate) const STANDARD: &str = "archetype";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const COLLECTION: &str = "COLLECTION_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
