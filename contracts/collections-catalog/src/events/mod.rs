mod builder;
mod types;

mod collection;
pub(crate) mod nep171;
mod node;

pub(crate) use collection::*;
pub(crate) use node::*;

pub(crate) const STANDARD: &str = "catalog";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const COLLECTION: &str = "COLLECTION_UPDATE";
pub(crate) const SEQUENCE: &str = "SEQUENCE_UPDATE";
pub(crate) const NODE: &str = "NODE_UPDATE";
