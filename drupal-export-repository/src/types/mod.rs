mod node;
mod url_alias;

pub use node::{NodeKind, NodeRecord, TextFormat, STATUS_PUBLISHED};
pub use url_alias::UrlAlias;
