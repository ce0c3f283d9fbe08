mod common;
pub use self::common::*;
pub mod error;
pub use self::error::{Error, Result};
pub mod graph;
pub use self::graph::{Graph, LinkPolicy, PageId};

pub mod page_rank;

#[cfg(test)]
mod corpus;
