//! Visual-document value tree.
//!
//! A [`VisualDocument`] is the structured form of a program as the block
//! surface sees it: an ordered forest of typed nodes. The editor core treats
//! it as an opaque value — it is produced by a converter or pulled from the
//! visual widget, passed around whole, and never edited node-by-node. The two
//! operations the core does need are provided here:
//!
//! - emptiness and census queries, used when deciding between a structural
//!   replace, a clear, and the fallback path;
//! - [`VisualDocument::prune_unknown`], which discards nodes whose kind the
//!   current registry does not know (promoting their children) so a stale
//!   document cannot poison a replace.
//!
//! Kind identifiers are checked against a [`NodeKindSet`], an explicit
//! capability set rather than a probe into generator internals.

mod kinds;
mod node;

pub use kinds::NodeKindSet;
pub use node::{Field, Nodes, PruneReport, VisualDocument, VisualNode};

/// Kind of the opaque passthrough node used by the fallback conversion.
pub const RAW_BLOCK_KIND: &str = "raw_block";

/// Field name holding the raw source text on a [`RAW_BLOCK_KIND`] node.
pub const RAW_TEXT_FIELD: &str = "TEXT";
