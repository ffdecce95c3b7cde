//! Category registry and toolbox menu composition.
//!
//! The visual surface offers its building blocks through a toolbox menu. The
//! menu is declarative: a static table of categories (each an id plus an
//! opaque markup fragment), an ordered list of ids to display, and three
//! section groups that receive a separator before their first member. This
//! crate owns the table ([`builtins`]), the runtime registry
//! ([`CategoryRegistry`], which also tracks which node kinds the block set
//! understands), and the composition algorithm ([`compose`]).
//!
//! The composed string is opaque payload for the widget's native
//! toolbox-replace entry point; nothing here interprets it further.

mod builtins;
mod compose;
mod def;
mod registry;

pub use builtins::DEFAULT_MODULE_ORDER;
pub use compose::compose;
pub use def::{CategoryDef, DATA_PREFIX, SEPARATOR_FRAGMENT, Section};
pub use registry::{Category, CategoryRegistry, CustomCategory};
