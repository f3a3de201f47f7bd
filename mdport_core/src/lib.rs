//! `mdport_core` is the content transformation pipeline behind
//! [mdport](https://github.com/mdport/mdport). It takes markdown that was
//! fetched from external repositories, rewrites it line by line through a
//! chain of composable patches, and orders versioned documents for a
//! documentation site.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Fetched markdown + commit id
//!   → Patch chain (frontmatter, admonitions, links, line edits), one line at a time
//!   → Rewrite engine (shared per-document context, output accumulator, admonition flush)
//!   → Header injector (static or derived frontmatter)
//!   → Ordering pass (version sort, sidebar positions, sibling pages)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Job files loaded from `mdport.toml`: sources, rewrite,
//!   header, ordering, and category jobs.
//! - [`ordering`] — Version-sorted document ordering and sidebar positions.
//!
//! ## Key Types
//!
//! - [`Patch`] — A single line transformation step.
//! - [`PatchChain`] — An ordered list of patches run for every line.
//! - [`Context`] — State shared by all patches for one document.
//! - [`VersionLabel`] — A dotted `major.minor[.patch]` label with a total
//!   order.
//! - [`Frontmatter`] — The `---` delimited metadata block read by the site
//!   generator.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdport_core::AdmonitionPatch;
//! use mdport_core::LinkRemapPatch;
//! use mdport_core::PatchChain;
//! use mdport_core::rewrite_text;
//!
//! let chain = PatchChain::new()
//! 	.with(AdmonitionPatch::new())
//! 	.with(LinkRemapPatch::from_iter([(
//! 		"old.md".to_string(),
//! 		"new.md".to_string(),
//! 	)]));
//!
//! let output = rewrite_text(&chain, "> [!NOTE]\n> See [docs](old.md).\nDone.");
//! assert_eq!(output, ":::note\nSee [docs](new.md).\n:::\nDone.");
//! ```

pub use admonition::*;
pub use category::*;
pub use config::*;
pub use context::*;
pub use error::*;
pub use header::*;
pub use line_patches::*;
pub use links::*;
pub use patch::*;
pub use pipeline::*;
pub use rewrite::*;
pub use version::*;

mod admonition;
mod category;
pub mod config;
mod context;
#[allow(unused_assignments)]
mod error;
mod header;
mod line_patches;
mod links;
pub mod ordering;
mod patch;
mod pipeline;
mod rewrite;
mod version;
