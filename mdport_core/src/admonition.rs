//! Translation of GitHub-style callouts into fenced admonitions.
//!
//! ```text
//! > [!WARNING]          :::warning
//! > Mind the gap.   →   Mind the gap.
//! Back to normal.       :::
//!                       Back to normal.
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::Context;
use crate::LineSink;
use crate::Patch;
use crate::PatchOutcome;
use crate::context::ADMONITION_KEY;

/// Fence that closes an admonition block.
pub const ADMONITION_CLOSE: &str = ":::";
/// Prefix carried by every continuation line of a callout.
pub const QUOTE_CONTINUATION: &str = "> ";

static CALLOUT_MARKER: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\[!([A-Z]+)\]").unwrap_or_else(|e| panic!("invalid callout regex: {e}"))
});

/// Map a callout kind to its admonition kind. Unknown kinds become `note`.
pub fn admonition_kind(kind: &str) -> &'static str {
	match kind {
		"IMPORTANT" => "info",
		"WARNING" | "CAUTION" => "warning",
		_ => "note",
	}
}

/// Two-state patch that rewrites `> [!KIND]` callouts.
///
/// The state lives in the document [`Context`] under [`ADMONITION_KEY`],
/// so the engine can close a callout that runs to the end of the document.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdmonitionPatch;

impl AdmonitionPatch {
	pub fn new() -> Self {
		Self
	}
}

impl Patch for AdmonitionPatch {
	fn apply(&self, line: String, ctx: &mut Context, sink: &mut LineSink<'_>) -> PatchOutcome {
		if ctx.in_admonition() {
			if let Some(rest) = line.strip_prefix(QUOTE_CONTINUATION) {
				return PatchOutcome::replace(rest);
			}

			// The terminating line is not part of the callout.
			ctx.set(ADMONITION_KEY, false);
			sink.emit(ADMONITION_CLOSE);
		}

		if let Some(captures) = CALLOUT_MARKER.captures(&line) {
			ctx.set(ADMONITION_KEY, true);
			return PatchOutcome::Replace(format!(":::{}", admonition_kind(&captures[1])));
		}

		PatchOutcome::Replace(line)
	}
}
