use std::fmt;

use crate::Context;

/// Result of applying a [`Patch`] to a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
	/// Continue down the chain with this line.
	Replace(String),
	/// Drop the line. No later patch runs and nothing is emitted for it.
	Suppress,
}

impl PatchOutcome {
	pub fn replace(line: impl Into<String>) -> Self {
		Self::Replace(line.into())
	}

	pub fn is_suppressed(&self) -> bool {
		matches!(self, Self::Suppress)
	}
}

/// Output accumulator handed to every patch.
///
/// Lines emitted here land in the document output immediately, ahead of
/// the result of the line currently being processed.
pub struct LineSink<'a> {
	lines: &'a mut Vec<String>,
}

impl<'a> LineSink<'a> {
	pub fn new(lines: &'a mut Vec<String>) -> Self {
		Self { lines }
	}

	pub fn emit(&mut self, line: impl Into<String>) {
		self.lines.push(line.into());
	}
}

/// A single step of a line rewrite.
///
/// A patch receives the current line, the document's [`Context`], and a
/// [`LineSink`] for extra output lines. Any `Fn(String, &mut Context, &mut
/// LineSink) -> PatchOutcome` closure is a patch.
pub trait Patch {
	fn apply(&self, line: String, ctx: &mut Context, sink: &mut LineSink<'_>) -> PatchOutcome;
}

impl<F> Patch for F
where
	F: Fn(String, &mut Context, &mut LineSink<'_>) -> PatchOutcome,
{
	fn apply(&self, line: String, ctx: &mut Context, sink: &mut LineSink<'_>) -> PatchOutcome {
		self(line, ctx, sink)
	}
}

/// Coerce a closure into a [`Patch`], pinning down its argument types.
pub fn patch_fn<F>(f: F) -> F
where
	F: Fn(String, &mut Context, &mut LineSink<'_>) -> PatchOutcome,
{
	f
}

/// An ordered list of patches applied to every line of a document.
#[derive(Default)]
pub struct PatchChain {
	patches: Vec<Box<dyn Patch>>,
}

impl PatchChain {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a patch to the end of the chain.
	#[must_use]
	pub fn with(mut self, patch: impl Patch + 'static) -> Self {
		self.push(patch);
		self
	}

	pub fn push(&mut self, patch: impl Patch + 'static) {
		self.patches.push(Box::new(patch));
	}

	pub fn len(&self) -> usize {
		self.patches.len()
	}

	pub fn is_empty(&self) -> bool {
		self.patches.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Box<dyn Patch>> {
		self.patches.iter()
	}
}

impl fmt::Debug for PatchChain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PatchChain")
			.field("len", &self.patches.len())
			.finish()
	}
}
