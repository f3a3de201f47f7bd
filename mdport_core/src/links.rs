use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::Context;
use crate::LineSink;
use crate::Patch;
use crate::PatchOutcome;

static INLINE_LINK: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\[[^\]]*\]\(([^)]+)\)").unwrap_or_else(|e| panic!("invalid link regex: {e}"))
});

/// Exact link targets mapped to their replacements.
pub type LinkTable = BTreeMap<String, String>;

/// Replace the target of every inline link `[text](target)` found in
/// `table`. Text outside the parenthesized target is never touched.
pub fn remap_links(line: &str, table: &LinkTable) -> String {
	if table.is_empty() {
		return line.to_string();
	}

	let mut result = String::with_capacity(line.len());
	let mut last = 0;
	for captures in INLINE_LINK.captures_iter(line) {
		let Some(target) = captures.get(1) else {
			continue;
		};
		let Some(replacement) = table.get(target.as_str()) else {
			continue;
		};

		result.push_str(&line[last..target.start()]);
		result.push_str(replacement);
		last = target.end();
	}
	result.push_str(&line[last..]);

	result
}

/// Stateless patch applying [`remap_links`] to every line.
#[derive(Debug, Clone, Default)]
pub struct LinkRemapPatch {
	table: LinkTable,
}

impl LinkRemapPatch {
	pub fn new(table: LinkTable) -> Self {
		Self { table }
	}

	pub fn table(&self) -> &LinkTable {
		&self.table
	}
}

impl FromIterator<(String, String)> for LinkRemapPatch {
	fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl Patch for LinkRemapPatch {
	fn apply(&self, line: String, _ctx: &mut Context, _sink: &mut LineSink<'_>) -> PatchOutcome {
		PatchOutcome::Replace(remap_links(&line, &self.table))
	}
}
