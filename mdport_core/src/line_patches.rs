use regex::Regex;

use crate::Context;
use crate::Frontmatter;
use crate::LineSink;
use crate::MdportError;
use crate::MdportResult;
use crate::Patch;
use crate::PatchOutcome;

const FRONTMATTER_KEY: &str = "headerPatch";

/// Compile a user supplied pattern.
pub fn compile_pattern(pattern: &str) -> MdportResult<Regex> {
	Regex::new(pattern).map_err(|e| {
		MdportError::InvalidPattern {
			pattern: pattern.to_string(),
			reason: e.to_string(),
		}
	})
}

/// Emits a frontmatter block ahead of the first line of the document.
#[derive(Debug, Clone)]
pub struct FrontmatterPatch {
	block: String,
}

impl FrontmatterPatch {
	pub fn new(frontmatter: &Frontmatter) -> Self {
		Self {
			block: frontmatter.render(),
		}
	}
}

impl Patch for FrontmatterPatch {
	fn apply(&self, line: String, ctx: &mut Context, sink: &mut LineSink<'_>) -> PatchOutcome {
		if ctx.int(FRONTMATTER_KEY) == 0 {
			sink.emit(self.block.clone());
			ctx.set(FRONTMATTER_KEY, 1_i64);
		}

		PatchOutcome::Replace(line)
	}
}

/// Replaces any line matching `pattern` with a fixed line.
#[derive(Debug, Clone)]
pub struct ReplaceLinePatch {
	pattern: Regex,
	replacement: String,
}

impl ReplaceLinePatch {
	pub fn new(pattern: Regex, replacement: impl Into<String>) -> Self {
		Self {
			pattern,
			replacement: replacement.into(),
		}
	}
}

impl Patch for ReplaceLinePatch {
	fn apply(&self, line: String, _ctx: &mut Context, _sink: &mut LineSink<'_>) -> PatchOutcome {
		if self.pattern.is_match(&line) {
			PatchOutcome::replace(self.replacement.as_str())
		} else {
			PatchOutcome::Replace(line)
		}
	}
}

/// Backslash-escapes `<` and `>` on the lines strictly between a line
/// matching `start` and the next line matching `end`.
///
/// Progress is kept as a counter in the context: `0` before the region,
/// `1` inside, `2` after. Only the first region is escaped.
#[derive(Debug, Clone)]
pub struct EscapeRegionPatch {
	start: Regex,
	end: Regex,
	key: String,
}

impl EscapeRegionPatch {
	pub fn new(start: Regex, end: Regex) -> Self {
		let key = format!("escapeRegion:{}", start.as_str());
		Self { start, end, key }
	}
}

impl Patch for EscapeRegionPatch {
	fn apply(&self, line: String, ctx: &mut Context, _sink: &mut LineSink<'_>) -> PatchOutcome {
		match ctx.int(&self.key) {
			0 if self.start.is_match(&line) => ctx.set(self.key.as_str(), 1_i64),
			1 if self.end.is_match(&line) => ctx.set(self.key.as_str(), 2_i64),
			1 => return PatchOutcome::Replace(escape_angle_brackets(&line)),
			_ => {}
		}

		PatchOutcome::Replace(line)
	}
}

fn escape_angle_brackets(line: &str) -> String {
	line.replace('<', "\\<").replace('>', "\\>")
}

/// Cuts a matching line at the first `marker` and appends `suffix`.
///
/// With `skip_next` set, the following input line is dropped as well.
#[derive(Debug, Clone)]
pub struct TruncateLinePatch {
	pattern: Regex,
	marker: String,
	suffix: String,
	skip_next: bool,
}

impl TruncateLinePatch {
	pub fn new(pattern: Regex, marker: impl Into<String>, suffix: impl Into<String>) -> Self {
		Self {
			pattern,
			marker: marker.into(),
			suffix: suffix.into(),
			skip_next: false,
		}
	}

	#[must_use]
	pub fn skip_next(mut self, skip_next: bool) -> Self {
		self.skip_next = skip_next;
		self
	}
}

impl Patch for TruncateLinePatch {
	fn apply(&self, line: String, ctx: &mut Context, _sink: &mut LineSink<'_>) -> PatchOutcome {
		if !self.pattern.is_match(&line) {
			return PatchOutcome::Replace(line);
		}

		let kept = line
			.find(self.marker.as_str())
			.map_or(line.as_str(), |index| &line[..index]);
		let truncated = format!("{kept}{}", self.suffix);
		if self.skip_next {
			ctx.skip_next_line();
		}

		PatchOutcome::Replace(truncated)
	}
}
