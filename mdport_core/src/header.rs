use std::fmt;
use std::fmt::Display;
use std::path::Path;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::MdportError;
use crate::MdportResult;
use crate::rewrite::transform_file;

/// Delimiter line of a frontmatter block.
pub const FRONTMATTER_FENCE: &str = "---";

/// Pattern matched by [`title_from_version_range`].
pub const VERSION_RANGE_PATTERN: &str =
	r"[0-9]+(?:\.[0-9]+)*(?:/[0-9]+(?:\.[0-9]+)*)* -> [0-9]+(?:\.[0-9]+)*(?:/[0-9]+(?:\.[0-9]+)*)*";

static VERSION_RANGE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(VERSION_RANGE_PATTERN)
		.unwrap_or_else(|e| panic!("invalid version range regex: {e}"))
});

/// An ordered set of `key: value` pairs rendered as a frontmatter block.
///
/// ```text
/// ---
/// title: 1.20 -> 1.20.2
/// sidebar_position: 2
/// ---
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
	entries: Vec<(String, String)>,
}

impl Frontmatter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append an entry. Keys are emitted in insertion order.
	#[must_use]
	pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
		self.entries.push((key.into(), value.to_string()));
		self
	}

	#[must_use]
	pub fn title(self, title: impl Display) -> Self {
		self.with("title", title)
	}

	#[must_use]
	pub fn sidebar_position(self, position: impl Display) -> Self {
		self.with("sidebar_position", position)
	}

	pub fn entries(&self) -> &[(String, String)] {
		&self.entries
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Render the block, including a trailing newline after the closing
	/// fence.
	pub fn render(&self) -> String {
		let mut block = String::from(FRONTMATTER_FENCE);
		block.push('\n');
		for (key, value) in &self.entries {
			block.push_str(key);
			block.push_str(": ");
			block.push_str(value);
			block.push('\n');
		}
		block.push_str(FRONTMATTER_FENCE);
		block.push('\n');
		block
	}
}

impl fmt::Display for Frontmatter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}

/// A header-deriving function could not find what it looks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternNotFound {
	pub pattern: String,
}

impl PatternNotFound {
	pub fn new(pattern: impl Into<String>) -> Self {
		Self {
			pattern: pattern.into(),
		}
	}
}

type DeriveHeader<'a> = Box<dyn Fn(&str) -> Result<String, PatternNotFound> + 'a>;

/// Text placed before a document body.
pub enum Header<'a> {
	/// Fixed header text.
	Static(String),
	/// Header computed from the full document body.
	Derived(DeriveHeader<'a>),
}

impl<'a> Header<'a> {
	pub fn derived(f: impl Fn(&str) -> Result<String, PatternNotFound> + 'a) -> Self {
		Self::Derived(Box::new(f))
	}

	fn resolve(&self, body: &str, source: &Path) -> MdportResult<String> {
		match self {
			Self::Static(text) => Ok(text.clone()),
			Self::Derived(derive) => {
				derive(body).map_err(|missing| {
					MdportError::MissingPattern {
						path: source.to_path_buf(),
						pattern: missing.pattern,
					}
				})
			}
		}
	}
}

impl From<Frontmatter> for Header<'_> {
	fn from(frontmatter: Frontmatter) -> Self {
		Self::Static(frontmatter.render())
	}
}

impl From<String> for Header<'_> {
	fn from(text: String) -> Self {
		Self::Static(text)
	}
}

impl From<&str> for Header<'_> {
	fn from(text: &str) -> Self {
		Self::Static(text.to_string())
	}
}

impl fmt::Debug for Header<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Static(text) => f.debug_tuple("Static").field(text).finish(),
			Self::Derived(_) => f.write_str("Derived(..)"),
		}
	}
}

/// Prepend `header` to `body`, separated by a newline.
pub fn prepend_header(header: &str, body: &str) -> String {
	format!("{header}\n{body}")
}

/// Prepend a header to the document at `source`.
///
/// With a `destination` other than `source` the document is moved. A
/// derived header that cannot be computed fails with
/// [`MdportError::MissingPattern`] and leaves the document untouched.
/// Injection is not idempotent: a second call adds a second header.
pub fn inject_header(
	header: &Header<'_>,
	source: &Path,
	destination: Option<&Path>,
) -> MdportResult<PathBuf> {
	let written = transform_file(source, destination, |body| {
		let text = header.resolve(body, source)?;
		Ok(prepend_header(&text, body))
	})?;
	tracing::debug!(path = %written.display(), "injected header");

	Ok(written)
}

/// Extract a version range such as `1.20.4 -> 1.20.5` or
/// `1.20/1.20.1 -> 1.20.2` from the first line of `body`.
pub fn title_from_version_range(body: &str) -> Result<String, PatternNotFound> {
	let first_line = body.split('\n').next().unwrap_or_default();
	VERSION_RANGE
		.find(first_line)
		.map(|found| found.as_str().to_string())
		.ok_or_else(|| PatternNotFound::new(VERSION_RANGE_PATTERN))
}
