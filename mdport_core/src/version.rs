use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::MdportError;
use crate::MdportResult;

/// A dotted numeric version label such as `1.20` or `1.20.6`.
///
/// Two-component labels are normalized to three components by appending a
/// `0` patch component, so `1.20` and `1.20.0` are order-equivalent. The
/// original text is kept for display and path construction.
#[derive(Debug, Clone, Eq)]
pub struct VersionLabel {
	raw: String,
	components: [u64; 3],
}

impl VersionLabel {
	/// Parse a label made of two or three numeric components.
	pub fn parse(raw: &str) -> MdportResult<Self> {
		let parts: Vec<&str> = raw.split('.').collect();
		if !(2..=3).contains(&parts.len()) {
			return Err(MdportError::UnparseableVersion(raw.to_string()));
		}

		let mut components = [0u64; 3];
		for (slot, part) in components.iter_mut().zip(&parts) {
			if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
				return Err(MdportError::UnparseableVersion(raw.to_string()));
			}
			*slot = part
				.parse()
				.map_err(|_| MdportError::UnparseableVersion(raw.to_string()))?;
		}

		Ok(Self {
			raw: raw.to_string(),
			components,
		})
	}

	/// The label exactly as it was given.
	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// The normalized `[major, minor, patch]` components.
	pub fn components(&self) -> [u64; 3] {
		self.components
	}

	/// Slug of the release announcement for this version: the minor and
	/// patch components followed by `release` (`1.20` → `20.0release`).
	pub fn release_slug(&self) -> String {
		let [_, minor, patch] = self.components;
		format!("{minor}.{patch}release")
	}
}

impl FromStr for VersionLabel {
	type Err = MdportError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for VersionLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.raw)
	}
}

impl PartialEq for VersionLabel {
	fn eq(&self, other: &Self) -> bool {
		self.components == other.components
	}
}

/// Ascending numeric order. Use [`compare_descending`] for presentation
/// order.
impl Ord for VersionLabel {
	fn cmp(&self, other: &Self) -> Ordering {
		self.components.cmp(&other.components)
	}
}

impl PartialOrd for VersionLabel {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// Compare two labels so that the most recent version sorts first. Equal
/// labels return [`Ordering::Equal`], which keeps a stable sort stable.
pub fn compare_descending(a: &VersionLabel, b: &VersionLabel) -> Ordering {
	b.cmp(a)
}

/// Sort labels most recent first, keeping equal labels in input order.
pub fn sort_descending(labels: &mut [VersionLabel]) {
	labels.sort_by(compare_descending);
}
