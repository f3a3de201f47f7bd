use std::collections::HashMap;

/// Context key set while the admonition patch is inside a callout.
pub const ADMONITION_KEY: &str = "partOfAdmonition";
/// Context key that suppresses the next input line when `true`.
pub const SKIP_KEY: &str = "skip";

/// A value stored in a [`Context`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContextValue {
	Bool(bool),
	Int(i64),
	Text(String),
}

impl From<bool> for ContextValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for ContextValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<String> for ContextValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&str> for ContextValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

/// State shared by every patch for the lines of a single document.
///
/// A fresh context is created for each rewrite and dropped when it ends.
#[derive(Debug, Clone, Default)]
pub struct Context {
	values: HashMap<String, ContextValue>,
}

impl Context {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, key: &str) -> Option<&ContextValue> {
		self.values.get(key)
	}

	pub fn set(&mut self, key: impl Into<String>, value: impl Into<ContextValue>) {
		self.values.insert(key.into(), value.into());
	}

	pub fn remove(&mut self, key: &str) -> Option<ContextValue> {
		self.values.remove(key)
	}

	/// Boolean flag lookup. Missing keys and non-boolean values read as
	/// `false`.
	pub fn flag(&self, key: &str) -> bool {
		matches!(self.values.get(key), Some(ContextValue::Bool(true)))
	}

	/// Integer lookup. Missing keys and non-integer values read as `0`.
	pub fn int(&self, key: &str) -> i64 {
		match self.values.get(key) {
			Some(ContextValue::Int(value)) => *value,
			_ => 0,
		}
	}

	pub fn text(&self, key: &str) -> Option<&str> {
		match self.values.get(key) {
			Some(ContextValue::Text(value)) => Some(value.as_str()),
			_ => None,
		}
	}

	pub fn in_admonition(&self) -> bool {
		self.flag(ADMONITION_KEY)
	}

	/// Request that the next input line is dropped before any patch sees it.
	pub fn skip_next_line(&mut self) {
		self.set(SKIP_KEY, true);
	}

	/// Consume a pending skip request, returning whether one was set.
	pub(crate) fn take_skip(&mut self) -> bool {
		if self.flag(SKIP_KEY) {
			self.set(SKIP_KEY, false);
			true
		} else {
			false
		}
	}
}
