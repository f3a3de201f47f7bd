use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::MdportError;
use crate::MdportResult;

/// File name the site generator reads category metadata from.
pub const CATEGORY_FILE_NAME: &str = "_category_.json";

/// Sidebar label and position of a generated directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryMetadata {
	pub label: String,
	pub position: u32,
}

/// Write `_category_.json` into `directory`, creating it if needed.
pub fn write_category(directory: &Path, category: &CategoryMetadata) -> MdportResult<PathBuf> {
	std::fs::create_dir_all(directory).map_err(MdportError::file_io(directory))?;

	let path = directory.join(CATEGORY_FILE_NAME);
	let payload = serde_json::to_string(category)?;
	std::fs::write(&path, payload).map_err(MdportError::file_io(&path))?;
	tracing::debug!(path = %path.display(), label = %category.label, "wrote category metadata");

	Ok(path)
}
