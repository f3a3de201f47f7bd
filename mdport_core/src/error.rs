use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum MdportError {
	#[error(transparent)]
	#[diagnostic(code(mdport::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to access `{}`: {source}", path.display())]
	#[diagnostic(code(mdport::file_io))]
	FileIo {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("expected pattern `{pattern}` not found in `{}`", path.display())]
	#[diagnostic(
		code(mdport::missing_pattern),
		help("the header could not be derived from the document; check the document's first line")
	)]
	MissingPattern { path: PathBuf, pattern: String },

	#[error("failed to serialize metadata: {0}")]
	#[diagnostic(code(mdport::json))]
	Json(#[from] serde_json::Error),

	#[error("unparseable version label: `{0}`")]
	#[diagnostic(
		code(mdport::unparseable_version),
		help("version labels are two or three dot-separated numbers, e.g. `1.20` or `1.20.6`")
	)]
	UnparseableVersion(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(mdport::config_parse),
		help("check that mdport.toml is valid TOML with [[rewrite]], [[header]] and/or [[ordering]] tables")
	)]
	ConfigParse(String),

	#[error("no config file found in `{}`", .0.display())]
	#[diagnostic(
		code(mdport::config_not_found),
		help("create an `mdport.toml` in the project root or pass `--config`")
	)]
	ConfigNotFound(PathBuf),

	#[error("invalid pattern `{pattern}`: {reason}")]
	#[diagnostic(code(mdport::invalid_pattern))]
	InvalidPattern { pattern: String, reason: String },

	#[error("unknown source `{0}` referenced by a rewrite job")]
	#[diagnostic(
		code(mdport::unknown_source),
		help("declare it under `[sources.{0}]` with its `commit` and `repository`")
	)]
	UnknownSource(String),
}

impl MdportError {
	/// Attach the document path to an I/O failure.
	pub(crate) fn file_io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
		let path = path.into();
		move |source| Self::FileIo { path, source }
	}
}

pub type MdportResult<T> = Result<T, MdportError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
