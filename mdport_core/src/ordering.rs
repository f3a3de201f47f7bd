use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::Frontmatter;
use crate::Header;
use crate::MdportError;
use crate::MdportResult;
use crate::VersionLabel;
use crate::header::inject_header;
use crate::header::title_from_version_range;
use crate::version::compare_descending;

/// Default ordinal of the first ordered document. `1` is left for the
/// index page.
pub const DEFAULT_BASE_ORDINAL: u32 = 2;
/// Default name of the primary document inside a version directory.
pub const DEFAULT_INDEX_FILE: &str = "index.md";

/// A sibling file that receives a fixed title when present.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct VariantOptions {
	/// File name looked up inside each version directory, e.g. `forge.md`.
	pub file: String,
	/// Title written into its frontmatter.
	pub title: String,
}

/// Release announcements to embed next to each version.
///
/// For every ordered version the file `<directory>/<slug>.md` is probed,
/// where the slug is [`VersionLabel::release_slug`]. When it exists a page
/// embedding `<url><slug>/` is written into the version directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ReleaseNotesOptions {
	pub directory: PathBuf,
	pub url: String,
	#[serde(default = "default_release_notes_file")]
	pub file: String,
	#[serde(default = "default_release_notes_title")]
	pub title: String,
}

fn default_release_notes_file() -> String {
	"neo.md".to_string()
}

fn default_release_notes_title() -> String {
	"Neo Changes".to_string()
}

/// Parameters of a document ordering pass.
#[derive(Debug, Clone)]
pub struct OrderingOptions {
	/// Directory holding one entry per version.
	pub directory: PathBuf,
	/// Ordinal assigned to the most recent version.
	pub base: u32,
	/// Primary document inside each version directory.
	pub index_file: String,
	pub variant: Option<VariantOptions>,
	pub release_notes: Option<ReleaseNotesOptions>,
}

impl OrderingOptions {
	pub fn new(directory: impl Into<PathBuf>) -> Self {
		Self {
			directory: directory.into(),
			base: DEFAULT_BASE_ORDINAL,
			index_file: DEFAULT_INDEX_FILE.to_string(),
			variant: None,
			release_notes: None,
		}
	}

	#[must_use]
	pub fn base(mut self, base: u32) -> Self {
		self.base = base;
		self
	}

	#[must_use]
	pub fn index_file(mut self, index_file: impl Into<String>) -> Self {
		self.index_file = index_file.into();
		self
	}

	#[must_use]
	pub fn variant(mut self, variant: VariantOptions) -> Self {
		self.variant = Some(variant);
		self
	}

	#[must_use]
	pub fn release_notes(mut self, release_notes: ReleaseNotesOptions) -> Self {
		self.release_notes = Some(release_notes);
		self
	}
}

/// A versioned document found by [`collect_documents`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedDocument {
	pub version: VersionLabel,
	/// The primary document.
	pub path: PathBuf,
	/// Directory holding sibling files, when the version is a directory.
	pub directory: Option<PathBuf>,
}

/// Outcome of ordering a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedDocument {
	pub version: VersionLabel,
	pub ordinal: u32,
	pub path: PathBuf,
	/// Variant sibling that received a header.
	pub variant: Option<PathBuf>,
	/// Release notes page that was written.
	pub release_notes: Option<PathBuf>,
}

/// Enumerate the versioned documents of `directory`.
///
/// Entries whose name does not start with an ASCII digit are ignored. A
/// directory entry contributes `<entry>/<index_file>`; a markdown file
/// contributes itself, labelled by its file stem. Entries are returned in
/// name order.
pub fn collect_documents(directory: &Path, index_file: &str) -> MdportResult<Vec<VersionedDocument>> {
	let entries = std::fs::read_dir(directory).map_err(MdportError::file_io(directory))?;
	let mut documents = Vec::new();

	for entry in entries {
		let entry = entry.map_err(MdportError::file_io(directory))?;
		let path = entry.path();
		let name = entry.file_name().to_string_lossy().into_owned();
		if !name.starts_with(|c: char| c.is_ascii_digit()) {
			tracing::trace!(name, "skipping non-version entry");
			continue;
		}

		if path.is_dir() {
			documents.push(VersionedDocument {
				version: VersionLabel::parse(&name)?,
				path: path.join(index_file),
				directory: Some(path),
			});
		} else if let Some(stem) = name.strip_suffix(".md") {
			documents.push(VersionedDocument {
				version: VersionLabel::parse(stem)?,
				path,
				directory: None,
			});
		} else {
			return Err(MdportError::UnparseableVersion(name));
		}
	}

	documents.sort_by(|a, b| a.path.cmp(&b.path));
	Ok(documents)
}

/// Sort documents most recent first. Equal versions keep their order.
pub fn sort_documents(documents: &mut [VersionedDocument]) {
	documents.sort_by(|a, b| compare_descending(&a.version, &b.version));
}

/// Order the versioned documents of a directory and give each a title and
/// a sidebar position.
///
/// Every document is sorted before any is modified. Ordinals start at
/// `options.base` and increase by one in sorted order. The title comes
/// from the version range on each document's first line.
pub fn order_documents(options: &OrderingOptions) -> MdportResult<Vec<OrderedDocument>> {
	let mut documents = collect_documents(&options.directory, &options.index_file)?;
	sort_documents(&mut documents);
	tracing::debug!(
		directory = %options.directory.display(),
		count = documents.len(),
		"ordering versioned documents"
	);

	let mut ordered = Vec::with_capacity(documents.len());
	for (ordinal, document) in (options.base..).zip(documents) {
		let header = Header::derived(|body| {
			let title = title_from_version_range(body)?;
			Ok(Frontmatter::new()
				.title(title)
				.sidebar_position(ordinal)
				.render())
		});
		inject_header(&header, &document.path, None)?;

		let variant = match (&options.variant, &document.directory) {
			(Some(variant), Some(directory)) => inject_variant(variant, directory)?,
			_ => None,
		};
		let release_notes = match (&options.release_notes, &document.directory) {
			(Some(notes), Some(directory)) => {
				write_release_notes(notes, &document.version, directory)?
			}
			_ => None,
		};

		tracing::info!(version = %document.version, ordinal, "ordered document");
		ordered.push(OrderedDocument {
			version: document.version,
			ordinal,
			path: document.path,
			variant,
			release_notes,
		});
	}

	Ok(ordered)
}

fn inject_variant(variant: &VariantOptions, directory: &Path) -> MdportResult<Option<PathBuf>> {
	let path = directory.join(&variant.file);
	if !path.is_file() {
		return Ok(None);
	}

	let header = Header::from(Frontmatter::new().title(&variant.title));
	inject_header(&header, &path, None).map(Some)
}

/// Body of the page embedding a release announcement.
pub fn release_notes_page(title: &str, url: &str) -> String {
	let frontmatter = Frontmatter::new().title(title).render();
	format!(
		"{frontmatter}\n<iframe src=\"{url}\" width=\"100%\" height=\"500px\">\n<p>Your browser does \
		 not support iframes.</p>\n</iframe>\n"
	)
}

fn write_release_notes(
	notes: &ReleaseNotesOptions,
	version: &VersionLabel,
	directory: &Path,
) -> MdportResult<Option<PathBuf>> {
	let slug = version.release_slug();
	if !notes.directory.join(format!("{slug}.md")).is_file() {
		return Ok(None);
	}

	let path = directory.join(&notes.file);
	let page = release_notes_page(&notes.title, &format!("{}{slug}/", notes.url));
	std::fs::write(&path, page).map_err(MdportError::file_io(&path))?;

	Ok(Some(path))
}
