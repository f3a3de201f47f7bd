use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::AdmonitionPatch;
use crate::Frontmatter;
use crate::LinkRemapPatch;
use crate::LinkTable;
use crate::MdportError;
use crate::MdportResult;
use crate::PatchChain;
use crate::category::CategoryMetadata;
use crate::line_patches::EscapeRegionPatch;
use crate::line_patches::FrontmatterPatch;
use crate::line_patches::ReplaceLinePatch;
use crate::line_patches::TruncateLinePatch;
use crate::line_patches::compile_pattern;
use crate::ordering::DEFAULT_BASE_ORDINAL;
use crate::ordering::DEFAULT_INDEX_FILE;
use crate::ordering::OrderingOptions;
use crate::ordering::ReleaseNotesOptions;
use crate::ordering::VariantOptions;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["mdport.toml", ".mdport.toml", ".config/mdport.toml"];

/// Job file describing how fetched markdown is republished.
///
/// ```toml
/// clean = ["primer/docs"]
///
/// [sources.mdg]
/// repository = "https://github.com/neoforged/ModDevGradle"
/// commit = "2f1c0de"
///
/// [[rewrite]]
/// source = "plugins/mdg/index.md"
/// source_name = "mdg"
/// patches = [
///   { kind = "replace_line", pattern = "Gradle Plugin", with = "# ModDevGradle" },
///   { kind = "admonition" },
///   { kind = "links", links = { "BREAKING_CHANGES.md" = "{repository}/blob/{commit}/BREAKING_CHANGES.md" } },
/// ]
///
/// [[header]]
/// source = "primer/docs/1.21/forge.md"
/// frontmatter = { title = "Forge Changes" }
///
/// [[ordering]]
/// directory = "primer/docs"
/// base = 2
/// variant = { file = "forge.md", title = "Forge Changes" }
///
/// [[category]]
/// directory = "plugins"
/// label = "Plugins"
/// position = 1
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct MdportConfig {
	/// Fetched repositories keyed by name.
	#[serde(default)]
	pub sources: HashMap<String, SourceConfig>,
	/// Line-by-line rewrite jobs.
	#[serde(default)]
	pub rewrite: Vec<RewriteJob>,
	/// Standalone header injection jobs.
	#[serde(default)]
	pub header: Vec<HeaderJob>,
	/// Document ordering passes.
	#[serde(default)]
	pub ordering: Vec<OrderingJob>,
	/// Category metadata files.
	#[serde(default)]
	pub category: Vec<CategoryJob>,
	/// Generated directories removed by `clean`.
	#[serde(default)]
	pub clean: Vec<PathBuf>,
}

/// A repository made available by the fetch step.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SourceConfig {
	/// Base URL, substituted for `{repository}` in link targets.
	pub repository: String,
	/// Commit identifier, substituted for `{commit}` in link targets.
	pub commit: String,
}

/// Frontmatter entries. `title` and `sidebar_position` come first, other
/// keys follow in name order. Extra values may be any TOML scalar or array;
/// strings are written bare and everything else in its TOML form.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FrontmatterConfig {
	#[serde(default)]
	pub title: Option<String>,
	#[serde(default)]
	pub sidebar_position: Option<i64>,
	#[serde(flatten)]
	pub extra: BTreeMap<String, toml::Value>,
}

impl FrontmatterConfig {
	pub fn to_frontmatter(&self) -> Frontmatter {
		let mut frontmatter = Frontmatter::new();
		if let Some(title) = &self.title {
			frontmatter = frontmatter.title(title);
		}
		if let Some(position) = self.sidebar_position {
			frontmatter = frontmatter.sidebar_position(position);
		}
		for (key, value) in &self.extra {
			frontmatter = frontmatter.with(key.as_str(), frontmatter_value(value));
		}
		frontmatter
	}
}

fn frontmatter_value(value: &toml::Value) -> String {
	match value {
		toml::Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

/// A single patch of a rewrite job.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum PatchConfig {
	/// Translate `> [!KIND]` callouts.
	Admonition,
	/// Remap inline link targets. Values may use `{commit}` and
	/// `{repository}`.
	Links { links: BTreeMap<String, String> },
	/// Replace every line matching `pattern` with `with`.
	ReplaceLine { pattern: String, with: String },
	/// Escape `<` and `>` between a `start` line and an `end` line.
	EscapeRegion { start: String, end: String },
	/// Cut a matching line at `at` and append `suffix`.
	TruncateLine {
		pattern: String,
		at: String,
		#[serde(default)]
		suffix: String,
		#[serde(default)]
		skip_next: bool,
	},
}

/// Rewrite one document through a patch chain.
#[derive(Debug, Clone, Deserialize)]
pub struct RewriteJob {
	pub source: PathBuf,
	#[serde(default)]
	pub destination: Option<PathBuf>,
	/// Entry of `[sources]` used to expand link templates.
	#[serde(default)]
	pub source_name: Option<String>,
	/// Frontmatter emitted ahead of the first line.
	#[serde(default)]
	pub frontmatter: Option<FrontmatterConfig>,
	#[serde(default)]
	pub patches: Vec<PatchConfig>,
}

impl RewriteJob {
	/// Build the patch chain for this job. The frontmatter patch, when
	/// configured, runs first.
	pub fn build_chain(&self, sources: &HashMap<String, SourceConfig>) -> MdportResult<PatchChain> {
		let source = match &self.source_name {
			Some(name) => {
				Some(
					sources
						.get(name)
						.ok_or_else(|| MdportError::UnknownSource(name.clone()))?,
				)
			}
			None => None,
		};

		let mut chain = PatchChain::new();
		if let Some(frontmatter) = &self.frontmatter {
			chain.push(FrontmatterPatch::new(&frontmatter.to_frontmatter()));
		}

		for patch in &self.patches {
			match patch {
				PatchConfig::Admonition => chain.push(AdmonitionPatch::new()),
				PatchConfig::Links { links } => {
					let table: LinkTable = links
						.iter()
						.map(|(from, to)| (from.clone(), expand_link_template(to, source)))
						.collect();
					chain.push(LinkRemapPatch::new(table));
				}
				PatchConfig::ReplaceLine { pattern, with } => {
					chain.push(ReplaceLinePatch::new(compile_pattern(pattern)?, with.as_str()));
				}
				PatchConfig::EscapeRegion { start, end } => {
					chain.push(EscapeRegionPatch::new(
						compile_pattern(start)?,
						compile_pattern(end)?,
					));
				}
				PatchConfig::TruncateLine {
					pattern,
					at,
					suffix,
					skip_next,
				} => {
					chain.push(
						TruncateLinePatch::new(compile_pattern(pattern)?, at.as_str(), suffix.as_str())
							.skip_next(*skip_next),
					);
				}
			}
		}

		Ok(chain)
	}
}

/// Substitute `{commit}` and `{repository}` from `source` into a link
/// target. Without a source the target is returned unchanged.
pub fn expand_link_template(target: &str, source: Option<&SourceConfig>) -> String {
	match source {
		Some(source) => {
			target
				.replace("{commit}", &source.commit)
				.replace("{repository}", &source.repository)
		}
		None => target.to_string(),
	}
}

/// Prepend a header to one document.
#[derive(Debug, Clone, Deserialize)]
pub struct HeaderJob {
	pub source: PathBuf,
	#[serde(default)]
	pub destination: Option<PathBuf>,
	/// Literal header text.
	#[serde(default)]
	pub text: Option<String>,
	#[serde(default)]
	pub frontmatter: Option<FrontmatterConfig>,
}

impl HeaderJob {
	/// The header text. Exactly one of `text` and `frontmatter` must be set.
	pub fn header_text(&self) -> MdportResult<String> {
		match (&self.text, &self.frontmatter) {
			(Some(text), None) => Ok(text.clone()),
			(None, Some(frontmatter)) => Ok(frontmatter.to_frontmatter().render()),
			_ => {
				Err(MdportError::ConfigParse(format!(
					"header job for `{}` needs exactly one of `text` or `frontmatter`",
					self.source.display()
				)))
			}
		}
	}
}

/// Order the versioned documents of a directory.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderingJob {
	pub directory: PathBuf,
	#[serde(default = "default_base")]
	pub base: u32,
	#[serde(default = "default_index_file")]
	pub index_file: String,
	#[serde(default)]
	pub variant: Option<VariantOptions>,
	#[serde(default)]
	pub release_notes: Option<ReleaseNotesOptions>,
}

impl OrderingJob {
	/// Ordering options with every path resolved against `root`.
	pub fn to_options(&self, root: &Path) -> OrderingOptions {
		let mut options = OrderingOptions::new(root.join(&self.directory))
			.base(self.base)
			.index_file(self.index_file.as_str());
		if let Some(variant) = &self.variant {
			options = options.variant(variant.clone());
		}
		if let Some(notes) = &self.release_notes {
			options = options.release_notes(ReleaseNotesOptions {
				directory: root.join(&notes.directory),
				..notes.clone()
			});
		}
		options
	}
}

fn default_base() -> u32 {
	DEFAULT_BASE_ORDINAL
}

fn default_index_file() -> String {
	DEFAULT_INDEX_FILE.to_string()
}

/// Write category metadata into a directory.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryJob {
	pub directory: PathBuf,
	pub label: String,
	pub position: u32,
}

impl CategoryJob {
	pub fn metadata(&self) -> CategoryMetadata {
		CategoryMetadata {
			label: self.label.clone(),
			position: self.position,
		}
	}
}

impl MdportConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if there is none.
	pub fn load(root: &Path) -> MdportResult<Option<MdportConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		Self::load_from(&config_path).map(Some)
	}

	/// Load the config from an explicit file.
	pub fn load_from(path: &Path) -> MdportResult<MdportConfig> {
		let content = std::fs::read_to_string(path).map_err(MdportError::file_io(path))?;
		Self::parse(&content)
	}

	pub fn parse(content: &str) -> MdportResult<MdportConfig> {
		toml::from_str(content).map_err(|e| MdportError::ConfigParse(e.to_string()))
	}
}
