use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Republish markdown from external repositories into a versioned documentation site.",
	long_about = "mdport rewrites markdown fetched from other repositories so it fits a \
	              documentation site: callouts become admonitions, links are remapped to \
	              permanent URLs, frontmatter is injected, and versioned documents are ordered \
	              most recent first.\n\nQuick start:\n  mdport run     Execute the jobs in \
	              mdport.toml\n  mdport order   Order a directory of versioned documents\n  \
	              mdport clean   Remove generated directories"
)]
pub struct MdportCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Path to the job file. Defaults to the first of `mdport.toml`,
	/// `.mdport.toml` or `.config/mdport.toml` under the root.
	#[arg(long, short, global = true)]
	pub config: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Run every job in the job file.
	///
	/// Writes category metadata, rewrites documents through their patch
	/// chains, injects headers, and runs ordering passes, in that order.
	/// Stops at the first failing job.
	Run,
	/// Order a directory of versioned documents.
	///
	/// Every entry named like `1.20` or `1.20.6` is sorted most recent
	/// first and its index document receives a title derived from its
	/// first line and a sidebar position starting at `--base`.
	Order {
		/// Directory holding one entry per version.
		directory: PathBuf,

		/// Sidebar position of the most recent version.
		#[arg(long, default_value_t = mdport_core::ordering::DEFAULT_BASE_ORDINAL)]
		base: u32,

		/// Name of the primary document inside each version directory.
		#[arg(long, default_value = mdport_core::ordering::DEFAULT_INDEX_FILE)]
		index_file: String,
	},
	/// Remove the generated directories listed under `clean`.
	Clean,
}
