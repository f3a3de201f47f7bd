use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use mdport_cli::Commands;
use mdport_cli::MdportCli;
use mdport_core::MdportConfig;
use mdport_core::MdportError;
use mdport_core::clean;
use mdport_core::ordering::OrderingOptions;
use mdport_core::ordering::order_documents;
use mdport_core::run_jobs;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = MdportCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Run) => run_run(&args),
		Some(Commands::Order {
			directory,
			base,
			index_file,
		}) => run_order(directory, *base, index_file),
		Some(Commands::Clean) => run_clean(&args),
		None => {
			eprintln!("No subcommand specified. Run `mdport --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		match e.downcast::<MdportError>() {
			Ok(mdport_err) => {
				let report: miette::Report = (*mdport_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr. `MDPORT_LOG` takes env-filter directives and overrides
/// the level implied by `--verbose`.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_env("MDPORT_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.compact()
		.init();
}

fn resolve_root(args: &MdportCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn load_config(args: &MdportCli, root: &Path) -> Result<MdportConfig, Box<dyn std::error::Error>> {
	if let Some(config_path) = &args.config {
		tracing::debug!(path = %config_path.display(), "loading job file");
		return Ok(MdportConfig::load_from(config_path)?);
	}

	tracing::debug!(root = %root.display(), "discovering job file");

	MdportConfig::load(root)?.ok_or_else(|| MdportError::ConfigNotFound(root.to_path_buf()).into())
}

fn display_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root).unwrap_or(path).display().to_string()
}

fn run_run(args: &MdportCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = load_config(args, &root)?;
	let report = run_jobs(&root, &config)?;

	for path in &report.categories {
		println!("Wrote category {}", display_relative(path, &root));
	}
	for path in report.rewritten.iter().chain(&report.headed) {
		println!("{} {}", colored!("Rewrote", green), display_relative(path, &root));
	}
	for document in &report.ordered {
		println!(
			"{} {} (position {})",
			colored!("Ordered", green),
			display_relative(&document.path, &root),
			document.ordinal
		);
	}

	println!(
		"{}",
		colored!(format!("Processed {} document(s).", report.document_count()), bold)
	);

	Ok(())
}

fn run_order(
	directory: &Path,
	base: u32,
	index_file: &str,
) -> Result<(), Box<dyn std::error::Error>> {
	let options = OrderingOptions::new(directory)
		.base(base)
		.index_file(index_file);
	let ordered = order_documents(&options)?;

	if ordered.is_empty() {
		println!("No versioned documents found in {}", directory.display());
		return Ok(());
	}

	for document in &ordered {
		println!("{:<10} {}", document.version.as_str(), document.ordinal);
	}

	Ok(())
}

fn run_clean(args: &MdportCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = load_config(args, &root)?;
	let removed = clean(&root, &config)?;

	if removed.is_empty() {
		println!("Nothing to clean.");
	}
	for path in &removed {
		println!("Removed {}", display_relative(path, &root));
	}

	Ok(())
}
