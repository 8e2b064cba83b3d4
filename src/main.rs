mod config;
mod palette;
mod render;

use anyhow::{Context, Result};
use changes_core::{accumulate, standards, tokenize, walk, DecodePolicy, Progression};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use palette::Palette;

#[derive(Parser, Debug)]
#[command(name = "changes")]
#[command(about = "Plot jazz chord progressions as interval paths", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML config file (policy, origin, render size, palette)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// What to do with chords whose root cannot be read (overrides config)
    #[arg(long, global = true, value_enum)]
    policy: Option<PolicyArg>,

    /// Output format for tokens, pairs and path
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Log every chord change
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the chord tokens of a progression
    Tokens {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show (quality, interval) pairs
    Pairs {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show the plotted points
    Path {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Draw the path as SVG (HTML page with --all)
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the built-in standards
    Standards,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Chord changes, e.g. "Dm7 G7 | CM7"
    #[arg(required_unless_present_any = ["standard", "file", "all"])]
    changes: Option<String>,

    /// Use a built-in standard by title
    #[arg(short, long, conflicts_with_all = ["changes", "file", "all"])]
    standard: Option<String>,

    /// Read changes from a file
    #[arg(long, conflicts_with_all = ["changes", "standard", "all"])]
    file: Option<PathBuf>,

    /// Every built-in standard
    #[arg(short, long, conflicts_with_all = ["changes", "standard", "file"])]
    all: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    Skip,
    Abort,
}

impl From<PolicyArg> for DecodePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Skip => DecodePolicy::Skip,
            PolicyArg::Abort => DecodePolicy::Abort,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// One progression to process
#[derive(Debug)]
struct Entry {
    title: Option<String>,
    changes: String,
}

impl Entry {
    fn label(&self) -> &str {
        self.title.as_deref().unwrap_or("input")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let mut config = config::load(cli.config.as_deref())?;
    if let Some(policy) = cli.policy {
        config.policy = policy.into();
    }
    debug!(?config, "loaded config");

    match &cli.command {
        Commands::Standards => {
            for title in standards::titles() {
                println!("{}", title);
            }
            Ok(())
        }
        Commands::Tokens { input } => {
            let entries = resolve(input)?;
            let mut reports = Vec::new();
            for entry in &entries {
                let tokens = tokenize(&entry.changes);
                match cli.format {
                    OutputFormat::Json => reports.push(json!({ "title": entry.title, "tokens": tokens })),
                    OutputFormat::Text => print_section(entry, &entries, &render::tokens_text(&tokens)),
                }
            }
            print_json(&reports, cli.format)
        }
        Commands::Pairs { input } => {
            let entries = resolve(input)?;
            let mut reports = Vec::new();
            for entry in &entries {
                let walked = walk_entry(entry, config.policy)?;
                match cli.format {
                    OutputFormat::Json => reports.push(json!({ "title": entry.title, "progression": walked })),
                    OutputFormat::Text => print_section(entry, &entries, &render::pairs_text(&walked)),
                }
            }
            print_json(&reports, cli.format)
        }
        Commands::Path { input } => {
            let entries = resolve(input)?;
            let mut reports = Vec::new();
            for entry in &entries {
                let walked = walk_entry(entry, config.policy)?;
                let path = accumulate(&walked.pairs, config.origin);
                match cli.format {
                    OutputFormat::Json => reports.push(json!({ "title": entry.title, "path": path })),
                    OutputFormat::Text => print_section(entry, &entries, &render::path_text(&path)),
                }
            }
            print_json(&reports, cli.format)
        }
        Commands::Render { input, output } => {
            let entries = resolve(input)?;
            let palette = Palette::from_config(&config.palette);

            let mut svgs = Vec::with_capacity(entries.len());
            for entry in &entries {
                let walked = walk_entry(entry, config.policy)?;
                let path = accumulate(&walked.pairs, config.origin);
                svgs.push(render::svg(&path, entry.title.as_deref(), &palette, &config.render));
            }

            let document = if input.all {
                render::html_page(&svgs)
            } else {
                svgs.concat()
            };

            match output {
                Some(output) => {
                    fs::write(output, &document)
                        .with_context(|| format!("Failed to write {}", output.display()))?;
                    info!("Output saved to {}", output.display());
                }
                None => print!("{}", document),
            }
            Ok(())
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("changes={level},changes_core={level}")));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn resolve(input: &InputArgs) -> Result<Vec<Entry>> {
    if input.all {
        return Ok(standards::STANDARDS
            .iter()
            .map(|standard| Entry {
                title: Some(standard.title.to_string()),
                changes: standard.changes.to_string(),
            })
            .collect());
    }

    if let Some(title) = &input.standard {
        let standard = standards::find(title)
            .with_context(|| format!("Unknown standard '{}' (see `changes standards`)", title))?;
        return Ok(vec![Entry {
            title: Some(standard.title.to_string()),
            changes: standard.changes.to_string(),
        }]);
    }

    if let Some(file) = &input.file {
        let changes = fs::read_to_string(file)
            .with_context(|| format!("Failed to read file '{}'", file.display()))?;
        return Ok(vec![Entry { title: None, changes }]);
    }

    match &input.changes {
        Some(changes) => Ok(vec![Entry {
            title: None,
            changes: changes.clone(),
        }]),
        None => anyhow::bail!("No chord changes given"),
    }
}

fn walk_entry(entry: &Entry, policy: DecodePolicy) -> Result<Progression> {
    let tokens = tokenize(&entry.changes);
    let walked = walk(&tokens, policy)
        .with_context(|| format!("Failed to walk changes of {}", entry.label()))?;

    if !walked.skipped.is_empty() {
        info!(
            "{}: {} chord(s) skipped, {} change(s) plotted",
            entry.label(),
            walked.skipped.len(),
            walked.len()
        );
    }
    Ok(walked)
}

fn print_section(entry: &Entry, entries: &[Entry], body: &str) {
    if entries.len() > 1 {
        println!("== {} ==", entry.label());
    }
    print!("{}", body);
}

/// JSON goes out in one piece: a bare report for one entry, an array otherwise
fn print_json(reports: &[serde_json::Value], format: OutputFormat) -> Result<()> {
    if format != OutputFormat::Json {
        return Ok(());
    }

    let json = match reports {
        [single] => serde_json::to_string_pretty(single)?,
        _ => serde_json::to_string_pretty(reports)?,
    };
    println!("{}", json);
    Ok(())
}
