//! `markdown-fix` - rewrite a markdown file in place so it passes common
//! markdownlint rules.
//!
//! # Usage
//!
//! ```bash
//! markdown-fix README.md
//! markdown-fix --skip MD034 --skip fence-language docs/guide.md
//! RUST_LOG=markdown_fix=debug markdown-fix CHANGELOG.md
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use markdown_fix::{FixerBuilder, Rule};
use tracing_subscriber::EnvFilter;

/// Fix common markdownlint errors in a markdown file, in place
#[derive(Parser, Debug)]
#[command(name = "markdown-fix", version, about, long_about = None)]
struct Cli {
    /// Markdown file to fix. It is overwritten with the result.
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Skip a rule, by ID (`MD034`) or name (`bare-urls`). May be repeated.
    #[arg(long = "skip", value_name = "RULE")]
    skip: Vec<Rule>,

    /// Language tag for code fences whose language can't be guessed
    #[arg(long, value_name = "LANG", default_value = "text")]
    fallback_language: String,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    tracing::debug!(?cli);

    let mut builder = FixerBuilder::default();
    builder.fallback_language(cli.fallback_language);
    for rule in cli.skip {
        builder.disable_rule(rule);
    }

    builder
        .build()
        .fix_file(&cli.file)
        .with_context(|| format!("failed to fix {}", cli.file.display()))?;

    println!("Fixed markdown errors in {}", cli.file.display());
    Ok(())
}
