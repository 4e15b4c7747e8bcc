use anyhow::Result;
use clap::Parser;
use refdoc::{ClassGraph, ParserRegistry, ReferenceRenderer, Settings};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(
    name = "refdoc",
    about = "A tool to render reference documentation for configured class sets",
    version
)]
struct Cli {
    /// Reference to render. If not specified all configured references
    /// will be rendered.
    reference: Option<String>,

    /// Path to the reference configuration file
    #[clap(short, long, default_value = "refdoc.toml")]
    config: PathBuf,

    /// Path to the class manifest file
    #[clap(short, long, default_value = "classes.json")]
    manifest: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let settings = Settings::from_file(&cli.config)?;
    let graph = ClassGraph::from_manifest_file(&cli.manifest)?;
    let registry = ParserRegistry::with_builtins();

    let renderer = ReferenceRenderer::new(&settings, &graph, &registry);
    renderer.render(cli.reference.as_deref())?;

    Ok(())
}
