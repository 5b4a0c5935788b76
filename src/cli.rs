use crate::config::load_config;
use crate::ir::BlockDb;
use crate::layout::{layout, measure_leaf_blocks};
use crate::layout_dump::{LayoutDump, write_layout_dump};
use anyhow::Result;
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "mbl", version, about = "Grid layout for Mermaid block diagram trees")]
pub struct Args {
    /// Block tree (.json / .json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for the layout dump. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Gap between cells, overrides the config file
    #[arg(short = 'p', long = "padding")]
    pub padding: Option<f32>,

    /// Size unsized leaves from their labels before layout
    #[arg(short = 'm', long = "measure")]
    pub measure: bool,

    /// Log layout decisions to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = load_config(args.config.as_deref())?;
    if let Some(padding) = args.padding {
        if padding < 0.0 {
            return Err(anyhow::anyhow!("padding must not be negative"));
        }
        config.layout.padding = padding;
    }

    let input = read_input(args.input.as_deref())?;
    let mut db = BlockDb::from_json(&input)?;
    if args.measure
        && let Some(root) = db.get_block_mut(crate::ir::ROOT_ID)
    {
        measure_leaf_blocks(root, &config);
    }

    let bounds = layout(&mut db, &config.layout)?;
    if bounds.is_none() {
        log::warn!("input has no `root` block, nothing laid out");
    }
    let dump = LayoutDump::from_tree(db.root(), bounds);
    write_layout_dump(args.output.as_deref(), &dump)
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_module("mermaid_block_layout", log::LevelFilter::Debug);
        builder.filter(Some("block_layout"), log::LevelFilter::Debug);
    }
    // Ignore a logger installed by an embedding host.
    let _ = builder.try_init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
