//! `roadnet` — shrink a road network, pick task edges, and export
//! `network_data.json`.
//!
//! Reads a node CSV (`id,lat,lon`) and an edge CSV (`u,v,length_m`), reduces
//! the network toward `--target-nodes` if it is larger than
//! `--reduce-above`, samples task edges from the longer half of the roads,
//! and writes the index-based document.
//!
//! Run with:
//!   cargo run -p roadnet --release -- --nodes nodes.csv --edges edges.csv --seed 42

mod pipeline;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rn_core::{PipelineConfig, SelectionRng};
use rn_export::{MapLayers, NETWORK_DATA_FILE, write_map_layers, write_network_json};
use rn_graph::load_graph_csv;

#[derive(Parser, Debug)]
#[command(name = "roadnet", version, about = "Reduce a road network and export it with task edges")]
struct Args {
    /// Node CSV with columns id,lat,lon
    #[arg(long)]
    nodes: PathBuf,

    /// Edge CSV with columns u,v,length_m (length may be empty)
    #[arg(long)]
    edges: PathBuf,

    /// Output path of the index-based network document
    #[arg(long, default_value = NETWORK_DATA_FILE)]
    output: PathBuf,

    /// Node count the reducer shrinks toward
    #[arg(long, default_value_t = PipelineConfig::default().target_nodes)]
    target_nodes: usize,

    /// Only reduce networks with more nodes than this
    #[arg(long, default_value_t = PipelineConfig::default().reduce_above)]
    reduce_above: usize,

    /// Number of task edges to sample
    #[arg(long, default_value_t = PipelineConfig::default().task_edge_count)]
    task_edges: usize,

    /// Seed for task-edge sampling (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Fail instead of exporting when the reducer cannot reach the target
    #[arg(long)]
    strict: bool,

    /// Compute missing edge lengths from node coordinates instead of
    /// exporting them as 1 m
    #[arg(long)]
    fill_lengths: bool,

    /// Also write node_coords.json and network_edges.json into this directory
    #[arg(long)]
    map_layers: Option<PathBuf>,

    /// Debug-level logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> PipelineConfig {
        PipelineConfig {
            target_nodes:    self.target_nodes,
            reduce_above:    self.reduce_above,
            task_edge_count: self.task_edges,
            seed:            self.seed,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args.config();

    let mut graph = load_graph_csv(&args.nodes, &args.edges)
        .with_context(|| format!("loading {} / {}", args.nodes.display(), args.edges.display()))?;
    if args.fill_lengths {
        let filled = graph.fill_missing_lengths();
        info!(filled, "filled missing edge lengths from coordinates");
    }

    let mut rng = SelectionRng::from_seed_opt(config.seed);
    info!(seed = ?rng.seed(), "task-edge sampling seed");

    let out = pipeline::run(graph, &config, args.strict, &mut rng)?;

    write_network_json(&args.output, &out.record)
        .with_context(|| format!("writing {}", args.output.display()))?;

    if let Some(dir) = &args.map_layers {
        let layers = MapLayers::build(&out.graph, &out.tasks);
        write_map_layers(dir, &layers)
            .with_context(|| format!("writing map layers to {}", dir.display()))?;
    }

    if out.stalled {
        info!("note: network is above the requested target size");
    }

    Ok(())
}
