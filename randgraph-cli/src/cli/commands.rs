//! Command implementations and argument parsing for the randgraph CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use randgraph_core::{
    BasicGeneratorConfiguration, ConfigError, ConfigErrorCode, DEFAULT_BATCH_SIZE, Edge,
    ErdosRenyiConfig, ErdosRenyiGenerator, GeneratorError, NodeCreator, PipelineParts,
    RelationshipCreator, RelationshipGenerator, SamplingStrategy,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::store::{IndexNodeCreator, NodeId, PairRelationshipCreator, StoreError};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "randgraph", about = "Generate random graphs as edge lists.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Sample an Erdos-Renyi graph with a fixed number of edges.
    ErdosRenyi(ErdosRenyiCommand),
}

/// Options accepted by the `erdos-renyi` command.
#[derive(Debug, Args, Clone)]
pub struct ErdosRenyiCommand {
    /// Number of nodes in the graph.
    #[arg(long)]
    pub nodes: usize,

    /// Number of distinct edges to sample.
    #[arg(long)]
    pub edges: u64,

    /// Seed for reproducible output; omitted means a fresh entropy seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Relationships written per batch.
    #[arg(long = "batch-size", default_value_t = DEFAULT_BATCH_SIZE.get())]
    pub batch_size: usize,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The pipeline configuration was rejected before generation.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Edge generation failed.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// The store refused a node or relationship.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// A generated edge referenced a node that was never created.
    #[error("edge endpoint {index} has no matching node")]
    MissingNode {
        /// Offending endpoint index.
        index: usize,
    },
}

impl CliError {
    /// Stable machine-readable code of the underlying core error, if any.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Config(error) => Some(error.code().as_str()),
            Self::Generator(error) => Some(error.code().as_str()),
            Self::Store(_) | Self::MissingNode { .. } => None,
        }
    }

    /// Configuration code when the failure came from an infeasible setup.
    #[must_use]
    pub const fn config_code(&self) -> Option<ConfigErrorCode> {
        match self {
            Self::Config(error) => Some(error.code()),
            Self::Generator(error) => error.config_code(),
            Self::Store(_) | Self::MissingNode { .. } => None,
        }
    }
}

/// Outcome of a generation command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Number of nodes written.
    pub nodes: usize,
    /// Sampler the dispatcher selected.
    pub strategy: SamplingStrategy,
    /// Number of relationship batches written.
    pub batches: usize,
    /// Relationships in generation order.
    pub relationships: Vec<(NodeId, NodeId)>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the configuration is infeasible, generation
/// fails, or the store refuses a write.
///
/// # Examples
/// ```
/// use randgraph_cli::cli::{Cli, Command, ErdosRenyiCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::ErdosRenyi(ErdosRenyiCommand {
///         nodes: 6,
///         edges: 4,
///         seed: Some(11),
///         batch_size: 3,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.relationships.len(), 4);
/// assert_eq!(summary.batches, 2);
/// # Ok::<(), randgraph_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::ErdosRenyi(command) => {
            Span::current().record("command", field::display("erdos-renyi"));
            run_command(command)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        nodes = command.nodes,
        edges = command.edges,
        seed = field::Empty,
        strategy = field::Empty,
    ),
)]
pub(super) fn run_command(command: ErdosRenyiCommand) -> Result<ExecutionSummary, CliError> {
    let ErdosRenyiCommand {
        nodes,
        edges,
        seed,
        batch_size,
    } = command;
    let span = Span::current();
    if let Some(seed) = seed {
        span.record("seed", seed);
    }

    let generator = ErdosRenyiGenerator::new(ErdosRenyiConfig::new(nodes, edges));
    let strategy = generator.strategy();
    let pipeline = BasicGeneratorConfiguration::new(
        generator,
        IndexNodeCreator::default(),
        PairRelationshipCreator::default(),
    )
    .try_with_batch_size(batch_size)?;

    let written = write_graph(pipeline.into_parts(), seed)?;
    span.record("strategy", field::display(strategy));
    info!(
        nodes = written.nodes,
        relationships = written.relationships.len(),
        batches = written.batches,
        "command completed"
    );
    Ok(ExecutionSummary {
        nodes: written.nodes,
        strategy,
        batches: written.batches,
        relationships: written.relationships,
    })
}

struct WrittenGraph<R> {
    nodes: usize,
    batches: usize,
    relationships: Vec<R>,
}

/// Generates the edge set, creates every node, then writes relationships in
/// `batch_size` chunks.
#[instrument(
    name = "cli.write_graph",
    err,
    skip(parts),
    fields(batch_size = parts.batch_size.get(), batches = field::Empty),
)]
fn write_graph<G, N, R>(
    parts: PipelineParts<G, N, R>,
    seed: Option<u64>,
) -> Result<WrittenGraph<R::Relationship>, CliError>
where
    G: RelationshipGenerator,
    N: NodeCreator,
    R: RelationshipCreator<N::Node>,
    N::Error: Into<CliError>,
    R::Error: Into<CliError>,
{
    let PipelineParts {
        relationship_generator,
        mut node_creator,
        mut relationship_creator,
        batch_size,
    } = parts;

    let edges = match seed {
        Some(seed) => relationship_generator.generate_edges_seeded(seed)?,
        None => relationship_generator.generate_edges()?,
    };
    let nodes = (0..relationship_generator.number_of_nodes())
        .map(|index| node_creator.create_node(index))
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::<CliError>::into)?;

    let mut relationships = Vec::with_capacity(edges.len());
    let mut batches = 0;
    for (batch, chunk) in edges.chunks(batch_size.get()).enumerate() {
        for edge in chunk {
            let (first, second) = endpoints(&nodes, edge)?;
            let relationship = relationship_creator
                .create_relationship(first, second)
                .map_err(Into::<CliError>::into)?;
            relationships.push(relationship);
        }
        batches = batch + 1;
        info!(batch, relationships = chunk.len(), "wrote relationship batch");
    }
    Span::current().record("batches", batches);

    Ok(WrittenGraph {
        nodes: nodes.len(),
        batches,
        relationships,
    })
}

fn endpoints<'a, T>(nodes: &'a [T], edge: &Edge) -> Result<(&'a T, &'a T), CliError> {
    let lookup = |index: usize| nodes.get(index).ok_or(CliError::MissingNode { index });
    Ok((lookup(*edge.first())?, lookup(*edge.second())?))
}

/// Renders `summary` to `writer` as a header followed by one tab-separated
/// line per relationship.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use randgraph_cli::cli::{Cli, Command, ErdosRenyiCommand, render_summary, run_cli};
///
/// let summary = run_cli(Cli {
///     command: Command::ErdosRenyi(ErdosRenyiCommand {
///         nodes: 2,
///         edges: 1,
///         seed: Some(0),
///         batch_size: 10,
///     }),
/// })?;
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("nodes: 2\nedges: 1\nstrategy: dense\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "nodes: {}", summary.nodes)?;
    writeln!(writer, "edges: {}", summary.relationships.len())?;
    writeln!(writer, "strategy: {}", summary.strategy)?;
    for (first, second) in &summary.relationships {
        writeln!(writer, "{first}\t{second}")?;
    }
    Ok(())
}
