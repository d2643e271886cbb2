//! Unit tests for argument parsing, the write pipeline and rendering.

use std::collections::HashSet;

use clap::Parser;
use randgraph_core::{ConfigError, ConfigErrorCode, GeneratorError, SamplingStrategy};
use rstest::rstest;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use randgraph_test_support::tracing::RecordingLayer;

use super::commands::run_command;
use super::{Cli, CliError, Command, ErdosRenyiCommand, ExecutionSummary, render_summary, run_cli};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn command(nodes: usize, edges: u64, seed: Option<u64>, batch_size: usize) -> ErdosRenyiCommand {
    ErdosRenyiCommand {
        nodes,
        edges,
        seed,
        batch_size,
    }
}

fn parse(args: &[&str]) -> Result<ErdosRenyiCommand, clap::Error> {
    let cli = Cli::try_parse_from(args)?;
    let Command::ErdosRenyi(command) = cli.command;
    Ok(command)
}

#[test]
fn parses_erdos_renyi_flags() -> TestResult {
    let parsed = parse(&[
        "randgraph",
        "erdos-renyi",
        "--nodes",
        "40",
        "--edges",
        "120",
        "--seed",
        "9",
        "--batch-size",
        "25",
    ])?;
    assert_eq!(parsed.nodes, 40);
    assert_eq!(parsed.edges, 120);
    assert_eq!(parsed.seed, Some(9));
    assert_eq!(parsed.batch_size, 25);
    Ok(())
}

#[test]
fn optional_flags_take_defaults() -> TestResult {
    let parsed = parse(&["randgraph", "erdos-renyi", "--nodes", "5", "--edges", "3"])?;
    assert_eq!(parsed.seed, None);
    assert_eq!(parsed.batch_size, 1_000);
    Ok(())
}

#[rstest]
#[case::missing_edges(&["randgraph", "erdos-renyi", "--nodes", "5"])]
#[case::negative_nodes(&["randgraph", "erdos-renyi", "--nodes", "-5", "--edges", "1"])]
#[case::unknown_command(&["randgraph", "watts-strogatz", "--nodes", "5"])]
fn malformed_arguments_are_rejected(#[case] args: &[&str]) {
    assert!(parse(args).is_err());
}

#[rstest]
#[case::sparse(50, 100, SamplingStrategy::Sparse)]
#[case::dense(10, 40, SamplingStrategy::Dense)]
#[case::single_edge(2, 1, SamplingStrategy::Dense)]
fn writes_every_generated_edge(
    #[case] nodes: usize,
    #[case] edges: u64,
    #[case] strategy: SamplingStrategy,
) -> TestResult {
    let summary = run_command(command(nodes, edges, Some(3), 16))?;
    assert_eq!(summary.nodes, nodes);
    assert_eq!(summary.strategy, strategy);
    assert_eq!(summary.relationships.len() as u64, edges);

    let mut seen = HashSet::new();
    for (first, second) in &summary.relationships {
        assert_ne!(first, second);
        assert!(first.get() < nodes && second.get() < nodes);
        let key = (first.get().min(second.get()), first.get().max(second.get()));
        assert!(seen.insert(key), "duplicate relationship {key:?}");
    }
    Ok(())
}

#[rstest]
#[case(23, 5, 5)]
#[case(20, 5, 4)]
#[case(20, 1_000, 1)]
#[case(1, 1, 1)]
fn relationships_are_written_in_batches(
    #[case] edges: u64,
    #[case] batch_size: usize,
    #[case] batches: usize,
) -> TestResult {
    let summary = run_command(command(10, edges, Some(1), batch_size))?;
    assert_eq!(summary.batches, batches);
    Ok(())
}

#[test]
fn seeded_runs_are_reproducible() -> TestResult {
    let first = run_command(command(30, 60, Some(77), 7))?;
    let second = run_command(command(30, 60, Some(77), 7))?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn zero_batch_size_is_a_configuration_error() {
    let err = run_command(command(10, 5, Some(1), 0)).expect_err("zero batch size must fail");
    assert!(matches!(err, CliError::Config(ConfigError::ZeroBatchSize)));
    assert_eq!(err.code(), Some("CONFIG_ZERO_BATCH_SIZE"));
    assert_eq!(err.config_code(), Some(ConfigErrorCode::ZeroBatchSize));
}

#[rstest]
#[case::too_few_nodes(1, 1, ConfigErrorCode::TooFewNodes)]
#[case::no_edges(5, 0, ConfigErrorCode::NoEdgesRequested)]
#[case::too_many_edges(4, 7, ConfigErrorCode::TooManyEdges)]
fn infeasible_graphs_surface_generator_codes(
    #[case] nodes: usize,
    #[case] edges: u64,
    #[case] expected: ConfigErrorCode,
) {
    let cli = Cli {
        command: Command::ErdosRenyi(command(nodes, edges, None, 10)),
    };
    let err = run_cli(cli).expect_err("infeasible configuration must fail");
    assert!(matches!(
        err,
        CliError::Generator(GeneratorError::InvalidConfiguration(_))
    ));
    assert_eq!(err.code(), Some("GENERATOR_INVALID_CONFIGURATION"));
    assert_eq!(err.config_code(), Some(expected));
}

#[test]
fn render_summary_writes_header_and_edge_lines() -> TestResult {
    let summary = run_command(command(4, 6, Some(5), 2))?;
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    let text = String::from_utf8(buffer)?;

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("nodes: 4"));
    assert_eq!(lines.next(), Some("edges: 6"));
    assert_eq!(lines.next(), Some("strategy: dense"));
    let rendered: Vec<_> = lines.collect();
    assert_eq!(rendered.len(), 6);
    for (line, (first, second)) in rendered.iter().zip(&summary.relationships) {
        assert_eq!(*line, format!("{first}\t{second}"));
    }
    Ok(())
}

#[test]
fn render_summary_of_empty_summary_has_header_only() -> TestResult {
    let summary = ExecutionSummary {
        nodes: 3,
        strategy: SamplingStrategy::Sparse,
        batches: 0,
        relationships: Vec::new(),
    };
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    assert_eq!(String::from_utf8(buffer)?, "nodes: 3\nedges: 0\nstrategy: sparse\n");
    Ok(())
}

#[test]
fn run_command_records_spans_and_batch_events() -> TestResult {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let summary =
        tracing::subscriber::with_default(subscriber, || run_command(command(12, 30, Some(4), 8)))?;
    assert_eq!(summary.batches, 4);

    let execute = layer
        .span("cli.execute")
        .ok_or("cli.execute span must exist")?;
    assert_eq!(execute.fields.get("nodes"), Some(&"12".to_owned()));
    assert_eq!(execute.fields.get("seed"), Some(&"4".to_owned()));
    assert_eq!(execute.fields.get("strategy"), Some(&"sparse".to_owned()));

    let write = layer
        .span("cli.write_graph")
        .ok_or("cli.write_graph span must exist")?;
    assert_eq!(write.fields.get("batch_size"), Some(&"8".to_owned()));
    assert_eq!(write.fields.get("batches"), Some(&"4".to_owned()));

    let batch_events = layer
        .events()
        .into_iter()
        .filter(|event| {
            event.level == Level::INFO && event.message() == Some("wrote relationship batch")
        })
        .count();
    assert_eq!(batch_events, 4);
    assert!(layer.has_event(Level::INFO, "command completed"));
    Ok(())
}
