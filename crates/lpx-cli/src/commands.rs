use std::fs;
use std::io::Read;

use anyhow::Context;
use colored::Colorize;

use lpx_graph::{parse_edges, DiGraph, ParseMode};
use lpx_search::{longest_path, ClosingPolicy, SearchConfig, SearchOutcome};

use crate::cli::{Cli, OutputFormat};

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let input = read_input(&cli)?;

    let mode = if cli.strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };
    let edges = parse_edges(&input, mode)?;
    let graph = DiGraph::from_edges(edges);

    let config = SearchConfig {
        closing: if cli.closed_tour {
            ClosingPolicy::ClosedTour
        } else {
            ClosingPolicy::DeadEnd
        },
        pruning: !cli.no_prune,
    };
    let outcome = longest_path(&graph, &config);

    match cli.format {
        OutputFormat::Text => {
            let rendered = outcome.render();
            // An empty graph produces no output at all.
            if !rendered.is_empty() {
                print!("{rendered}\r\n");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&outcome.best)?);
        }
    }

    if cli.stats {
        print_stats(&outcome);
    }
    Ok(())
}

fn read_input(cli: &Cli) -> anyhow::Result<String> {
    match &cli.input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading standard input")?;
            Ok(buffer)
        }
    }
}

fn print_stats(outcome: &SearchOutcome) {
    let stats = &outcome.stats;
    let distance = outcome
        .best
        .as_ref()
        .map_or_else(|| "-".to_string(), |b| format!("{}", b.distance));
    eprintln!(
        "{} distance {} | {} starts, {} expanded, {} pruned, {} improvements",
        "✓".green().bold(),
        distance.yellow(),
        stats.starts,
        stats.expanded,
        stats.pruned,
        stats.improved,
    );
}
