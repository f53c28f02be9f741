//! This is the command line tool that loads '.dot' files, converts the graph,
//! and prints the xyflow JSON to stdout.

use clap::{Arg, Command};
use dotflow::core::utils::read_input;
use dotflow::flow::layout::assign_positions;
use dotflow::gv::{DotScanner, GraphBuilder};
use dotflow::LayoutOptions;
use std::process::ExitCode;

fn convert_file(input_path: &str) -> dotflow::Result<String> {
    let contents = read_input(input_path)?;

    let doc = DotScanner::new().process(&contents);
    let mut gb = GraphBuilder::new();
    gb.visit_document(&doc);
    log::info!(
        "Built a graph with {} nodes and {} edges",
        gb.num_nodes(),
        gb.num_edges()
    );

    let mut graph = gb.get();
    assign_positions(&mut graph, &LayoutOptions::default());
    graph.to_json()
}

fn main() -> ExitCode {
    let mut cmd = Command::new("dotflow")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts a simple DOT graph to xyflow JSON")
        .arg(
            Arg::new("INPUT")
                .help("Sets the input file to use")
                .value_name("FILE")
                .index(1),
        );
    let matches = cmd.get_matches_mut();

    env_logger::builder().format_timestamp(None).init();

    let input_path = match matches.get_one::<String>("INPUT") {
        Some(path) => path,
        None => {
            eprintln!("{}", cmd.render_usage());
            return ExitCode::FAILURE;
        }
    };

    match convert_file(input_path) {
        Result::Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Result::Err(err) => {
            log::error!("Could not convert {}", input_path);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
