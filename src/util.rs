use clap::ArgMatches;
use log::{info, warn};
use serde_json::{json, Value};

use crate::{
    color::{checker, CheckerResult, VertexId},
    dimacs,
    edge_list,
    error::InstanceError,
    graph::Graph,
    search::brooks::BrooksSolution,
};

/** command line parameters of a solver */
#[derive(Debug)]
pub struct SolverParams {
    /// instance file name
    pub inst_filename: String,
    /// instance read from the file
    pub graph: Graph,
    /// instance format ("dimacs" or "json")
    pub instance_type: String,
    /// file to write the solution into
    pub sol_file: Option<String>,
    /// file to write the statistics into
    pub perf_file: Option<String>,
    /// if true, the coloring steps are logged at info level
    pub trace: bool,
}

/** reads command line input and the instance */
pub fn read_params(main_args:&ArgMatches) -> Result<SolverParams, InstanceError> {
    let inst_filename = main_args.value_of("instance")
        .ok_or_else(|| InstanceError::Parse("no instance given".to_string()))?;
    let instance_type = main_args.value_of("type").unwrap_or("dimacs");
    // read value of the solution filename
    let sol_file = main_args.value_of("solution").map(|e| {
        info!("printing solutions in: {}", e);
        e.to_string()
    });
    // read value of the performance logs filename
    let perf_file = main_args.value_of("perf").map(|e| {
        info!("printing perfs in: {}", e);
        e.to_string()
    });
    // read instance file
    let graph = match instance_type {
        "dimacs" => dimacs::read_from_file(inst_filename)?,
        "json" => edge_list::read_from_file(inst_filename)?,
        _ => return Err(InstanceError::Parse(format!("instance type unknown {}", instance_type))),
    };
    graph.display_statistics();
    println!("=======================");
    Ok(SolverParams {
        inst_filename: inst_filename.to_string(),
        graph,
        instance_type: instance_type.to_string(),
        sol_file,
        perf_file,
        trace: main_args.is_present("trace"),
    })
}

/// run statistics written in the perf file
pub fn solution_stats(params:&SolverParams, solution:&BrooksSolution, time_searched:f32) -> Value {
    json!({
        "nb_colors": solution.nb_colors(),
        "max_degree": solution.max_degree(),
        "strategy": solution.strategy().name(),
        "time_searched": time_searched,
        "inst_name": params.inst_filename,
        "inst_type": params.instance_type,
    })
}

/// exports search results to files
pub fn export_results(
    graph:&Graph,
    solution:&[Vec<VertexId>],
    stats:&Value,
    perf_file:Option<&str>,
    sol_file:Option<&str>,
) -> Result<(), InstanceError> {
    // export statistics
    if let Some(filename) = perf_file {
        std::fs::write(filename, serde_json::to_string(stats)?)?;
    }
    // export solution
    if let Some(filename) = sol_file {
        let checker_result = checker(graph, solution);
        if !matches!(checker_result, CheckerResult::Ok(_)) {
            warn!("invalid solution (reason: {:?})", checker_result);
        }
        dimacs::write_solution(filename, solution)?;
    }
    Ok(())
}
