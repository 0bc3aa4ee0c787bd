use std::process;
use std::time::Instant;

use clap::{App, load_yaml};
use env_logger::Env;
use log::{error, info, Level};

use brooks_color::observer::LogObserver;
use brooks_color::search::brooks::brooks_coloring;
use brooks_color::util::{read_params, export_results, solution_stats};


/** colors a connected graph using the Brooks constructive procedure */
pub fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    // parse arguments
    let yaml = load_yaml!("brooks_color.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = match read_params(&main_args) {
        Ok(params) => params,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    // solve it
    let mut observer = LogObserver::new(if params.trace { Level::Info } else { Level::Trace });
    let t_start = Instant::now();
    let solution = match brooks_coloring(&params.graph, &mut observer) {
        Ok(solution) => solution,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };
    let duration = t_start.elapsed().as_secs_f32();
    info!(
        "Brooks coloring ({}) took {:.3} seconds. Nb colors: {} (max degree: {})",
        solution.strategy().name(), duration, solution.nb_colors(), solution.max_degree()
    );
    let stats = solution_stats(&params, &solution, duration);

    // export results
    if let Err(e) = export_results(
        &params.graph,
        &solution.to_partition(),
        &stats,
        params.perf_file.as_deref(),
        params.sol_file.as_deref(),
    ) {
        error!("{}", e);
        process::exit(1);
    }
}
