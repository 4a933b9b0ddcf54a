use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;
use std::{error::Error, fs, time::Duration};
use tricolor::{
    coloring::SolutionSet,
    front_end::parse,
    graph::{self, Graph},
    report::{to_dot, Palette, Report},
    search::{Solver, Strategy},
};

fn read_graph(matches: &ArgMatches) -> Result<Graph, Box<dyn Error>> {
    let path = matches.value_of("GRAPH").ok_or("missing GRAPH")?;
    info!("reading {}", path);
    Ok(parse(&fs::read_to_string(path)?)?)
}

fn index(matches: &ArgMatches) -> Result<usize, Box<dyn Error>> {
    Ok(matches.value_of("index").unwrap_or("0").parse()?)
}

fn configure(solver: &mut Solver, matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    if matches.is_present("exhaustive") {
        solver.strategy(Strategy::Exhaustive);
    }
    solver.parallel(matches.is_present("parallel"));
    if let Some(ms) = matches.value_of("timeout-ms") {
        solver.timeout(Duration::from_millis(ms.parse()?));
    }
    Ok(())
}

fn solve(graph: &Graph, matches: &ArgMatches) -> Result<SolutionSet, Box<dyn Error>> {
    let mut solver = Solver::new(graph);
    configure(&mut solver, matches)?;
    Ok(solver.solve()?)
}

fn handle_solve(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = read_graph(matches)?;
    let solutions = solve(&graph, matches)?;
    print!(
        "{}",
        Report::new(&solutions, index(matches)?, &Palette::default())?
    );
    Ok(())
}

fn handle_count(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = read_graph(matches)?;
    let mut solver = Solver::new(&graph);
    configure(&mut solver, matches)?;
    println!("{}", solver.count()?);
    Ok(())
}

fn handle_dot(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = read_graph(matches)?;
    let solutions = solve(&graph, matches)?;
    if solutions.is_empty() {
        return Err("the graph is non-colorable".into());
    }
    let k = index(matches)?;
    let coloring = solutions
        .get(k)
        .ok_or(tricolor::error::Error::NoSuchColoring {
            index: k,
            len: solutions.len(),
        })?;
    print!("{}", to_dot(&graph, coloring, &Palette::default()));
    Ok(())
}

fn handle_demo() -> Result<(), Box<dyn Error>> {
    let graph = graph::reference();
    print!("{}", graph);
    let solutions = Solver::new(&graph).solve()?;
    print!("{}", Report::new(&solutions, 0, &Palette::default())?);
    Ok(())
}

fn search_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    vec![
        Arg::with_name("GRAPH")
            .help("Graph file, e.g. (graph (vertices 3) (edges (0 1) (1 2)))")
            .required(true),
        Arg::with_name("exhaustive")
            .long("exhaustive")
            .help("Test all 3^n assignments instead of pruning partial ones"),
        Arg::with_name("parallel")
            .long("parallel")
            .help("Split the search across threads"),
        Arg::with_name("timeout-ms")
            .long("timeout-ms")
            .takes_value(true)
            .value_name("MS")
            .help("Abort the search after MS milliseconds"),
    ]
}

fn index_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("index")
        .short("k")
        .long("index")
        .takes_value(true)
        .value_name("K")
        .help("Which coloring to show [default: 0]")
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new("tricolor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds every 3-coloring of a small undirected graph")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("solve")
                .about("Print the number of colorings and the K-th coloring")
                .args(&search_args())
                .arg(index_arg()),
        )
        .subcommand(
            SubCommand::with_name("count")
                .about("Print the number of colorings")
                .args(&search_args()),
        )
        .subcommand(
            SubCommand::with_name("dot")
                .about("Print the K-th coloring as a Graphviz graph")
                .args(&search_args())
                .arg(index_arg()),
        )
        .subcommand(SubCommand::with_name("demo").about("Solve the built-in 8-vertex graph"))
        .get_matches();
    if let Some(matches) = matches.subcommand_matches("solve") {
        handle_solve(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("count") {
        handle_count(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("dot") {
        handle_dot(matches)?;
    } else if matches.subcommand_matches("demo").is_some() {
        handle_demo()?;
    }
    Ok(())
}
