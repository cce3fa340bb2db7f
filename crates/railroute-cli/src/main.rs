use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use railroute_lib::{
    count_trips, count_trips_within, parse_graph, parse_route, route_distance,
    Error as LibError, Graph, ShortestPaths, TripMode,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Railway network route queries")]
struct Cli {
    /// Edge-list encoding of the network, e.g. "AB5, BC4, CD8".
    #[arg(long)]
    graph: String,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Total distance of an explicit route such as "A-B-C".
    Distance {
        /// Dash-separated city codes.
        route: String,
    },
    /// Shortest distance between two cities.
    Shortest {
        /// Departure city code.
        from: char,
        /// Destination city code.
        to: char,
    },
    /// Count trips between two cities within a stop budget.
    Trips {
        from: char,
        to: char,
        /// Count trips of up to this many stops.
        #[arg(long, conflicts_with = "exact_stops")]
        max_stops: Option<u32>,
        /// Count trips of exactly this many stops.
        #[arg(long)]
        exact_stops: Option<u32>,
    },
    /// Count trips between two cities of less than a total distance.
    TripsWithin {
        from: char,
        to: char,
        /// Strict upper bound on the trip distance.
        max_distance: f64,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let graph = parse_graph(&cli.graph).context("failed to parse the graph specification")?;

    match cli.command {
        Command::Distance { route } => handle_distance(&graph, &route, cli.format),
        Command::Shortest { from, to } => handle_shortest(&graph, from, to, cli.format),
        Command::Trips {
            from,
            to,
            max_stops,
            exact_stops,
        } => handle_trips(&graph, from, to, max_stops, exact_stops, cli.format),
        Command::TripsWithin {
            from,
            to,
            max_distance,
        } => {
            let found = count_trips_within(&graph, &from, &to, max_distance);
            print_count(found, cli.format);
            Ok(())
        }
    }
}

fn handle_distance(graph: &Graph<char>, route: &str, format: Format) -> Result<()> {
    let stops = parse_route(route).context("failed to parse the route")?;
    match route_distance(graph, &stops) {
        Ok(distance) => print_distance(distance, format),
        Err(LibError::RouteNotFound) => print_no_route(format),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn handle_shortest(graph: &Graph<char>, from: char, to: char, format: Format) -> Result<()> {
    let paths = ShortestPaths::build(graph);
    match paths.distance(&from, &to) {
        Ok(distance) => print_distance(distance, format),
        Err(LibError::RouteNotFound) => print_no_route(format),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn handle_trips(
    graph: &Graph<char>,
    from: char,
    to: char,
    max_stops: Option<u32>,
    exact_stops: Option<u32>,
    format: Format,
) -> Result<()> {
    let (budget, mode) = match (max_stops, exact_stops) {
        (Some(stops), None) => (stops, TripMode::MaxStops),
        (None, Some(stops)) => (stops, TripMode::ExactStops),
        _ => bail!("exactly one of --max-stops or --exact-stops is required"),
    };

    let found = count_trips(graph, &from, &to, budget, mode);
    print_count(found, format);
    Ok(())
}

// "NO SUCH ROUTE" is an answered query, so these all exit 0; only malformed
// input is an error.

fn print_distance(distance: f64, format: Format) {
    match format {
        Format::Text => println!("{distance}"),
        Format::Json => println!("{}", serde_json::json!({ "distance": distance })),
    }
}

fn print_count(count: u64, format: Format) {
    match format {
        Format::Text => println!("{count}"),
        Format::Json => println!("{}", serde_json::json!({ "trips": count })),
    }
}

fn print_no_route(format: Format) {
    match format {
        Format::Text => println!("NO SUCH ROUTE"),
        Format::Json => println!("{}", serde_json::json!({ "error": "no such route" })),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
