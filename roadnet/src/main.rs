use clap::{Parser, Subcommand};
use roadnet::{
    config::ImportConfiguration,
    model::{shp::GraphSource, CliError},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct RoadnetAppArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    Shapefile {
        #[arg(long, help = "path to .shp file with barrier polygons")]
        barrier_file: String,
        #[arg(long, help = "path to .shp file with junction points")]
        junction_file: String,
        #[arg(long, help = "path to .shp file with road polylines")]
        road_file: String,
        #[arg(long, help = "path to .shp file with turn records")]
        turn_file: String,
        #[arg(long, help = "path to file with roadnet import parameters")]
        configuration_file: Option<String>,
    },
}

pub fn run(app: &App) -> Result<(), CliError> {
    env_logger::init();
    match app {
        App::Shapefile {
            barrier_file,
            junction_file,
            road_file,
            turn_file,
            configuration_file,
        } => {
            let conf = match configuration_file {
                None => Ok(ImportConfiguration::default()),
                Some(f) => {
                    log::info!("reading roadnet configuration from {f}");
                    ImportConfiguration::try_from(f)
                }
            }?;
            let source = GraphSource::Shapefile {
                barrier_file: barrier_file.clone(),
                junction_file: junction_file.clone(),
                road_file: road_file.clone(),
                turn_file: turn_file.clone(),
                configuration: conf,
            };
            let graph = source.import()?;
            log::info!(
                "constructed graph with {} junctions ({} connected), {} arcs totaling {} distance units, {} barriers",
                graph.n_junctions(),
                graph.n_connected_junctions(),
                graph.n_arcs(),
                graph.total_arc_length(),
                graph.n_barriers()
            );
            Ok(())
        }
    }
}

fn main() {
    let args = RoadnetAppArguments::parse();
    match run(&args.app) {
        Ok(_) => {}
        Err(e) => {
            println!("{e}");
            panic!("{}", e.to_string())
        }
    }
}
