use bambam_transit_graph::app::TransitGraphApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = TransitGraphApp::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running bambam_transit_graph: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
