use super::TransitGraphOperation;
use clap::Parser;

/// command line tool for building a transit graph from stop, line and
/// schedule survey collections
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TransitGraphApp {
    #[command(subcommand)]
    pub op: TransitGraphOperation,
}
