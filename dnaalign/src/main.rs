use clap::Parser;
use dnaalign::align;

fn main() -> anyhow::Result<()> {
    align::cli(align::Cli::parse())
}
