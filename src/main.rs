use anyhow::Result;
use clap::Parser;
use clock_icons::icon_gen::{self, DEFAULT_OUTPUT_DIR};
use std::path::Path;

#[derive(Debug, Parser)]
#[clap(
    name = "clock-icons",
    version,
    about = "Generate the 16, 48 and 128 pixel placeholder clock icons into ./icons"
)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    icon_gen::generate_icons(Path::new(DEFAULT_OUTPUT_DIR))
}
