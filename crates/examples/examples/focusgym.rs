use std::io;

use anyhow::Result;
use clap::Parser;
use thicket::FocusConfig;
use thicket_examples::focusgym::{Direction, FocusGym};

/// Walk focus through a demo widget tree
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Move focus backwards
    #[clap(short, long)]
    reverse: bool,

    /// Stop at the end of the tree instead of wrapping
    #[clap(long)]
    no_wrap: bool,

    /// Number of focus moves
    #[clap(short, long, default_value_t = 8)]
    steps: usize,

    /// Print the tree after every move
    #[clap(short, long)]
    dump: bool,
}

pub fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let mut gym = FocusGym::new(FocusConfig::new().wrap(!args.no_wrap))?;
    let direction = if args.reverse {
        Direction::Prev
    } else {
        Direction::Next
    };

    for step in 1..=args.steps {
        match gym.step(direction) {
            Some(caption) => println!("{step:>3}: {caption}"),
            None => println!("{step:>3}: (focus unchanged)"),
        }
        if args.dump {
            print!("{}", gym.dump()?);
        }
    }
    Ok(())
}
