//! Pick and cycle words from a list file.
//!
//! Usage: `cargo run --example pick -- [LIST_FILE]`
//!
//! Without an argument a small built-in list is used. Set `RUST_LOG=debug` to
//! see load events.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wordsalt::{load_list, parse_list, sample, Cycler, SampleOptions};

const BUILTIN: &str = "\
# colors
amber
cobalt
crimson
jade
ochre
slate
";

fn hello(name: &str) -> String {
    format!("hello, {name}")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let words = match std::env::args().nth(1) {
        Some(path) => load_list(path)?,
        None => parse_list(BUILTIN),
    };

    println!("{}", hello("world"));
    println!("list ({} words): {words:?}", words.len());
    println!();

    let seeded = sample(&words, SampleOptions::new(3).with_seed(42));
    println!("unique, seed=42:        {seeded:?}");

    let drawn = sample(&words, SampleOptions::new(3).with_replacement());
    println!("with replacement, fresh: {drawn:?}");

    let mut cycler = Cycler::new(&words, -1);
    println!("cycle from last:         {:?}", cycler.next_n(3));
    println!("cycle continues:         {:?}", cycler.next_n(3));

    Ok(())
}
