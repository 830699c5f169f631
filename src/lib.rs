//! `wordsalt`: sampling and round-robin cycling over word lists.
//!
//! Exposed modules:
//! - `prng`: Mulberry32, a 32-bit-state deterministic generator used for seeded work.
//! - `sample`: pick `n` words, unique (shuffle prefix) or with replacement.
//! - `cycle`: `Cycler`, a cursor over a snapshot that hands out consecutive batches.
//! - `list`: parse one-word-per-line text and load it from disk.
//!
//! ```
//! use wordsalt::{sample, Cycler, SampleOptions};
//!
//! let words = ["red", "green", "blue", "cyan"];
//! let picked = sample(&words, SampleOptions::new(2).with_seed(42));
//! assert_eq!(picked, ["red", "green"]);
//!
//! let mut colors = Cycler::new(&words, -1);
//! assert_eq!(colors.next_n(2), ["cyan", "red"]);
//! ```

#![forbid(unsafe_code)]

pub mod cycle;
pub mod list;
pub mod prng;
pub mod sample;

pub use cycle::{cycle_of, Cycler};
#[cfg(feature = "async")]
pub use list::load_list_async;
pub use list::{load_list, parse_list, LoadError};
pub use prng::Mulberry32;
pub use sample::{pick_index, sample, sample_with_rng, shuffle_with_rng, SampleOptions};
