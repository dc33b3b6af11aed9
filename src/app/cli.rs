use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds word ladders between two words of a dictionary.", long_about = None)]
pub struct Cli {
    /// Dictionary file: one word per line, a JSON array of words, or a JSON adjacency snapshot
    pub dictionary: PathBuf,

    /// Word the ladder starts from
    pub start: String,

    /// Word the ladder has to reach
    pub end: String,

    /// List every branch that gets closer to the ending word at each step instead of one shortest ladder
    #[clap(short, long)]
    pub all: bool,

    /// Precompute every word's neighbors when building from a word list
    #[clap(short, long)]
    pub eager: bool,

    /// Write the adjacency of the loaded dictionary to this JSON file
    #[clap(short, long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Write the search tree to this file
    #[clap(short, long, value_name = "PATH")]
    pub tree: Option<PathBuf>,

    /// Verbose log file
    #[clap(long, value_name = "PATH", default_value = "wordladder.log")]
    pub log_file: PathBuf,

    /// Suppress verbose output, only printing the result or errors.
    #[clap(short, long)]
    pub quiet: bool,
}
