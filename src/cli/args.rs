//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::vector::{GROWTH_FACTOR, INITIAL_CAPACITY};

#[derive(Parser)]
#[command(name = "growvec")]
#[command(author, version, about = "Growable-array string tools: camelCase, split, substitute", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Capacity multiplier used when a vector grows
    #[arg(long, global = true, env = "GROWVEC_GROWTH_FACTOR", default_value_t = GROWTH_FACTOR)]
    pub growth_factor: usize,

    /// Requested capacity of a new vector
    #[arg(long, global = true, env = "GROWVEC_INITIAL_CAPACITY", default_value_t = INITIAL_CAPACITY)]
    pub initial_capacity: usize,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SubCommand {
    /// Convert each sentence of the input into a camelCase identifier
    Camel {
        /// Text to convert; read from --file or stdin when omitted
        text: Option<String>,

        /// Read the text from a file
        #[arg(long, short, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Split text on a single-byte delimiter
    Split {
        text: String,

        /// Delimiter character (ASCII)
        #[arg(long, short, default_value = " ")]
        delimiter: char,
    },

    /// Replace the first occurrence of TARGET at or after --offset
    Substitute {
        text: String,
        target: String,
        replacement: String,

        /// Byte offset to start searching from
        #[arg(long, default_value = "0")]
        offset: usize,
    },

    /// Copy out bytes [START, END) of the text
    Slice {
        text: String,
        start: usize,
        end: usize,
    },

    /// Push COUNT elements and report every capacity change
    Growth {
        count: usize,
    },
}
