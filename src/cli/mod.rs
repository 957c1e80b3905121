// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the owleye command-line interface.
//!
//! Every subcommand opens a directory of documents, builds the index, and
//! answers one question. There is no on-disk index; each run starts fresh.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "owleye", about = "Index and search a directory of text documents", version)]
pub struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where documents come from and how the engine is configured.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Directory containing the documents
    #[arg(short, long, default_value = ".")]
    pub input: PathBuf,

    /// Accepted file extensions (repeatable, default: txt)
    #[arg(short, long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Engine configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the index and print its statistics
    Index {
        #[command(flatten)]
        source: SourceArgs,

        /// Print the build report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Documents containing every query term, with context
    Search {
        /// Space-separated query terms
        query: String,

        /// Restrict the search to one document
        #[arg(short, long)]
        file: Option<String>,

        #[command(flatten)]
        source: SourceArgs,

        #[arg(long)]
        json: bool,
    },

    /// Documents containing any query term, ranked by overlap
    Alternative {
        query: String,

        /// 1-based page number
        #[arg(long, default_value = "1")]
        page: usize,

        #[arg(long, default_value_t = owleye::config::DEFAULT_PAGE_SIZE)]
        page_size: usize,

        #[command(flatten)]
        source: SourceArgs,

        #[arg(long)]
        json: bool,
    },

    /// Suggestions completing a prefix
    Autocomplete {
        prefix: String,

        /// Order by frequency instead of alphabetically
        #[arg(long)]
        ranked: bool,

        /// Maximum number of suggestions (with --ranked)
        #[arg(short, long)]
        limit: Option<usize>,

        #[command(flatten)]
        source: SourceArgs,

        #[arg(long)]
        json: bool,
    },

    /// Documents whose raw text contains any of the phrases
    Substring {
        #[arg(required = true)]
        terms: Vec<String>,

        #[command(flatten)]
        source: SourceArgs,

        #[arg(long)]
        json: bool,
    },

    /// List the documents in the collection
    List {
        #[command(flatten)]
        source: SourceArgs,
    },
}
