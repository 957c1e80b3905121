// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{ensure, Context, Result};
use clap::Parser;
use owleye::{
    BuildReport, DirectorySource, EngineConfig, Page, SearchEngine, SearchResult, Suggestion,
    UnionMatch,
};
use serde::Serialize;
use tracing::Level;

mod cli;
use cli::display::{
    document_name, error_text, muted, pad_left, pad_right, percentage, render_highlights, row,
    section_bot, section_mid, section_top,
};
use cli::{Cli, Commands, SourceArgs};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {}", error_text(&format!("{:#}", e)));
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (false, 0) => Level::INFO,
        (false, 1) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Index { source, json } => {
            let engine = open_engine(&source)?;
            // open() already built once; rebuild to get the report
            let report = engine.build_index()?;
            if json {
                print_json(&report)
            } else {
                print_build_report(&source, &report);
                Ok(())
            }
        }
        Commands::Search {
            query,
            file,
            source,
            json,
        } => {
            let engine = open_engine(&source)?;
            let results = engine.search(&query, file.as_deref())?;
            if json {
                print_json(&results)
            } else {
                print_search_results(&query, &results, engine.config());
                Ok(())
            }
        }
        Commands::Alternative {
            query,
            page,
            page_size,
            source,
            json,
        } => {
            let engine = open_engine(&source)?;
            let page = engine.alternative_search_page(&query, page, page_size)?;
            if json {
                print_json(&page)
            } else {
                print_union_page(&query, &page);
                Ok(())
            }
        }
        Commands::Autocomplete {
            prefix,
            ranked,
            limit,
            source,
            json,
        } => {
            let engine = open_engine(&source)?;
            if ranked {
                let suggestions = engine.autocomplete_ranked(&prefix, limit)?;
                if json {
                    return print_json(&suggestions);
                }
                print_ranked_suggestions(&prefix, &suggestions);
            } else {
                let suggestions = engine.autocomplete(&prefix)?;
                if json {
                    return print_json(&suggestions);
                }
                for suggestion in suggestions {
                    println!("{}", suggestion);
                }
            }
            Ok(())
        }
        Commands::Substring { terms, source, json } => {
            let engine = open_engine(&source)?;
            let documents = engine.substring_search(&terms)?;
            if json {
                return print_json(&documents);
            }
            for document in documents {
                println!("{}", document_name(&document));
            }
            Ok(())
        }
        Commands::List { source } => {
            let engine = open_engine(&source)?;
            for document in engine.documents()? {
                println!("{}", document);
            }
            Ok(())
        }
    }
}

fn open_engine(args: &SourceArgs) -> Result<SearchEngine<DirectorySource>> {
    ensure!(
        args.input.is_dir(),
        "input directory {} does not exist",
        args.input.display()
    );

    let config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let mut source = DirectorySource::new(&args.input);
    if !args.extensions.is_empty() {
        source = source.with_extensions(&args.extensions);
    }

    SearchEngine::open(source, config)
        .with_context(|| format!("indexing {}", args.input.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{}", json);
    Ok(())
}

fn print_build_report(args: &SourceArgs, report: &BuildReport) {
    let stats = &report.stats;
    section_top("INDEX");
    row(&format!("Source      {}", args.input.display()));
    row(&format!("Documents   {}", pad_left(&stats.documents.to_string(), 8)));
    row(&format!("Vocabulary  {}", pad_left(&stats.vocabulary.to_string(), 8)));
    row(&format!(
        "N-grams     {}  {}",
        pad_left(&(stats.unigrams + stats.bigrams + stats.trigrams).to_string(), 8),
        muted(&format!(
            "({} uni, {} bi, {} tri)",
            stats.unigrams, stats.bigrams, stats.trigrams
        ))
    ));
    row(&format!("Postings    {}", pad_left(&stats.postings.to_string(), 8)));

    if !report.skipped.is_empty() {
        section_mid("SKIPPED");
        for skipped in &report.skipped {
            row(&format!(
                "{} {}",
                pad_right(&error_text(&skipped.document), 28),
                muted(&skipped.reason)
            ));
        }
    }
    section_bot();
}

fn print_search_results(query: &str, results: &[SearchResult], config: &EngineConfig) {
    if results.is_empty() {
        println!("{}", muted(&format!("No documents contain every term of \"{}\"", query)));
        return;
    }

    for result in results {
        println!(
            "{} {}",
            percentage(result.match_percentage),
            document_name(&result.document)
        );
        for snippet in &result.matches {
            let text = render_highlights(&snippet.context, &config.highlight_open, &config.highlight_close);
            println!(
                "  {} {}",
                muted(&format!("{:>5}:", snippet.line + 1)),
                text
            );
        }
        println!();
    }
}

fn print_union_page(query: &str, page: &Page<UnionMatch>) {
    if page.total == 0 {
        println!("{}", muted(&format!("No documents contain any term of \"{}\"", query)));
        return;
    }

    for m in &page.items {
        println!("{} {}", percentage(m.match_percentage), document_name(&m.document));
    }

    let pages = page.total.div_ceil(page.page_size);
    println!(
        "{}",
        muted(&format!(
            "page {}/{} · {} documents",
            page.page, pages, page.total
        ))
    );
}

fn print_ranked_suggestions(prefix: &str, suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("{}", muted(&format!("No suggestions for \"{}\"", prefix)));
        return;
    }
    for s in suggestions {
        println!("{} {}", pad_left(&s.frequency.to_string(), 6), s.text);
    }
}
