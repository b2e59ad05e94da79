//! medalmap: Command-line interface for medalmap-core
//!
//! This binary loads an Olympic results table (one row per athlete and
//! event) and prints the same per-country statistics the medal map shows
//! when a country is clicked.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ medalmap stats
//!
//! - Report for a country (aliases such as "UK" or "usa" are accepted)
//!   $ medalmap country "United Kingdom"
//!   $ medalmap country usa --top 5 --json
//!
//! - Most and least decorated countries
//!   $ medalmap ranking
//!
//! - Countries by unique-medal count
//!   $ medalmap countries --limit 20
//!
//! Data source
//! -----------
//!
//! By default the CLI reads `athlete_events.csv` from the `medalmap-core`
//! data directory and caches the parsed rows in a binary file next to it.
//! Use `--input <path>` to point at another `.csv` or `.csv.gz` file and
//! `--no-cache` to always parse the CSV.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use medalmap_core::prelude::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    // Commands that don't need the dataset
    match &args.command {
        Commands::Normalize { name } => {
            let canonical = normalize_country_name(name);
            if medalmap_core::normalize::is_alias(name) {
                println!("{name} -> {canonical}");
            } else {
                println!("{canonical}");
            }
            return Ok(());
        }
        #[cfg(feature = "fetch")]
        Commands::Fetch { url, out } => {
            let bytes =
                medalmap_core::loader::fetch::fetch_to_path(url, std::path::Path::new(out))?;
            println!("Wrote {bytes} bytes to {out}");
            return Ok(());
        }
        _ => {}
    }

    // Determine input file (default CSV inside medalmap-core/data)
    let input_path = args.input.clone().unwrap_or_else(|| {
        let dir = Dataset::default_data_dir();
        let filename = Dataset::default_dataset_filename();
        dir.join(filename).to_string_lossy().to_string()
    });
    debug!("Using dataset: {}", input_path);

    let load_opts = LoadOptions {
        use_cache: !args.no_cache,
    };
    let (dataset, load_report) = Dataset::load_with(&input_path, &load_opts)
        .with_context(|| format!("loading results table from {input_path}"))?;

    match args.command {
        Commands::Stats => {
            let stats = dataset.stats();
            println!("Dataset statistics:");
            println!("  Rows: {}", stats.rows);
            println!("  Skipped rows: {}", load_report.skipped_rows);
            println!("  Medal rows: {}", stats.medal_rows);
            println!("  Countries with medals: {}", stats.countries);
            println!("  Sports: {}", stats.sports);
            if let (Some(first), Some(last)) = (stats.first_year, stats.last_year) {
                println!("  Years: {first}-{last}");
            }
            println!("  From cache: {}", load_report.from_cache);
        }

        Commands::Country {
            name,
            top,
            exact,
            include_unmedaled,
            json,
        } => {
            let opts = ReportOptions {
                top_n: top,
                match_mode: if exact { MatchMode::Exact } else { MatchMode::Contains },
                medalled_only: !include_unmedaled,
            };
            let report = dataset.country_report(&name, &opts);
            if json {
                println!("{}", report.to_json()?);
            } else {
                print_report(&report);
            }
        }

        Commands::Ranking => {
            let index = dataset.index();
            match (index.most(), index.least()) {
                (Some(most), Some(least)) => {
                    println!("Most decorated:  {} ({} unique medals)", most.country, most.count);
                    println!("Least decorated: {} ({} unique medals)", least.country, least.count);
                }
                _ => println!("{NO_DATA_MESSAGE}"),
            }
        }

        Commands::Countries { limit } => {
            let ranked = dataset.index().ranked();
            if ranked.is_empty() {
                println!("{NO_DATA_MESSAGE}");
            }
            for (i, c) in ranked.iter().take(limit.unwrap_or(usize::MAX)).enumerate() {
                println!("{}", ranked_line(i + 1, c));
            }
        }

        Commands::Normalize { .. } => {}
        #[cfg(feature = "fetch")]
        Commands::Fetch { .. } => {}
    }

    Ok(())
}

fn ranked_line(position: usize, entry: &CountryCount) -> String {
    format!("{:>4}. {}: {}", position, entry.country, entry.count)
}

fn print_report(report: &CountryReport) {
    println!("{}", report.country);
    if report.canonical != report.country {
        println!("  (matched as {})", report.canonical);
    }

    if !report.has_data() {
        println!("{NO_DATA_MESSAGE}");
        return;
    }

    println!("Top {} sports with the most medals:", report.top_sports.len());
    for sport in &report.top_sports {
        println!("  {}: {} medals", sport.sport, sport.count);
    }

    println!("Medal split:");
    match report.percentages {
        Some(pct) => {
            for medal in Medal::ALL {
                println!(
                    "  {:<7} {:>6.2}% ({})",
                    medal.as_str(),
                    pct.get(medal),
                    report.tally.get(medal)
                );
            }
        }
        None => println!("  {NO_DATA_MESSAGE}"),
    }

    let cmp = &report.comparison;
    println!("Comparison with the most and least decorated country:");
    if let Some(most) = &cmp.most {
        println!("  Most:  {} ({})", most.country, most.count);
    }
    if let Some(least) = &cmp.least {
        println!("  Least: {} ({})", least.country, least.count);
    }
    match (cmp.own, cmp.scale_position) {
        (Some(own), Some(pos)) => {
            println!("  {}: {} ({:.1}% of the most)", report.canonical, own, pos)
        }
        (Some(own), None) => println!("  {}: {}", report.canonical, own),
        _ => println!("  {}: not found in the ranking", report.canonical),
    }
    if let Some(rank) = cmp.rank {
        println!("  Rank: {rank}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_lines_are_plain_ascii() {
        let entry = CountryCount {
            country: "Kenya".into(),
            count: 12,
        };
        assert_eq!(ranked_line(3, &entry), "   3. Kenya: 12");
    }

    #[test]
    fn country_top_defaults_to_the_library_default() {
        let args = CliArgs::try_parse_from(["medalmap", "country", "USA"]).unwrap();
        match args.command {
            Commands::Country { top, exact, .. } => {
                assert_eq!(top, DEFAULT_TOP_N);
                assert!(!exact);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
