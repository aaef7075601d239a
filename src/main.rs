use clap::{Arg, Command};
use log::LevelFilter;
use pagesafe::{Analyzer, AnalysisResult, FormFieldCounts, PageSnapshot, RuleTable, ScanStats};
use std::process;

fn main() {
    let matches = Command::new("pagesafe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rule-based page content risk scoring")
        .long_about(
            "pagesafe analyzes a page snapshot (visible text, URL, protocol, form \
             field counts) against a static rule table and reduces the findings to \
             a single 0-100 safety score.",
        )
        .arg(
            Arg::new("rules")
                .short('r')
                .long("rules")
                .value_name("FILE")
                .help("Rule table YAML file (built-in rules if omitted)")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("generate-rules")
                .long("generate-rules")
                .value_name("FILE")
                .help("Write the built-in rule table to a YAML file")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("test-rules")
                .long("test-rules")
                .help("Validate the rule table and compile all patterns")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .value_name("URL")
                .help("Analyze a page given its absolute URL (text from --text)")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("text")
                .short('t')
                .long("text")
                .value_name("FILE")
                .help("File holding the page's visible text (with --url)")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("snapshots")
                .value_name("SNAPSHOT")
                .help("Snapshot JSON files to analyze")
                .num_args(0..)
                .action(clap::ArgAction::Append),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit results as JSON instead of a report")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stats-file")
                .long("stats-file")
                .value_name("FILE")
                .help("Track aggregate scan statistics in this JSON file")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .help("Show aggregate scan statistics and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stats-reset")
                .long("stats-reset")
                .help("Reset aggregate scan statistics and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("demo")
                .long("demo")
                .help("Analyze a set of built-in demonstration snapshots")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(path) = matches.get_one::<String>("generate-rules") {
        match RuleTable::default().to_file(path) {
            Ok(()) => println!("Default rule table written to: {path}"),
            Err(e) => {
                eprintln!("Failed to write rule table: {e}");
                process::exit(1);
            }
        }
        return;
    }

    let rules = match matches.get_one::<String>("rules") {
        Some(path) => match RuleTable::from_file(path) {
            Ok(rules) => rules,
            Err(e) => {
                eprintln!("Error loading rule table: {e}");
                process::exit(1);
            }
        },
        None => RuleTable::default(),
    };

    if matches.get_flag("test-rules") {
        println!("🔍 Testing rule table (version {})...", rules.version);
        println!(
            "  {} satire domain(s), {} unreliable domain(s)",
            rules.satire_domains.len(),
            rules.unreliable_domains.len()
        );
        println!(
            "  {} misinformation, {} scam, {} clickbait pattern(s)",
            rules.misinformation.patterns.len(),
            rules.scam.patterns.len(),
            rules.clickbait.patterns.len()
        );
        match Analyzer::new(rules) {
            Ok(_) => println!("✅ All patterns compiled successfully"),
            Err(e) => {
                println!("❌ Rule table validation failed: {e}");
                process::exit(1);
            }
        }
        return;
    }

    if matches.get_flag("stats") || matches.get_flag("stats-reset") {
        let Some(stats_path) = matches.get_one::<String>("stats-file") else {
            eprintln!("❌ --stats-file is required for statistics commands");
            process::exit(1);
        };
        if matches.get_flag("stats-reset") {
            match ScanStats::default().save(stats_path) {
                Ok(()) => println!("✅ Statistics reset successfully"),
                Err(e) => {
                    eprintln!("❌ Failed to reset statistics: {e}");
                    process::exit(1);
                }
            }
        } else {
            match ScanStats::load(stats_path) {
                Ok(stats) => {
                    println!("📊 pagesafe Statistics");
                    println!("  Pages scanned: {}", stats.pages_scanned);
                    println!("  Pages flagged: {}", stats.pages_flagged);
                    println!("  Since:         {}", stats.started);
                    println!("  Last updated:  {}", stats.last_updated);
                }
                Err(e) => {
                    eprintln!("❌ Failed to load statistics: {e}");
                    process::exit(1);
                }
            }
        }
        return;
    }

    let analyzer = match Analyzer::new(rules) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("Failed to build analyzer: {e}");
            process::exit(1);
        }
    };

    let snapshots = match collect_snapshots(&matches) {
        Ok(snapshots) => snapshots,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    if snapshots.is_empty() {
        eprintln!("Nothing to analyze. Pass snapshot files, --url, or --demo.");
        process::exit(1);
    }

    let mut stats = match matches.get_one::<String>("stats-file") {
        Some(path) => match ScanStats::load(path) {
            Ok(stats) => Some((path.clone(), stats)),
            Err(e) => {
                eprintln!("Failed to load statistics: {e}");
                process::exit(1);
            }
        },
        None => None,
    };

    let as_json = matches.get_flag("json");
    let mut any_flagged = false;
    for snapshot in &snapshots {
        let result = match analyzer.analyze(snapshot) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Analysis failed for {}: {e}", snapshot.url);
                process::exit(1);
            }
        };
        if result.has_high_severity() {
            any_flagged = true;
        }
        if let Some((_, stats)) = stats.as_mut() {
            stats.record(&result);
        }
        if as_json {
            match serde_json::to_string_pretty(&result) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Failed to serialize result: {e}");
                    process::exit(1);
                }
            }
        } else {
            print_report(&result);
        }
    }

    if let Some((path, stats)) = stats {
        if let Err(e) = stats.save(&path) {
            eprintln!("Failed to save statistics: {e}");
            process::exit(1);
        }
    }

    if any_flagged {
        process::exit(2);
    }
}

fn collect_snapshots(matches: &clap::ArgMatches) -> anyhow::Result<Vec<PageSnapshot>> {
    use anyhow::Context;

    if matches.get_flag("demo") {
        return Ok(demo_snapshots());
    }

    let mut snapshots = Vec::new();
    if let Some(url) = matches.get_one::<String>("url") {
        let visible_text = match matches.get_one::<String>("text") {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read text file: {path}"))?,
            None => String::new(),
        };
        snapshots.push(PageSnapshot::from_url(
            url,
            visible_text,
            FormFieldCounts::default(),
        )?);
    }
    if let Some(paths) = matches.get_many::<String>("snapshots") {
        for path in paths {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read snapshot file: {path}"))?;
            let snapshot: PageSnapshot = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse snapshot file: {path}"))?;
            snapshots.push(snapshot);
        }
    }
    Ok(snapshots)
}

fn demo_snapshots() -> Vec<PageSnapshot> {
    vec![
        PageSnapshot {
            url: "https://example.com/gardening".to_string(),
            domain: "example.com".to_string(),
            visible_text: "A quiet article about pruning roses in late summer.".to_string(),
            protocol: "https".to_string(),
            form_fields: FormFieldCounts::default(),
        },
        PageSnapshot {
            url: "http://win-big-prizes.example/claim".to_string(),
            domain: "win-big-prizes.example".to_string(),
            visible_text: "CONGRATULATIONS! You won! Claim your prize now! \
                           Limited time offer! Act now!!!!!!!!"
                .to_string(),
            protocol: "http".to_string(),
            form_fields: FormFieldCounts {
                password: 0,
                credit_card_like: 2,
                form_count: 1,
            },
        },
        PageSnapshot {
            url: "https://theonion.com/area-man".to_string(),
            domain: "theonion.com".to_string(),
            visible_text: "Area man consults internet whenever possible.".to_string(),
            protocol: "https".to_string(),
            form_fields: FormFieldCounts::default(),
        },
    ]
}

fn print_report(result: &AnalysisResult) {
    println!("═══════════════════════════════════════");
    println!("URL:          {}", result.url);
    println!("Domain:       {}", result.domain);
    println!("Analyzed at:  {}", result.analyzed_at);
    println!("Safety score: {}/100", result.safety_score);
    if result.findings.is_empty() {
        println!("No issues found.");
    } else {
        println!("Findings:");
        for finding in &result.findings {
            println!(
                "  [{:>3}] {}: {}",
                finding.severity, finding.category, finding.description
            );
        }
    }
    if result.has_high_severity() {
        println!("⚠️  High-severity content detected");
    }
}
