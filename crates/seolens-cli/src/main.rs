use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use seolens_core::{AuditOutcome, CheckData, CheckResult, Status, parse_snapshot, run_audit};
use url::Url;

const APP_NAME: &str = "seolens";
const VERSION: &str = env!("CARGO_PKG_VERSION");

enum InputSource {
    Url(String),
    File(PathBuf),
}

struct CliOptions {
    source: InputSource,
    keyword: String,
    json: bool,
}

enum CliCommand {
    Run(CliOptions),
    Help,
    Version,
}

fn parse_arguments(args: &[String]) -> Result<CliCommand> {
    if args.is_empty() {
        return Ok(CliCommand::Help);
    }

    let mut file: Option<PathBuf> = None;
    let mut json = false;
    let mut positionals: Vec<String> = Vec::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if matches!(arg.as_str(), "-h" | "--help") {
            return Ok(CliCommand::Help);
        }

        if matches!(arg.as_str(), "-v" | "--version") {
            return Ok(CliCommand::Version);
        }

        if matches!(arg.as_str(), "-j" | "--json") {
            json = true;
            i += 1;
            continue;
        }

        if let Some(value) = arg.strip_prefix("--file=") {
            if file.is_some() {
                return Err(anyhow!("--file specified multiple times"));
            }
            if value.is_empty() {
                return Err(anyhow!("--file requires a path"));
            }
            file = Some(PathBuf::from(value));
            i += 1;
            continue;
        }

        if matches!(arg.as_str(), "-f" | "--file") {
            if file.is_some() {
                return Err(anyhow!("--file specified multiple times"));
            }
            let path = args
                .get(i + 1)
                .ok_or_else(|| anyhow!("--file requires a path"))?;
            file = Some(PathBuf::from(path));
            i += 2;
            continue;
        }

        if arg.starts_with('-') {
            return Err(anyhow!("unknown flag: {arg}"));
        }

        positionals.push(arg.clone());
        i += 1;
    }

    let (source, keyword) = match file {
        Some(path) => {
            let [keyword] = positionals.as_slice() else {
                return Err(anyhow!("expected exactly one <keyword> with --file"));
            };
            (InputSource::File(path), keyword.clone())
        }
        None => {
            let [url, keyword] = positionals.as_slice() else {
                return Err(anyhow!("expected <url> and <keyword> arguments"));
            };
            (InputSource::Url(url.clone()), keyword.clone())
        }
    };

    if keyword.trim().is_empty() {
        return Err(anyhow!("keyword must not be blank"));
    }

    Ok(CliCommand::Run(CliOptions {
        source,
        keyword,
        json,
    }))
}

fn print_help() {
    println!("{APP_NAME} — editorial SEO audit of a single page");
    println!("Usage: {APP_NAME} [OPTIONS] <URL> <KEYWORD>\n");
    println!("Options:");
    println!("  -f, --file <PATH>   Audit a local HTML file instead of fetching a URL");
    println!("  -j, --json          Print the raw audit outcome as JSON");
    println!("  -v, --version       Show version information");
    println!("  -h, --help          Show this help message");
}

fn print_version() {
    println!("{APP_NAME} {VERSION}");
}

fn status_glyph(status: Status) -> &'static str {
    match status {
        Status::Green => "🟢",
        Status::Orange => "🟠",
        Status::Red => "🔴",
    }
}

fn summarize(check: &CheckResult) -> String {
    match &check.data {
        CheckData::Title { length } => format!("title length: {length} characters"),
        CheckData::MetaDescription { length } => {
            format!("meta description length: {length} characters")
        }
        CheckData::H1 {
            count,
            keyword_found,
        } => {
            let found = if *keyword_found {
                "keyword found"
            } else {
                "keyword not found"
            };
            format!("{count} h1 heading(s), {found}")
        }
        CheckData::KeywordStructure { missing, .. } => {
            if missing.is_empty() {
                "keyword placed in intro, h2 and conclusion".to_string()
            } else {
                format!("keyword missing in: {}", missing.join(", "))
            }
        }
        CheckData::Structure { h2_count } => format!("{h2_count} h2 heading(s)"),
        CheckData::ImagesAlt {
            images,
            missing_alt,
        } => format!("{missing_alt} of {images} image(s) missing alt text"),
        CheckData::Readability {
            long_paragraphs,
            avg_words_per_paragraph,
        } => format!(
            "{long_paragraphs} overlong paragraph(s), {avg_words_per_paragraph} words per paragraph on average"
        ),
        CheckData::Lexical { expected, found } => {
            if found.is_empty() {
                format!("0 of {expected} expected terms found")
            } else {
                format!(
                    "{} of {expected} expected terms found: {}",
                    found.len(),
                    found.join(", ")
                )
            }
        }
    }
}

fn render_report(outcome: &AuditOutcome) -> String {
    let mut out = String::new();
    out.push_str("─────────────────────────────────────────────────────────────\n");
    out.push_str(&format!("Audit — keyword: \"{}\"\n", outcome.keyword));
    out.push_str("─────────────────────────────────────────────────────────────\n");

    for check in &outcome.checks {
        out.push_str(&format!(
            "{} {:<18} {}\n",
            status_glyph(check.status),
            check.id.as_str(),
            summarize(check)
        ));
    }

    out.push_str("─────────────────────────────────────────────────────────────\n");
    out.push_str(&format!(
        "{} overall: {}\n",
        status_glyph(outcome.overall),
        outcome.overall.as_str()
    ));
    out
}

async fn run(options: CliOptions) -> Result<()> {
    let html = match &options.source {
        InputSource::Url(raw) => {
            let parsed = Url::parse(raw).context("invalid URL")?;
            seolens_core::fetch_html(parsed.as_str()).await?
        }
        InputSource::File(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
    };

    let snapshot = parse_snapshot(&html);
    let outcome = run_audit(&snapshot, &options.keyword);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", render_report(&outcome));
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let raw_args = env::args().skip(1).collect::<Vec<_>>();

    match parse_arguments(&raw_args)? {
        CliCommand::Help => {
            print_help();
            Ok(())
        }
        CliCommand::Version => {
            print_version();
            Ok(())
        }
        CliCommand::Run(options) => run(options).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seolens_core::PageSnapshot;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_url_and_keyword() {
        let command = parse_arguments(&args(&["https://example.com", "coaching seo"])).unwrap();
        let CliCommand::Run(options) = command else {
            panic!("expected a run command");
        };
        assert!(matches!(options.source, InputSource::Url(ref u) if u == "https://example.com"));
        assert_eq!(options.keyword, "coaching seo");
        assert!(!options.json);
    }

    #[test]
    fn test_parse_file_mode() {
        let command = parse_arguments(&args(&["--file", "page.html", "-j", "guide"])).unwrap();
        let CliCommand::Run(options) = command else {
            panic!("expected a run command");
        };
        assert!(matches!(options.source, InputSource::File(ref p) if p.ends_with("page.html")));
        assert_eq!(options.keyword, "guide");
        assert!(options.json);
    }

    #[test]
    fn test_parse_rejects_missing_keyword() {
        assert!(parse_arguments(&args(&["https://example.com"])).is_err());
        assert!(parse_arguments(&args(&["--file", "page.html"])).is_err());
        assert!(parse_arguments(&args(&["--file", "page.html", "kw", "extra"])).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_flag() {
        assert!(parse_arguments(&args(&["--nope", "https://example.com", "kw"])).is_err());
    }

    #[test]
    fn test_no_arguments_shows_help() {
        assert!(matches!(parse_arguments(&[]), Ok(CliCommand::Help)));
    }

    #[test]
    fn test_render_report_lists_every_check() {
        let outcome = run_audit(&PageSnapshot::default(), "coaching seo");
        let report = render_report(&outcome);
        for id in [
            "title",
            "meta_description",
            "h1",
            "keyword_structure",
            "structure",
            "images_alt",
            "readability",
            "lexical",
        ] {
            assert!(report.contains(id), "missing {id} in report:\n{report}");
        }
        assert!(report.contains("overall: red"));
    }
}
