mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::collections::HashSet;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use caption_coach::config::EngineConfig;
use caption_coach::extract::{mime_for_path, PlainTextExtractor, TextExtractor};
use caption_coach::tips::improvement_tips;
use caption_coach::{analyze_with, seeded_rng, synthesize_variants, Platform};

#[derive(Parser)]
#[command(name = "caption-coach", about = "Social media caption analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Analyze(AnalyzeArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
struct AnalyzeArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,
    #[arg(long, default_value = "twitter")]
    platform: String,
    #[arg(long)]
    exclude: Vec<String>,
    #[arg(long, default_value_t = 0)]
    nonce: u64,
    #[arg(long)]
    variants: bool,
    #[arg(long)]
    json: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            text: None,
            file: None,
            platform: "twitter".to_string(),
            exclude: Vec::new(),
            nonce: 0,
            variants: false,
            json: false,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
    #[arg(long, default_value = "webapp/dist")]
    web_root: String,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or(Command::Analyze(AnalyzeArgs::default()));

    match command {
        Command::Analyze(args) => run_analyze(args),
        Command::Serve(args) => server::serve(args).await,
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), String> {
    let platform = Platform::from_str(&args.platform)
        .ok_or_else(|| format!("invalid platform: {}", args.platform))?;
    let text = read_text(args.text, args.file.as_deref())?;
    let exclude: HashSet<String> = args.exclude.iter().map(|tag| tag.to_lowercase()).collect();

    let (config, _) = EngineConfig::load(None)?;
    let mut rng = seeded_rng(&text, args.nonce);
    let result = analyze_with(&text, platform, &exclude, &config, &mut rng);

    if args.json {
        let variants = args
            .variants
            .then(|| synthesize_variants(&text, platform, &result));
        let payload = api::ApiAnalyzeResponse::from_result(platform, result, variants, Vec::new());
        let encoded = serde_json::to_string_pretty(&payload)
            .map_err(|err| format!("failed to encode result: {}", err))?;
        println!("{}", encoded);
        return Ok(());
    }

    println!(
        "Engagement score: {}/100 ({})",
        result.engagement,
        platform.label()
    );
    println!(
        "Sentiment: {}/100 | Clarity: {}/100 | Hashtag density: {}/100",
        result.sentiment, result.clarity, result.hashtag_density
    );
    println!(
        "Words: {} | Hashtags: {} | Mentions: {} | Links: {}",
        result.word_count, result.hashtags, result.mentions, result.links
    );
    println!("CTA present: {}", if result.cta { "yes" } else { "no" });
    println!("Best time to post: {}", result.best_time);

    if !result.keywords.is_empty() {
        let ranked = result
            .keywords
            .iter()
            .map(|k| format!("{} ({})", k.term, k.count))
            .collect::<Vec<_>>()
            .join(", ");
        println!("Top keywords: {}", ranked);
    }

    if result.pool_reset {
        println!("No unseen tags were left; the exclusion pool was reset.");
    }
    if !result.hashtag_suggestions.is_empty() {
        println!("Suggested hashtags: {}", result.hashtag_suggestions.join(" "));
    }

    if args.variants {
        let variants = synthesize_variants(&text, platform, &result);
        println!("\nConcise:\n{}", variants.concise);
        println!("\nBenefit-driven:\n{}", variants.benefit);
        println!("\nList-style:\n{}", variants.list);
    }

    let tips = improvement_tips(&result);
    if !tips.is_empty() {
        println!("\nHow to improve:");
        for tip in tips {
            println!("- {}", tip);
        }
    }

    Ok(())
}

fn read_text(arg: Option<String>, file: Option<&Path>) -> Result<String, String> {
    if let Some(path) = file {
        let bytes = std::fs::read(path)
            .map_err(|err| format!("failed to read {}: {}", path.display(), err))?;
        let text = PlainTextExtractor
            .extract(&bytes, mime_for_path(path))
            .map_err(|err| format!("failed to extract text from {}: {}", path.display(), err))?;
        if text.is_empty() {
            return Err(format!("no text could be extracted from {}", path.display()));
        }
        return Ok(text);
    }

    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing caption text: pass --text, --file, or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
