use std::fs;
use std::path::{Path, PathBuf};
use clap::Parser;
use log::{info, debug};
use tahlil::{
    config::subsystems::analysis::parse_level,
    parser::stopwords::split_extra,
    utils::init_logging,
    AnalysisReport,
    Error,
    FallbackPolicy,
    Pipeline,
    Result,
    StemVariant,
    TahlilConfig,
};

const DEFAULT_CONFIG: &str = "default.ini";

const SAMPLE_TEXT: &str = "تلتزم الشركة بحماية بيانات العملاء وفق السياسات واللوائح المعمول بها. \
يجب على الجهة المسؤولة تطبيق ضوابط أمن المعلومات والالتزام بأفضل الممارسات. \
تواصل معنا على privacy@example.com بتاريخ 2025-09-09. عدد الموظفين 120.";

/// Arabic text preprocessing: normalization, stopwords, stemming,
/// frequencies, PMI collocations and regex extraction.
#[derive(Parser, Debug)]
#[command(name = "analyze_text", version)]
struct Args {
    /// Direct input text (UTF-8)
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// Path to a UTF-8 text file
    #[arg(long)]
    file: Option<PathBuf>,

    /// INI configuration file (defaults to ./default.ini when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of most frequent tokens to report
    #[arg(long)]
    topk: Option<usize>,

    /// Minimum bigram frequency for PMI scoring
    #[arg(long)]
    min_freq: Option<usize>,

    /// Keep ta marbuta (do not convert 'ة' to 'ه')
    #[arg(long)]
    keep_ta_marbuta: bool,

    /// Comma-separated extra Arabic stopwords to remove
    #[arg(long)]
    extra_stop: Option<String>,

    /// Minimum token length to keep
    #[arg(long)]
    min_len: Option<usize>,

    /// Stemmer: aggressive (isri), light (snowball) or none
    #[arg(long)]
    stem: Option<String>,

    /// Root stemmer fallback for unmatched words: unchanged or truncate
    #[arg(long)]
    fallback: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log level: none, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

fn load_config(args: &Args) -> Result<TahlilConfig> {
    let mut config = match &args.config {
        Some(path) => TahlilConfig::read_ini(path)?,
        None if Path::new(DEFAULT_CONFIG).is_file() => TahlilConfig::read_ini(DEFAULT_CONFIG)?,
        None => TahlilConfig::default(),
    };

    if let Some(k) = args.topk {
        config.analysis.top_k = k;
    }
    if let Some(f) = args.min_freq {
        config.analysis.min_bigram_freq = f;
    }
    if args.keep_ta_marbuta {
        config.parser.keep_ta_marbuta = true;
    }
    if let Some(extra) = &args.extra_stop {
        config.parser.extra_stopwords.extend(split_extra(extra));
    }
    if let Some(len) = args.min_len {
        config.parser.min_token_len = len;
    }
    if let Some(stem) = &args.stem {
        config.analysis.stem_variant = StemVariant::from_str(stem)
            .ok_or_else(|| Error::config(format!("Unknown stemmer: {}", stem)))?;
    }
    if let Some(fallback) = &args.fallback {
        config.analysis.stem_fallback = FallbackPolicy::from_str(fallback)
            .ok_or_else(|| Error::config(format!("Unknown stemmer fallback: {}", fallback)))?;
    }
    if let Some(level) = &args.log_level {
        if parse_level(level).is_none() {
            return Err(Error::config(format!("Invalid log level: {}", level)));
        }
        config.analysis.log_level = level.to_lowercase();
    }
    if let Some(file) = &args.file {
        config.files.input_file = Some(file.clone());
    }
    // inline text replaces whatever input file the config names
    if args.text.is_some() {
        config.files.input_file = None;
    }

    config.validate()?;
    Ok(config)
}

fn read_input(args: &Args, config: &TahlilConfig) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    match &config.files.input_file {
        Some(path) => {
            debug!("Reading input from {:?}", path);
            Ok(fs::read_to_string(path)?)
        },
        None => {
            info!("No input given, analyzing the built-in sample text");
            Ok(SAMPLE_TEXT.to_string())
        },
    }
}

fn print_summary(raw: &str, report: &AnalysisReport, min_freq: usize) {
    println!("Raw text:");
    println!("{}", raw);

    println!("\nSummary:");
    println!("Total tokens (before stopword removal): {}", report.counts.tokens_before_filter);
    println!("After stopword removal: {}", report.counts.tokens_after_filter);
    println!("Total stems: {}", report.counts.stem_count);
    println!("Stemmer used: {}", report.stem_variant.as_str());

    println!("\nTop frequent tokens (word\\tcount):");
    for entry in &report.top_tokens {
        println!("{}\t{}", entry.token, entry.count);
    }

    println!("\nTop bigram collocations (PMI, min_freq={}):", min_freq);
    for bigram in &report.collocations {
        println!("{} {}\t{:.3}", bigram.first, bigram.second, bigram.pmi);
    }

    println!("\nRegex extraction:");
    println!("Emails: {:?}", report.extracted.emails);
    println!("Dates: {:?}", report.extracted.dates);
    println!("Numbers (excluding date parts): {:?}", report.extracted.numbers);

    if !report.stem_examples.is_empty() {
        println!("\nStemming examples:");
        for example in &report.stem_examples {
            println!("{} -> {}", example.original, example.stemmed);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    init_logging(config.analysis.get_log_level());
    info!("Starting analysis: {}", config.parser.describe());

    let raw = read_input(&args, &config)?;
    let pipeline = Pipeline::from_config(&config)?;
    let report = pipeline.analyze(&raw)?;

    if let Some(path) = &config.files.output_file {
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        info!("Report written to {:?}", path);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&raw, &report, config.analysis.min_bigram_freq);
    }

    Ok(())
}
