use clap::Parser;
use rewrite_diff::{
    Config, DiffEngine, DiffResponse, DiffSummary, HumanizeResponse, checksum, count_words,
    file::STDIN_PATH,
    generate_execution_id,
    logging::{self, Profile},
    read_source,
};
use std::fs;
use tracing::{info, warn};

/// Highlight word-level changes between a text and its rewrite
#[derive(Parser, Debug)]
#[command(name = "rewrite-diff")]
#[command(version = "0.1.0")]
#[command(about = "Word-level diff of a text against its rewrite, rendered as HTML", long_about = None)]
struct Args {
    /// Original text file (`-` for stdin)
    #[arg(short = 'a', long)]
    original: String,

    /// Rewritten text file (`-` for stdin)
    #[arg(short = 'b', long, required_unless_present = "response", conflicts_with = "response")]
    rewritten: Option<String>,

    /// Saved rewriting-service JSON response; its `humanizedText` is the rewrite
    #[arg(short, long)]
    response: Option<String>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<String>,

    /// Refuse inputs with more tokens than this (overrides the config)
    #[arg(long)]
    max_tokens: Option<usize>,

    /// Output structured JSON instead of bare markup
    #[arg(short, long)]
    json: bool,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Log format on stderr
    #[arg(long, value_enum, default_value_t = Profile::Human)]
    log_format: Profile,
}

/// Load the rewritten text and its checksum from a plain file or a service response
fn read_rewritten(args: &Args) -> Result<(String, String), Box<dyn std::error::Error>> {
    if let Some(path) = &args.response {
        let response = HumanizeResponse::load(path)?;
        if response.ai_assisted == Some(true) {
            info!(model = response.model_used.as_deref().unwrap_or("unknown"), "rewrite was AI-assisted");
        }
        let sum = checksum(&response.humanized_text);
        return Ok((response.humanized_text, sum));
    }

    match &args.rewritten {
        Some(path) => {
            let source = read_source(path)?;
            Ok((source.content, source.checksum))
        }
        None => Err("either --rewritten or --response is required".into()),
    }
}

fn run(args: &Args) -> Result<DiffSummary, Box<dyn std::error::Error>> {
    if args.original == STDIN_PATH && args.rewritten.as_deref() == Some(STDIN_PATH) {
        return Err("only one input can be read from stdin".into());
    }

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let max_tokens = args.max_tokens.or(config.max_tokens);

    let original = read_source(&args.original)?;
    let (rewritten, rewritten_checksum) = read_rewritten(args)?;
    info!(
        original = %original.origin,
        original_bytes = original.content.len(),
        rewritten_bytes = rewritten.len(),
        "inputs loaded"
    );

    let engine = DiffEngine::new(config.engine_options());
    let rendered = engine.try_analyze(&original.content, &rewritten, max_tokens)?;
    info!(
        unchanged = rendered.stats.unchanged,
        substituted = rendered.stats.substituted,
        inserted = rendered.stats.inserted,
        dropped = rendered.stats.dropped,
        "diff rendered"
    );

    Ok(DiffSummary {
        markup: rendered.markup,
        stats: rendered.stats,
        original_words: count_words(&original.content),
        rewritten_words: count_words(&rewritten),
        original_checksum: original.checksum,
        rewritten_checksum,
    })
}

fn main() {
    let args = Args::parse();
    logging::init(args.log_format);

    let execution_id = generate_execution_id();

    let response = match run(&args) {
        Ok(summary) => DiffResponse::success(execution_id, summary),
        Err(e) => {
            warn!(error = %e, "diff failed");
            DiffResponse::failure(execution_id, e.to_string())
        }
    };

    output_response(&response, args.json, args.output.as_ref());

    if !response.success {
        std::process::exit(1);
    }
}

/// Format and output the response
fn output_response(response: &DiffResponse, json_mode: bool, output_path: Option<&String>) {
    let output = if json_mode {
        serde_json::to_string_pretty(response)
            .unwrap_or_else(|_| r#"{"success": false, "error": "Failed to serialize response"}"#.to_string())
    } else if response.success {
        response.markup.clone().unwrap_or_default()
    } else {
        format!("Error: {}", response.error.as_deref().unwrap_or("Unknown error"))
    };

    if let Some(path) = output_path {
        if let Err(e) = fs::write(path, &output) {
            eprintln!("Failed to write output to '{}': {}", path, e);
            std::process::exit(1);
        }
    } else {
        println!("{}", output);
    }
}
