use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use studio_prompt::prelude::*;
use tracing_subscriber::EnvFilter;

/// Compiles a captured generation request into engine prompts
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the generation request JSON file
    request_path: Option<String>,

    /// Optional path to a TOML compiler config
    #[arg(short, long)]
    config: Option<String>,

    /// Use the first-generation prompt compiler
    #[arg(long)]
    legacy: bool,

    /// Read the request file as the older flat form with data-URL images
    #[arg(long)]
    legacy_form: bool,

    /// Print which axis contributed each clause
    #[arg(long)]
    explain: bool,

    /// Print the assembled generation API payload as JSON
    #[arg(long)]
    payload: bool,

    /// Log normalization and compilation decisions to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.human {
        cli.request_path = Some(prompt_for_input(
            "Enter request path",
            Some("data/request.json"),
        ));
        let config_path = prompt_for_input("Enter config path (optional)", None);
        cli.config = (!config_path.is_empty()).then_some(config_path);
    }
    run(cli);
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "studio_prompt=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) {
    let total_start = Instant::now();
    let request_path = cli
        .request_path
        .clone()
        .unwrap_or_else(|| exit_with_error("Request path is required in non-interactive mode."));

    // --- 1. Loading ---
    let mut config = match &cli.config {
        Some(path) => CompilerConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&e.to_string())),
        None => CompilerConfig::default(),
    };
    if cli.legacy {
        config.revision = RevisionChoice::Legacy;
    }
    let request = load_request(&request_path, cli.legacy_form);

    // --- 2. Compilation ---
    let compile_start = Instant::now();
    let compiler = config.build_compiler();
    let has_face_image = request.has_face_image();
    let normalized = normalize(&request.input, has_face_image);
    let output = compiler.compile(&normalized);
    let compile_duration = compile_start.elapsed();

    // --- 3. Output ---
    if cli.explain {
        println!("--- Clause Trace ---");
        print!("{}", ClauseTraceFormatter::format(&compiler.explain(&normalized)));
        println!();
    }

    if cli.payload {
        let payload =
            GenerationRequest::assemble(&request.input, request.face_image(), output, &config.engine);
        let json = serde_json::to_string_pretty(&payload)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize payload: {}", e)));
        println!("{}", json);
    } else {
        println!("Mode:     {}", normalized.mode);
        println!("Revision: {:?}", config.revision);
        if let Some(metadata) = &output.metadata {
            println!("Engine:   {} ({})", metadata.engine, metadata.version);
        }
        println!("\nPositive:\n{}", output.positive_prompt);
        println!("\nNegative:\n{}", output.negative_prompt);
    }

    eprintln!(
        "\nCompiled in {:?} (total {:?})",
        compile_duration,
        total_start.elapsed()
    );
}

fn load_request(path: &str, legacy_form: bool) -> GenerationRequestFile {
    if !legacy_form {
        return GenerationRequestFile::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    }

    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read request file '{}': {}", path, e))
    });
    let form: LegacyGenerationForm = serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse legacy form JSON: {}", e)));
    let input = form
        .into_generation_input()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert legacy form: {}", e)));
    GenerationRequestFile {
        input,
        ..Default::default()
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    let _ = io::stdout().flush();

    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
