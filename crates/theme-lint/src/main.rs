use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use theme_lint::analyzer::AnalyzerError;
use theme_lint::config::{Config, DEFAULT_FILE_NAME};
use theme_lint::{Analyzer, LintResult};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "theme-lint", version, about = "Accessibility linter for block themes")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run lint checks on a theme.
    Check {
        /// Theme root path (default: current directory).
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Only run a specific rule (e.g., "skip-links").
        #[arg(long)]
        rule: Option<String>,

        /// Config file path.
        #[arg(long, default_value = DEFAULT_FILE_NAME)]
        config: PathBuf,

        /// Report format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// List all available rules.
    ListRules,

    /// Generate a default theme-lint.toml.
    Init,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.verbose);

    match cli.command {
        Command::Check {
            path,
            rule,
            config: config_path,
            format,
        } => run_check(&path, &config_path, rule.as_deref(), format),
        Command::ListRules => {
            run_list_rules();
            ExitCode::SUCCESS
        }
        Command::Init => run_init(),
    }
}

fn init_tracing(debug: bool, verbose: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run_check(
    path: &Path,
    config_path: &Path,
    rule_filter: Option<&str>,
    format: Format,
) -> ExitCode {
    let config = if config_path.exists() {
        match Config::from_file(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Config error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        Config::default()
    };

    let root = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(e) => {
                eprintln!("Warning: failed to get current directory ({e}), using \".\"");
                PathBuf::from(".").join(path)
            }
        }
    };

    let analyzer = Analyzer::new(root, config).with_rule_filter(rule_filter);

    match analyzer.analyze() {
        Ok(result) => {
            if let Err(code) = emit_report(&result, format) {
                return code;
            }
            if result.has_errors() || !result.passed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(AnalyzerError::Io(e)) => {
            eprintln!("IO error: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Analysis error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn emit_report(result: &LintResult, format: Format) -> Result<(), ExitCode> {
    match format {
        Format::Text => {
            result.print_report();
            Ok(())
        }
        Format::Json => match serde_json::to_string_pretty(result) {
            Ok(json) => {
                println!("{json}");
                Ok(())
            }
            Err(e) => {
                eprintln!("Failed to serialize report: {e}");
                Err(ExitCode::FAILURE)
            }
        },
    }
}

fn run_list_rules() {
    eprintln!("Available rules:\n");
    for (name, desc) in theme_lint::rules::ALL_RULES {
        eprintln!("  {name}");
        eprintln!("    {desc}\n");
    }
}

fn run_init() -> ExitCode {
    let default_config = r#"[analyzer]
exclude = ["**/node_modules/**", "**/vendor/**", "**/.git/**"]

[rules.skip-links]
enabled = true
severity = "required"
"#;

    let path = PathBuf::from(DEFAULT_FILE_NAME);
    if path.exists() {
        eprintln!("{DEFAULT_FILE_NAME} already exists");
        return ExitCode::FAILURE;
    }

    match std::fs::write(&path, default_config) {
        Ok(()) => {
            eprintln!("Created {DEFAULT_FILE_NAME}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to write {DEFAULT_FILE_NAME}: {e}");
            ExitCode::FAILURE
        }
    }
}
