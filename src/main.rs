use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use simplicityhl_highlight::host::{Host, HostKind, LineTokenizer, Monaco};
use simplicityhl_highlight::language::LANGUAGE;
use simplicityhl_highlight::lexer::{self, Token};
use simplicityhl_highlight::theme::Theme;
use simplicityhl_highlight::{completion, Category};

#[derive(Parser)]
#[command(name = "simplicityhl-highlight")]
#[command(author, version, about = "Syntax highlighting for SimplicityHL", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Human-readable rows
    #[value(name = "text")]
    Text,
    /// JSON for editor hosts
    #[value(name = "json")]
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the classified tokens of a source file
    Tokens {
        /// The source file, or `-` for stdin
        input: PathBuf,

        /// Report the style names of an editor host instead of categories
        #[arg(long)]
        host: Option<HostKind>,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print a source file with terminal colours
    Render {
        /// The source file, or `-` for stdin
        input: PathBuf,

        /// Theme file in Monaco `defineTheme` JSON shape
        #[arg(long)]
        theme: Option<PathBuf>,
    },

    /// List completion suggestions for a prefix
    Complete {
        /// Prefix typed so far
        #[arg(default_value = "")]
        prefix: String,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show hover documentation for a jet
    Hover {
        /// Jet name, with or without the `jet::` prefix
        word: String,
    },

    /// Print the language configuration shared by the editor hosts
    Language,

    /// Print a theme as a Monaco theme definition
    Theme {
        /// Theme file; the built-in theme when omitted
        #[arg(long)]
        theme: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = match cli.command {
        Commands::Tokens {
            input,
            host,
            format,
        } => tokens(&input, host, format),
        Commands::Render { input, theme } => render(&input, theme.as_deref()),
        Commands::Complete { prefix, format } => complete(&prefix, format),
        Commands::Hover { word } => hover(&word),
        Commands::Language => language(),
        Commands::Theme { theme } => export_theme(theme.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn read_source(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read source from stdin")?;
        return Ok(source);
    }

    if !LANGUAGE.matches_path(input) {
        log::warn!("{:?} does not have a SimplicityHL extension", input);
    }
    fs::read_to_string(input).with_context(|| format!("Failed to read source file: {:?}", input))
}

fn load_theme(path: Option<&Path>) -> Result<Theme> {
    match path {
        Some(path) => Theme::load(path).with_context(|| format!("Failed to load theme {:?}", path)),
        None => Ok(Theme::default()),
    }
}

fn tokens(input: &Path, host: Option<HostKind>, format: OutputFormat) -> Result<()> {
    let source = read_source(input)?;

    match (host, format) {
        (None, OutputFormat::Text) => {
            let tokens: Vec<Token> = lexer::classify(&source).collect();
            log::debug!("classified {} tokens", tokens.len());
            println!("{}", lexer::format_tokens(&source, &tokens));
        }
        (None, OutputFormat::Json) => {
            let tokens: Vec<Token> = lexer::classify(&source).collect();
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        }
        (Some(kind), format) => {
            let host = Host::new(kind);
            let tokens = host.tokenize_document(&source);
            match format {
                OutputFormat::Text => {
                    for token in &tokens {
                        println!(
                            "{:>5}..{:<5} {:<20} {:?}",
                            token.start,
                            token.end,
                            token.style.unwrap_or("-"),
                            &source[token.start..token.end]
                        );
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tokens)?),
            }
        }
    }

    Ok(())
}

fn render(input: &Path, theme: Option<&Path>) -> Result<()> {
    let theme = load_theme(theme)?;
    let source = read_source(input)?;
    let tokens: Vec<Token> = lexer::classify(&source).collect();
    print!("{}", theme.paint(&source, &tokens));
    if !source.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn complete(prefix: &str, format: OutputFormat) -> Result<()> {
    let items = completion::completions(prefix);
    match format {
        OutputFormat::Text => {
            for item in &items {
                let kind = format!("{:?}", item.kind).to_lowercase();
                match &item.detail {
                    Some(detail) => println!("{:<9} {:<32} {}", kind, item.label, detail.dimmed()),
                    None => println!("{:<9} {}", kind, item.label),
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&items)?),
    }
    Ok(())
}

fn hover(word: &str) -> Result<()> {
    let Some(hover) = completion::hover(word) else {
        anyhow::bail!("No documentation for {:?}", word);
    };
    for paragraph in &hover.contents {
        println!("{}", paragraph);
    }
    Ok(())
}

fn language() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&LANGUAGE)?);
    Ok(())
}

fn export_theme(theme: Option<&Path>) -> Result<()> {
    let theme = load_theme(theme)?;
    log::debug!(
        "exporting theme '{}' ({} of {} categories styled)",
        theme.name,
        theme.styles.len(),
        Category::ALL.len()
    );
    println!("{}", serde_json::to_string_pretty(&Monaco.theme_definition(&theme))?);
    Ok(())
}
