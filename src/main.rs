use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use penpal::answers::load_answers;
use penpal::app::App;
use penpal::config::Config;
use penpal::export::{export_session, ExportError, LetterFont, PdfExporter};
use penpal::letter::LetterAssembler;
use penpal::logging;
use penpal::ui::install_panic_hook;
use penpal::wizard::{evaluate, Gate, Variant};

#[derive(Parser)]
#[command(name = "penpal")]
#[command(about = "Write a letter to a character of 까만 달걀, step by step")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Which flow to run (overrides the config)
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the steps of the active flow
    Steps,

    /// Check whether an answers file is ready to export
    Check {
        /// Session record (TOML, or JSON by extension)
        answers: PathBuf,
    },

    /// Write the current settings to a config file
    Init {
        /// Target file (default: the user config file)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Write the letter PDF for an answers file
    Export {
        /// Session record (TOML, or JSON by extension)
        answers: PathBuf,

        /// Output directory (default: export.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(variant) = cli.variant {
        config.wizard.variant = variant;
    }

    let is_tui_mode = cli.command.is_none();
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        Some(Commands::Steps) => cmd_steps(&config),
        Some(Commands::Check { answers }) => cmd_check(&answers)?,
        Some(Commands::Init { path, force }) => cmd_init(&config, path, force)?,
        Some(Commands::Export { answers, output }) => cmd_export(&config, &answers, output)?,
        None => {
            // No subcommand = run the wizard
            run_tui(config, logging_handle.log_file_path)?;
        }
    }

    Ok(())
}

fn run_tui(config: Config, log_file_path: Option<PathBuf>) -> Result<()> {
    install_panic_hook();

    let variant = config.wizard.variant;
    let mut app = App::new(config, variant)?;
    let result = app.run();

    // Print log file path on exit if logs were written
    if let Some(log_path) = log_file_path {
        if let Ok(metadata) = log_path.metadata() {
            if metadata.len() > 0 {
                eprintln!("Session log: {}", log_path.display());
            }
        }
    }

    result
}

fn cmd_steps(config: &Config) {
    let variant = config.wizard.variant;
    println!("{}", variant.display_name());
    println!("{}", "─".repeat(60));
    for (i, step) in variant.steps().iter().enumerate() {
        println!("{}. {}", i + 1, step.title());
    }
}

fn cmd_init(config: &Config, path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path.or_else(Config::user_config_path) {
        Some(path) => path,
        None => bail!("No config directory on this system; pass a path"),
    };
    config.write_new(&path, force)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn print_gate(gate: &Gate) {
    match gate.banner() {
        None => println!("Ready: the letter can be exported."),
        Some((level, text)) => {
            println!("[{level:?}] {text}");
            for hint in gate.hints() {
                println!("  {hint}");
            }
        }
    }
}

fn cmd_check(answers: &Path) -> Result<()> {
    let session = load_answers(answers)?;
    let gate = evaluate(&session);
    print_gate(&gate);
    if !gate.is_ready() {
        bail!("{} is not ready to export", answers.display());
    }
    Ok(())
}

fn cmd_export(config: &Config, answers: &Path, output: Option<PathBuf>) -> Result<()> {
    let session = load_answers(answers)?;
    let exporter = PdfExporter::new(LetterFont::load(&config.font_path()));
    if let Some(warning) = exporter.font().warning() {
        eprintln!("Warning: {warning}");
    }
    let assembler = LetterAssembler::new().context("Failed to compile letter templates")?;

    let artifact = match export_session(&session, &assembler, &exporter) {
        Ok(artifact) => artifact,
        Err(ExportError::NotReady(gate)) => {
            print_gate(&gate);
            bail!("{} is not ready to export", answers.display());
        }
        Err(e) => return Err(e).context("Failed to export letter"),
    };

    let dir = output.unwrap_or_else(|| config.output_dir());
    let path = artifact.save_into(&dir)?;
    println!("Saved {} ({} bytes)", path.display(), artifact.bytes.len());
    Ok(())
}
