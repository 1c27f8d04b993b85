mod config_file;
mod report;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use config_file::FileConfig;
use dining_core::{BuiltinConfig, DiningEngine, Receipt, ReceiptStatus, TranscriptStyle};
use report::{OutputTarget, ReportDocument, generate_json_report};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Only the printed receipt
    Console,
    /// Printed receipt followed by a JSON document
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "dining-cli", version)]
#[command(about = "Take a meal order from the console and print the discounted total")]
struct Args {
    /// JSON file overriding the menu, pricing rules or quantity limits
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report format written after the session
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the JSON report to instead of stdout (needs `--report json`)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    check_args(&args)?;
    init_logging(args.verbose);
    configure_color(args.no_color);

    let engine = load_engine(&args)?;

    let receipt = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let stdout = io::stdout();
        let mut output = stdout.lock();
        run_interactive(&engine, &mut input, &mut output)?
    };

    write_report(&args, &engine, &receipt)
}

fn check_args(args: &Args) -> Result<()> {
    if let Some(path) = &args.output
        && args.report != ReportFormat::Json
    {
        bail!(
            "--output {} has no effect without --report json",
            path.display()
        );
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn configure_color(no_color: bool) {
    if no_color || !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

fn load_engine(args: &Args) -> Result<DiningEngine> {
    if let Some(path) = &args.config {
        let source = FileConfig::new(path);
        let engine = DiningEngine::from_source(&source)
            .with_context(|| format!("failed to prepare menu from {}", source.path().display()))?;
        log::info!(
            "loaded {} meals from {}",
            engine.menu().len(),
            source.path().display()
        );
        Ok(engine)
    } else {
        DiningEngine::from_source(&BuiltinConfig).context("failed to prepare built-in menu")
    }
}

fn run_interactive<R, W>(engine: &DiningEngine, input: &mut R, output: &mut W) -> Result<Receipt>
where
    R: BufRead,
    W: Write,
{
    engine
        .run_styled(input, output, &ColorStyle)
        .context("order session failed")
}

/// Terminal colours for the fixed transcript lines.
struct ColorStyle;

impl TranscriptStyle for ColorStyle {
    fn banner(&self, text: &str) -> String {
        text.bright_cyan().bold().to_string()
    }

    fn menu_header(&self, text: &str) -> String {
        text.cyan().to_string()
    }

    fn selected_header(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn total(&self, text: &str, status: ReceiptStatus) -> String {
        match status {
            ReceiptStatus::Payable => text.green().bold().to_string(),
            ReceiptStatus::Canceled => text.red().to_string(),
        }
    }
}

fn write_report(args: &Args, engine: &DiningEngine, receipt: &Receipt) -> Result<()> {
    if args.report != ReportFormat::Json {
        return Ok(());
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    let document = ReportDocument::new(engine.menu(), receipt);
    generate_json_report(&mut output_target, &document)?;
    output_target.flush_inner()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn base_args() -> Args {
        Args {
            config: None,
            report: ReportFormat::Console,
            output: None,
            no_color: true,
            verbose: false,
        }
    }

    fn run_script(engine: &DiningEngine, script: &str) -> (Receipt, String) {
        colored::control::set_override(false);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let receipt = run_interactive(engine, &mut input, &mut output).unwrap();
        (receipt, String::from_utf8(output).unwrap())
    }

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dining-cli-{label}-{}", std::process::id()))
    }

    #[test]
    fn interactive_transcript_matches_plain_engine_output() {
        let engine = DiningEngine::default();
        let script = "meal1\n2\nmeal4\nmeal3\n0\n1\ndone\n";
        let (receipt, styled) = run_script(&engine, script);

        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut plain = Vec::new();
        engine.run_plain(&mut input, &mut plain).unwrap();

        assert_eq!(styled, String::from_utf8(plain).unwrap());
        // 5 + 20 + 20 = 45, three meals, under every threshold
        assert_eq!(receipt.total_display, 45);
    }

    #[test]
    fn eleven_meals_at_200_print_119() {
        let engine = DiningEngine::default();
        // 5 + 20*8 + 10*2 + 15*1 = 200 over 11 meals -> 180 -> 144 -> 119
        let (receipt, text) = run_script(&engine, "meal3\n8\nmeal1\n2\nmeal2\n1\ndone\n");
        assert_eq!(receipt.breakdown.total_quantity, 11);
        assert!((receipt.breakdown.subtotal - 200.0).abs() < 1e-9);
        assert!(text.ends_with("Total cost: $119\n"));
    }

    #[test]
    fn load_engine_defaults_to_builtin_menu() {
        let engine = load_engine(&base_args()).unwrap();
        assert_eq!(engine.menu().len(), 3);
    }

    #[test]
    fn load_engine_reports_invalid_config() {
        let path = temp_path("invalid.json");
        std::fs::write(&path, r#"{"limits": {"min": 0, "max": 10}}"#).unwrap();
        let args = Args {
            config: Some(path.clone()),
            ..base_args()
        };
        let err = load_engine(&args).unwrap_err();
        assert!(format!("{err:#}").contains("quantity bounds invalid"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn write_report_skips_console_format() {
        let engine = DiningEngine::default();
        let (receipt, _) = run_script(&engine, "done\n");
        write_report(&base_args(), &engine, &receipt).unwrap();
    }

    #[test]
    fn output_path_requires_json_report() {
        let args = Args {
            output: Some(temp_path("unused.json")),
            ..base_args()
        };
        let err = check_args(&args).unwrap_err();
        assert!(err.to_string().contains("without --report json"));

        let args = Args {
            report: ReportFormat::Json,
            ..args
        };
        assert!(check_args(&args).is_ok());
        assert!(check_args(&base_args()).is_ok());
    }

    #[test]
    fn color_style_keeps_text_when_colour_is_off() {
        colored::control::set_override(false);
        assert_eq!(ColorStyle.banner("Menu:"), "Menu:");
        assert_eq!(
            ColorStyle.total("Total cost: $5", ReceiptStatus::Canceled),
            "Total cost: $5"
        );
    }

    #[test]
    fn write_report_emits_json_file() {
        let engine = DiningEngine::default();
        let path = temp_path("report.json");
        let args = Args {
            report: ReportFormat::Json,
            output: Some(path.clone()),
            ..base_args()
        };
        let (receipt, _) = run_script(&engine, "meal2\n3\ndone\n");
        write_report(&args, &engine, &receipt).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"total_display\": 50"));
        let _ = std::fs::remove_file(path);
    }
}
