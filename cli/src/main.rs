//! unresume CLI - resume PDF parsing tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unresume::{read_info, JsonFormat, ResumeParser, SkillTaxonomy, TextSource, Unresume};

#[derive(Parser)]
#[command(name = "unresume")]
#[command(version)]
#[command(about = "Extract structured fields from resume PDFs", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    tools: ToolArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// External tool and pipeline settings shared by every subcommand.
#[derive(clap::Args, Clone, Default)]
struct ToolArgs {
    /// Path to the tesseract executable
    #[arg(long, global = true, env = "UNRESUME_TESSERACT", value_name = "PATH")]
    tesseract: Option<PathBuf>,

    /// Path to the pdftoppm executable
    #[arg(long, global = true, env = "UNRESUME_PDFTOPPM", value_name = "PATH")]
    pdftoppm: Option<PathBuf>,

    /// Never fall back to OCR
    #[arg(long, global = true)]
    no_ocr: bool,

    /// Recognize pages one at a time
    #[arg(long, global = true)]
    sequential: bool,

    /// Newline-delimited skill list replacing the built-in catalog
    #[arg(long, global = true, value_name = "LIST")]
    skills: Option<PathBuf>,
}

impl ToolArgs {
    fn builder(&self) -> Result<Unresume, Box<dyn std::error::Error>> {
        let mut builder = Unresume::new();
        if let Some(ref binary) = self.tesseract {
            builder = builder.with_tesseract(binary);
        }
        if let Some(ref binary) = self.pdftoppm {
            builder = builder.with_pdftoppm(binary);
        }
        if self.no_ocr {
            builder = builder.without_ocr();
        }
        if self.sequential {
            builder = builder.sequential();
        }
        if let Some(taxonomy) = self.taxonomy()? {
            builder = builder.with_taxonomy(taxonomy);
        }
        Ok(builder)
    }

    fn taxonomy(&self) -> Result<Option<SkillTaxonomy>, Box<dyn std::error::Error>> {
        match self.skills {
            Some(ref path) => Ok(Some(SkillTaxonomy::from_path(path)?)),
            None => Ok(None),
        }
    }

    fn parser(&self) -> Result<ResumeParser, Box<dyn std::error::Error>> {
        let parser = self.builder()?.build()?;
        if !self.no_ocr && !parser.acquisition().ocr_available() {
            log::warn!("OCR is not available; image-based resumes will be rejected");
        }
        Ok(parser)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a resume into a JSON report
    Parse {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Check whether a PDF can be parsed
    Validate {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print the acquired text of a PDF
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List the skills mentioned in a text file (stdin if not specified)
    Skills {
        /// Input text file
        #[arg(value_name = "TEXT_FILE")]
        input: Option<PathBuf>,
    },

    /// Show document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let tools = cli.tools;

    let result = match cli.command {
        Some(Commands::Parse {
            input,
            output,
            compact,
        }) => cmd_parse(&tools, &input, output.as_deref(), compact),
        Some(Commands::Validate { input }) => cmd_validate(&tools, &input),
        Some(Commands::Text { input, output }) => cmd_text(&tools, &input, output.as_deref()),
        Some(Commands::Skills { input }) => cmd_skills(&tools, input.as_deref()),
        Some(Commands::Info { input }) => cmd_info(&tools, &input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: parse if input is provided
            if let Some(input) = cli.input {
                cmd_parse(&tools, &input, cli.output.as_deref(), false)
            } else {
                println!("{}", "Usage: unresume <FILE> [OUTPUT]".yellow());
                println!("       unresume --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn write_output(output: Option<&Path>, content: &str) -> io::Result<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_parse(
    tools: &ToolArgs,
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let parser = tools.parser()?;

    let pb = spinner("Parsing resume...");
    let report = parser.parse_file(input);
    pb.finish_and_clear();
    let report = report?;

    if report.source == TextSource::Ocr {
        eprintln!("{}", "Text recovered with OCR".yellow());
    }

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    write_output(output, &report.to_json(format)?)?;
    Ok(())
}

fn cmd_validate(tools: &ToolArgs, input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let verdict = tools.parser()?.validate(&data);

    if verdict.valid {
        println!("{} {}", "Valid:".green().bold(), verdict.reason);
        Ok(())
    } else {
        println!("{} {}", "Invalid:".red().bold(), verdict.reason);
        std::process::exit(1);
    }
}

fn cmd_text(
    tools: &ToolArgs,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let parser = tools.parser()?;

    let pb = spinner("Extracting text...");
    let text = parser.acquisition().extract_text(&data);
    pb.finish_and_clear();

    write_output(output, &text?)?;
    Ok(())
}

fn cmd_skills(tools: &ToolArgs, input: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let skills = match tools.taxonomy()? {
        Some(taxonomy) => unresume::extract::extract_skills(&text, &taxonomy)?,
        None => unresume::extract_skills(&text),
    };

    for skill in &skills {
        println!("  {} {}", "•".dimmed(), skill);
    }
    println!("\n{} {} skills found", "Done!".green().bold(), skills.len());
    Ok(())
}

fn cmd_info(tools: &ToolArgs, input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let info = read_info(&data)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), info.pdf_version);
    println!("{}: {}", "Pages".bold(), info.page_count);

    if let Some(ref title) = info.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = info.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref subject) = info.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(ref keywords) = info.keywords {
        println!("{}: {}", "Keywords".bold(), keywords);
    }
    if let Some(ref creator) = info.creator {
        println!("{}: {}", "Creator".bold(), creator);
    }
    if let Some(ref producer) = info.producer {
        println!("{}: {}", "Producer".bold(), producer);
    }
    if let Some(ref created) = info.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = info.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }

    let parser = tools.parser()?;
    let verdict = parser.validate(&data);
    let acquired = parser.acquisition().acquire(&data)?;

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Verdict".bold(), verdict.reason);
    println!("{}: {:?}", "Text source".bold(), acquired.source);
    println!(
        "{}: {}",
        "Words".bold(),
        acquired.text.split_whitespace().count()
    );
    println!("{}: {}", "Characters".bold(), acquired.text.chars().count());
    println!(
        "{}: {}",
        "OCR available".bold(),
        if parser.acquisition().ocr_available() {
            "Yes"
        } else {
            "No"
        }
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unresume".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume PDF parsing tool");
    println!();
    println!("License: MIT");
}
