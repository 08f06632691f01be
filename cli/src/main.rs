//! familyos-docs CLI - writes the Family OS POC manual and reports

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use familyos_docs::generate;
use familyos_docs::{DocumentStats, GenerateOptions, GeneratorRegistry, OutputFormat, RenderOptions};

const OUTPUT_DIR_ENV: &str = "FAMILYOS_DOCS_OUTPUT_DIR";

#[derive(Parser)]
#[command(name = "familyos-docs")]
#[command(author = "Family OS")]
#[command(version)]
#[command(about = "Generate the Family OS POC manual and evaluation reports as DOCX", long_about = None)]
struct Cli {
    /// Output directory for all documents
    #[arg(value_name = "OUTPUT_DIR", env = OUTPUT_DIR_ENV)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate selected documents (all if none are named)
    #[command(alias = "gen")]
    Generate {
        /// Document names (see `list`)
        #[arg(value_name = "NAME")]
        names: Vec<String>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", env = OUTPUT_DIR_ENV)]
        output: Option<PathBuf>,

        /// Also write a Markdown preview
        #[arg(long)]
        markdown: bool,

        /// Also write a plain text preview
        #[arg(long)]
        text: bool,

        /// Also write a JSON dump of the document model
        #[arg(long)]
        json: bool,

        /// Create the output directory if it does not exist
        #[arg(long)]
        create_dir: bool,
    },

    /// List available documents
    List,

    /// Print a document preview to stdout
    Show {
        /// Document name
        #[arg(value_name = "NAME")]
        name: String,

        /// Preview format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: PreviewFormat,

        /// Include YAML frontmatter (Markdown only)
        #[arg(long)]
        frontmatter: bool,
    },

    /// Show document statistics
    Info {
        /// Document name
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PreviewFormat {
    /// Markdown
    Markdown,
    /// Plain text
    Text,
    /// JSON document model
    Json,
}

impl From<PreviewFormat> for OutputFormat {
    fn from(format: PreviewFormat) -> Self {
        match format {
            PreviewFormat::Markdown => OutputFormat::Markdown,
            PreviewFormat::Text => OutputFormat::Text,
            PreviewFormat::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Generate {
            names,
            output,
            markdown,
            text,
            json,
            create_dir,
        }) => {
            let mut options = GenerateOptions::new(output.unwrap_or_else(|| PathBuf::from(".")))
                .with_create_dir(create_dir);
            for (enabled, format) in [
                (markdown, OutputFormat::Markdown),
                (text, OutputFormat::Text),
                (json, OutputFormat::Json),
            ] {
                if enabled {
                    options = options.with_format(format);
                }
            }
            cmd_generate(&names, &options)
        }
        Some(Commands::List) => {
            cmd_list();
            Ok(())
        }
        Some(Commands::Show {
            name,
            format,
            frontmatter,
        }) => cmd_show(&name, format, frontmatter),
        Some(Commands::Info { name }) => cmd_info(&name),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            let output = cli.output.unwrap_or_else(|| PathBuf::from("."));
            cmd_generate(&[], &GenerateOptions::new(output))
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_generate(
    names: &[String],
    options: &GenerateOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("generate options: {:?}", options);
    let registry = GeneratorRegistry::with_defaults();
    let selected = if names.is_empty() {
        registry.iter().cloned().collect::<Vec<_>>()
    } else {
        names
            .iter()
            .map(|name| registry.get(name))
            .collect::<Result<Vec<_>, _>>()?
    };

    println!(
        "{} {} document(s) into {}",
        "Generating".cyan().bold(),
        selected.len(),
        options.output_dir.display()
    );

    let pb = ProgressBar::new(selected.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    let mut written = Vec::new();
    for generator in &selected {
        pb.set_message(format!("Building {}...", generator.name()));
        let path = generate::generate(generator.as_ref(), options)?;
        pb.println(format!("{} {}", "Saved:".green(), path.display()));
        written.push(path);
        for &format in &options.formats {
            written.push(options.preview_path(generator.file_name(), format));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Done! Files created:".green().bold());
    print_tree(&written);

    Ok(())
}

fn print_tree(paths: &[PathBuf]) {
    for (i, path) in paths.iter().enumerate() {
        let branch = if i + 1 == paths.len() { "└─" } else { "├─" };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        println!("  {} {}", branch.dimmed(), name);
    }
}

fn cmd_list() {
    let registry = GeneratorRegistry::with_defaults();

    println!("{}", "Available documents".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for generator in registry.iter() {
        let name = format!("{:<14}", generator.name());
        println!("{} {}", name.bold(), generator.title());
        println!("{:<14} {}", "", generator.file_name().dimmed());
    }
}

fn cmd_show(
    name: &str,
    format: PreviewFormat,
    frontmatter: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = familyos_docs::build_document(name)?;
    let options = RenderOptions::new().with_frontmatter(frontmatter);
    let content = OutputFormat::from(format).render(&doc, &options)?;
    print!("{}", content);
    Ok(())
}

fn cmd_info(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let registry = GeneratorRegistry::with_defaults();
    let generator = registry.get(name)?;
    let doc = generator.build();
    let stats = DocumentStats::from_document(&doc);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Name".bold(), generator.name());
    println!("{}: {}", "Title".bold(), generator.title());
    println!("{}: {}", "File".bold(), generator.file_name());
    if let Some(ref subject) = doc.metadata.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(date) = doc.metadata.date {
        println!("{}: {}", "Date".bold(), date.format("%B %-d, %Y"));
    }
    println!(
        "{}: {} {}pt",
        "Default font".bold(),
        doc.default_font.name,
        doc.default_font.size
    );

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Code blocks".bold(), stats.code_block_count);
    println!(
        "{}: {} ({} rows)",
        "Tables".bold(),
        stats.table_count,
        stats.table_row_count
    );
    println!("{}: {}", "Page breaks".bold(), stats.page_break_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "familyos-docs".cyan().bold(),
        familyos_docs::version()
    );
    println!("Family OS POC manual and report generator");
    println!();
    println!("License: MIT");
}
