use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use district_atlas::districts::{
    self, CliffsideShape, Formatting, GeneratorConfig, GeneratorError, Preset, WriteOutcome,
    WritePolicy,
};

#[derive(Parser, Debug)]
#[command(name = "district_atlas")]
#[command(about = "Generate the boilerplate district lookup table for the city map")]
struct Args {
    /// Log every generation step
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Defaults to `generate` with the boilerplate preset
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the district table and write it to disk
    Generate(GenerateArgs),
    /// Show one district from a generated table the way the map viewer does
    Inspect {
        /// District id, e.g. D3 or grayflood
        id: String,
        /// Table file (default: the configuration's output path)
        #[arg(long)]
        file: Option<PathBuf>,
        #[command(flatten)]
        source: ConfigSource,
    },
    /// List districts whose name or description is still empty
    Pending {
        /// Table file (default: the configuration's output path)
        #[arg(long)]
        file: Option<PathBuf>,
        #[command(flatten)]
        source: ConfigSource,
    },
    /// Write a preset as a JSON config file for editing
    Config {
        #[command(flatten)]
        source: ConfigSource,
        /// Config file to write (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Where the generator tables come from
#[derive(clap::Args, Debug, Default)]
struct ConfigSource {
    /// Built-in configuration
    #[arg(long, value_enum, default_value_t = Preset::Boilerplate)]
    preset: Preset,

    /// JSON config file, replaces the preset
    #[arg(long, conflicts_with = "preset")]
    config: Option<PathBuf>,
}

impl ConfigSource {
    fn load(&self) -> Result<GeneratorConfig, GeneratorError> {
        match &self.config {
            Some(path) => GeneratorConfig::load(path),
            None => Ok(GeneratorConfig::from_preset(self.preset)),
        }
    }
}

#[derive(clap::Args, Debug, Default)]
struct GenerateArgs {
    #[command(flatten)]
    source: ConfigSource,

    /// Output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Whether an existing output file is replaced
    #[arg(long, value_enum)]
    policy: Option<WritePolicy>,

    /// JSON layout
    #[arg(long, value_enum)]
    format: Option<Formatting>,

    /// Include ward records
    #[arg(long)]
    wards: bool,

    /// Shape of cliffside district records
    #[arg(long, value_enum)]
    cliffside: Option<CliffsideShape>,
}

impl GenerateArgs {
    fn config(&self) -> Result<GeneratorConfig, GeneratorError> {
        let mut config = self.source.load()?;
        if let Some(ref output) = self.output {
            config.output_path = output.clone();
        }
        if let Some(policy) = self.policy {
            config.write_policy = policy;
        }
        if let Some(format) = self.format {
            config.formatting = format;
        }
        if self.wards {
            config.include_wards = true;
        }
        if let Some(shape) = self.cliffside {
            config.cliffside_shape = shape;
        }
        Ok(config)
    }
}

fn init_logging(args: &Args) {
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else if args.quiet {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<(), GeneratorError> {
    match command {
        Command::Generate(args) => {
            let config = args.config()?;
            let report = districts::generate(&config)?;
            match report.outcome {
                WriteOutcome::Written { bytes } => println!(
                    "Wrote {} districts to {} ({} bytes)",
                    report.district_count,
                    report.path.display(),
                    bytes
                ),
                WriteOutcome::Skipped => {
                    println!("{} already exists, left unchanged", report.path.display())
                }
            }
        }
        Command::Inspect { id, file, source } => {
            let config = source.load()?;
            let path = file.unwrap_or_else(|| config.output_path.clone());
            let table = districts::read_table(&path)?;
            let view = districts::resolve(&table, &config, &id)?;
            print!("{}", view);
        }
        Command::Pending { file, source } => {
            let config = source.load()?;
            let path = file.unwrap_or_else(|| config.output_path.clone());
            let table = districts::read_table(&path)?;
            let entries = districts::pending(&table);
            for entry in &entries {
                println!("{}", entry);
            }
            println!(
                "{} entries pending across {} districts in {}",
                entries.len(),
                table.len(),
                path.display()
            );
        }
        Command::Config { source, output } => {
            let config = source.load()?;
            match output {
                Some(path) => {
                    config.save(&path)?;
                    println!("Wrote config to {}", path.display());
                }
                None => print!("{}", config.to_json()?),
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    let command = args
        .command
        .unwrap_or_else(|| Command::Generate(GenerateArgs::default()));

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
