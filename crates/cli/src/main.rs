use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::sync::Arc;
use synthmd_core::generate::Generator;
use synthmd_core::{
    inject_all, Dataset, GeneratorConfig, GlossaryTranslator, NoiseTier, PipelineConfig,
    ScrubConfig, DEFAULT_VARIATION_RATE, REGISTRY_FILE_NAME,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "synthmd")]
#[command(about = "Synthetic healthcare master data with labeled duplicates")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a base dataset without duplicates
    Generate {
        /// Output directory for the CSV tables
        #[arg(long, default_value = "data")]
        out: PathBuf,
        /// Master seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Number of healthcare organizations
        #[arg(long, default_value_t = 50)]
        organizations: usize,
    },
    /// Inject duplicates into an existing dataset
    Inject {
        /// Directory holding the input CSV tables
        #[arg(long)]
        input: PathBuf,
        /// Output directory for the injected tables and registry
        #[arg(long, default_value = "data_injected")]
        out: PathBuf,
        /// Master seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Fraction of each table to duplicate, in [0, 1]
        #[arg(long, default_value_t = DEFAULT_VARIATION_RATE)]
        rate: f64,
        /// Noise tier: low or high (omit for the full catalog)
        #[arg(long)]
        noise: Option<NoiseTier>,
        /// Field-deletion preset applied before variation: low or high
        #[arg(long)]
        scrub: Option<ScrubConfig>,
        /// Registry file name within the output directory
        #[arg(long, default_value = REGISTRY_FILE_NAME)]
        registry: String,
    },
    /// Generate a dataset and inject duplicates in one run
    Pipeline {
        /// Output directory for the injected tables and registry
        #[arg(long, default_value = "data_injected")]
        out: PathBuf,
        /// YAML configuration file; flags below override nothing when set
        #[arg(long, conflicts_with_all = ["seed", "rate", "organizations", "noise", "scrub"])]
        config: Option<PathBuf>,
        /// Master seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Fraction of each table to duplicate, in [0, 1]
        #[arg(long, default_value_t = DEFAULT_VARIATION_RATE)]
        rate: f64,
        /// Number of healthcare organizations
        #[arg(long, default_value_t = 50)]
        organizations: usize,
        /// Noise tier: low or high (omit for the full catalog)
        #[arg(long)]
        noise: Option<NoiseTier>,
        /// Field-deletion preset applied before variation: low or high
        #[arg(long)]
        scrub: Option<ScrubConfig>,
        /// Registry file name within the output directory
        #[arg(long, default_value = REGISTRY_FILE_NAME)]
        registry: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("synthmd=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            out,
            seed,
            organizations,
        } => {
            let config = GeneratorConfig {
                organizations,
                ..GeneratorConfig::default()
            };
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let dataset = Generator::new(&mut rng).generate(&config)?;
            dataset.store_dir(&out)?;
            for (kind, count) in dataset.counts() {
                println!("{}: {count} records", kind.as_str());
            }
        }
        Commands::Inject {
            input,
            out,
            seed,
            rate,
            noise,
            scrub,
            registry,
        } => {
            let config = PipelineConfig {
                seed,
                variation_rate: rate,
                noise,
                scrub,
                ..PipelineConfig::default()
            };
            let dataset = Dataset::load_dir(&input)?;
            run_injection(dataset, &config, &out, &registry)?;
        }
        Commands::Pipeline {
            out,
            config,
            seed,
            rate,
            organizations,
            noise,
            scrub,
            registry,
        } => {
            let config = match config {
                Some(path) => PipelineConfig::from_yaml_file(&path)?,
                None => PipelineConfig {
                    seed,
                    variation_rate: rate,
                    noise,
                    scrub,
                    generator: GeneratorConfig {
                        organizations,
                        ..GeneratorConfig::default()
                    },
                },
            };
            let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
            let dataset = Generator::new(&mut rng).generate(&config.generator)?;
            run_injection(dataset, &config, &out, &registry)?;
        }
    }
    Ok(())
}

fn run_injection(
    dataset: Dataset,
    config: &PipelineConfig,
    out: &std::path::Path,
    registry_name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = inject_all(dataset, config, Arc::new(GlossaryTranslator::new()))?;
    output.dataset.store_dir(out)?;
    output.registry.export_to_path(&out.join(registry_name))?;
    for (kind, count) in output.dataset.counts() {
        println!("{}: {count} records", kind.as_str());
    }
    println!(
        "{} duplicates registered in {}",
        output.registry.len(),
        out.join(registry_name).display()
    );
    Ok(())
}
