// Retail User Pool - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/retail-user-pool --init --grow 5000
// ```
//
// Or check users out of an existing pool:
//
// ```console
// $ ./target/release/retail-user-pool --checkout 25 --output users.jsonl --save --verbose
// ```

use anyhow::{Context, Result};
use clap::Parser;
use retail_user_pool::pool::{LoggingConfig, UserPool};
use retail_user_pool::types::config::CliArgs;
use retail_user_pool::types::GeneratorConfig;
use retail_user_pool::user::ProfileFactory;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        match GeneratorConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let logging_result = if let Some(log_dir) = &args.log_dir {
        LoggingConfig::init_prod(log_dir.as_str())
    } else if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Retail User Pool");

    let config = match GeneratorConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - the pool will not be loaded.");
        print_configuration_summary(&args, &config);
        return;
    }

    if let Err(e) = run(&args, config) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }

    info!("Retail User Pool completed successfully");
}

/// Load the pool, grow it, check users out, and persist as requested
fn run(args: &CliArgs, config: GeneratorConfig) -> Result<()> {
    if args.init && UserPool::initialize_file(&args.pool_file)? {
        eprintln!("Created empty pool file {}", args.pool_file);
    }

    let trait_options = config.trait_options.clone();
    let factory = ProfileFactory::new(config).context("Failed to create profile factory")?;
    let mut pool = UserPool::load(&args.pool_file, factory)
        .with_context(|| format!("Failed to open pool '{}'", args.pool_file))?;

    if let Some(count) = args.grow {
        eprintln!("Growing pool by {} users...", count);
        pool.grow_pool(count);
        pool.persist()?;
    }

    if args.checkout > 0 {
        let mut writer = open_output(args.output.as_deref())?;

        for _ in 0..args.checkout {
            let user = pool.checkout(args.select_active)?;
            if !trait_options.is_empty() {
                pool.assign_traits(&user, Some(&trait_options));
            }

            let line = user.borrow().to_json().context("Failed to serialize user")?;
            writeln!(writer, "{}", line).context("Failed to write checked-out user")?;
        }

        writer.flush().context("Failed to flush checked-out users")?;
        info!(count = args.checkout, "Checked out users");
        if let Some(path) = &args.output {
            eprintln!("Checked-out users written to: {}", path);
        }
    }

    if args.save {
        pool.persist()?;
        eprintln!("Pool saved to {}", pool.file_path().display());
    }

    eprintln!("{}", pool.statistics());
    Ok(())
}

/// JSON lines sink for checked-out users, stdout when no path is given
fn open_output(path: Option<&str>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file '{}'", path))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Print configuration summary
fn print_configuration_summary(args: &CliArgs, config: &GeneratorConfig) {
    eprintln!("Configuration:");
    eprintln!("  Pool File: {}", args.pool_file);
    eprintln!(
        "  Age: {} - {} (mean {:.1}, std-dev {:.1})",
        config.age.min, config.age.max, config.age.mean, config.age.std_dev
    );
    eprintln!("  Female Ratio: {:.1}%", config.female_ratio * 100.0);
    let personas: Vec<String> = config.personas.iter().map(ToString::to_string).collect();
    eprintln!("  Personas: {}", personas.join(", "));
    eprintln!("  Email Domain: {}", config.email_domain);
    eprintln!("  Country: {}", config.country);
    eprintln!("  Growth Batch Size: {}", config.growth_batch_size);
    if !config.trait_options.is_empty() {
        let traits: Vec<&str> = config.trait_options.keys().map(String::as_str).collect();
        eprintln!("  Traits: {}", traits.join(", "));
    }
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}
