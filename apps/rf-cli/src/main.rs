use clap::{Args, Parser, Subcommand};
use rf_app::{
    AppError, AppResult, RunRequest, case_service, format_summary, format_sweep_table, run_service,
};
use rf_case::Case;
use rf_model::{ParameterField, RawParameters};
use rf_results::{ProfileStore, profile_to_csv};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rf-cli")]
#[command(about = "RadialFlow CLI - steady-state Darcy radial flow around a well", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a case file (structure and physical parameters)
    Validate {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Compute a profile and print the boundary summary
    Run {
        /// Path to the case YAML file (defaults to the base case)
        case_path: Option<PathBuf>,
        #[command(flatten)]
        overrides: ParameterOverrides,
        /// Number of radial samples
        #[arg(long)]
        samples: Option<usize>,
        /// Store the run next to the case file
        #[arg(long)]
        save: bool,
        /// Store the run under this directory instead
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run every sweep declared in a case file
    Sweep {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Write the base case to a new YAML file
    Init {
        /// Destination path
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Export the sampled profile as CSV
    Export {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List stored runs for a case
    Runs {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Show details of a stored run
    ShowRun {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Run ID to display
        run_id: String,
    },
}

/// Per-parameter overrides, applied on top of the case file.
#[derive(Args, Default)]
struct ParameterOverrides {
    /// Reservoir pressure (psi)
    #[arg(long)]
    reservoir_pressure: Option<f64>,
    /// Flow rate (STB/day)
    #[arg(long)]
    flow_rate: Option<f64>,
    /// Viscosity (cp)
    #[arg(long)]
    viscosity: Option<f64>,
    /// Permeability (mD)
    #[arg(long)]
    permeability: Option<f64>,
    /// Reservoir thickness (ft)
    #[arg(long)]
    thickness: Option<f64>,
    /// Wellbore radius (ft)
    #[arg(long)]
    wellbore_radius: Option<f64>,
    /// Drainage radius (ft)
    #[arg(long)]
    drainage_radius: Option<f64>,
}

impl ParameterOverrides {
    fn apply(&self, raw: &mut RawParameters) {
        let pairs = [
            (ParameterField::ReservoirPressure, self.reservoir_pressure),
            (ParameterField::FlowRate, self.flow_rate),
            (ParameterField::Viscosity, self.viscosity),
            (ParameterField::Permeability, self.permeability),
            (ParameterField::Thickness, self.thickness),
            (ParameterField::WellboreRadius, self.wellbore_radius),
            (ParameterField::DrainageRadius, self.drainage_radius),
        ];
        for (field, value) in pairs {
            if let Some(v) = value {
                raw.set(field, v);
            }
        }
    }
}

fn main() -> AppResult<()> {
    // stdout carries command output such as exported CSV
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Run {
            case_path,
            overrides,
            samples,
            save,
            output,
        } => cmd_run(
            case_path.as_deref(),
            &overrides,
            samples,
            save,
            output.as_deref(),
        ),
        Commands::Sweep { case_path } => cmd_sweep(&case_path),
        Commands::Init { path, force } => cmd_init(&path, force),
        Commands::Export { case_path, output } => cmd_export(&case_path, output.as_deref()),
        Commands::Runs { case_path } => cmd_runs(&case_path),
        Commands::ShowRun { case_path, run_id } => cmd_show_run(&case_path, &run_id),
    }
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = case_service::load_case(case_path)?;
    case_service::validate_case(&case)?;
    println!("✓ Case is valid");
    Ok(())
}

fn cmd_run(
    case_path: Option<&Path>,
    overrides: &ParameterOverrides,
    samples: Option<usize>,
    save: bool,
    output: Option<&Path>,
) -> AppResult<()> {
    let mut case = match case_path {
        Some(path) => case_service::load_case(path)?,
        None => Case::default(),
    };
    overrides.apply(&mut case.parameters);
    if let Some(n) = samples {
        case.sampling.sample_count = n;
    }

    let store = match (output, save, case_path) {
        (Some(dir), _, _) => Some(ProfileStore::new(dir.to_path_buf())?),
        (None, true, Some(path)) => Some(ProfileStore::for_case(path)?),
        (None, true, None) => {
            return Err(AppError::InvalidInput(
                "--save needs a case file; use --output <DIR> instead".to_string(),
            ));
        }
        (None, false, _) => None,
    };

    debug!(samples = case.sampling.sample_count, "starting run");
    println!("Running case: {}", case.name);
    let response = run_service::run_case(&RunRequest {
        case: &case,
        store: store.as_ref(),
    })?;

    for field in &response.atypical_fields {
        println!(
            "  note: {} = {} is outside the typical range",
            field.key(),
            case.parameters.get(*field)
        );
    }

    println!("\nOutput Summary ({} samples):", response.profile.len());
    for line in format_summary(&response.manifest.summary) {
        println!("  {}", line);
    }

    if let Some(store) = &store {
        println!(
            "\n✓ Saved run {} to {}",
            response.run_id,
            store.run_dir(&response.run_id).display()
        );
    } else {
        println!("\n  Run ID: {}", response.run_id);
    }
    Ok(())
}

fn cmd_sweep(case_path: &Path) -> AppResult<()> {
    let case = case_service::load_case(case_path)?;
    let outcomes = run_service::run_sweeps(&case)?;

    if outcomes.is_empty() {
        println!("No sweeps defined in case: {}", case.name);
        return Ok(());
    }

    for outcome in outcomes {
        println!("\n{} ({})", outcome.id, outcome.result.sweep);
        for line in format_sweep_table(&outcome.result) {
            println!("  {}", line);
        }
        if outcome.result.num_failed() > 0 {
            println!(
                "  {} of {} points invalid",
                outcome.result.num_failed(),
                outcome.result.points.len()
            );
        }
    }
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    case_service::save_case(path, &Case::default())?;
    println!("✓ Wrote base case to {}", path.display());
    Ok(())
}

fn cmd_export(case_path: &Path, output: Option<&Path>) -> AppResult<()> {
    let case = case_service::load_case(case_path)?;
    let response = run_service::run_case(&RunRequest {
        case: &case,
        store: None,
    })?;
    let csv = profile_to_csv(&response.profile);

    if let Some(path) = output {
        std::fs::write(path, csv).map_err(|source| AppError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
        println!(
            "✓ Exported {} samples to {}",
            response.profile.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_runs(case_path: &Path) -> AppResult<()> {
    let runs = run_service::list_runs(case_path)?;

    if runs.is_empty() {
        println!("No stored runs for case: {}", case_path.display());
    } else {
        println!("Stored runs for '{}':", case_path.display());
        for manifest in runs {
            println!(
                "  {} ({}, {} samples)",
                manifest.run_id, manifest.timestamp, manifest.sample_count
            );
        }
    }
    Ok(())
}

fn cmd_show_run(case_path: &Path, run_id: &str) -> AppResult<()> {
    println!("Loading run: {}", run_id);
    let (manifest, rows) = run_service::load_run(case_path, run_id)?;

    println!("\nRun Summary:");
    println!("  Case: {}", manifest.case_name);
    println!("  Timestamp: {}", manifest.timestamp);
    println!("  Model version: {}", manifest.model_version);
    println!("  Samples: {}", rows.len());

    println!("\nParameters:");
    for field in ParameterField::ALL {
        println!(
            "  {:<20} {} {}",
            field.label(),
            manifest.parameters.get(field),
            field.unit()
        );
    }

    println!("\nOutput Summary:");
    for line in format_summary(&manifest.summary) {
        println!("  {}", line);
    }
    Ok(())
}
