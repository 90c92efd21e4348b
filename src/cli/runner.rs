use std::fs;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use multiswap::{ChainParams, ChainPlan, CommandSwapper, SwapRequest, api};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Config file first, then command-line overrides on top.
///
/// Program and leading args are one unit: a program given by `--swapper` or
/// `MULTISWAP_SWAPPER` replaces the configured args with `--swapper-arg`
/// values (none if absent), since args written for another program rarely
/// apply to the new one.
fn resolve_params(args: &CliArgs) -> Result<ChainParams, AppError> {
    let mut params = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            ChainParams::from_json_file(path)?
        }
        None => ChainParams::default(),
    };

    if let Some(program) = &args.swapper {
        params.swapper.program = program.clone();
        params.swapper.args = args.swapper_args.clone();
    } else if !args.swapper_args.is_empty() {
        params.swapper.args = args.swapper_args.clone();
    }
    if let Some(dir) = &args.working_dir {
        params.swapper.working_dir = Some(dir.clone());
    }
    if let Some(dir) = &args.temp_dir {
        params.temp_dir = Some(dir.clone());
    }
    Ok(params)
}

/// Planned invocations, then the final copy, as shell-like lines.
fn dry_run_lines(plan: &ChainPlan, params: &ChainParams) -> Result<Vec<String>, AppError> {
    let swapper = CommandSwapper::new(params.swapper.clone());
    let temp_root = match &params.temp_dir {
        Some(dir) => std::path::absolute(dir)?,
        None => std::env::temp_dir(),
    };
    let temp_dir = temp_root.join("multiswap-XXXXXX");

    let requests: Vec<SwapRequest> = plan.requests(&temp_dir);
    let mut lines = requests
        .iter()
        .map(|request| swapper.command_line(request))
        .collect::<multiswap::Result<Vec<_>>>()?;
    if let Some(last) = requests.last() {
        lines.push(format!(
            "# copy {} -> {}",
            last.output.display(),
            plan.output.display()
        ));
    }
    Ok(lines)
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging();
    }

    let plan = args.to_plan()?;
    let params = resolve_params(&args)?;

    if args.dry_run {
        for line in dry_run_lines(&plan, &params)? {
            println!("{line}");
        }
        return Ok(());
    }

    if plan.output.exists() {
        warn!("Overwriting existing output: {:?}", plan.output);
    }

    let report = api::swap_faces(&plan, &params)?;

    if let Some(path) = &args.report {
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        info!("Report written to {:?}", path);
    }

    println!("Saved swapped image to {}", report.output.display());
    Ok(())
}
