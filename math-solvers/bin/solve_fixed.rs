//! Command-line front end for the fixed-point Gaussian solver
//!
//! Usage:
//!     solve-fixed --matrix 1,1,2,1 --rhs 3,4 --frac-bits 16 --show-steps
//!     solve-fixed --input system.json --json

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use math_fixed_solvers::{
    FixedFormat, Overflow, Rounding, SolveReport, SolverConfig, SystemInput, Values,
};
use num_traits::ToPrimitive;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "solve-fixed",
    about = "Solve a dense linear system A x = b in fixed-point arithmetic"
)]
struct Cli {
    /// JSON problem file with config, matrix and rhs
    #[arg(long, conflicts_with_all = ["matrix", "rhs"])]
    input: Option<PathBuf>,

    /// Row-major coefficients of the N×N matrix, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    matrix: Vec<f64>,

    /// Right-hand side, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    rhs: Vec<f64>,

    /// Interpret --matrix and --rhs as raw scaled integers
    #[arg(long)]
    raw: bool,

    /// Number of fractional bits (overrides the input file)
    #[arg(long)]
    frac_bits: Option<u32>,

    /// Rounding mode (overrides the input file)
    #[arg(long, value_enum)]
    rounding: Option<RoundingChoice>,

    /// Overflow policy (overrides the input file)
    #[arg(long, value_enum)]
    overflow: Option<OverflowChoice>,

    /// Print the triangularized system, multipliers and swaps
    #[arg(long)]
    show_steps: bool,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RoundingChoice {
    Truncate,
    Nearest,
}

impl From<RoundingChoice> for Rounding {
    fn from(choice: RoundingChoice) -> Self {
        match choice {
            RoundingChoice::Truncate => Rounding::Truncate,
            RoundingChoice::Nearest => Rounding::Nearest,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OverflowChoice {
    Wrapping,
    Saturating,
    Checked,
}

impl From<OverflowChoice> for Overflow {
    fn from(choice: OverflowChoice) -> Self {
        match choice {
            OverflowChoice::Wrapping => Overflow::Wrapping,
            OverflowChoice::Saturating => Overflow::Saturating,
            OverflowChoice::Checked => Overflow::Checked,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let mut input = match &args.input {
        Some(path) => SystemInput::from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => input_from_args(&args)?,
    };
    input.config.format = apply_overrides(input.config.format, &args)?;
    input.config.validate()?;

    let report = input.solve().context("solve failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let fmt = input.config.format;
    if args.show_steps {
        print_steps(&report, &fmt);
    }

    println!(
        "Solution (Q{}.{}, {:?}, {:?}):",
        31 - fmt.frac_bits(),
        fmt.frac_bits(),
        fmt.rounding(),
        fmt.overflow()
    );
    for (i, x) in report.solution.iter().enumerate() {
        println!("  x[{}] = {:>14.6}   (raw {})", i, fmt.to_f64(*x), x.raw());
    }
    println!("Residual: {} raw units", report.residual);

    Ok(())
}

fn input_from_args(args: &Cli) -> Result<SystemInput> {
    if args.matrix.is_empty() || args.rhs.is_empty() {
        bail!("either --input or both --matrix and --rhs must be provided");
    }
    let n = args.rhs.len();
    if args.matrix.len() != n * n {
        bail!(
            "--matrix has {} entries but --rhs has {}; expected {} coefficients",
            args.matrix.len(),
            n,
            n * n
        );
    }

    let (matrix, rhs) = if args.raw {
        (
            Values::Raw(to_raw(&args.matrix)?),
            Values::Raw(to_raw(&args.rhs)?),
        )
    } else {
        (Values::Real(args.matrix.clone()), Values::Real(args.rhs.clone()))
    };

    Ok(SystemInput {
        config: SolverConfig::with_dimension(n),
        matrix,
        rhs,
    })
}

fn to_raw(values: &[f64]) -> Result<Vec<i32>> {
    values
        .iter()
        .map(|&v| match v.to_i32() {
            Some(raw) if v.fract() == 0.0 => Ok(raw),
            _ => bail!("{v} is not a 32-bit raw integer"),
        })
        .collect()
}

fn apply_overrides(mut format: FixedFormat, args: &Cli) -> Result<FixedFormat> {
    if let Some(frac_bits) = args.frac_bits {
        format = format.with_frac_bits(frac_bits)?;
    }
    if let Some(rounding) = args.rounding {
        format = format.with_rounding(rounding.into());
    }
    if let Some(overflow) = args.overflow {
        format = format.with_overflow(overflow.into());
    }
    Ok(format)
}

fn print_steps(report: &SolveReport, fmt: &FixedFormat) {
    let elim = &report.elimination;

    println!("Row swaps:");
    if elim.swaps.is_empty() {
        println!("  (none)");
    }
    for swap in &elim.swaps {
        println!("  step {}: row {} <-> row {}", swap.step, swap.step, swap.row);
    }

    println!("Upper-triangular system [U | y]:");
    for i in 0..elim.n {
        let row: Vec<String> = (0..elim.n)
            .map(|j| {
                if j < i {
                    format!("{:>10}", "")
                } else {
                    format!("{:>10.4}", fmt.to_f64(elim.upper[[i, j]]))
                }
            })
            .collect();
        println!("  {} | {:>10.4}", row.join(" "), fmt.to_f64(elim.rhs[i]));
    }

    println!("Multipliers L:");
    for i in 0..elim.n {
        let row: Vec<String> = (0..elim.n)
            .map(|j| format!("{:>10.4}", fmt.to_f64(elim.lower[[i, j]])))
            .collect();
        println!("  {}", row.join(" "));
    }
}
