use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, eyre};
use powercalc::{CurveSpec, Study, commands, init_logging, parse_assignment};
use powercalc_core::analysis::CurveMetric;
use powercalc_core::model::{Design, Param, SolveDirection};

#[derive(Parser, Debug)]
#[command(name = "powercalc")]
#[command(about = "Statistical power and sample-size calculator")]
struct Args {
    /// Path to the data directory (default: ~/.powercalc/)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every design with the parameters it needs
    Designs,
    /// Solve for sample size or power
    Solve {
        #[command(flatten)]
        study: StudyArgs,

        /// Quantity to solve for (default: the study file's, else sample size)
        #[arg(long = "for", value_enum)]
        solve_for: Option<Target>,
    },
    /// Sweep one parameter and tabulate the result for up to three power targets
    Curve {
        #[command(flatten)]
        study: StudyArgs,

        /// Parameter to sweep (default: the study file's curve parameter)
        #[arg(short, long)]
        param: Option<Param>,

        #[arg(long, allow_negative_numbers = true)]
        min: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        max: Option<f64>,

        #[arg(long, value_enum)]
        metric: Option<Metric>,

        /// Also write the curve as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ClapArgs, Debug)]
struct StudyArgs {
    /// YAML study file
    #[arg(short, long)]
    study: Option<PathBuf>,

    /// Design id, e.g. two-means-1-sided (overrides the study file)
    #[arg(short = 'D', long)]
    design: Option<Design>,

    /// Parameter assignment name=value; repeatable
    #[arg(long = "set", value_name = "NAME=VALUE", allow_hyphen_values = true)]
    set: Vec<String>,
}

impl StudyArgs {
    fn load(&self) -> Result<Study> {
        let mut study = match &self.study {
            Some(path) => Study::load(path)?,
            None => Study::default(),
        };
        if self.design.is_some() {
            study.design = self.design;
        }
        let overrides = self
            .set
            .iter()
            .map(|s| parse_assignment(s))
            .collect::<Result<Vec<_>>>()?;
        study.apply_overrides(&overrides);
        Ok(study)
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Target {
    SampleSize,
    Power,
}

impl From<Target> for SolveDirection {
    fn from(target: Target) -> Self {
        match target {
            Target::SampleSize => SolveDirection::SampleSize,
            Target::Power => SolveDirection::Power,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Metric {
    SampleSize,
    Power,
}

impl From<Metric> for CurveMetric {
    fn from(metric: Metric) -> Self {
        match metric {
            Metric::SampleSize => CurveMetric::SampleSize,
            Metric::Power => CurveMetric::Power,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".powercalc")
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let output = match args.command {
        Command::Designs => commands::designs(args.json)?,
        Command::Solve { study, solve_for } => {
            let study = study.load()?;
            let direction = solve_for.map_or(study.solve_for, SolveDirection::from);
            commands::solve(&study, direction, args.json)?
        }
        Command::Curve {
            study,
            param,
            min,
            max,
            metric,
            output,
        } => {
            let study = study.load()?;
            // Stored bounds only apply to the stored parameter
            let stored = study
                .curve
                .filter(|c| param.is_none_or(|p| p == c.parameter));
            let parameter = param
                .or(stored.map(|c| c.parameter))
                .ok_or_else(|| eyre!("No sweep parameter; pass --param or add `curve` to the study"))?;
            let spec = CurveSpec {
                parameter,
                min: min.or(stored.and_then(|c| c.min)),
                max: max.or(stored.and_then(|c| c.max)),
                metric: metric.map_or(
                    stored.map(|c| c.metric).unwrap_or_default(),
                    CurveMetric::from,
                ),
            };
            commands::curve(&study, &spec, output.as_deref(), args.json)?
        }
    };

    print!("{output}");
    if args.json {
        println!();
    }

    tracing::info!("Done");
    Ok(())
}
