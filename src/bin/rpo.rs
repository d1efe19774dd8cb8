use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rpo_plot::viz::{self, Axis, LegendMode, RenderOptions};
use rpo_plot::{Domain, Representation, ThermogramData, select_plot_dict, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rpo",
    version,
    about = "Plot Ramped PyrOx thermograms and inspect plot dictionaries"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plot one or more thermogram CSV files onto a single chart.
    Plot(PlotArgs),
    /// Print the plot dictionary for a case token as JSON.
    Dict(DictArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum XAxis {
    Time,
    Temp,
}

impl From<XAxis> for Domain {
    fn from(x: XAxis) -> Self {
        match x {
            XAxis::Time => Domain::Time,
            XAxis::Temp => Domain::Temp,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum YAxis {
    Fraction,
    Rate,
}

impl From<YAxis> for Representation {
    fn from(y: YAxis) -> Self {
        match y {
            YAxis::Fraction => Representation::Fraction,
            YAxis::Rate => Representation::Rate,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LegendArg {
    Inside,
    Right,
    Top,
    Bottom,
}

impl From<LegendArg> for LegendMode {
    fn from(l: LegendArg) -> Self {
        match l {
            LegendArg::Inside => LegendMode::Inside,
            LegendArg::Right => LegendMode::Right,
            LegendArg::Top => LegendMode::Top,
            LegendArg::Bottom => LegendMode::Bottom,
        }
    }
}

#[derive(Args, Debug)]
struct PlotArgs {
    /// Thermogram CSV (columns time,temp,g[,ghat]). Repeat to overlay several.
    #[arg(short, long, required = true)]
    input: Vec<PathBuf>,
    /// Independent variable.
    #[arg(long, value_enum, default_value_t = XAxis::Time)]
    xaxis: XAxis,
    /// Dependent variable.
    #[arg(long, value_enum, default_value_t = YAxis::Rate)]
    yaxis: YAxis,
    /// Output image (.svg or .png).
    #[arg(short, long)]
    out: PathBuf,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Legend placement.
    #[arg(long, value_enum, default_value_t = LegendArg::Right)]
    legend: LegendArg,
    /// Chart title (omitted when empty).
    #[arg(long, default_value = "")]
    title: String,
}

#[derive(Args, Debug)]
struct DictArgs {
    /// Case token: rpo_labs, rpo_md or rpo_rd.
    #[arg(long)]
    case: String,
    /// Thermogram CSV; required for the series cases.
    #[arg(short, long)]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Plot(args) => cmd_plot(args),
        Command::Dict(args) => cmd_dict(args),
    }
}

fn cmd_plot(args: PlotArgs) -> Result<()> {
    let mut ax = Axis::new();
    for path in &args.input {
        let data = storage::load_csv(path)?;
        viz::plot_time_data(&mut ax, &data, args.xaxis.into(), args.yaxis.into())?;
    }

    let opts = RenderOptions {
        width: args.width,
        height: args.height,
        title: args.title,
        legend: args.legend.into(),
    };
    viz::render_axis(&ax, &args.out, &opts)?;
    eprintln!("Wrote plot to {}", args.out.display());
    Ok(())
}

fn cmd_dict(args: DictArgs) -> Result<()> {
    let data = args.input.as_ref().map(storage::load_csv).transpose()?;
    let selection = select_plot_dict(
        &args.case,
        data.as_ref().map(|d| d as &dyn ThermogramData),
    )?;
    println!("{}", serde_json::to_string_pretty(&selection)?);
    Ok(())
}
