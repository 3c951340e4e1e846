use std::path::PathBuf;

use anyhow::Context as _;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand, ValueEnum};

use orbital_hud::{
    DEFAULT_FOCUS_GOAL_HOURS, HudInputs, Ledger, RingGeometry, compose_metrics, format_hours,
    format_percent, render_dashboard,
};

const DEFAULT_LEDGER: &str = "focus_hours_data.json";

#[derive(Parser, Debug)]
#[command(name = "orbital-hud", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the ring dashboard as a PNG.
    Render(RenderArgs),
    /// Log a focus session into today's ledger.
    Log(LogArgs),
    /// Print today's accumulated focus hours.
    Show(ShowArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Use the dark palette.
    #[arg(long)]
    dark: bool,

    /// Battery level in [0,1].
    #[arg(long, default_value_t = 1.0)]
    battery: f64,

    /// Daily focus goal in hours.
    #[arg(long, default_value_t = DEFAULT_FOCUS_GOAL_HOURS)]
    goal: f64,

    /// Ledger file path.
    #[arg(long, default_value = DEFAULT_LEDGER)]
    ledger: PathBuf,

    /// Clock override (YYYY-MM-DDTHH:MM:SS), local civil time.
    #[arg(long)]
    now: Option<NaiveDateTime>,

    /// Outermost ring radius in pixels.
    #[arg(long, default_value_t = 180.0)]
    max_radius: f64,

    /// Ring stroke width in pixels.
    #[arg(long, default_value_t = 22.0)]
    stroke: f64,

    /// Gap between rings in pixels.
    #[arg(long, default_value_t = 14.0)]
    gap: f64,
}

#[derive(Parser, Debug)]
struct LogArgs {
    /// Session length to add.
    #[arg(long, value_enum)]
    hours: LogDuration,

    /// Ledger file path.
    #[arg(long, default_value = DEFAULT_LEDGER)]
    ledger: PathBuf,
}

#[derive(Parser, Debug)]
struct ShowArgs {
    /// Ledger file path.
    #[arg(long, default_value = DEFAULT_LEDGER)]
    ledger: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogDuration {
    /// 30 minutes.
    #[value(name = "30m")]
    HalfHour,
    /// 1 hour.
    #[value(name = "1h")]
    OneHour,
    /// 2 hours.
    #[value(name = "2h")]
    TwoHours,
}

impl LogDuration {
    fn hours(self) -> f64 {
        match self {
            LogDuration::HalfHour => 0.5,
            LogDuration::OneHour => 1.0,
            LogDuration::TwoHours => 2.0,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Log(args) => cmd_log(args),
        Command::Show(args) => cmd_show(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let now = args
        .now
        .unwrap_or_else(|| chrono::Local::now().naive_local());
    let ledger = Ledger::open(&args.ledger);
    let focus_hours = ledger.read_hours(now.date());

    let inputs = HudInputs {
        now,
        battery_level: args.battery,
        dark_mode: args.dark,
        focus_hours,
        focus_goal_hours: args.goal,
    };
    let geometry = RingGeometry {
        max_radius: args.max_radius,
        stroke_width: args.stroke,
        gap: args.gap,
        ..RingGeometry::default()
    };

    let frame = render_dashboard(&inputs, geometry)?;

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    for metric in compose_metrics(&inputs)? {
        let value = if metric.label == "FOCUS" {
            format_hours(focus_hours)
        } else {
            format_percent(metric.value)
        };
        println!("{:<6} {:<20} {}", metric.label, metric.icon, value);
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_log(args: LogArgs) -> anyhow::Result<()> {
    let today = chrono::Local::now().date_naive();
    let ledger = Ledger::open(&args.ledger);
    let total = ledger
        .add_hours(today, args.hours.hours())
        .with_context(|| format!("update ledger '{}'", args.ledger.display()))?;
    println!("focus logged: {} today", format_hours(total));
    Ok(())
}

fn cmd_show(args: ShowArgs) -> anyhow::Result<()> {
    let today = chrono::Local::now().date_naive();
    let ledger = Ledger::open(&args.ledger);
    println!("{}", format_hours(ledger.read_hours(today)));
    Ok(())
}
