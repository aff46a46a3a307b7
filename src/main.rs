// main.rs
//
// Command line front end: gather the pair parameters, render, write the SVG.

use geargen::float_types::Real;
use geargen::io::{OutputTarget, write_drawing};
use geargen::{GearPair, GearRenderer, RenderConfig};
use std::io::IsTerminal;
use std::process;
use std::str::FromStr;
use structopt::StructOpt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CENTERS: Real = 100.0;
const DEFAULT_DRIVE_TEETH: usize = 7;
const DEFAULT_DRIVEN_TEETH: usize = 23;
const DEFAULT_PRESSURE_ANGLE: Real = 25.0;
const DEFAULT_BACKLASH: Real = 0.0;
const DEFAULT_ROTATION: Real = 0.0;
const DEFAULT_SCALE: i64 = 1000;

#[derive(Debug, StructOpt)]
#[structopt(name = "geargen", about = "Generate a meshing spur gear pair as an SVG drawing")]
struct Opt {
    /// Distance between centers, in mm
    #[structopt(short = "c", default_value = "100", parse(from_str = parse_centers))]
    centers: Real,

    /// Number of teeth on the first (drive) gear
    #[structopt(long = "n1", default_value = "7", parse(from_str = parse_drive_teeth))]
    drive_teeth: usize,

    /// Number of teeth on the second (driven) gear
    #[structopt(long = "n2", default_value = "23", parse(from_str = parse_driven_teeth))]
    driven_teeth: usize,

    /// Pressure angle, in degrees
    #[structopt(short = "p", default_value = "25", parse(from_str = parse_pressure_angle))]
    pressure_angle: Real,

    /// Backlash angle, in degrees
    #[structopt(short = "b", default_value = "0", parse(from_str = parse_backlash))]
    backlash: Real,

    /// Rotation as a percentage of one tooth
    #[structopt(short = "r", default_value = "0", parse(from_str = parse_rotation))]
    rotation: Real,

    /// Output file name, .svg will be appended. stdout if not given
    #[structopt(short = "o")]
    output: Option<String>,

    /// Drawing units per mm
    #[structopt(long, default_value = "1000", parse(from_str = parse_scale))]
    scale: i64,

    /// Also draw root, base and outside circles
    #[structopt(long)]
    reference_circles: bool,

    /// Print the dimensions of both gears to stderr
    #[structopt(long)]
    summary: bool,
}

/// Parse `input`, falling back to `default` (with a warning) when it is not a number.
fn lenient<T: FromStr + Copy + std::fmt::Display>(input: &str, default: T, what: &str) -> T {
    match input.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(input, %default, "could not parse {what}, using the default");
            default
        },
    }
}

fn parse_centers(s: &str) -> Real {
    lenient(s, DEFAULT_CENTERS, "center distance")
}

fn parse_drive_teeth(s: &str) -> usize {
    lenient(s, DEFAULT_DRIVE_TEETH, "drive tooth count")
}

fn parse_driven_teeth(s: &str) -> usize {
    lenient(s, DEFAULT_DRIVEN_TEETH, "driven tooth count")
}

fn parse_pressure_angle(s: &str) -> Real {
    lenient(s, DEFAULT_PRESSURE_ANGLE, "pressure angle")
}

fn parse_backlash(s: &str) -> Real {
    lenient(s, DEFAULT_BACKLASH, "backlash angle")
}

fn parse_rotation(s: &str) -> Real {
    lenient(s, DEFAULT_ROTATION, "rotation")
}

fn parse_scale(s: &str) -> i64 {
    lenient(s, DEFAULT_SCALE, "scale")
}

fn main() {
    // Logs go to stderr; stdout may be carrying the drawing.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let opt = Opt::from_args();

    let pair = match GearPair::from_center_distance(
        opt.centers,
        opt.drive_teeth,
        opt.driven_teeth,
        opt.pressure_angle,
        opt.backlash,
        opt.rotation,
    ) {
        Ok(pair) => pair,
        Err(error) => {
            eprintln!("Invalid gear parameters: {error}");
            process::exit(1);
        },
    };

    if opt.summary {
        eprintln!("Gear 1\n{}", pair.drive);
        eprintln!("Gear 2\n{}", pair.driven);
    }

    let config = RenderConfig::default()
        .with_scale(opt.scale)
        .with_reference_circles(opt.reference_circles);
    let renderer = match GearRenderer::new(config) {
        Ok(renderer) => renderer,
        Err(error) => {
            eprintln!("Invalid drawing settings: {error}");
            process::exit(1);
        },
    };

    let target = OutputTarget::from_name(opt.output.as_deref());
    let drawing = renderer.plot(&pair);
    if let Err(error) = write_drawing(&drawing, &target) {
        eprintln!("Something failed writing the drawing: {error}");
        process::exit(1);
    }
    info!(?target, "drawing written");
}
