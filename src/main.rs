use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use shapeboard::config::Config;
use shapeboard::draw::{CairoContext, Canvas, Point, fill_background};
use shapeboard::input::{Board, Tool};
use shapeboard::util;
use std::fs::File;
use std::path::{Path, PathBuf};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SHAPEBOARD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "shapeboard")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Interactive drawing surface with measurable shapes"
)]
struct Cli {
    /// Tool that receives the clicks
    #[arg(long, short = 't', value_enum, default_value_t = Tool::Circle)]
    tool: Tool,

    /// Click position in surface coordinates, e.g. 10,20 (repeatable)
    #[arg(long = "click", short = 'c', value_name = "X,Y", allow_hyphen_values = true)]
    clicks: Vec<Point>,

    /// Circle radius in pixels (overrides the config default)
    #[arg(long, short = 'r', allow_hyphen_values = true)]
    radius: Option<f64>,

    /// Stroke color name (red, green, blue, white, black)
    #[arg(long, value_name = "NAME")]
    color: Option<String>,

    /// Render the board to a PNG file
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Surface width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Surface height in pixels
    #[arg(long)]
    height: Option<i32>,

    /// Read settings from FILE instead of ~/.config/shapeboard/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created config at {}", path.display());
        return Ok(());
    }

    if cli.clicks.is_empty() && cli.output.is_none() {
        print_usage();
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    config.validate_and_clamp();

    let stroke = match &cli.color {
        Some(name) => util::name_to_color(name)
            .with_context(|| format!("Unknown color '{name}'"))?,
        None => config.drawing.stroke_color.to_color(),
    };

    let mut board = Board::new(&config);
    board.set_tool(cli.tool);
    if let Some(radius) = cli.radius {
        board.set_radius(radius);
    }

    for click in &cli.clicks {
        board.on_click(click.x, click.y);
    }
    log::info!("Applied {} click(s) with the {} tool", cli.clicks.len(), cli.tool);

    let measurement = match board.measure() {
        Ok(measurement) => measurement,
        Err(err) if err.is_range_error() => {
            log::error!("Cannot measure {}: {err}", cli.tool);
            return Err(anyhow::anyhow!("{err}; pass --radius 0 or larger"));
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to measure {}", cli.tool));
        }
    };
    println!("{measurement}");

    if let Some(path) = &cli.output {
        export_png(&mut board, &config, stroke, path)?;
        println!("Saved {}", path.display());
    }

    Ok(())
}

/// Renders the board through Cairo and writes it out as a PNG.
fn export_png(
    board: &mut Board,
    config: &Config,
    stroke: shapeboard::draw::Color,
    path: &Path,
) -> Result<()> {
    let (width, height) = (config.canvas.width, config.canvas.height);
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
        .context("Failed to create image surface")?;

    {
        let ctx = CairoContext::for_image_surface(&surface)
            .context("Failed to create Cairo context")?;
        let mut canvas = Canvas::new(ctx, stroke);
        canvas.set_line_width(config.drawing.line_width);
        board.render(&mut canvas);
        fill_background(
            canvas.context().cairo(),
            config.canvas.background.to_color(),
            width,
            height,
        );
    }
    surface.flush();

    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    surface
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))?;

    log::info!("Rendered {}x{} board to {}", width, height, path.display());
    Ok(())
}

fn print_usage() {
    println!("shapeboard: Interactive drawing surface with measurable shapes");
    println!();
    println!("Usage:");
    println!("  shapeboard --tool polygon -c 0,0 -c 2,0 -c 2,2     Print the polygon area");
    println!("  shapeboard --tool ruler -c 0,0 -c 3,4              Print the ruler length");
    println!("  shapeboard -c 400,300 --radius 50 -o board.png     Render a circle to PNG");
    println!("  shapeboard --init-config                           Write a default config");
    println!("  shapeboard --help                                  Show help");
    println!();
    println!("Clicks are applied in order to the active tool:");
    println!("  - circle:  moves the center");
    println!("  - polygon: appends a vertex");
    println!("  - ruler:   keeps the last two points");
}
