mod svg;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde_json::{Value, json};
use starmap::{Camera, Catalog, CatalogError, EngineError, Key, Point, RecordingSurface, StarMap, ViewerConfig, Viewport};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
    #[error("invalid config: {0}")]
    Config(serde_json::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("draw failed: {0}")]
    Surface(#[from] starmap::SurfaceError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to format SVG: {0}")]
    Svg(#[from] std::fmt::Error),
}

#[derive(Parser, Debug)]
#[command(name = "starmap", about = "Render and inspect star map views offline")]
struct Cli {
    /// Constellation catalog JSON.
    #[arg(long, env = "STARMAP_CATALOG")]
    catalog: PathBuf,

    /// Abbreviation of the constellation to center on.
    #[arg(long, env = "STARMAP_FOCUS", default_value = "Ori")]
    focus: String,

    /// Optional viewer config JSON; missing fields keep their defaults.
    #[arg(long, env = "STARMAP_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 800.0)]
    width: f64,

    #[arg(long, default_value_t = 600.0)]
    height: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write an SVG of the focused view.
    Render(RenderArgs),
    /// Print every star's screen position and visibility as JSON.
    Project,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[arg(long, default_value = "-", help = "Output file path, or - for stdout")]
    output: String,

    /// Pointer drag applied before rendering, as `DX,DY` pixels. Repeatable.
    #[arg(long = "drag", value_parser = parse_drag, allow_hyphen_values = true)]
    drags: Vec<(f64, f64)>,

    /// Wheel delta applied before rendering; positive zooms in. Repeatable.
    #[arg(long = "wheel", allow_hyphen_values = true)]
    wheels: Vec<f64>,

    /// Key code pressed before rendering (e.g. `ArrowLeft`, `Equal`). Repeatable.
    #[arg(long = "key")]
    keys: Vec<String>,
}

fn parse_drag(raw: &str) -> Result<(f64, f64), String> {
    let (dx, dy) = raw.split_once(',').ok_or_else(|| format!("expected DX,DY, got `{raw}`"))?;
    let parse = |s: &str| s.trim().parse::<f64>().map_err(|e| format!("`{s}`: {e}"));
    Ok((parse(dx)?, parse(dy)?))
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let catalog = Catalog::from_json(&read(&cli.catalog)?)?;
    let config = match &cli.config {
        Some(path) => ViewerConfig::from_json(&read(path)?).map_err(CliError::Config)?,
        None => ViewerConfig::default(),
    };
    let viewport = Viewport::new(cli.width, cli.height, 1.0);

    match cli.command {
        Command::Render(args) => run_render(catalog, &cli.focus, config, viewport, args),
        Command::Project => run_project(&catalog, &cli.focus, &config, viewport),
    }
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })
}

fn run_render(
    catalog: Catalog,
    focus: &str,
    config: ViewerConfig,
    viewport: Viewport,
    args: RenderArgs,
) -> Result<(), CliError> {
    let mut map = StarMap::focused(RecordingSurface::new(viewport), catalog, focus, config)?;
    for (dx, dy) in args.drags {
        map.on_pointer_down(Point::new(0.0, 0.0))?;
        map.on_pointer_move(Point::new(dx, dy))?;
        map.on_pointer_up()?;
    }
    for dy in args.wheels {
        map.on_wheel(dy)?;
    }
    for code in &args.keys {
        map.on_key_down(&Key::from(code.as_str()))?;
    }
    let camera = map.camera();
    tracing::info!(
        azimuth = camera.azimuth(),
        polar = camera.polar(),
        fov_polar = camera.fov_polar(),
        frames = map.surface().frames(),
        "rendered view"
    );

    let document = svg::render(map.surface().ops(), camera.width(), camera.height())?;
    if args.output == "-" {
        io::stdout().write_all(document.as_bytes())?;
    } else {
        fs::write(&args.output, document)?;
        eprintln!("wrote {}", args.output);
    }
    Ok(())
}

fn run_project(catalog: &Catalog, focus: &str, config: &ViewerConfig, viewport: Viewport) -> Result<(), CliError> {
    let target = catalog.resolve_focus(focus, &config.default_focus)?;
    let camera = Camera::focused(target, viewport, config);

    let stars: Vec<Value> = catalog
        .iter()
        .flat_map(|constellation| {
            let camera = &camera;
            constellation.stars().iter().enumerate().map(move |(index, star)| {
                let projection = camera.sphere_to_rect(star.azimuth(), star.polar());
                json!({
                    "constellation": constellation.abbreviation(),
                    "index": index,
                    "label": star.label(),
                    "magnitude": star.magnitude(),
                    "x": projection.point.x,
                    "y": projection.point.y,
                    "visible": projection.visible,
                })
            })
        })
        .collect();

    let report = json!({
        "focus": target.abbreviation(),
        "camera": {
            "azimuth": camera.azimuth(),
            "polar": camera.polar(),
            "fov_polar": camera.fov_polar(),
            "fov_azimuth": camera.fov_azimuth(),
        },
        "stars": stars,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
