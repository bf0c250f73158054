use clap::Parser;
use geoexport::{
    BoundingRectangle, DrawnArea, ExportConfig, ExportError, ExportEvent, ExportPipelineBuilder,
    ExportRequest, FeatureCollection, LatLng,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Export a GeoJSON feature collection as a print-ready A4 vector PDF.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// GeoJSON FeatureCollection with the map data
    #[arg(short, long)]
    input: PathBuf,

    /// Export rectangle as south,west,north,east
    #[arg(short, long, value_parser = parse_bounds, allow_hyphen_values = true)]
    bounds: Option<BoundingRectangle>,

    /// GeoJSON file with a drawn area; takes precedence over --bounds
    #[arg(short, long)]
    area: Option<PathBuf>,

    /// JSON export configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    no_streets: bool,

    #[arg(long)]
    no_buildings: bool,

    #[arg(long)]
    no_water: bool,

    /// Directory the PDF is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

fn parse_bounds(s: &str) -> Result<BoundingRectangle, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("'{}': {}", p.trim(), e)))
        .collect::<Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        [south, west, north, east] => Ok(BoundingRectangle::from_corners(
            LatLng::new(*south, *west),
            LatLng::new(*north, *east),
        )),
        _ => Err(format!("expected 4 comma-separated numbers, got {}", parts.len())),
    }
}

fn read_collection(path: &Path) -> Result<FeatureCollection, ExportError> {
    let source = fs::read_to_string(path)?;
    let collection: FeatureCollection = serde_json::from_str(&source)?;
    if collection.rejected > 0 {
        log::warn!(
            "{}: skipped {} malformed features",
            path.display(),
            collection.rejected
        );
    }
    Ok(collection)
}

fn run(args: &Args) -> Result<PathBuf, ExportError> {
    let config = match &args.config {
        Some(path) => ExportConfig::from_file(path)?,
        None => ExportConfig::default(),
    };
    let layers = config.layers;
    let pipeline = ExportPipelineBuilder::new()
        .with_config(config)
        .with_streets(layers.show_streets && !args.no_streets)
        .with_buildings(layers.show_buildings && !args.no_buildings)
        .with_water(layers.show_water && !args.no_water)
        .build()?;

    let collection = read_collection(&args.input)?;
    let drawn = match &args.area {
        Some(path) => DrawnArea::from_collection(&read_collection(path)?),
        None => None,
    };

    let mut request = ExportRequest::new(&collection.features);
    if let Some(bounds) = args.bounds {
        request = request.with_viewport(bounds);
    }
    if let Some(area) = &drawn {
        request = request.with_drawn_area(area.vertices());
    }

    let artifact = pipeline.export_pdf(&request, &mut |event: &ExportEvent| {
        println!("[{:>3}%] {}", event.progress(), event);
    })?;
    Ok(artifact.save_in(&args.output_dir)?)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("geoexport=info"))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(path) => {
            println!("\nSuccess! Generated {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
