use anyhow::Result;
use chromap::registry::parse_hex_color;
use chromap::viz::{LegendMode, MapStyle};
use chromap::{Client, LabelRegistry, datasets, reconcile, source, storage, viz};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "chromap",
    version,
    about = "Render a map-colouring solution onto real region boundaries"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a solution as a choropleth map.
    Render(RenderArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum Country {
    Au,
    France,
    Usa,
}

#[derive(ValueEnum, Clone, Debug)]
enum LegendPosition {
    Inside,
    Right,
    Top,
    Bottom,
}

impl From<LegendPosition> for LegendMode {
    fn from(p: LegendPosition) -> Self {
        match p {
            LegendPosition::Inside => LegendMode::Inside,
            LegendPosition::Right => LegendMode::Right,
            LegendPosition::Top => LegendMode::Top,
            LegendPosition::Bottom => LegendMode::Bottom,
        }
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Built-in country preset (dataset + region directory).
    #[arg(short, long, value_enum, conflicts_with_all = ["geojson", "directory", "name_property"])]
    country: Option<Country>,
    /// Local GeoJSON FeatureCollection (alternative to --country).
    #[arg(long, requires = "directory", requires = "name_property")]
    geojson: Option<PathBuf>,
    /// Feature property holding the canonical region name (with --geojson).
    #[arg(long)]
    name_property: Option<String>,
    /// Region directory as a JSON object of code -> canonical name (with --geojson).
    #[arg(long)]
    directory: Option<PathBuf>,
    /// Solver solution as a JSON object of code -> symbolic label.
    #[arg(short, long)]
    solution: PathBuf,
    /// Label colours as a JSON object of label -> "#RRGGBB" (defaults to the R/G/B/Y palette).
    #[arg(long)]
    labels: Option<PathBuf>,
    /// Output image path (.svg or .png).
    #[arg(short, long)]
    out: PathBuf,
    /// Width of the map image (default 1024).
    #[arg(long, default_value_t = 1024)]
    width: u32,
    /// Height of the map image (default 768).
    #[arg(long, default_value_t = 768)]
    height: u32,
    /// Chart title.
    #[arg(long)]
    title: Option<String>,
    /// Legend placement.
    #[arg(long, value_enum, default_value = "inside")]
    legend: LegendPosition,
    /// Legend heading (empty to omit).
    #[arg(long, default_value = "Colors")]
    legend_title: String,
    /// Region outline width in pixels.
    #[arg(long, default_value_t = 1)]
    stroke_width: u32,
    /// Fill colour for unassigned regions, as #RRGGBB (with the default
    /// palette; a labels file carries its own "unassigned" entry).
    #[arg(long, conflicts_with = "labels")]
    unassigned: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    // Region directory + geometry source selection.
    let (regions, directory, default_title) = match (&args.country, &args.geojson) {
        (Some(country), None) => {
            let (dataset, directory) = match country {
                Country::Au => datasets::australia(),
                Country::France => datasets::france(),
                Country::Usa => datasets::usa(),
            };
            let title = match country {
                Country::Au => "Australia Map Coloring",
                Country::France => "France Map Coloring",
                Country::Usa => "USA Map Coloring",
            };
            let regions = Client::default().fetch_regions(&dataset)?;
            (regions, directory, title.to_string())
        }
        (None, Some(path)) => {
            let name_property = args
                .name_property
                .as_deref()
                .expect("clap enforces --name-property with --geojson");
            let directory_path = args
                .directory
                .as_ref()
                .expect("clap enforces --directory with --geojson");
            let regions = source::load_regions(path, name_property)?;
            let directory = storage::load_directory(directory_path)?;
            (regions, directory, "Map Colouring".to_string())
        }
        _ => anyhow::bail!("exactly one of --country or --geojson is required"),
    };

    // Label registry: file-driven or the default solver palette, with an
    // optional unassigned-colour override.
    let registry = match (&args.labels, &args.unassigned) {
        (Some(path), _) => storage::load_labels(path)?,
        (None, Some(hex)) => {
            let unassigned = parse_hex_color(hex)?;
            let entries = datasets::default_palette()?.entries().to_vec();
            LabelRegistry::new(entries, unassigned)?
        }
        (None, None) => datasets::default_palette()?,
    };

    let solution = storage::load_solution(&args.solution)?;

    let records = reconcile::reconcile(&regions, &directory, &registry, &solution)?;

    let style = MapStyle {
        width: args.width,
        height: args.height,
        title: args.title.unwrap_or(default_title),
        legend: args.legend.into(),
        legend_title: args.legend_title,
        stroke_width: args.stroke_width,
        ..MapStyle::default()
    };
    viz::render_map(&records, &registry, &style, &args.out)?;
    eprintln!(
        "Rendered {} regions ({} assigned) to {}",
        records.len(),
        solution.len(),
        args.out.display()
    );

    Ok(())
}
