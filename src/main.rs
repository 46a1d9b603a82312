use clap::{Args, Parser, Subcommand};
use pixelforge::adjustments::{Adjustment, AdjustmentState};
use pixelforge::compose::compose_look;
use pixelforge::config::{self, CONFIG_FILE_NAME, EngineConfig};
use pixelforge::filters::{self, FilterPreset};
use pixelforge::imaging::{OutputFormat, Quality, RustBackend, supported_input_extensions};
use pixelforge::output;
use pixelforge::presets::{self, PresetStore, UserPreset};
use pixelforge::render::{Destination, OutputOptions, RenderJob, SourceImage, render_batch};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "pixelforge")]
#[command(about = "Color adjustments and filter presets for photos")]
#[command(long_about = "\
Color adjustments and filter presets for photos

Five sliders and an optional filter preset are composed into a single
4x5 color matrix, which is applied to every pixel of the source image.
Filters that carry a tint color paint it over the whole frame afterwards.

Sliders (neutral value in brackets):
  --brightness  -1 .. 1    [0]   additive
  --contrast     0 .. 1.5  [1]   around mid-gray
  --saturation   0 .. 2    [1]   around luma
  --temperature -1 .. 1    [0]   warm / cool
  --tint        -1 .. 1    [0]   green / magenta

Run 'pixelforge filters' to list the built-in presets and
'pixelforge gen-config' to generate a documented pixelforge.toml.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = CONFIG_FILE_NAME, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

/// Slider, filter, and preset selection shared by every command that builds a look.
#[derive(Args, Clone)]
struct LookArgs {
    #[arg(long, allow_negative_numbers = true)]
    brightness: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    contrast: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    saturation: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    temperature: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    tint: Option<f64>,
    /// Built-in filter id (see `pixelforge filters`)
    #[arg(long)]
    filter: Option<String>,
    /// Start from a saved preset; slider flags and --filter override it
    #[arg(long)]
    preset: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply a look to images and save the results
    Render {
        /// Image files or directories (searched recursively)
        #[arg(required = true)]
        sources: Vec<PathBuf>,
        #[command(flatten)]
        look: LookArgs,
        /// Output format: jpeg, png, webp or avif
        #[arg(long)]
        format: Option<OutputFormat>,
        /// Lossy quality (1-100)
        #[arg(long)]
        quality: Option<u32>,
        /// Directory for rendered files
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Print the color matrix for a look
    Matrix {
        #[command(flatten)]
        look: LookArgs,
    },
    /// List built-in filter presets
    Filters {
        /// Only this category (e.g. "Vintage")
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive match on name or category
        #[arg(long)]
        search: Option<String>,
    },
    /// Manage saved presets
    #[command(subcommand)]
    Presets(PresetsCommand),
    /// Print a stock pixelforge.toml with all options documented
    GenConfig,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List saved presets
    List,
    /// Save the given look under a name
    Save {
        name: String,
        #[command(flatten)]
        look: LookArgs,
    },
    /// Print a preset's share code
    Export { name: String },
    /// Save a preset from a share code
    Import { code: String },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Filters { category, search } => {
            let mut presets: Vec<&FilterPreset> = match &search {
                Some(query) => filters::search(query),
                None => filters::catalog().iter().collect(),
            };
            if let Some(category) = &category {
                presets.retain(|p| p.category.eq_ignore_ascii_case(category));
            }
            output::print_filter_list(&presets);
        }
        Command::Matrix { look } => {
            let config = config::load_config(&cli.config)?;
            let (adjustments, filter) = resolve_look(&look, &config)?;
            let look = compose_look(&adjustments, filter.as_ref());
            output::print_adjustments(&adjustments);
            println!(
                "Filter: {}",
                filter.as_ref().unwrap_or_else(|| filters::original()).name
            );
            println!();
            output::print_matrix(&look.matrix);
            if let Some(tint) = look.overlay {
                println!("Overlay: {tint}");
            }
        }
        Command::Render {
            sources,
            look,
            format,
            quality,
            output_dir,
        } => {
            let config = config::load_config(&cli.config)?;
            init_thread_pool(&config.processing);
            let (adjustments, filter) = resolve_look(&look, &config)?;

            let mut encode = config.encode_params();
            if let Some(format) = format {
                encode.format = format;
            }
            if let Some(quality) = quality {
                encode.quality = Quality::new(quality);
            }
            let directory = output_dir.unwrap_or_else(|| config.output.resolved_directory());
            let options = OutputOptions {
                encode,
                destination: Some(Destination::new(
                    directory,
                    config.output.file_prefix.clone(),
                )),
            };

            let files = collect_sources(&sources);
            if files.is_empty() {
                return Err("no supported images found in the given sources".into());
            }
            let jobs: Vec<RenderJob> = files
                .into_iter()
                .map(|path| RenderJob {
                    source: SourceImage::Path(path),
                    adjustments,
                    filter: filter.clone(),
                    options: options.clone(),
                })
                .collect();

            let backend = RustBackend::with_max_surface_pixels(config.render.max_surface_pixels);
            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    output::print_render_event(&event);
                }
            });
            let results = render_batch(&backend, &jobs, Some(tx));
            printer
                .join()
                .map_err(|_| "progress printer thread panicked")?;

            let succeeded = results.iter().filter(|r| r.is_ok()).count();
            output::print_render_summary(succeeded, results.len());
            if succeeded < results.len() {
                return Err(format!("{} render(s) failed", results.len() - succeeded).into());
            }
        }
        Command::Presets(command) => {
            let config = config::load_config(&cli.config)?;
            let store = PresetStore::open(&config.presets.store);
            match command {
                PresetsCommand::List => {
                    output::print_presets(&store.load()?);
                }
                PresetsCommand::Save { name, look } => {
                    let (adjustments, filter) = resolve_look(&look, &config)?;
                    let preset = UserPreset::new(&name, adjustments, filter)?;
                    store.append(preset)?;
                    println!("Saved preset {name:?} to {}", store.path().display());
                }
                PresetsCommand::Export { name } => {
                    let preset = store
                        .find(&name)?
                        .ok_or_else(|| format!("no saved preset named {name:?}"))?;
                    println!("{}", presets::share_code(&preset)?);
                }
                PresetsCommand::Import { code } => {
                    let preset = presets::import_share_code(&code)?;
                    let name = preset.name.clone();
                    store.append(preset)?;
                    println!("Imported preset {name:?} to {}", store.path().display());
                }
            }
        }
    }

    Ok(())
}

/// Build the slider state and filter from CLI flags.
///
/// Starts from neutral, or from the latest saved preset named by `--preset`.
/// Any slider flag replaces that slider; `--filter` replaces the filter.
fn resolve_look(
    args: &LookArgs,
    config: &EngineConfig,
) -> Result<(AdjustmentState, Option<FilterPreset>), Box<dyn std::error::Error>> {
    let (mut adjustments, mut filter) = match &args.preset {
        Some(name) => {
            let preset = PresetStore::open(&config.presets.store)
                .find(name)?
                .ok_or_else(|| format!("no saved preset named {name:?}"))?;
            (preset.adjustments, preset.filter)
        }
        None => (AdjustmentState::neutral(), None),
    };

    let overrides = [
        (Adjustment::Brightness, args.brightness),
        (Adjustment::Contrast, args.contrast),
        (Adjustment::Saturation, args.saturation),
        (Adjustment::Temperature, args.temperature),
        (Adjustment::Tint, args.tint),
    ];
    for (adjustment, value) in overrides {
        if let Some(value) = value {
            adjustments.set(adjustment, value);
        }
    }

    if let Some(id) = &args.filter {
        let preset = filters::find(id).ok_or_else(|| format!("unknown filter {id:?}"))?;
        filter = Some(preset.clone());
    }
    Ok((adjustments, filter))
}

/// Expand files and directories into a sorted list of decodable images.
fn collect_sources(sources: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for source in sources {
        if source.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(source)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file() && is_supported_image(e.path()))
                .map(|e| e.into_path())
                .collect();
            found.sort();
            files.extend(found);
        } else {
            files.push(source.clone());
        }
    }
    files
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            supported_input_extensions().contains(&e.as_str())
        })
        .unwrap_or(false)
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; the config can only lower it.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
