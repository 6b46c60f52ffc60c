//! # Stripsheet CLI
//!
//! Command-line front end for the data-sheet renderer.
//!
//! ## Usage
//!
//! ```bash
//! # Render one record (JSON object of field → value)
//! stripsheet render product.json --sku ml-126-676-60-x
//!
//! # Render with footer strip and icons from an asset folder
//! stripsheet render product.json --assets ./assets --footer
//!
//! # Render every *.json record in a folder
//! stripsheet batch ./records --out-dir ./out
//!
//! # Preview a pictogram
//! stripsheet preview al-profile
//!
//! # Show which cross-section a combination selects
//! stripsheet variant --ip 54 --model 81B
//! ```

use clap::{Args, Parser, Subcommand};
use log::{Level, LevelFilter, Log, Metadata, Record};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{Rgb, RgbImage};
use stripsheet::{
    AttributeRecord, SheetError, SheetRenderer,
    assets::AssetDir,
    compose::CellPainter,
    config::{self, Config},
    fonts::Fonts,
    icons,
    record::output_file_name,
    rules::{self, ProfileInputs},
    sheet::{save_jpeg, save_png},
};

/// Stripsheet - LED strip data-sheet renderer
#[derive(Parser, Debug)]
#[command(name = "stripsheet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// More log output (-v debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that builds a renderer.
#[derive(Args, Debug)]
struct RendererArgs {
    /// Folder with icon, IP plate and footer images
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// JSON file overriding geometry and palette
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Folder the configured font files are resolved against
    #[arg(long, value_name = "DIR")]
    fonts: Option<PathBuf>,

    /// Compose the grid onto the footer canvas
    #[arg(long)]
    footer: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render one record
    Render {
        /// Record file (JSON object)
        record: PathBuf,

        /// Output file (defaults to {SKU}_30.jpg)
        #[arg(long, short, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Product code or URL used for the default file name
        #[arg(long)]
        sku: Option<String>,

        /// Write PNG instead of JPEG
        #[arg(long)]
        png: bool,

        #[command(flatten)]
        renderer: RendererArgs,
    },

    /// Render every *.json record in a folder
    Batch {
        /// Folder with record files
        dir: PathBuf,

        /// Where rendered sheets go
        #[arg(long, value_name = "DIR")]
        out_dir: PathBuf,

        #[command(flatten)]
        renderer: RendererArgs,
    },

    /// Render one pictogram on a white margin (omit the name to list them)
    Preview {
        pictogram: Option<String>,

        /// Output PNG (defaults to the pictogram name)
        #[arg(long, short, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Print the cross-section variant selected for an attribute combination
    Variant {
        #[arg(long, default_value = "")]
        color: String,
        #[arg(long, default_value = "")]
        ip: String,
        #[arg(long, default_value = "")]
        chip: String,
        #[arg(long, default_value = "")]
        model: String,
    },
}

/// Minimal stderr logger for the `log` facade.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Error | Level::Warn => {
                eprintln!("{}: {}", record.level().as_str().to_lowercase(), record.args())
            }
            _ => eprintln!("{}", record.args()),
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, _) => LevelFilter::Debug,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), SheetError> {
    match command {
        Commands::Render {
            record,
            out,
            sku,
            png,
            renderer,
        } => {
            let footer = renderer.footer;
            let sheet = build_renderer(&renderer)?;
            let data = AttributeRecord::from_path(&record)?;
            let out = out.unwrap_or_else(|| {
                let code = sku.unwrap_or_else(|| product_code(&data, &record));
                let name = output_file_name(&code);
                if png {
                    PathBuf::from(name).with_extension("png")
                } else {
                    PathBuf::from(name)
                }
            });
            render_to(&sheet, &data, &out, footer, png)?;
            println!("Saved to {}", out.display());
        }

        Commands::Batch {
            dir,
            out_dir,
            renderer,
        } => {
            let footer = renderer.footer;
            let sheet = build_renderer(&renderer)?;
            std::fs::create_dir_all(&out_dir)?;

            let mut records: Vec<PathBuf> = std::fs::read_dir(&dir)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")))
                .collect();
            records.sort();

            let results: Vec<(PathBuf, Result<PathBuf, SheetError>)> = records
                .par_iter()
                .map(|path| {
                    let result = AttributeRecord::from_path(path).and_then(|data| {
                        let out = out_dir.join(output_file_name(&product_code(&data, path)));
                        render_to(&sheet, &data, &out, footer, false).map(|_| out)
                    });
                    (path.clone(), result)
                })
                .collect();

            let mut failed = 0;
            for (path, result) in &results {
                match result {
                    Ok(out) => println!("{} -> {}", path.display(), out.display()),
                    Err(e) => {
                        failed += 1;
                        eprintln!("{}: {}", path.display(), e);
                    }
                }
            }
            println!("Rendered {} of {} records", results.len() - failed, results.len());
            if failed > 0 {
                return Err(SheetError::Record(format!("{} records failed", failed)));
            }
        }

        Commands::Preview { pictogram, out } => {
            let Some(key) = pictogram else {
                println!("Available pictograms:");
                for key in icons::list_keys() {
                    println!("  {}", key);
                }
                return Ok(());
            };
            let picto = icons::by_key(&key).ok_or_else(|| {
                SheetError::Record(format!(
                    "Unknown pictogram '{}'. Run without arguments to see available options.",
                    key
                ))
            })?;

            let config = Config::default();
            let size = config.sheet.cell_size;
            let mut canvas = RgbImage::from_pixel(size + 40, size + 40, Rgb([255, 255, 255]));
            let fonts = Fonts::builtin();
            let mut painter =
                CellPainter::new(&mut canvas, &fonts, (20, 20), size, config.sheet.radius);
            painter.background(config.palette.neutral);
            painter.paste_alpha(&picto.render(size, &config.palette), 0, 0);

            let out = out.unwrap_or_else(|| PathBuf::from(format!("{}.png", key.replace('/', "_"))));
            save_png(&canvas, &out)?;
            println!("Saved to {}", out.display());
        }

        Commands::Variant {
            color,
            ip,
            chip,
            model,
        } => {
            let inputs = ProfileInputs {
                color,
                ip,
                chip,
                model,
            };
            let palette = Config::default().palette;
            println!("{}", rules::select_profile(&inputs, &palette));
        }
    }

    Ok(())
}

fn build_renderer(args: &RendererArgs) -> Result<SheetRenderer, SheetError> {
    let config = config::load_config(args.config.as_deref())?;
    let fonts = Fonts::load(args.fonts.as_deref(), &config.sheet.fonts);
    let assets = match &args.assets {
        Some(dir) => AssetDir::open(dir)?,
        None => AssetDir::empty(),
    };
    Ok(SheetRenderer::new(config, Arc::new(fonts), assets))
}

/// Product code for file naming: `sku`, then `url`, then the record file stem.
fn product_code(record: &AttributeRecord, path: &Path) -> String {
    ["sku", "url"]
        .iter()
        .map(|key| record.get(key))
        .find(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
}

fn render_to(
    sheet: &SheetRenderer,
    record: &AttributeRecord,
    out: &Path,
    footer: bool,
    png: bool,
) -> Result<(), SheetError> {
    let image = if footer {
        sheet.render_with_footer(record).0
    } else {
        sheet.render(record)
    };
    if png {
        save_png(&image, out)
    } else {
        save_jpeg(&image, out, sheet.config().sheet.jpeg_quality)
    }
}
