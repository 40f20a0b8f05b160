use clap::Parser;
use kart_timeline::error::{Result, TimelineError};
use kart_timeline::icon::{DirIconSource, IconTable};
use kart_timeline::layout::layout_timeline;
use kart_timeline::render::{PngSink, RenderOptions, RenderSink};
use kart_timeline::source::{NdjsonGlobSource, RecordSource};
use kart_timeline::timeline::{TimelineEntry, build_timeline, write_tsv};
use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(
    name = "kart-timeline",
    about = "Render a race event timeline from per-lap NDJSON logs"
)]
struct Args {
    /// Glob matching the lap NDJSON files
    #[arg(long, default_value = "laps/*.ndjson")]
    laps_glob: String,

    /// Directory containing <name>.png icon assets
    #[arg(long, default_value = "./icon")]
    icon_dir: PathBuf,

    /// Output PNG file
    #[arg(long, default_value = "timeline.png")]
    out: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 1600)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Edge length of each event icon in pixels
    #[arg(long, default_value_t = 24)]
    icon_px: u32,

    /// Radius of the player marker in pixels
    #[arg(long, default_value_t = 11)]
    marker_radius: i32,

    /// TrueType font for axis labels and legend (omitted when absent)
    #[arg(long)]
    font: Option<PathBuf>,

    /// Figure title
    #[arg(long)]
    title: Option<String>,

    /// Also write the timeline table as JSON
    #[arg(long)]
    timeline_json: Option<PathBuf>,

    /// Print the timeline table as TSV on stdout
    #[arg(long)]
    print_table: bool,

    /// Stop after building the timeline table
    #[arg(long)]
    no_render: bool,
}

fn write_timeline_json(path: &Path, entries: &[TimelineEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries).map_err(TimelineError::Encode)?;
    fs::write(path, json).map_err(|source| TimelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    eprintln!("wrote timeline to {}", path.display());
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let mut source = NdjsonGlobSource::new(&args.laps_glob);
    let records = source.read_records()?;
    let entries = build_timeline(&records)?;

    if args.print_table {
        write_tsv(&entries, io::stdout().lock()).map_err(|source| TimelineError::Io {
            path: PathBuf::from("<stdout>"),
            source,
        })?;
    }
    if let Some(path) = &args.timeline_json {
        write_timeline_json(path, &entries)?;
    }
    if args.no_render {
        return Ok(());
    }

    let icons = IconTable::build(&DirIconSource::new(&args.icon_dir))?;
    let plan = layout_timeline(&entries, &icons)?;

    let opts = RenderOptions {
        width: args.width,
        height: args.height,
        icon_px: args.icon_px,
        marker_radius: args.marker_radius,
        font: args.font,
        title: args.title,
    };
    let mut sink = PngSink::new(&args.out, opts);
    sink.render(&plan)?;
    eprintln!("wrote timeline image to {}", args.out.display());
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    info!(laps_glob = %args.laps_glob, "🏁 开始生成时间轴");

    if let Err(err) = run(args) {
        error!(error = %err, "生成时间轴失败");
        eprintln!("error: {err}");
        let mut cause = err.source();
        while let Some(inner) = cause {
            eprintln!("  caused by: {inner}");
            cause = inner.source();
        }
        std::process::exit(1);
    }
}
