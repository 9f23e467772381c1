//! Command-line harness around the target pipeline.
//!
//! The live robot runs with an external capture/segmentation frontend; this
//! binary covers everything after it. Candidate polygons for one or more
//! frames can be fed in as JSON (`--polygons`), each frame an array of
//! polygons and each polygon an array of `[x, y]` vertices. Every frame
//! with a selected target prints the controller wire line and, unless
//! `--no-report` is given, sends it as a UDP datagram.

use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use log::{info, LevelFilter};
use nalgebra::Point2;

use retro_targets::capture::FrameSourceConfig;
use retro_targets::frame::FrameProcessor;
use retro_targets::report::{ReportError, UdpReporter, DEFAULT_ENDPOINT};
use retro_targets::segment::{ConfigError, SegmentationConfig};
use retro_targets_core::{init_with_level, Polygon};
use retro_targets_pipeline::{PipelineParams, SlotRanking, TargetPipeline};

#[derive(Parser, Debug)]
#[command(name = "retro-targets", version, about)]
struct Args {
    /// Process a recorded mjpg video or a jpeg image instead of the live
    /// camera stream.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Display every intermediate debugging window (frontend option).
    #[arg(long)]
    gui_all: bool,

    /// Process WPI sample images (red targets).
    #[arg(short = 'w', long)]
    wpi_images: bool,

    /// Candidate polygon frames to classify, as JSON.
    #[arg(long, value_name = "JSON_FILE")]
    polygons: Option<PathBuf>,

    /// Robot controller endpoint for target reports.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: SocketAddr,

    /// Print reports without sending them.
    #[arg(long)]
    no_report: bool,

    /// Frame width in pixels, used for the bearing computation.
    #[arg(long, default_value_t = 320)]
    frame_width: u32,

    /// Minimum accepted polygon bounding area in pixels squared.
    #[arg(long, default_value_t = 500.0)]
    min_area: f32,

    /// Rank same-height duplicates by area instead of detection order.
    #[arg(long)]
    rank_by_area: bool,

    /// Verbose per-measurement logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("invalid segmentation configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot read polygon frames from {path}: {source}")]
    ReadFrames {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed polygon frames in {path}: {source}")]
    ParseFrames {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = init_with_level(level);

    let mut segmentation = SegmentationConfig {
        min_quad_area: args.min_area,
        ..SegmentationConfig::default()
    };
    if args.wpi_images {
        segmentation = segmentation.alternate_coloring();
    }
    segmentation.validate()?;

    let source = match args.file {
        Some(path) => FrameSourceConfig::from_file_arg(path),
        None => FrameSourceConfig::default(),
    };
    info!("frame source: {source:?}");
    if args.gui_all {
        info!("debug visualization requested; handled by the capture frontend");
    }

    let params = PipelineParams {
        min_quad_area: segmentation.min_quad_area,
        frame_width: args.frame_width,
        ranking: if args.rank_by_area {
            SlotRanking::LargestArea
        } else {
            SlotRanking::DetectionOrder
        },
        ..PipelineParams::default()
    };
    let mut processor = FrameProcessor::new(TargetPipeline::new(params));
    if !args.no_report {
        processor = processor.with_reporter(UdpReporter::new(args.endpoint)?);
    }

    let Some(frames_path) = args.polygons else {
        info!("no polygon frames given; nothing to classify");
        return Ok(());
    };

    for (index, polygons) in load_frames(&frames_path)?.into_iter().enumerate() {
        let analysis = processor.process_frame(&polygons);
        match analysis.group.selected {
            Some(selected) => println!(
                "frame {index}: Distance={:.6}:Angle={:.6}:Tension={:.6}",
                selected.distance_y, selected.angle_x, selected.tension
            ),
            None => println!("frame {index}: no target"),
        }
    }
    info!("average rate {:.2} fps", processor.fps());

    Ok(())
}

/// Frames as nested vertex arrays: `[[[x, y], ...polygon], ...frame]`.
fn load_frames(path: &PathBuf) -> Result<Vec<Vec<Polygon>>, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadFrames {
        path: path.clone(),
        source,
    })?;
    let raw: Vec<Vec<Vec<[f32; 2]>>> =
        serde_json::from_str(&text).map_err(|source| CliError::ParseFrames {
            path: path.clone(),
            source,
        })?;
    Ok(raw
        .into_iter()
        .map(|frame| {
            frame
                .into_iter()
                .map(|poly| {
                    Polygon::new(poly.into_iter().map(|[x, y]| Point2::new(x, y)).collect())
                })
                .collect()
        })
        .collect())
}
