use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use clipstitch::{BlendMode, Curve, Sequence, TransitionConfig, TransitionLimits};

#[derive(Parser, Debug)]
#[command(name = "clipstitch", version, about = "Stitch, blend and loop frame sequences")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stitch two clips into one.
    Pair(PairArgs),
    /// Stitch 2 to 8 clips, in order, into one long clip.
    All(AllArgs),
    /// Blend two clips frame by frame.
    Blend(BlendArgs),
    /// Blend a clip's end back into its start so it loops seamlessly.
    Loop(LoopArgs),
}

#[derive(Args, Debug)]
struct TransitionArgs {
    /// Transition config JSON; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Curve for interpolation and crossfade (linear, ease_in_out, cosine, sigmoid).
    #[arg(long)]
    method: Option<String>,
}

#[derive(Args, Debug)]
struct PairArgs {
    /// First clip: directory of frame images.
    #[arg(long)]
    a: PathBuf,

    /// Second clip: directory of frame images.
    #[arg(long)]
    b: PathBuf,

    /// Output directory for PNG frames.
    #[arg(long)]
    out: PathBuf,

    /// Frames from each clip forming the transition zone.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=30))]
    overlap: Option<u32>,

    /// Frames to crossfade (0 = hard cut).
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=60))]
    crossfade: Option<u32>,

    /// Frames to synthesize between the clips (0 = none).
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=30))]
    interpolation: Option<u32>,

    #[command(flatten)]
    transition: TransitionArgs,
}

#[derive(Args, Debug)]
struct AllArgs {
    /// Clip directory; repeat 2 to 8 times, in playback order.
    #[arg(long = "clip", required = true, num_args = 1)]
    clips: Vec<PathBuf>,

    /// Output directory for PNG frames.
    #[arg(long)]
    out: PathBuf,

    /// Frames to synthesize at each junction.
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=30))]
    interpolation: Option<u32>,

    /// Frames to crossfade at each junction.
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=30))]
    crossfade: Option<u32>,

    /// Frames from each clip forming the transition zone.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=20))]
    overlap: Option<u32>,

    #[command(flatten)]
    transition: TransitionArgs,
}

#[derive(Args, Debug)]
struct BlendArgs {
    /// Base clip directory.
    #[arg(long)]
    a: PathBuf,

    /// Blended clip directory.
    #[arg(long)]
    b: PathBuf,

    /// Output directory for PNG frames.
    #[arg(long)]
    out: PathBuf,

    /// 0.0 keeps `a`, 1.0 applies `b` fully.
    #[arg(long, default_value_t = 0.5, value_parser = parse_unit_f32)]
    factor: f32,

    /// Blend mode (mix, add, multiply, screen, overlay).
    #[arg(long, default_value = "mix")]
    mode: String,
}

#[derive(Args, Debug)]
struct LoopArgs {
    /// Clip directory.
    #[arg(long = "in")]
    in_dir: PathBuf,

    /// Output directory for PNG frames.
    #[arg(long)]
    out: PathBuf,

    /// Frames blended at the loop point.
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(2..=60))]
    blend_frames: u32,

    /// Blend curve (linear, ease_in_out, cosine).
    #[arg(long, default_value = "ease_in_out")]
    curve: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Pair(args) => cmd_pair(args),
        Command::All(args) => cmd_all(args),
        Command::Blend(args) => cmd_blend(args),
        Command::Loop(args) => cmd_loop(args),
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_unit_f32(s: &str) -> Result<f32, String> {
    let v: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if !(0.0..=1.0).contains(&v) {
        return Err(format!("{v} is not in 0.0..=1.0"));
    }
    Ok(v)
}

fn resolve_transition(
    base: TransitionConfig,
    limits: TransitionLimits,
    args: &TransitionArgs,
    overlap: Option<u32>,
    crossfade: Option<u32>,
    interpolation: Option<u32>,
) -> anyhow::Result<TransitionConfig> {
    let mut cfg = match &args.config {
        Some(path) => TransitionConfig::from_path_over(base, path)?,
        None => base,
    };
    if let Some(v) = overlap {
        cfg.overlap_frames = v;
    }
    if let Some(v) = crossfade {
        cfg.crossfade_frames = v;
    }
    if let Some(v) = interpolation {
        cfg.interpolation_frames = v;
    }
    if let Some(name) = &args.method {
        cfg.interpolation_method = Curve::from_name(name);
    }
    cfg.validate_with(&limits)?;
    Ok(cfg)
}

fn load(dir: &Path) -> anyhow::Result<Sequence> {
    clipstitch::load_sequence_dir(dir).with_context(|| format!("load clip '{}'", dir.display()))
}

fn write(seq: &Sequence, out: &Path) -> anyhow::Result<()> {
    let written = clipstitch::save_sequence_dir(seq, out)?;
    eprintln!("wrote {} frames to {}", written.len(), out.display());
    Ok(())
}

fn cmd_pair(args: PairArgs) -> anyhow::Result<()> {
    let cfg = resolve_transition(
        TransitionConfig::default(),
        TransitionLimits::PAIR,
        &args.transition,
        args.overlap,
        args.crossfade,
        args.interpolation,
    )?;
    let a = load(&args.a)?;
    let b = load(&args.b)?;
    let out = clipstitch::stitch_pair(&a, &b, &cfg);
    write(&out, &args.out)
}

fn cmd_all(args: AllArgs) -> anyhow::Result<()> {
    let cfg = resolve_transition(
        TransitionConfig::chain_defaults(),
        TransitionLimits::CHAIN,
        &args.transition,
        args.overlap,
        args.crossfade,
        args.interpolation,
    )?;
    let clips = args
        .clips
        .iter()
        .map(|dir| load(dir).map(Some))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let stitched = clipstitch::stitch_all(&clips, &cfg)?;
    write(&stitched.sequence, &args.out)?;
    println!("{}", stitched.total_frames);
    Ok(())
}

fn cmd_blend(args: BlendArgs) -> anyhow::Result<()> {
    let a = load(&args.a)?;
    let b = load(&args.b)?;
    let out = clipstitch::blend_frames(&a, &b, args.factor, BlendMode::from_name(&args.mode));
    write(&out, &args.out)
}

fn cmd_loop(args: LoopArgs) -> anyhow::Result<()> {
    let video = load(&args.in_dir)?;
    let out = clipstitch::loop_seamless(
        &video,
        args.blend_frames as usize,
        Curve::from_name(&args.curve),
    );
    write(&out, &args.out)
}
