use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    ops::ControlFlow,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "postmotion", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a project JSON file.
    Validate(ValidateArgs),
    /// Print the evaluated frame at one time as JSON.
    Sample(SampleArgs),
    /// Play the timeline once and print one JSON line per tick.
    Play(PlayArgs),
    /// Apply a design operation batch to a project and write the result.
    Apply(ApplyArgs),
    /// List animation and canvas presets.
    Presets,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Timeline position in milliseconds.
    #[arg(long)]
    time: f64,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Ticks per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Pace ticks with the system clock instead of stepping simulated time.
    #[arg(long)]
    realtime: bool,
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Design operation batch JSON (`{"operations": [...]}`).
    #[arg(long)]
    ops: PathBuf,

    /// Output project JSON.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Play(args) => cmd_play(args),
        Command::Apply(args) => cmd_apply(args),
        Command::Presets => cmd_presets(),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_project_json(path: &Path) -> anyhow::Result<postmotion::Project> {
    let f = File::open(path).with_context(|| format!("open project '{}'", path.display()))?;
    let r = BufReader::new(f);
    let project: postmotion::Project =
        serde_json::from_reader(r).with_context(|| "parse project JSON")?;
    Ok(project)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let project = read_project_json(&args.in_path)?;
    project.validate()?;
    eprintln!(
        "ok: {} element(s), {} s timeline",
        project.elements.len(),
        postmotion::format_time(project.duration)
    );
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let project = read_project_json(&args.in_path)?;
    project.validate()?;
    let frame = postmotion::Evaluator::eval_frame(&project.elements, args.time)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &frame)?;
    writeln!(out)?;
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let store = postmotion::ProjectStore::from_project(read_project_json(&args.in_path)?)?;
    let mut clock = postmotion::PlaybackClock::new(store.duration());
    let mut source: Box<dyn postmotion::TimeSource> = if args.realtime {
        Box::new(postmotion::SystemTimeSource::new(args.fps))
    } else {
        Box::new(postmotion::ManualTimeSource::at_fps(args.fps))
    };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut failure = None;
    postmotion::drive(&mut clock, source.as_mut(), |status| {
        let line = postmotion::Evaluator::eval_frame(store.elements(), status.current_time)
            .map_err(anyhow::Error::from)
            .and_then(|frame| {
                let visible: Vec<_> = frame.nodes.iter().map(|n| n.element_id.as_str()).collect();
                let line = serde_json::json!({
                    "currentTime": status.current_time,
                    "isPlaying": status.is_playing,
                    "visible": visible,
                });
                writeln!(out, "{line}").map_err(anyhow::Error::from)
            });
        match line {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) => {
                failure = Some(e);
                ControlFlow::Break(())
            }
        }
    });
    if let Some(e) = failure {
        return Err(e.context("playback aborted"));
    }
    out.flush()?;
    Ok(())
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let mut store = postmotion::ProjectStore::from_project(read_project_json(&args.in_path)?)?;
    let ops_text = std::fs::read_to_string(&args.ops)
        .with_context(|| format!("read operations '{}'", args.ops.display()))?;
    let batch = postmotion::DesignOperations::from_json(&ops_text)?;
    let outcomes = store.apply_all(batch)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(&args.out)
        .with_context(|| format!("create project '{}'", args.out.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), &store.snapshot())?;

    for outcome in &outcomes {
        eprintln!("{}", serde_json::to_string(outcome)?);
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    println!("animation presets:");
    for preset in postmotion::AnimationPreset::ALL {
        let kf = preset.keyframe();
        println!(
            "  {:<14} {} {:?} -> {:?} over {} ms ({})",
            preset.key(),
            kf.property.name(),
            kf.from,
            kf.to,
            kf.effective_duration(),
            kf.effective_ease()
        );
    }
    println!("canvas presets:");
    for preset in postmotion::CanvasPreset::ALL {
        let (w, h) = preset.size();
        println!("  {:<14} {}x{} {}", preset.key(), w, h, preset.label());
    }
    Ok(())
}
