use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "danmaku", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan an overlay schedule from a JSON array of messages.
    Plan(PlanArgs),
    /// Print the inferred mood of each text.
    Classify(ClassifyArgs),
    /// List mood rules in priority order.
    Moods,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input JSON: an array of strings or {"text", "mood"} objects.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed (overrides the config seed).
    #[arg(long)]
    seed: Option<u64>,

    /// Viewport width in pixels.
    #[arg(long)]
    width: Option<f64>,

    /// Viewport height in pixels.
    #[arg(long)]
    height: Option<f64>,

    /// Cap on planned items (overrides the config).
    #[arg(long)]
    max_messages: Option<usize>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ClassifyArgs {
    /// Texts to classify.
    #[arg(required = true)]
    texts: Vec<String>,
}

#[derive(serde::Serialize)]
struct ScheduleOut<'a> {
    total: usize,
    lane_count: usize,
    row_height_px: f64,
    span_secs: f64,
    items: Vec<ItemOut<'a>>,
}

#[derive(serde::Serialize)]
struct ItemOut<'a> {
    #[serde(flatten)]
    item: &'a danmaku::PlannedItem,
    color: danmaku::Rgba8Premul,
    top_px: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Classify(args) => cmd_classify(args),
        Command::Moods => cmd_moods(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_messages(path: &Path) -> anyhow::Result<Vec<danmaku::InputMessage>> {
    let f = File::open(path).with_context(|| format!("open messages '{}'", path.display()))?;
    let r = BufReader::new(f);
    let msgs: Vec<danmaku::InputMessage> =
        serde_json::from_reader(r).with_context(|| "parse messages JSON (expected an array)")?;
    Ok(msgs)
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => danmaku::DanmakuConfig::from_json_file(path)?,
        None => danmaku::DanmakuConfig::default(),
    };
    if args.width.is_some() {
        config.viewport_width = args.width;
    }
    if args.height.is_some() {
        config.viewport_height = args.height;
    }
    if let Some(max) = args.max_messages {
        config.max_messages = max;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let messages = read_messages(&args.in_path)?;
    let mut rng = danmaku::batch_rng(&config);
    let run = danmaku::plan_batch(&messages, &config, &mut rng)?;
    let palette = config.palette()?;
    let layout = danmaku::LaneLayout {
        row_height_px: run.row_height_px,
        lane_count: run.lane_count,
    };

    let out = ScheduleOut {
        total: run.total,
        lane_count: run.lane_count,
        row_height_px: run.row_height_px,
        span_secs: run.span_secs(),
        items: run
            .items
            .iter()
            .map(|item| ItemOut {
                item,
                color: palette.color(item.mood),
                top_px: layout.lane_top_px(item.lane),
            })
            .collect(),
    };
    let json = serde_json::to_string_pretty(&out).context("serialize schedule")?;

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json)
                .with_context(|| format!("write schedule '{}'", path.display()))?;
            eprintln!("wrote {} ({} items)", path.display(), run.total);
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    for text in &args.texts {
        writeln!(stdout, "{text}\t{}", danmaku::classify(text))?;
    }
    Ok(())
}

fn cmd_moods() -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    for (i, rule) in danmaku::MOOD_RULES.iter().enumerate() {
        writeln!(stdout, "{:>2}. {:<12} {}", i + 1, rule.mood, rule.keywords.join(", "))?;
    }
    writeln!(stdout, "    {:<12} (fallback)", danmaku::Mood::Neutral)?;
    Ok(())
}
