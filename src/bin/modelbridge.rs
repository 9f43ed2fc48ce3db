use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "modelbridge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the build's mode markers and the backend they select.
    Info(InfoArgs),
    /// Create a backend and drive it through a control loop.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Selection config JSON. Defaults to the build markers.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Number of update cycles.
    #[arg(long, default_value_t = 100)]
    cycles: u64,

    /// Reset the backend after every N cycles.
    #[arg(long)]
    reset_every: Option<u64>,

    /// Backend to use, bypassing marker selection.
    #[arg(long, value_enum, conflicts_with = "config")]
    kind: Option<KindChoice>,

    /// Selection config JSON. Defaults to the build markers.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindChoice {
    Empty,
    External,
    Normal,
    ConnectedIo,
}

impl From<KindChoice> for modelbridge::BackendKind {
    fn from(choice: KindChoice) -> Self {
        match choice {
            KindChoice::Empty => modelbridge::BackendKind::Empty,
            KindChoice::External => modelbridge::BackendKind::External,
            KindChoice::Normal => modelbridge::BackendKind::Normal,
            KindChoice::ConnectedIo => modelbridge::BackendKind::ConnectedIo,
        }
    }
}

fn main() -> anyhow::Result<()> {
    modelbridge::init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<modelbridge::BridgeConfig> {
    match path {
        Some(p) => modelbridge::BridgeConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(modelbridge::BridgeConfig::default()),
    }
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    let kind = cfg.resolve()?;

    if args.json {
        let out = serde_json::json!({
            "markers": cfg.markers,
            "active": cfg.markers.active(),
            "strict": cfg.strict,
            "selected": kind,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let active = cfg.markers.active();
    println!(
        "markers:  external={} normal={} connected_io={}",
        cfg.markers.external, cfg.markers.normal, cfg.markers.connected_io
    );
    println!(
        "active:   {}",
        if active.is_empty() {
            "(none)".to_string()
        } else {
            active.join(", ")
        }
    );
    println!("selected: {kind}");
    if cfg.markers.is_ambiguous() {
        eprintln!("warning: more than one mode marker is set; first match wins");
    }
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let backend = match args.kind {
        Some(choice) => modelbridge::create_backend(choice.into()),
        None => {
            let cfg = load_config(args.config.as_ref())?;
            modelbridge::create_from_config(&cfg)?
        }
    };

    let opts = modelbridge::LoopOpts {
        reset_every: args.reset_every,
    };
    let mut lp = modelbridge::ControlLoop::new(backend, opts);
    let stats = lp
        .run(args.cycles)
        .with_context(|| format!("run {} cycles", args.cycles))?;

    eprintln!(
        "{}: {} ticks, {} resets, status {:?}",
        lp.backend().kind(),
        stats.ticks,
        stats.resets,
        lp.backend().status()
    );
    Ok(())
}
