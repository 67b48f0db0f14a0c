use anyhow::{bail, Context};
use std::path::PathBuf;
use tracing::info;
use voronoi_sketch::{
    init_logging, parse_message, parse_profile, Config, PublishSession, SessionAction, BUILD_DATE,
    VERSION,
};

const USAGE: &str = "usage: voronoi-sketch [--config <file>] <profile.json> [publish.json]";

struct Args {
    config: Option<PathBuf>,
    profile: PathBuf,
    publish: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Option<Args>> {
    let mut config = None;
    let mut positional = Vec::new();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(None);
            }
            "-V" | "--version" => {
                println!("voronoi-sketch {} ({})", VERSION, BUILD_DATE);
                return Ok(None);
            }
            "-c" | "--config" => {
                let path = args.next().context("--config needs a file")?;
                config = Some(PathBuf::from(path));
            }
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let mut positional = positional.into_iter();
    let Some(profile) = positional.next() else {
        bail!(USAGE);
    };
    let publish = positional.next();
    if positional.next().is_some() {
        bail!(USAGE);
    }

    Ok(Some(Args {
        config,
        profile,
        publish,
    }))
}

fn main() -> anyhow::Result<()> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };

    // Initialize logging
    init_logging()?;

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(&path)?,
            None => Config::default(),
        },
    };

    let profile_json = std::fs::read_to_string(&args.profile)
        .with_context(|| format!("reading {}", args.profile.display()))?;
    let fragments = parse_profile(&profile_json)?;

    let mut session = PublishSession::new(config);
    session.select_profile_fragments(&fragments)?;
    println!("{}", session.init_payload()?.to_json()?);

    if let Some(path) = &args.publish {
        let payload = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let Some(message) = parse_message(&payload)? else {
            info!("{} holds no palette action", path.display());
            return Ok(());
        };

        match session.handle(message)? {
            SessionAction::Publish(plan) => {
                let offset = &plan.offset;
                println!(
                    "{}",
                    serde_json::json!({
                        "sketchName": plan.sketch_name,
                        "constructionPlane": plan.construction_plane.to_string(),
                        "width": plan.artifact.width,
                        "height": plan.artifact.height,
                        "offset": { "dx": offset.dx, "dy": offset.dy, "dz": offset.dz },
                        "transform": plan.transform(),
                    })
                );
            }
            SessionAction::SendInit(payload) => println!("{}", payload.to_json()?),
            SessionAction::Hide => info!("Palette closed"),
        }
    }

    Ok(())
}
