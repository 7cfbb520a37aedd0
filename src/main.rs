use anyhow::{bail, Context};
use roomplan::{
    init_logging, planner_from_config, resolver_from_config, Catalog, NotificationCenter,
    SettingsManager, BUILD_DATE, VERSION,
};
use std::path::PathBuf;

const USAGE: &str = "usage: roomplan <scene.json> [definition-id ...]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut args = std::env::args().skip(1);
    let scene_path = match args.next() {
        Some(arg) if arg == "--version" => {
            println!("roomplan {} ({})", VERSION, BUILD_DATE);
            return Ok(());
        }
        Some(arg) => PathBuf::from(arg),
        None => bail!(USAGE),
    };
    let requested: Vec<String> = args.collect();

    let settings = SettingsManager::load_default();
    let config = settings.config();
    let resolver = resolver_from_config(config)?;
    let catalog = Catalog::builtin();
    let notifications = NotificationCenter::default();

    let mut state = planner_from_config(config);
    if scene_path.exists() {
        let summary = state
            .load_from_file(&scene_path)
            .with_context(|| format!("Failed to open {:?}", scene_path))?;
        if summary.skipped > 0 {
            tracing::warn!("{} saved items no longer fit and were dropped", summary.skipped);
        }
    } else if let Some(stem) = scene_path.file_stem().and_then(|s| s.to_str()) {
        state.scene_name = stem.to_string();
    }

    let mut placed = 0;
    for id in &requested {
        let definition = catalog.get(id)?;
        let outcome = state
            .place_furniture(definition, &resolver, &notifications)
            .await;
        if outcome.is_placed() {
            placed += 1;
        }
    }

    for notification in notifications.notifications() {
        println!("{}", notification);
    }

    state.save_to_file(&scene_path)?;
    println!(
        "{}: {} items ({} added)",
        state.display_name(),
        state.scene.item_count(),
        placed
    );

    Ok(())
}
