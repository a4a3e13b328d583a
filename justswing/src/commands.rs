//! Subcommand execution: wires stores, the analyzer, and rendering.

use crate::analyzer::{GeminiAnalyzer, SwingAnalyzer};
use crate::cli::{Cli, Command, DrillAction, HistoryAction};
use crate::config;
use crate::persistence::{
    FileKvStore, HistoryPayload, HistoryStore, ProfileStore, ProgressStore,
};
use crate::render;
use anyhow::{bail, Context};
use coaching::{action_plan, catalog, match_all, recommend, Drill};
use std::path::Path;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let data_dir = config::get_data_dir();
    tracing::debug!("Using data directory: {}", data_dir.display());

    match cli.command {
        Command::Analyze { video } => analyze(&data_dir, &video).await,
        Command::Compare { reference, current } => compare(&data_dir, &reference, &current).await,
        Command::Drills { action } => match action.unwrap_or(DrillAction::List) {
            DrillAction::List => drills_list(&data_dir),
            DrillAction::Show { id } => drills_show(&data_dir, &id),
            DrillAction::Complete { id, rating, notes } => {
                drills_complete(&data_dir, &id, rating, notes)
            }
        },
        Command::Profile => profile(&data_dir),
        Command::History { action } => match action.unwrap_or(HistoryAction::List) {
            HistoryAction::List => history_list(&data_dir),
            HistoryAction::Show { id } => history_show(&data_dir, &id),
            HistoryAction::Delete { id } => history_delete(&data_dir, &id),
        },
        Command::Reset { yes } => reset(&data_dir, yes),
    }
}

fn kv(data_dir: &Path) -> FileKvStore {
    FileKvStore::new(data_dir.to_path_buf())
}

fn analyzer() -> anyhow::Result<GeminiAnalyzer> {
    let api_key = config::api_key()
        .context("GEMINI_API_KEY is not set; the analysis service needs an API key")?;
    Ok(GeminiAnalyzer::new(api_key, config::model_id()))
}

async fn analyze(data_dir: &Path, video: &Path) -> anyhow::Result<()> {
    if !video.exists() {
        bail!("video not found: {}", video.display());
    }
    let analyzer = analyzer()?;

    println!("AI Coach is processing mechanics...");
    let report = analyzer
        .analyze_swing(video)
        .await
        .context("swing analysis failed")?;

    let mut history = HistoryStore::load(kv(data_dir));
    history.add(HistoryPayload::Analysis(report.clone()));

    let mut profiles = ProfileStore::load(kv(data_dir));
    let profile = profiles.assess_and_store(&report);

    let progress = ProgressStore::load(kv(data_dir));
    render::report(&report);
    render::action_plan(&action_plan(&report), progress.log());
    render::profile(&profile);
    Ok(())
}

async fn compare(data_dir: &Path, reference: &Path, current: &Path) -> anyhow::Result<()> {
    for video in [reference, current] {
        if !video.exists() {
            bail!("video not found: {}", video.display());
        }
    }
    let analyzer = analyzer()?;

    println!("AI Coach is comparing swings...");
    let report = analyzer
        .compare_swings(reference, current)
        .await
        .context("swing comparison failed")?;

    let mut history = HistoryStore::load(kv(data_dir));
    history.add(HistoryPayload::Comparison(report.clone()));

    render::comparison(&report);
    Ok(())
}

fn drills_list(data_dir: &Path) -> anyhow::Result<()> {
    let progress = ProgressStore::load(kv(data_dir));
    let profiles = ProfileStore::load(kv(data_dir));
    let history = HistoryStore::load(kv(data_dir));
    let recent_report = history.latest_report();

    println!("DRILL LIBRARY");
    if progress.completion_count() > 0 {
        println!(
            "{} drills completed, {} total sessions",
            progress.completion_count(),
            progress.total_sessions()
        );
    }
    if let Some(p) = profiles.profile() {
        println!("skill level: {}", p.overall_level);
    }

    if profiles.profile().is_some() || recent_report.is_some() {
        println!();
        println!("Recommended for you:");
        for drill in recommend(catalog(), profiles.profile(), recent_report) {
            render::drill_line(drill, progress.get(&drill.id));
        }
    }

    if let Some(report) = recent_report {
        let suggestions: Vec<String> = report
            .phases()
            .flat_map(|(_, a)| a.drills.iter().cloned())
            .collect();
        let prescribed = match_all(&suggestions);
        if !prescribed.is_empty() {
            println!();
            println!("Your prescribed plan:");
            for drill in prescribed {
                render::drill_line(drill, progress.get(&drill.id));
            }
        }
    }

    println!();
    println!("All training drills:");
    for drill in catalog() {
        render::drill_line(drill, progress.get(&drill.id));
    }
    Ok(())
}

fn find_drill(id: &str) -> anyhow::Result<&'static Drill> {
    catalog()
        .iter()
        .find(|d| d.id == id)
        .with_context(|| format!("no drill with id '{}' (see `justswing drills list`)", id))
}

fn drills_show(data_dir: &Path, id: &str) -> anyhow::Result<()> {
    let drill = find_drill(id)?;
    let progress = ProgressStore::load(kv(data_dir));
    render::drill_detail(drill, progress.get(id));
    Ok(())
}

fn drills_complete(
    data_dir: &Path,
    id: &str,
    rating: Option<u8>,
    notes: Option<String>,
) -> anyhow::Result<()> {
    // Placeholder drills from an action plan are completable too; anything
    // else must exist in the catalog.
    if !id.starts_with("gen-") {
        find_drill(id)?;
    }

    let mut progress = ProgressStore::load(kv(data_dir));
    progress.record_completion(id, rating, notes);

    let entry = progress
        .get(id)
        .context("progress entry missing after recording")?;
    println!(
        "Recorded session {} for '{}' ({} drills completed, {} total sessions)",
        entry.sessions.len(),
        id,
        progress.completion_count(),
        progress.total_sessions()
    );
    Ok(())
}

fn profile(data_dir: &Path) -> anyhow::Result<()> {
    let profiles = ProfileStore::load(kv(data_dir));
    match profiles.profile() {
        Some(p) => render::profile(p),
        None => println!("No skill profile yet. Run `justswing analyze <video>` first."),
    }
    Ok(())
}

fn history_list(data_dir: &Path) -> anyhow::Result<()> {
    let history = HistoryStore::load(kv(data_dir));
    if history.items().is_empty() {
        println!("History vault is empty.");
        return Ok(());
    }
    println!("HISTORY VAULT (newest first)");
    for item in history.items() {
        render::history_line(item);
    }
    Ok(())
}

fn history_show(data_dir: &Path, id: &str) -> anyhow::Result<()> {
    let history = HistoryStore::load(kv(data_dir));
    let item = history
        .get(id)
        .with_context(|| format!("no history entry with id '{}'", id))?;

    match &item.payload {
        HistoryPayload::Analysis(report) => {
            let progress = ProgressStore::load(kv(data_dir));
            render::report(report);
            render::action_plan(&action_plan(report), progress.log());
        }
        HistoryPayload::Comparison(report) => render::comparison(report),
    }
    Ok(())
}

fn history_delete(data_dir: &Path, id: &str) -> anyhow::Result<()> {
    let mut history = HistoryStore::load(kv(data_dir));
    if !history.delete(id) {
        bail!("no history entry with id '{}'", id);
    }
    println!("Deleted history entry {}", id);
    Ok(())
}

fn reset(data_dir: &Path, yes: bool) -> anyhow::Result<()> {
    if !yes && !confirm("Clear ALL app data (history, progress, profile)? [y/N] ")? {
        println!("Aborted.");
        return Ok(());
    }

    let mut progress = ProgressStore::load(kv(data_dir));
    progress.clear();
    let mut profiles = ProfileStore::load(kv(data_dir));
    profiles.clear();
    let mut history = HistoryStore::load(kv(data_dir));
    history.clear();
    println!("All app data cleared.");
    Ok(())
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    use std::io::Write as _;
    print!("{}", prompt);
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
