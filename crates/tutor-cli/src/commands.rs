use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use tracing::info;

use tutor_explain::{ExplainClient, ExplainRequest, Settlement, request_explanation};
use tutor_model::{CONCEPTS, find_concept};
use tutor_store::{
    AiTarget, DiffDelays, DiffLab, ExplanationHost, GardenState, Reducer, StoreHandle, UiSnapshot,
    WorkshopAction, WorkshopState, run_cycle,
};

use tutor_cli::render::{
    concepts_table, explanation_line, garden_report, house_report, registry_table, tutor_log,
    workshop_report,
};
use tutor_cli::replay::replay;
use tutor_cli::settings::Settings;

use crate::cli::{BuildArgs, ConfigArgs, DiffArgs, ExplainArgs, GardenArgs, HouseArgs};

pub fn run_blocks() {
    println!("{}", registry_table());
}

pub fn run_concepts() {
    println!("{}", concepts_table());
}

pub fn run_build(args: &BuildArgs) -> Result<()> {
    let state = args
        .kinds
        .iter()
        .fold(WorkshopState::default(), |state, &kind| {
            if !kind.is_material() {
                tracing::warn!(%kind, "skipping non-material; only materials go on pages");
            }
            state.reduce(WorkshopAction::AddComponent {
                page: args.page,
                kind,
            })
        })
        .reduce(WorkshopAction::SetCurrentPage(args.page));

    if state.page(args.page).components.is_empty() {
        bail!("no materials placed on {}", args.page.name());
    }
    print!("{}", workshop_report(&state));
    Ok(())
}

pub fn run_house(args: &HouseArgs) -> Result<()> {
    let store = replay(&args.transitions).context("replay house transitions")?;
    info!(transitions = store.dispatched(), "house replayed");
    if args.json {
        let json = serde_json::to_string_pretty(store.state()).context("serialize state")?;
        println!("{json}");
    } else {
        print!("{}", house_report(store.state()));
    }
    Ok(())
}

pub fn run_garden(args: &GardenArgs) {
    let state = args
        .actions
        .iter()
        .fold(GardenState::default(), |state, &action| state.reduce(action));
    print!("{}", garden_report(&state));
}

pub async fn run_explain(args: &ExplainArgs, settings: &Settings) -> Result<()> {
    let mut explain = settings.explain.clone();
    if let Some(endpoint) = &args.endpoint {
        explain.endpoint.clone_from(endpoint);
    }

    let user_prompt = match (&args.prompt, &args.concept) {
        (Some(prompt), _) => prompt.clone(),
        (None, Some(id)) => {
            let concept = find_concept(id).ok_or_else(|| {
                let known: Vec<_> = CONCEPTS.iter().map(|c| c.id).collect();
                anyhow!("unknown concept {id:?} (known: {})", known.join(", "))
            })?;
            println!("Asking the tutor about {}...", concept.name);
            concept.prompt.to_string()
        }
        (None, None) => bail!("give a concept or --prompt"),
    };

    let client = ExplainClient::new(&explain).context("create explanation client")?;
    let request = ExplainRequest::new(user_prompt, &explain.system_prompt);
    let handle = StoreHandle::<WorkshopState>::default();

    let settlement = request_explanation(
        &handle,
        &client,
        WorkshopAction::BeginExplanation {
            target: AiTarget::LearningConcept,
        },
        &request,
    )
    .await;

    let state = handle.snapshot();
    match settlement {
        Settlement::Applied { .. } if state.explanation().error().is_none() => {
            println!("{}", state.ai_text(AiTarget::LearningConcept));
            Ok(())
        }
        _ => bail!("{}", explanation_line(state.explanation())),
    }
}

pub async fn run_diff(args: &DiffArgs, settings: &Settings) -> Result<()> {
    let mut lab = DiffLab::new(settings.diff_lab.initial());
    let next = UiSnapshot::new(
        args.text.clone().unwrap_or_else(|| lab.current().text.clone()),
        args.color
            .clone()
            .unwrap_or_else(|| lab.current().color.clone()),
    );
    let delays = if args.instant {
        DiffDelays::INSTANT
    } else {
        settings.diff_lab.delays()
    };

    lab.update(next);
    run_cycle(&mut lab, &delays).await;

    println!(
        "{} / {}  ->  {} / {}",
        lab.previous().text,
        lab.previous().color,
        lab.current().text,
        lab.current().color
    );
    print!("{}", tutor_log(lab.log()));
    Ok(())
}

pub fn run_config(args: &ConfigArgs, settings: &Settings, path: &Path) -> Result<()> {
    if args.init && !path.exists() {
        settings.save_to(path).map_err(|e| anyhow!(e))?;
        println!("Wrote {}", path.display());
    }
    println!("# {}", path.display());
    print!(
        "{}",
        toml::to_string_pretty(settings).context("serialize settings")?
    );
    Ok(())
}
