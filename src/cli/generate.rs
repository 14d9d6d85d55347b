use super::{load_config, GenerateArgs, OutputFormat};
use crate::catalog::Catalog;
use crate::config::Provider;
use crate::output::{render_markdown, write_output, PlanResponse};
use crate::planner::Pipeline;
use crate::provider::create_runner;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn execute(args: GenerateArgs) -> anyhow::Result<()> {
    let mut config = load_config(&args.config)?;

    if let Some(catalog) = args.catalog {
        config.catalog = catalog;
    }
    if args.offline {
        config.ranking.provider = Provider::Offline;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(timeout_sec) = args.timeout_sec {
        config.ranking.timeout_sec = timeout_sec;
    }
    config.validate()?;

    let profile = args.profile.resolve()?;
    let catalog = Arc::new(Catalog::load(&config.catalog)?);
    if catalog.is_empty() {
        warn!("Catalog {:?} has no topics", config.catalog);
    }

    info!("Ranking provider: {}", config.ranking.provider);
    let runner = create_runner(&config);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let pipeline = Pipeline::new(&config, catalog, runner);
    let outcome = pipeline.run(&profile, &mut rng).await?;
    info!(
        "Plan {} reached {:?} with {} days filled",
        outcome.plan_id,
        outcome.stage,
        outcome.weekly_plan.filled_days()
    );

    let rendered = match args.format {
        OutputFormat::Json => PlanResponse::from_outcome(&outcome).to_json()?,
        OutputFormat::Markdown => render_markdown(&outcome),
    };
    write_output(args.output.as_deref(), &rendered)?;

    if let Some(path) = args.output {
        eprintln!("Plan {} written to {}", outcome.plan_id, path.display());
    }

    Ok(())
}
