use super::{load_config, EligibleArgs};
use crate::catalog::Catalog;
use crate::matching::{eligible_topics, parse_age_range};

pub fn execute(args: EligibleArgs) -> anyhow::Result<()> {
    let mut config = load_config(&args.config)?;
    if let Some(catalog) = args.catalog {
        config.catalog = catalog;
    }

    let profile = args.profile.resolve()?;
    let catalog = Catalog::load(&config.catalog)?;
    let eligible = eligible_topics(catalog.topics(), &profile);

    let interests: Vec<&str> = profile.interests.iter().map(String::as_str).collect();
    println!(
        "\n{} of {} topics eligible for age {} ({}):",
        eligible.len(),
        catalog.len(),
        profile.age,
        interests.join(", ")
    );
    for topic in &eligible {
        println!(
            "  {} [{}] {} (ages {})",
            topic.id,
            topic.niche,
            topic.topic,
            parse_age_range(&topic.age_spec)
        );
    }

    Ok(())
}
