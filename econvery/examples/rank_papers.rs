use econvery::config::ConfigBuilder;
use econvery::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = ConfigBuilder::development()
        .with_min_score(3.0)
        .with_limit(10)
        .build()?;
    let engine = econvery::init(&config)?;

    let profile = UserProfile::builder("PhD Student (Early)", "Labor Economics")
        .interests(["Causal Inference", "Immigration"])
        .method("Difference-in-Differences")
        .regional_focus("United States")
        .build()?;

    println!("{}\n", profile.to_text());

    let papers = vec![
        PaperRecord::new(
            "The Employment Effects of Minimum Wages",
            "Using a difference-in-differences design across neighbouring counties, we \
             estimate the causal effect of a minimum wage increase on teen employment.",
        )
        .with_concept("Minimum wage", 0.9)
        .with_journal("American Economic Review")
        .with_citations(320),
        PaperRecord::new(
            "Refugee inflows and native wages",
            "Exploiting the quasi-random dispersal of refugees, we estimate effects of \
             immigrants on native wages with an instrumental variables strategy.",
        )
        .with_concept("Immigration", 0.8)
        .with_citations(40),
        PaperRecord::new(
            "Thermal stress and coral reef bleaching",
            "Marine heatwaves drive mass bleaching of reef-building corals.",
        ),
    ];

    let ranked = engine.rank(&profile, papers);
    for scored in &ranked {
        println!(
            "{:>4.1}  {:<10}  {}",
            scored.score(),
            scored.level(),
            scored.paper.label()
        );
        println!("      {}", scored.result.explanation);
    }

    let summary = engine.summary(&ranked);
    println!(
        "\n{} papers, {} essential, average {:.1}",
        summary.total, summary.essential, summary.average_score
    );

    econvery::logging::shutdown();
    Ok(())
}
