use anyhow::Context;
use polyevo::config::ConfigManager;
use polyevo::engines::generation::{ConsoleProgressCallback, EvolutionEngine, Population};
use polyevo::render::{write_summary, Recorder};
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // polyevo [config.toml]
    let args: Vec<String> = env::args().collect();
    let manager = ConfigManager::new();
    manager
        .load(args.get(1))
        .context("Failed to load configuration")?;
    let config = manager.get();

    let population = Population::new(
        config.samples.inputs.clone(),
        config.samples.outputs.clone(),
        &config.population,
    )?;
    let generations = config.run.generations_for(population.samples().len());

    let mut engine = EvolutionEngine::new(population, generations);
    if config.render.enabled {
        engine = engine.with_recorder(Recorder::from_config(&config.render)?);
    }

    let summary = engine.run(ConsoleProgressCallback)?;

    if let Some(path) = &config.render.summary_file {
        write_summary(path, &summary)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
    }

    println!("calculated best fit expression: {}", summary.best_fit);
    println!("score: {}", summary.best_score);
    Ok(())
}
