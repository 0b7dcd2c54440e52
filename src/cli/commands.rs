//! Command implementations for the idiom-graph CLI.

use std::time::Instant;

use log::info;

use crate::chain::{LogProgress, NoProgress, ProgressObserver};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::PipelineConfig;
use crate::error::{IdiomGraphError, Result};
use crate::pipeline::{Pipeline, PipelineOutput};
use crate::render::{DotRenderer, GraphRenderer, GraphvizCommand, JsonRenderer, write_artifact};

/// Execute a CLI command.
pub fn execute_command(args: IdiomGraphArgs) -> Result<()> {
    match &args.command {
        Command::Generate(generate_args) => generate_graph(generate_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Resolve the configuration: defaults, then the config file, then flags.
pub fn resolve_config(args: &PipelineArgs) -> Result<PipelineConfig> {
    let base = match &args.config {
        Some(path) => PipelineConfig::from_json_file(path)?,
        None => PipelineConfig::default(),
    };
    Ok(base.with_overrides(&args.overrides()))
}

fn run_pipeline(args: &PipelineArgs, progress: &mut dyn ProgressObserver) -> Result<PipelineOutput> {
    let config = resolve_config(args)?;
    info!("Using configuration {config:?}");

    let pipeline = Pipeline::new(config);
    let mut rng = pipeline.rng();
    pipeline.run_path(&args.input, &mut rng, progress)
}

/// Build the graph and write it to disk.
fn generate_graph(args: GenerateArgs, cli_args: &IdiomGraphArgs) -> Result<()> {
    let start_time = Instant::now();

    if args.emit != EmitFormat::Dot && args.graphviz_format.is_some() {
        return Err(IdiomGraphError::invalid_config(
            "--graphviz-format requires --emit dot",
        ));
    }

    let output = if args.progress {
        run_pipeline(&args.pipeline, &mut LogProgress::new("Generating graph"))?
    } else {
        run_pipeline(&args.pipeline, &mut NoProgress)?
    };

    if cli_args.verbosity() > 0 {
        println!("Rendering...");
    }
    let renderer: Box<dyn GraphRenderer> = match args.emit {
        EmitFormat::Dot => Box::new(DotRenderer::new(&args.name)),
        EmitFormat::Json => Box::new(JsonRenderer::new(&args.name, cli_args.pretty)),
    };
    let path = args.output_path(renderer.extension());
    let text = renderer.render(&output.graph)?;
    write_artifact(&path, &text)?;

    let image = match &args.graphviz_format {
        Some(format) => Some(GraphvizCommand::new(format).run(&path)?),
        None => None,
    };

    output_result(
        "Done!",
        &GenerateResult {
            summary: output.summary,
            output: path.to_string_lossy().to_string(),
            image: image.map(|path| path.to_string_lossy().to_string()),
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Build the graph and report its statistics only.
fn show_stats(args: StatsArgs, cli_args: &IdiomGraphArgs) -> Result<()> {
    let output = run_pipeline(&args.pipeline, &mut NoProgress)?;
    output_result("Idiom graph statistics", &output.summary, cli_args)
}
