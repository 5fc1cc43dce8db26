use anyhow::{Context, Result};
use ngx_scaffold::cli::output::{format_failure, format_next_steps, format_step_state, format_welcome, style};
use ngx_scaffold::cli::progress::SpinnerReporter;
use ngx_scaffold::cli::Cli;
use ngx_scaffold::core::config::ScaffoldConfig;
use ngx_scaffold::execution::NoopReporter;
use ngx_scaffold::{scaffold_pipeline, ExecutionEngine, PipelineResult, ShellCommandRunner, TemplateStore};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging; stderr keeps it apart from the spinners
    let default_level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to set logging subscriber")?;

    let config = ScaffoldConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let config = cli.apply_overrides(config);
    let options = cli.resolve_options(&config).context("Invalid options")?;

    let output_dir = match &config.output_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let templates = config
        .templates_dir
        .clone()
        .map(TemplateStore::new)
        .unwrap_or_default();
    let runner = ShellCommandRunner::new(config.shell(), config.timeout_secs());

    let engine = ExecutionEngine::new(runner, templates, output_dir);
    let pipeline = scaffold_pipeline();

    let result = if cli.json {
        engine.execute(&pipeline, &options, &mut NoopReporter).await
    } else {
        println!("{}\n", format_welcome(&options));
        let mut reporter = SpinnerReporter::new();
        engine.execute(&pipeline, &options, &mut reporter).await
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(result.report())?);
    }

    match result {
        PipelineResult::Success(_) => {
            if !cli.json {
                println!("{}", format_next_steps(&options));
            }
            Ok(())
        }
        PipelineResult::Failed {
            step, error, report, ..
        } => {
            if !cli.json {
                eprintln!("\n{}", format_failure(&step, &error.to_string(), &report));
                if cli.verbose {
                    for record in &report.steps {
                        eprintln!("  {} {}", format_step_state(&record.state), style(&record.name).dim());
                    }
                }
            }
            std::process::exit(1);
        }
    }
}
