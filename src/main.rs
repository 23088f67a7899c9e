//! growvec CLI - camelCase, split, substitute and slice text with growvec

use anyhow::Context;
use clap::Parser;
use growvec::cli::{Args, SubCommand};
use growvec::{execute_command, format_output, ExecutionContext, GrowthPolicy, OutputFormat};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let policy = GrowthPolicy::new(args.growth_factor, args.initial_capacity)
        .context("invalid --growth-factor / --initial-capacity")?;

    let ctx = ExecutionContext {
        policy,
        output_format: OutputFormat::from_json_flag(args.json),
        verbose: args.verbose,
    };

    let result = execute_command(&args.command, &ctx).with_context(|| match &args.command {
        SubCommand::Camel { file: Some(path), .. } => {
            format!("failed to camel-case {}", path.display())
        }
        SubCommand::Camel { .. } => "failed to camel-case input".to_string(),
        SubCommand::Split { .. } => "failed to split text".to_string(),
        SubCommand::Substitute { .. } => "failed to substitute text".to_string(),
        SubCommand::Slice { .. } => "failed to slice text".to_string(),
        SubCommand::Growth { .. } => "failed to build growth schedule".to_string(),
    })?;

    println!("{}", format_output(&result, &ctx.output_format));
    Ok(())
}
