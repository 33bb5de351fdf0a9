//! CLI entry point for promptline.

mod cli;

use clap::Parser;
use promptline::choice::RawChoice;
use promptline::config::{load_config, Config};
use promptline::error::ConfigError;
use promptline::pipeline::{Transform, Verdict};
use promptline::prompt::PromptConfig;
use promptline::render::TermRenderer;
use promptline::select::SelectPrompt;
use promptline::terminal::spawn_pump;
use promptline::text::TextPrompt;

#[tokio::main]
async fn main() {
    init_tracing();
    let args = cli::Args::parse();

    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // Apply CLI overrides.
    if args.no_color {
        config.display.color = false;
    }
    if let Some(page_size) = args.page_size {
        if page_size == 0 {
            eprintln!("error: --page-size must be at least 1");
            std::process::exit(1);
        }
        config.display.page_size = page_size;
    }

    match run(args.command, &config).await {
        Ok(answer) => println!("{answer}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(command: cli::Command, config: &Config) -> Result<String, Box<dyn std::error::Error>> {
    let mut renderer = TermRenderer::new(config.display.color);
    let (mut source, pump) = spawn_pump();

    let answer = match command {
        cli::Command::Select {
            message,
            choice,
            choices_json,
            default,
            default_index,
        } => {
            let choices = parse_choices(choice, choices_json.as_deref())?;
            let mut prompt_config = PromptConfig::new(message)
                .choices(choices)
                .page_size(config.display.page_size);
            if let Some(value) = default {
                prompt_config = prompt_config.default_value(value);
            } else if let Some(index) = default_index {
                prompt_config = prompt_config.default_index(index);
            }
            let mut prompt = SelectPrompt::new(prompt_config)?;
            prompt.run(&mut source, &mut renderer).await?
        }
        cli::Command::Input {
            message,
            trim,
            required,
        } => {
            let mut prompt_config = PromptConfig::new(message);
            if trim {
                prompt_config =
                    prompt_config.filter(|raw| Transform::Immediate(raw.trim().to_string()));
            }
            if required {
                prompt_config = prompt_config.validate(|value| {
                    if value.is_empty() {
                        Transform::Immediate(Verdict::reject("an answer is required"))
                    } else {
                        Transform::Immediate(Verdict::Accept)
                    }
                });
            }
            let mut prompt = TextPrompt::new(prompt_config)?;
            prompt.run(&mut source, &mut renderer).await?
        }
    };

    // Dropping the source stops the pump; wait for it so raw mode is
    // restored before the answer hits stdout.
    drop(source);
    if let Ok(Err(e)) = pump.await {
        eprintln!("warning: terminal pump failed: {e}");
    }

    Ok(answer)
}

fn parse_choices(
    flags: Vec<String>,
    json: Option<&str>,
) -> Result<Vec<RawChoice>, ConfigError> {
    match json {
        Some(text) => serde_json::from_str(text)
            .map_err(|e| ConfigError::Invalid(format!("invalid --choices-json: {e}"))),
        None => Ok(flags.into_iter().map(RawChoice::from).collect()),
    }
}

fn init_tracing() {
    // Diagnostics are opt-in; anything chattier would fight the prompt UI
    // for stderr.
    let filter = tracing_subscriber::EnvFilter::try_from_env("PROMPTLINE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
