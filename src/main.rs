//! commitwright - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use git2::Repository;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use commitwright::changeset::{GitSource, load_or_empty};
use commitwright::classify::classify;
use commitwright::format::{format_file_list, format_stats, truncate_text};
use commitwright::llm::{GeneratorConfig, OpenAiGenerator, suggest};
use commitwright::message::{
    CommitMessage, CommitType, MAX_SUBJECT_LENGTH, ValidationRules, commit_staged,
    synthesize_body, validate_with,
};

/// Suggest conventional commit messages for staged changes.
#[derive(Parser, Debug)]
#[command(name = "commitwright")]
#[command(about = "Suggest conventional commit messages for staged changes")]
#[command(version)]
struct Cli {
    /// Repository to inspect
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// Number of suggestions to print
    #[arg(short = 'n', long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=3))]
    count: u8,

    /// Append a body with statistics to the first suggestion
    #[arg(long)]
    body: bool,

    /// Ask an LLM for the first suggestion (needs OPENAI_API_KEY)
    #[arg(long)]
    llm: bool,

    /// Model to use with --llm
    #[arg(long)]
    model: Option<String>,

    /// Maximum subject length accepted by validation
    #[arg(long, default_value_t = MAX_SUBJECT_LENGTH)]
    max_subject_length: usize,

    /// Commit the staged changes with the first suggestion
    #[arg(long)]
    commit: bool,

    /// Commit even if the message fails validation
    #[arg(long, requires = "commit")]
    force: bool,

    /// Print the analysis and suggestions as JSON
    #[arg(long)]
    json: bool,

    /// List conventional commit types and exit
    #[arg(long)]
    list_types: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list_types {
        for commit_type in CommitType::ALL {
            println!("{:<9} {}", commit_type.as_str(), commit_type.description());
        }
        return Ok(());
    }

    // Step 1: Read staged changes
    let changes = load_or_empty(&GitSource::new(&cli.repo));
    if changes.is_empty() {
        println!("No staged changes. Stage files with `git add` first.");
        return Ok(());
    }

    // Step 2: Classify
    let analysis = classify(&changes);

    // Step 3: Suggest
    let count = usize::from(cli.count);
    let suggestions = if cli.llm {
        let mut config = GeneratorConfig::from_env();
        if let Some(model) = &cli.model {
            config = config.with_model(model.clone());
        }
        let generator = OpenAiGenerator::new(config).context("Failed to set up LLM client")?;
        suggest(&analysis, Some(&generator), count).await
    } else {
        suggest::<OpenAiGenerator>(&analysis, None, count).await
    };

    if let Some(reason) = &suggestions.fallback_reason {
        eprintln!(
            "Warning: LLM unavailable ({}). Using local suggestions.",
            truncate_text(&reason.to_string(), 120)
        );
    }

    let mut messages = suggestions.messages;
    if cli.body
        && let Some(first) = messages.first_mut()
        && let Some(body) = synthesize_body(&analysis)
    {
        *first = CommitMessage {
            subject: first.clone(),
            body: Some(body),
        }
        .format();
    }

    let rules = ValidationRules {
        max_subject_length: cli.max_subject_length,
    };
    let validations: Vec<_> = messages.iter().map(|m| validate_with(m, &rules)).collect();

    // Step 4: Report
    if cli.json {
        let output = json!({
            "analysis": analysis,
            "source": suggestions.source.to_string(),
            "suggestions": messages
                .iter()
                .zip(&validations)
                .map(|(message, validation)| json!({
                    "message": message,
                    "valid": validation.is_valid(),
                    "errors": validation.errors,
                }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_analysis(&analysis);
        println!("\nSuggested commit messages ({}):", suggestions.source);
        for (i, (message, validation)) in messages.iter().zip(&validations).enumerate() {
            println!("{}. {}", i + 1, message.replace('\n', "\n   "));
            for error in &validation.errors {
                println!("   ! {error}");
            }
        }
    }

    // Step 5: Commit
    if cli.commit {
        let (message, validation) = messages
            .first()
            .zip(validations.first())
            .context("No suggestion to commit with")?;

        if !validation.is_valid() && !cli.force {
            bail!(
                "First suggestion failed validation: {}. Use --force to commit anyway.",
                validation.errors.join("; ")
            );
        }

        let repo = Repository::discover(&cli.repo)
            .context("Not a git repository. Run commitwright from within a git repository.")?;
        let oid = commit_staged(&repo, message).context("Failed to create commit")?;
        println!("✓ Committed {}", &oid.to_string()[..7]);
    }

    Ok(())
}

/// Log to stderr, honouring RUST_LOG when set.
fn init_tracing(verbose: bool) {
    let default = if verbose { "commitwright=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_analysis(analysis: &commitwright::Analysis) {
    let status = &analysis.status;
    println!("Change type: {}", analysis.change_type);
    println!(
        "Scope:       {}",
        analysis.scope.as_deref().unwrap_or("none")
    );
    println!("Added:       {}", format_file_list(&status.added, 5));
    println!("Modified:    {}", format_file_list(&status.modified, 5));
    println!("Deleted:     {}", format_file_list(&status.deleted, 5));
    if !status.renamed.is_empty() {
        println!("Renamed:     {}", format_file_list(&status.renamed, 5));
    }
    println!(
        "Lines:       {}",
        format_stats(analysis.stats.insertions, analysis.stats.deletions)
    );
    if !analysis.entities.is_empty() {
        println!("Entities:    {}", format_file_list(&analysis.entities, 5));
    }
}
