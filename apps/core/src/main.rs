// Msaada terminal harness
// Drives the triage core from stdin: chat, questionnaire scoring, resource search.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;

use msaada_core::assessment::{Answers, AssessmentRun, AssessmentScorer, ItemId, RiskSummary};
use msaada_core::config::TriageConfig;
use msaada_core::logging::init_tracing;
use msaada_core::models::LanguagePreference;
use msaada_core::notice::{ChannelNoticeSink, CrisisNotice};
use msaada_core::resources::{CategoryFilter, ResourceIndex};
use msaada_core::session::ChatSession;
use msaada_core::triage::TriageAnalyzer;

#[derive(Parser)]
#[command(name = "msaada")]
#[command(about = "Mental health triage: chat, self-assessment, resource directory", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat line by line on stdin; replies are printed after the configured delay.
    Chat,
    /// Score a completed questionnaire, e.g. `--answers 1=3,2=3,3=2,4=2,5=0`.
    Assess {
        #[arg(short, long)]
        answers: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search the resource directory.
    Resources {
        #[arg(short, long, default_value = "")]
        query: String,
        #[arg(short, long, default_value = "all")]
        category: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TriageConfig::from_env().context("Invalid configuration")?;
    init_tracing(config.log_format)?;

    match cli.command {
        Commands::Chat => run_chat(&config).await,
        Commands::Assess { answers, json } => run_assess(&config, &answers, json),
        Commands::Resources { query, category } => run_resources(&config, &query, &category),
    }
}

async fn run_chat(config: &TriageConfig) -> Result<()> {
    let (sink, mut notices) = ChannelNoticeSink::new();
    let analyzer = Arc::new(TriageAnalyzer::from_config(config));
    let mut session = ChatSession::new(analyzer, Arc::new(sink));
    let delay = Duration::from_millis(config.reply_delay_ms);

    println!("{}", session.transcript()[0].content);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(outcome) = session.submit(&line) else {
            continue;
        };

        tokio::time::sleep(delay).await;
        println!("> {}", outcome.reply);
        print_notices(&mut notices);
    }

    info!(
        session_id = %session.id(),
        messages = session.transcript().len(),
        "Chat session closed"
    );
    Ok(())
}

fn print_notices(notices: &mut UnboundedReceiver<CrisisNotice>) {
    while let Ok(notice) = notices.try_recv() {
        println!("!! {}", notice.render().replace('\n', "\n!! "));
    }
}

fn run_assess(config: &TriageConfig, raw: &str, json: bool) -> Result<()> {
    let scorer =
        AssessmentScorer::with_thresholds(config.assessment_high_percent, config.assessment_medium_percent);
    let mut run = AssessmentRun::with_scorer(scorer);
    for (id, value) in parse_answers(raw)? {
        run.answer_item(id, value)?;
    }

    let (sink, mut notices) = ChannelNoticeSink::new();
    let result = run.complete(&sink)?;
    let summary = RiskSummary::for_result(&result);

    if json {
        let body = serde_json::json!({ "result": result, "summary": summary });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!(
            "Score: {}/{} ({:.0}%)",
            result.total_score, result.max_score, result.percentage
        );
        println!("{}", summary.render(config.display_language));
    }

    print_notices(&mut notices);
    Ok(())
}

/// Parses `id=value` pairs separated by commas.
fn parse_answers(raw: &str) -> Result<Answers> {
    let mut answers = Answers::new();
    for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (id, value) = pair
            .split_once('=')
            .with_context(|| format!("Expected id=value, got '{}'", pair))?;
        let id: ItemId = id.trim().parse().with_context(|| format!("Bad item id in '{}'", pair))?;
        let value: u8 = value.trim().parse().with_context(|| format!("Bad answer in '{}'", pair))?;
        answers.insert(id, value);
    }
    Ok(answers)
}

fn run_resources(config: &TriageConfig, query: &str, category: &str) -> Result<()> {
    let index = ResourceIndex::load(config)?;
    let language = config.display_language;
    let results = index.search(query, CategoryFilter::parse(category));

    if results.is_empty() {
        let empty = match language {
            LanguagePreference::Primary => "No resources found matching your criteria.",
            LanguagePreference::Alternate => "Hakuna rasilimali zilizopatikana.",
        };
        println!("{}", empty);
        return Ok(());
    }

    for resource in results {
        let flag = if resource.is_emergency { " [emergency]" } else { "" };
        println!("[{}] {} ({}){}", resource.id, resource.name.get(language), resource.category, flag);
        println!("    {}", resource.description.get(language));
        if let Some(phone) = &resource.contact.phone {
            println!("    phone: {}", phone);
        }
        if let Some(website) = &resource.contact.website {
            println!("    web: {}", website);
        }
        if let Some(hours) = &resource.contact.hours {
            println!("    hours: {}", hours);
        }
    }
    Ok(())
}
