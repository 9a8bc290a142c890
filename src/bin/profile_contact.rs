use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use contact_profiler::analysis::{AnalysisRequest, PersonalityAnalyzer};
use contact_profiler::render;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Personality profile and communication strategy for a contact", long_about = None)]
struct Args {
    /// Full name of the contact
    #[arg(long)]
    name: String,

    /// Company the contact works for
    #[arg(long, default_value = "")]
    company: String,

    /// Profile URL, e.g. LinkedIn
    #[arg(long, default_value = "")]
    contact_url: String,

    /// Email address
    #[arg(long, default_value = "")]
    email: String,

    /// Free-text notes about the contact
    #[arg(long, default_value = "")]
    context: String,

    /// Print the raw JSON envelope instead of the markdown report
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("contact_profiler=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.name.trim().is_empty() {
        eprintln!("{}", render::render_missing_name());
        return Ok(ExitCode::from(2));
    }

    let request = AnalysisRequest::new(args.name, args.company)
        .with_contact_url(args.contact_url)
        .with_email(args.email)
        .with_context(args.context);

    match PersonalityAnalyzer::new().analyze_contact(&request).await {
        Ok(envelope) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&envelope)?);
            } else {
                println!("{}", render::render_markdown(&envelope));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            eprintln!("{}", render::render_failure(&failure));
            Ok(ExitCode::FAILURE)
        }
    }
}
