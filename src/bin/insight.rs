use anyhow::{Context, bail};
use clap::Parser;
use salescope::application::analytics::AnalyzedDataset;
use salescope::application::session::SessionState;
use salescope::application::system::Application;
use salescope::config::Config;
use salescope::domain::insight::{InsightKind, ReportArtifact};
use salescope::domain::prediction::PredictionInput;
use salescope::infrastructure::dataset::load_csv;
use std::path::PathBuf;
use tracing::{Level, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless sales prediction and GenAI insights", long_about = None)]
struct Args {
    /// Units ordered (1-100)
    #[arg(long, default_value_t = 5)]
    quantity: u32,

    /// Discount rate (0.0-1.0)
    #[arg(long, default_value_t = 0.1)]
    discount: f64,

    /// Month of the order (1-12)
    #[arg(long, default_value_t = 6)]
    month: u32,

    /// Quarter of the order (1-4)
    #[arg(long, default_value_t = 2)]
    quarter: u32,

    /// Sales CSV providing the aggregate totals used in recommend/report prompts
    #[arg(long)]
    data: Option<PathBuf>,

    /// Insight to request after predicting: explain, recommend or report
    #[arg(long)]
    insight: Option<InsightKind>,

    /// Where to write the PDF when --insight report (defaults to REPORT_OUTPUT_PATH)
    #[arg(long)]
    pdf: Option<PathBuf>,
}

/// Recommend and report prompts embed dataset totals, so they need `--data`.
fn check_args(args: &Args) -> anyhow::Result<()> {
    if matches!(args.insight, Some(InsightKind::Recommend | InsightKind::Report)) && args.data.is_none() {
        bail!("--data <csv> is required for recommend and report insights");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    check_args(&args)?;

    let config = Config::from_env()?;
    let app = Application::build(config);
    let mut session = SessionState::new();

    if let Some(path) = &args.data {
        let dataset = load_csv(path)?;
        let analyzed = AnalyzedDataset::analyze(path.display().to_string(), dataset)?;
        info!(
            "Loaded {} rows (sales={:.2}, profit={:.2})",
            analyzed.summary.rows, analyzed.summary.total_sales, analyzed.summary.total_profit
        );
        session.set_dataset(analyzed);
    }

    let input = PredictionInput {
        quantity: args.quantity,
        discount: args.discount,
        month: args.month,
        quarter: args.quarter,
    };

    let record = app.orchestrator.run(&mut session, input)?;

    println!("\n══════════════════════════════════════════════════════");
    println!("  PREDICTION");
    println!("══════════════════════════════════════════════════════");
    println!("  Predicted Sales:  ${:.2}", record.result.sales_estimate);
    println!("  Profit Category:  {}", record.result.profit_category.display_name());
    if record.result.is_negative_estimate() {
        println!("  (model returned a negative estimate)");
    }

    let Some(kind) = args.insight else {
        return Ok(());
    };

    let aggregate = session.aggregate().unwrap_or_default();
    let response = app
        .dispatcher
        .dispatch(kind, session.prediction(), &aggregate)
        .await?;

    println!("\n══════════════════════════════════════════════════════");
    println!("  {}", kind.button_label().to_uppercase());
    println!("══════════════════════════════════════════════════════\n");
    println!("{}", response.text);

    match response.artifact {
        Some(ReportArtifact::Ready(bytes)) => {
            let path = args
                .pdf
                .unwrap_or_else(|| app.config.report_output_path.clone());
            std::fs::write(&path, &bytes)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("\n  PDF report written to {}", path.display());
        }
        Some(ReportArtifact::Failed(reason)) => bail!("PDF export failed: {}", reason),
        None => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("insight").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_match_dashboard_form() {
        let args = parse(&[]);
        let defaults = PredictionInput::default();
        assert_eq!(args.quantity, defaults.quantity);
        assert_eq!(args.discount, defaults.discount);
        assert_eq!(args.month, defaults.month);
        assert_eq!(args.quarter, defaults.quarter);
        assert!(check_args(&args).is_ok());
    }

    #[test]
    fn test_dataset_required_for_recommend_and_report() {
        for kind in ["recommend", "report"] {
            let err = check_args(&parse(&["--insight", kind])).unwrap_err();
            assert!(err.to_string().contains("--data"), "{}", err);
            assert!(check_args(&parse(&["--insight", kind, "--data", "superstore.csv"])).is_ok());
        }
        assert!(check_args(&parse(&["--insight", "explain"])).is_ok());
    }

    #[test]
    fn test_unknown_insight_rejected_by_parser() {
        assert!(Args::try_parse_from(["insight", "--insight", "summarize"]).is_err());
    }
}
