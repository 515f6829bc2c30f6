use std::num::IntErrorKind;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use smarthr_dashboard::dashboard::Dashboard;
use smarthr_dashboard::models::Granularity;
use smarthr_dashboard::{config, export, insights, report, resolver};

#[derive(Parser)]
#[command(name = "smarthr-dashboard")]
#[command(about = "Sample workforce metrics behind the SmartHR dashboard demo", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Time bucketing of the attendance view
    #[arg(long, global = true, value_enum, default_value_t = Granularity::Weekly)]
    granularity: Granularity,
    /// Department filter for the daily view (unknown names use the default series)
    #[arg(long, global = true, default_value = "All")]
    segment: String,
    #[command(flatten)]
    edits: EditArgs,
    #[arg(long, global = true, env = "SMARTHR_LOG", default_value = "info")]
    log_level: String,
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

/// Manual overrides, as entered through the dashboard form.
#[derive(Args, Debug, Default)]
struct EditArgs {
    /// Override one attendance bucket, e.g. `--attendance Mon=80`
    #[arg(long = "attendance", global = true, value_parser = parse_assignment)]
    attendance: Vec<(String, i64)>,
    /// Override one funnel stage, e.g. `--stage Hired=12`
    #[arg(long = "stage", global = true, value_parser = parse_assignment)]
    stages: Vec<(String, i64)>,
    /// Override the policy violation count
    #[arg(long, global = true, allow_hyphen_values = true, value_parser = parse_form_int)]
    violations: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved view
    View {
        #[arg(long)]
        json: bool,
    },
    /// Generate a markdown report
    Report {
        #[arg(long, default_value = "dashboard-report.md")]
        out: PathBuf,
    },
    /// Export the view as CSV
    Export {
        #[arg(long, default_value = "dashboard.csv")]
        out: PathBuf,
    },
    /// Ask the summarization service for an executive summary
    Insights,
}

fn parse_assignment(raw: &str) -> Result<(String, i64), String> {
    let (label, value) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected LABEL=VALUE, got '{raw}'"))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(format!("missing label in '{raw}'"));
    }
    let value = parse_form_int(value).map_err(|err| format!("invalid value in '{raw}': {err}"))?;
    Ok((label.to_string(), value))
}

/// Parses a form number, saturating out-of-range input so it can be clamped later.
fn parse_form_int(raw: &str) -> Result<i64, String> {
    match raw.trim().parse::<i64>() {
        Ok(value) => Ok(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(err.to_string()),
        },
    }
}

fn init_logging(cli: &Cli) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    let subscriber = tracing_subscriber::registry().with(env_filter);

    match cli.log_format {
        LogFormat::Json => subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => subscriber
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn apply_edits(dashboard: &mut Dashboard, edits: &EditArgs) {
    for (label, percent) in &edits.attendance {
        if !dashboard.edit_attendance(label, *percent) {
            warn!(%label, "no attendance bucket with this label");
        }
    }
    for (label, count) in &edits.stages {
        if !dashboard.edit_stage(label, *count) {
            warn!(%label, "no recruitment stage with this label");
        }
    }
    if let Some(violations) = edits.violations {
        dashboard.set_violations(violations);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let mut dashboard = Dashboard::from_view(resolver::resolve_named(cli.granularity, &cli.segment));
    apply_edits(&mut dashboard, &cli.edits);
    let view = dashboard.current();
    info!(
        granularity = %view.granularity,
        segment = %view.segment,
        edited = dashboard.is_edited(),
        "view resolved"
    );

    match cli.command {
        Commands::View { json } => {
            if json {
                let payload = serde_json::json!({
                    "view": view,
                    "average_attendance": resolver::average_attendance(&view.attendance),
                    "edited": dashboard.is_edited(),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
                return Ok(());
            }

            println!("{} view for {}:", view.granularity, view.segment);
            for point in &view.attendance {
                println!(
                    "- {} {}% present / {}% absent",
                    point.label(),
                    point.present_percent(),
                    point.absent_percent()
                );
            }
            match resolver::average_attendance(&view.attendance) {
                Some(average) => println!("Average attendance: {average}%"),
                None => println!("No attendance data for this view."),
            }
            println!("Recruitment funnel:");
            for stage in &view.recruitment {
                println!("- {} {}", stage.label, stage.count);
            }
            println!("Policy violations: {}", view.violations);
        }
        Commands::Report { out } => {
            let today = chrono::Utc::now().date_naive();
            let report = report::build_report(view, today, dashboard.is_edited());
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Export { out } => {
            let file = std::fs::File::create(&out)
                .with_context(|| format!("failed to create {}", out.display()))?;
            export::write_csv(view, file)?;
            println!("Export written to {}.", out.display());
        }
        Commands::Insights => {
            let snapshot = insights::MetricsSnapshot::from_view(view);
            let config = config::InsightConfig::from_env();
            let text = insights::insight_text(&config, &snapshot).await;
            println!("{text}");
        }
    }

    Ok(())
}
