use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use wageflow::client::{ApiClient, DEFAULT_API_PREFIX};
use wageflow::export::format_currency;
use wageflow::views::{
    Notice,
    attendance::{AttendanceForm, AttendanceView, DayStatus},
    dashboard::{DashboardView, SHORTCUTS},
    reports::{NO_DATA, ReportPeriod, ReportsView},
    workers::{WorkerForm, WorkersView},
};

#[derive(Parser, Debug)]
#[command(author, version, about = "WageFlow admin console", long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "WAGEFLOW_API_URL", default_value = "http://127.0.0.1:8001")]
    api_url: String,

    /// Prefix the server mounts the API under
    #[arg(long, env = "API_PREFIX", default_value = DEFAULT_API_PREFIX)]
    api_prefix: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Today's snapshot
    Dashboard,
    /// Manage workers
    #[command(subcommand)]
    Workers(WorkersCommand),
    /// Daily attendance
    #[command(subcommand)]
    Attendance(AttendanceCommand),
    /// Monthly wage reports
    #[command(subcommand)]
    Report(ReportCommand),
}

#[derive(Subcommand, Debug)]
enum WorkersCommand {
    List {
        /// Case-insensitive match on name or worker ID
        #[arg(short, long, default_value = "")]
        search: String,
    },
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        worker_id: String,
        #[arg(long)]
        rate: f64,
    },
    Edit {
        /// Internal worker id
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        rate: Option<f64>,
    },
    Delete {
        /// Internal worker id
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum AttendanceCommand {
    Today,
    Mark {
        /// Internal id or worker ID
        #[arg(long)]
        worker: String,
        /// HH:MM
        #[arg(long)]
        clock_in: String,
        /// HH:MM
        #[arg(long)]
        clock_out: String,
    },
}

#[derive(Args, Debug)]
struct PeriodArgs {
    #[arg(long)]
    year: Option<i32>,
    #[arg(long)]
    month: Option<u32>,
}

impl PeriodArgs {
    fn resolve(&self) -> ReportPeriod {
        let current = ReportPeriod::current();
        ReportPeriod {
            year: self.year.unwrap_or(current.year),
            month: self.month.unwrap_or(current.month),
        }
    }
}

#[derive(Subcommand, Debug)]
enum ReportCommand {
    Show {
        #[command(flatten)]
        period: PeriodArgs,
    },
    Export {
        #[command(flatten)]
        period: PeriodArgs,
        /// Directory for the CSV file
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
}

fn report(notice: Notice) -> Result<()> {
    if notice.is_error() {
        bail!(notice.message);
    }
    println!("{notice}");
    Ok(())
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

async fn dashboard(api: &ApiClient) -> Result<()> {
    let mut view = DashboardView::new();
    view.load(api).await.map_err(|n| anyhow::anyhow!(n.message))?;

    for card in view.cards() {
        println!("{:<15} {}", card.label, card.value);
    }
    println!();
    for shortcut in SHORTCUTS {
        println!("{:<15} {}", shortcut.label, shortcut.path);
    }
    Ok(())
}

async fn workers(api: &ApiClient, command: WorkersCommand) -> Result<()> {
    let mut view = WorkersView::new();
    view.load(api).await.map_err(|n| anyhow::anyhow!(n.message))?;

    match command {
        WorkersCommand::List { search } => {
            view.set_search(search);
            if let Some(empty) = view.empty_message() {
                println!("{empty}");
                return Ok(());
            }
            for w in view.filtered() {
                println!(
                    "{:<38} {:<10} {:<24} {}",
                    w.id,
                    w.worker_id,
                    w.name,
                    format_currency(w.daily_wage_rate)
                );
            }
            Ok(())
        }
        WorkersCommand::Add { name, worker_id, rate } => {
            let form = WorkerForm {
                name,
                worker_id,
                daily_wage_rate: rate,
            };
            report(view.save(api, form, None).await)
        }
        WorkersCommand::Edit { id, name, rate } => {
            let current = view
                .workers()
                .iter()
                .find(|w| w.id == id)
                .cloned()
                .with_context(|| format!("no worker with id {id}"))?;
            let form = WorkerForm {
                name: name.unwrap_or(current.name),
                worker_id: current.worker_id,
                daily_wage_rate: rate.unwrap_or(current.daily_wage_rate),
            };
            report(view.save(api, form, Some(id.as_str())).await)
        }
        WorkersCommand::Delete { id, yes } => {
            let outcome = view
                .delete(api, &id, |w| {
                    yes || confirm(&format!("Delete worker {} ({})?", w.name, w.worker_id))
                })
                .await;
            match outcome {
                Some(notice) => report(notice),
                None => {
                    println!("Cancelled");
                    Ok(())
                }
            }
        }
    }
}

async fn attendance(api: &ApiClient, command: AttendanceCommand) -> Result<()> {
    let mut view = AttendanceView::new();
    view.load(api).await.map_err(|n| anyhow::anyhow!(n.message))?;

    match command {
        AttendanceCommand::Today => {
            if view.workers().is_empty() {
                println!("No workers available");
            }
            for row in view.rows() {
                let status = match row.status {
                    DayStatus::Marked {
                        hours_worked,
                        wage_earned,
                    } => format!(
                        "Present  {:.2}h  {}",
                        hours_worked,
                        format_currency(wage_earned)
                    ),
                    DayStatus::NotMarked => "Not marked".to_string(),
                };
                println!("{:<24} {:<10} {}", row.worker.name, row.worker.worker_id, status);
            }
            Ok(())
        }
        AttendanceCommand::Mark {
            worker,
            clock_in,
            clock_out,
        } => {
            // Accept the worker ID shown in lists as well as the internal id
            let worker = view
                .workers()
                .iter()
                .find(|w| w.id == worker || w.worker_id.eq_ignore_ascii_case(&worker))
                .map(|w| w.id.clone())
                .unwrap_or(worker);
            let form = AttendanceForm {
                worker: Some(worker),
                clock_in,
                clock_out,
            };
            report(view.submit(api, &form).await)
        }
    }
}

async fn reports(api: &ApiClient, command: ReportCommand) -> Result<()> {
    match command {
        ReportCommand::Show { period } => {
            let mut view = ReportsView::new(period.resolve());
            view.load(api).await.map_err(|n| anyhow::anyhow!(n.message))?;

            if view.rows().is_empty() {
                println!("{NO_DATA}");
                return Ok(());
            }
            for r in view.rows() {
                println!(
                    "{:<24} {:<10} {:>12} {:>4} {:>9.2}h {:>14}",
                    r.worker_name,
                    r.worker_number,
                    format_currency(r.daily_wage_rate),
                    r.present_days,
                    r.total_hours,
                    format_currency(r.total_wages)
                );
            }
            let totals = view.totals();
            println!(
                "{:<57} {:>9.2}h {:>14}",
                "TOTAL",
                totals.hours,
                format_currency(totals.wages)
            );
            Ok(())
        }
        ReportCommand::Export { period, out } => {
            let mut view = ReportsView::new(period.resolve());
            view.load(api).await.map_err(|n| anyhow::anyhow!(n.message))?;

            let Some(export) = view.export()? else {
                bail!(NO_DATA);
            };
            let path = out.join(&export.file_name);
            std::fs::write(&path, export.content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Report exported successfully: {}", path.display());
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let api = ApiClient::with_prefix(&cli.api_url, &cli.api_prefix)?;

    match cli.command {
        Command::Dashboard => dashboard(&api).await,
        Command::Workers(cmd) => workers(&api, cmd).await,
        Command::Attendance(cmd) => attendance(&api, cmd).await,
        Command::Report(cmd) => reports(&api, cmd).await,
    }
}
