//! pmdash CLI - project dashboard statistics, search, and assistant.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pmdash::{
    answer, highlight, priority_board, run_search, ApiClient, AssistantReply, ChartSeries,
    DashboardStats, FlatTask, Priority, SearchOutcome, Snapshot,
};

/// pmdash CLI - statistics, search, and assistant over a remote
/// project-management API.
#[derive(Parser)]
#[command(name = "pmdash")]
#[command(about = "Project management dashboard core")]
#[command(version)]
pub struct Cli {
    /// Base URL of the project-management API
    #[arg(long, env = "PMDASH_API_URL", global = true, default_value = "")]
    api_url: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show summary statistics and distributions
    Stats {
        /// Limit to a single project id
        #[arg(long)]
        project: Option<i64>,
    },

    /// Search projects and tasks
    Search {
        /// Search query (matched literally, case-insensitive)
        query: String,
    },

    /// Show the task board grouped by priority
    Board {
        /// Highlight a single priority column
        #[arg(long)]
        priority: Option<String>,
    },

    /// Ask the assistant about the dataset
    Ask {
        /// The question
        question: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("pmdash=debug,info")
    } else {
        EnvFilter::new("pmdash=info,warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    if cli.api_url.is_empty() {
        anyhow::bail!("no API URL: pass --api-url or set PMDASH_API_URL");
    }

    let client = ApiClient::new(&cli.api_url)?;
    let snapshot = client.load_snapshot().await?;

    match cli.command {
        Commands::Stats { project } => run_stats(&snapshot, project),
        Commands::Search { query } => run_search_cmd(&snapshot, &query),
        Commands::Board { priority } => run_board(&snapshot, priority.as_deref()),
        Commands::Ask { question } => run_ask(&snapshot, &question),
    }

    Ok(())
}

fn run_stats(snapshot: &Snapshot, project: Option<i64>) {
    let scoped = snapshot.scoped(project);
    match project.and_then(|id| snapshot.project(id)) {
        Some(p) => println!("{}", format!("Statistics for: {}", p.name).bold()),
        None => println!("{}", "All Projects Statistics".bold()),
    }

    let stats = DashboardStats::compute(scoped.projects());
    println!("  Total Projects:     {}", stats.total_projects);
    println!("  Completed Projects: {}", stats.completed_projects);
    println!("  Total Tasks:        {}", stats.total_tasks);
    println!("  Completed Tasks:    {}", stats.completed_tasks);
    println!("  Completion Rate:    {:.1}%", stats.completion_rate);

    print_series(&stats.status_chart());
    print_series(&stats.priority_chart());
}

fn print_series(series: &ChartSeries) {
    println!("\n{}", series.name.bold());
    if series.is_empty() {
        println!("  (no data)");
        return;
    }
    let max = series.values.iter().copied().max().unwrap_or(1).max(1);
    let width = series.labels.iter().map(|l| l.len()).max().unwrap_or(0);
    for (label, value) in series.labels.iter().zip(&series.values) {
        let bar = "#".repeat(value * 40 / max);
        println!("  {label:width$}  {value:>4}  {}", bar.blue());
    }
}

fn run_search_cmd(snapshot: &Snapshot, query: &str) {
    match run_search(query, snapshot) {
        SearchOutcome::Idle => {
            println!("Start typing to search projects and tasks.");
        }
        SearchOutcome::Failed(msg) => {
            eprintln!("{}", msg.red());
        }
        SearchOutcome::Results(results) if results.is_empty() => {
            println!("No results found. Try a different search term.");
        }
        SearchOutcome::Results(results) => {
            if !results.matched_projects.is_empty() {
                println!(
                    "{} ({})",
                    "Projects".bold().blue(),
                    results.matched_projects.len()
                );
                for p in &results.matched_projects {
                    println!("  {}", render_highlighted(&p.name, query));
                    if let Some(desc) = &p.description {
                        println!("    {}", render_highlighted(desc, query));
                    }
                }
            }
            if !results.tasks_by_project.is_empty() {
                println!(
                    "{} ({})",
                    "Tasks by Project".bold().green(),
                    results.task_count()
                );
                for tasks in results.tasks_by_project.values() {
                    let name = tasks
                        .first()
                        .map_or("Unknown Project", |t| t.project_name.as_str());
                    println!("  {}", name.bold());
                    for t in tasks {
                        println!("    - {}", render_highlighted(&t.task.title, query));
                    }
                }
            }
        }
    }
}

/// Render highlight spans for the terminal: matches get a yellow
/// background, everything else passes through unchanged.
fn render_highlighted(text: &str, query: &str) -> String {
    highlight(text, query)
        .into_iter()
        .map(|span| {
            if span.matched {
                span.text.black().on_yellow().to_string()
            } else {
                span.text
            }
        })
        .collect()
}

fn run_board(snapshot: &Snapshot, selected: Option<&str>) {
    let selected = selected.and_then(Priority::parse);
    let tasks = snapshot.flatten_tasks();
    let board = priority_board(&tasks);
    for (priority, column) in &board {
        let header = format!("{priority} ({} tasks)", column.len());
        if selected == Some(*priority) {
            println!("{}", header.bold().underline());
        } else {
            println!("{}", header.bold());
        }
        if column.is_empty() {
            println!("  No tasks for this priority.");
        } else {
            for t in column {
                println!("  - {} [{}]", t.task.title, t.project_name);
            }
        }
    }
}

fn run_ask(snapshot: &Snapshot, question: &str) {
    match answer(question, snapshot) {
        AssistantReply::Text(msg) => println!("{msg}"),
        AssistantReply::Chart { intro, series } => {
            println!("{intro}");
            print_series(&series);
        }
        AssistantReply::PriorityCounts(counts) => {
            println!("{}", "Task Priorities:".bold());
            for (priority, count) in &counts {
                println!("  {}: {count}", priority.yellow());
            }
        }
        AssistantReply::ProjectList(lines) => {
            println!("{}", "Project List:".bold());
            for line in lines {
                println!("  {}", line.name.blue().bold());
                if let Some(desc) = line.description {
                    println!("    {desc}");
                }
                println!("    Tasks: {}", line.task_count);
            }
        }
        AssistantReply::TaskList(tasks) => {
            println!("{}", "Task List:".bold());
            for t in tasks {
                print_task_line(&t);
            }
        }
        AssistantReply::Stats {
            total_projects,
            total_tasks,
            completed_tasks,
        } => {
            println!("{}", "Project Statistics:".bold());
            println!("  Total Projects:  {total_projects}");
            println!("  Total Tasks:     {total_tasks}");
            println!("  Completed Tasks: {completed_tasks}");
        }
        AssistantReply::Help => {
            println!("Hi! I can help you with your projects and tasks. Try asking:");
            println!("  - \"List all projects\"");
            println!("  - \"Show me all tasks\"");
            println!("  - \"Project statistics\"");
            println!("  - \"Show priorities\"");
            println!("  - \"Show me a priority chart\"");
            println!("  - \"Show me a status pie chart\"");
        }
    }
}

fn print_task_line(t: &FlatTask) {
    let mut line = format!("  {} (project: {})", t.task.title.green(), t.project_name);
    if let Some(status) = &t.task.status {
        line.push_str(&format!(" [{status}]"));
    }
    if let Some(priority) = &t.task.priority {
        line.push_str(&format!(" Priority: {priority}"));
    }
    println!("{line}");
}
