//! Windmark Job Explorer CLI
//!
//! Thin driver over the query engine: ingests the remote dataset, runs
//! filter/sort/window queries, and writes the CSV/PDF exports.

use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use windmark::{
    config::Config,
    error::{AppError, Result},
    export::{self, ExportLock},
    ingest::{HttpJobSource, Ingestor, JobCache},
    models::{Filters, Job, SortKey, ViewMode, ViewState},
    query,
    utils::fmt::{format_number, format_salary},
};

/// Windmark - Job Listing Explorer
#[derive(Parser, Debug)]
#[command(name = "windmark", version, about = "Browse, query, and export job listings")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, default_value = "windmark.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ingest all pages of the remote dataset and report counts
    Fetch,

    /// Run a query and print the visible window
    List {
        #[command(flatten)]
        query: QueryArgs,

        /// 1-based page index (pagination mode)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Use infinite-scroll mode instead of pages
        #[arg(long)]
        infinite: bool,

        /// Visible record count for infinite mode
        #[arg(long)]
        visible: Option<usize>,
    },

    /// Export the filtered+sorted set to a file
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,

        #[command(flatten)]
        query: QueryArgs,

        /// Output path (defaults derive from the configuration)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print observed filter option sets
    Options,

    /// Validate the configuration file
    Validate,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ExportFormat {
    Csv,
    Pdf,
}

/// Filter and sort flags shared by query-driven commands.
#[derive(Args, Debug)]
struct QueryArgs {
    /// Case-insensitive search across title, company, and description
    #[arg(long)]
    search: Option<String>,

    /// Exact location match
    #[arg(long)]
    location: Option<String>,

    /// Accepted employment type (repeatable)
    #[arg(long = "employment-type")]
    employment_types: Vec<String>,

    /// Exact category match
    #[arg(long)]
    category: Option<String>,

    /// Only remote postings
    #[arg(long)]
    remote_only: bool,

    /// Lower bound of the salary window
    #[arg(long)]
    salary_min: Option<u32>,

    /// Upper bound of the salary window
    #[arg(long)]
    salary_max: Option<u32>,

    /// Minimum number of openings
    #[arg(long)]
    min_openings: Option<u32>,

    /// Only postings created within the last N days
    #[arg(long)]
    created_within: Option<i64>,

    /// Sort order: newest, oldest, salary_high, salary_low, most_openings
    #[arg(long, default_value = "newest")]
    sort: String,
}

impl QueryArgs {
    fn filters(&self) -> Filters {
        let mut filters = Filters::default();
        if let Some(search) = &self.search {
            filters = filters.with_search(search.clone());
        }
        if let Some(location) = &self.location {
            filters = filters.with_location(location.clone());
        }
        if !self.employment_types.is_empty() {
            filters = filters.with_employment_types(self.employment_types.clone());
        }
        if let Some(category) = &self.category {
            filters = filters.with_job_category(category.clone());
        }
        filters = filters.with_remote_only(self.remote_only);
        if self.salary_min.is_some() || self.salary_max.is_some() {
            filters = filters.with_salary_range(
                self.salary_min.unwrap_or(0),
                self.salary_max.unwrap_or(windmark::models::DEFAULT_SALARY_MAX),
            );
        }
        if let Some(min_openings) = self.min_openings {
            filters = filters.with_min_openings(min_openings);
        }
        filters = filters.with_created_within(self.created_within);
        filters
    }

    fn sort(&self) -> Result<SortKey> {
        self.sort.parse()
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Ingest the dataset, honoring the in-process cache.
async fn load_jobs(config: &Config) -> Result<Vec<Job>> {
    let source = HttpJobSource::new(&config.source)?;
    let ingestor = Ingestor::with_max_pages(source, config.source.max_pages);
    let mut cache = JobCache::with_ttl_secs(config.cache.ttl_secs as i64);
    let mut rng = StdRng::from_entropy();
    ingestor.get_all(&mut cache, &mut rng, Utc::now()).await
}

fn print_jobs(jobs: &[Job]) {
    for job in jobs {
        println!(
            "{:<40} {:<24} {:<18} {:>7} - {:<7} {}",
            job.title,
            job.company,
            job.location,
            format_salary(job.salary_from),
            format_salary(job.salary_to),
            job.employment_type,
        );
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Fetch => {
            let jobs = load_jobs(&config).await?;
            println!("{} jobs ingested", format_number(jobs.len() as u64));
        }

        Command::List {
            query: args,
            page,
            infinite,
            visible,
        } => {
            let filters = args.filters();
            let sort = args.sort()?;
            let jobs = load_jobs(&config).await?;

            let mode = if infinite {
                ViewMode::Infinite
            } else {
                ViewMode::Pagination
            };
            let mut view = ViewState::new(mode, config.view.page_size, config.view.infinite_batch);
            view.set_page(page);
            if let Some(visible) = visible {
                view.visible = visible;
            }

            let out = query::run_query(&jobs, &filters, sort, &view, Utc::now());
            print_jobs(&out.visible);

            println!(
                "\n{} jobs found (from {} total)",
                format_number(out.total_filtered as u64),
                format_number(jobs.len() as u64)
            );
            match mode {
                ViewMode::Pagination => {
                    println!("Page {} of {}", page, out.total_pages);
                }
                ViewMode::Infinite => {
                    if out.has_more {
                        println!("Showing {}, more available", out.visible.len());
                    } else {
                        println!("All {} jobs shown", out.visible.len());
                    }
                }
            }
        }

        Command::Export {
            format,
            query: args,
            output,
        } => {
            let filters = args.filters();
            let sort = args.sort()?;
            let jobs = load_jobs(&config).await?;
            let now = Utc::now();

            // Reject re-entrant export requests while one is outstanding.
            let lock = ExportLock::new();
            let _guard = lock
                .try_begin()
                .ok_or_else(|| AppError::export("another export is already in flight"))?;

            let processed = query::processed_set(&jobs, &filters, sort, now);

            let path = match format {
                ExportFormat::Csv => {
                    let path = output
                        .unwrap_or_else(|| export::csv_filename(&config.export.csv_basename).into());
                    std::fs::write(&path, export::to_csv(&processed))?;
                    path
                }
                ExportFormat::Pdf => {
                    let path = output.unwrap_or_else(|| export::pdf_filename(now).into());
                    std::fs::write(&path, export::to_pdf(&processed, &filters, now)?)?;
                    path
                }
            };

            log::info!(
                "exported {} records to {}",
                processed.len(),
                path.display()
            );
        }

        Command::Options => {
            let jobs = load_jobs(&config).await?;

            println!("Locations:");
            for value in query::locations(&jobs) {
                println!("  {value}");
            }
            println!("Employment types:");
            for value in query::employment_types(&jobs) {
                println!("  {value}");
            }
            println!("Categories:");
            for value in query::job_categories(&jobs) {
                println!("  {value}");
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            config.validate()?;
            log::info!("Config OK");
        }
    }

    Ok(())
}
