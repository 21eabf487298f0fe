use clap::Parser;
use ferrous_census_application::pipeline::{PipelineCoordinator, PipelineSettings};
use ferrous_census_domain::CliOverrides;
use ferrous_census_infrastructure::source::LineDomainSource;
use std::sync::Arc;
use tracing::{error, info};

mod bootstrap;

#[derive(Parser)]
#[command(name = "ferrous-census")]
#[command(version)]
#[command(about = "Ferrous Census - bulk DNS record enumeration into a SQL table")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Number of resolution workers
    #[arg(long, alias = "dns-goroutines")]
    dns_workers: Option<usize>,

    /// Number of persistence workers
    #[arg(long)]
    db_workers: Option<usize>,

    /// Upstream resolver, ip or ip:port
    #[arg(long)]
    dns_resolver: Option<String>,

    /// Newline-delimited list of domains
    #[arg(short = 'f', long, value_name = "FILE")]
    domains_file: Option<String>,

    /// MySQL host:port
    #[arg(long)]
    mysql_host: Option<String>,

    #[arg(long)]
    mysql_user: Option<String>,

    #[arg(long)]
    mysql_pass: Option<String>,

    #[arg(long)]
    mysql_db: Option<String>,

    /// Full database URL (mysql://... or sqlite:...), overrides the MySQL flags
    #[arg(long)]
    database_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            resolution_workers: self.dns_workers,
            persistence_workers: self.db_workers,
            domains_file: self.domains_file.clone(),
            dns_resolver: self.dns_resolver.clone(),
            db_host: self.mysql_host.clone(),
            db_user: self.mysql_user.clone(),
            db_password: self.mysql_pass.clone(),
            db_name: self.mysql_db.clone(),
            database_url: self.database_url.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);
    bootstrap::config::log_config(cli.config.as_deref(), &config);

    info!("Starting Ferrous Census v{}", env!("CARGO_PKG_VERSION"));

    let resolver = bootstrap::init_resolver(&config.dns)?;
    let sinks = bootstrap::init_record_sinks(&config.database).await?;
    let mut source = LineDomainSource::open(&config.pipeline.domains_file).await?;

    let coordinator = PipelineCoordinator::new(
        PipelineSettings::from(&config),
        Arc::new(resolver),
        Arc::new(sinks),
    );

    let report = coordinator.run(&mut source).await?;
    report.log_summary();

    if let Some(e) = report.source_error {
        error!(error = %e, "Enumeration incomplete");
        anyhow::bail!("domain source failed: {}", e);
    }

    Ok(())
}
