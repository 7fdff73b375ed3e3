use agentview::*;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Cli::parse();
    let app_config = config::AppConfig::load()?;

    let repo = agent_repo::AgentRepo::connect(
        &args.agent_address,
        &args.service_point,
        &args.username,
        &args.password,
        app_config.http.timeout_secs,
    )?;

    // HTTP non-success and a report without a table name are both "no
    // data", reported on stderr rather than failing the run.
    let Some(body) = repo.fetch(&args.attribute_group, &args.subnodes)? else {
        eprintln!("No data available for attribute group {}", args.attribute_group);
        return Ok(());
    };
    let Some(group) = report::parse_report(&body)? else {
        eprintln!("No data available for attribute group {}", args.attribute_group);
        return Ok(());
    };

    let mut table = view::group_table(&group, &args.columns, &app_config.output.padding);
    match args.format {
        cli::Format::Text => print!("{}", table.to_text()),
        cli::Format::Html => print!("{}", table.render_html(group.name())),
    }
    Ok(())
}
