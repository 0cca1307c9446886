use clap::Parser;
use colored::Colorize;
use dcm::{
    catalog::{Catalog, ServiceDefinition},
    cli::{Cli, Commands},
    common::{command_utils, file_utils},
    config::{self, Settings},
    error::ValidationError,
    generator,
};
use std::io::Write;
use std::path::PathBuf;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> dcm::Result<()> {
    let cli = Cli::parse();

    cli.init_logging();

    let settings = config::load_settings(cli.config.as_deref())?;

    let mut catalog = Catalog::builtin();
    for path in &cli.catalog {
        catalog.load_file(path)?;
    }

    match cli.command {
        Commands::List { unsupported } => handle_list(&catalog, unsupported),
        Commands::Generate {
            services,
            output,
            interpolate,
            dry_run,
            force,
        } => handle_generate(
            &catalog, &settings, &services, output, interpolate, dry_run, force,
        ),
        Commands::Validate { services } => handle_validate(&catalog, &settings, &services),
    }
}

fn handle_list(catalog: &Catalog, include_unsupported: bool) -> dcm::Result<()> {
    for service in catalog.services() {
        if service.is_unsupported && !include_unsupported {
            continue;
        }
        let marker = if service.is_unsupported {
            " (unsupported)".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "{:<22} {}{} - {}",
            service.id.bold(),
            service.name,
            marker,
            service.description
        );
    }
    Ok(())
}

fn handle_generate(
    catalog: &Catalog,
    settings: &Settings,
    service_ids: &[String],
    output: Option<PathBuf>,
    interpolate: bool,
    dry_run: bool,
    force: bool,
) -> dcm::Result<()> {
    let selected = catalog.select(service_ids)?;

    let compose = generator::generate_compose(&selected, settings, interpolate);
    let env_file = generator::generate_env_file(settings);

    if let Some(report) = &compose.port_conflicts {
        eprintln!(
            "{}",
            format!("⚠️  Fixed {} host port conflict(s):", report.fixed).yellow()
        );
        for entry in &report.conflicts {
            eprintln!("  - {}", entry);
        }
    }

    if dry_run {
        println!("{}", compose.content);
        println!("# --- .env ---");
        println!("{}", env_file);
        return Ok(());
    }

    let dir = file_utils::output_dir(output.as_deref());
    file_utils::write_artifact(&dir.join("docker-compose.yaml"), &compose.content, force)?;
    file_utils::write_artifact(&dir.join(".env"), &env_file, force)?;

    println!(
        "✅ Generated docker-compose.yaml and .env for {} service(s) in {}",
        selected.len(),
        dir.display()
    );
    Ok(())
}

fn handle_validate(
    catalog: &Catalog,
    settings: &Settings,
    service_ids: &[String],
) -> dcm::Result<()> {
    if !command_utils::is_command_available("docker") {
        return Err(ValidationError::DockerUnavailable.into());
    }

    let selected: Vec<&ServiceDefinition> = if service_ids.is_empty() {
        catalog.supported()
    } else {
        catalog.select(service_ids)?
    };

    println!(
        "Validating {} service(s) with `docker compose config`...\n",
        selected.len()
    );

    let mut passed = 0usize;
    let mut failed_services: Vec<String> = Vec::new();

    // Test 1: each service individually
    for service in selected.iter().copied() {
        print!("  {} ... ", service.name);
        std::io::stdout().flush()?;
        if validate_selection(&[service], settings)? {
            println!("{}", "ok".green());
            passed += 1;
        } else {
            println!("{}", "FAILED".red());
            failed_services.push(service.name.clone());
        }
    }

    // Test 2: all selected services combined
    print!("\n  combined ({} services) ... ", selected.len());
    std::io::stdout().flush()?;
    if validate_selection(&selected, settings)? {
        println!("{}", "ok".green());
        passed += 1;
    } else {
        println!("{}", "FAILED".red());
        failed_services.push("combined".to_string());
    }

    let total = selected.len() + 1;
    println!(
        "\nSummary: {} passed, {} failed",
        passed.to_string().green(),
        failed_services.len().to_string().red()
    );
    if failed_services.is_empty() {
        return Ok(());
    }

    for name in &failed_services {
        println!("  {} {}", "✗".red(), name);
    }
    Err(ValidationError::ServicesFailed {
        failed: failed_services.len(),
        total,
        services: failed_services,
    }
    .into())
}

/// Write the compose file and .env for one selection into a temp directory
/// and run `docker compose config --quiet` there.
fn validate_selection(services: &[&ServiceDefinition], settings: &Settings) -> dcm::Result<bool> {
    let dir = tempfile::tempdir()?;

    let compose = generator::generate_compose(services, settings, false);
    let env_file = generator::generate_env_file(settings);
    std::fs::write(dir.path().join("docker-compose.yaml"), &compose.content)?;
    std::fs::write(dir.path().join(".env"), &env_file)?;

    let output = command_utils::compose_config_check(dir.path())?;
    if !output.status.success() {
        log::debug!(
            "compose config stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output.status.success())
}
