//! nodegenx's main application entry point.
//! Handles command-line argument parsing, chooses between preset and manual
//! generation, and reports the outcome.

use nodegenx::{
    cli::{get_args, Args},
    command::SystemCommandExecutor,
    config::{load_answers, Configuration},
    error::{default_error_handler, Result},
    logger::init_logger,
    orchestrator::{GenerationReport, Orchestrator},
    presets::{find_preset, presets},
    prompt::{prompt_configuration, DefaultsPrompter, DialoguerPrompter},
    renderer::MiniJinjaRenderer,
    vcs::default_author,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Builds the configuration from an answers file, defaults or prompts.
fn get_configuration(args: &Args) -> Result<Configuration> {
    if let Some(path) = &args.answers {
        let mut config = load_answers(path)?;
        if let Some(name) = &args.project_name {
            config.project_name = name.clone();
        }
        config.validate()?;
        return Ok(config);
    }

    let defaults = Configuration {
        project_name: args.project_name().to_string(),
        author: default_author().unwrap_or_default(),
        ..Configuration::default()
    };

    if args.yes {
        prompt_configuration(&DefaultsPrompter, &defaults)
    } else {
        prompt_configuration(&DialoguerPrompter::new(), &defaults)
    }
}

fn print_templates() -> Result<()> {
    println!("Available templates:");
    for spec in presets()? {
        println!("  {:<26} {}", spec.name, spec.description);
    }
    Ok(())
}

fn print_success(report: &GenerationReport) {
    for path in &report.created {
        let shown = path.strip_prefix(&report.location).unwrap_or(path);
        println!("Created: '{}'", shown.display());
    }

    if !report.warnings.is_empty() {
        println!("\nFinished with {} warning(s); see the messages above.", report.warnings.len());
    }

    println!("\nYour project '{}' is ready in {}.", report.project_name, report.location.display());
    println!("Next steps:");
    if !report.in_place {
        println!("  cd {}", report.location.display());
    }
    if !report.dependencies_installed {
        println!("  npm install");
    }
    println!("  npm start");
}

/// Main application logic execution.
///
/// # Flow
/// 1. Lists templates and exits when asked to
/// 2. Preset mode: validates the template name and copies its tree
/// 3. Manual mode: rejects an existing target folder, collects the
///    configuration, renders the project, then
///    optionally installs dependencies and initializes git
/// 4. Prints the created files and next steps
fn run(args: Args) -> Result<()> {
    if args.list_templates {
        return print_templates();
    }

    let working_dir = std::env::current_dir()?;
    let renderer = MiniJinjaRenderer::new();
    let executor = SystemCommandExecutor::new();
    let orchestrator = Orchestrator::new(&renderer, &executor, &working_dir);

    println!("Welcome to nodegenx!\n");

    let report = match &args.template {
        Some(template) => {
            let spec = find_preset(template)?;
            println!("Creating project '{}' using template '{}'...", args.project_name(), spec.name);
            orchestrator.generate_from_preset(args.project_name(), spec.name)?
        }
        None => {
            if args.answers.is_none() {
                orchestrator.ensure_manual_target(args.project_name())?;
            }
            let config = get_configuration(&args)?;
            orchestrator.generate_from_configuration(&config)?
        }
    };

    print_success(&report);
    Ok(())
}
