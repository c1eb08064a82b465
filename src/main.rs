use clap::Parser;
use std::path::Path;

use diet_model_rs::builder::{build_program, concrete_example};
use diet_model_rs::cli::{Cli, Command, ModelArgs};
use diet_model_rs::data::{load_abstract, load_foods_csv, load_plan, read_diet, suggest_food};
use diet_model_rs::error::{DietError, Result};
use diet_model_rs::interface::{
    display_evaluation, display_foods, display_summary, prompt_food_choice, prompt_yes_no,
};
use diet_model_rs::program::{evaluate, save_lp, to_lp_string};
use diet_model_rs::{DietData, LinearProgram, ModelConfig};

fn main() {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: could not install logger: {}", e);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Export {
            model,
            output,
            force,
        } => cmd_export(&model, &output, force),
        Command::Summary { model } => cmd_summary(&model),
        Command::Check {
            model,
            plan,
            interactive,
        } => cmd_check(&model, &plan, interactive),
        Command::Example {
            abstract_data,
            output,
        } => cmd_example(abstract_data.as_deref(), output.as_deref()),
    }
}

/// Load the diet data and build the configured program.
fn load_model(args: &ModelArgs) -> Result<(DietData, ModelConfig, LinearProgram)> {
    let config = args.model_config()?;
    let mut data = read_diet(&args.data)?;
    if let Some(csv) = &args.foods {
        data.foods = load_foods_csv(csv)?;
        tracing::info!(foods = data.foods.len(), path = %csv.display(), "foods replaced from CSV");
    }

    let program = build_program(&data, &config)?;
    Ok((data, config, program))
}

/// Write the program to an LP file.
fn cmd_export(args: &ModelArgs, output: &Path, force: bool) -> Result<()> {
    let (_, _, program) = load_model(args)?;

    if output.exists() && !force {
        let overwrite = prompt_yes_no(
            &format!("{} exists. Overwrite?", output.display()),
            false,
        )?;
        if !overwrite {
            println!("Nothing written.");
            return Ok(());
        }
    }

    save_lp(&program, output)?;
    println!(
        "Wrote {} variables and {} constraints to {}",
        program.variables().len(),
        program.constraints().len(),
        output.display()
    );
    Ok(())
}

fn cmd_summary(args: &ModelArgs) -> Result<()> {
    let (data, _, program) = load_model(args)?;
    display_foods(&data);
    display_summary(&program);
    Ok(())
}

/// Evaluate a serving plan against the program.
fn cmd_check(args: &ModelArgs, plan_path: &Path, interactive: bool) -> Result<()> {
    let (data, config, program) = load_model(args)?;
    let mut plan = load_plan(plan_path)?;

    for unknown in plan.unknown_foods(&data) {
        let suggestions = suggest_food(&unknown, &data);
        if !interactive {
            if let Some(best) = suggestions.first() {
                eprintln!("Unknown food '{}', did you mean '{}'?", unknown, best);
            }
            return Err(DietError::UnknownFood(unknown));
        }

        match prompt_food_choice(&unknown, &suggestions)? {
            Some(choice) => plan.rename_food(&unknown, &choice),
            None => return Err(DietError::UnknownFood(unknown)),
        }
    }

    let values = plan.to_assignment(&data, &program, config.variant)?;
    let evaluation = evaluate(&program, &values);
    display_evaluation(&evaluation);
    Ok(())
}

/// Emit the concrete example or an abstract program.
fn cmd_example(abstract_data: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let program = match abstract_data {
        Some(path) => load_abstract(path)?.build()?,
        None => concrete_example()?,
    };

    match output {
        Some(path) => {
            save_lp(&program, path)?;
            println!("Wrote {} to {}", program.name(), path.display());
        }
        None => print!("{}", to_lp_string(&program)?),
    }
    Ok(())
}
