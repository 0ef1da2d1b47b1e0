//! Implementations of the `alias` subcommands.

use crate::alias::{self, AliasEntry};
use crate::cli::{
    AliasAction, AliasCommand, AliasCreateArgs, AliasDeleteArgs, AliasEditArgs, AliasListArgs,
};
use crate::context::Context;
use crate::error::{Result, TboxError};
use crate::prompt;
use colored::Colorize;

/// Dispatch an `alias` subcommand.
pub fn dispatch(cmd: AliasCommand) -> Result<()> {
    let ctx = Context::resolve()?;

    match cmd.action {
        AliasAction::List(args) => cmd_list(&ctx, args),
        AliasAction::Create(args) => cmd_create(&ctx, args),
        AliasAction::Delete(args) => cmd_delete(&ctx, args),
        AliasAction::Edit(args) => cmd_edit(&ctx, args),
    }
}

fn cmd_list(ctx: &Context, args: AliasListArgs) -> Result<()> {
    let file = alias::load(ctx);

    if file.aliases.is_empty() {
        println!("{}", "No aliases defined.".yellow());
        return Ok(());
    }

    println!("{}", "Available Aliases:".blue().bold());
    for (name, entry) in &file.aliases {
        if args.verbose {
            let description = entry.description.as_deref().unwrap_or("no description");
            println!(
                "{} {}: {} ({})",
                "-".dimmed(),
                name.bold(),
                entry.command.green(),
                description.italic().dimmed()
            );
        } else {
            println!("{} {}: {}", "-".dimmed(), name.bold(), entry.command.green());
        }
    }

    Ok(())
}

fn cmd_create(ctx: &Context, args: AliasCreateArgs) -> Result<()> {
    let mut file = alias::load(ctx);

    if file.aliases.contains_key(&args.name) {
        return Err(TboxError::UserError(format!(
            "alias '{}' already exists",
            args.name
        )));
    }

    file.aliases.insert(
        args.name.clone(),
        AliasEntry::new(&args.command, args.description.as_deref()),
    );
    alias::save(ctx, &file)?;

    println!(
        "{}",
        format!("Alias {} created successfully", args.name).green()
    );
    Ok(())
}

fn cmd_delete(ctx: &Context, args: AliasDeleteArgs) -> Result<()> {
    let mut file = alias::load(ctx);

    if args.all {
        file.aliases.clear();
        alias::save(ctx, &file)?;
        println!("{}", "Deleted all aliases.".green());
        return Ok(());
    }

    if args.names.is_empty() {
        println!("{}", "No alias names provided for deletion.".yellow());
        return Ok(());
    }

    let mut deleted = 0;
    for name in &args.names {
        if file.aliases.remove(name).is_some() {
            deleted += 1;
        } else {
            eprintln!("{}", format!("Alias {} does not exist", name).red());
        }
    }

    alias::save(ctx, &file)?;
    println!(
        "{}",
        format!(
            "Deleted {} alias{}.",
            deleted,
            if deleted == 1 { "" } else { "es" }
        )
        .green()
    );
    Ok(())
}

fn cmd_edit(ctx: &Context, args: AliasEditArgs) -> Result<()> {
    let mut file = alias::load(ctx);

    let Some(entry) = file.aliases.get(&args.name) else {
        return Err(TboxError::UserError(format!(
            "alias '{}' does not exist",
            args.name
        )));
    };

    let command = prompt::text("Command:", &entry.command)?;
    let description = prompt::text(
        "Description:",
        entry.description.as_deref().unwrap_or_default(),
    )?;

    file.aliases.insert(
        args.name.clone(),
        AliasEntry {
            command,
            description: (!description.is_empty()).then_some(description),
        },
    );
    alias::save(ctx, &file)?;

    println!(
        "{}",
        format!("Alias {} updated successfully.", args.name).green()
    );
    Ok(())
}
