//! Implementations of the `template` subcommands.

use crate::cli::{
    TemplateAction, TemplateCommand, TemplateCreateArgs, TemplateDeleteArgs, TemplateEditArgs,
    TemplateReadArgs, TemplateUseArgs,
};
use crate::config::Config;
use crate::context::Context;
use crate::editor;
use crate::error::{Result, TboxError};
use crate::fs::atomic_write_file;
use crate::prompt;
use crate::template::{self, BuiltinRegistry, extract, substitute};
use colored::Colorize;
use std::path::Path;

/// Dispatch a `template` subcommand.
pub fn dispatch(cmd: TemplateCommand) -> Result<()> {
    let ctx = Context::resolve()?;

    match cmd.action {
        TemplateAction::Create(args) => cmd_create(&ctx, args),
        TemplateAction::Use(args) => cmd_use(&ctx, args),
        TemplateAction::Read(args) => cmd_read(&ctx, args),
        TemplateAction::List => cmd_list(&ctx),
        TemplateAction::Edit(args) => cmd_edit(&ctx, args),
        TemplateAction::Delete(args) => cmd_delete(&ctx, args),
    }
}

fn cmd_create(ctx: &Context, args: TemplateCreateArgs) -> Result<()> {
    template::create(ctx, &args.name)?;
    println!(
        "{}",
        format!("Template {} created successfully", args.name).green()
    );

    if args.edit {
        let config = Config::load(ctx)?;
        editor::open(&config.editor, &ctx.template_path(&args.name))?;
        println!(
            "{}",
            format!("Template {} edited successfully", args.name).green()
        );
    }

    Ok(())
}

/// The template-use pipeline: extract placeholders, collect one value per
/// unique variable key, then substitute over the same raw text and write
/// the rendered output.
fn cmd_use(ctx: &Context, args: TemplateUseArgs) -> Result<()> {
    let content = template::read(ctx, &args.name)?;

    let placeholders = extract(&content);
    let values = prompt::collect_variables(&placeholders)?;
    let rendered = substitute(&content, &values, &BuiltinRegistry::default());

    let destination = Path::new(&args.filename);
    if destination.exists()
        && !prompt::confirm(&format!(
            "File {} already exists. Overwrite?",
            args.filename
        ))?
    {
        println!(
            "{}",
            format!("File {} not overwritten", args.filename).yellow()
        );
        return Ok(());
    }

    atomic_write_file(destination, &rendered)?;
    println!(
        "{}",
        format!(
            "Template {} applied successfully to {}",
            args.name, args.filename
        )
        .green()
    );

    Ok(())
}

fn cmd_read(ctx: &Context, args: TemplateReadArgs) -> Result<()> {
    let content = template::read(ctx, &args.name)?;

    println!("{}", format!("\nTemplate {}:", args.name).blue().bold());
    println!("{}\n", content);

    Ok(())
}

fn cmd_list(ctx: &Context) -> Result<()> {
    let names = template::list(ctx)?;

    if names.is_empty() {
        println!("{}", "No templates found".yellow());
        return Ok(());
    }

    println!("{}", "\nAvailable templates:".blue().bold());
    for name in names {
        println!("{}{}", " - ".dimmed(), name.bold());
    }

    Ok(())
}

fn cmd_edit(ctx: &Context, args: TemplateEditArgs) -> Result<()> {
    if !template::exists(ctx, &args.name) {
        return Err(TboxError::UserError(format!(
            "template '{}' not found",
            args.name
        )));
    }

    let config = Config::load(ctx)?;
    editor::open(&config.editor, &ctx.template_path(&args.name))?;
    println!(
        "{}",
        format!("Template {} edited successfully", args.name).green()
    );

    Ok(())
}

fn cmd_delete(ctx: &Context, args: TemplateDeleteArgs) -> Result<()> {
    if !template::exists(ctx, &args.name) {
        return Err(TboxError::UserError(format!(
            "template '{}' not found",
            args.name
        )));
    }

    if !prompt::confirm(&format!("Delete template {}?", args.name))? {
        println!(
            "{}",
            format!("Template {} not deleted", args.name).yellow()
        );
        return Ok(());
    }

    template::delete(ctx, &args.name)?;
    println!(
        "{}",
        format!("Template {} deleted successfully", args.name).green()
    );

    Ok(())
}
