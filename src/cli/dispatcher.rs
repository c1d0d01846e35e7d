//! Command dispatcher
//!
//! Routes CLI commands to their appropriate handlers.

use crate::cli::args::{Cli, Command, PathCommand, SettingsSubcommand};
use crate::commands;
use crate::commands::context::NoticeContext;
use crate::commands::settings::SettingsCommand;
use crate::error::Result;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    match &args.command {
        Command::Check { json, no_delay } => {
            let ctx = NoticeContext::load(args.global.ephemeral)?;
            commands::check::run(
                &ctx,
                commands::check::CheckOptions {
                    json: *json,
                    no_delay: *no_delay,
                },
            )
        }

        Command::Status => {
            let ctx = NoticeContext::load(args.global.ephemeral)?;
            commands::status::run(&ctx)
        }

        Command::Dismiss { release, reset } => {
            let ctx = NoticeContext::load(args.global.ephemeral)?;
            commands::dismiss::run(
                &ctx,
                commands::dismiss::DismissOptions {
                    version: release.clone(),
                    reset: *reset,
                },
            )
        }

        Command::Open => {
            let ctx = NoticeContext::load(args.global.ephemeral)?;
            commands::open::run(&ctx)
        }

        Command::Path { command } => {
            let ctx = NoticeContext::load(args.global.ephemeral)?;
            let command = match command {
                PathCommand::Set { path } => commands::path::PathAction::Set(path.clone()),
                PathCommand::Show => commands::path::PathAction::Show,
                PathCommand::Clear => commands::path::PathAction::Clear,
            };
            commands::path::run(&ctx, command)
        }

        Command::Compare { left, right } => commands::compare::run(left, right),

        Command::Settings { command } => commands::settings::run(match command {
            SettingsSubcommand::Set { key, value } => SettingsCommand::Set {
                key: key.clone(),
                value: value.clone(),
            },
            SettingsSubcommand::Get { key } => SettingsCommand::Get { key: key.clone() },
            SettingsSubcommand::Show => SettingsCommand::Show,
            SettingsSubcommand::Reset { key } => SettingsCommand::Reset { key: key.clone() },
        }),

        Command::Completions { shell } => commands::completions::run(*shell),
    }
}
