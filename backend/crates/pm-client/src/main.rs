//! pm - sprint board CLI
//!
//! Drives the sprint controllers from the terminal. Toasts go to stderr,
//! results are printed to stdout as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Add a sprint
//! pm sprint add --project-id 1 --title "Sprint 1" --start 2024-01-08 --end 2024-01-19
//!
//! # Save a new backlog order
//! pm backlog reorder --sprint-id 3 12 7 9
//!
//! # Print the burndown chart
//! pm charts 3
//! ```

mod backlog_commands;
mod cli;
mod commands;
mod exclude_day_commands;
mod lookup_commands;
mod sprint_commands;

use crate::{
    backlog_commands::BacklogCommands, cli::Cli, commands::Commands,
    exclude_day_commands::ExcludeDayCommands, lookup_commands::LookupCommands,
    sprint_commands::SprintCommands,
};

use pm_client::{
    AssumeYes, BacklogReorderController, Channel, ChartDashboardController, ClientError,
    ClientResult, Command, Confirm, ConsoleNotifier, EditParameters, ExcludeDayController,
    ExcludeDayForm, HttpChannel, Notifier, SaveAction, SprintFormController, StdinConfirm,
    TextChartRenderer, Trigger, ViewContext,
};
use pm_config::{ClientConfig, Config, ReorderMode};
use pm_core::{
    Boundary, DEFAULT_DATE_FORMAT, EditTab, ProjectDto, Selection, SprintDto, SprintForm,
};

use std::collections::BTreeMap;
use std::process::ExitCode;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::Parser;
use log::{LevelFilter, warn};
use serde_json::{Value, json};

/// Shared collaborators for one invocation
struct App {
    channel: Arc<dyn Channel>,
    notifier: Arc<dyn Notifier>,
    confirm: Box<dyn Confirm>,
    config: ClientConfig,
    date_format: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_logging(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    let config = match Config::load() {
        Ok(config) => config.client,
        Err(e) => {
            warn!("Using default client settings: {}", e);
            ClientConfig::default()
        }
    };

    let server_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.server_url.clone());

    let mut client_config = config;
    client_config.server_url = server_url;

    let channel = match HttpChannel::from_config(&client_config) {
        Ok(channel) => channel,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let app = App {
        channel: Arc::new(channel),
        notifier: Arc::new(ConsoleNotifier),
        confirm: if cli.yes {
            Box::new(AssumeYes) as Box<dyn Confirm>
        } else {
            Box::new(StdinConfirm)
        },
        config: client_config,
        date_format: cli
            .date_format
            .clone()
            .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
    };

    let result = run(&app, cli.command).await;

    match result {
        Ok(value) => {
            if value.is_null() {
                return ExitCode::SUCCESS;
            }

            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(app: &App, command: Commands) -> ClientResult<Value> {
    match command {
        Commands::Sprint { action } => run_sprint(app, action).await,

        Commands::Backlog { action } => match action {
            BacklogCommands::Reorder {
                sprint_id,
                mode,
                story_ids,
            } => {
                let mode = match mode {
                    Some(mode) => mode
                        .parse::<ReorderMode>()
                        .map_err(|e| ClientError::validation(e.to_string(), Some("mode")))?,
                    None => app.config.reorder_mode,
                };
                let controller =
                    BacklogReorderController::new(app.channel.clone(), app.notifier.clone(), mode);
                let report = controller.save_order(sprint_id, &story_ids).await;

                let failed: Vec<Value> = report
                    .failed()
                    .map(|(update, reason)| {
                        json!({ "story_id": update.story_id, "error": reason })
                    })
                    .collect();
                Ok(json!({
                    "requested": report.requested(),
                    "succeeded": report.succeeded().count(),
                    "failed": failed,
                }))
            }
        },

        Commands::Charts { sprint_id } => {
            let controller = ChartDashboardController::new(
                app.channel.clone(),
                app.notifier.clone(),
                Arc::new(TextChartRenderer),
                app.date_format.clone(),
            );
            controller.activate(sprint_id).await?;
            Ok(Value::Null)
        }

        Commands::ExcludeDay { action } => match action {
            ExcludeDayCommands::Add {
                sprint_id,
                day,
                description,
            } => {
                let mut controller = exclude_day_controller(app, sprint_id).await?;
                if !controller.select_day(day) {
                    return Err(ClientError::validation(
                        "Exclude day is outside the sprint",
                        Some("day"),
                    ));
                }
                let (created, _) = controller
                    .add(ExcludeDayForm {
                        day: Some(day),
                        description,
                    })
                    .await?;
                Ok(json!({ "exclude_day": created }))
            }
            ExcludeDayCommands::Remove { sprint_id, id } => {
                let controller = exclude_day_controller(app, sprint_id).await?;
                match controller.remove(id, app.confirm.as_ref()).await? {
                    Some(_) => Ok(json!({ "deleted_id": id })),
                    None => Ok(Value::Null),
                }
            }
        },

        Commands::Lookup(lookup) => match lookup {
            LookupCommands::Project { id } => {
                app.channel.get(&format!("/Project/{}", id), &[]).await
            }
            LookupCommands::Milestones { project_id } => {
                app.channel
                    .get("/Milestone", &[("projectId", project_id.to_string())])
                    .await
            }
            LookupCommands::Stories {
                project_id,
                sprint_id,
            } => {
                let mut query = Vec::new();
                if let Some(project_id) = project_id {
                    query.push(("projectId", project_id.to_string()));
                }
                if let Some(sprint_id) = sprint_id {
                    query.push(("sprintId", sprint_id));
                }
                app.channel.get("/Story", &query).await
            }
            LookupCommands::Users { username } => {
                let query: Vec<(&str, String)> =
                    username.into_iter().map(|u| ("username", u)).collect();
                app.channel.get("/User", &query).await
            }
        },
    }
}

async fn run_sprint(app: &App, action: SprintCommands) -> ClientResult<Value> {
    match action {
        SprintCommands::Add {
            project_id,
            title,
            description,
            start,
            end,
            ignore_weekends,
        } => {
            let project = fetch_project(app, project_id).await?;
            let mut form = sprint_form(app, Some(project));

            form.open_add(Trigger::none(), BTreeMap::new()).await?;
            select_dates(&mut form, Some(start), Some(end))?;

            let next = form
                .submit(
                    SprintForm {
                        project_id,
                        title,
                        description,
                        ignore_weekends,
                        ..SprintForm::default()
                    },
                    SaveAction::Save,
                )
                .await?;

            match next {
                Some(Command::SprintEdit { sprint_id, .. }) => {
                    Ok(json!({ "sprint_id": sprint_id }))
                }
                _ => Ok(Value::Null),
            }
        }

        SprintCommands::Edit {
            id,
            title,
            description,
            start,
            end,
            ignore_weekends,
        } => {
            let mut form = sprint_form(app, None);

            let current = form
                .open_edit(Some(id), Trigger::none(), EditParameters::default())
                .await?
                .sprint
                .clone()
                .ok_or_else(|| ClientError::invalid_state("Edit form without a sprint"))?;
            select_dates(&mut form, start, end)?;

            form.submit(
                SprintForm {
                    project_id: current.project_id,
                    title: title.unwrap_or(current.title),
                    description: description.or(current.description),
                    ignore_weekends: ignore_weekends.unwrap_or(current.ignore_weekends),
                    ..SprintForm::default()
                },
                SaveAction::Save,
            )
            .await?;

            Ok(json!({ "sprint": form.context().sprint }))
        }

        SprintCommands::Delete { id } => {
            let mut form = sprint_form(app, None);

            // Cancelling fires the re-open trigger, a delete drops it
            let reopen = Trigger::new(Command::SprintEdit {
                sprint_id: id,
                trigger: Trigger::none(),
                parameters: EditParameters::default(),
            });
            match form.delete_sprint(id, reopen, app.confirm.as_ref()).await? {
                None => Ok(json!({ "deleted_id": id })),
                Some(_) => Ok(Value::Null),
            }
        }

        SprintCommands::Show { id, tab } => {
            let tab = tab
                .parse::<EditTab>()
                .map_err(|e| ClientError::validation(e, Some("tab")))?;
            let mut form = sprint_form(app, None);

            let model = form
                .open_edit(Some(id), Trigger::none(), EditParameters::tab(tab))
                .await?;
            Ok(serde_json::to_value(model)?)
        }

        SprintCommands::List { project_id } => {
            app.channel
                .get("/Sprint", &[("projectId", project_id.to_string())])
                .await
        }
    }
}

fn sprint_form(app: &App, project: Option<ProjectDto>) -> SprintFormController {
    let mut context = ViewContext::new(app.date_format.clone());
    context.project = project;
    SprintFormController::new(app.channel.clone(), app.notifier.clone(), context)
}

/// Run the dates through the form's validator like a date picker would.
fn select_dates(
    form: &mut SprintFormController,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> ClientResult<()> {
    for (boundary, selection) in form.select_dates(start, end)? {
        if let Selection::Rejected { error, .. } = selection {
            return Err(ClientError::validation(
                error.message(&form.context().date_format),
                Some(boundary.field()),
            ));
        }
    }
    Ok(())
}

async fn fetch_project(app: &App, project_id: i64) -> ClientResult<ProjectDto> {
    let body = app
        .channel
        .get(&format!("/Project/{}", project_id), &[])
        .await?;
    Ok(serde_json::from_value(
        body.get("project").cloned().unwrap_or(Value::Null),
    )?)
}

async fn exclude_day_controller(
    app: &App,
    sprint_id: i64,
) -> ClientResult<ExcludeDayController> {
    let body = app
        .channel
        .get("/Sprint/edit", &[("id", sprint_id.to_string())])
        .await?;
    let sprint: SprintDto =
        serde_json::from_value(body.get("sprint").cloned().unwrap_or(Value::Null))?;

    Ok(ExcludeDayController::new(
        app.channel.clone(),
        app.notifier.clone(),
        &sprint,
        app.date_format.clone(),
    ))
}

/// Plain `[LEVEL] message` lines on stderr.
fn init_logging(level: LevelFilter) {
    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(level)
        .level_for("reqwest", LevelFilter::Warn)
        .level_for("hyper", LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply();

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }
}
