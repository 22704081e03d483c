//! Command execution against a request store.

use crate::commands::Commands;
use crate::project_commands::ProjectCommands;
use crate::request_commands::RequestCommands;
use crate::views::{Dashboard, ErrorOutput, OpenRequestsPage, SubmitOutcome, cards};
use crate::CliResult;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use ospo_client::{ClientResult, RequestApi, RequestState, RequestStore};
use ospo_core::{RequestValidator, SubmitRequest, User, ValidationLimits};
use serde::Serialize;
use serde_json::Value;

/// What a command printed, and whether it should exit successfully
#[derive(Debug)]
pub struct Outcome {
    pub output: Value,
    pub success: bool,
}

impl Outcome {
    fn ok<T: Serialize>(value: &T) -> CliResult<Self> {
        Ok(Self {
            output: serde_json::to_value(value)?,
            success: true,
        })
    }

    fn failed<T: Serialize>(value: &T) -> CliResult<Self> {
        Ok(Self {
            output: serde_json::to_value(value)?,
            success: false,
        })
    }
}

/// Length of a dashboard list, or None when the backend could not supply it
fn count_or_none<T>(what: &str, result: ClientResult<Vec<T>>) -> Option<usize> {
    match result {
        Ok(items) => Some(items.len()),
        Err(e) => {
            warn!("{what} unavailable: {e}");
            None
        }
    }
}

pub struct App {
    api: Arc<dyn RequestApi>,
    store: RequestStore,
    user: User,
    validator: RequestValidator,
}

impl App {
    pub fn new(api: Arc<dyn RequestApi>, user: User, limits: ValidationLimits) -> Self {
        let store = RequestStore::new(api.clone(), user.corporate_id.clone());
        Self {
            api,
            store,
            user,
            validator: RequestValidator::new(limits),
        }
    }

    pub fn store(&self) -> &RequestStore {
        &self.store
    }

    pub async fn run(&self, command: Commands, now: DateTime<Utc>) -> CliResult<Outcome> {
        match command {
            Commands::Request { action } => match action {
                RequestCommands::List { status } => {
                    self.store.fetch(status).await;
                    self.render(|state| Outcome::ok(&cards(&state.requests, now)))
                }
                RequestCommands::Open { page } => {
                    self.store.refresh().await;
                    self.render(|state| {
                        Outcome::ok(&OpenRequestsPage::new(&state.open_requests(), page, now))
                    })
                }
                RequestCommands::Stats => {
                    self.store.refresh().await;
                    self.render(|state| Outcome::ok(&state.stats()))
                }
                RequestCommands::Submit { kind } => {
                    self.submit(kind.into_submit_request(), now).await
                }
            },
            Commands::Project { action } => match action {
                ProjectCommands::Approved => {
                    let projects = self.api.get_approved_projects().await?;
                    Outcome::ok(&projects)
                }
                ProjectCommands::Authored => {
                    let projects = self.api.get_authored_projects(self.store.user_id()).await?;
                    Outcome::ok(&projects)
                }
                ProjectCommands::Contributed => {
                    let projects = self
                        .api
                        .get_contributed_projects(self.store.user_id())
                        .await?;
                    Outcome::ok(&projects)
                }
            },
            Commands::Dashboard => self.dashboard(now).await,
            Commands::User => Outcome::ok(&self.user),
        }
    }

    /// Validate, submit, and report the refreshed open requests
    pub async fn submit(&self, data: SubmitRequest, now: DateTime<Utc>) -> CliResult<Outcome> {
        let report = self.validator.validate(&data);
        if let Err(e) = report.check() {
            debug!("{} request rejected: {e}", data.request_type);
            return Outcome::failed(&SubmitOutcome {
                success: false,
                request_id: None,
                message: None,
                error: Some(report.summary()),
                validation: Some(report),
                requests: Vec::new(),
            });
        }

        let accepted = self.store.submit_new_request(&data).await;
        let state = self.store.snapshot();

        let outcome = SubmitOutcome {
            success: accepted,
            request_id: state.last_submission.as_ref().map(|s| s.request_id.clone()),
            message: state.last_submission.as_ref().map(|s| s.message.clone()),
            error: state.error.clone(),
            validation: None,
            requests: cards(&state.open_requests(), now),
        };

        if accepted {
            Outcome::ok(&outcome)
        } else {
            Outcome::failed(&outcome)
        }
    }

    pub async fn dashboard(&self, now: DateTime<Utc>) -> CliResult<Outcome> {
        self.store.refresh().await;

        let user_id = self.store.user_id();
        let authored_projects =
            count_or_none("Authored projects", self.api.get_authored_projects(user_id).await);
        let contributed_projects = count_or_none(
            "Contributed projects",
            self.api.get_contributed_projects(user_id).await,
        );
        let approved_projects = count_or_none(
            "Approved-project catalog",
            self.api.get_approved_projects().await,
        );

        let state = self.store.snapshot();
        let open = state.open_requests();

        Outcome::ok(&Dashboard {
            user: self.user.clone(),
            authored_projects,
            contributed_projects,
            approved_projects,
            stats: state.stats(),
            open_requests: OpenRequestsPage::new(&open, 1, now),
            error: state.error.clone(),
        })
    }

    /// Render the fetched state, or report the fetch failure
    fn render<F>(&self, render: F) -> CliResult<Outcome>
    where
        F: FnOnce(&RequestState) -> CliResult<Outcome>,
    {
        let state = self.store.snapshot();
        match state.error {
            Some(ref error) => Outcome::failed(&ErrorOutput {
                error: error.clone(),
            }),
            None => render(&state),
        }
    }
}
