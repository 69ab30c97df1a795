// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod store;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use et3_respond_api::{
    DocumentLinkBase, RespondService, RespondToApplicationRequest, TranslationTable,
};
use et3_respond_domain::registry::respondent_application_types;
use et3_respond_domain::{ApplicationDraft, CurrentUser, Party, YesOrNo};
use serde::Serialize;
use time::{Date, OffsetDateTime};
use tracing::level_filters::LevelFilter;
use tracing::info;
use tracing_log::AsTrace;

use crate::store::FileCaseStore;

/// ET3 respond - inspect and act on tribunal applications in a case snapshot
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON case snapshot
    #[arg(short, long)]
    case: PathBuf,

    /// Identity of the acting user
    #[arg(short, long)]
    user_id: Option<String>,

    /// Party of the acting user: claimant, respondent or tribunal
    #[arg(short, long, default_value = "respondent")]
    role: Party,

    /// JSON file of label overrides, laid over the built-in English labels
    #[arg(short, long)]
    translations: Option<PathBuf>,

    /// Base URL that document ids are appended to
    #[arg(long, default_value = "/getSupportingMaterial")]
    link_base: String,

    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Show the user's notification banners
    #[command(visible_alias = "n")]
    Notifications,

    /// List the applications the user can see
    #[command(visible_alias = "ls")]
    List,

    /// Show one application and record that the user viewed it
    #[command(visible_alias = "d")]
    Details { application_id: String },

    /// Submit an application draft read from a JSON file
    Submit { draft: PathBuf },

    /// Respond to an application
    Respond {
        application_id: String,

        /// The response text
        #[arg(long)]
        text: Option<String>,

        /// Whether to copy the response to the other party
        #[arg(long, value_enum)]
        copy: Option<CopyAnswer>,
    },

    /// List the application types a respondent may raise
    Types,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CopyAnswer {
    Yes,
    No,
}

impl From<CopyAnswer> for YesOrNo {
    fn from(answer: CopyAnswer) -> Self {
        match answer {
            CopyAnswer::Yes => Self::Yes,
            CopyAnswer::No => Self::No,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApplicationTypeRow {
    code: &'static str,
    url: &'static str,
    category: &'static str,
}

/// The service a case command runs against, opened on demand.
struct Session {
    service: RespondService<FileCaseStore>,
    case_id: String,
    user: CurrentUser,
    today: Date,
}

fn application_types() -> Vec<ApplicationTypeRow> {
    respondent_application_types()
        .map(|descriptor| ApplicationTypeRow {
            code: descriptor.code,
            url: descriptor.url,
            category: descriptor.category.as_str(),
        })
        .collect()
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    /// `RUST_LOG` wins over the verbosity flags when set.
    fn init_tracing(&self) {
        let builder = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .without_time();
        match tracing_subscriber::EnvFilter::try_from_default_env() {
            Ok(filter) => builder.with_env_filter(filter).init(),
            Err(_) => builder.with_max_level(self.log_level()).init(),
        }
    }

    async fn translations(&self) -> Result<TranslationTable> {
        let english: TranslationTable = TranslationTable::english();
        let Some(path) = &self.translations else {
            return Ok(english);
        };
        let contents: String = tokio::fs::read_to_string(path)
            .await
            .wrap_err_with(|| format!("failed to read translations from {}", path.display()))?;
        let overrides: TranslationTable = TranslationTable::from_json(&contents)
            .wrap_err_with(|| format!("{} is not a translation table", path.display()))?;
        info!(path = %path.display(), labels = overrides.len(), "Loaded translations");
        Ok(english.merged_with(overrides))
    }

    async fn session(&self) -> Result<Session> {
        let store: FileCaseStore = FileCaseStore::open(&self.case).await?;
        let case_id: String = store.case_id().to_string();
        let service: RespondService<FileCaseStore> = RespondService::new(
            store,
            self.translations().await?,
            DocumentLinkBase::new(&self.link_base),
        );
        Ok(Session {
            service,
            case_id,
            user: CurrentUser::new(self.user_id.clone(), self.role),
            today: OffsetDateTime::now_utc().date(),
        })
    }

    async fn run(&self) -> Result<()> {
        match &self.command {
            Command::Types => print_json(&application_types()),
            Command::Notifications => {
                let Session {
                    service,
                    case_id,
                    user,
                    ..
                } = self.session().await?;
                print_json(&service.notifications(&case_id, &user).await?)
            }
            Command::List => {
                let Session {
                    service,
                    case_id,
                    user,
                    ..
                } = self.session().await?;
                print_json(&service.list_applications(&case_id, &user).await?)
            }
            Command::Details { application_id } => {
                let Session {
                    service,
                    case_id,
                    user,
                    ..
                } = self.session().await?;
                print_json(
                    &service
                        .application_details(&case_id, &user, application_id)
                        .await?,
                )
            }
            Command::Submit { draft } => {
                let contents: String = tokio::fs::read_to_string(draft)
                    .await
                    .wrap_err_with(|| format!("failed to read draft {}", draft.display()))?;
                let draft: ApplicationDraft = serde_json::from_str(&contents)
                    .wrap_err("draft is not a valid application draft")?;
                let Session {
                    service,
                    case_id,
                    user,
                    today,
                } = self.session().await?;
                print_json(
                    &service
                        .submit_application(&case_id, &user, &draft, today)
                        .await?,
                )
            }
            Command::Respond {
                application_id,
                text,
                copy,
            } => {
                let request: RespondToApplicationRequest = RespondToApplicationRequest {
                    application_id: application_id.clone(),
                    response: text.clone(),
                    supporting_material: Vec::new(),
                    copy_to_other_party: copy.map(YesOrNo::from),
                };
                let Session {
                    service,
                    case_id,
                    user,
                    today,
                } = self.session().await?;
                print_json(
                    &service
                        .respond_to_application(&case_id, &user, request, today)
                        .await?,
                )
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    args.init_tracing();

    match args.run().await {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}
