// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A case store backed by one JSON snapshot on disk.

use std::path::{Path, PathBuf};

use et3_respond_api::{CaseApi, UpstreamError};
use et3_respond_domain::{Application, ApplicationState, CaseSnapshot, Response, ResponseFlags};
use tokio::sync::Mutex;
use tracing::debug;

async fn read_case(path: &Path) -> Result<CaseSnapshot, UpstreamError> {
    let contents: String = tokio::fs::read_to_string(path).await.map_err(|e| {
        UpstreamError::Unavailable(format!("failed to read {}: {e}", path.display()))
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        UpstreamError::Unavailable(format!(
            "{} is not a valid case snapshot: {e}",
            path.display()
        ))
    })
}

async fn write_case(path: &Path, case: &CaseSnapshot) -> Result<(), UpstreamError> {
    let contents: String = serde_json::to_string_pretty(case)
        .map_err(|e| UpstreamError::Unavailable(format!("failed to encode case: {e}")))?;
    tokio::fs::write(path, contents).await.map_err(|e| {
        UpstreamError::Unavailable(format!("failed to write {}: {e}", path.display()))
    })
}

/// Serves a single case from a JSON file, writing changes back in place.
#[derive(Debug)]
pub struct FileCaseStore {
    path: PathBuf,
    case_id: String,
    write_lock: Mutex<()>,
}

impl FileCaseStore {
    /// Opens the snapshot at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a case snapshot.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, UpstreamError> {
        let path: PathBuf = path.into();
        let case: CaseSnapshot = read_case(&path).await?;
        debug!(
            path = %path.display(),
            case_id = %case.id,
            applications = case.applications.len(),
            "Opened case snapshot"
        );
        Ok(Self {
            path,
            case_id: case.id,
            write_lock: Mutex::new(()),
        })
    }

    /// The id of the case held in the file.
    #[must_use]
    pub fn case_id(&self) -> &str {
        &self.case_id
    }

    fn check_case_id(&self, case_id: &str) -> Result<(), UpstreamError> {
        if case_id == self.case_id {
            Ok(())
        } else {
            Err(UpstreamError::NotFound {
                case_id: case_id.to_string(),
            })
        }
    }

    /// Reads, changes and writes back the case under the write lock.
    async fn modify<R>(
        &self,
        case_id: &str,
        change: impl FnOnce(&mut CaseSnapshot) -> Result<R, UpstreamError>,
    ) -> Result<R, UpstreamError> {
        self.check_case_id(case_id)?;
        let _guard = self.write_lock.lock().await;
        let mut case: CaseSnapshot = read_case(&self.path).await?;
        let result: R = change(&mut case)?;
        write_case(&self.path, &case).await?;
        Ok(result)
    }
}

fn application_mut<'a>(
    case: &'a mut CaseSnapshot,
    application_id: &str,
) -> Result<&'a mut Application, UpstreamError> {
    case.applications
        .iter_mut()
        .find(|a| a.id == application_id)
        .ok_or_else(|| UpstreamError::Rejected {
            message: format!("application {application_id} is not on the case"),
        })
}

impl CaseApi for FileCaseStore {
    async fn fetch_case(&self, case_id: &str) -> Result<CaseSnapshot, UpstreamError> {
        self.check_case_id(case_id)?;
        read_case(&self.path).await
    }

    async fn submit_application(
        &self,
        case_id: &str,
        application: Application,
    ) -> Result<Application, UpstreamError> {
        self.modify(case_id, |case| {
            if case.application(&application.id).is_some() {
                return Err(UpstreamError::Rejected {
                    message: format!("application {} already exists", application.id),
                });
            }
            case.applications.push(application.clone());
            Ok(application)
        })
        .await
    }

    async fn submit_response(
        &self,
        case_id: &str,
        application_id: &str,
        response: Response,
        flags: ResponseFlags,
    ) -> Result<(), UpstreamError> {
        self.modify(case_id, |case| {
            let application: &mut Application = application_mut(case, application_id)?;
            application.responses.push(response);
            application.set_response_flags(flags);
            Ok(())
        })
        .await
    }

    async fn update_application_status(
        &self,
        case_id: &str,
        application_id: &str,
        user_id: &str,
        state: ApplicationState,
    ) -> Result<(), UpstreamError> {
        self.modify(case_id, |case| {
            let application: &mut Application = application_mut(case, application_id)?;
            *application = application.with_view_state(user_id, state);
            Ok(())
        })
        .await
    }
}
