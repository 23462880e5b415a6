//! Selection hand-off: from "list visible" to "patient chosen".
//!
//! Routing lives in the webview, so a navigation intent is a `navigate`
//! event the frontend router listens for; window focus goes through the
//! Tauri window API. Both sit behind [`NavigationHost`] so the flow is
//! testable without a running app.

use std::future::Future;

use tauri::{AppHandle, Emitter, Manager};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    AwaitingSelection,
    Navigating,
    Failed,
}

#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("Navigation failed: {0}")]
    Navigate(String),
    #[error("Focus request failed: {0}")]
    Focus(String),
}

/// Navigation and focus capabilities of the windowing host.
pub trait NavigationHost: Send + Sync {
    fn navigate_to(&self, route: &str) -> impl Future<Output = Result<(), NavigationError>> + Send;
    fn focus_main_window(&self) -> impl Future<Output = Result<(), NavigationError>> + Send;
}

/// Detail-screen route for a patient id.
pub fn patient_route(patient_id: &str) -> String {
    format!("/patient/{patient_id}")
}

/// The picker's state machine:
/// `Idle → AwaitingSelection → Navigating → (Idle | Failed → Idle)`.
///
/// `Failed` is transient — whatever happens during the hand-off, the flow
/// comes to rest at `Idle` so the dialog can never be left stuck open.
#[derive(Debug, Default)]
pub struct SelectionFlow {
    state: FlowState,
    query: String,
}

impl SelectionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Open the picker: any stale query is cleared before the list shows.
    pub fn begin(&mut self) {
        self.query.clear();
        self.state = FlowState::AwaitingSelection;
    }

    pub fn set_query(&mut self, query: &str) {
        query.clone_into(&mut self.query);
    }

    /// Abandon selection before the hand-off completes. No side effects.
    pub fn cancel(&mut self) {
        self.state = FlowState::Idle;
    }

    /// Run the hand-off for the chosen patient. Returns whether it
    /// succeeded; failures are logged and swallowed — the dialog closing
    /// is itself the recovery.
    pub async fn select<H: NavigationHost>(&mut self, host: &H, patient_id: &str) -> bool {
        self.state = FlowState::Navigating;
        let route = patient_route(patient_id);

        let outcome = async {
            host.navigate_to(&route).await?;
            host.focus_main_window().await
        }
        .await;

        let handed_off = match outcome {
            Ok(()) => true,
            Err(e) => {
                self.state = FlowState::Failed;
                tracing::warn!(patient_id, error = %e, "Patient hand-off failed");
                false
            }
        };

        self.state = FlowState::Idle;
        handed_off
    }
}

/// Host backed by the running Tauri app.
pub struct TauriNavigationHost {
    app: AppHandle,
}

impl TauriNavigationHost {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl NavigationHost for TauriNavigationHost {
    fn navigate_to(&self, route: &str) -> impl Future<Output = Result<(), NavigationError>> + Send {
        let result = self
            .app
            .emit("navigate", route.to_string())
            .map_err(|e| NavigationError::Navigate(e.to_string()));
        async move { result }
    }

    fn focus_main_window(&self) -> impl Future<Output = Result<(), NavigationError>> + Send {
        let result = self
            .app
            .get_webview_window("main")
            .ok_or_else(|| NavigationError::Focus("main window not found".into()))
            .and_then(|window| {
                window
                    .set_focus()
                    .map_err(|e| NavigationError::Focus(e.to_string()))
            });
        async move { result }
    }
}
