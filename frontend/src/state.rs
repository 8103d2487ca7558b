//! Upload widget state machine.
//!
//! The widget moves through explicit phases instead of independent flags,
//! so an upload already in flight cannot be restarted or have its file
//! swapped underneath it.
//!
//! ```text
//!            select_file            begin_upload
//!   Idle ─────────────────▶ FileSelected ─────────▶ Uploading ──succeed──▶ Succeeded
//!    ▲                        │   ▲                   │   │
//!    └────── remove_file ─────┘   └───── abandon ─────┘   └──fail──▶ Failed ──begin_upload──▶ Uploading
//! ```
//!
//! Notification and login-prompt visibility live beside the phase and are
//! toggled freely.

use std::cell::RefCell;

use leptos::{create_memo, Memo, RwSignal, SignalUpdate, SignalWith};

use crate::types::{NotificationState, Severity, UploadFile};

/// Where the widget is in the upload flow.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadPhase<F> {
    /// No file selected
    Idle,
    /// File chosen, waiting for the user
    FileSelected(F),
    /// Destination request or transfer in flight
    Uploading(F),
    /// Last upload completed; file cleared
    Succeeded,
    /// Destination request failed; file kept for retry
    Failed(F),
}

impl<F> Default for UploadPhase<F> {
    fn default() -> Self {
        UploadPhase::Idle
    }
}

/// Local state of one upload widget.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetState<F> {
    phase: UploadPhase<F>,
    notification: NotificationState,
    auth_prompt_open: bool,
}

impl<F> Default for WidgetState<F> {
    fn default() -> Self {
        Self {
            phase: UploadPhase::Idle,
            notification: NotificationState::default(),
            auth_prompt_open: false,
        }
    }
}

impl<F: UploadFile> WidgetState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &UploadPhase<F> {
        &self.phase
    }

    pub fn notification(&self) -> NotificationState {
        self.notification
    }

    pub fn auth_prompt_open(&self) -> bool {
        self.auth_prompt_open
    }

    /// The file currently held by the widget, if any.
    pub fn selected_file(&self) -> Option<&F> {
        match &self.phase {
            UploadPhase::FileSelected(file) | UploadPhase::Uploading(file) | UploadPhase::Failed(file) => {
                Some(file)
            }
            UploadPhase::Idle | UploadPhase::Succeeded => None,
        }
    }

    pub fn has_file(&self) -> bool {
        self.selected_file().is_some()
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.phase, UploadPhase::Uploading(_))
    }

    /// Keep the first file of a picker selection, replacing any previous one.
    ///
    /// Returns `false` when nothing changed (empty selection or upload in
    /// flight).
    pub fn select_file(&mut self, files: impl IntoIterator<Item = F>) -> bool {
        if self.is_uploading() {
            return false;
        }
        match files.into_iter().next() {
            Some(file) => {
                self.phase = UploadPhase::FileSelected(file);
                true
            }
            None => false,
        }
    }

    /// Drop the selected file. Ignored while uploading.
    pub fn remove_file(&mut self) {
        if matches!(self.phase, UploadPhase::FileSelected(_) | UploadPhase::Failed(_)) {
            self.phase = UploadPhase::Idle;
        }
    }

    /// Enter `Uploading` and hand out the file to send.
    ///
    /// Yields `None` when there is no file or an upload is already running.
    pub fn begin_upload(&mut self) -> Option<F> {
        match std::mem::take(&mut self.phase) {
            UploadPhase::FileSelected(file) | UploadPhase::Failed(file) => {
                self.phase = UploadPhase::Uploading(file.clone());
                Some(file)
            }
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// Transfer completed: clear the file and announce success.
    pub fn succeed(&mut self) {
        self.phase = UploadPhase::Succeeded;
        self.notify(Severity::Success);
    }

    /// Destination request failed: keep the file and announce failure.
    pub fn fail(&mut self) {
        self.phase = match std::mem::take(&mut self.phase) {
            UploadPhase::Uploading(file) | UploadPhase::FileSelected(file) | UploadPhase::Failed(file) => {
                UploadPhase::Failed(file)
            }
            other => other,
        };
        self.notify(Severity::Error);
    }

    /// Leave `Uploading` without touching the notification.
    pub fn abandon(&mut self) {
        if let UploadPhase::Uploading(file) = std::mem::take(&mut self.phase) {
            self.phase = UploadPhase::FileSelected(file);
        }
    }

    pub fn toggle_notification(&mut self) {
        self.notification.open = !self.notification.open;
    }

    pub fn dismiss_notification(&mut self) {
        self.notification.open = false;
    }

    pub fn open_auth_prompt(&mut self) {
        self.auth_prompt_open = true;
    }

    pub fn close_auth_prompt(&mut self) {
        self.auth_prompt_open = false;
    }

    fn notify(&mut self, severity: Severity) {
        self.notification = NotificationState {
            open: true,
            severity: Some(severity),
        };
    }
}

/// Somewhere a [`WidgetState`] can be mutated from async code.
///
/// The component keeps its state in a reactive signal; tests use a
/// `RefCell`.
pub trait WidgetStore<F> {
    /// Apply `f` to the state. `None` if the state is gone (disposed signal).
    fn modify<R>(&self, f: impl FnOnce(&mut WidgetState<F>) -> R) -> Option<R>;
}

impl<F> WidgetStore<F> for RefCell<WidgetState<F>> {
    fn modify<R>(&self, f: impl FnOnce(&mut WidgetState<F>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<F: 'static> WidgetStore<F> for RwSignal<WidgetState<F>> {
    fn modify<R>(&self, f: impl FnOnce(&mut WidgetState<F>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Banner state of a reactive widget.
///
/// Memoized so subscribers only rerun when the notification itself changes,
/// not on every file selection or phase change.
pub fn notification_memo<F: UploadFile + 'static>(state: RwSignal<WidgetState<F>>) -> Memo<NotificationState> {
    create_memo(move |_| state.with(|s| s.notification()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct TestFile(&'static str);

    impl UploadFile for TestFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    fn with_file(name: &'static str) -> WidgetState<TestFile> {
        let mut state = WidgetState::new();
        assert!(state.select_file([TestFile(name)]));
        state
    }

    #[test]
    fn test_empty_selection_keeps_previous_file() {
        let mut state = with_file("catalog.csv");

        assert!(!state.select_file(Vec::new()));
        assert_eq!(state.selected_file(), Some(&TestFile("catalog.csv")));
    }

    #[test]
    fn test_select_takes_first_and_replaces() {
        let mut state = with_file("old.csv");

        state.select_file(vec![TestFile("new.csv"), TestFile("other.csv")]);
        assert_eq!(state.selected_file(), Some(&TestFile("new.csv")));
    }

    #[test]
    fn test_remove_then_upload_is_noop() {
        let mut state = with_file("catalog.csv");

        state.remove_file();
        assert!(!state.has_file());
        assert_eq!(state.begin_upload(), None);
        assert_eq!(state.phase(), &UploadPhase::Idle);
    }

    #[test]
    fn test_second_begin_upload_is_rejected() {
        let mut state = with_file("catalog.csv");

        assert_eq!(state.begin_upload(), Some(TestFile("catalog.csv")));
        assert!(state.is_uploading());
        assert_eq!(state.begin_upload(), None);
        assert!(state.is_uploading());
    }

    #[test]
    fn test_selection_and_removal_ignored_while_uploading() {
        let mut state = with_file("catalog.csv");
        state.begin_upload();

        assert!(!state.select_file([TestFile("other.csv")]));
        state.remove_file();
        assert_eq!(state.phase(), &UploadPhase::Uploading(TestFile("catalog.csv")));
    }

    #[test]
    fn test_success_clears_file_and_opens_banner() {
        let mut state = with_file("catalog.csv");
        state.begin_upload();
        state.succeed();

        assert!(!state.has_file());
        assert!(state.notification().open);
        assert!(state.notification().is_success());
    }

    #[test]
    fn test_failure_keeps_file_for_retry() {
        let mut state = with_file("catalog.csv");
        state.begin_upload();
        state.fail();

        assert_eq!(state.phase(), &UploadPhase::Failed(TestFile("catalog.csv")));
        assert!(state.notification().open);
        assert_eq!(state.notification().severity, Some(Severity::Error));

        assert_eq!(state.begin_upload(), Some(TestFile("catalog.csv")));
    }

    #[test]
    fn test_abandon_leaves_notification_alone() {
        let mut state = with_file("catalog.csv");
        state.begin_upload();
        state.abandon();

        assert_eq!(state.phase(), &UploadPhase::FileSelected(TestFile("catalog.csv")));
        assert_eq!(state.notification(), NotificationState::default());
    }

    #[test]
    fn test_toggle_and_dismiss_notification() {
        let mut state = WidgetState::<TestFile>::new();

        state.toggle_notification();
        assert!(state.notification().open);
        state.toggle_notification();
        assert!(!state.notification().open);

        state.toggle_notification();
        state.dismiss_notification();
        state.dismiss_notification();
        assert!(!state.notification().open);
    }

    #[test]
    fn test_auth_prompt_does_not_touch_upload_state() {
        let mut state = with_file("catalog.csv");

        state.open_auth_prompt();
        assert!(state.auth_prompt_open());
        state.close_auth_prompt();
        assert!(!state.auth_prompt_open());
        assert_eq!(state.phase(), &UploadPhase::FileSelected(TestFile("catalog.csv")));
    }

    #[test]
    fn test_notification_memo_ignores_unrelated_changes() {
        use leptos::{create_effect, create_runtime, create_rw_signal, SignalGet};
        use std::cell::Cell;
        use std::rc::Rc;

        let runtime = create_runtime();
        let state = create_rw_signal(with_file("catalog.csv"));
        let notification = notification_memo(state);
        let runs = Rc::new(Cell::new(0));

        create_effect({
            let runs = Rc::clone(&runs);
            move |_| {
                let _ = notification.get();
                runs.set(runs.get() + 1);
            }
        });
        assert_eq!(runs.get(), 1);

        state.update(|s| {
            s.begin_upload();
            s.succeed();
        });
        assert_eq!(runs.get(), 2);

        state.update(|s| {
            s.select_file([TestFile("next.csv")]);
        });
        state.update(|s| {
            s.begin_upload();
            s.abandon();
        });
        assert_eq!(runs.get(), 2);

        state.update(|s| s.dismiss_notification());
        assert_eq!(runs.get(), 3);

        runtime.dispose();
    }

    #[test]
    fn test_refcell_store() {
        let store = RefCell::new(with_file("catalog.csv"));

        let file = store.modify(|state| state.begin_upload()).flatten();
        assert_eq!(file, Some(TestFile("catalog.csv")));
        assert!(store.borrow().is_uploading());
    }
}
