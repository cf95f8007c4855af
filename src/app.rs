//! Application state and core logic

use crate::api::{
    Acknowledgment, CatalogApi, CatalogClient, CategoryList, CategoryProvider, SubmissionError,
    SubmissionService,
};
use crate::config::WizardConfig;
use crate::state::{
    edit_field, AddressPatch, AppState, FieldInput, FormButton, FormData, FormState, FormStore,
    NavigationError, Step,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Window for the second Ctrl+C press
const QUIT_WINDOW: Duration = Duration::from_millis(1000);

/// Results delivered by background tasks
#[derive(Debug)]
pub enum AppEvent {
    CategoriesLoaded {
        seq: u64,
        list: CategoryList,
    },
    SubmissionFinished {
        seq: u64,
        result: Result<Acknowledgment, SubmissionError>,
    },
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Applicant data for this session
    pub store: FormStore,
    categories: CategoryProvider,
    submission: SubmissionService,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    store_changes: watch::Receiver<FormData>,
    /// Last issued request sequence number
    request_seq: u64,
    pending_categories: Option<(u64, JoinHandle<()>)>,
    pending_submission: Option<u64>,
    /// Whether the app should quit
    quit: bool,
    /// Transient status bar message
    pub status_message: Option<String>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App talking to the configured catalog service
    pub fn new(config: &WizardConfig) -> Result<Self> {
        let client = CatalogClient::new(config)?;
        Ok(Self::with_api(Arc::new(client)))
    }

    /// Create an App on top of any catalog implementation
    pub fn with_api(api: Arc<dyn CatalogApi>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let store = FormStore::new();
        let store_changes = store.subscribe();

        Self {
            state: AppState::new(),
            store,
            categories: CategoryProvider::new(api.clone()),
            submission: SubmissionService::new(api),
            events_tx,
            events_rx,
            store_changes,
            request_seq: 0,
            pending_categories: None,
            pending_submission: None,
            quit: false,
            status_message: None,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a background request is in flight
    pub fn is_busy(&self) -> bool {
        self.state.categories_loading || self.state.submitting
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    fn next_seq(&mut self) -> u64 {
        self.request_seq += 1;
        self.request_seq
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Quit: Ctrl+C twice in a row
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            let now = Instant::now();
            if self
                .last_ctrl_c
                .is_some_and(|prev| now.duration_since(prev) < QUIT_WINDOW)
            {
                self.quit = true;
            } else {
                self.last_ctrl_c = Some(now);
                self.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
            return Ok(());
        }
        self.last_ctrl_c = None;

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_step() {
            Step::Success => self.handle_success_key(key),
            Step::Personal | Step::Address | Step::Loan => self.handle_form_key(key).await,
        }

        Ok(())
    }

    /// Handle keys on the success dialog
    fn handle_success_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.acknowledge();
        }
    }

    /// Handle keys on one of the three step forms
    async fn handle_form_key(&mut self, key: KeyEvent) {
        let on_buttons = self.state.form.is_buttons_row_active();
        let modifier = crate::platform::ACTION_MODIFIER;

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::Down if !on_buttons => self.state.form.next_field(),
            KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Esc => self.go_back(),
            KeyCode::Char('r')
                if key.modifiers.contains(modifier) && self.state.current_step() == Step::Address =>
            {
                self.reload_categories().await;
            }
            KeyCode::Char('x') if key.modifiers.contains(modifier) => {
                self.state.dismiss_advisory();
            }
            KeyCode::Left if on_buttons => self.state.form.prev_button(),
            KeyCode::Right if on_buttons => self.state.form.next_button(),
            KeyCode::Enter if on_buttons => {
                if let Some(button) = self.state.form.selected_button() {
                    self.press_button(button);
                }
            }
            KeyCode::Enter => self.primary_action(),
            KeyCode::Left => self.edit_focused(FieldInput::Decrease),
            KeyCode::Right => self.edit_focused(FieldInput::Increase),
            KeyCode::Backspace => self.edit_focused(FieldInput::Backspace),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_focused(FieldInput::Char(c))
            }
            _ => {}
        }
    }

    fn press_button(&mut self, button: FormButton) {
        match button {
            FormButton::Back => self.go_back(),
            FormButton::Next => self.try_advance(),
            FormButton::Submit => self.submit(),
        }
    }

    /// Enter outside the buttons row: Next on steps 1-2, Submit on step 3
    fn primary_action(&mut self) {
        match self.state.current_step() {
            Step::Personal | Step::Address => self.try_advance(),
            Step::Loan => self.submit(),
            Step::Success => {}
        }
    }

    /// Apply an input to the focused field and clear that field's error
    fn edit_focused(&mut self, input: FieldInput) {
        let Some(field) = self.state.form.focused_field() else {
            return;
        };
        if self.state.submitting {
            return;
        }
        let update = edit_field(field, input, &self.store.snapshot(), &self.state.categories);
        if let Some(update) = update {
            update.apply_to(&self.store);
            self.state.form.clear_error(field);
        }
    }

    /// Validate the current step and move forward when it passes
    pub fn try_advance(&mut self) {
        if self.state.current_step() == Step::Address && self.state.categories_loading {
            self.status_message = Some("Workplaces are still loading".to_string());
            return;
        }
        let result = {
            let data = self.store.snapshot();
            self.state.navigator.advance(&data)
        };
        match result {
            Ok(step) => self.enter_step(step),
            Err(NavigationError::Validation(errors)) => {
                tracing::debug!(
                    "Step {:?} blocked on {} field(s): {errors}",
                    self.state.current_step(),
                    errors.len()
                );
                self.state.form.set_errors(errors);
            }
            Err(err) => self.push_error(err.to_string()),
        }
    }

    /// Move one step back without validation
    pub fn go_back(&mut self) {
        if !self.state.can_go_back() {
            return;
        }
        match self.state.navigator.back() {
            Ok(step) => self.enter_step(step),
            Err(err) => self.push_error(err.to_string()),
        }
    }

    /// Dismiss the success screen and start a new application
    pub fn acknowledge(&mut self) {
        match self.state.navigator.acknowledge(&self.store) {
            Ok(step) => {
                self.state.acknowledgment = None;
                self.enter_step(step);
            }
            Err(err) => self.push_error(err.to_string()),
        }
    }

    /// Set up the view for a step just entered
    fn enter_step(&mut self, step: Step) {
        if step != Step::Address {
            self.cancel_category_fetch();
        }
        self.state.form = FormState::for_step(step);
        self.state.submit_error = None;
        if step == Step::Address {
            self.start_category_fetch();
        }
    }

    /// Fetch workplace categories in the background
    pub fn start_category_fetch(&mut self) {
        self.cancel_category_fetch();
        let seq = self.next_seq();
        self.state.categories_loading = true;
        self.state.category_advisory = None;
        self.state.categories.clear();

        let provider = self.categories.clone();
        let tx = self.events_tx.clone();
        let handle = tokio::spawn(async move {
            let list = provider.get_categories().await;
            // Receiver gone means the app is shutting down
            let _ = tx.send(AppEvent::CategoriesLoaded { seq, list });
        });
        self.pending_categories = Some((seq, handle));
    }

    /// Abort an in-flight category fetch; a late result is discarded by sequence
    fn cancel_category_fetch(&mut self) {
        if let Some((seq, handle)) = self.pending_categories.take() {
            tracing::debug!("Cancelling category fetch #{seq}");
            handle.abort();
        }
        self.state.categories_loading = false;
    }

    /// Drop the cached list and fetch it again
    async fn reload_categories(&mut self) {
        // The in-flight fetch holds the cache lock; abort it before clearing
        self.cancel_category_fetch();
        self.categories.clear_cache().await;
        self.start_category_fetch();
        self.status_message = Some("Reloading workplaces...".to_string());
    }

    /// Send the application in the background
    pub fn submit(&mut self) {
        if self.state.submitting || self.state.current_step() != Step::Loan {
            return;
        }
        let seq = self.next_seq();
        self.state.submitting = true;
        self.state.submit_error = None;
        self.pending_submission = Some(seq);

        let title = self.store.snapshot().applicant_title();
        let service = self.submission.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = service.submit(&title).await;
            let _ = tx.send(AppEvent::SubmissionFinished { seq, result });
        });
    }

    /// Apply every finished background result
    pub fn process_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }

        if self.store_changes.has_changed().unwrap_or(false) {
            let data = self.store_changes.borrow_and_update();
            tracing::debug!(
                "Form data changed on {:?}: amount={} term={}",
                self.state.navigator.current(),
                data.loan.amount,
                data.loan.term
            );
        }
    }

    /// Clear a workplace chosen from an earlier list that the new list lacks
    fn drop_unlisted_workplace(&mut self) {
        let listed = {
            let data = self.store.snapshot();
            let workplace = &data.address.workplace;
            workplace.is_empty() || self.state.categories.iter().any(|c| &c.name == workplace)
        };
        if !listed {
            tracing::debug!("Previous workplace is not in the loaded list, clearing it");
            self.store.update_address(AddressPatch {
                workplace: Some(String::new()),
                ..Default::default()
            });
        }
    }

    /// Apply one background result unless it is stale
    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::CategoriesLoaded { seq, list } => {
                let current = self.pending_categories.as_ref().map(|(s, _)| *s);
                if current != Some(seq) || self.state.current_step() != Step::Address {
                    tracing::debug!("Discarding stale category result #{seq}");
                    return;
                }
                self.pending_categories = None;
                self.state.categories_loading = false;
                self.state.categories = list.categories;
                self.drop_unlisted_workplace();
                self.state.category_advisory = list.advisory.map(|err| {
                    tracing::warn!("Using fallback workplaces: {err}");
                    format!("{err}. Using the fallback list.")
                });
            }
            AppEvent::SubmissionFinished { seq, result } => {
                if self.pending_submission != Some(seq) || self.state.current_step() != Step::Loan
                {
                    tracing::debug!("Discarding stale submission result #{seq}");
                    return;
                }
                self.pending_submission = None;
                self.state.submitting = false;
                match result {
                    Ok(ack) => {
                        self.state.acknowledgment = Some(ack);
                        match self.state.navigator.complete_submission() {
                            Ok(step) => self.enter_step(step),
                            Err(err) => self.push_error(err.to_string()),
                        }
                    }
                    Err(err) => self.state.submit_error = Some(err.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{fallback_categories, ApiError, MockCatalogApi};
    use crate::state::{Field, Gender, PersonalPatch};
    use async_trait::async_trait;
    use serde_json::Map;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn ack(title: &str) -> Acknowledgment {
        Acknowledgment {
            id: 101,
            title: title.to_string(),
            extra: Map::new(),
        }
    }

    fn test_app() -> App {
        let mut mock = MockCatalogApi::new();
        mock.expect_fetch_category_list()
            .returning(|| Ok(vec!["mens-shoes".to_string(), "laptops".to_string()]));
        mock.expect_category_url()
            .returning(|slug| format!("https://dummyjson.com/products/category/{slug}"));
        mock.expect_add_product()
            .returning(|title| Ok(ack(title)));
        App::with_api(Arc::new(mock))
    }

    fn fill_personal(app: &App) {
        app.store.update_personal(PersonalPatch {
            phone: Some("0999 123 456".to_string()),
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            gender: Some(Gender::Female),
        });
    }

    fn fill_address(app: &App) {
        app.store.update_address(AddressPatch {
            workplace: Some("Shoe Store".to_string()),
            address: Some("Main St 1".to_string()),
        });
    }

    /// Wait for the background task and apply its event
    async fn drain_one(app: &mut App) {
        let event = app.events_rx.recv().await.unwrap();
        app.apply_event(event);
    }

    mod navigation {
        use super::*;

        #[tokio::test]
        async fn test_enter_on_empty_personal_sets_errors() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.current_step(), Step::Personal);
            assert!(app.state.form.error(Field::Phone).is_some());
            assert!(app.state.form.error(Field::Gender).is_some());
        }

        #[tokio::test]
        async fn test_typing_clears_only_that_error() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.state.form.focus(Field::FirstName);

            app.handle_key(key(KeyCode::Char('J'))).await.unwrap();

            assert!(app.state.form.error(Field::FirstName).is_none());
            assert!(app.state.form.error(Field::Phone).is_some());
            assert!(app.state.form.error(Field::LastName).is_some());
            assert_eq!(app.store.snapshot().personal.first_name, "J");
        }

        #[tokio::test]
        async fn test_valid_personal_advances_and_fetches() {
            let mut app = test_app();
            fill_personal(&app);

            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.current_step(), Step::Address);
            assert!(app.state.categories_loading);

            drain_one(&mut app).await;

            assert!(!app.state.categories_loading);
            assert_eq!(app.state.categories.len(), 2);
            assert_eq!(app.state.categories[0].name, "Shoe Store");
            assert!(app.state.category_advisory.is_none());
        }

        #[tokio::test]
        async fn test_esc_on_address_goes_back_without_validation() {
            let mut app = test_app();
            fill_personal(&app);
            app.try_advance();

            app.handle_key(key(KeyCode::Esc)).await.unwrap();

            assert_eq!(app.state.current_step(), Step::Personal);
            assert!(!app.state.categories_loading);
        }

        #[tokio::test]
        async fn test_workplace_selected_from_loaded_list() {
            let mut app = test_app();
            fill_personal(&app);
            app.try_advance();
            drain_one(&mut app).await;

            app.handle_key(key(KeyCode::Right)).await.unwrap();

            assert_eq!(app.store.snapshot().address.workplace, "Shoe Store");
        }

        #[tokio::test]
        async fn test_back_button_on_buttons_row() {
            let mut app = test_app();
            fill_personal(&app);
            app.try_advance();
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            assert!(app.state.form.is_buttons_row_active());

            app.handle_key(key(KeyCode::Left)).await.unwrap();
            assert_eq!(app.state.form.selected_button(), Some(FormButton::Back));
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.current_step(), Step::Personal);
        }
    }

    mod stale_results {
        use super::*;

        #[tokio::test]
        async fn test_category_result_after_leaving_step_is_discarded() {
            let mut app = test_app();
            fill_personal(&app);
            app.try_advance();
            let seq = app.pending_categories.as_ref().map(|(s, _)| *s).unwrap();
            app.go_back();

            app.apply_event(AppEvent::CategoriesLoaded {
                seq,
                list: CategoryList {
                    categories: fallback_categories(),
                    advisory: None,
                },
            });

            assert!(app.state.categories.is_empty());
        }

        #[tokio::test]
        async fn test_superseded_fetch_is_discarded() {
            let mut app = test_app();
            fill_personal(&app);
            app.try_advance();
            let old_seq = app.pending_categories.as_ref().map(|(s, _)| *s).unwrap();
            app.start_category_fetch();

            app.apply_event(AppEvent::CategoriesLoaded {
                seq: old_seq,
                list: CategoryList {
                    categories: fallback_categories(),
                    advisory: None,
                },
            });

            assert!(app.state.categories.is_empty());
            assert!(app.state.categories_loading);
        }

        #[tokio::test]
        async fn test_fallback_sets_advisory() {
            let mut mock = MockCatalogApi::new();
            mock.expect_fetch_category_list()
                .returning(|| Err(ApiError::Status(503)));
            let mut app = App::with_api(Arc::new(mock));
            fill_personal(&app);
            app.try_advance();

            drain_one(&mut app).await;

            assert_eq!(app.state.categories, fallback_categories());
            assert_eq!(
                app.state.category_advisory.as_deref(),
                Some("Failed to load workplaces. Using the fallback list.")
            );

            app.handle_key(ctrl('x')).await.unwrap();
            assert!(app.state.category_advisory.is_none());
        }
    }

    mod workplaces {
        use super::*;

        /// Catalog whose category listing answers after a delay
        struct SlowCatalog {
            delay: Duration,
        }

        #[async_trait]
        impl CatalogApi for SlowCatalog {
            async fn fetch_category_list(&self) -> Result<Vec<String>, ApiError> {
                tokio::time::sleep(self.delay).await;
                Ok(vec!["laptops".to_string()])
            }

            async fn add_product(&self, _title: &str) -> Result<Acknowledgment, ApiError> {
                Err(ApiError::Status(500))
            }

            fn category_url(&self, slug: &str) -> String {
                format!("http://catalog.test/products/category/{slug}")
            }
        }

        /// Fails the first listing, succeeds afterwards
        fn flaky_mock() -> MockCatalogApi {
            let calls = Arc::new(AtomicUsize::new(0));
            let mut mock = MockCatalogApi::new();
            mock.expect_fetch_category_list().returning(move || {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(ApiError::Status(503))
                } else {
                    Ok(vec!["laptops".to_string()])
                }
            });
            mock.expect_category_url().returning(|_| String::new());
            mock
        }

        #[tokio::test]
        async fn test_reload_during_slow_fetch_does_not_block() {
            let mut app = App::with_api(Arc::new(SlowCatalog {
                delay: Duration::from_secs(3),
            }));
            fill_personal(&app);
            app.try_advance();
            let first_seq = app.pending_categories.as_ref().map(|(s, _)| *s);
            tokio::time::sleep(Duration::from_millis(50)).await;

            let reload = tokio::time::timeout(
                Duration::from_millis(500),
                app.handle_key(ctrl('r')),
            )
            .await;

            assert!(reload.is_ok());
            assert!(app.state.categories_loading);
            assert_ne!(app.pending_categories.as_ref().map(|(s, _)| *s), first_seq);
        }

        #[tokio::test]
        async fn test_next_blocked_while_loading() {
            let mut app = App::with_api(Arc::new(SlowCatalog {
                delay: Duration::from_secs(3),
            }));
            fill_personal(&app);
            fill_address(&app);
            app.try_advance();

            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.current_step(), Step::Address);
            assert!(app.state.categories.is_empty());
            assert!(app.status_message.is_some());
        }

        #[tokio::test]
        async fn test_fallback_workplace_dropped_when_real_list_loads() {
            let mut app = App::with_api(Arc::new(flaky_mock()));
            fill_personal(&app);
            app.try_advance();
            drain_one(&mut app).await;
            assert!(app.state.category_advisory.is_some());

            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(app.store.snapshot().address.workplace, "Office Work");

            app.go_back();
            app.try_advance();
            drain_one(&mut app).await;

            assert_eq!(app.state.categories[0].name, "Computer Store");
            assert_eq!(app.store.snapshot().address.workplace, "");
            app.try_advance();
            assert_eq!(app.state.current_step(), Step::Address);
            assert!(app.state.form.error(Field::Workplace).is_some());
        }

        #[tokio::test]
        async fn test_listed_workplace_is_kept() {
            let mut app = test_app();
            fill_personal(&app);
            fill_address(&app);
            app.try_advance();
            drain_one(&mut app).await;

            assert_eq!(app.store.snapshot().address.workplace, "Shoe Store");
        }
    }

    mod submission {
        use super::*;

        async fn app_on_loan() -> App {
            let mut app = test_app();
            fill_personal(&app);
            fill_address(&app);
            app.try_advance();
            drain_one(&mut app).await;
            app.try_advance();
            assert_eq!(app.state.current_step(), Step::Loan);
            app
        }

        #[tokio::test]
        async fn test_submit_success_shows_summary_then_resets() {
            let mut app = app_on_loan().await;
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(app.store.snapshot().loan.amount, 300);

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.submitting);
            drain_one(&mut app).await;

            assert_eq!(app.state.current_step(), Step::Success);
            assert_eq!(
                app.state.acknowledgment.as_ref().map(|a| a.title.as_str()),
                Some("Jane Doe")
            );
            assert_eq!(app.store.snapshot().loan.amount, 300);

            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.current_step(), Step::Personal);
            assert_eq!(*app.store.snapshot(), FormData::default());
            assert!(app.state.acknowledgment.is_none());
        }

        #[tokio::test]
        async fn test_submit_failure_stays_on_loan() {
            let mut mock = MockCatalogApi::new();
            mock.expect_fetch_category_list()
                .returning(|| Ok(vec!["mens-shoes".to_string()]));
            mock.expect_category_url().returning(|_| String::new());
            mock.expect_add_product()
                .returning(|_| Err(ApiError::Status(500)));
            let mut app = App::with_api(Arc::new(mock));
            fill_personal(&app);
            fill_address(&app);
            app.try_advance();
            drain_one(&mut app).await;
            app.try_advance();

            app.submit();
            drain_one(&mut app).await;

            assert_eq!(app.state.current_step(), Step::Loan);
            assert!(!app.state.submitting);
            assert_eq!(
                app.state.submit_error.as_deref(),
                Some("Failed to submit loan application. Please try again.")
            );
        }

        #[tokio::test]
        async fn test_back_disabled_while_submitting() {
            let mut app = app_on_loan().await;
            app.submit();

            app.handle_key(key(KeyCode::Esc)).await.unwrap();

            assert_eq!(app.state.current_step(), Step::Loan);
            drain_one(&mut app).await;
            assert_eq!(app.state.current_step(), Step::Success);
        }

        #[tokio::test]
        async fn test_double_submit_is_ignored() {
            let mut app = app_on_loan().await;
            app.submit();
            let seq = app.pending_submission;
            app.submit();
            assert_eq!(app.pending_submission, seq);
        }
    }

    mod quitting {
        use super::*;

        #[tokio::test]
        async fn test_single_ctrl_c_does_not_quit() {
            let mut app = test_app();
            app.handle_key(ctrl('c')).await.unwrap();
            assert!(!app.should_quit());
            assert!(app.status_message.is_some());
        }

        #[tokio::test]
        async fn test_double_ctrl_c_quits() {
            let mut app = test_app();
            app.handle_key(ctrl('c')).await.unwrap();
            app.handle_key(ctrl('c')).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_other_key_resets_quit_window() {
            let mut app = test_app();
            app.handle_key(ctrl('c')).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(ctrl('c')).await.unwrap();
            assert!(!app.should_quit());
        }
    }

    #[tokio::test]
    async fn test_error_dialog_is_modal() {
        let mut app = test_app();
        app.push_error("boom");
        app.handle_key(key(KeyCode::Char('a'))).await.unwrap();
        assert!(app.state.has_errors());
        assert_eq!(app.store.snapshot().personal.phone, "");
        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert!(!app.state.has_errors());
    }
}
