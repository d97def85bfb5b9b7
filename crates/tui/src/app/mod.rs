use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use engine::{Bill, BillStore, EngineError, Money};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    reminder::{Chime, Reminder},
    ui::{
        self,
        keymap::{AppAction, InputMode},
    },
};

pub use dialog::{AddBillDialog, DialogField};

mod dialog;

const TOAST_TTL: Duration = Duration::from_secs(4);
const REMINDER_TTL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    pub level: ToastLevel,
    pub message: String,
    expires_at: Instant,
}

impl ToastState {
    fn new(level: ToastLevel, message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            level,
            message: message.into(),
            expires_at: Instant::now() + ttl,
        }
    }
}

/// Bills as last read from the store.
#[derive(Debug, Default)]
pub struct BillsState {
    pub items: Vec<Bill>,
    pub total: Money,
    pub last_id: Option<i32>,
    pub selected: usize,
}

impl BillsState {
    pub fn selected_bill(&self) -> Option<&Bill> {
        self.items.get(self.selected)
    }

    fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.items.len() - 1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_id(&mut self, id: i32) {
        if let Some(index) = self.items.iter().position(|bill| bill.id == id) {
            self.selected = index;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }
}

#[derive(Debug)]
pub struct AppState {
    pub bills: BillsState,
    pub dialog: AddBillDialog,
    pub toast: Option<ToastState>,
    pub last_refresh: Option<DateTime<Local>>,
    pub currency_symbol: String,
}

impl AppState {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            bills: BillsState::default(),
            dialog: AddBillDialog::default(),
            toast: None,
            last_refresh: None,
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn input_mode(&self) -> InputMode {
        if self.dialog.is_open() {
            InputMode::Text
        } else {
            InputMode::List
        }
    }

    fn expire_toast(&mut self, now: Instant) {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
        }
    }
}

pub struct App<S> {
    store: S,
    config: AppConfig,
    reminders: UnboundedReceiver<Reminder>,
    chime: Box<dyn Chime>,
    pub state: AppState,
    should_quit: bool,
}

impl<S: BillStore> App<S> {
    pub fn new(
        store: S,
        config: AppConfig,
        reminders: UnboundedReceiver<Reminder>,
        chime: Box<dyn Chime>,
    ) -> Self {
        let state = AppState::new(config.currency_symbol.clone());
        Self {
            store,
            config,
            reminders,
            chime,
            state,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        self.refresh().await;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit() {
            self.drain_reminders();
            self.state.expire_toast(Instant::now());

            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key).await;
            }
        }

        Ok(())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        let action = ui::keymap::map_key(key, self.state.input_mode());
        self.handle_action(action).await;
    }

    async fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Quit => self.should_quit = true,
            AppAction::AddBill => self.state.dialog.open(),
            AppAction::DeleteBill => self.delete_selected().await,
            AppAction::Refresh => self.refresh().await,
            AppAction::Up => self.state.bills.select_prev(),
            AppAction::Down => self.state.bills.select_next(),
            AppAction::Cancel => {
                if self.state.dialog.is_open() {
                    self.state.dialog.cancel();
                } else {
                    self.state.toast = None;
                }
            }
            AppAction::Submit => {
                if self.state.dialog.is_open() {
                    self.confirm_dialog().await;
                }
            }
            AppAction::NextField => self.state.dialog.next_field(),
            AppAction::Backspace => self.state.dialog.pop(),
            AppAction::Input(ch) => self.state.dialog.push(ch),
            AppAction::None => {}
        }
    }

    /// Reload list, total and last id from the store.
    pub async fn refresh(&mut self) {
        match self.load_bills().await {
            Ok(()) => {
                self.state.last_refresh = Some(Local::now());
                tracing::debug!(
                    bills = self.state.bills.items.len(),
                    total = %self.state.bills.total,
                    "bills refreshed"
                );
            }
            Err(err) => self.report_storage_error("refresh", &err),
        }
    }

    async fn load_bills(&mut self) -> std::result::Result<(), EngineError> {
        let items = self.store.list_all().await?;
        let total = self.store.sum_amount().await?;
        let last_id = self.store.max_id().await?;

        let bills = &mut self.state.bills;
        bills.items = items;
        bills.total = total;
        bills.last_id = last_id;
        bills.clamp_selection();
        Ok(())
    }

    async fn confirm_dialog(&mut self) {
        let Some(new_bill) = self.state.dialog.submit() else {
            tracing::debug!("add bill rejected by validation");
            return;
        };

        match self.store.insert(new_bill).await {
            Ok(bill) => {
                tracing::info!(id = bill.id, amount = %bill.amount, "bill added");
                self.state.dialog.complete();
                self.toast(
                    ToastLevel::Success,
                    format!("Added {}", bill.description),
                    TOAST_TTL,
                );
                self.refresh().await;
                self.state.bills.select_id(bill.id);
            }
            Err(err) => self.report_storage_error("insert", &err),
        }
    }

    async fn delete_selected(&mut self) {
        let Some(bill) = self.state.bills.selected_bill().cloned() else {
            return;
        };

        match self.store.delete(&bill).await {
            Ok(removed) => {
                if removed {
                    tracing::info!(id = bill.id, "bill deleted");
                } else {
                    tracing::debug!(id = bill.id, "bill already gone");
                }
                self.toast(
                    ToastLevel::Info,
                    format!("Deleted {}", bill.description),
                    TOAST_TTL,
                );
                self.refresh().await;
            }
            Err(err) => self.report_storage_error("delete", &err),
        }
    }

    /// Show every reminder that fired since the last tick.
    pub fn drain_reminders(&mut self) {
        while let Ok(reminder) = self.reminders.try_recv() {
            self.show_reminder(&reminder);
        }
    }

    fn show_reminder(&mut self, reminder: &Reminder) {
        if !self.config.reminder.notifications {
            tracing::debug!("notifications disabled, reminder skipped");
            return;
        }
        if let Err(err) = self.chime.play() {
            tracing::warn!("failed to play reminder chime: {err}");
        }
        self.toast(
            ToastLevel::Info,
            format!("{}: {}", reminder.title, reminder.body),
            REMINDER_TTL,
        );
    }

    fn report_storage_error(&mut self, operation: &str, err: &EngineError) {
        tracing::error!("{operation} failed: {err}");
        self.toast(
            ToastLevel::Error,
            format!("Storage error: {err}"),
            TOAST_TTL,
        );
    }

    fn toast(&mut self, level: ToastLevel, message: String, ttl: Duration) {
        self.state.toast = Some(ToastState::new(level, message, ttl));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use crossterm::event::{KeyCode, KeyModifiers};
    use engine::{Engine, NewBill, ResultEngine};
    use migration::MigratorTrait;
    use sea_orm::{Database, DbErr};
    use tokio::sync::mpsc::{self, UnboundedSender};

    use super::*;

    #[derive(Clone, Default)]
    struct CountingChime(Arc<AtomicUsize>);

    impl Chime for CountingChime {
        fn play(&mut self) -> std::io::Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Store whose disk is gone.
    struct BrokenStore;

    fn disk_error() -> EngineError {
        EngineError::Database(DbErr::Custom("disk I/O error".to_string()))
    }

    impl BillStore for BrokenStore {
        async fn list_all(&self) -> ResultEngine<Vec<Bill>> {
            Err(disk_error())
        }
        async fn load_by_ids(&self, _ids: &[i32]) -> ResultEngine<Vec<Bill>> {
            Err(disk_error())
        }
        async fn sum_amount(&self) -> ResultEngine<Money> {
            Err(disk_error())
        }
        async fn max_id(&self) -> ResultEngine<Option<i32>> {
            Err(disk_error())
        }
        async fn insert(&self, _bill: NewBill) -> ResultEngine<Bill> {
            Err(disk_error())
        }
        async fn insert_many(&self, _bills: Vec<NewBill>) -> ResultEngine<Vec<Bill>> {
            Err(disk_error())
        }
        async fn delete(&self, _bill: &Bill) -> ResultEngine<bool> {
            Err(disk_error())
        }
    }

    async fn engine() -> Engine {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        Engine::builder().database(db).build().unwrap()
    }

    fn app_with<S: BillStore>(
        store: S,
        config: AppConfig,
    ) -> (App<S>, UnboundedSender<Reminder>, Arc<AtomicUsize>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let chime = CountingChime::default();
        let plays = chime.0.clone();
        (App::new(store, config, receiver, Box::new(chime)), sender, plays)
    }

    async fn app() -> App<Engine> {
        let (mut app, _sender, _plays) = app_with(engine().await, AppConfig::default());
        app.refresh().await;
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn type_text<S: BillStore>(app: &mut App<S>, text: &str) {
        for ch in text.chars() {
            app.handle_key(key(KeyCode::Char(ch))).await;
        }
    }

    async fn add_bill<S: BillStore>(app: &mut App<S>, description: &str, amount: &str) {
        app.handle_key(key(KeyCode::Char('a'))).await;
        type_text(app, description).await;
        app.handle_key(key(KeyCode::Tab)).await;
        type_text(app, amount).await;
        app.handle_key(key(KeyCode::Enter)).await;
    }

    #[tokio::test]
    async fn starts_empty() {
        let app = app().await;
        assert!(app.state.bills.items.is_empty());
        assert_eq!(app.state.bills.total, Money::ZERO);
        assert!(app.state.last_refresh.is_some());
        assert!(!app.state.dialog.is_open());
    }

    #[tokio::test]
    async fn confirm_adds_bill_and_raises_total() {
        let mut app = app().await;
        add_bill(&mut app, "Rent", "800").await;
        let before = app.state.bills.total;

        add_bill(&mut app, "Coffee", "3.50").await;

        assert!(!app.state.dialog.is_open());
        let last = app.state.bills.items.last().unwrap();
        assert_eq!(last.description, "Coffee");
        assert_eq!(last.amount, Money::new(350));
        assert_eq!(app.state.bills.total - before, Money::new(350));
        assert_eq!(app.state.bills.selected_bill(), Some(last));
        assert_eq!(app.state.bills.last_id, Some(last.id));
        assert_eq!(app.store.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn empty_description_keeps_dialog_open() {
        let mut app = app().await;
        add_bill(&mut app, "", "3.50").await;

        assert!(app.state.dialog.is_open());
        assert!(app.state.dialog.error.is_some());
        assert!(app.store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_numeric_amount_keeps_dialog_open() {
        let mut app = app().await;
        add_bill(&mut app, "Coffee", "abc").await;

        assert!(app.state.dialog.is_open());
        assert!(app.store.list_all().await.unwrap().is_empty());
        assert_eq!(app.state.bills.total, Money::ZERO);
    }

    #[tokio::test]
    async fn shortcuts_are_text_while_dialog_is_open() {
        let mut app = app().await;
        add_bill(&mut app, "quad", "1").await;

        assert!(!app.should_quit());
        assert_eq!(app.state.bills.items[0].description, "quad");
    }

    #[tokio::test]
    async fn escape_cancels_without_storing() {
        let mut app = app().await;
        app.handle_key(key(KeyCode::Char('a'))).await;
        type_text(&mut app, "Coffee").await;
        app.handle_key(key(KeyCode::Esc)).await;

        assert!(!app.state.dialog.is_open());
        assert!(app.state.dialog.description.is_empty());
        assert!(app.store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_selected_and_requeries() {
        let mut app = app().await;
        add_bill(&mut app, "Coffee", "3.50").await;
        add_bill(&mut app, "Tea", "2.20").await;
        add_bill(&mut app, "Bus", "2").await;

        app.handle_key(key(KeyCode::Up)).await;
        assert_eq!(app.state.bills.selected_bill().unwrap().description, "Tea");
        app.handle_key(key(KeyCode::Char('d'))).await;

        let names: Vec<_> = app
            .state
            .bills
            .items
            .iter()
            .map(|b| b.description.as_str())
            .collect();
        assert_eq!(names, vec!["Coffee", "Bus"]);
        assert_eq!(app.state.bills.total, Money::new(550));
        assert_eq!(app.store.sum_amount().await.unwrap(), Money::new(550));
    }

    #[tokio::test]
    async fn deleting_last_row_clamps_selection() {
        let mut app = app().await;
        add_bill(&mut app, "Coffee", "3.50").await;
        add_bill(&mut app, "Tea", "2.20").await;

        app.handle_key(key(KeyCode::Delete)).await;
        assert_eq!(app.state.bills.selected, 0);
        app.handle_key(key(KeyCode::Char('d'))).await;
        assert!(app.state.bills.items.is_empty());
        assert_eq!(app.state.bills.total, Money::ZERO);

        // Nothing selected: delete is a no-op.
        app.handle_key(key(KeyCode::Char('d'))).await;
        assert!(app.state.bills.items.is_empty());
        assert_eq!(app.state.bills.selected, 0);
    }

    #[tokio::test]
    async fn deleting_bill_removed_elsewhere_is_harmless() {
        let mut app = app().await;
        add_bill(&mut app, "Coffee", "3.50").await;
        let bill = app.state.bills.items[0].clone();
        app.store.delete(&bill).await.unwrap();

        app.handle_key(key(KeyCode::Char('d'))).await;
        assert!(app.state.bills.items.is_empty());
        assert_ne!(app.state.toast.as_ref().unwrap().level, ToastLevel::Error);
    }

    #[tokio::test]
    async fn storage_errors_are_reported_not_fatal() {
        let (mut app, _sender, _plays) = app_with(BrokenStore, AppConfig::default());
        app.refresh().await;
        assert_eq!(app.state.toast.as_ref().unwrap().level, ToastLevel::Error);
        assert!(app.state.last_refresh.is_none());

        add_bill(&mut app, "Coffee", "3.50").await;
        let toast = app.state.toast.as_ref().unwrap();
        assert_eq!(toast.level, ToastLevel::Error);
        assert!(toast.message.contains("disk I/O error"));
        // The user can retry without retyping.
        assert!(app.state.dialog.is_open());
        assert_eq!(app.state.dialog.description, "Coffee");
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn reminder_plays_chime_and_shows_toast_once() {
        let (mut app, sender, plays) = app_with(engine().await, AppConfig::default());
        sender
            .send(Reminder {
                title: "Reminder".to_string(),
                body: "Your reminder time is up!".to_string(),
            })
            .unwrap();
        drop(sender);

        app.drain_reminders();
        assert_eq!(plays.load(Ordering::SeqCst), 1);
        let toast = app.state.toast.as_ref().unwrap();
        assert_eq!(toast.message, "Reminder: Your reminder time is up!");

        app.state.toast = None;
        app.drain_reminders();
        assert_eq!(plays.load(Ordering::SeqCst), 1);
        assert!(app.state.toast.is_none());
    }

    #[tokio::test]
    async fn reminder_skipped_when_notifications_disabled() {
        let mut config = AppConfig::default();
        config.reminder.notifications = false;
        let (mut app, sender, plays) = app_with(engine().await, config);
        sender.send(AppConfig::default().reminder.reminder()).unwrap();

        app.drain_reminders();
        assert_eq!(plays.load(Ordering::SeqCst), 0);
        assert!(app.state.toast.is_none());
    }

    #[tokio::test]
    async fn toasts_expire() {
        let mut app = app().await;
        add_bill(&mut app, "Coffee", "3.50").await;
        assert!(app.state.toast.is_some());

        app.state.expire_toast(Instant::now());
        assert!(app.state.toast.is_some());
        app.state.expire_toast(Instant::now() + TOAST_TTL);
        assert!(app.state.toast.is_none());
    }

    #[tokio::test]
    async fn quit_from_list() {
        let mut app = app().await;
        app.handle_key(key(KeyCode::Char('q'))).await;
        assert!(app.should_quit());
    }
}
