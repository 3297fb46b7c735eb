//! TaskEngine - generate/complete 状態遷移の中核

use tracing::{debug, info};

use crate::app::selector;
use crate::app::session::Session;
use crate::domain::{Task, TaskCatalog};
use crate::ports::{Notifier, RandomSource, SaveStore};

/// Drives the generate/complete state machine for the active session.
///
/// State transitions (over `SaveData.current_task`):
/// - NoTask     --generate--> TaskActive   (picked uniformly from the
///   uncompleted subsequence of the catalog)
/// - NoTask     --generate--> NoTask       (exhausted: every task done)
/// - TaskActive --generate--> TaskActive   (guard: re-notify disabled,
///   never re-rolls the active task)
/// - TaskActive --complete--> NoTask       (id moves into the completed
///   set; the set only grows)
/// - NoTask     --complete--> NoTask       (guard: re-notify enabled)
///
/// Wrong-state calls are no-ops by design, not errors. State is
/// persisted after each successful transition and once more at session
/// end.
pub struct TaskEngine<S, N, R> {
    catalog: TaskCatalog,
    store: S,
    notifier: N,
    rng: R,
    session: Option<Session>,
}

impl<S: SaveStore, N: Notifier, R: RandomSource> TaskEngine<S, N, R> {
    pub fn new(catalog: TaskCatalog, store: S, notifier: N, rng: R) -> Self {
        Self {
            catalog,
            store,
            notifier,
            rng,
            session: None,
        }
    }

    pub fn catalog(&self) -> &TaskCatalog {
        &self.catalog
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Catalog entries paired with their completion flag for the active
    /// session, in catalog order (task-list view data). Empty when no
    /// session is active.
    pub fn task_statuses(&self) -> Vec<(&Task, bool)> {
        let Some(session) = &self.session else {
            return Vec::new();
        };
        self.catalog
            .tasks()
            .iter()
            .map(|task| (task, session.is_completed(task.id)))
            .collect()
    }

    /// Host event: a player became active. Loads (or creates) their
    /// SaveData and replays the loaded state to the notifier so the host
    /// can rebuild its display.
    pub fn on_session_start(&mut self, player_key: &str) {
        if self.session.is_some() {
            debug!(player_key, "session start ignored: a session is already active");
            return;
        }

        let data = self.store.load(player_key);
        info!(player_key, "session started");

        match &data.current_task {
            Some(task) => {
                self.notifier
                    .on_task_assigned(&task.description, task.item_icon_id);
                self.notifier.on_generation_disabled();
            }
            None => {
                self.notifier.on_no_task();
                self.notifier.on_generation_enabled();
            }
        }

        self.session = Some(Session::new(player_key, data));
    }

    /// Host event: the player went away. Persists the session's SaveData
    /// and drops it from memory. Without an active session this is a
    /// no-op and performs no write.
    pub fn on_session_end(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        self.store.save(session.player_key(), session.data());
        info!(player_key = session.player_key(), "session ended");
    }

    /// Assign a random uncompleted task, if none is active.
    pub fn generate(&mut self) {
        let Some(session) = self.session.as_mut() else {
            debug!("generate ignored: no active session");
            return;
        };

        if session.current_task().is_some() {
            // Repeated generate never changes state or re-rolls.
            self.notifier.on_generation_disabled();
            return;
        }

        let available = selector::filter_available(&self.catalog, &session.data().completed_tasks);
        let Some(picked) = selector::pick_random(&available, &mut self.rng) else {
            info!("catalog exhausted: every task is completed");
            self.notifier.on_tasks_exhausted();
            return;
        };
        let picked = picked.clone();

        debug!(task = %picked.id, "task generated: {}", picked.description);
        session.assign(picked.clone());

        self.notifier.on_acknowledge();
        self.notifier
            .on_task_assigned(&picked.description, picked.item_icon_id);
        self.notifier.on_generation_disabled();

        self.store.save(session.player_key(), session.data());
    }

    /// Mark the active task as completed, if one is active.
    pub fn complete(&mut self) {
        let Some(session) = self.session.as_mut() else {
            debug!("complete ignored: no active session");
            return;
        };

        let Some(completed) = session.complete_current() else {
            self.notifier.on_generation_enabled();
            return;
        };

        debug!(task = %completed, "task completed");

        self.notifier.on_acknowledge();
        self.notifier.on_no_task();
        self.notifier.on_generation_enabled();

        self.store.save(session.player_key(), session.data());
    }
}
