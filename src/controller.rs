// Input controller - the widget's state machine
//
// Owns the text input, the debouncer, the dropdown and the selection store.
// Keystrokes and clicks arrive from the event loop; debounce timers and
// searches run as spawned tasks that report back over the AppMessage channel,
// so every mutation happens on the event-loop task.
//
//   Idle ──key──▶ Pending ──timer(non-empty)──▶ Suspended ──results──▶ Showing
//    ▲              │                                │                   │
//    └──timer(empty)┘◀───────────failure / no items──┘◀──select/dismiss──┘

use crate::config::WidgetConfig;
use crate::debounce::Debouncer;
use crate::search::{FetchError, RepoSearch, SearchResultItem};
use crate::selection::SelectionStore;
use crate::tui::components::autocomplete::AutocompleteView;
use crate::tui::components::selection_list::SelectionView;
use crate::tui::traits::Handled;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Messages sent back to the event loop by spawned tasks
#[derive(Debug)]
pub enum AppMessage {
    /// The debounce window closed; carries the input value at the last keystroke
    DebounceElapsed { value: String },
    /// A search finished (successfully or not)
    SearchFinished {
        seq: u64,
        query: String,
        result: Result<Vec<SearchResultItem>, FetchError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    /// Dropdown hidden, nothing scheduled
    #[default]
    Idle,
    /// Debounce timer running
    Pending,
    /// Waiting on the search endpoint
    Suspended,
    /// Dropdown populated and visible
    Showing,
}

impl ControllerState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "typing",
            Self::Suspended => "searching",
            Self::Showing => "showing",
        }
    }
}

/// What a mouse click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The input box or the dropdown's border: no effect
    Inside,
    /// A dropdown row, by index
    DropdownRow(usize),
    /// A selection row's remove control, by repository id
    RemoveControl(u64),
    /// Anywhere outside the input and the dropdown
    Outside,
}

pub struct InputController<S: RepoSearch> {
    client: Arc<S>,
    tx: mpsc::UnboundedSender<AppMessage>,
    debouncer: Debouncer<String>,

    input: String,
    state: ControllerState,

    autocomplete: AutocompleteView,
    store: SelectionStore,
    selection_view: SelectionView,

    suppress_leading_space: bool,

    /// Sequence number of the newest request that may still render
    latest_seq: u64,
}

impl<S: RepoSearch> InputController<S> {
    pub fn new(
        client: Arc<S>,
        widget: &WidgetConfig,
        tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        let debounce_tx = tx.clone();
        let debouncer = Debouncer::new(widget.debounce(), move |value: String| {
            // Receiver only goes away on shutdown
            let _ = debounce_tx.send(AppMessage::DebounceElapsed { value });
        });

        tracing::debug!(
            debounce_ms = debouncer.delay().as_millis() as u64,
            suppress_leading_space = widget.suppress_leading_space,
            "Input controller ready"
        );

        Self {
            client,
            tx,
            debouncer,
            input: String::new(),
            state: ControllerState::Idle,
            autocomplete: AutocompleteView::new(widget.max_suggestions),
            store: SelectionStore::new(),
            selection_view: SelectionView::new(),
            suppress_leading_space: widget.suppress_leading_space,
            latest_seq: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn autocomplete(&self) -> &AutocompleteView {
        &self.autocomplete
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn selection_view(&self) -> &SelectionView {
        &self.selection_view
    }

    /// Scroll position and viewport of the selection list belong to the shell
    pub fn selection_view_mut(&mut self) -> &mut SelectionView {
        &mut self.selection_view
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Keyboard
    // ─────────────────────────────────────────────────────────────────────────

    /// Handle an editing key for the input line
    ///
    /// Returns `Handled::No` for keys that aren't text editing, so the App can
    /// apply its global bindings.
    pub fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Handled::No;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.on_char(c);
                Handled::Yes
            }
            KeyCode::Backspace => {
                self.on_backspace();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    pub fn on_char(&mut self, c: char) {
        if self.suppress_leading_space && c == ' ' && self.input.trim().is_empty() {
            tracing::trace!("Ignoring leading space");
            return;
        }

        self.input.push(c);
        self.schedule();
    }

    pub fn on_backspace(&mut self) {
        self.input.pop();
        self.schedule();
    }

    fn schedule(&mut self) {
        self.debouncer.call(self.input.clone());
        self.state = ControllerState::Pending;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Async completions
    // ─────────────────────────────────────────────────────────────────────────

    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::DebounceElapsed { value } => self.on_debounce_elapsed(value),
            AppMessage::SearchFinished { seq, query, result } => {
                self.on_search_finished(seq, &query, result)
            }
        }
    }

    pub fn on_debounce_elapsed(&mut self, value: String) {
        // A keystroke or selection after the timer fired supersedes it
        if self.state != ControllerState::Pending || value != self.input {
            tracing::trace!(value = %value, "Dropping superseded debounce");
            return;
        }

        // Anything still in flight belongs to an older value
        self.latest_seq += 1;

        if value.trim().is_empty() {
            self.autocomplete.hide();
            self.state = ControllerState::Idle;
            return;
        }

        let seq = self.latest_seq;
        self.state = ControllerState::Suspended;
        tracing::debug!(seq, query = %value, "Searching");

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.search(&value).await;
            let _ = tx.send(AppMessage::SearchFinished {
                seq,
                query: value,
                result,
            });
        });
    }

    pub fn on_search_finished(
        &mut self,
        seq: u64,
        query: &str,
        result: Result<Vec<SearchResultItem>, FetchError>,
    ) {
        if seq < self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "Discarding stale response");
            return;
        }

        match result {
            Ok(items) => {
                tracing::debug!(seq, query, count = items.len(), "Search returned");
                self.autocomplete.set_items(items);
            }
            Err(e) => {
                tracing::warn!(seq, query, "Search failed: {}", e);
                self.autocomplete.hide();
            }
        }

        // Typing resumed while the request was out; the new timer decides
        if self.state == ControllerState::Pending {
            return;
        }

        self.state = if self.autocomplete.is_visible() {
            ControllerState::Showing
        } else {
            ControllerState::Idle
        };
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mouse
    // ─────────────────────────────────────────────────────────────────────────

    pub fn on_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Inside => {}
            ClickTarget::DropdownRow(index) => self.select(index),
            ClickTarget::RemoveControl(id) => {
                // The control sits outside the dropdown
                self.dismiss();
                self.remove(id);
            }
            ClickTarget::Outside => self.dismiss(),
        }
    }

    /// Add the dropdown row at `index` to the selection and reset the input
    pub fn select(&mut self, index: usize) {
        let Some(item) = self.autocomplete.take_row(index) else {
            return;
        };

        if self.store.add(&item) {
            tracing::info!(id = item.id, "Selected {}/{}", item.owner, item.name);
        } else {
            tracing::debug!(id = item.id, "Already selected");
        }
        self.selection_view.sync_entries(self.store.list());

        self.input.clear();
        self.autocomplete.hide();
        if self.debouncer.is_pending() {
            tracing::debug!("Cancelling scheduled search");
        }
        self.debouncer.cancel();
        self.latest_seq += 1;
        self.state = ControllerState::Idle;
    }

    /// Remove a repository from the selection; missing ids are ignored
    pub fn remove(&mut self, id: u64) {
        if self.store.remove(id) {
            tracing::info!(id, "Removed from selection");
            if self.store.is_empty() {
                tracing::debug!("Selection is now empty");
            }
        }
        self.selection_view.sync_entries(self.store.list());
    }

    /// Hide the dropdown without touching the input
    pub fn dismiss(&mut self) {
        self.autocomplete.hide();
        if self.state == ControllerState::Showing {
            self.state = ControllerState::Idle;
        }
    }
}
