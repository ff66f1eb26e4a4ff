use crate::error::FetchError;
use crate::record::Record;
use crate::source::RecordSource;
use futures::future::{AbortHandle, Abortable, BoxFuture};
use futures::FutureExt;
use std::sync::Arc;

// small constants reused by rendering code
pub const HEADER_LINES: usize = 4;
pub const NOTICE_LINES: usize = 1;
pub const MODELINE_LINES: usize = 1;
pub const RESERVED_LINES: usize = HEADER_LINES + NOTICE_LINES + MODELINE_LINES;
// five text rows plus the top and bottom border
pub const CARD_LINES: usize = 7;
pub const DEFAULT_WIDTH: usize = 80;

/// Labels offered by the "Filtrar por" selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterOption {
    #[default]
    Age,
    Powers,
    League,
    Active,
}

impl FilterOption {
    pub const ALL: [FilterOption; 4] = [
        FilterOption::Age,
        FilterOption::Powers,
        FilterOption::League,
        FilterOption::Active,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterOption::Age => "Edad",
            FilterOption::Powers => "Poderes",
            FilterOption::League => "Liga",
            FilterOption::Active => "Activo",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|o| *o == self).unwrap_or(0)
    }
}

/// Hire flow: a record is selected exactly while the dialog is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HireDialog {
    #[default]
    Idle,
    Confirming(Record),
}

/// Completion of a load started by [`Screen::initialize`].
#[derive(Debug)]
pub struct LoadFinished {
    pub seq: u64,
    pub outcome: Result<Vec<Record>, FetchError>,
}

/// Resolves to `None` when the load was aborted before it finished.
pub type LoadTask = BoxFuture<'static, Option<LoadFinished>>;

pub struct Screen {
    pub search_query: String,
    pub selected_filter: FilterOption,
    pub filter_menu_open: bool,
    pub records: Vec<Record>,
    pub hire: HireDialog,
    // one-shot confirmation shown until the next key press
    pub notice: Option<String>,
    pub cursor: usize,
    pub filter_cursor: usize,
    pub per_page: usize,
    pub screen_width: usize,
    pub screen_height: usize,
    mounted: bool,
    load_seq: u64,
    pending: Option<AbortHandle>,
    source: Arc<dyn RecordSource>,
}

pub fn initial_screen(source: Arc<dyn RecordSource>) -> Screen {
    Screen::new(source)
}

pub fn hire_notice(name: &str) -> String {
    format!("¡Enhorabuena! Has contratado a {name}. Llegará en un momento ya que sabe dónde vives.")
}

impl Screen {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self {
            search_query: String::new(),
            selected_filter: FilterOption::default(),
            filter_menu_open: false,
            records: Vec::new(),
            hire: HireDialog::Idle,
            notice: None,
            cursor: 0,
            filter_cursor: 0,
            per_page: 0,
            screen_width: 0,
            screen_height: 0,
            mounted: true,
            load_seq: 0,
            pending: None,
            source,
        }
    }

    // wrapper update that delegates to the update module
    pub fn update(&mut self, msg: crate::ui::Msg) {
        crate::ui::update::handle_update(self, msg);
    }

    /// Starts fetching the full record set. The returned task must be driven
    /// and its result handed back through [`Screen::apply_load`].
    pub fn initialize(&mut self) -> LoadTask {
        self.abort_pending();
        self.load_seq += 1;
        let seq = self.load_seq;
        let (handle, registration) = AbortHandle::new_pair();
        self.pending = Some(handle);
        let source = Arc::clone(&self.source);
        tracing::debug!(seq, "loading records");
        async move {
            let fetch = async move { source.fetch_all().await };
            match Abortable::new(fetch, registration).await {
                Ok(outcome) => Some(LoadFinished { seq, outcome }),
                Err(_aborted) => None,
            }
        }
        .boxed()
    }

    pub fn apply_load(&mut self, done: LoadFinished) {
        // load numbers start at 1, so a fresh screen accepts nothing
        if !self.mounted || done.seq == 0 || done.seq != self.load_seq {
            tracing::debug!(seq = done.seq, "discarding stale load");
            return;
        }
        self.pending = None;
        match done.outcome {
            Ok(records) => {
                tracing::info!(count = records.len(), "records loaded");
                self.records = records;
                self.clamp_cursor();
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load records");
            }
        }
    }

    /// Tears the screen down: any in-flight load is aborted and late results are ignored.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.abort_pending();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    fn abort_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    // The query is kept for display only; it does not narrow `records`.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    pub fn toggle_filter_menu(&mut self) {
        self.filter_menu_open = !self.filter_menu_open;
        if self.filter_menu_open {
            self.filter_cursor = self.selected_filter.index();
        }
    }

    pub fn select_filter(&mut self, option: FilterOption) {
        self.selected_filter = option;
        self.filter_menu_open = false;
    }

    pub fn open_hire_dialog(&mut self, record: Record) {
        self.hire = HireDialog::Confirming(record);
    }

    /// Returns the confirmation notice, or `None` when no record was selected.
    pub fn confirm_hire(&mut self) -> Option<String> {
        match std::mem::take(&mut self.hire) {
            HireDialog::Confirming(record) => {
                tracing::info!(id = %record.id, name = %record.name, "hire confirmed");
                let notice = hire_notice(&record.name);
                self.notice = Some(notice.clone());
                Some(notice)
            }
            HireDialog::Idle => None,
        }
    }

    pub fn cancel_hire(&mut self) {
        self.hire = HireDialog::Idle;
    }

    pub fn hire_dialog_open(&self) -> bool {
        matches!(self.hire, HireDialog::Confirming(_))
    }

    pub fn selected_record(&self) -> Option<&Record> {
        match &self.hire {
            HireDialog::Confirming(r) => Some(r),
            HireDialog::Idle => None,
        }
    }

    pub fn card_under_cursor(&self) -> Option<&Record> {
        self.records.get(self.cursor)
    }

    pub fn move_cursor(&mut self, down: bool) {
        if down {
            if self.cursor + 1 < self.records.len() {
                self.cursor += 1;
            }
        } else {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    pub fn move_filter_cursor(&mut self, down: bool) {
        let last = FilterOption::ALL.len() - 1;
        self.filter_cursor = if down {
            usize::min(self.filter_cursor + 1, last)
        } else {
            self.filter_cursor.saturating_sub(1)
        };
    }

    fn clamp_cursor(&mut self) {
        if self.cursor >= self.records.len() {
            self.cursor = self.records.len().saturating_sub(1);
        }
    }

    pub fn page(&self) -> usize {
        if self.per_page == 0 {
            0
        } else {
            self.cursor / self.per_page
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.per_page == 0 || self.records.is_empty() {
            1
        } else {
            self.records.len().div_ceil(self.per_page)
        }
    }

    // Esc closes an open overlay; with none open it quits the program.
    pub fn captures_esc(&self) -> bool {
        self.hire_dialog_open() || self.filter_menu_open
    }

    pub fn mode(&self) -> String {
        if self.hire_dialog_open() {
            return "Contratar".to_string();
        }
        if self.filter_menu_open {
            return "Filtro".to_string();
        }
        if self.is_loading() {
            return "Cargando".to_string();
        }
        "SASH".to_string()
    }

    // Render helper wrappers that forward to the render module to keep this file focused on state.
    pub fn render_cards(&self) -> Vec<String> {
        crate::ui::render::render_cards(self)
    }
    pub fn render_main_content(&self) -> String {
        crate::ui::render::render_main_content(self)
    }
    pub fn render_full(&self) -> String {
        crate::ui::render::render_full(self)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::source::StaticRecordSource;
    use async_trait::async_trait;
    use regex::Regex;

    pub(crate) struct FailingSource;

    #[async_trait]
    impl RecordSource for FailingSource {
        async fn fetch_all(&self) -> Result<Vec<Record>, FetchError> {
            Err(FetchError::new("http://test/superheroes", "connection refused"))
        }

        async fn fetch_by_power(&self, power: &str) -> Result<Vec<Record>, FetchError> {
            Err(FetchError::new(format!("http://test/poder/{power}"), "connection refused"))
        }
    }

    pub(crate) fn test_record(id: &str, name: &str) -> Record {
        Record {
            id: id.to_string(),
            name: name.to_string(),
            powers: vec!["Flight".to_string()],
            age: "30".to_string(),
            league: "X".to_string(),
            active: true,
        }
    }

    pub(crate) fn screen_with(records: Vec<Record>) -> Screen {
        initial_screen(Arc::new(StaticRecordSource::new(records)))
    }

    // strip ANSI CSI sequences from rendered output for assertions
    pub(crate) fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    #[test]
    fn initial_state() {
        let s = screen_with(vec![]);
        assert_eq!(s.search_query, "");
        assert_eq!(s.selected_filter, FilterOption::Age);
        assert!(!s.filter_menu_open);
        assert!(s.records.is_empty());
        assert!(s.selected_record().is_none());
        assert!(!s.hire_dialog_open());
        assert!(s.is_mounted());
        assert_eq!(s.mode(), "SASH");
    }

    #[tokio::test]
    async fn initialize_replaces_records_on_success() {
        let recs = vec![test_record("1", "Test"), test_record("2", "Otro")];
        let mut s = screen_with(recs.clone());
        let task = s.initialize();
        assert!(s.is_loading());
        assert_eq!(s.mode(), "Cargando");
        let done = task.await.unwrap();
        s.apply_load(done);
        assert_eq!(s.records, recs);
        assert!(!s.is_loading());
    }

    #[tokio::test]
    async fn initialize_failure_keeps_previous_records() {
        let mut s = initial_screen(Arc::new(FailingSource));
        let done = s.initialize().await.unwrap();
        assert!(done.outcome.is_err());
        s.apply_load(done);
        assert!(s.records.is_empty());

        s.records = vec![test_record("1", "Test")];
        let done = s.initialize().await.unwrap();
        s.apply_load(done);
        assert_eq!(s.records.len(), 1);
    }

    #[tokio::test]
    async fn superseded_load_is_aborted_and_ignored() {
        let mut s = screen_with(vec![test_record("1", "Test")]);
        let first = s.initialize();
        let second = s.initialize();
        assert!(first.await.is_none());
        let done = second.await.unwrap();
        assert_eq!(done.seq, 2);
        s.apply_load(LoadFinished {
            seq: 1,
            outcome: Ok(vec![test_record("9", "Stale")]),
        });
        assert!(s.records.is_empty());
        s.apply_load(done);
        assert_eq!(s.records[0].name, "Test");
    }

    #[test]
    fn completion_without_started_load_is_ignored() {
        let mut s = screen_with(vec![]);
        s.apply_load(LoadFinished {
            seq: 0,
            outcome: Ok(vec![test_record("1", "Test")]),
        });
        assert!(s.records.is_empty());
    }

    #[tokio::test]
    async fn unmount_aborts_and_discards_late_results() {
        let mut s = screen_with(vec![test_record("1", "Test")]);
        let task = s.initialize();
        s.unmount();
        assert!(!s.is_mounted());
        assert!(task.await.is_none());
        s.apply_load(LoadFinished {
            seq: 1,
            outcome: Ok(vec![test_record("1", "Test")]),
        });
        assert!(s.records.is_empty());
    }

    #[test]
    fn select_filter_from_any_state() {
        for opt in FilterOption::ALL {
            for open in [false, true] {
                let mut s = screen_with(vec![]);
                s.filter_menu_open = open;
                s.selected_filter = FilterOption::Active;
                s.select_filter(opt);
                assert_eq!(s.selected_filter, opt);
                assert!(!s.filter_menu_open);
            }
        }
    }

    #[test]
    fn toggle_filter_menu_flips_and_tracks_selection() {
        let mut s = screen_with(vec![]);
        s.selected_filter = FilterOption::League;
        s.toggle_filter_menu();
        assert!(s.filter_menu_open);
        assert_eq!(s.filter_cursor, 2);
        s.toggle_filter_menu();
        assert!(!s.filter_menu_open);
    }

    #[test]
    fn search_query_does_not_filter_records() {
        let mut s = screen_with(vec![]);
        s.records = vec![test_record("1", "Test"), test_record("2", "Otro")];
        s.set_search_query("zzz");
        assert_eq!(s.search_query, "zzz");
        assert_eq!(s.records.len(), 2);
        assert_eq!(s.render_cards().len(), 2);
    }

    #[test]
    fn open_then_cancel_leaves_records() {
        let mut s = screen_with(vec![]);
        s.records = vec![test_record("1", "Test")];
        s.open_hire_dialog(s.records[0].clone());
        assert!(s.hire_dialog_open());
        assert_eq!(s.selected_record().map(|r| r.id.as_str()), Some("1"));
        s.cancel_hire();
        assert!(!s.hire_dialog_open());
        assert!(s.selected_record().is_none());
        assert_eq!(s.records, vec![test_record("1", "Test")]);
    }

    #[test]
    fn open_then_confirm_yields_single_notice() {
        let mut s = screen_with(vec![]);
        s.open_hire_dialog(test_record("1", "Test"));
        let notice = s.confirm_hire();
        assert!(notice.as_deref().is_some_and(|n| n.contains("Test")));
        assert_eq!(s.notice, notice);
        assert!(!s.hire_dialog_open());
        // a second confirm without a selection produces nothing new
        assert!(s.confirm_hire().is_none());
    }

    #[test]
    fn cursor_and_pages() {
        let mut s = screen_with(vec![]);
        s.records = (0..5).map(|i| test_record(&i.to_string(), "R")).collect();
        s.per_page = 2;
        assert_eq!(s.total_pages(), 3);
        s.move_cursor(false);
        assert_eq!(s.cursor, 0);
        for _ in 0..10 {
            s.move_cursor(true);
        }
        assert_eq!(s.cursor, 4);
        assert_eq!(s.page(), 2);
        s.records.truncate(2);
        s.clamp_cursor();
        assert_eq!(s.cursor, 1);
    }
}
