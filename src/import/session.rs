use crate::store::SharedKeywordStore;
use std::path::PathBuf;

/// Where a UI session currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    FilesSelected,
    Previewing,
    Importing,
    ViewingDatabase,
}

impl SessionPhase {
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            SessionPhase::Previewing | SessionPhase::Importing | SessionPhase::ViewingDatabase
        )
    }
}

/// Files chosen by the user, in selection order and unique by path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection {
    paths: Vec<PathBuf>,
}

impl FileSelection {
    /// Append paths not already selected, returning how many were added
    pub fn add<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut added = 0;
        for path in paths {
            if !self.paths.contains(&path) {
                self.paths.push(path);
                added += 1;
            }
        }
        added
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Explicit state of one importer session: selected files, target column,
/// and the storage handle opened at startup (None when connecting failed).
///
/// Cloning is cheap; the store handle is shared.
#[derive(Clone)]
pub struct ImportSession {
    selection: FileSelection,
    column: String,
    store: Option<SharedKeywordStore>,
    phase: SessionPhase,
}

impl ImportSession {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            selection: FileSelection::default(),
            column: column.into(),
            store: None,
            phase: SessionPhase::Idle,
        }
    }

    pub fn with_store(mut self, store: SharedKeywordStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn set_store(&mut self, store: Option<SharedKeywordStore>) {
        self.store = store;
    }

    pub fn store(&self) -> Option<&SharedKeywordStore> {
        self.store.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.store.is_some()
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn set_column(&mut self, column: impl Into<String>) {
        self.column = column.into();
    }

    pub fn selection(&self) -> &FileSelection {
        &self.selection
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Add files to the selection, returning how many were new
    pub fn select_files<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let added = self.selection.add(paths);
        if !self.phase.is_busy() {
            self.phase = self.resting_phase();
        }
        added
    }

    pub fn clear_files(&mut self) {
        self.selection.clear();
        if !self.phase.is_busy() {
            self.phase = SessionPhase::Idle;
        }
    }

    /// Enter a busy phase. Returns false if another operation is running.
    pub fn begin(&mut self, phase: SessionPhase) -> bool {
        if self.phase.is_busy() {
            return false;
        }
        self.phase = phase;
        true
    }

    /// Leave a busy phase, back to Idle or FilesSelected
    pub fn finish(&mut self) {
        self.phase = self.resting_phase();
    }

    fn resting_phase(&self) -> SessionPhase {
        if self.selection.is_empty() {
            SessionPhase::Idle
        } else {
            SessionPhase::FilesSelected
        }
    }
}

impl std::fmt::Debug for ImportSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImportSession")
            .field("selection", &self.selection)
            .field("column", &self.column)
            .field("connected", &self.is_connected())
            .field("phase", &self.phase)
            .finish()
    }
}
