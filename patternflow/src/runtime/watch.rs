use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::trace;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Flags changes to a pattern file so the host can reload it and regenerate
/// controls on its own thread. The notify callback only flips an atomic.
pub struct PatternFileWatcher {
    path: PathBuf,
    changed: Arc<AtomicBool>,
    _watcher: RecommendedWatcher,
}

impl PatternFileWatcher {
    /// Watches the file's parent directory so editors that save by replacing
    /// the file are still picked up
    pub fn start(path: impl Into<PathBuf>) -> Result<Self, notify::Error> {
        let path = path.into();
        let changed = Arc::new(AtomicBool::new(false));
        let changed_flag = changed.clone();
        let watched_path = path.clone();

        let mut watcher = notify::recommended_watcher(move |result| {
            let Ok(event) = result else {
                return;
            };

            if pattern_file_changed(&event, &watched_path) {
                trace!("Change detected: {:?}", event.kind);
                changed_flag.store(true, Ordering::SeqCst);
            }
        })?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        watcher.watch(dir, RecursiveMode::NonRecursive)?;

        Ok(Self {
            path,
            changed,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True once per batch of changes since the last call
    pub fn take_changed(&self) -> bool {
        self.changed.swap(false, Ordering::SeqCst)
    }
}

fn pattern_file_changed(event: &Event, watched_path: &Path) -> bool {
    if !matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return false;
    }

    event
        .paths
        .iter()
        .any(|path| path.file_name() == watched_path.file_name())
}
