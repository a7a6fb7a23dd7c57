//! Polling watch mode: rebuild the whole site whenever a watched file is
//! added, removed, or modified.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::SystemTime;

use tracing::{debug, error, info};
use walkdir::WalkDir;

use crate::config::Settings;
use crate::error::CliError;
use crate::site;

/// Modification time of every file under the watched directories.
pub type Snapshot = BTreeMap<PathBuf, SystemTime>;

/// Walk `dirs` recursively and record file modification times.
///
/// Unreadable entries and missing directories are skipped.
pub fn snapshot(dirs: &[PathBuf]) -> Snapshot {
    let mut mtimes = Snapshot::new();

    for dir in dirs {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(modified) = entry.metadata().ok().and_then(|m| m.modified().ok()) {
                mtimes.insert(entry.into_path(), modified);
            }
        }
    }

    mtimes
}

/// Paths that differ between two snapshots, sorted.
pub fn changed_paths(before: &Snapshot, after: &Snapshot) -> Vec<PathBuf> {
    let keys: BTreeSet<&PathBuf> = before.keys().chain(after.keys()).collect();
    keys.into_iter()
        .filter(|path| before.get(*path) != after.get(*path))
        .cloned()
        .collect()
}

/// Change detector over a fixed set of directories.
#[derive(Debug)]
pub struct Watcher {
    dirs: Vec<PathBuf>,
    last: Snapshot,
}

impl Watcher {
    /// Start watching; the current state of `dirs` is the baseline.
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        let last = snapshot(&dirs);
        Self { dirs, last }
    }

    /// Take a fresh snapshot and return what changed since the last poll.
    pub fn poll(&mut self) -> Vec<PathBuf> {
        let current = snapshot(&self.dirs);
        let changed = changed_paths(&self.last, &current);
        self.last = current;
        changed
    }
}

/// Build once, then rebuild on every change until the process is stopped.
pub fn run(settings: &Settings) -> Result<(), CliError> {
    let paths = &settings.paths;
    info!(
        interval_ms = settings.watch.poll_interval.as_millis() as u64,
        "watching for changes (Ctrl+C to stop)"
    );

    rebuild(settings);
    let mut watcher = Watcher::new(paths.watched_dirs());

    loop {
        thread::sleep(settings.watch.poll_interval);

        let changed = watcher.poll();
        if changed.is_empty() {
            continue;
        }
        for path in &changed {
            info!(path = %relative(path, &paths.root).display(), "changed");
        }
        rebuild(settings);
    }
}

/// A failed rebuild is reported and watching carries on.
fn rebuild(settings: &Settings) {
    if let Err(err) = site::build(&settings.paths) {
        error!(error = %err, "build failed");
    }
}

fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{Duration, UNIX_EPOCH};

    use super::*;

    fn at(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn changed_paths_reports_added_removed_and_modified() {
        let before: Snapshot = [
            (PathBuf::from("a.md"), at(1)),
            (PathBuf::from("b.md"), at(1)),
            (PathBuf::from("c.md"), at(1)),
        ]
        .into_iter()
        .collect();
        let after: Snapshot = [
            (PathBuf::from("a.md"), at(1)),
            (PathBuf::from("b.md"), at(2)),
            (PathBuf::from("d.md"), at(1)),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            changed_paths(&before, &after),
            vec![
                PathBuf::from("b.md"),
                PathBuf::from("c.md"),
                PathBuf::from("d.md")
            ]
        );
        assert!(changed_paths(&after, &after).is_empty());
    }

    #[test]
    fn watcher_sees_new_and_deleted_files() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(dir.path().join("pitch.md"), "## Pitch").unwrap();

        let mut watcher = Watcher::new(vec![dir.path().to_path_buf()]);
        assert!(watcher.poll().is_empty());

        let added = nested.join("extra.md");
        fs::write(&added, "new").unwrap();
        assert_eq!(watcher.poll(), vec![added.clone()]);

        fs::remove_file(&added).unwrap();
        assert_eq!(watcher.poll(), vec![added]);
        assert!(watcher.poll().is_empty());
    }

    #[test]
    fn watcher_sees_modified_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.md");
        fs::write(&path, "## Open Events").unwrap();
        fs::File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(at(1_000_000))
            .unwrap();

        let mut watcher = Watcher::new(vec![dir.path().to_path_buf()]);

        fs::File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(at(2_000_000))
            .unwrap();
        assert_eq!(watcher.poll(), vec![path]);
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(snapshot(&[dir.path().join("nope")]).is_empty());
    }

    #[test]
    fn relative_strips_root() {
        assert_eq!(
            relative(Path::new("/site/content/a.md"), Path::new("/site")),
            Path::new("content/a.md")
        );
        assert_eq!(
            relative(Path::new("/other/a.md"), Path::new("/site")),
            Path::new("/other/a.md")
        );
    }
}
