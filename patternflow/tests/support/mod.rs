#![allow(dead_code)]

use std::cell::RefCell;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use patternflow::control::{ControlRenderer, Params};

pub fn watch_tests_enabled() -> bool {
    matches!(
        env::var("PATTERNFLOW_RUN_WATCH_TESTS")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "1" | "true" | "yes" | "on"
    )
}

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Fresh, empty directory under the system temp dir
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!(
        "patternflow-it-{}-{}",
        std::process::id(),
        name
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

pub type UpdateLog = Rc<RefCell<Vec<Params>>>;

/// A renderer whose notifications are recorded in order
pub fn recording_renderer() -> (ControlRenderer, UpdateLog) {
    let log: UpdateLog = Rc::new(RefCell::new(vec![]));
    let sink = log.clone();
    let renderer =
        ControlRenderer::new(move |params| sink.borrow_mut().push(params.clone()));
    (renderer, log)
}
