mod support;

use std::fs;
use std::thread;
use std::time::{Duration, Instant};

use patternflow::control::{
    ImageFile, Interaction, InteractionOutcome, ParamValue, SchemaEntry,
    load_pattern_file,
};
use patternflow::runtime::registry::PatternRegistry;
use patternflow::runtime::session::Gallery;
use patternflow::runtime::storage;
use patternflow::runtime::watch::PatternFileWatcher;
use patternflow::view::{ControlKind, PanelView};

#[test]
fn pattern_file_generates_full_panel() {
    let pattern = load_pattern_file(&support::fixture("aurora.yaml")).unwrap();
    let (mut renderer, log) = support::recording_renderer();

    renderer.generate_controls(&pattern.schema);

    assert_eq!(renderer.params(), pattern.schema.defaults);
    assert!(log.borrow().is_empty());
    assert!(renderer.binding("shimmer").is_none());
    assert!(matches!(
        pattern.schema.controls.last(),
        Some(SchemaEntry::Unrecognized { .. })
    ));

    let panel = PanelView::from_renderer(&renderer);
    let titles: Vec<Option<&str>> = panel
        .sections
        .iter()
        .map(|s| s.title.as_deref())
        .collect();
    assert_eq!(titles, vec![Some("Aurora"), Some("Motion"), Some("Style")]);

    let display = |name: &str| panel.control(name).unwrap().display.clone();
    assert_eq!(display("waveCount"), "7");
    assert_eq!(display("intensity"), "0.6");
    assert_eq!(display("noiseScale"), "0.005");
    assert_eq!(display("speed"), "1");
    assert_eq!(display("tint"), "#000000");
    assert_eq!(display("blend"), "screen");

    let drift = panel.control("drift").unwrap();
    assert_eq!((drift.min, drift.max, drift.step), (0.1, 2.0, 0.1));
    assert_eq!(
        panel.control("overlay").map(|c| c.kind),
        Some(ControlKind::ImageUpload)
    );
}

#[test]
fn frontend_messages_drive_the_store() {
    let pattern = load_pattern_file(&support::fixture("aurora.yaml")).unwrap();
    let (mut renderer, log) = support::recording_renderer();
    renderer.generate_controls(&pattern.schema);

    let messages = r#"[
        {"type": "slide", "name": "waveCount", "value": 11.4},
        {"type": "slide", "name": "noiseScale", "value": 0.01234},
        {"type": "toggle", "name": "stars"},
        {"type": "choose", "name": "colorMode", "index": 2},
        {"type": "choose", "name": "colorMode", "index": 9},
        {"type": "select", "name": "blend", "index": 1},
        {"type": "toggle", "name": "shimmer"}
    ]"#;
    let interactions: Vec<Interaction> = serde_json::from_str(messages).unwrap();

    let outcomes: Vec<InteractionOutcome> = interactions
        .into_iter()
        .map(|i| renderer.handle(i))
        .collect();

    let applied = outcomes
        .iter()
        .filter(|o| **o == InteractionOutcome::Applied)
        .count();
    assert_eq!(applied, 5);
    assert_eq!(log.borrow().len(), 5);

    let params = renderer.params();
    assert_eq!(params.float("waveCount"), 11.0);
    assert_eq!(params.float("noiseScale"), 0.012);
    assert!(!params.bool("stars"));
    assert_eq!(params.index("colorMode"), 2);
    assert_eq!(params.index("blend"), 1);
    assert_eq!(log.borrow().last(), Some(&params));

    let panel = PanelView::from_renderer(&renderer);
    assert_eq!(panel.control("noiseScale").unwrap().display, "0.012");
    assert_eq!(panel.control("colorMode").unwrap().active, Some(2));
}

#[test]
fn image_upload_from_disk() {
    let dir = support::scratch_dir("upload");
    let image_path = dir.join("sky.gif");
    fs::write(&image_path, b"GIF89a\x01\x00\x01\x00\x00\x00\x00;").unwrap();
    let text_path = dir.join("notes.txt");
    fs::write(&text_path, "not an image").unwrap();

    let pattern = load_pattern_file(&support::fixture("aurora.yaml")).unwrap();
    let (mut renderer, log) = support::recording_renderer();
    renderer.generate_controls(&pattern.schema);

    let ticket = renderer.begin_image_upload("overlay").unwrap();
    assert!(
        !renderer.complete_image_upload(ticket, ImageFile::read(&text_path))
    );
    assert!(log.borrow().is_empty());

    let ticket = renderer.begin_image_upload("overlay").unwrap();
    assert!(
        renderer.complete_image_upload(ticket, ImageFile::read(&image_path))
    );

    let overlay = renderer.params().text("overlay");
    assert!(overlay.starts_with("data:image/gif;base64,R0lGODlh"));

    let panel = PanelView::from_renderer(&renderer);
    let control = panel.control("overlay").unwrap();
    assert!(!control.show_upload);
    assert_eq!(control.preview.as_deref(), Some(overlay.as_str()));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn gallery_round_trip_with_saved_params() {
    let dir = support::scratch_dir("gallery");
    let user_data_dir = dir.to_string_lossy().into_owned();

    let mut registry = PatternRegistry::new();
    registry
        .register_loaded(
            load_pattern_file(&support::fixture("aurora.yaml")).unwrap(),
        )
        .unwrap();
    let mut gallery = Gallery::new(registry);

    let thumbnails = gallery.templates();
    assert_eq!(thumbnails.len(), 1);
    assert_eq!(thumbnails[0].display_name, "Aurora Borealis");

    let renderer = gallery.open_pattern("aurora", |_| {}).unwrap();
    renderer.slide("speed", 3.33);
    renderer.select("blend", 2);
    let tuned = renderer.params();
    storage::save_params(&user_data_dir, "aurora", &tuned).unwrap();

    assert!(gallery.reset_pattern());
    assert_eq!(gallery.frame_params(), Some(thumbnails[0].params.clone()));

    let saved = storage::load_params_if_exists(&user_data_dir, "aurora")
        .unwrap()
        .unwrap();
    let schema = gallery.registry().get("aurora").unwrap().schema();
    let restored = storage::restore_params(&schema, &saved);
    gallery.renderer_mut().unwrap().reset_to_defaults(&restored);

    let params = gallery.frame_params().unwrap();
    assert_eq!(params, tuned);
    assert_eq!(params.value("speed"), Some(&ParamValue::Float(3.3)));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn watcher_flags_pattern_edits() {
    if !support::watch_tests_enabled() {
        eprintln!(
            "Skipping file watcher test. Set PATTERNFLOW_RUN_WATCH_TESTS=1 \
            to run."
        );
        return;
    }

    let dir = support::scratch_dir("watch");
    let path = dir.join("aurora.yaml");
    fs::copy(support::fixture("aurora.yaml"), &path).unwrap();

    let watcher = PatternFileWatcher::start(&path).unwrap();
    assert!(!watcher.take_changed());

    let source = fs::read_to_string(&path).unwrap();
    fs::write(&path, source.replace("waveCount: 7", "waveCount: 9")).unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    while !watcher.take_changed() {
        assert!(Instant::now() < deadline, "no change event within 5s");
        thread::sleep(Duration::from_millis(50));
    }

    let reloaded = load_pattern_file(watcher.path()).unwrap();
    assert_eq!(reloaded.schema.defaults.float("waveCount"), 9.0);

    let _ = fs::remove_dir_all(&dir);
}
