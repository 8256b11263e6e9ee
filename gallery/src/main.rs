use std::cell::Cell;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use patternflow::prelude::*;
use patternflow::runtime::settings::GallerySettings;
use patternflow::runtime::storage;
use patternflow::runtime::watch::PatternFileWatcher;
use patternflow::view::terminal;
use termcolor::ColorChoice;

mod assign;
mod patterns;

use assign::Action;
use patterns::{
    aurora, circuit_board, flow_field, matrix_rain, metaballs, neon_rings,
    spiral_galaxy, wave_interference,
};

const WATCH_POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(
    name = "gallery",
    version,
    about = "Browse generative patterns and tune their controls"
)]
struct Cli {
    /// Directory of extra pattern files (.yaml, .yml, .json) to register.
    /// Overrides `patterns_dir` from the settings file.
    #[arg(long, global = true)]
    patterns_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log more detail (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every registered pattern by category
    List,
    /// Print a pattern's generated control panel
    Show {
        /// Built-in pattern name or path to a pattern file
        pattern: String,
        /// Print the panel as JSON for web frontends
        #[arg(long)]
        json: bool,
    },
    /// Apply name=value changes to a pattern's controls
    Tweak {
        pattern: String,
        /// e.g. speed=7.5 glow=off colorMode=2 overlay=@image.png
        assignments: Vec<String>,
        /// Start from the params saved for this pattern
        #[arg(long)]
        load: bool,
        /// Reset to defaults after applying assignments
        #[arg(long)]
        reset: bool,
        /// Save the resulting params
        #[arg(long)]
        save: bool,
        /// Print params as JSON instead of the panel
        #[arg(long)]
        json: bool,
    },
    /// Validate pattern files, or every registered pattern if none given
    Check { files: Vec<PathBuf> },
    /// Re-render a pattern file's panel whenever it changes
    Watch { file: PathBuf },
}

fn main() {
    let cli = Cli::parse();
    init_logger_with(cli.verbose, color_choice(cli.no_color));

    if let Err(err) = run(cli) {
        eprintln!("gallery: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let settings = load_settings();
    let color = color_choice(cli.no_color);
    let patterns_dir = cli.patterns_dir.clone().or_else(|| {
        (!settings.patterns_dir.is_empty())
            .then(|| PathBuf::from(&settings.patterns_dir))
    });

    match cli.command {
        Command::List => {
            let registry = build_registry(patterns_dir.as_deref())?;
            list(&registry);
        }
        Command::Show { pattern, json } => {
            let mut registry = build_registry(patterns_dir.as_deref())?;
            let name = resolve_pattern(&mut registry, &pattern)?;
            let mut gallery = Gallery::new(registry);
            let renderer = gallery.open_pattern(&name, |_| {})?;
            let panel = PanelView::from_renderer(renderer);
            if json {
                println!("{}", serde_json::to_string_pretty(&panel)?);
            } else {
                terminal::print_panel(&panel, color)?;
            }
        }
        Command::Tweak {
            pattern,
            assignments,
            load,
            reset,
            save,
            json,
        } => {
            let mut registry = build_registry(patterns_dir.as_deref())?;
            let name = resolve_pattern(&mut registry, &pattern)?;
            tweak(
                Gallery::new(registry),
                &name,
                &settings,
                &assignments,
                TweakFlags { load, reset, save },
            )
            .and_then(|gallery| print_result(&gallery, json, color))?;
        }
        Command::Check { files } => {
            check(&files, patterns_dir.as_deref())?;
        }
        Command::Watch { file } => watch(&file, color)?,
    }

    Ok(())
}

//------------------------------------------------------------------------------
// Registry
//------------------------------------------------------------------------------

fn build_registry(
    patterns_dir: Option<&Path>,
) -> Result<PatternRegistry, String> {
    let mut registry = patternflow::register_patterns! {
        {
            title: "Organic",
            patterns: [flow_field, wave_interference, metaballs]
        },
        {
            title: "Cosmic",
            patterns: [spiral_galaxy, aurora]
        },
        {
            title: "Geometry",
            patterns: [neon_rings]
        },
        {
            title: "Digital",
            patterns: [matrix_rain, circuit_board]
        },
    }?;

    if let Some(dir) = patterns_dir {
        for path in pattern_files(dir)? {
            let result = load_pattern_file(&path)
                .and_then(|pattern| registry.register_loaded(pattern));
            if let Err(err) = result {
                warn!("Skipping {}: {}", path.display(), err);
            }
        }
    }

    Ok(registry)
}

fn pattern_files(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries = fs::read_dir(dir).map_err(|err| {
        format!("failed to read patterns dir '{}': {}", dir.display(), err)
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| is_pattern_file(path))
        .collect();
    paths.sort();

    Ok(paths)
}

fn is_pattern_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml" | "json")
    )
}

/// Accepts a registered name or a path to a pattern file, registering the
/// file on the fly
fn resolve_pattern(
    registry: &mut PatternRegistry,
    pattern: &str,
) -> Result<String, String> {
    if registry.get(pattern).is_some() {
        return Ok(pattern.to_string());
    }

    let path = Path::new(pattern);
    if !path.is_file() {
        return Err(format!(
            "unknown pattern '{}'. Run `gallery list` to see available \
            patterns.",
            pattern
        ));
    }

    let loaded = load_pattern_file(path)?;
    let name = loaded.name.clone();
    if registry.get(&name).is_some() {
        debug!("{} is already registered as {}", path.display(), name);
    } else {
        registry.register_loaded(loaded)?;
    }

    Ok(name)
}

fn list(registry: &PatternRegistry) {
    let mut listed = HashSet::default();

    for category in registry.categories() {
        println!("{}", category.title);
        for name in &category.patterns {
            if let Some(entry) = registry.get(name) {
                println!("  {:20} {}", entry.name, entry.description);
                listed.insert(name.as_str());
            }
        }
    }

    let uncategorized: Vec<&String> = registry
        .pattern_names()
        .iter()
        .filter(|name| !listed.contains(name.as_str()))
        .collect();
    if !uncategorized.is_empty() {
        println!("Other");
        for name in uncategorized {
            if let Some(entry) = registry.get(name) {
                println!("  {:20} {}", entry.name, entry.description);
            }
        }
    }
}

//------------------------------------------------------------------------------
// Commands
//------------------------------------------------------------------------------

struct TweakFlags {
    load: bool,
    reset: bool,
    save: bool,
}

fn tweak(
    mut gallery: Gallery,
    name: &str,
    settings: &GallerySettings,
    assignments: &[String],
    flags: TweakFlags,
) -> Result<Gallery, Box<dyn Error>> {
    let updates = Rc::new(Cell::new(0usize));
    let counter = updates.clone();
    gallery.open_pattern(name, move |params| {
        counter.set(counter.get() + 1);
        debug!("Params updated: {:?}", params);
    })?;

    let schema = gallery
        .registry()
        .get(name)
        .map(|entry| entry.schema())
        .ok_or_else(|| format!("unknown pattern '{}'", name))?;
    let renderer = gallery.renderer_mut().ok_or("pattern did not open")?;

    if flags.load {
        match storage::load_params_if_exists(&settings.user_data_dir, name)? {
            Some(saved) => {
                let restored = storage::restore_params(&schema, &saved);
                renderer.reset_to_defaults(&restored);
            }
            None => warn!("No saved params for {}", name),
        }
    }

    for raw in assignments {
        match assign::plan(renderer, raw)? {
            Action::Interact(interaction) => {
                let outcome = renderer.handle(interaction);
                if outcome == InteractionOutcome::Ignored {
                    warn!("'{}' was not applied", raw);
                }
            }
            Action::Upload { name, path } => {
                if let Some(ticket) = renderer.begin_image_upload(&name) {
                    let file = ImageFile::read(&path);
                    renderer.complete_image_upload(ticket, file);
                }
            }
            Action::Nothing => {}
        }
    }

    if flags.reset {
        gallery.reset_pattern();
    }

    if flags.save {
        if let Some(params) = gallery.frame_params() {
            let path =
                storage::save_params(&settings.user_data_dir, name, &params)?;
            info!("Saved params to {}", path.display());
        }
    }

    info!("{} update(s) applied", updates.get());

    Ok(gallery)
}

fn print_result(
    gallery: &Gallery,
    json: bool,
    color: ColorChoice,
) -> Result<(), Box<dyn Error>> {
    let renderer = gallery.renderer().ok_or("no pattern open")?;

    if json {
        println!("{}", serde_json::to_string_pretty(renderer.params_ref())?);
    } else {
        terminal::print_panel(&PanelView::from_renderer(renderer), color)?;
    }

    Ok(())
}

fn check(
    files: &[PathBuf],
    patterns_dir: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let mut failures = 0;

    if files.is_empty() {
        let registry = build_registry(patterns_dir)?;
        for entry in registry.entries() {
            if !report(&entry.name, &entry.schema()) {
                failures += 1;
            }
        }
    } else {
        for path in files {
            match load_pattern_file(path) {
                Ok(pattern) => {
                    let label = path.display().to_string();
                    if !report(&label, &pattern.schema) {
                        failures += 1;
                    }
                }
                Err(err) => {
                    failures += 1;
                    println!("FAIL  {}", path.display());
                    println!("      {}", err);
                }
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} pattern(s) with problems", failures).into());
    }

    Ok(())
}

/// Prints the schema's issues. Returns true when there are none.
fn report(label: &str, schema: &PatternSchema) -> bool {
    let issues = schema.issues();
    if issues.is_empty() {
        println!("ok    {}", label);
        return true;
    }

    println!("FAIL  {}", label);
    for issue in issues {
        println!("      {}", issue);
    }
    false
}

fn watch(file: &Path, color: ColorChoice) -> Result<(), Box<dyn Error>> {
    let mut renderer = ControlRenderer::detached();
    let pattern = load_pattern_file(file)?;
    renderer.generate_controls(&pattern.schema);
    terminal::print_panel(&PanelView::from_renderer(&renderer), color)?;

    let watcher = PatternFileWatcher::start(file)?;
    info!("Watching {}. Press Ctrl-C to stop.", file.display());

    loop {
        thread::sleep(WATCH_POLL_INTERVAL);

        if !watcher.take_changed() {
            continue;
        }

        match load_pattern_file(watcher.path()) {
            Ok(pattern) => {
                renderer.generate_controls(&pattern.schema);
                println!();
                terminal::print_panel(
                    &PanelView::from_renderer(&renderer),
                    color,
                )?;
            }
            Err(err) => error!("{}", err),
        }
    }
}

fn color_choice(no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    }
}

fn load_settings() -> GallerySettings {
    let Some(dir) = storage::config_dir() else {
        return GallerySettings::default();
    };

    match storage::load_settings_if_exists(&dir) {
        Ok(Some(settings)) => settings,
        Ok(None) => GallerySettings::default(),
        Err(err) => {
            warn!("Ignoring unreadable settings: {}", err);
            GallerySettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_patterns_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("patterns")
    }

    #[test]
    fn test_builtin_patterns_by_category() {
        let registry = build_registry(None).unwrap();

        assert_eq!(registry.len(), 8);
        let categories: Vec<(&str, Vec<&str>)> = registry
            .categories()
            .iter()
            .map(|c| {
                (
                    c.title.as_str(),
                    c.patterns.iter().map(String::as_str).collect(),
                )
            })
            .collect();
        assert_eq!(
            categories,
            vec![
                (
                    "Organic",
                    vec!["flow_field", "wave_interference", "metaballs"]
                ),
                ("Cosmic", vec!["spiral_galaxy", "aurora"]),
                ("Geometry", vec!["neon_rings"]),
                ("Digital", vec!["matrix_rain", "circuit_board"]),
            ]
        );
    }

    #[test]
    fn test_builtin_schemas_are_valid() {
        let registry = build_registry(None).unwrap();

        for entry in registry.entries() {
            let schema = entry.schema();
            assert!(schema.issues().is_empty(), "{}", entry.name);

            let mut renderer = ControlRenderer::detached();
            renderer.generate_controls(&schema);
            assert_eq!(renderer.params(), schema.defaults, "{}", entry.name);
        }
    }

    #[test]
    fn test_patterns_dir_adds_file_patterns() {
        let registry = build_registry(Some(&sample_patterns_dir())).unwrap();

        assert_eq!(registry.len(), 9);
        let geometry = registry
            .categories()
            .iter()
            .find(|c| c.title == "Geometry")
            .unwrap();
        assert_eq!(geometry.patterns, vec!["neon_rings", "neon_rings_remix"]);
    }

    #[test]
    fn test_verbosity_flag() {
        let cli = Cli::parse_from(["gallery", "-vv", "list"]);
        assert_eq!(cli.verbose, 2);

        let cli = Cli::parse_from(["gallery", "list", "--no-color"]);
        assert_eq!(cli.verbose, 0);
        assert!(cli.no_color);
    }
}
