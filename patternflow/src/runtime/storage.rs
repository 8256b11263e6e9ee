use std::error::Error;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories_next::{BaseDirs, UserDirs};
use log::warn;
use serde::{Deserialize, Serialize};

use super::settings::GallerySettings;
use crate::control::param_value::ParamValue;
use crate::control::params::Params;
use crate::control::schema::{PatternSchema, WidgetKind};
use crate::control::widgets::snap_slider_value;
use crate::core::util::safe_range;

pub const PARAMS_VERSION: &str = "1";

pub fn config_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|base| base.config_dir().join("PatternFlow"))
}

pub fn default_user_data_dir() -> String {
    let primary_path = UserDirs::new().and_then(|ud| {
        ud.document_dir().map(|p| p.to_path_buf().join("PatternFlow"))
    });

    let fallback_path = BaseDirs::new()
        .map(|bd| bd.home_dir().join("PatternFlow").join("Data"));

    primary_path
        .or(fallback_path)
        .unwrap_or_else(|| PathBuf::from("PatternFlow"))
        .to_string_lossy()
        .into_owned()
}

//------------------------------------------------------------------------------
// Settings
//------------------------------------------------------------------------------

fn settings_path(config_dir: &Path) -> PathBuf {
    config_dir.join("settings.json")
}

pub fn save_settings(
    config_dir: &Path,
    settings: &GallerySettings,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(settings)?;
    let path = settings_path(config_dir);
    write_creating_dirs(&path, json)?;
    Ok(path)
}

pub fn load_settings(
    config_dir: &Path,
) -> Result<GallerySettings, Box<dyn Error>> {
    let json = fs::read_to_string(settings_path(config_dir))?;
    let settings = serde_json::from_str::<GallerySettings>(&json)?;
    Ok(settings)
}

pub fn load_settings_if_exists(
    config_dir: &Path,
) -> Result<Option<GallerySettings>, Box<dyn Error>> {
    if_exists(load_settings(config_dir))
}

//------------------------------------------------------------------------------
// Parameter snapshots
//------------------------------------------------------------------------------

#[derive(Debug, Deserialize, Serialize)]
pub struct ParamsSnapshot {
    pub version: String,
    pub pattern: String,
    pub params: Params,
}

fn params_path(user_data_dir: &str, pattern: &str) -> PathBuf {
    PathBuf::from(user_data_dir)
        .join("Params")
        .join(format!("{}_params.json", pattern))
}

pub fn save_params(
    user_data_dir: &str,
    pattern: &str,
    params: &Params,
) -> Result<PathBuf, Box<dyn Error>> {
    let snapshot = ParamsSnapshot {
        version: PARAMS_VERSION.to_string(),
        pattern: pattern.to_string(),
        params: params.clone(),
    };

    let json = serde_json::to_string_pretty(&snapshot)?;
    let path = params_path(user_data_dir, pattern);
    write_creating_dirs(&path, json)?;
    Ok(path)
}

pub fn load_params(
    user_data_dir: &str,
    pattern: &str,
) -> Result<Params, Box<dyn Error>> {
    let path = params_path(user_data_dir, pattern);
    let json = fs::read_to_string(&path)?;
    let snapshot = serde_json::from_str::<ParamsSnapshot>(&json)?;

    if snapshot.pattern != pattern {
        return Err(format!(
            "'{}' holds params for '{}', not '{}'",
            path.display(),
            snapshot.pattern,
            pattern
        )
        .into());
    }

    Ok(snapshot.params)
}

pub fn load_params_if_exists(
    user_data_dir: &str,
    pattern: &str,
) -> Result<Option<Params>, Box<dyn Error>> {
    if_exists(load_params(user_data_dir, pattern))
}

/// Overlays `saved` onto the schema's defaults. Saved values for names the
/// schema no longer declares, or that no longer fit their widget, are
/// dropped so the result always has exactly the defaults' keys.
pub fn restore_params(schema: &PatternSchema, saved: &Params) -> Params {
    let mut restored = schema.defaults.clone();

    for (name, value) in saved.iter() {
        let Some(spec) = schema.param(name) else {
            warn!("Dropping saved value for unknown param `{}`", name);
            continue;
        };
        if !restored.has(name) {
            continue;
        }
        match value.coerce_for(&spec.kind).and_then(|v| fit(&spec.kind, v)) {
            Some(value) => restored.insert(name, value),
            None => warn!(
                "Dropping saved {} value for {} `{}`",
                value.type_name(),
                spec.kind.variant_str(),
                name
            ),
        }
    }

    restored
}

/// Keeps a coerced value only if it lies inside the widget's domain. Slider
/// values are snapped onto the step grid.
fn fit(kind: &WidgetKind, value: ParamValue) -> Option<ParamValue> {
    match (kind, value) {
        (WidgetKind::Slider { min, max, step }, ParamValue::Float(v)) => {
            let (lo, hi) = safe_range(*min, *max);
            (v.is_finite() && (lo..=hi).contains(&v)).then(|| {
                ParamValue::Float(snap_slider_value(v, *min, *max, *step))
            })
        }
        (kind, ParamValue::Index(index)) => match kind.option_count() {
            Some(len) if index >= len => None,
            _ => Some(ParamValue::Index(index)),
        },
        (_, value) => Some(value),
    }
}

fn write_creating_dirs(path: &Path, contents: String) -> std::io::Result<()> {
    if let Some(parent_dir) = path.parent() {
        fs::create_dir_all(parent_dir)?;
    }
    fs::write(path, contents)
}

fn if_exists<T>(
    result: Result<T, Box<dyn Error>>,
) -> Result<Option<T>, Box<dyn Error>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            if err
                .downcast_ref::<std::io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::NotFound)
            {
                Ok(None)
            } else {
                Err(err)
            }
        }
    }
}
