use crate::control::config::LoadedPattern;
use crate::control::schema::PatternSchema;
use crate::core::util::HashMap;

type SchemaFactory = Box<dyn Fn() -> PatternSchema + Send + Sync + 'static>;

/// Static metadata every built-in pattern module exports as
/// `PATTERN_CONFIG`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatternConfig {
    /// Unique identifier, also used in file names
    pub name: &'static str,
    /// Gallery card title
    pub display_name: &'static str,
    pub description: &'static str,
}

pub struct PatternEntry {
    pub name: String,
    pub display_name: String,
    pub description: String,
    factory: SchemaFactory,
}

impl PatternEntry {
    /// A fresh schema. Every call produces an independent value.
    pub fn schema(&self) -> PatternSchema {
        (self.factory)()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatternCategory {
    pub title: String,
    pub patterns: Vec<String>,
}

#[derive(Default)]
pub struct PatternRegistry {
    entries: HashMap<String, PatternEntry>,
    ordered_names: Vec<String>,
    categories: Vec<PatternCategory>,
}

impl PatternRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(
        &mut self,
        config: &'static PatternConfig,
        factory: F,
    ) -> Result<(), String>
    where
        F: Fn() -> PatternSchema + Send + Sync + 'static,
    {
        self.insert(PatternEntry {
            name: config.name.to_string(),
            display_name: config.display_name.to_string(),
            description: config.description.to_string(),
            factory: Box::new(factory),
        })
    }

    /// Registers a pattern read from a pattern file. If the file names a
    /// category it is appended to (or creates) that category.
    pub fn register_loaded(
        &mut self,
        pattern: LoadedPattern,
    ) -> Result<(), String> {
        let name = pattern.name.clone();
        let category = pattern.category.clone();
        let schema = pattern.schema;

        self.insert(PatternEntry {
            name: pattern.name,
            display_name: pattern.display_name,
            description: pattern.description,
            factory: Box::new(move || schema.clone()),
        })?;

        if let Some(title) = category {
            match self.categories.iter_mut().find(|c| c.title == title) {
                Some(existing) => existing.patterns.push(name),
                None => self.categories.push(PatternCategory {
                    title,
                    patterns: vec![name],
                }),
            }
        }

        Ok(())
    }

    fn insert(&mut self, entry: PatternEntry) -> Result<(), String> {
        if self.entries.contains_key(&entry.name) {
            return Err(format!(
                "duplicate pattern registration: {}",
                entry.name
            ));
        }

        self.ordered_names.push(entry.name.clone());
        self.entries.insert(entry.name.clone(), entry);

        Ok(())
    }

    pub fn define_category(
        &mut self,
        title: impl Into<String>,
        patterns: Vec<String>,
    ) -> Result<(), String> {
        let title = title.into();

        for name in &patterns {
            if !self.entries.contains_key(name) {
                return Err(format!(
                    "category '{}' references unknown pattern '{}'",
                    title, name
                ));
            }
        }

        self.categories.push(PatternCategory { title, patterns });

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&PatternEntry> {
        self.entries.get(name)
    }

    /// Entries in registration order
    pub fn entries(&self) -> impl Iterator<Item = &PatternEntry> {
        self.ordered_names
            .iter()
            .filter_map(|name| self.entries.get(name))
    }

    pub fn pattern_names(&self) -> &[String] {
        &self.ordered_names
    }

    pub fn first_pattern_name(&self) -> Option<&str> {
        self.ordered_names.first().map(String::as_str)
    }

    pub fn categories(&self) -> &[PatternCategory] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.ordered_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_names.is_empty()
    }
}

/// Builds a [`PatternRegistry`] from pattern modules grouped by category.
/// Each module must export `PATTERN_CONFIG: PatternConfig` and
/// `fn schema() -> PatternSchema`.
///
/// ```rust,ignore
/// let registry = register_patterns! {
///     { title: "Organic", patterns: [flow_field, waves] },
///     { title: "Cosmic", patterns: [galaxy] },
/// }?;
/// ```
#[macro_export]
macro_rules! register_patterns {
    (
        $(
            {
                title: $title:expr,
                patterns: [$($module:ident),* $(,)?]
            }
        ),+ $(,)?
    ) => {{
        (|| -> Result<$crate::runtime::registry::PatternRegistry, String> {
            let mut __registry =
                $crate::runtime::registry::PatternRegistry::new();

            $(
                let mut __category_patterns = Vec::new();
                $(
                    __registry.register(&$module::PATTERN_CONFIG, $module::schema)?;
                    __category_patterns
                        .push($module::PATTERN_CONFIG.name.to_string());
                )*

                __registry.define_category($title, __category_patterns)?;
            )+

            Ok(__registry)
        })()
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::config::parse_pattern;
    use crate::control::schema::SchemaBuilder;

    static CONFIG: PatternConfig = PatternConfig {
        name: "test",
        display_name: "Test",
        description: "A test pattern",
    };

    fn schema() -> PatternSchema {
        SchemaBuilder::new().toggle("glow", "Glow", true).build()
    }

    mod other {
        use super::*;

        pub static PATTERN_CONFIG: PatternConfig = PatternConfig {
            name: "other",
            display_name: "Other",
            description: "",
        };

        pub fn schema() -> PatternSchema {
            SchemaBuilder::new()
                .slider("speed", "Speed", 1.0, (0.0, 2.0), 0.1)
                .build()
        }
    }

    #[test]
    fn test_registers_and_lists_names() {
        let mut registry = PatternRegistry::new();
        registry.register(&CONFIG, schema).unwrap();

        assert_eq!(registry.pattern_names(), &["test"]);
        assert_eq!(registry.first_pattern_name(), Some("test"));
        assert_eq!(registry.get("test").unwrap().schema(), schema());
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut registry = PatternRegistry::new();
        registry.register(&CONFIG, schema).unwrap();

        let err = registry.register(&CONFIG, schema).unwrap_err();
        assert!(err.contains("duplicate"));
    }

    #[test]
    fn test_rejects_category_with_unknown_pattern() {
        let mut registry = PatternRegistry::new();
        registry.register(&CONFIG, schema).unwrap();

        let err = registry
            .define_category("bad", vec!["test".into(), "missing".into()])
            .unwrap_err();

        assert!(err.contains("unknown pattern"));
    }

    #[test]
    fn test_register_loaded_joins_category() {
        let mut registry = register_patterns! {
            { title: "Builtin", patterns: [other] },
        }
        .unwrap();

        let loaded = parse_pattern(
            "name: extra\ncategory: Builtin\ndefaults: {}\ncontrols: []\n",
        )
        .unwrap();
        registry.register_loaded(loaded).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.categories(),
            &[PatternCategory {
                title: "Builtin".into(),
                patterns: vec!["other".into(), "extra".into()],
            }]
        );
        let names: Vec<&str> =
            registry.entries().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["other", "extra"]);
    }
}
