use patternflow::prelude::*;

pub static PATTERN_CONFIG: PatternConfig = PatternConfig {
    name: "matrix_rain",
    display_name: "Matrix Rain",
    description: "Digital rain effect",
};

pub fn schema() -> PatternSchema {
    SchemaBuilder::new()
        .group("Density", Some(Icon::Sparkles))
        .slider("columnCount", "Rain Density", 50.0, (20.0, 120.0), 5.0)
        .slider("fontSize", "Symbol Size", 16.0, (8.0, 32.0), 2.0)
        .slider("trailLength", "Tail Length", 15.0, (5.0, 40.0), 1.0)
        .group("Behavior", Some(Icon::Play))
        .slider("speed", "Fall Speed", 6.0, (1.0, 20.0), 1.0)
        .slider("glitchiness", "Glitch Rate", 0.1, (0.0, 1.0), 0.05)
        .group("Style", Some(Icon::Palette))
        .slider("fadeSpeed", "Persistence", 60.0, (20.0, 100.0), 5.0)
        .palette(
            "colorMode",
            "Matrix Color",
            0,
            &[
                &["#22c55e", "#4ade80", "#86efac"],
                &["#06b6d4", "#22d3ee", "#67e8f9"],
                &["#a855f7", "#c084fc", "#d8b4fe"],
                &["#f97316", "#fb923c", "#fdba74"],
            ],
        )
        .select("charset", "Glyphs", 0, &["katakana", "binary", "hex"])
        .build()
}
