use patternflow::prelude::*;

pub static PATTERN_CONFIG: PatternConfig = PatternConfig {
    name: "metaballs",
    display_name: "Metaballs",
    description: "Organic blob simulation",
};

pub fn schema() -> PatternSchema {
    SchemaBuilder::new()
        .group("Protoplasm", Some(Icon::Sparkles))
        .slider("ballCount", "Blob Count", 8.0, (2.0, 15.0), 1.0)
        .slider("threshold", "Viscosity", 1.2, (0.5, 3.0), 0.1)
        .group("Simulation", Some(Icon::Play))
        .slider("speed", "Flow Speed", 2.0, (0.1, 8.0), 0.1)
        .slider("resolution", "Fidelity", 4.0, (2.0, 10.0), 1.0)
        .toggle("glow", "Enable Membrane", true)
        .group("Style", Some(Icon::Palette))
        .palette(
            "colorMode",
            "Bio Palette",
            0,
            &[
                &["#a855f7", "#3b82f6"],
                &["#22c55e", "#06b6d4"],
                &["#ef4444", "#f97316"],
                &["#ec4899", "#fca5a5"],
            ],
        )
        .color("background", "Backdrop", 0, &["#0a0a0b", "#0f172a", "#1e1b4b"])
        .image_upload("texture", "Membrane Texture")
        .build()
}
