use patternflow::prelude::*;

pub static PATTERN_CONFIG: PatternConfig = PatternConfig {
    name: "flow_field",
    display_name: "Flow Field",
    description: "Perlin noise particles",
};

pub fn schema() -> PatternSchema {
    SchemaBuilder::new()
        .group("Particles", Some(Icon::Sparkles))
        .slider("particleCount", "Density", 1200.0, (100.0, 4000.0), 100.0)
        .slider("speed", "Movement Speed", 2.0, (0.2, 10.0), 0.2)
        .slider("particleOpacity", "Particle Opacity", 150.0, (10.0, 255.0), 5.0)
        .group("Noise Engine", Some(Icon::Waves))
        .slider("noiseScale", "Noise Scale", 0.005, (0.001, 0.05), 0.001)
        .slider("noiseDetail", "Octaves", 4.0, (1.0, 8.0), 1.0)
        .slider("noiseFalloff", "Falloff", 0.5, (0.1, 0.9), 0.05)
        .slider("zSpeed", "Field Evolution", 0.002, (0.0, 0.02), 0.001)
        .group("Visual Style", Some(Icon::Palette))
        .slider("strokeWeight", "Line Thickness", 1.5, (0.5, 8.0), 0.5)
        .slider("fadeAmount", "Trail Persistence", 12.0, (1.0, 80.0), 1.0)
        .palette(
            "colorMode",
            "Color Palette",
            0,
            &[
                &["#a855f7", "#3b82f6", "#06b6d4"],
                &["#ef4444", "#f97316", "#eab308"],
                &["#0ea5e9", "#06b6d4", "#14b8a6"],
                &["#22c55e", "#84cc16", "#eab308"],
            ],
        )
        .toggle("showTrails", "Enable Trails", true)
        .build()
}
