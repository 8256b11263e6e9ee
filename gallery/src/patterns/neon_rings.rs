use patternflow::prelude::*;

pub static PATTERN_CONFIG: PatternConfig = PatternConfig {
    name: "neon_rings",
    display_name: "Neon Rings",
    description: "Pulsing concentric circles",
};

pub fn schema() -> PatternSchema {
    SchemaBuilder::new()
        .group("Rings", Some(Icon::Layers))
        .slider("ringCount", "Layer Count", 12.0, (3.0, 30.0), 1.0)
        .slider("thickness", "Ring Weight", 3.0, (0.5, 15.0), 0.5)
        .slider("jitter", "Vibration", 0.0, (0.0, 10.0), 0.5)
        .group("Animation", Some(Icon::Play))
        .slider("pulseSpeed", "Pulse Frequency", 1.0, (0.0, 5.0), 0.1)
        .slider("rotationSpeed", "Orbit Speed", 0.5, (0.0, 4.0), 0.1)
        .group("Visuals", Some(Icon::Sparkles))
        .slider("glowIntensity", "Bloom Power", 15.0, (0.0, 40.0), 1.0)
        .toggle("showInner", "Solid Core", false)
        .group("Style", Some(Icon::Palette))
        .palette(
            "colorMode",
            "Neon Theme",
            0,
            &[
                &["#a855f7", "#ec4899", "#06b6d4"],
                &["#22c55e", "#eab308", "#ef4444"],
                &["#3b82f6", "#8b5cf6", "#ec4899"],
                &["#ffffff", "#a1a1aa", "#71717a"],
            ],
        )
        .build()
}
