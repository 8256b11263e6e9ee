use patternflow::prelude::*;

pub static PATTERN_CONFIG: PatternConfig = PatternConfig {
    name: "wave_interference",
    display_name: "Wave Interference",
    description: "Mesmerizing wave patterns",
};

pub fn schema() -> PatternSchema {
    SchemaBuilder::new()
        .group("Waves", Some(Icon::Waves))
        .slider("waveCount", "Layer Count", 5.0, (1.0, 15.0), 1.0)
        .slider("amplitude", "Vertical Swing", 80.0, (10.0, 200.0), 5.0)
        .slider("frequency", "Wave Tightness", 0.02, (0.005, 0.1), 0.005)
        .group("Dynamics", Some(Icon::Play))
        .slider("speed", "Travel Speed", 2.0, (0.1, 6.0), 0.1)
        .slider("phaseShift", "Offset Sync", 0.5, (0.0, 2.0), 0.1)
        .slider("resolution", "Smoothness", 6.0, (2.0, 30.0), 2.0)
        .group("Appearance", Some(Icon::Palette))
        .toggle("fillWaves", "Fill Volume", false)
        .slider("strokeWeight", "Line Border", 2.0, (0.5, 10.0), 0.5)
        .palette(
            "colorMode",
            "Wave Theme",
            0,
            &[
                &["#06b6d4", "#3b82f6", "#8b5cf6"],
                &["#f97316", "#ef4444", "#ec4899"],
                &["#22c55e", "#06b6d4", "#3b82f6"],
                &["#fbbf24", "#f472b6", "#a855f7"],
            ],
        )
        .build()
}
