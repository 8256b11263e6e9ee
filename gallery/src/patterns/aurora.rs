use patternflow::prelude::*;

pub static PATTERN_CONFIG: PatternConfig = PatternConfig {
    name: "aurora",
    display_name: "Aurora Borealis",
    description: "Northern lights simulation",
};

pub fn schema() -> PatternSchema {
    SchemaBuilder::new()
        .group("Aurora", Some(Icon::Waves))
        .slider("waveCount", "Layer Depth", 8.0, (3.0, 15.0), 1.0)
        .slider("intensity", "Luminescence", 0.8, (0.1, 1.0), 0.1)
        .slider("noiseScale", "Turbulence", 0.005, (0.001, 0.02), 0.001)
        .slider("spread", "Vertical Offset", 40.0, (10.0, 100.0), 5.0)
        .group("Motion", Some(Icon::Play))
        .slider("speed", "Wind Speed", 1.0, (0.1, 4.0), 0.1)
        .group("Style", Some(Icon::Palette))
        .palette(
            "colorMode",
            "Atmosphere",
            0,
            &[
                &["#22c55e", "#06b6d4", "#8b5cf6"],
                &["#ec4899", "#a855f7", "#3b82f6"],
                &["#eab308", "#22c55e", "#06b6d4"],
                &["#f472b6", "#c084fc", "#60a5fa"],
            ],
        )
        .build()
}
