use patternflow::prelude::*;

pub static PATTERN_CONFIG: PatternConfig = PatternConfig {
    name: "spiral_galaxy",
    display_name: "Spiral Galaxy",
    description: "Cosmic spiral formation",
};

pub fn schema() -> PatternSchema {
    SchemaBuilder::new()
        .group("Cosmic Structure", Some(Icon::Star))
        .slider("arms", "Spiral Arms", 4.0, (2.0, 12.0), 1.0)
        .slider("starCount", "Star Population", 1000.0, (200.0, 3000.0), 100.0)
        .slider("spiralTightness", "Vortex Power", 0.15, (0.02, 0.5), 0.01)
        .slider("spread", "Arm Dispersion", 0.4, (0.1, 1.0), 0.05)
        .group("Atmosphere", Some(Icon::Sparkles))
        .slider("nebulaIntensity", "Nebula Glow", 0.2, (0.0, 1.0), 0.1)
        .toggle("twinkle", "Star Flicker", true)
        .group("Motion", Some(Icon::Rotate))
        .slider("rotationSpeed", "Orbital Speed", 0.3, (0.0, 2.0), 0.05)
        .group("Style", Some(Icon::Palette))
        .slider("starSize", "Luminosity Size", 2.5, (0.5, 8.0), 0.5)
        .palette(
            "colorMode",
            "Galaxy Type",
            0,
            &[
                &["#fef3c7", "#fbbf24", "#a855f7"],
                &["#bfdbfe", "#60a5fa", "#ec4899"],
                &["#d1fae5", "#34d399", "#06b6d4"],
                &["#fecdd3", "#fb7185", "#f472b6"],
            ],
        )
        .build()
}
