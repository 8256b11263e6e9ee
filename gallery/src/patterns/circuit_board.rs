use patternflow::prelude::*;

pub static PATTERN_CONFIG: PatternConfig = PatternConfig {
    name: "circuit_board",
    display_name: "Circuit Board",
    description: "Digital circuit patterns",
};

pub fn schema() -> PatternSchema {
    SchemaBuilder::new()
        .group("Hardware", Some(Icon::Link))
        .slider("gridSize", "Grid Scale", 30.0, (10.0, 60.0), 5.0)
        .slider("density", "Node Density", 0.4, (0.1, 0.8), 0.1)
        .toggle("showComponents", "Render Nodes", true)
        .group("Current", Some(Icon::Play))
        .slider("traceSpeed", "Signal Velocity", 4.0, (1.0, 15.0), 1.0)
        .toggle("glow", "Energy Surge", true)
        .group("Style", Some(Icon::Palette))
        .palette(
            "colorMode",
            "Circuit Color",
            0,
            &[
                &["#22c55e", "#4ade80"],
                &["#06b6d4", "#22d3ee"],
                &["#a855f7", "#c084fc"],
                &["#f97316", "#fb923c"],
            ],
        )
        .build()
}
