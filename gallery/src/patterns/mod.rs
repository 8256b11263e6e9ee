pub mod aurora;
pub mod circuit_board;
pub mod flow_field;
pub mod matrix_rain;
pub mod metaballs;
pub mod neon_rings;
pub mod spiral_galaxy;
pub mod wave_interference;
