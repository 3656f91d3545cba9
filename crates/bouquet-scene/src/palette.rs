//! Fixed colors used by the arrangement

use bouquet_core::Color;
use rand::Rng;

/// Flower and heart colors, sampled uniformly
pub const FLOWER_PALETTE: [Color; 15] = [
    Color::from_hex(0xFF69B4), // pink
    Color::from_hex(0xFF1493), // deep pink
    Color::from_hex(0xFF0000), // red
    Color::from_hex(0xFF4500), // orange red
    Color::from_hex(0xFFA500), // orange
    Color::from_hex(0xFFFF00), // yellow
    Color::from_hex(0x00FF00), // lime
    Color::from_hex(0x32CD32), // green
    Color::from_hex(0x00FFFF), // cyan
    Color::from_hex(0x1E90FF), // blue
    Color::from_hex(0x8A2BE2), // purple
    Color::from_hex(0xFF00FF), // magenta
    Color::from_hex(0xFFFFFF), // white
    Color::from_hex(0xFFD700), // gold
    Color::from_hex(0xDAA520), // goldenrod
];

pub const STEM_GREEN: Color = Color::from_hex(0x228B22);
pub const CENTER_YELLOW: Color = Color::from_hex(0xFFFF00);
pub const DAISY_WHITE: Color = Color::from_hex(0xFFFFFF);
pub const WATER_BLUE: Color = Color::from_hex(0x4A90E2);

pub const VASE_MAIN: Color = Color::from_hex(0x4A4A4A);
pub const VASE_PATTERN: Color = Color::from_hex(0x5A5A5A);
pub const VASE_HIGHLIGHT: Color = Color::from_hex(0x6A6A6A);
pub const VASE_BASE: Color = Color::from_hex(0x3A3A3A);

/// Uniformly pick a palette color
pub fn pick_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    FLOWER_PALETTE[rng.random_range(0..FLOWER_PALETTE.len())]
}

pub fn in_palette(color: &Color) -> bool {
    FLOWER_PALETTE.iter().any(|c| c == color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn palette_colors_are_distinct() {
        for (i, a) in FLOWER_PALETTE.iter().enumerate() {
            for b in &FLOWER_PALETTE[i + 1..] {
                assert_ne!(a.to_hex(), b.to_hex());
            }
        }
    }

    #[test]
    fn picks_cover_the_palette() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 15];
        for _ in 0..2000 {
            let c = pick_color(&mut rng);
            let idx = FLOWER_PALETTE.iter().position(|p| *p == c).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
