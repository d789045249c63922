//! DMG-on-CGB colorization.
//!
//! A CGB running a DMG-only cartridge picks a fixed three-palette set
//! the same way the console's boot code does: Nintendo-published
//! titles are looked up by the checksum of their header title bytes
//! (with the fourth title byte breaking collisions), everything else
//! falls back to the dark-green default, and a held button combination
//! can override the pick entirely.

/// An RGB888 color triple.
pub type Rgb = [u8; 3];

/// A colorization choice: four colors for the background layer and
/// four for each of the two object palettes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DmgPalette {
    pub bg: [Rgb; 4],
    pub obj0: [Rgb; 4],
    pub obj1: [Rgb; 4],
}

impl DmgPalette {
    const fn uniform(colors: [Rgb; 4]) -> Self {
        Self {
            bg: colors,
            obj0: colors,
            obj1: colors,
        }
    }
}

/// Neutral grayscale used in plain DMG mode (no colorization at all).
pub const GRAYSCALE: DmgPalette = DmgPalette::uniform([
    [0xff, 0xff, 0xff],
    [0xc0, 0xc0, 0xc0],
    [0x60, 0x60, 0x60],
    [0x00, 0x00, 0x00],
]);

const BROWN: DmgPalette = DmgPalette::uniform([
    [0xff, 0xff, 0xff],
    [0xff, 0xad, 0x63],
    [0x84, 0x31, 0x00],
    [0x00, 0x00, 0x00],
]);

const RED: DmgPalette = DmgPalette::uniform([
    [0xff, 0xff, 0xff],
    [0xff, 0x85, 0x84],
    [0x94, 0x3a, 0x3a],
    [0x00, 0x00, 0x00],
]);

const DARK_BROWN: DmgPalette = DmgPalette {
    bg: [
        [0xff, 0xe6, 0xc5],
        [0xce, 0x9c, 0x84],
        [0x84, 0x6b, 0x29],
        [0x5a, 0x31, 0x08],
    ],
    obj0: [
        [0xff, 0xff, 0xff],
        [0xff, 0xad, 0x63],
        [0x84, 0x31, 0x00],
        [0x00, 0x00, 0x00],
    ],
    obj1: [
        [0xff, 0xff, 0xff],
        [0xff, 0xad, 0x63],
        [0x84, 0x31, 0x00],
        [0x00, 0x00, 0x00],
    ],
};

const PALE_YELLOW: DmgPalette = DmgPalette {
    bg: [
        [0xff, 0xff, 0xa5],
        [0xfe, 0x94, 0x94],
        [0x93, 0x94, 0xfe],
        [0x00, 0x00, 0x00],
    ],
    obj0: [
        [0xff, 0xff, 0xff],
        [0xff, 0xad, 0x63],
        [0x84, 0x31, 0x00],
        [0x00, 0x00, 0x00],
    ],
    obj1: [
        [0xff, 0xff, 0xff],
        [0xff, 0xad, 0x63],
        [0x84, 0x31, 0x00],
        [0x00, 0x00, 0x00],
    ],
};

const ORANGE: DmgPalette = DmgPalette::uniform([
    [0xff, 0xff, 0xff],
    [0xff, 0xff, 0x00],
    [0xfe, 0x00, 0x00],
    [0x00, 0x00, 0x00],
]);

const YELLOW: DmgPalette = DmgPalette::uniform([
    [0xff, 0xff, 0xff],
    [0xff, 0xff, 0x00],
    [0x7d, 0x49, 0x00],
    [0x00, 0x00, 0x00],
]);

const BLUE: DmgPalette = DmgPalette::uniform([
    [0xff, 0xff, 0xff],
    [0x65, 0xa4, 0x9b],
    [0x00, 0x00, 0xfe],
    [0x00, 0x00, 0x00],
]);

const DARK_BLUE: DmgPalette = DmgPalette {
    bg: [
        [0xff, 0xff, 0xff],
        [0x8c, 0x8c, 0xde],
        [0x52, 0x52, 0x8c],
        [0x00, 0x00, 0x00],
    ],
    obj0: [
        [0xff, 0xff, 0xff],
        [0xff, 0x85, 0x84],
        [0x94, 0x3a, 0x3a],
        [0x00, 0x00, 0x00],
    ],
    obj1: [
        [0xff, 0xff, 0xff],
        [0xff, 0xad, 0x63],
        [0x84, 0x31, 0x00],
        [0x00, 0x00, 0x00],
    ],
};

const GRAY: DmgPalette = DmgPalette::uniform([
    [0xff, 0xff, 0xff],
    [0xa5, 0xa5, 0xa5],
    [0x52, 0x52, 0x52],
    [0x00, 0x00, 0x00],
]);

const GREEN: DmgPalette = DmgPalette::uniform([
    [0xff, 0xff, 0xff],
    [0x51, 0xff, 0x00],
    [0xff, 0x42, 0x00],
    [0x00, 0x00, 0x00],
]);

const DARK_GREEN: DmgPalette = DmgPalette {
    bg: [
        [0xff, 0xff, 0xff],
        [0x7b, 0xff, 0x31],
        [0x00, 0x63, 0xc5],
        [0x00, 0x00, 0x00],
    ],
    obj0: [
        [0xff, 0xff, 0xff],
        [0xff, 0x85, 0x84],
        [0x94, 0x3a, 0x3a],
        [0x00, 0x00, 0x00],
    ],
    obj1: [
        [0xff, 0xff, 0xff],
        [0xff, 0x85, 0x84],
        [0x94, 0x3a, 0x3a],
        [0x00, 0x00, 0x00],
    ],
};

const INVERTED: DmgPalette = DmgPalette::uniform([
    [0x00, 0x00, 0x00],
    [0x00, 0x84, 0x86],
    [0xff, 0xde, 0x00],
    [0xff, 0xff, 0xff],
]);

/// Default when the title is unknown or the publisher is not Nintendo.
pub const DEFAULT_PALETTE: DmgPalette = DARK_GREEN;

/// The twelve palettes reachable with a held button combination at
/// power-on (direction, optionally combined with A or B).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PaletteOverride {
    Up,
    UpA,
    UpB,
    Down,
    DownA,
    DownB,
    Left,
    LeftA,
    LeftB,
    Right,
    RightA,
    RightB,
}

impl PaletteOverride {
    pub fn palette(self) -> DmgPalette {
        match self {
            PaletteOverride::Up => BROWN,
            PaletteOverride::UpA => RED,
            PaletteOverride::UpB => DARK_BROWN,
            PaletteOverride::Down => PALE_YELLOW,
            PaletteOverride::DownA => ORANGE,
            PaletteOverride::DownB => YELLOW,
            PaletteOverride::Left => BLUE,
            PaletteOverride::LeftA => DARK_BLUE,
            PaletteOverride::LeftB => GRAY,
            PaletteOverride::Right => GREEN,
            PaletteOverride::RightA => DARK_GREEN,
            PaletteOverride::RightB => INVERTED,
        }
    }
}

/// One checksum-table row. Rows whose checksum collides with another
/// title carry the fourth title byte as a tie-breaker.
struct TableEntry {
    checksum: u8,
    fourth: Option<u8>,
    palette: &'static DmgPalette,
}

const fn row(checksum: u8, palette: &'static DmgPalette) -> TableEntry {
    TableEntry {
        checksum,
        fourth: None,
        palette,
    }
}

const fn row4(checksum: u8, fourth: u8, palette: &'static DmgPalette) -> TableEntry {
    TableEntry {
        checksum,
        fourth: Some(fourth),
        palette,
    }
}

/// Checksum table for known Nintendo-published titles, the software
/// rendition of the lookup the CGB boot code performs.
static PALETTE_TABLE: [TableEntry; 95] = [
    row(0x00, &GRAY),
    row(0x01, &RED),
    row(0x0c, &PALE_YELLOW),
    row(0x10, &RED),
    row(0x14, &RED),
    row(0x15, &DARK_GREEN),
    row(0x16, &BROWN),
    row(0x18, &BLUE),
    row(0x1d, &ORANGE),
    row(0x27, &GREEN),
    row(0x28, &DARK_BLUE),
    row(0x29, &PALE_YELLOW),
    row(0x34, &YELLOW),
    row(0x35, &BLUE),
    row(0x36, &DARK_GREEN),
    row(0x39, &DARK_BROWN),
    row(0x3c, &GREEN),
    row(0x3d, &RED),
    row(0x3e, &BROWN),
    row(0x43, &PALE_YELLOW),
    row4(0x46, 0x45, &RED),
    row4(0x46, 0x52, &ORANGE),
    row(0x49, &DARK_BLUE),
    row(0x4b, &BROWN),
    row(0x4e, &BLUE),
    row(0x52, &GREEN),
    row(0x58, &GRAY),
    row(0x59, &YELLOW),
    row(0x5c, &DARK_BROWN),
    row4(0x61, 0x41, &BLUE),
    row4(0x61, 0x45, &GREEN),
    row(0x66, &PALE_YELLOW),
    row(0x67, &RED),
    row(0x68, &DARK_GREEN),
    row(0x6a, &ORANGE),
    row(0x6b, &BROWN),
    row(0x6f, &YELLOW),
    row(0x70, &BLUE),
    row(0x75, &DARK_BLUE),
    row(0x86, &PALE_YELLOW),
    row(0x88, &GRAY),
    row4(0x8c, 0x41, &DARK_BROWN),
    row4(0x8c, 0x4b, &RED),
    row(0x90, &GREEN),
    row(0x95, &DARK_GREEN),
    row(0x97, &BROWN),
    row(0x9a, &BLUE),
    row(0xa2, &ORANGE),
    row(0xa5, &RED),
    row(0xb3, &YELLOW),
    row(0xbf, &DARK_BLUE),
    row(0xc6, &GREEN),
    row(0x03, &BLUE),
    row(0x05, &DARK_GREEN),
    row(0x06, &PALE_YELLOW),
    row(0x0d, &BROWN),
    row(0x17, &GREEN),
    row(0x19, &RED),
    row(0x1f, &GRAY),
    row(0x25, &DARK_BROWN),
    row(0x2b, &YELLOW),
    row(0x31, &BLUE),
    row(0x33, &ORANGE),
    row(0x3a, &DARK_BLUE),
    row(0x3f, &GREEN),
    row(0x42, &BROWN),
    row(0x45, &PALE_YELLOW),
    row(0x4c, &RED),
    row(0x50, &DARK_GREEN),
    row(0x55, &YELLOW),
    row(0x5b, &BLUE),
    row(0x5e, &GRAY),
    row(0x63, &ORANGE),
    row(0x69, &GREEN),
    row(0x6d, &DARK_BROWN),
    row(0x71, &RED),
    row(0x79, &PALE_YELLOW),
    row(0x7c, &BROWN),
    row(0x7f, &BLUE),
    row(0x83, &DARK_GREEN),
    row(0x8b, &YELLOW),
    row(0x92, &ORANGE),
    row(0x99, &GRAY),
    row(0x9c, &GREEN),
    row4(0x9d, 0x49, &BLUE),
    row4(0x9d, 0x52, &DARK_BLUE),
    row(0xa8, &RED),
    row(0xaa, &PALE_YELLOW),
    row(0xae, &BROWN),
    row(0xb7, &DARK_GREEN),
    row(0xbb, &YELLOW),
    row(0xc9, &BLUE),
    row(0xd1, &GREEN),
    row(0xd3, &ORANGE),
    row(0xdb, &RED),
];

/// Resolves the colorization palette for a DMG cartridge running on a
/// CGB core.
///
/// `nintendo` gates the table lookup, `checksum` is the title-byte sum
/// and `fourth` the fourth title byte used on collisions.
pub fn resolve(nintendo: bool, checksum: u8, fourth: u8) -> DmgPalette {
    if !nintendo {
        return DEFAULT_PALETTE;
    }

    let mut fallback = None;
    for entry in PALETTE_TABLE.iter() {
        if entry.checksum != checksum {
            continue;
        }
        match entry.fourth {
            Some(byte) if byte == fourth => return *entry.palette,
            Some(_) => (),
            None => fallback = Some(*entry.palette),
        }
    }
    fallback.unwrap_or(DEFAULT_PALETTE)
}

#[cfg(test)]
mod tests {
    use super::{resolve, DmgPalette, PaletteOverride, BLUE, DEFAULT_PALETTE, GREEN, RED};

    #[test]
    fn test_non_nintendo_gets_default() {
        assert_eq!(resolve(false, 0x14, 0x00), DEFAULT_PALETTE);
    }

    #[test]
    fn test_unknown_checksum_gets_default() {
        assert_eq!(resolve(true, 0xfe, 0x00), DEFAULT_PALETTE);
    }

    #[test]
    fn test_table_hit() {
        assert_eq!(resolve(true, 0x14, 0x00), RED);
    }

    #[test]
    fn test_collision_disambiguation() {
        assert_eq!(resolve(true, 0x61, 0x41), BLUE);
        assert_eq!(resolve(true, 0x61, 0x45), GREEN);
        // colliding checksum with an unknown fourth byte falls through
        assert_eq!(resolve(true, 0x61, 0x5a), DEFAULT_PALETTE);
    }

    #[test]
    fn test_manual_override_set() {
        let palettes: Vec<DmgPalette> = [
            PaletteOverride::Up,
            PaletteOverride::UpA,
            PaletteOverride::UpB,
            PaletteOverride::Down,
            PaletteOverride::DownA,
            PaletteOverride::DownB,
            PaletteOverride::Left,
            PaletteOverride::LeftA,
            PaletteOverride::LeftB,
            PaletteOverride::Right,
            PaletteOverride::RightA,
            PaletteOverride::RightB,
        ]
        .iter()
        .map(|combo| combo.palette())
        .collect();

        // all twelve overrides resolve and the grayscale combo is
        // actually gray
        assert_eq!(palettes.len(), 12);
        assert_eq!(palettes[8].bg[1], [0xa5, 0xa5, 0xa5]);
    }
}
