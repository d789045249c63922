//! Shared helpers for building synthetic ROM images and cores in
//! tests and benchmarks.

use crate::{bus::Bus, cart::Cartridge, consts::ROM_BANK_SIZE, cpu::Cpu};

const LOGO: [u8; 48] = [
    0xce, 0xed, 0x66, 0x66, 0xcc, 0x0d, 0x00, 0x0b, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0c, 0x00,
    0x0d, 0x00, 0x08, 0x11, 0x1f, 0x88, 0x89, 0x00, 0x0e, 0xdc, 0xcc, 0x6e, 0xe6, 0xdd, 0xdd,
    0xd9, 0x99, 0xbb, 0xbb, 0x67, 0x63, 0x6e, 0x0e, 0xec, 0xcc, 0xdd, 0xdc, 0x99, 0x9f, 0xbb,
    0xb9, 0x33, 0x3e,
];

/// Builds a header-valid ROM image. The entry point jumps to $0150,
/// which (like the rest of the image) is NOP-filled.
pub fn build_rom(mbc: u8, rom_size: u8, ram_size: u8, title: &str) -> Vec<u8> {
    let banks = 2usize << rom_size;
    let mut rom = vec![0x00; banks * ROM_BANK_SIZE];

    rom[0x0100] = 0x00;
    rom[0x0101] = 0xc3;
    rom[0x0102] = 0x50;
    rom[0x0103] = 0x01;
    rom[0x0104..0x0134].copy_from_slice(&LOGO);
    for (index, byte) in title.bytes().take(16).enumerate() {
        rom[0x0134 + index] = byte;
    }
    rom[0x0147] = mbc;
    rom[0x0148] = rom_size;
    rom[0x0149] = ram_size;

    patch_checksum(&mut rom);
    rom
}

/// Recomputes the header checksum, for tests that edit header bytes.
pub fn patch_checksum(rom: &mut [u8]) {
    let checksum = rom[0x0134..=0x014c]
        .iter()
        .fold(0u8, |sum, &b| sum.wrapping_sub(b).wrapping_sub(1));
    rom[0x014d] = checksum;
}

/// A DMG CPU over a plain 32 KiB cartridge, for instruction-level
/// tests that poke programs into WRAM.
pub fn test_cpu() -> Cpu {
    let rom = build_rom(0x00, 0x00, 0x00, "TEST");
    let cart = Cartridge::new(&rom).unwrap();
    Cpu::new(Bus::new(cart, false, 32768))
}

/// Same as [`test_cpu`], on a CGB-mode bus.
pub fn test_cpu_cgb() -> Cpu {
    let rom = build_rom(0x00, 0x00, 0x00, "TEST");
    let cart = Cartridge::new(&rom).unwrap();
    Cpu::new(Bus::new(cart, true, 32768))
}

#[cfg(test)]
mod tests {
    use super::build_rom;
    use crate::cart::Cartridge;

    #[test]
    fn test_built_rom_is_header_valid() {
        let rom = build_rom(0x00, 0x01, 0x00, "HELPER");
        assert_eq!(rom.len(), 0x10000);
        let cart = Cartridge::new(&rom).unwrap();
        assert!(cart.valid_checksum());
        assert_eq!(cart.title(), "HELPER");
    }
}
