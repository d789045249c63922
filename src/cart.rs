//! Cartridge handling: header parsing, memory bank controllers and
//! battery-backed RAM.
//!
//! The cartridge owns the ROM image and external RAM and maps the
//! guest ranges $0000-$7FFF and $A000-$BFFF through the bank
//! controller named by header byte $0147.

use std::fmt::{self, Display, Formatter};

use log::warn;

use crate::{
    consts::{RAM_BANK_SIZE, ROM_BANK_SIZE},
    error::Error,
};

/// The compressed Nintendo logo every licensed header carries at
/// $0104-$0133; boot validation rejects anything else.
const NINTENDO_LOGO: [u8; 48] = [
    0xce, 0xed, 0x66, 0x66, 0xcc, 0x0d, 0x00, 0x0b, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0c, 0x00,
    0x0d, 0x00, 0x08, 0x11, 0x1f, 0x88, 0x89, 0x00, 0x0e, 0xdc, 0xcc, 0x6e, 0xe6, 0xdd, 0xdd,
    0xd9, 0x99, 0xbb, 0xbb, 0x67, 0x63, 0x6e, 0x0e, 0xec, 0xcc, 0xdd, 0xdc, 0x99, 0x9f, 0xbb,
    0xb9, 0x33, 0x3e,
];

/// Bank controller family, decoded from header byte $0147.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MbcKind {
    None,
    Mbc1,
    Mbc2,
    Mbc3,
    Mbc5,
}

impl MbcKind {
    pub fn from_header(value: u8) -> Result<Self, Error> {
        match value {
            0x00 | 0x08 | 0x09 => Ok(MbcKind::None),
            0x01..=0x03 => Ok(MbcKind::Mbc1),
            0x05 | 0x06 => Ok(MbcKind::Mbc2),
            0x0f..=0x13 => Ok(MbcKind::Mbc3),
            0x19..=0x1e => Ok(MbcKind::Mbc5),
            _ => Err(Error::InvalidCartridge {
                reason: format!("unsupported MBC type 0x{value:02x}"),
            }),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MbcKind::None => "ROM only",
            MbcKind::Mbc1 => "MBC1",
            MbcKind::Mbc2 => "MBC2",
            MbcKind::Mbc3 => "MBC3",
            MbcKind::Mbc5 => "MBC5",
        }
    }
}

impl Display for MbcKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// CGB support flag at $0143.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CgbFlag {
    DmgOnly,
    CgbEnhanced,
    CgbOnly,
}

impl CgbFlag {
    pub fn from_header(value: u8) -> Self {
        match value {
            0x80 => CgbFlag::CgbEnhanced,
            0xc0 => CgbFlag::CgbOnly,
            _ => CgbFlag::DmgOnly,
        }
    }

    pub fn supports_cgb(&self) -> bool {
        !matches!(self, CgbFlag::DmgOnly)
    }
}

/// Real-time clock of the MBC3, advanced by host-supplied wall time.
#[derive(Clone, Default)]
pub struct Rtc {
    seconds: u8,
    minutes: u8,
    hours: u8,
    days: u16,
    halted: bool,
    day_carry: bool,

    /// Snapshot taken by the latch sequence; guest reads see this.
    latched: [u8; 5],
    latch_primed: bool,
}

impl Rtc {
    /// Feeds elapsed wall-clock seconds into the counters. The host
    /// calls this between frames; the core never samples a clock.
    pub fn advance(&mut self, elapsed: u64) {
        if self.halted {
            return;
        }
        let mut total = self.seconds as u64
            + self.minutes as u64 * 60
            + self.hours as u64 * 3600
            + self.days as u64 * 86400
            + elapsed;
        self.seconds = (total % 60) as u8;
        total /= 60;
        self.minutes = (total % 60) as u8;
        total /= 60;
        self.hours = (total % 24) as u8;
        total /= 24;
        if total > 0x1ff {
            self.day_carry = true;
        }
        self.days = (total & 0x1ff) as u16;
    }

    /// Copies the live counters into the latch registers.
    fn latch(&mut self) {
        self.latched = [
            self.seconds,
            self.minutes,
            self.hours,
            (self.days & 0xff) as u8,
            ((self.days >> 8) as u8 & 0x01)
                | (if self.halted { 0x40 } else { 0x00 })
                | (if self.day_carry { 0x80 } else { 0x00 }),
        ];
    }

    fn read(&self, reg: u8) -> u8 {
        match reg {
            0x08..=0x0c => self.latched[(reg - 0x08) as usize],
            _ => 0xff,
        }
    }

    fn write(&mut self, reg: u8, value: u8) {
        match reg {
            0x08 => self.seconds = value & 0x3f,
            0x09 => self.minutes = value & 0x3f,
            0x0a => self.hours = value & 0x1f,
            0x0b => self.days = (self.days & 0x100) | value as u16,
            0x0c => {
                self.days = (self.days & 0xff) | (((value & 0x01) as u16) << 8);
                self.halted = value & 0x40 == 0x40;
                self.day_carry = value & 0x80 == 0x80;
            }
            _ => (),
        }
    }
}

/// Mutable bank-controller state, one variant per controller family.
enum Mbc {
    None,
    Mbc1 {
        /// Combined 7-bit ROM bank register; the $2000 write quirk
        /// keeps its low 5 bits from ever being all zero.
        bank: u16,
        /// 2-bit secondary register: RAM bank or ROM bank bits 5-6.
        bank_hi: u8,
        /// Mode select: 0 = ROM banking, 1 = RAM banking.
        advanced: bool,
    },
    Mbc2 {
        bank: u16,
    },
    Mbc3 {
        bank: u16,
        ram_bank: u8,
        /// RTC register mapped at $A000-$BFFF instead of RAM, if any.
        rtc_reg: Option<u8>,
        rtc: Rtc,
        latch_low: bool,
    },
    Mbc5 {
        bank: u16,
        ram_bank: u8,
    },
}

pub struct Cartridge {
    rom: Vec<u8>,
    ram: Vec<u8>,
    mbc: Mbc,
    kind: MbcKind,
    rom_banks: usize,
    ram_enabled: bool,

    /// Cached byte offset of the bank mapped at $0000-$3FFF (non-zero
    /// only in MBC1 advanced mode on large carts).
    rom0_offset: usize,

    /// Cached byte offset of the bank mapped at $4000-$7FFF.
    rom_offset: usize,

    /// Cached byte offset of the RAM bank mapped at $A000-$BFFF.
    ram_offset: usize,
}

impl Cartridge {
    pub fn new(data: &[u8]) -> Result<Self, Error> {
        if data.len() < 0x0150 {
            return Err(Error::invalid_cartridge("image smaller than a header"));
        }
        if data[0x0104..0x0134] != NINTENDO_LOGO {
            return Err(Error::invalid_cartridge("logo bytes mismatch"));
        }

        let kind = MbcKind::from_header(data[0x0147])?;
        let rom_banks = match data[0x0148] {
            value @ 0x00..=0x08 => 2usize << value,
            value => {
                return Err(Error::InvalidCartridge {
                    reason: format!("impossible ROM size 0x{value:02x}"),
                })
            }
        };
        if data.len() != rom_banks * ROM_BANK_SIZE {
            return Err(Error::InvalidCartridge {
                reason: format!(
                    "header names {} banks but image holds {} bytes",
                    rom_banks,
                    data.len()
                ),
            });
        }

        let ram_size = match (kind, data[0x0149]) {
            // MBC2 RAM is on-die and absent from the header
            (MbcKind::Mbc2, _) => 512,
            (_, 0x00) => 0,
            (_, 0x01) => 2 * 1024,
            (_, 0x02) => 8 * 1024,
            (_, 0x03) => 32 * 1024,
            (_, 0x04) => 128 * 1024,
            (_, 0x05) => 64 * 1024,
            (_, value) => {
                return Err(Error::InvalidCartridge {
                    reason: format!("impossible RAM size 0x{value:02x}"),
                })
            }
        };

        let mbc = match kind {
            MbcKind::None => Mbc::None,
            MbcKind::Mbc1 => Mbc::Mbc1 {
                bank: 1,
                bank_hi: 0,
                advanced: false,
            },
            MbcKind::Mbc2 => Mbc::Mbc2 { bank: 1 },
            MbcKind::Mbc3 => Mbc::Mbc3 {
                bank: 1,
                ram_bank: 0,
                rtc_reg: None,
                rtc: Rtc::default(),
                latch_low: false,
            },
            MbcKind::Mbc5 => Mbc::Mbc5 { bank: 1, ram_bank: 0 },
        };

        let mut cart = Self {
            rom: data.to_vec(),
            ram: vec![0x00; ram_size],
            mbc,
            kind,
            rom_banks,
            ram_enabled: false,
            rom0_offset: 0,
            rom_offset: ROM_BANK_SIZE,
            ram_offset: 0,
        };
        cart.update_offsets();
        Ok(cart)
    }

    /// Re-derives the cached mapping offsets from controller state.
    fn update_offsets(&mut self) {
        let mask = self.rom_banks - 1;
        match &self.mbc {
            Mbc::None => {
                self.rom0_offset = 0;
                self.rom_offset = ROM_BANK_SIZE;
            }
            Mbc::Mbc1 {
                bank,
                bank_hi,
                advanced,
            } => {
                let full = (*bank as usize) | ((*bank_hi as usize) << 5);
                self.rom_offset = (full & mask) * ROM_BANK_SIZE;
                self.rom0_offset = if *advanced {
                    (((*bank_hi as usize) << 5) & mask) * ROM_BANK_SIZE
                } else {
                    0
                };
                let ram_bank = if *advanced { *bank_hi as usize } else { 0 };
                self.ram_offset = self.mask_ram_bank(ram_bank);
            }
            Mbc::Mbc2 { bank } => {
                self.rom0_offset = 0;
                self.rom_offset = (*bank as usize & mask) * ROM_BANK_SIZE;
                self.ram_offset = 0;
            }
            Mbc::Mbc3 { bank, ram_bank, .. } => {
                self.rom0_offset = 0;
                self.rom_offset = (*bank as usize & mask) * ROM_BANK_SIZE;
                self.ram_offset = self.mask_ram_bank(*ram_bank as usize);
            }
            Mbc::Mbc5 { bank, ram_bank } => {
                self.rom0_offset = 0;
                self.rom_offset = (*bank as usize & mask) * ROM_BANK_SIZE;
                self.ram_offset = self.mask_ram_bank(*ram_bank as usize);
            }
        }
    }

    fn mask_ram_bank(&self, bank: usize) -> usize {
        let banks = self.ram.len() / RAM_BANK_SIZE;
        if banks <= 1 {
            0
        } else {
            (bank & (banks - 1)) * RAM_BANK_SIZE
        }
    }

    pub fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x3fff => self.rom[self.rom0_offset + addr as usize],
            0x4000..=0x7fff => self.rom[self.rom_offset + (addr as usize - 0x4000)],
            0xa000..=0xbfff => self.read_ram(addr),
            _ => {
                warn!("reading from unmapped cartridge address 0x{addr:04x}");
                0xff
            }
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x7fff => self.write_control(addr, value),
            0xa000..=0xbfff => self.write_ram(addr, value),
            _ => warn!("writing to unmapped cartridge address 0x{addr:04x}"),
        }
    }

    fn write_control(&mut self, addr: u16, value: u8) {
        match &mut self.mbc {
            Mbc::None => (),
            Mbc::Mbc1 {
                bank,
                bank_hi,
                advanced,
            } => match addr {
                0x0000..=0x1fff => self.ram_enabled = value & 0x0f == 0x0a,
                0x2000..=0x3fff => {
                    let mut selected = value as u16 & 0x7f;
                    if selected & 0x1f == 0 {
                        selected |= 1;
                    }
                    *bank = selected;
                }
                0x4000..=0x5fff => *bank_hi = value & 0x03,
                _ => *advanced = value & 0x01 == 0x01,
            },
            Mbc::Mbc2 { bank } => {
                if addr <= 0x3fff {
                    // address bit 8 steers between the two registers
                    if addr & 0x0100 == 0 {
                        self.ram_enabled = value & 0x0f == 0x0a;
                    } else {
                        let selected = value as u16 & 0x0f;
                        *bank = if selected == 0 { 1 } else { selected };
                    }
                }
            }
            Mbc::Mbc3 {
                bank,
                ram_bank,
                rtc_reg,
                rtc,
                latch_low,
            } => match addr {
                0x0000..=0x1fff => self.ram_enabled = value & 0x0f == 0x0a,
                0x2000..=0x3fff => {
                    let selected = value as u16 & 0x7f;
                    *bank = if selected == 0 { 1 } else { selected };
                }
                0x4000..=0x5fff => match value {
                    0x00..=0x07 => {
                        *ram_bank = value & 0x03;
                        *rtc_reg = None;
                    }
                    0x08..=0x0c => *rtc_reg = Some(value),
                    _ => (),
                },
                _ => {
                    if *latch_low && value == 0x01 {
                        rtc.latch();
                    }
                    *latch_low = value == 0x00;
                }
            },
            Mbc::Mbc5 { bank, ram_bank } => match addr {
                0x0000..=0x1fff => self.ram_enabled = value & 0x0f == 0x0a,
                0x2000..=0x2fff => *bank = (*bank & 0x100) | value as u16,
                0x3000..=0x3fff => *bank = (*bank & 0xff) | (((value & 0x01) as u16) << 8),
                0x4000..=0x5fff => *ram_bank = value & 0x0f,
                _ => (),
            },
        }
        self.update_offsets();
    }

    fn read_ram(&self, addr: u16) -> u8 {
        if !self.ram_enabled {
            return 0xff;
        }
        match &self.mbc {
            Mbc::Mbc2 { .. } => {
                // 512 half-bytes, echoed through the whole window
                0xf0 | self.ram[(addr as usize - 0xa000) & 0x1ff]
            }
            Mbc::Mbc3 {
                rtc_reg: Some(reg),
                rtc,
                ..
            } => rtc.read(*reg),
            _ => {
                if self.ram.is_empty() {
                    return 0xff;
                }
                let index = self.ram_offset + (addr as usize - 0xa000);
                self.ram[index & (self.ram.len() - 1)]
            }
        }
    }

    fn write_ram(&mut self, addr: u16, value: u8) {
        if !self.ram_enabled {
            return;
        }
        match &mut self.mbc {
            Mbc::Mbc2 { .. } => {
                self.ram[(addr as usize - 0xa000) & 0x1ff] = value & 0x0f;
            }
            Mbc::Mbc3 {
                rtc_reg: Some(reg),
                rtc,
                ..
            } => rtc.write(*reg, value),
            _ => {
                if self.ram.is_empty() {
                    return;
                }
                let index = self.ram_offset + (addr as usize - 0xa000);
                let mask = self.ram.len() - 1;
                self.ram[index & mask] = value;
            }
        }
    }

    /// Feeds elapsed wall time into the MBC3 RTC, if one is present.
    pub fn advance_rtc(&mut self, elapsed_seconds: u64) {
        if let Mbc::Mbc3 { rtc, .. } = &mut self.mbc {
            rtc.advance(elapsed_seconds);
        }
    }

    pub fn sram(&self) -> Vec<u8> {
        self.ram.clone()
    }

    pub fn load_sram(&mut self, data: &[u8]) -> Result<(), Error> {
        if data.len() != self.ram.len() {
            return Err(Error::SramSize {
                expected: self.ram.len(),
                actual: data.len(),
            });
        }
        self.ram.copy_from_slice(data);
        Ok(())
    }

    pub fn title(&self) -> String {
        let bytes = &self.rom[0x0134..0x0144];
        let end = bytes.iter().position(|&b| b == 0 || b >= 0x80).unwrap_or(16);
        String::from_utf8_lossy(&bytes[..end]).trim().to_string()
    }

    pub fn cgb_flag(&self) -> CgbFlag {
        CgbFlag::from_header(self.rom[0x0143])
    }

    /// SGB flag at $0146; informational only, the Super Game Boy
    /// protocol itself is not modeled.
    pub fn sgb_supported(&self) -> bool {
        self.rom[0x0146] == 0x03
    }

    /// Whether the publisher code resolves to Nintendo, the gate for
    /// checksum-table colorization.
    pub fn nintendo_licensee(&self) -> bool {
        match self.rom[0x014b] {
            0x01 => true,
            0x33 => &self.rom[0x0144..0x0146] == b"01",
            _ => false,
        }
    }

    /// Sum of the title bytes, the key into the colorization table.
    pub fn title_checksum(&self) -> u8 {
        self.rom[0x0134..0x0144]
            .iter()
            .fold(0u8, |sum, &b| sum.wrapping_add(b))
    }

    /// Fourth title byte, the tie-breaker for colliding checksums.
    pub fn title_disambiguator(&self) -> u8 {
        self.rom[0x0137]
    }

    pub fn header_checksum(&self) -> u8 {
        self.rom[0x0134..=0x014c]
            .iter()
            .fold(0u8, |sum, &b| sum.wrapping_sub(b).wrapping_sub(1))
    }

    pub fn valid_checksum(&self) -> bool {
        self.rom[0x014d] == self.header_checksum()
    }

    pub fn kind(&self) -> MbcKind {
        self.kind
    }

    pub fn rom_banks(&self) -> usize {
        self.rom_banks
    }

    pub fn ram_len(&self) -> usize {
        self.ram.len()
    }

    pub fn ram_enabled(&self) -> bool {
        self.ram_enabled
    }
}

impl Display for Cartridge {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} ROM banks, {} bytes RAM)",
            self.title(),
            self.kind,
            self.rom_banks,
            self.ram.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Cartridge, CgbFlag, MbcKind};
    use crate::testing::build_rom;

    #[test]
    fn test_header_parse() {
        let rom = build_rom(0x01, 0x06, 0x03, "BANKTEST");
        let cart = Cartridge::new(&rom).unwrap();
        assert_eq!(cart.kind(), MbcKind::Mbc1);
        assert_eq!(cart.rom_banks(), 128);
        assert_eq!(cart.ram_len(), 32 * 1024);
        assert_eq!(cart.title(), "BANKTEST");
        assert_eq!(cart.cgb_flag(), CgbFlag::DmgOnly);
        assert!(cart.valid_checksum());
    }

    #[test]
    fn test_rejects_bad_logo() {
        let mut rom = build_rom(0x00, 0x00, 0x00, "NOLOGO");
        rom[0x0104] = 0x00;
        assert!(Cartridge::new(&rom).is_err());
    }

    #[test]
    fn test_rejects_unknown_mbc() {
        let rom = build_rom(0x20, 0x00, 0x00, "MBC6");
        assert!(Cartridge::new(&rom).is_err());
    }

    #[test]
    fn test_rejects_truncated_image() {
        let mut rom = build_rom(0x00, 0x01, 0x00, "SHORT");
        rom.truncate(0x8000);
        assert!(Cartridge::new(&rom).is_err());
    }

    #[test]
    fn test_mbc1_bank_selection() {
        // 2 MiB image where byte 0 of bank n reads n
        let mut rom = build_rom(0x01, 0x06, 0x00, "MBC1");
        for bank in 0..128 {
            rom[bank * 0x4000] = bank as u8;
        }
        let mut cart = Cartridge::new(&rom).unwrap();

        cart.write(0x2000, 0x05);
        assert_eq!(cart.read(0x4000), 0x05);

        cart.write(0x2000, 0x00);
        assert_eq!(cart.read(0x4000), 0x01);

        cart.write(0x2000, 0x20);
        assert_eq!(cart.read(0x4000), 0x21);
    }

    #[test]
    fn test_mbc1_bank_masking() {
        // 4 banks only: selections wrap on the available count
        let mut rom = build_rom(0x01, 0x01, 0x00, "SMALL");
        for bank in 0..4 {
            rom[bank * 0x4000] = bank as u8;
        }
        let mut cart = Cartridge::new(&rom).unwrap();

        cart.write(0x2000, 0x07);
        assert_eq!(cart.read(0x4000), 0x03);
    }

    #[test]
    fn test_mbc1_ram_gating() {
        let rom = build_rom(0x03, 0x00, 0x03, "RAMGATE");
        let mut cart = Cartridge::new(&rom).unwrap();

        cart.write(0xa000, 0x42);
        assert_eq!(cart.read(0xa000), 0xff);

        cart.write(0x0000, 0x0a);
        cart.write(0xa000, 0x42);
        assert_eq!(cart.read(0xa000), 0x42);

        cart.write(0x0000, 0x00);
        assert_eq!(cart.read(0xa000), 0xff);
    }

    #[test]
    fn test_mbc1_advanced_ram_banking() {
        let rom = build_rom(0x03, 0x00, 0x03, "RAMBANKS");
        let mut cart = Cartridge::new(&rom).unwrap();
        cart.write(0x0000, 0x0a);

        cart.write(0x6000, 0x01);
        cart.write(0x4000, 0x02);
        cart.write(0xa000, 0x22);

        cart.write(0x4000, 0x00);
        cart.write(0xa000, 0x11);

        cart.write(0x4000, 0x02);
        assert_eq!(cart.read(0xa000), 0x22);
        cart.write(0x4000, 0x00);
        assert_eq!(cart.read(0xa000), 0x11);
    }

    #[test]
    fn test_mbc1_advanced_mode_remaps_bank_zero() {
        // 1 MiB image: 64 banks, large enough for the secondary
        // register to reach the $0000 region
        let mut rom = build_rom(0x01, 0x05, 0x00, "BIGROM");
        for bank in 0..64 {
            rom[bank * 0x4000] = bank as u8;
        }
        let mut cart = Cartridge::new(&rom).unwrap();

        cart.write(0x4000, 0x01);
        assert_eq!(cart.read(0x0000), 0x00);

        // advanced banking swings the fixed region to bank $20
        cart.write(0x6000, 0x01);
        assert_eq!(cart.read(0x0000), 0x20);

        cart.write(0x6000, 0x00);
        assert_eq!(cart.read(0x0000), 0x00);
    }

    #[test]
    fn test_mbc2_nibble_ram() {
        let rom = build_rom(0x06, 0x00, 0x00, "MBC2");
        let mut cart = Cartridge::new(&rom).unwrap();

        // addr bit 8 clear: RAM enable register
        cart.write(0x0000, 0x0a);
        cart.write(0xa010, 0xa5);
        assert_eq!(cart.read(0xa010), 0xf5);
        // the 512-byte window echoes
        assert_eq!(cart.read(0xa210), 0xf5);
    }

    #[test]
    fn test_mbc2_rom_banking() {
        let mut rom = build_rom(0x06, 0x02, 0x00, "MBC2ROM");
        for bank in 0..8 {
            rom[bank * 0x4000] = bank as u8;
        }
        let mut cart = Cartridge::new(&rom).unwrap();

        // addr bit 8 set: bank register
        cart.write(0x0100, 0x03);
        assert_eq!(cart.read(0x4000), 0x03);
        cart.write(0x0100, 0x00);
        assert_eq!(cart.read(0x4000), 0x01);
    }

    #[test]
    fn test_mbc3_rtc_latch() {
        let rom = build_rom(0x10, 0x00, 0x03, "RTC");
        let mut cart = Cartridge::new(&rom).unwrap();
        cart.write(0x0000, 0x0a);

        cart.advance_rtc(3 * 3600 + 25 * 60 + 11);
        cart.write(0x6000, 0x00);
        cart.write(0x6000, 0x01);

        cart.write(0x4000, 0x08);
        assert_eq!(cart.read(0xa000), 11);
        cart.write(0x4000, 0x09);
        assert_eq!(cart.read(0xa000), 25);
        cart.write(0x4000, 0x0a);
        assert_eq!(cart.read(0xa000), 3);

        // live counters keep moving, the latch does not
        cart.advance_rtc(49);
        cart.write(0x4000, 0x08);
        assert_eq!(cart.read(0xa000), 11);

        cart.write(0x6000, 0x00);
        cart.write(0x6000, 0x01);
        assert_eq!(cart.read(0xa000), 0);
        cart.write(0x4000, 0x09);
        assert_eq!(cart.read(0xa000), 26);
    }

    #[test]
    fn test_mbc3_ram_banking() {
        let rom = build_rom(0x13, 0x00, 0x03, "MBC3RAM");
        let mut cart = Cartridge::new(&rom).unwrap();
        cart.write(0x0000, 0x0a);

        for bank in 0..4u8 {
            cart.write(0x4000, bank);
            cart.write(0xa000, 0x30 + bank);
        }
        for bank in 0..4u8 {
            cart.write(0x4000, bank);
            assert_eq!(cart.read(0xa000), 0x30 + bank);
        }

        // selecting an RTC register unmaps RAM, selecting a bank maps
        // it back
        cart.write(0x6000, 0x00);
        cart.write(0x6000, 0x01);
        cart.write(0x4000, 0x08);
        assert_eq!(cart.read(0xa000), 0x00);
        cart.write(0x4000, 0x02);
        assert_eq!(cart.read(0xa000), 0x32);
    }

    #[test]
    fn test_mbc5_nine_bit_banking() {
        let mut rom = build_rom(0x19, 0x08, 0x00, "MBC5");
        for bank in 0..512usize {
            rom[bank * 0x4000] = (bank & 0xff) as u8;
            rom[bank * 0x4000 + 1] = (bank >> 8) as u8;
        }
        let mut cart = Cartridge::new(&rom).unwrap();

        cart.write(0x2000, 0x48);
        assert_eq!(cart.read(0x4000), 0x48);
        assert_eq!(cart.read(0x4001), 0x00);

        cart.write(0x3000, 0x01);
        assert_eq!(cart.read(0x4000), 0x48);
        assert_eq!(cart.read(0x4001), 0x01);

        // MBC5 really can map bank 0 at $4000
        cart.write(0x2000, 0x00);
        cart.write(0x3000, 0x00);
        assert_eq!(cart.read(0x4000), 0x00);
    }

    #[test]
    fn test_sram_round_trip() {
        let rom = build_rom(0x03, 0x00, 0x02, "SRAM");
        let mut cart = Cartridge::new(&rom).unwrap();
        cart.write(0x0000, 0x0a);
        cart.write(0xa123, 0x77);

        let blob = cart.sram();
        assert_eq!(blob.len(), 8192);

        let rom2 = build_rom(0x03, 0x00, 0x02, "SRAM");
        let mut other = Cartridge::new(&rom2).unwrap();
        other.load_sram(&blob).unwrap();
        other.write(0x0000, 0x0a);
        assert_eq!(other.read(0xa123), 0x77);

        assert!(other.load_sram(&[0x00; 16]).is_err());
    }
}
