//! Memory bus: address dispatch, work/high RAM, and the clock fan-out
//! that distributes CPU cycles to every peripheral.
//!
//! The bus owns all peripherals. CPU-domain circuits (timer, serial,
//! OAM DMA, the APU frame-sequencer tap) are fed in M-cycle chunks so
//! edges land exactly; the PPU dot clock and APU output clock run at
//! wall speed and therefore tick at half rate in CGB double speed.

use log::warn;

use crate::{
    apu::Apu,
    cart::Cartridge,
    consts::{
        DIV_ADDR, DMA_ADDR, HDMA5_ADDR, HRAM_SIZE, IE_ADDR, IF_ADDR, JOYP_ADDR, KEY0_ADDR,
        KEY1_ADDR, SVBK_ADDR, WRAM_SIZE_CGB, WRAM_SIZE_DMG,
    },
    dma::{Dma, HDMA_BLOCK_SIZE, HDMA_BLOCK_STALL},
    interrupts::Interrupts,
    joypad::{Button, Joypad},
    ppu::Ppu,
    serial::Serial,
    timer::Timer,
};

pub struct Bus {
    /// The cartridge currently inserted into the system, mapped at
    /// $0000-$7FFF and $A000-$BFFF through its bank controller.
    pub cart: Cartridge,

    /// Picture processing unit; owns VRAM, OAM and the LCD register
    /// block and raises the V-Blank and STAT interrupts.
    pub ppu: Ppu,

    /// Audio processing unit; owns the NRxx registers and wave RAM
    /// and produces the resampled stereo output.
    pub apu: Apu,

    /// Divider and timer circuit behind DIV/TIMA/TMA/TAC; its raw
    /// 16-bit counter also feeds the APU frame-sequencer tap.
    pub timer: Timer,

    /// OAM DMA and CGB VRAM DMA engines. The engines own the
    /// registers and pacing; the bus moves the bytes on their behalf.
    pub dma: Dma,

    /// Joypad matrix behind $FF00.
    pub joypad: Joypad,

    /// Serial port registers SB/SC plus the attached host device.
    pub serial: Serial,

    /// Interrupt controller holding the IF and IE registers.
    pub interrupts: Interrupts,

    /// Work RAM, mapped at $C000-$DFFF and echoed at $E000-$FDFF:
    /// 8 KiB on DMG, eight 4 KiB banks on CGB.
    wram: Vec<u8>,

    /// SVBK selector for the switchable $D000-$DFFF bank; a written
    /// zero selects bank 1 (CGB only).
    wram_bank: u8,

    /// High RAM at $FF80-$FFFE, the only memory the CPU can still
    /// reach while OAM DMA holds the bus.
    hram: [u8; HRAM_SIZE],

    /// Running in CGB mode; gates the CGB-only register block.
    cgb: bool,

    /// KEY0 compatibility latch ($FF4C); the boot sequence writes
    /// $04 here to select DMG-compatibility rendering on a CGB core.
    key0: u8,

    /// Whether the CPU clock currently runs doubled (KEY1 bit 7).
    double_speed: bool,

    /// A speed switch was requested through KEY1 bit 0 and commits on
    /// the next STOP instruction.
    speed_switch_armed: bool,

    /// T-cycles the CPU must burn for DMA bus holds, drained per step.
    pending_stall: u32,
}

impl Bus {
    /// Builds a bus around a cartridge, constructing every peripheral
    /// for the selected hardware model and audio rate.
    pub fn new(cart: Cartridge, cgb: bool, sample_rate: u32) -> Self {
        Self {
            cart,
            ppu: Ppu::new(cgb),
            apu: Apu::new(cgb, sample_rate),
            timer: Timer::new(),
            dma: Dma::new(),
            joypad: Joypad::new(),
            serial: Serial::new(cgb),
            interrupts: Interrupts::new(),
            wram: vec![0x00; if cgb { WRAM_SIZE_CGB } else { WRAM_SIZE_DMG }],
            wram_bank: 1,
            hram: [0x00; HRAM_SIZE],
            cgb,
            key0: 0x0,
            double_speed: false,
            speed_switch_armed: false,
            pending_stall: 0,
        }
    }

    /// Power-cycles everything except the cartridge, whose
    /// battery-backed state must survive.
    pub fn reset(&mut self) {
        self.ppu.reset();
        self.apu.reset();
        self.timer.reset();
        self.dma.reset();
        self.joypad.reset();
        self.serial.reset();
        self.interrupts.reset();
        self.wram.fill(0x00);
        self.wram_bank = 1;
        self.hram.fill(0x00);
        self.key0 = 0x0;
        self.double_speed = false;
        self.speed_switch_armed = false;
        self.pending_stall = 0;
    }

    /// Whether the bus was built for CGB-mode hardware.
    #[inline(always)]
    pub fn is_cgb(&self) -> bool {
        self.cgb
    }

    /// Whether the CPU clock currently runs at double speed.
    #[inline(always)]
    pub fn double_speed(&self) -> bool {
        self.double_speed
    }

    /// Whether KEY1 bit 0 has armed a speed switch.
    #[inline(always)]
    pub fn speed_switch_armed(&self) -> bool {
        self.speed_switch_armed
    }

    /// Performs the speed switch a STOP instruction commits.
    pub fn switch_speed(&mut self) {
        self.double_speed = !self.double_speed;
        self.speed_switch_armed = false;
    }

    /// T-cycles of DMA bus hold accumulated since the last call.
    pub fn take_stall(&mut self) -> u32 {
        std::mem::take(&mut self.pending_stall)
    }

    /// Forwards a host button change to the joypad, which raises the
    /// Joypad interrupt on a selected falling line.
    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.joypad
            .set_button(button, pressed, &mut self.interrupts);
    }

    /// Distributes the T-cycles one CPU step consumed.
    pub fn tick(&mut self, cycles: u32) {
        let mut remaining = cycles;
        while remaining > 0 {
            let step = remaining.min(4);
            self.tick_cpu_domain(step);
            remaining -= step;
        }
        self.serial.tick(cycles, &mut self.interrupts);

        // dots are wall-clock: half the CPU rate in double speed
        let dots = if self.double_speed { cycles / 2 } else { cycles };
        self.ppu.tick(dots, &mut self.interrupts);
        self.apu.tick(dots);

        for _ in 0..self.ppu.take_hblank_events() {
            if self.dma.hblank_pending() {
                self.run_hdma_block();
                self.pending_stall += HDMA_BLOCK_STALL;
            }
        }
    }

    /// One M-cycle of the CPU-domain circuits: timer, the APU
    /// frame-sequencer tap, and the OAM DMA engine.
    fn tick_cpu_domain(&mut self, step: u32) {
        let mask = self.sequencer_mask();
        let before = self.timer.counter() & mask != 0;
        self.timer.tick(step, &mut self.interrupts);
        if before && self.timer.counter() & mask == 0 {
            self.apu.sequencer_tick();
        }

        if let Some((source, index)) = self.dma.oam_step() {
            let value = self.read_raw(source);
            self.ppu.dma_write_oam(index, value);
        }
    }

    /// Divider-counter bit whose falling edges occur at 512 Hz, the
    /// frame-sequencer rate; double speed shifts the tap up one bit
    /// so the wall-clock rate holds. Tapping the counter (rather than
    /// keeping a private accumulator) lets DIV writes clock the
    /// sequencer early, exactly like TIMA's edge detector.
    #[inline(always)]
    fn sequencer_mask(&self) -> u16 {
        if self.double_speed {
            1 << 13
        } else {
            1 << 12
        }
    }

    /// Moves one 16-byte VRAM DMA block and advances the engine's
    /// source and destination pointers.
    fn run_hdma_block(&mut self) {
        let (source, destination) = self.dma.advance_block();
        let destination = 0x8000 | (destination & 0x1fff);
        for offset in 0..HDMA_BLOCK_SIZE {
            let value = self.read_raw(source.wrapping_add(offset));
            self.ppu
                .dma_write_vram(destination.wrapping_add(offset), value);
        }
    }

    /// Executes a general-purpose VRAM DMA in full, charging the CPU
    /// the blocking stall the transfer costs.
    fn run_gdma(&mut self, length: u16) {
        let blocks = length / HDMA_BLOCK_SIZE;
        for _ in 0..blocks {
            self.run_hdma_block();
        }
        self.pending_stall += blocks as u32 * HDMA_BLOCK_STALL;
    }

    /// Whether the OAM DMA engine currently locks the CPU out of
    /// everything below HRAM.
    #[inline(always)]
    fn dma_locked(&self, addr: u16) -> bool {
        self.dma.oam_blocking() && !(0xff80..=0xfffe).contains(&addr) && addr != DMA_ADDR
    }

    /// Routes a guest read to the owning region or peripheral; while
    /// OAM DMA is active everything below HRAM reads back $FF.
    pub fn read(&self, addr: u16) -> u8 {
        if self.dma_locked(addr) {
            return 0xff;
        }
        self.read_raw(addr)
    }

    /// Address dispatch without the OAM DMA lockout, used by the DMA
    /// engines themselves.
    fn read_raw(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7fff | 0xa000..=0xbfff => self.cart.read(addr),
            0x8000..=0x9fff => self.ppu.read(addr),
            0xc000..=0xcfff => self.wram[(addr & 0x0fff) as usize],
            0xd000..=0xdfff => self.wram[self.wram_offset() + (addr & 0x0fff) as usize],
            0xe000..=0xefff => self.wram[(addr & 0x0fff) as usize],
            0xf000..=0xfdff => self.wram[self.wram_offset() + (addr & 0x0fff) as usize],
            0xfe00..=0xfe9f => self.ppu.read(addr),
            0xfea0..=0xfeff => {
                // reads float high while OAM is busy, stable zero
                // otherwise
                if self.ppu.oam_blocked() || self.dma.oam_blocking() {
                    0xff
                } else {
                    0x00
                }
            }
            JOYP_ADDR => self.joypad.read(),
            0xff01..=0xff02 => self.serial.read(addr),
            0xff04..=0xff07 => self.timer.read(addr),
            IF_ADDR => self.interrupts.read_flags(),
            0xff10..=0xff3f => self.apu.read(addr),
            0xff40..=0xff45 | 0xff47..=0xff4b => self.ppu.read(addr),
            DMA_ADDR => self.dma.read(addr),
            KEY0_ADDR if self.cgb => self.key0,
            KEY1_ADDR if self.cgb => {
                0x7e | (if self.double_speed { 0x80 } else { 0x00 })
                    | (if self.speed_switch_armed { 0x01 } else { 0x00 })
            }
            0xff4f if self.cgb => self.ppu.read(addr),
            0xff51..=0xff55 if self.cgb => self.dma.read(addr),
            0xff68..=0xff6c if self.cgb => self.ppu.read(addr),
            SVBK_ADDR if self.cgb => self.wram_bank | 0xf8,
            0xff80..=0xfffe => self.hram[(addr & 0x007f) as usize],
            IE_ADDR => self.interrupts.read_enable(),
            _ => {
                warn!("reading from unmapped I/O location 0x{addr:04x}");
                0xff
            }
        }
    }

    /// Routes a guest write symmetrically to [`Bus::read`]; writes
    /// outside HRAM are dropped while OAM DMA is active, except to
    /// $FF46 itself, which restarts the transfer.
    pub fn write(&mut self, addr: u16, value: u8) {
        if self.dma_locked(addr) {
            return;
        }
        self.write_raw(addr, value);
    }

    /// Address dispatch for writes without the OAM DMA lockout.
    fn write_raw(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x7fff | 0xa000..=0xbfff => self.cart.write(addr, value),
            0x8000..=0x9fff => self.ppu.write(addr, value, &mut self.interrupts),
            0xc000..=0xcfff => self.wram[(addr & 0x0fff) as usize] = value,
            0xd000..=0xdfff => {
                let offset = self.wram_offset();
                self.wram[offset + (addr & 0x0fff) as usize] = value;
            }
            0xe000..=0xefff => self.wram[(addr & 0x0fff) as usize] = value,
            0xf000..=0xfdff => {
                let offset = self.wram_offset();
                self.wram[offset + (addr & 0x0fff) as usize] = value;
            }
            0xfe00..=0xfe9f => self.ppu.write(addr, value, &mut self.interrupts),
            0xfea0..=0xfeff => (),
            JOYP_ADDR => self.joypad.write(value),
            0xff01..=0xff02 => self.serial.write(addr, value),
            DIV_ADDR => {
                // a DIV reset can clock the APU sequencer the same way
                // it can clock TIMA
                let edge = self.timer.counter() & self.sequencer_mask() != 0;
                self.timer.write(addr, value);
                if edge {
                    self.apu.sequencer_tick();
                }
            }
            0xff05..=0xff07 => self.timer.write(addr, value),
            IF_ADDR => self.interrupts.write_flags(value),
            0xff10..=0xff3f => self.apu.write(addr, value),
            0xff40..=0xff45 | 0xff47..=0xff4b => {
                self.ppu.write(addr, value, &mut self.interrupts)
            }
            DMA_ADDR => self.dma.write(addr, value),
            KEY0_ADDR if self.cgb => {
                self.key0 = value;
                if value == 0x04 {
                    self.ppu.set_dmg_compat(true);
                }
            }
            KEY1_ADDR if self.cgb => self.speed_switch_armed = value & 0x01 == 0x01,
            0xff4f if self.cgb => self.ppu.write(addr, value, &mut self.interrupts),
            0xff51..=0xff55 if self.cgb => {
                self.dma.write(addr, value);
                if addr == HDMA5_ADDR {
                    if let Some(length) = self.dma.take_gdma() {
                        self.run_gdma(length);
                    }
                }
            }
            0xff68..=0xff6c if self.cgb => self.ppu.write(addr, value, &mut self.interrupts),
            SVBK_ADDR if self.cgb => {
                let bank = value & 0x07;
                self.wram_bank = if bank == 0 { 1 } else { bank };
            }
            0xff80..=0xfffe => self.hram[(addr & 0x007f) as usize] = value,
            IE_ADDR => self.interrupts.write_enable(value),
            _ => warn!("writing to unmapped I/O location 0x{addr:04x}"),
        }
    }

    /// Byte offset of the bank mapped at $D000-$DFFF; fixed at bank 1
    /// on DMG, SVBK-selected on CGB.
    #[inline(always)]
    fn wram_offset(&self) -> usize {
        if self.cgb {
            self.wram_bank as usize * 0x1000
        } else {
            0x1000
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Bus;
    use crate::{cart::Cartridge, testing::build_rom};

    fn dmg_bus() -> Bus {
        let rom = build_rom(0x00, 0x00, 0x00, "BUS");
        Bus::new(Cartridge::new(&rom).unwrap(), false, 32768)
    }

    fn cgb_bus() -> Bus {
        let rom = build_rom(0x00, 0x00, 0x00, "BUS");
        Bus::new(Cartridge::new(&rom).unwrap(), true, 32768)
    }

    #[test]
    fn test_wram_and_echo() {
        let mut bus = dmg_bus();
        bus.write(0xc123, 0x42);
        assert_eq!(bus.read(0xc123), 0x42);
        assert_eq!(bus.read(0xe123), 0x42);

        bus.write(0xf234, 0x24);
        assert_eq!(bus.read(0xd234), 0x24);
    }

    #[test]
    fn test_hram() {
        let mut bus = dmg_bus();
        bus.write(0xff80, 0x11);
        bus.write(0xfffe, 0x22);
        assert_eq!(bus.read(0xff80), 0x11);
        assert_eq!(bus.read(0xfffe), 0x22);
    }

    #[test]
    fn test_prohibited_region() {
        let mut bus = dmg_bus();
        bus.write(0xfea0, 0x55);
        assert_eq!(bus.read(0xfea0), 0x00);
    }

    #[test]
    fn test_svbk_wram_banking() {
        let mut bus = cgb_bus();
        bus.write(0xff70, 0x02);
        bus.write(0xd000, 0x22);
        bus.write(0xff70, 0x03);
        bus.write(0xd000, 0x33);

        bus.write(0xff70, 0x02);
        assert_eq!(bus.read(0xd000), 0x22);

        // bank select 0 reads back as bank 1
        bus.write(0xff70, 0x00);
        assert_eq!(bus.read(0xff70), 0xf9);
    }

    #[test]
    fn test_oam_dma_transfer_and_lockout() {
        let mut bus = dmg_bus();
        for offset in 0..160u16 {
            bus.write(0xc000 + offset, offset as u8);
        }
        bus.write(0xff80, 0x5a);

        bus.write(0xff46, 0xc0);
        // warm-up M-cycle: the bus is still open
        bus.tick(4);

        // mid-transfer: HRAM accessible, everything else floats
        bus.tick(4);
        assert_eq!(bus.read(0xc000), 0xff);
        assert_eq!(bus.read(0xff80), 0x5a);

        // 640 T-cycles of transfer move all 160 bytes
        bus.tick(636);
        assert_eq!(bus.read(0xc000), 0x00);
        assert_eq!(bus.read(0xfe00), 0x00);
        assert_eq!(bus.read(0xfe9f), 0x9f);
    }

    #[test]
    fn test_oam_dma_restart() {
        let mut bus = dmg_bus();
        bus.write(0xc000, 0xaa);
        bus.write(0xd000, 0xbb);

        bus.write(0xff46, 0xc0);
        bus.tick(40);
        bus.write(0xff46, 0xd0);
        bus.tick(644);

        assert_eq!(bus.read(0xfe00), 0xbb);
    }

    #[test]
    fn test_apu_sequencer_tap() {
        let mut bus = dmg_bus();
        bus.write(0xff26, 0x80);

        // one falling edge of counter bit 12 per 8192 T-cycles
        bus.tick(8192);
        assert_eq!(bus.apu.sequencer_position(), 1);
        bus.tick(8192 * 3);
        assert_eq!(bus.apu.sequencer_position(), 4);
    }

    #[test]
    fn test_div_write_clocks_sequencer() {
        let mut bus = dmg_bus();
        bus.write(0xff26, 0x80);

        // counter bit 12 is high after 4096 cycles; resetting DIV
        // produces a falling edge
        bus.tick(4096);
        bus.write(0xff04, 0x00);
        assert_eq!(bus.apu.sequencer_position(), 1);
    }

    #[test]
    fn test_speed_switch() {
        let mut bus = cgb_bus();
        assert_eq!(bus.read(0xff4d), 0x7e);

        bus.write(0xff4d, 0x01);
        assert_eq!(bus.read(0xff4d), 0x7f);
        assert!(bus.speed_switch_armed());

        bus.switch_speed();
        assert!(bus.double_speed());
        assert_eq!(bus.read(0xff4d), 0xfe);
    }

    #[test]
    fn test_gdma_copies_to_vram() {
        let mut bus = cgb_bus();
        for offset in 0..32u16 {
            bus.write(0xc000 + offset, 0x40 + offset as u8);
        }

        bus.write(0xff51, 0xc0);
        bus.write(0xff52, 0x00);
        bus.write(0xff53, 0x00);
        bus.write(0xff54, 0x00);
        bus.write(0xff55, 0x01);

        assert_eq!(bus.read(0x8000), 0x40);
        assert_eq!(bus.read(0x801f), 0x5f);
        assert_eq!(bus.read(0xff55), 0xff);
        assert_eq!(bus.take_stall(), 64);
    }

    #[test]
    fn test_hblank_dma_paces_by_line() {
        let mut bus = cgb_bus();
        for offset in 0..48u16 {
            bus.write(0xc000 + offset, offset as u8);
        }
        // LCD on so H-Blanks actually happen
        bus.write(0xff40, 0x91);

        bus.write(0xff51, 0xc0);
        bus.write(0xff52, 0x00);
        bus.write(0xff53, 0x00);
        bus.write(0xff54, 0x00);
        bus.write(0xff55, 0x82);

        // nothing moves before the first H-Blank
        assert_eq!(bus.read(0xff55), 0x02);

        // one scanline: exactly one 16-byte block
        bus.tick(456);
        assert_eq!(bus.read(0xff55), 0x01);
        assert_eq!(bus.read(0x8000), 0x00);
        assert_eq!(bus.read(0x800f), 0x0f);
        assert_eq!(bus.read(0x8010), 0x00);

        bus.tick(456 * 2);
        assert_eq!(bus.read(0xff55), 0xff);
        assert_eq!(bus.read(0x802f), 0x2f);
    }

    #[test]
    fn test_double_speed_halves_ppu_rate() {
        let mut bus = cgb_bus();
        bus.write(0xff40, 0x91);

        // at normal speed 912 cycles cross two scanlines (the first
        // line starts 4 dots in)
        bus.tick(912);
        assert_eq!(bus.read(0xff44), 2);

        let mut bus = cgb_bus();
        bus.write(0xff40, 0x91);
        bus.switch_speed();
        bus.tick(912);
        assert_eq!(bus.read(0xff44), 1);
    }

    #[test]
    fn test_dmg_hides_cgb_registers() {
        let mut bus = dmg_bus();
        assert_eq!(bus.read(0xff4d), 0xff);
        assert_eq!(bus.read(0xff70), 0xff);
        bus.write(0xff70, 0x03);
        bus.write(0xd000, 0x77);
        assert_eq!(bus.read(0xd000), 0x77);
    }
}
