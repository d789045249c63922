//! Game Boy emulation entrypoint.
//!
//! [`GameBoy`] wires the CPU (which owns the bus and through it every
//! peripheral) to a cartridge and drives the whole machine: one
//! [`GameBoy::step`] executes an instruction and distributes its
//! cycles, [`GameBoy::run_frame`] steps until the PPU finishes a
//! frame. The core starts in the post-boot state; no boot ROM runs.

use log::info;

use crate::{
    apu::AudioSink,
    bus::Bus,
    cart::Cartridge,
    colorize::{self, DmgPalette, PaletteOverride, GRAYSCALE},
    consts::{FRAME_BUFFER_SIZE, KEY0_ADDR},
    cpu::Cpu,
    error::Error,
    joypad::Button,
    serial::SerialDevice,
};

/// Hardware revision to emulate.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Model {
    Dmg,
    Cgb,
    /// Pick CGB when the cartridge header opts in, DMG otherwise.
    #[default]
    Auto,
}

/// Construction options; the defaults give an auto-detected model at
/// a 44.1 kHz audio rate.
#[derive(Clone, Copy, Debug)]
pub struct GameBoyOptions {
    pub model: Model,
    pub sample_rate: u32,
    /// Held-button colorization override for DMG cartridges.
    pub palette: Option<PaletteOverride>,
}

impl Default for GameBoyOptions {
    fn default() -> Self {
        Self {
            model: Model::Auto,
            sample_rate: 44100,
            palette: None,
        }
    }
}

/// Upper bound of T-cycles one frame can take, used to bail out of
/// [`GameBoy::run_frame`] when the LCD is off or the CPU froze.
const FRAME_CYCLE_LIMIT: u32 = 70224 * 4;

pub struct GameBoy {
    cpu: Cpu,
    cgb: bool,
    options: GameBoyOptions,
}

impl GameBoy {
    pub fn new(rom: &[u8], options: GameBoyOptions) -> Result<Self, Error> {
        let cart = Cartridge::new(rom)?;
        let cgb = match options.model {
            Model::Dmg => false,
            Model::Cgb => true,
            Model::Auto => cart.cgb_flag().supports_cgb(),
        };
        info!("loaded {} ({} mode)", cart, if cgb { "CGB" } else { "DMG" });

        let bus = Bus::new(cart, cgb, options.sample_rate);
        let mut gb = Self {
            cpu: Cpu::new(bus),
            cgb,
            options,
        };
        gb.post_boot();
        Ok(gb)
    }

    /// Applies the documented post-boot machine state: register file,
    /// I/O defaults, and the DMG colorization palette.
    fn post_boot(&mut self) {
        self.cpu.boot();

        let bus = &mut self.cpu.bus;
        bus.timer.set_counter(if self.cgb { 0x1ea0 } else { 0xabcc });
        bus.interrupts.write_flags(0x01);

        // APU post-boot: powered on with the boot chime's register
        // residue, but no channel retriggered
        bus.apu.write(0xff26, 0x80);
        bus.apu.write(0xff10, 0x80);
        bus.apu.write(0xff11, 0xbf);
        bus.apu.write(0xff12, 0xf3);
        bus.apu.write(0xff24, 0x77);
        bus.apu.write(0xff25, 0xf3);

        bus.write(0xff40, 0x91);
        bus.write(0xff47, 0xfc);
        bus.write(0xff48, 0xff);
        bus.write(0xff49, 0xff);

        let dmg_cart = !bus.cart.cgb_flag().supports_cgb();
        if self.cgb && dmg_cart {
            bus.write(KEY0_ADDR, 0x04);
        }
        let shades = self.resolve_shades();
        self.cpu.bus.ppu.set_shades(shades);
    }

    fn resolve_shades(&self) -> DmgPalette {
        let cart = &self.cpu.bus.cart;
        if let Some(combo) = self.options.palette {
            return combo.palette();
        }
        if self.cgb && !cart.cgb_flag().supports_cgb() {
            colorize::resolve(
                cart.nintendo_licensee(),
                cart.title_checksum(),
                cart.title_disambiguator(),
            )
        } else {
            GRAYSCALE
        }
    }

    /// Executes one CPU step and distributes its cycles to every
    /// peripheral; returns the T-cycles consumed.
    pub fn step(&mut self) -> u32 {
        let cycles = self.cpu.step();
        self.cpu.bus.tick(cycles);
        cycles
    }

    /// Runs until the PPU enters V-Blank with a finished frame (or a
    /// frame's worth of cycles passes with the LCD off), returning the
    /// RGBA8 frame buffer.
    pub fn run_frame(&mut self) -> &[u8; FRAME_BUFFER_SIZE] {
        let mut budget = FRAME_CYCLE_LIMIT;
        loop {
            let cycles = self.step();
            if self.cpu.bus.ppu.take_frame_ready() || self.cpu.frozen() {
                break;
            }
            budget = budget.saturating_sub(cycles);
            if budget == 0 {
                break;
            }
        }
        self.cpu.bus.ppu.frame_buffer()
    }

    pub fn frame_buffer(&self) -> &[u8; FRAME_BUFFER_SIZE] {
        self.cpu.bus.ppu.frame_buffer()
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.cpu.bus.set_button(button, pressed);
    }

    /// Restores the post-boot state in place; cartridge RAM and the
    /// RTC survive, as they would across a real power cycle with a
    /// battery-backed cartridge.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.cpu.bus.reset();
        self.post_boot();
    }

    pub fn save_sram(&self) -> Vec<u8> {
        self.cpu.bus.cart.sram()
    }

    pub fn load_sram(&mut self, data: &[u8]) -> Result<(), Error> {
        self.cpu.bus.cart.load_sram(data)
    }

    /// Feeds elapsed wall time to the cartridge RTC, if any.
    pub fn advance_rtc(&mut self, elapsed_seconds: u64) {
        self.cpu.bus.cart.advance_rtc(elapsed_seconds);
    }

    pub fn set_audio_sink(&mut self, sink: Box<dyn AudioSink>) {
        self.cpu.bus.apu.set_sink(sink);
    }

    /// Drains buffered stereo samples for hosts that poll instead of
    /// installing a sink.
    pub fn drain_audio(&mut self, max: usize) -> Vec<(f32, f32)> {
        self.cpu.bus.apu.drain_samples(max)
    }

    pub fn attach_serial(&mut self, device: Box<dyn SerialDevice>) {
        self.cpu.bus.serial.attach(device);
    }

    pub fn serial_device(&self) -> &dyn SerialDevice {
        self.cpu.bus.serial.device()
    }

    /// The deterministic-freeze error, if an undefined opcode was hit.
    pub fn fault(&self) -> Option<&Error> {
        self.cpu.fault()
    }

    #[inline(always)]
    pub fn is_cgb(&self) -> bool {
        self.cgb
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.cpu.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.cpu.bus
    }
}

#[cfg(test)]
mod tests {
    use super::{GameBoy, GameBoyOptions, Model};
    use crate::{joypad::Button, testing::build_rom};

    fn dmg_options() -> GameBoyOptions {
        GameBoyOptions {
            model: Model::Dmg,
            ..Default::default()
        }
    }

    #[test]
    fn test_post_boot_io_state() {
        let rom = build_rom(0x00, 0x00, 0x00, "BOOT");
        let gb = GameBoy::new(&rom, dmg_options()).unwrap();

        assert_eq!(gb.cpu().af(), 0x01b0);
        assert_eq!(gb.cpu().pc, 0x0100);
        assert_eq!(gb.bus().read(0xff40), 0x91);
        assert_eq!(gb.bus().read(0xff47), 0xfc);
        assert_eq!(gb.bus().read(0xff04), 0xab);
        assert_eq!(gb.bus().read(0xff0f), 0xe1);
        assert_eq!(gb.bus().read(0xff26), 0xf0);
        assert_eq!(gb.bus().read(0xff24), 0x77);
    }

    #[test]
    fn test_auto_model_detection() {
        let mut rom = build_rom(0x00, 0x00, 0x00, "AUTO");
        let gb = GameBoy::new(&rom, GameBoyOptions::default()).unwrap();
        assert!(!gb.is_cgb());

        rom[0x0143] = 0x80;
        // keep the header checksum honest after the flag edit
        let checksum = rom[0x0134..=0x014c]
            .iter()
            .fold(0u8, |sum, &b| sum.wrapping_sub(b).wrapping_sub(1));
        rom[0x014d] = checksum;
        let gb = GameBoy::new(&rom, GameBoyOptions::default()).unwrap();
        assert!(gb.is_cgb());
        assert_eq!(gb.cpu().af(), 0x1180);
    }

    #[test]
    fn test_step_advances_machine() {
        let rom = build_rom(0x00, 0x00, 0x00, "STEP");
        let mut gb = GameBoy::new(&rom, dmg_options()).unwrap();

        // entry is NOP then a jump to the NOP-filled body at 0x0150
        assert_eq!(gb.step(), 4);
        assert_eq!(gb.step(), 16);
        assert_eq!(gb.cpu().pc, 0x0150);

        let before = gb.bus().read(0xff44);
        for _ in 0..200 {
            gb.step();
        }
        assert_ne!(gb.bus().read(0xff44), before);
    }

    #[test]
    fn test_run_frame_reaches_vblank() {
        let rom = build_rom(0x00, 0x00, 0x00, "FRAME");
        let mut gb = GameBoy::new(&rom, dmg_options()).unwrap();

        gb.run_frame();
        let ly = gb.bus().read(0xff44);
        assert!(ly >= 144, "LY={ly} not in V-Blank");

        let frame = gb.frame_buffer();
        assert_eq!(frame.len(), 160 * 144 * 4);
        // alpha channel pinned opaque
        assert!(frame.chunks(4).all(|px| px[3] == 0xff));
    }

    #[test]
    fn test_sram_round_trip_through_core() {
        let rom = build_rom(0x03, 0x00, 0x02, "SAVE");
        let mut gb = GameBoy::new(&rom, dmg_options()).unwrap();
        gb.bus_mut().write(0x0000, 0x0a);
        gb.bus_mut().write(0xa000, 0x99);

        let blob = gb.save_sram();
        let mut other = GameBoy::new(&rom, dmg_options()).unwrap();
        other.load_sram(&blob).unwrap();
        other.bus_mut().write(0x0000, 0x0a);
        assert_eq!(other.bus().read(0xa000), 0x99);

        assert!(other.load_sram(&[0u8; 3]).is_err());
    }

    #[test]
    fn test_reset_preserves_sram() {
        let rom = build_rom(0x03, 0x00, 0x02, "RESET");
        let mut gb = GameBoy::new(&rom, dmg_options()).unwrap();
        gb.bus_mut().write(0x0000, 0x0a);
        gb.bus_mut().write(0xa000, 0x42);
        gb.bus_mut().write(0xc000, 0x13);
        gb.step();

        gb.reset();
        assert_eq!(gb.cpu().pc, 0x0100);
        assert_eq!(gb.cpu().af(), 0x01b0);
        // WRAM cleared, battery-backed RAM kept
        assert_eq!(gb.bus().read(0xc000), 0x00);
        gb.bus_mut().write(0x0000, 0x0a);
        assert_eq!(gb.bus().read(0xa000), 0x42);
    }

    #[test]
    fn test_undefined_opcode_surfaces_fault() {
        let mut rom = build_rom(0x00, 0x00, 0x00, "FREEZE");
        rom[0x0100] = 0xd3;
        let checksum = rom[0x0134..=0x014c]
            .iter()
            .fold(0u8, |sum, &b| sum.wrapping_sub(b).wrapping_sub(1));
        rom[0x014d] = checksum;

        let mut gb = GameBoy::new(&rom, dmg_options()).unwrap();
        assert!(gb.fault().is_none());
        gb.step();
        assert!(gb.fault().is_some());

        // stepping a frozen core is deterministic
        gb.step();
        assert_eq!(gb.cpu().pc, 0x0101);
    }

    #[test]
    fn test_buttons_reach_joypad() {
        let rom = build_rom(0x00, 0x00, 0x00, "PAD");
        let mut gb = GameBoy::new(&rom, dmg_options()).unwrap();

        gb.bus_mut().write(0xff00, 0x20);
        gb.set_button(Button::Left, true);
        assert_eq!(gb.bus().read(0xff00) & 0x0f, 0x0d);
        gb.set_button(Button::Left, false);
        assert_eq!(gb.bus().read(0xff00) & 0x0f, 0x0f);
    }

    #[test]
    fn test_vblank_interrupt_drives_guest_loop() {
        let mut rom = build_rom(0x00, 0x00, 0x00, "IRQLOOP");
        // V-Blank handler: INC B; RETI
        rom[0x0040] = 0x04;
        rom[0x0041] = 0xd9;
        // LD A,1; LDH (FF),A; XOR A; LDH (0F),A; LD B,0; EI; HALT;
        // JR -3 (the stale post-boot V-Blank flag must go before EI)
        let program = [
            0x3e, 0x01, 0xe0, 0xff, 0xaf, 0xe0, 0x0f, 0x06, 0x00, 0xfb, 0x76, 0x18, 0xfd,
        ];
        rom[0x0150..0x0150 + program.len()].copy_from_slice(&program);

        let mut gb = GameBoy::new(&rom, dmg_options()).unwrap();
        for _ in 0..3 {
            gb.run_frame();
        }

        // one handler invocation per frame reaches the guest counter
        let b = gb.cpu().b;
        assert!((2..=4).contains(&b), "B={b}");
    }

    #[test]
    fn test_audio_accumulates_during_frame() {
        let rom = build_rom(0x00, 0x00, 0x00, "AUDIO");
        let mut gb = GameBoy::new(&rom, dmg_options()).unwrap();
        gb.run_frame();

        // one frame at 44.1 kHz is roughly 735 stereo pairs
        let samples = gb.drain_audio(10_000);
        assert!(samples.len() > 600, "only {} samples", samples.len());
    }
}
