//! A cycle-aware Game Boy (DMG) and Game Boy Color (CGB) emulation
//! core: the Sharp LR35902 CPU, memory bus, PPU, APU, timer,
//! interrupt controller, DMA engines and the banked cartridge
//! interface, synchronized on the 4.194304 MHz master clock.
//!
//! The host embeds [`gb::GameBoy`], feeds it a ROM image and buttons,
//! and consumes frames and audio:
//!
//! ```no_run
//! use dotmatrix::gb::{GameBoy, GameBoyOptions};
//!
//! let rom = std::fs::read("game.gb").unwrap();
//! let mut gb = GameBoy::new(&rom, GameBoyOptions::default()).unwrap();
//! let frame = gb.run_frame();
//! assert_eq!(frame.len(), 160 * 144 * 4);
//! ```

pub mod apu;
pub mod bus;
pub mod cart;
pub mod colorize;
pub mod consts;
pub mod cpu;
pub mod dma;
pub mod error;
pub mod gb;
pub mod inst;
pub mod interrupts;
pub mod joypad;
pub mod ppu;
pub mod serial;
pub mod testing;
pub mod timer;
