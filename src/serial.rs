//! Serial transfer registers SB ($FF01) and SC ($FF02).
//!
//! Only the register block and a pluggable byte sink are modeled; there
//! is no link-cable peer, so incoming bits read as 1 (disconnected
//! line) and transfers only run on the internal clock. The referenced
//! CPU test suites report their results through this port.

use std::any::Any;

use log::trace;

use crate::{
    consts::{SB_ADDR, SC_ADDR},
    interrupts::{Interrupt, Interrupts},
};

/// Internal-clock bit rate is 8192 Hz: 512 T-cycles per bit.
const CYCLES_PER_BIT: u32 = 512;

/// CGB fast-clock bit rate is 262144 Hz: 16 T-cycles per bit.
const CYCLES_PER_BIT_FAST: u32 = 16;

/// Host side of the serial port.
pub trait SerialDevice {
    /// Receives a byte the guest finished shifting out.
    fn receive(&mut self, byte: u8);

    /// Returns the device as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// Device that drops everything, the default wiring.
#[derive(Default)]
pub struct NullDevice;

impl SerialDevice for NullDevice {
    fn receive(&mut self, _byte: u8) {}

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Device that accumulates the output stream, used by tests to collect
/// the pass/fail text the Blargg ROMs print.
#[derive(Default)]
pub struct BufferDevice {
    buffer: Vec<u8>,
}

impl BufferDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.buffer).into_owned()
    }
}

impl SerialDevice for BufferDevice {
    fn receive(&mut self, byte: u8) {
        self.buffer.push(byte);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct Serial {
    data: u8,
    control: u8,
    shift_out: u8,
    transferring: bool,
    bit_timer: u32,
    bits_left: u8,
    /// CGB wiring exposes the fast-clock select in SC bit 1.
    cgb: bool,
    device: Box<dyn SerialDevice>,
}

impl Serial {
    pub fn new(cgb: bool) -> Self {
        Self {
            data: 0x0,
            control: 0x0,
            shift_out: 0x0,
            transferring: false,
            bit_timer: 0,
            bits_left: 0,
            cgb,
            device: Box::new(NullDevice),
        }
    }

    fn cycles_per_bit(&self) -> u32 {
        if self.cgb && self.control & 0x02 == 0x02 {
            CYCLES_PER_BIT_FAST
        } else {
            CYCLES_PER_BIT
        }
    }

    pub fn reset(&mut self) {
        self.data = 0x0;
        self.control = 0x0;
        self.shift_out = 0x0;
        self.transferring = false;
        self.bit_timer = 0;
        self.bits_left = 0;
    }

    pub fn attach(&mut self, device: Box<dyn SerialDevice>) {
        self.device = device;
    }

    pub fn device(&self) -> &dyn SerialDevice {
        self.device.as_ref()
    }

    pub fn tick(&mut self, cycles: u32, ints: &mut Interrupts) {
        if !self.transferring {
            return;
        }

        let cycles_per_bit = self.cycles_per_bit();
        self.bit_timer += cycles;
        while self.bit_timer >= cycles_per_bit && self.bits_left > 0 {
            self.bit_timer -= cycles_per_bit;
            // the outgoing bit leaves through the MSB, a disconnected
            // partner feeds 1s into the LSB
            self.data = (self.data << 1) | 0x01;
            self.bits_left -= 1;
        }

        if self.bits_left == 0 {
            self.transferring = false;
            self.control &= 0x7f;
            self.device.receive(self.shift_out);
            ints.request(Interrupt::Serial);
        }
    }

    pub fn read(&self, addr: u16) -> u8 {
        match addr {
            SB_ADDR => self.data,
            SC_ADDR => self.control | if self.cgb { 0x7c } else { 0x7e },
            _ => 0xff,
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            SB_ADDR => self.data = value,
            SC_ADDR => {
                self.control = value & if self.cgb { 0x83 } else { 0x81 };
                if value & 0x81 == 0x81 {
                    trace!("serial transfer start, SB=0x{:02x}", self.data);
                    self.shift_out = self.data;
                    self.transferring = true;
                    self.bit_timer = 0;
                    self.bits_left = 8;
                }
                // external clock with no partner: the transfer never
                // completes, which is also what the hardware does
            }
            _ => (),
        }
    }
}

impl Default for Serial {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::{BufferDevice, Serial};
    use crate::interrupts::Interrupts;

    #[test]
    fn test_transfer_completes_after_eight_bits() {
        let mut serial = Serial::new(false);
        let mut ints = Interrupts::new();
        ints.write_enable(0x08);

        serial.write(0xff01, 0x5a);
        serial.write(0xff02, 0x81);
        assert_eq!(serial.read(0xff02), 0xff);

        serial.tick(512 * 7, &mut ints);
        assert_eq!(ints.pending(), 0x00);

        serial.tick(512, &mut ints);
        assert_eq!(ints.pending(), 0x08);
        // with no partner the received byte is all ones
        assert_eq!(serial.read(0xff01), 0xff);
        // bit 7 clears on completion, the clock-source bit stays
        assert_eq!(serial.read(0xff02), 0x7f);
    }

    #[test]
    fn test_buffer_device_collects_output() {
        let mut serial = Serial::new(false);
        let mut ints = Interrupts::new();
        serial.attach(Box::new(BufferDevice::new()));

        for byte in b"Ok" {
            serial.write(0xff01, *byte);
            serial.write(0xff02, 0x81);
            serial.tick(512 * 8, &mut ints);
        }

        let buffer = serial
            .device()
            .as_any()
            .downcast_ref::<BufferDevice>()
            .unwrap();
        assert_eq!(buffer.text(), "Ok");
    }

    #[test]
    fn test_cgb_fast_clock() {
        let mut serial = Serial::new(true);
        let mut ints = Interrupts::new();
        ints.write_enable(0x08);

        serial.write(0xff01, 0xa5);
        serial.write(0xff02, 0x83);
        serial.tick(16 * 8, &mut ints);
        assert_eq!(ints.pending(), 0x08);
        assert_eq!(serial.read(0xff02), 0x7f);
    }

    #[test]
    fn test_external_clock_never_completes() {
        let mut serial = Serial::new(false);
        let mut ints = Interrupts::new();

        serial.write(0xff01, 0x12);
        serial.write(0xff02, 0x80);
        serial.tick(100_000, &mut ints);

        assert_eq!(ints.pending(), 0x00);
        assert_eq!(serial.read(0xff01), 0x12);
    }
}
