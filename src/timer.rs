//! Timer and divider circuit.
//!
//! The divider is a free-running 16-bit counter advanced every T-cycle;
//! DIV exposes its upper byte. TIMA does not count cycles of its own:
//! it increments on the falling edge of a single counter bit selected
//! by TAC, which is what makes the DIV-write and TAC-write glitches
//! observable to guest code.

use log::trace;

use crate::{
    consts::{DIV_ADDR, TAC_ADDR, TIMA_ADDR, TMA_ADDR},
    interrupts::{Interrupt, Interrupts},
};

/// TIMA reload sequence. Overflow opens a 4 T-cycle window where TIMA
/// reads zero and a write cancels the reload; the reload cycle itself
/// ignores TIMA writes but forwards TMA writes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum TimaState {
    Running,
    Overflowed(u8),
    Reloaded(u8),
}

pub struct Timer {
    counter: u16,
    tima: u8,
    tma: u8,
    tac: u8,
    state: TimaState,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            counter: 0x0,
            tima: 0x0,
            tma: 0x0,
            tac: 0x0,
            state: TimaState::Running,
        }
    }

    pub fn reset(&mut self) {
        self.counter = 0x0;
        self.tima = 0x0;
        self.tma = 0x0;
        self.tac = 0x0;
        self.state = TimaState::Running;
    }

    /// Advances the timer by up to one M-cycle worth of T-cycles.
    ///
    /// The bus feeds the timer in chunks of at most 4 T-cycles so the
    /// reload window boundaries and the edge detector stay exact.
    pub fn tick(&mut self, cycles: u32, ints: &mut Interrupts) {
        debug_assert!(cycles <= 4);

        self.advance_state(cycles as u8, ints);

        let previous = self.counter;
        self.counter = self.counter.wrapping_add(cycles as u16);

        if self.enabled() {
            let mask = self.watched_mask();
            if previous & mask != 0 && self.counter & mask == 0 {
                self.increment_tima();
            }
        }
    }

    fn advance_state(&mut self, cycles: u8, ints: &mut Interrupts) {
        match self.state {
            TimaState::Running => (),
            TimaState::Overflowed(remaining) => {
                if remaining <= cycles {
                    self.tima = self.tma;
                    ints.request(Interrupt::Timer);
                    trace!("TIMA reloaded from TMA 0x{:02x}", self.tma);
                    self.state = TimaState::Reloaded(4);
                } else {
                    self.state = TimaState::Overflowed(remaining - cycles);
                }
            }
            TimaState::Reloaded(remaining) => {
                if remaining <= cycles {
                    self.state = TimaState::Running;
                } else {
                    self.state = TimaState::Reloaded(remaining - cycles);
                }
            }
        }
    }

    fn increment_tima(&mut self) {
        self.tima = self.tima.wrapping_add(1);
        if self.tima == 0x00 {
            self.state = TimaState::Overflowed(4);
        }
    }

    #[inline(always)]
    fn enabled(&self) -> bool {
        self.tac & 0x04 == 0x04
    }

    /// Mask of the internal counter bit whose falling edge clocks TIMA.
    #[inline(always)]
    fn watched_mask(&self) -> u16 {
        match self.tac & 0x03 {
            0x00 => 1 << 9,
            0x01 => 1 << 3,
            0x02 => 1 << 5,
            _ => 1 << 7,
        }
    }

    /// Current state of the watched-bit-AND-enable line feeding the
    /// TIMA edge detector.
    #[inline(always)]
    fn timer_line(&self) -> bool {
        self.enabled() && self.counter & self.watched_mask() != 0
    }

    pub fn read(&self, addr: u16) -> u8 {
        match addr {
            DIV_ADDR => (self.counter >> 8) as u8,
            TIMA_ADDR => self.tima,
            TMA_ADDR => self.tma,
            TAC_ADDR => self.tac | 0xf8,
            _ => 0xff,
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            DIV_ADDR => {
                // resetting the counter can itself produce a falling
                // edge on the watched bit
                if self.timer_line() {
                    self.increment_tima();
                }
                self.counter = 0x0;
            }
            TIMA_ADDR => match self.state {
                TimaState::Running => self.tima = value,
                TimaState::Overflowed(_) => {
                    // a write inside the overflow window cancels the
                    // pending reload and the interrupt with it
                    self.tima = value;
                    self.state = TimaState::Running;
                }
                TimaState::Reloaded(_) => (),
            },
            TMA_ADDR => {
                self.tma = value;
                if let TimaState::Reloaded(_) = self.state {
                    self.tima = value;
                }
            }
            TAC_ADDR => {
                let old_line = self.timer_line();
                self.tac = value & 0x07;
                if old_line && !self.timer_line() {
                    self.increment_tima();
                }
            }
            _ => (),
        }
    }

    /// Raw 16-bit divider counter, used by the bus to derive the APU
    /// frame-sequencer clock.
    #[inline(always)]
    pub fn counter(&self) -> u16 {
        self.counter
    }

    pub fn set_counter(&mut self, value: u16) {
        self.counter = value;
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Timer, TimaState};
    use crate::interrupts::Interrupts;

    fn tick(timer: &mut Timer, ints: &mut Interrupts, mut cycles: u32) {
        while cycles > 0 {
            let step = cycles.min(4);
            timer.tick(step, ints);
            cycles -= step;
        }
    }

    #[test]
    fn test_div_increments_and_resets() {
        let mut timer = Timer::new();
        let mut ints = Interrupts::new();

        tick(&mut timer, &mut ints, 256);
        assert_eq!(timer.read(0xff04), 0x01);

        timer.write(0xff04, 0x47);
        assert_eq!(timer.read(0xff04), 0x00);
    }

    #[test]
    fn test_tima_rate_selection() {
        let mut timer = Timer::new();
        let mut ints = Interrupts::new();

        // enabled, 262144 Hz: one increment every 16 T-cycles
        timer.write(0xff07, 0x05);
        tick(&mut timer, &mut ints, 16);
        assert_eq!(timer.read(0xff05), 0x01);
        tick(&mut timer, &mut ints, 16);
        assert_eq!(timer.read(0xff05), 0x02);

        // disabled: no increments at all
        timer.write(0xff07, 0x01);
        tick(&mut timer, &mut ints, 512);
        assert_eq!(timer.read(0xff05), 0x02);
    }

    #[test]
    fn test_div_write_synthesizes_tick() {
        let mut timer = Timer::new();
        let mut ints = Interrupts::new();

        timer.write(0xff07, 0x05);
        // counter = 8 puts the watched bit (bit 3) high
        tick(&mut timer, &mut ints, 8);
        timer.write(0xff04, 0x00);
        assert_eq!(timer.read(0xff05), 0x01);
    }

    #[test]
    fn test_tac_disable_synthesizes_tick() {
        let mut timer = Timer::new();
        let mut ints = Interrupts::new();

        timer.write(0xff07, 0x05);
        tick(&mut timer, &mut ints, 8);

        timer.write(0xff07, 0x00);
        assert_eq!(timer.read(0xff05), 0x01);
    }

    #[test]
    fn test_overflow_reload_and_interrupt() {
        let mut timer = Timer::new();
        let mut ints = Interrupts::new();
        ints.write_enable(0x04);

        timer.write(0xff06, 0xab);
        timer.write(0xff05, 0xff);
        timer.write(0xff07, 0x05);

        tick(&mut timer, &mut ints, 16);
        // inside the overflow window TIMA reads zero and no interrupt
        // has been raised yet
        assert_eq!(timer.read(0xff05), 0x00);
        assert_eq!(ints.pending(), 0x00);

        tick(&mut timer, &mut ints, 4);
        assert_eq!(timer.read(0xff05), 0xab);
        assert_eq!(ints.pending(), 0x04);
    }

    #[test]
    fn test_write_in_overflow_window_cancels_reload() {
        let mut timer = Timer::new();
        let mut ints = Interrupts::new();
        ints.write_enable(0x04);

        timer.write(0xff06, 0xab);
        timer.write(0xff05, 0xff);
        timer.write(0xff07, 0x05);

        tick(&mut timer, &mut ints, 16);
        timer.write(0xff05, 0x42);
        tick(&mut timer, &mut ints, 8);

        assert_eq!(timer.read(0xff05), 0x42);
        assert_eq!(ints.pending(), 0x00);
    }

    #[test]
    fn test_tima_write_ignored_in_reload_cycle() {
        let mut timer = Timer::new();
        let mut ints = Interrupts::new();

        timer.write(0xff06, 0xab);
        timer.write(0xff05, 0xff);
        timer.write(0xff07, 0x05);

        tick(&mut timer, &mut ints, 20);
        assert_eq!(timer.state, TimaState::Reloaded(4));

        timer.write(0xff05, 0x42);
        assert_eq!(timer.read(0xff05), 0xab);

        // a TMA write in the same cycle lands in TIMA too
        timer.write(0xff06, 0x77);
        assert_eq!(timer.read(0xff05), 0x77);
    }

    #[test]
    fn test_tac_reads_back_with_upper_bits() {
        let mut timer = Timer::new();
        timer.write(0xff07, 0x05);
        assert_eq!(timer.read(0xff07), 0xfd);
    }
}
