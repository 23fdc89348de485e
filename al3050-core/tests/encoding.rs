//! Frame encoding properties over the whole input space.

use al3050_core::frame::{Frame, ADDRESS, BRIGHTNESS_MASK, PULSES_PER_FRAME};
use al3050_core::timing::{T_BIT_NS, T_LOGIC_1_NS};
use proptest::prelude::*;

/// Schedule index of bit cell `n`'s low phase: cells 0..8 follow the
/// start pulse, cells 8..16 follow the inter-byte gap.
fn cell_index(n: usize) -> usize {
    if n < 8 {
        1 + 2 * n
    } else {
        19 + 2 * (n - 8)
    }
}

proptest! {
    #[test]
    fn word_always_carries_address_and_masked_level(level: u8, rfa: bool) {
        let frame = Frame::new(level, rfa);
        prop_assert_eq!(frame.word() >> 8, ADDRESS >> 8);
        prop_assert_eq!(frame.brightness(), level & BRIGHTNESS_MASK);
        prop_assert_eq!(frame.rfa(), rfa);
    }

    #[test]
    fn bit_cells_have_constant_period(level: u8, rfa: bool) {
        let seq = Frame::new(level, rfa).pulses();
        prop_assert_eq!(seq.len(), PULSES_PER_FRAME);
        for n in 0..16usize {
            let i = cell_index(n);
            prop_assert!(!seq[i].high);
            prop_assert!(seq[i + 1].high);
            prop_assert_eq!(seq[i].ns + seq[i + 1].ns, T_BIT_NS);
        }
    }

    #[test]
    fn schedule_round_trips_to_the_word(level: u8, rfa: bool) {
        let frame = Frame::new(level, rfa);
        let seq = frame.pulses();
        let mut word = 0u16;
        for n in 0..16usize {
            word <<= 1;
            if seq[cell_index(n)].ns == T_LOGIC_1_NS {
                word |= 1;
            }
        }
        prop_assert_eq!(word, frame.word());
    }
}
