//! Owns the three voices and the shared filter, and wires the fixed
//! sync/ring-modulation topology between them.

use crate::filter::Filter;
use crate::voice::Voice;

/// CPU cycles per second for a PAL C64-style clock (63 cycles/line * 312
/// lines/frame * 50 frames/sec), used to derive `cycles_per_sample`.
const CPU_CYCLES_PER_SECOND: f64 = 63.0 * 312.0 * 50.0;

/// The three-voice SID chip: voice topology, shared filter, and the
/// fractional cycle-to-sample pacing accumulator.
pub struct Chip {
    pub voices: [Voice; 3],
    pub filter: Filter,
    /// CPU cycles per output sample at this chip's configured sample rate.
    pub cycles_per_sample: f64,
    /// Fractional cycles accumulated toward the next sample; always in
    /// `[0, cycles_per_sample)` after a sample is emitted.
    pub cycle_accumulator: f64,
}

impl Chip {
    /// Create a chip in its quiescent power-on state for the given host
    /// sample rate (e.g. `44_100.0`).
    #[must_use]
    pub fn new(sample_rate: f64) -> Self {
        // voice[i].sync_target = voice[(i+1) % 3]; voice[i].sync_source = voice[(i+2) % 3]
        let voices = [Voice::new(1, 2), Voice::new(2, 0), Voice::new(0, 1)];
        Self {
            voices,
            filter: Filter::new(),
            cycles_per_sample: CPU_CYCLES_PER_SECOND / sample_rate,
            cycle_accumulator: 0.0,
        }
    }

    /// Advance all three voices by `cycles` CPU cycles and apply any hard
    /// syncs that fired this step.
    pub fn clock_voices(&mut self, cycles: u32) {
        let target_waveforms = [
            self.voices[self.voices[0].sync_target].waveform,
            self.voices[self.voices[1].sync_target].waveform,
            self.voices[self.voices[2].sync_target].waveform,
        ];

        for i in 0..3 {
            self.voices[i].clock(cycles, target_waveforms[i]);
        }

        let pending_syncs: [bool; 3] = [
            self.voices[0].do_sync,
            self.voices[1].do_sync,
            self.voices[2].do_sync,
        ];
        for i in 0..3 {
            let target = self.voices[i].sync_target;
            if pending_syncs[i] && self.voices[target].waveform & 0x02 != 0 {
                self.voices[target].accumulator = 0;
            }
        }
    }

    /// Mix the three voices' current waveform output through the shared
    /// filter according to `filter_routing` (bits 0/1/2 select voice
    /// 0/1/2 into the filter) and `filter_mode` (bits 0x10/0x20/0x40 select
    /// low/band/high-pass into the final mix), returning the combined,
    /// unscaled sample.
    pub fn mix_sample(
        &mut self,
        filter_routing: u8,
        filter_mode: u8,
        cutoff: f32,
        resonance: f32,
    ) -> f32 {
        let mut filter_input = 0.0f32;
        let mut direct = 0.0f32;

        for i in 0..3 {
            let source = self.voices[i].sync_source;
            let sample = self.voices[i].output(self.voices[source].accumulator);
            if filter_routing & (1 << i) != 0 {
                filter_input += sample;
            } else {
                direct += sample;
            }
        }

        let filtered = self.filter.step(filter_input, cutoff, resonance, filter_mode);
        direct + filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_topology_is_a_three_ring() {
        let chip = Chip::new(44_100.0);
        assert_eq!(chip.voices[0].sync_target, 1);
        assert_eq!(chip.voices[1].sync_target, 2);
        assert_eq!(chip.voices[2].sync_target, 0);
        assert_eq!(chip.voices[0].sync_source, 2);
        assert_eq!(chip.voices[1].sync_source, 0);
        assert_eq!(chip.voices[2].sync_source, 1);
    }

    #[test]
    fn cycles_per_sample_matches_pal_clock_at_44_1khz() {
        let chip = Chip::new(44_100.0);
        assert!((chip.cycles_per_sample - 22.289_796).abs() < 1e-3);
    }

    #[test]
    fn reinit_is_idempotent() {
        let a = Chip::new(44_100.0);
        let b = Chip::new(44_100.0);
        assert_eq!(a.voices[0].accumulator, b.voices[0].accumulator);
        assert_eq!(a.voices[0].noise_lfsr, b.voices[0].noise_lfsr);
        assert_eq!(a.cycles_per_sample, b.cycles_per_sample);
    }

    #[test]
    fn hard_sync_across_chip_resets_target_voice() {
        let mut chip = Chip::new(44_100.0);
        chip.voices[0].frequency = 0x0010_0000;
        chip.voices[1].waveform = 0x02; // sync bit on voice 1 (voice 0's target)
        chip.voices[1].frequency = 0x0008_0000;

        // Advance voice 1 partway so its accumulator is nonzero, then
        // clock until voice 0 crosses bit 23 and resets it.
        for _ in 0..50 {
            chip.clock_voices(1);
            if chip.voices[1].accumulator == 0 && chip.voices[0].do_sync {
                return;
            }
        }
        panic!("expected voice 0's sync to reset voice 1's accumulator");
    }
}
