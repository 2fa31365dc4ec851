//! Cycle-paced MOS 6581/8580 SID sample-generation engine.
//!
//! Three voices, each with a 24-bit phase-accumulator oscillator, a 23-bit
//! noise LFSR, four selectable waveforms (with combined-waveform AND
//! logic), hard sync, ring modulation, and an ADSR envelope, feed a shared
//! state-variable multi-mode filter and master volume stage. The engine
//! does not drive a register bus one cycle at a time; instead a caller
//! supplies a CPU-cycle budget and a register snapshot in one call and
//! receives back a batch of signed 16-bit PCM samples:
//!
//! ```
//! use sid_sample_engine::{RegisterSnapshot, SampleEngine, VoiceRegisters};
//!
//! let mut engine = SampleEngine::new(44_100.0);
//! let mut regs = RegisterSnapshot::default();
//! regs.voices[0] = VoiceRegisters {
//!     freq: 7493, // ~440 Hz at the PAL CPU clock
//!     pulse: 0x0800,
//!     waveform: 0x41, // pulse + gate
//!     ad: 0x1D,
//!     sr: 0x20,
//! };
//! regs.volume = 0x0F;
//!
//! let mut out = [0i16; 4096];
//! let written = engine.buffer_samples(40_000, &regs, &mut out, out.len() as i32);
//! assert!(written > 0);
//! ```
//!
//! # Register snapshot layout
//!
//! | Field | Width | Notes |
//! |------|-------|-------|
//! | `voices[i].freq` | 16-bit | accumulator increment per cycle |
//! | `voices[i].pulse` | 12-bit | pulse waveform threshold |
//! | `voices[i].waveform` | 8-bit | noise/pulse/saw/tri/test/ring/sync/gate |
//! | `voices[i].ad` | 8-bit | attack (hi nibble) / decay (lo nibble) |
//! | `voices[i].sr` | 8-bit | sustain (hi nibble) / release (lo nibble) |
//! | `cutoff` | 8-bit | filter cutoff (low byte only, see `SPEC_FULL.md`) |
//! | `filter_ctrl` | 8-bit | routing (lo 3 bits) / resonance (hi nibble) |
//! | `volume` | 8-bit | master volume (lo nibble) / LP-BP-HP select (hi nibble) |
//!
//! Everything here is a pure, synchronous function of chip state, the
//! register snapshot, and a cycle budget: no threads, no I/O, no
//! allocation on the hot path, and no recoverable error paths (contract
//! violations return `0` rather than panicking or raising an error type).

mod chip;
mod engine;
mod filter;
mod tables;
mod voice;

pub use chip::Chip;
pub use engine::{RegisterSnapshot, SampleEngine};
pub use filter::Filter;
pub use voice::{EnvelopeState, Voice, VoiceRegisters};
