//! Randomness source for identity tokens and the placeholder metrics.
//!
//! Everything random in the demo (identity tokens, goal progress, report
//! series) draws from an [`Entropy`] so tests can substitute
//! [`ScriptedEntropy`].

use rand_core::{OsRng, RngCore};

const TWO_POW_32: f64 = 4_294_967_296.0;

pub trait Entropy {
  fn next_u32(&mut self) -> u32;

  /// Fill `buf` with random bytes.
  fn fill_bytes(&mut self, buf: &mut [u8]) {
    for chunk in buf.chunks_mut(4) {
      let word = self.next_u32().to_be_bytes();
      chunk.copy_from_slice(&word[..chunk.len()]);
    }
  }

  /// A uniform sample in `[0, 1)`.
  fn unit(&mut self) -> f64 { f64::from(self.next_u32()) / TWO_POW_32 }

  /// A uniform integer in `[0, n)`; `0` when `n == 0`.
  fn below(&mut self, n: u32) -> u32 { (self.unit() * f64::from(n)) as u32 }
}

// ─── OS randomness ───────────────────────────────────────────────────────────

/// Entropy from the operating system via `getrandom`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl Entropy for OsEntropy {
  fn next_u32(&mut self) -> u32 { OsRng.next_u32() }

  fn fill_bytes(&mut self, buf: &mut [u8]) { OsRng.fill_bytes(buf) }
}

// ─── Scripted ────────────────────────────────────────────────────────────────

/// Replays a fixed sequence of words, cycling when exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEntropy {
  words: Vec<u32>,
  next:  usize,
}

impl ScriptedEntropy {
  pub fn new(words: impl Into<Vec<u32>>) -> Self {
    Self { words: words.into(), next: 0 }
  }

  /// Script that yields exactly these [`Entropy::unit`] samples.
  pub fn units(samples: &[f64]) -> Self {
    Self::new(
      samples
        .iter()
        .map(|u| (u.clamp(0.0, 1.0) * TWO_POW_32).min(f64::from(u32::MAX)) as u32)
        .collect::<Vec<_>>(),
    )
  }
}

impl Entropy for ScriptedEntropy {
  fn next_u32(&mut self) -> u32 {
    if self.words.is_empty() {
      return 0;
    }
    let word = self.words[self.next % self.words.len()];
    self.next += 1;
    word
  }
}
