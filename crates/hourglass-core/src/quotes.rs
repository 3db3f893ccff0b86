//! Quotes shown alongside every estimator page.

use rand_core::{OsRng, RngCore};

/// English renderings of the seventeen quotes the page rotates through.
pub const QUOTES: [&str; 17] = [
  "Time is the most precious asset you have.",
  "Life is built out of this very moment.",
  "If you would regret it, act now.",
  "Time with family cannot be bought.",
  "Time means something precisely because it is limited.",
  "Today will never come again.",
  "Time with your parents is the best investment you will make.",
  "Don't wait for tomorrow; see them today.",
  "To waste time is to waste life.",
  "Memories are the greatest fortune.",
  "The time left to thank your parents is limited.",
  "Cherish this moment.",
  "The quality of a life is set by the time spent with those who matter.",
  "If you want to see someone, go and see them.",
  "Time is the same for everyone. How you spend it is up to you.",
  "Time with your parents never comes back.",
  "Here and now. That is everything.",
];

/// Pick one quote uniformly at random using `rng`.
///
/// Draws landing in the incomplete block at the top of the `u32` range are
/// rejected so that every quote is equally likely.
pub fn pick<R: RngCore + ?Sized>(rng: &mut R) -> &'static str {
  let len = QUOTES.len() as u32;
  let zone = u32::MAX - u32::MAX % len;
  loop {
    let draw = rng.next_u32();
    if draw < zone {
      return QUOTES[(draw % len) as usize];
    }
  }
}

/// Pick one quote using the operating system's RNG.
pub fn random() -> &'static str { pick(&mut OsRng) }
