use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// External collaborator producing approximately-sized human-readable filler.
/// Implementations may under-produce; callers truncate, never pad.
pub trait TextSource {
    fn text(&mut self, approx_len: usize) -> String;
}

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit",
    "sed", "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et",
    "dolore", "magna", "aliqua", "enim", "ad", "minim", "veniam", "quis",
    "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip", "ex", "ea",
    "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
];

/// Sentence-shaped ASCII filler built from a fixed word list.
pub struct LoremSource {
    rng: StdRng,
}

impl LoremSource {
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for LoremSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSource for LoremSource {
    fn text(&mut self, approx_len: usize) -> String {
        let mut out = String::with_capacity(approx_len + 64);
        while out.len() < approx_len {
            let words = self.rng.gen_range(6..=12);
            for i in 0..words {
                let w = WORDS[self.rng.gen_range(0..WORDS.len())];
                if i == 0 {
                    out.push_str(&w[..1].to_ascii_uppercase());
                    out.push_str(&w[1..]);
                } else {
                    out.push(' ');
                    out.push_str(w);
                }
            }
            out.push_str(". ");
        }
        out
    }
}

/// Cut `s` down to at most `max` bytes without splitting a UTF-8 character.
pub fn truncate_to_bytes(mut s: String, max: usize) -> String {
    if s.len() <= max {
        return s;
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    s.truncate(cut);
    s
}
