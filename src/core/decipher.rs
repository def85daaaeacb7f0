use crate::constants::{DECIPHER_GLYPHS, DECIPHER_STEP};
use rand::Rng;

/// Left-to-right "decoding" reveal of a piece of text.
///
/// Each tick renders the revealed prefix verbatim and fills the rest with
/// random glyphs (spaces stay spaces), then advances the reveal.
#[derive(Clone, Debug)]
pub struct Decipher {
    target: Vec<char>,
    revealed: f32,
    done: bool,
}

impl Decipher {
    pub fn new(text: &str) -> Self {
        Self {
            target: text.chars().collect(),
            revealed: 0.0,
            done: false,
        }
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let glyphs: Vec<char> = DECIPHER_GLYPHS.chars().collect();
        let frame = self
            .target
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if (i as f32) < self.revealed || c == ' ' {
                    c
                } else {
                    glyphs[rng.gen_range(0..glyphs.len())]
                }
            })
            .collect();
        if self.revealed >= self.target.len() as f32 {
            self.done = true;
        } else {
            self.revealed += DECIPHER_STEP;
        }
        frame
    }
}
