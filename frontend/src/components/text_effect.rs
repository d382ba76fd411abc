//! Frame generators behind the decrypt animation.
//!
//! A [`TextEffect`] turns a static string into a finite sequence of frames.
//! The last frame is always the plain text, so a component can stop ticking
//! once `frame >= frame_count` and render the string as-is.

pub const DEFAULT_CHARACTERS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!@#$%^&*()_+";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub revealed: bool,
}

impl Glyph {
    fn plain(ch: char) -> Self {
        Self { ch, revealed: true }
    }
}

/// Renders `text` with every character in place.
pub fn plain(text: &str) -> Vec<Glyph> {
    text.chars().map(Glyph::plain).collect()
}

pub trait TextEffect {
    /// Frames needed before the text reads in full.
    fn frame_count(&self, text: &str) -> usize;

    /// Frame `frame` of the animation. `rng` yields values in `[0, 1)`.
    fn frame(&self, text: &str, frame: usize, rng: &mut dyn FnMut() -> f64) -> Vec<Glyph>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealDirection {
    #[default]
    Start,
    End,
    Center,
}

/// Where scramble characters are drawn from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CharPool {
    Characters(Vec<char>),
    /// Shuffle among the characters of the text itself.
    OriginalOnly,
}

impl Default for CharPool {
    fn default() -> Self {
        CharPool::Characters(DEFAULT_CHARACTERS.chars().collect())
    }
}

impl CharPool {
    pub fn from_characters(characters: &str) -> Self {
        CharPool::Characters(characters.chars().collect())
    }

    fn resolve(&self, text: &str) -> Vec<char> {
        match self {
            CharPool::Characters(chars) => chars.clone(),
            CharPool::OriginalOnly => {
                let mut chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
                chars.sort_unstable();
                chars.dedup();
                chars
            }
        }
    }
}

fn scramble(ch: char, pool: &[char], rng: &mut dyn FnMut() -> f64) -> Glyph {
    if ch.is_whitespace() || pool.is_empty() {
        return Glyph::plain(ch);
    }
    let index = ((rng() * pool.len() as f64) as usize).min(pool.len() - 1);
    Glyph { ch: pool[index], revealed: false }
}

/// Decodes one character per frame in `direction` order, scrambling the rest.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SequentialReveal {
    pub direction: RevealDirection,
    pub pool: CharPool,
}

impl SequentialReveal {
    fn reveal_order(&self, len: usize) -> Vec<usize> {
        match self.direction {
            RevealDirection::Start => (0..len).collect(),
            RevealDirection::End => (0..len).rev().collect(),
            RevealDirection::Center => {
                let middle = (len / 2) as isize;
                let mut order = Vec::with_capacity(len);
                let mut step = 0isize;
                while order.len() < len {
                    let offset = step / 2;
                    let index = if step % 2 == 0 { middle + offset } else { middle - offset - 1 };
                    if (0..len as isize).contains(&index) {
                        order.push(index as usize);
                    }
                    step += 1;
                }
                order
            }
        }
    }
}

impl TextEffect for SequentialReveal {
    fn frame_count(&self, text: &str) -> usize {
        text.chars().count()
    }

    fn frame(&self, text: &str, frame: usize, rng: &mut dyn FnMut() -> f64) -> Vec<Glyph> {
        let chars: Vec<char> = text.chars().collect();
        if frame >= chars.len() {
            return plain(text);
        }
        let mut revealed = vec![false; chars.len()];
        for index in self.reveal_order(chars.len()).into_iter().take(frame) {
            revealed[index] = true;
        }
        let pool = self.pool.resolve(text);
        chars
            .iter()
            .zip(revealed)
            .map(|(&ch, shown)| if shown { Glyph::plain(ch) } else { scramble(ch, &pool, rng) })
            .collect()
    }
}

/// Scrambles every character for a fixed number of frames, then snaps to the text.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrambleBurst {
    pub iterations: usize,
    pub pool: CharPool,
}

impl TextEffect for ScrambleBurst {
    fn frame_count(&self, _text: &str) -> usize {
        self.iterations
    }

    fn frame(&self, text: &str, frame: usize, rng: &mut dyn FnMut() -> f64) -> Vec<Glyph> {
        if frame >= self.iterations {
            return plain(text);
        }
        let pool = self.pool.resolve(text);
        text.chars().map(|ch| scramble(ch, &pool, rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(glyphs: &[Glyph]) -> String {
        glyphs.iter().map(|g| g.ch).collect()
    }

    fn revealed(glyphs: &[Glyph]) -> Vec<bool> {
        glyphs.iter().map(|g| g.revealed).collect()
    }

    #[test]
    fn sequential_reveals_from_start() {
        let effect = SequentialReveal::default();
        let mut rng = || 0.0;
        let frame = effect.frame("abcd", 2, &mut rng);
        assert_eq!(render(&frame), "abAA");
        assert_eq!(revealed(&frame), [true, true, false, false]);
    }

    #[test]
    fn sequential_reveals_from_end() {
        let effect = SequentialReveal { direction: RevealDirection::End, ..Default::default() };
        let mut rng = || 0.0;
        assert_eq!(revealed(&effect.frame("abcd", 1, &mut rng)), [false, false, false, true]);
    }

    #[test]
    fn center_order_walks_outward() {
        let effect = SequentialReveal { direction: RevealDirection::Center, ..Default::default() };
        assert_eq!(effect.reveal_order(5), [2, 1, 3, 0, 4]);
        assert_eq!(effect.reveal_order(4), [2, 1, 3, 0]);
        assert!(effect.reveal_order(0).is_empty());
    }

    #[test]
    fn last_frame_is_plain_text() {
        let text = "Saving Millions.";
        let effect = SequentialReveal::default();
        let mut rng = || 0.5;
        let frames = effect.frame_count(text);
        assert_eq!(render(&effect.frame(text, frames, &mut rng)), text);
        assert!(effect.frame(text, frames, &mut rng).iter().all(|g| g.revealed));
    }

    #[test]
    fn whitespace_is_never_scrambled() {
        let effect = ScrambleBurst { iterations: 3, pool: CharPool::from_characters("#") };
        let mut rng = || 0.99;
        assert_eq!(render(&effect.frame("ab cd", 0, &mut rng)), "## ##");
    }

    #[test]
    fn burst_snaps_after_iterations() {
        let effect = ScrambleBurst { iterations: 2, pool: CharPool::default() };
        let mut rng = || 0.0;
        assert_eq!(effect.frame_count("hello"), 2);
        assert_eq!(render(&effect.frame("hello", 1, &mut rng)), "AAAAA");
        assert_eq!(render(&effect.frame("hello", 2, &mut rng)), "hello");
    }

    #[test]
    fn original_only_pool_draws_from_the_text() {
        let effect = ScrambleBurst { iterations: 1, pool: CharPool::OriginalOnly };
        let mut rng = || 0.999;
        // Sorted distinct pool for "cab" is [a, b, c]; the top of the range picks 'c'.
        assert_eq!(render(&effect.frame("cab", 0, &mut rng)), "ccc");
    }

    #[test]
    fn empty_pool_leaves_text_alone() {
        let effect = ScrambleBurst { iterations: 1, pool: CharPool::from_characters("") };
        let mut rng = || 0.3;
        assert_eq!(render(&effect.frame("abc", 0, &mut rng)), "abc");
    }
}
