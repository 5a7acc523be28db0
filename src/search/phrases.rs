/*
phrases.rs

Copyright 2025 Hervé Quatremain

This file is part of Idle Word Search.

Idle Word Search is free software: you can redistribute it and/or modify it
under the terms of the GNU General Public License as published by the Free
Software Foundation, either version 3 of the License, or (at your option) any
later version.

Idle Word Search is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Idle Word Search. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Things Nancy says.

use formatx::formatx;
use log::warn;
use rand::Rng;
use rand::seq::IndexedRandom;

/// The player found the word Nancy was looking for.
pub const FOUND_MY_WORD: &[&str] = &[
    "Thank you! 😊",
    "Thanks so much! 🎉",
    "You found it! 🌟",
    "Yay, that one was really tricky! 🎯",
    "Amazing! You're so helpful! 💖",
    "Wow, you're good at this! ⭐",
    "Perfect! I was having trouble with that one! 🎊",
];

/// The player found another word.
pub const FOUND_OTHER_WORD: &[&str] = &[
    "Thanks! 😄",
    "Thanks for helping! 💕",
    "Great job! 🌈",
    "Nice find! ✨",
    "You're so helpful! 🤗",
    "Awesome! 🎈",
];

/// Nancy misread a letter.
pub const OOPS_WRONG_MATCH: &[&str] = &[
    "Oops! That didn't match! 😅",
    "Oops! Not quite right! 🤔",
    "Hmm, that's not it! 😊",
];

/// Nancy skipped a word. `{word}` is replaced by the skipped word.
pub const SKIPPED_WORD: &[&str] = &[
    "Oops! Looks like I accidentally skipped \"{word}\"! 😮",
    "Oh no! I think I missed \"{word}\"! 🙈",
    "Whoops! I forgot about \"{word}\"! 😅",
];

/// Pick a random phrase from the pool.
pub fn pick<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Return a random "skipped word" phrase for the given word.
pub fn skipped_word<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let template: &str = pick(SKIPPED_WORD, rng);
    match formatx!(template.to_string(), word = word) {
        Ok(phrase) => phrase,
        Err(error) => {
            warn!("Cannot format the phrase {template:?}: {error:?}");
            format!("I skipped \"{word}\"!")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_pick_from_pool() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            assert!(FOUND_MY_WORD.contains(&pick(FOUND_MY_WORD, &mut rng)));
            assert!(OOPS_WRONG_MATCH.contains(&pick(OOPS_WRONG_MATCH, &mut rng)));
        }
        assert_eq!(pick(&[], &mut rng), "");
    }

    #[test]
    fn test_skipped_word_names_the_word() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let phrase = skipped_word("DRAGON", &mut rng);
            assert!(phrase.contains("\"DRAGON\""), "{phrase}");
            assert!(!phrase.contains("{word}"));
        }
    }
}
