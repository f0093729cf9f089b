//! Character-level corruption shared by the typo rules.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// One character-level edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypoOp {
    /// Swap the character with its right neighbour.
    Swap,
    /// Duplicate the character in place.
    Duplicate,
    /// Delete the character.
    Delete,
    /// Insert a random lowercase letter before the character.
    Insert,
    /// Replace the character with a random lowercase letter.
    Substitute,
}

/// Edit set used for place and email corruption.
pub const SCRAMBLE_OPS: &[TypoOp] = &[TypoOp::Swap, TypoOp::Duplicate, TypoOp::Delete, TypoOp::Insert];

/// Edit set used for person-name corruption.
pub const NAME_OPS: &[TypoOp] = &[TypoOp::Swap, TypoOp::Delete, TypoOp::Insert, TypoOp::Substitute];

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Applies one random edit at a random interior position of `word`.
///
/// Interior means neither the first nor the last character, so word
/// boundaries stay recognizable. Returns `None` for words too short to have
/// an interior position (fewer than 3 characters) and for the degenerate
/// case where the edit reproduces the input.
pub fn typo_once(word: &str, ops: &[TypoOp], rng: &mut ChaCha8Rng) -> Option<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 3 {
        return None;
    }

    // Positions 1..len-1; for Swap the partner is pos+1, which stays in range
    // because pos <= len-2.
    let pos = rng.gen_range(1..chars.len() - 1);
    let op = *ops.choose(rng)?;

    let mut edited = chars.clone();
    match op {
        TypoOp::Swap => edited.swap(pos, pos + 1),
        TypoOp::Duplicate => {
            let c = edited[pos];
            edited.insert(pos, c);
        }
        TypoOp::Delete => {
            edited.remove(pos);
        }
        TypoOp::Insert => edited.insert(pos, random_letter(rng)),
        TypoOp::Substitute => edited[pos] = random_letter(rng),
    }

    let varied: String = edited.into_iter().collect();
    if varied == word {
        return None;
    }
    Some(varied)
}

fn random_letter(rng: &mut ChaCha8Rng) -> char {
    LETTERS[rng.gen_range(0..LETTERS.len())] as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_short_words_are_left_alone() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(typo_once("ab", SCRAMBLE_OPS, &mut rng), None);
        assert_eq!(typo_once("", SCRAMBLE_OPS, &mut rng), None);
    }

    #[test]
    fn test_edit_changes_word() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..50 {
            if let Some(varied) = typo_once("Utrecht", SCRAMBLE_OPS, &mut rng) {
                assert_ne!(varied, "Utrecht");
            }
        }
    }

    #[test]
    fn test_edit_preserves_first_and_last_characters_except_swap_tail() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            if let Some(varied) = typo_once("Tallinn", NAME_OPS, &mut rng) {
                assert!(varied.starts_with('T'));
                // Length stays within one edit of the original.
                let diff = varied.chars().count() as i64 - 7;
                assert!((-1..=1).contains(&diff));
            }
        }
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let mut rng_a = ChaCha8Rng::seed_from_u64(9);
        let mut rng_b = ChaCha8Rng::seed_from_u64(9);
        assert_eq!(
            typo_once("Rotterdam", SCRAMBLE_OPS, &mut rng_a),
            typo_once("Rotterdam", SCRAMBLE_OPS, &mut rng_b)
        );
    }
}
