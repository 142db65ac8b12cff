/// Estimates how many syllables a word has.
///
/// The pacing engine only needs a count, so any `Fn(&str) -> usize` is an
/// estimator as well; tests use that to pin exact durations.
pub trait SyllableEstimator {
    fn estimate(&self, word: &str) -> usize;
}

impl<F> SyllableEstimator for F
where
    F: Fn(&str) -> usize,
{
    fn estimate(&self, word: &str) -> usize {
        self(word)
    }
}

/// English heuristic: counts vowel groups, then corrects for the common
/// silent endings (`make`, `jumped`, `makes`) while keeping the voiced
/// `-le` (`table`).
///
/// Punctuation and digits are ignored; a word without letters has zero
/// syllables, any other word at least one.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicSyllables;

impl SyllableEstimator for HeuristicSyllables {
    fn estimate(&self, word: &str) -> usize {
        let letters: Vec<char> = word
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect();
        if letters.is_empty() {
            return 0;
        }

        let mut count = 0;
        let mut in_vowel_group = false;
        for &c in &letters {
            let vowel = is_vowel(c);
            if vowel && !in_vowel_group {
                count += 1;
            }
            in_vowel_group = vowel;
        }

        if has_silent_ending(&letters) {
            count -= 1;
        }
        count.max(1)
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

// Only called on endings whose final vowel group was counted on its own.
fn has_silent_ending(letters: &[char]) -> bool {
    let n = letters.len();
    if n < 3 {
        return false;
    }
    let last = letters[n - 1];
    let before = letters[n - 2];

    match (before, last) {
        // make, but not table
        (c, 'e') if !is_vowel(c) => !(c == 'l' && n > 3 && !is_vowel(letters[n - 3])),
        // jumped, but not wanted
        ('e', 'd') if n > 3 => {
            let stem = letters[n - 3];
            !is_vowel(stem) && stem != 't' && stem != 'd'
        }
        // makes, but not horses
        ('e', 's') if n > 3 => {
            let stem = letters[n - 3];
            !is_vowel(stem) && !matches!(stem, 's' | 'x' | 'z' | 'c' | 'g' | 'h')
        }
        _ => false,
    }
}
