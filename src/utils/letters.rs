use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Letter values similar to Scrabble scoring. Board tiles are lowercase.
pub static LETTER_VALUES: Lazy<HashMap<char, u8>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // 1 point letters
    for ch in ['a', 'e', 'i', 'o', 'u', 'l', 'n', 'r', 's', 't'] {
        map.insert(ch, 1);
    }

    // 2 points
    for ch in ['d', 'g'] {
        map.insert(ch, 2);
    }

    // 3 points
    for ch in ['b', 'c', 'm', 'p'] {
        map.insert(ch, 3);
    }

    // 4 points
    for ch in ['f', 'h', 'v', 'w', 'y'] {
        map.insert(ch, 4);
    }

    // 5 points
    map.insert('k', 5);

    // 8 points
    for ch in ['j', 'x'] {
        map.insert(ch, 8);
    }

    // 10 points
    for ch in ['q', 'z'] {
        map.insert(ch, 10);
    }

    map
});

/// Letter frequency distribution for English (approximate).
/// Used for weighted random board generation.
pub static LETTER_DISTRIBUTION: Lazy<Vec<(char, f32)>> = Lazy::new(|| {
    vec![
        ('e', 12.70),
        ('t', 9.05),
        ('a', 8.16),
        ('o', 7.50),
        ('i', 6.96),
        ('n', 6.74),
        ('s', 6.32),
        ('h', 6.09),
        ('r', 5.98),
        ('d', 4.25),
        ('l', 4.02),
        ('c', 2.78),
        ('u', 2.75),
        ('m', 2.40),
        ('w', 2.36),
        ('f', 2.22),
        ('g', 2.01),
        ('y', 1.97),
        ('p', 1.92),
        ('b', 1.49),
        ('v', 0.97),
        ('k', 0.77),
        ('j', 0.15),
        ('x', 0.15),
        ('q', 0.09),
        ('z', 0.07),
    ]
});

/// Get the point value for a letter, or `None` for anything that is not a
/// recognized lowercase board letter.
pub fn letter_value(letter: char) -> Option<u8> {
    LETTER_VALUES.get(&letter.to_ascii_lowercase()).copied()
}

/// Calculate the cumulative distribution for weighted random selection
pub fn cumulative_distribution() -> Vec<(char, f32)> {
    let mut cumulative = 0.0;
    LETTER_DISTRIBUTION
        .iter()
        .map(|(ch, freq)| {
            cumulative += freq;
            (*ch, cumulative)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_values() {
        assert_eq!(letter_value('e'), Some(1));
        assert_eq!(letter_value('c'), Some(3));
        assert_eq!(letter_value('q'), Some(10));
        assert_eq!(letter_value('x'), Some(8));
        assert_eq!(letter_value('D'), Some(2));
    }

    #[test]
    fn test_unknown_letters_have_no_value() {
        assert_eq!(letter_value('é'), None);
        assert_eq!(letter_value('3'), None);
        assert_eq!(letter_value(' '), None);
    }

    #[test]
    fn test_cumulative_distribution() {
        let dist = cumulative_distribution();
        assert!(dist.len() == 26);
        // Last entry should be close to 100%
        assert!((dist.last().unwrap().1 - 100.0).abs() < 1.0);
    }
}
