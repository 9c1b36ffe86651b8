mod grammar;

/// Every word over `alphabet` up to length `max_len`, shortest first.
pub(crate) fn words(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut last = vec![String::new()];

    for _ in 0..max_len {
        last = last
            .iter()
            .flat_map(|prefix| alphabet.iter().map(move |c| format!("{}{}", prefix, c)))
            .collect();
        all.extend(last.iter().cloned());
    }

    all
}

#[test]
fn test_words() {
    let all = words(&['a', 'b'], 2);
    assert_eq!(all, vec!["", "a", "b", "aa", "ab", "ba", "bb"]);
}
