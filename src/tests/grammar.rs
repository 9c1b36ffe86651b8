use crate::{
    automaton::Acceptor,
    grammar::RightLinearGrammar,
    tests::words,
};

fn load_text(path: &str) -> RightLinearGrammar {
    RightLinearGrammar::builder().text_grammar(path).unwrap().build().unwrap()
}

#[test]
fn test_ab_star_scenario() {
    let grammar = load_text("test-data/grammars/ab_star.txt");
    let nfa = grammar.to_nfa().unwrap();

    assert!(nfa.accepts("").unwrap());
    assert!(nfa.accepts("ab").unwrap());
    assert!(!nfa.accepts("a").unwrap());
    assert!(!nfa.accepts("aba").unwrap());

    let dfa = nfa.eliminate_epsilon().determinize().unwrap();

    for w in words(&['a', 'b'], 6) {
        let expected = w.len() % 2 == 0 && w.as_bytes().chunks(2).all(|pair| pair == b"ab");
        assert_eq!(dfa.accepts(&w).unwrap(), expected, "word {:?}", w);
    }
}

#[test]
fn test_translation_soundness() {
    let grammars = [
        load_text("test-data/grammars/ab_star.txt"),
        load_text("test-data/grammars/identifiers.txt"),
        RightLinearGrammar::builder().json_grammar("test-data/grammars/ab_star.json").unwrap().build().unwrap(),
    ];

    for grammar in grammars {
        let alphabet: Vec<char> = grammar.terminals().iter().flat_map(|t| t.content().chars()).collect();
        let nfa = grammar.to_nfa().unwrap();
        let direct = grammar.to_epsilon_free_nfa().unwrap();

        for w in words(&alphabet, 5) {
            assert_eq!(grammar.generates(&w), nfa.accepts(&w).unwrap(), "word {:?}", w);
            assert_eq!(grammar.generates(&w), direct.accepts(&w).unwrap(), "word {:?}", w);
        }
    }
}

#[test]
fn test_json_and_text_agree() {
    let text = load_text("test-data/grammars/ab_star.txt").to_nfa().unwrap();
    let json = RightLinearGrammar::builder()
        .json_grammar("test-data/grammars/ab_star.json").unwrap()
        .build().unwrap()
        .to_nfa().unwrap();

    for w in words(&['a', 'b'], 6) {
        assert_eq!(text.accepts(&w).unwrap(), json.accepts(&w).unwrap(), "word {:?}", w);
    }
}
