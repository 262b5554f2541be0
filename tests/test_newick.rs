use newick_tree::newick::{NewickParser, render_into};
use newick_tree::{MalformedTreeErrorType, Tree, parse, render};
use rstest::rstest;

// --- TESTS NEWICK STRING PARSING ---
#[test]
fn test_parse_nested_tree() {
    let tree = parse("(A,(B,C))").unwrap();
    assert_eq!(
        tree,
        Tree::node(vec![
            Tree::leaf("A"),
            Tree::node(vec![Tree::leaf("B"), Tree::leaf("C")]),
        ])
    );
    assert_eq!(render(&tree), "(A,(B,C))");
}

#[test]
fn test_parse_single_leaf() {
    assert_eq!(parse("A").unwrap(), Tree::leaf("A"));
    assert_eq!(parse("  Apteryx_haastii \n").unwrap(), Tree::leaf("Apteryx_haastii"));
}

#[test]
fn test_parse_ignores_whitespace_and_commas() {
    let compact = parse("(A,(B,C))").unwrap();
    let spaced = parse("( A ,\n\t( B , C ) )").unwrap();
    assert_eq!(compact, spaced);
}

#[test]
fn test_parse_multifurcation_keeps_child_order() {
    let tree = parse("(Kiwi,Moa,Emu,Rhea,Ostrich)").unwrap();
    let names: Vec<&str> = tree.leaf_names().collect();
    assert_eq!(names, ["Kiwi", "Moa", "Emu", "Rhea", "Ostrich"]);
    assert_ne!(tree, parse("(Moa,Kiwi,Emu,Rhea,Ostrich)").unwrap());
}

#[test]
fn test_parse_empty_and_unary_nodes() {
    assert_eq!(parse("()").unwrap(), Tree::node(vec![]));
    assert_eq!(parse("((A))").unwrap(), Tree::node(vec![Tree::node(vec![Tree::leaf("A")])]));
    assert_eq!(render(&parse("(A,())").unwrap()), "(A,())");
}

#[test]
fn test_parse_drops_unsupported_characters() {
    // Branch lengths and the terminating semicolon are skipped,
    // digits of branch lengths however form labels
    let tree = parse("(A;B)").unwrap();
    assert_eq!(render(&tree), "(A,B)");
    let tree = parse("(A:1,B:2)").unwrap();
    assert_eq!(render(&tree), "(A,1,B,2)");
}

#[test]
fn test_parse_via_from_str() {
    let tree: Tree = "((A,B),C)".parse().unwrap();
    assert_eq!(tree.num_leaves(), 3);
    assert!("(A,B))".parse::<Tree>().is_err());
}

#[test]
fn test_parse_deep_caterpillar() {
    let depth = 1_000;
    let mut newick = "(".repeat(depth);
    newick.push_str("A,B");
    for _ in 0..depth {
        newick.push_str(",C)");
    }
    let tree = parse(&newick).unwrap();
    assert_eq!(tree.num_leaves(), depth + 2);
    assert_eq!(tree.height(), depth);
    assert_eq!(render(&tree), newick);
}

#[test]
fn test_parse_and_drop_deeply_nested_tree() {
    let depth = 200_000;
    let newick = format!("{}A{}", "(".repeat(depth), ")".repeat(depth));
    let tree = parse(&newick).unwrap();
    assert_eq!(tree.height(), depth);
    assert_eq!(tree.leaf_names().collect::<Vec<_>>(), ["A"]);
    drop(tree);
}

#[test]
fn test_deeply_nested_tree_with_second_root_is_rejected() {
    let depth = 200_000;
    let newick = format!("{}A{} B", "(".repeat(depth), ")".repeat(depth));
    let err = parse(&newick).unwrap_err();
    assert_eq!(err.kind(), &MalformedTreeErrorType::UnbalancedOrMultipleRoots);
    assert_eq!(err.position(), newick.len() - 1);
}

// --- TESTS MALFORMED INPUT ---
#[rstest]
#[case("(A,B))", MalformedTreeErrorType::UnmatchedCloseParen, 5)]
#[case(")", MalformedTreeErrorType::UnmatchedCloseParen, 0)]
#[case("A)", MalformedTreeErrorType::UnmatchedCloseParen, 1)]
#[case("", MalformedTreeErrorType::EmptyInput, 0)]
#[case(" ,;\n", MalformedTreeErrorType::EmptyInput, 0)]
#[case("A B", MalformedTreeErrorType::UnbalancedOrMultipleRoots, 2)]
#[case("(A,B)(C,D)", MalformedTreeErrorType::UnbalancedOrMultipleRoots, 5)]
#[case("(A,B", MalformedTreeErrorType::UnbalancedOrMultipleRoots, 0)]
#[case("(", MalformedTreeErrorType::UnbalancedOrMultipleRoots, 0)]
#[case("((A,(B,C)", MalformedTreeErrorType::UnbalancedOrMultipleRoots, 1)]
fn test_malformed_input(
    #[case] newick: &str,
    #[case] expected: MalformedTreeErrorType,
    #[case] position: usize,
) {
    let err = parse(newick).unwrap_err();
    assert_eq!(err.kind(), &expected, "kind for {newick:?}");
    assert_eq!(err.position(), position, "position for {newick:?}");
}

#[test]
fn test_error_message_is_human_readable() {
    let err = parse("(A,B))").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("unmatched close paren"));
    assert!(msg.contains("position 5"));

    let err = parse("").unwrap_err();
    assert!(err.to_string().contains("empty input"));

    let err = parse("(A,B").unwrap_err();
    assert!(err.to_string().contains("unbalanced or multiple roots"));
    assert_eq!(err.context(), "(A,B");
}

#[test]
fn test_error_is_std_error() {
    fn parse_boxed(newick: &str) -> Result<Tree, Box<dyn std::error::Error>> {
        Ok(parse(newick)?)
    }
    assert!(parse_boxed("(A,B)").is_ok());
    assert!(parse_boxed(")(").is_err());
}

// --- TESTS PARSER CONFIGURATION ---
#[test]
fn test_default_parser_configuration() {
    let parser = NewickParser::default();
    assert_eq!(parser, NewickParser::new());
    assert_eq!(parser.max_depth(), None);
    assert!(!parser.is_strict());
}

#[test]
fn test_max_depth() {
    let parser = NewickParser::new().with_max_depth(1);
    assert_eq!(parser.max_depth(), Some(1));
    assert!(parser.parse_str("A").is_ok());
    assert!(parser.parse_str("(A,B,C)").is_ok());
    assert!(parser.parse_str("((A,B),(C,D))").is_err());

    let err = parser.parse_str("(A,(B,C))").unwrap_err();
    assert_eq!(err.kind(), &MalformedTreeErrorType::DepthLimitExceeded(1));
    assert_eq!(err.position(), 3);

    let parser = NewickParser::new().with_max_depth(0);
    assert!(parser.parse_str("Tui").is_ok());
    assert!(parser.parse_str("()").is_err());
}

#[test]
fn test_strict_separators() {
    let parser = NewickParser::new().with_strict_separators();
    assert!(parser.is_strict());
    assert_eq!(parser.parse_str("( A,\n(B, C) )").unwrap(), parse("(A,(B,C))").unwrap());

    let err = parser.parse_str("(A:1.5,B)").unwrap_err();
    assert_eq!(err.kind(), &MalformedTreeErrorType::UnexpectedCharacter(':'));
    assert_eq!(err.position(), 2);

    let err = parser.parse_str("(A,B);").unwrap_err();
    assert_eq!(err.kind(), &MalformedTreeErrorType::UnexpectedCharacter(';'));

    // Structural checks still apply
    let err = parser.parse_str("(A,B))").unwrap_err();
    assert_eq!(err.kind(), &MalformedTreeErrorType::UnmatchedCloseParen);
}

// --- TESTS RENDERING ---
#[test]
fn test_render() {
    assert_eq!(render(&Tree::leaf("A")), "A");
    assert_eq!(render(&Tree::node(vec![])), "()");
    let tree = Tree::node(vec![
        Tree::node(vec![Tree::leaf("A"), Tree::leaf("B"), Tree::leaf("C")]),
        Tree::leaf("D"),
    ]);
    assert_eq!(render(&tree), "((A,B,C),D)");
    assert_eq!(tree.to_string(), "((A,B,C),D)");
}

#[test]
fn test_render_several_trees_into_one_buffer() {
    let trees = ["(A,B)", "((A,B),C)", "(A,(B,C))"].map(|s| parse(s).unwrap());
    let mut buffer = String::new();
    for tree in &trees {
        render_into(tree, &mut buffer);
        buffer.push('\n');
    }
    assert_eq!(buffer, "(A,B)\n((A,B),C)\n(A,(B,C))\n");
}

#[rstest]
#[case("( A , ( B , C ) )", "(A,(B,C))")]
#[case("(\n  Moa,\n  (Kiwi, Emu)\n)\n", "(Moa,(Kiwi,Emu))")]
#[case("(A,,B)", "(A,B)")]
#[case("Kea", "Kea")]
fn test_round_trip_normalizes_formatting(#[case] newick: &str, #[case] canonical: &str) {
    assert_eq!(render(&parse(newick).unwrap()), canonical);
}
