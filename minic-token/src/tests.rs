use minic_core::{AnalysisError, AnalysisResult, Location};

use crate::{Lexer, LiteralKind, Token, TokenKind, tokenize};

fn lexemes<'src>(tokens: &[Token<'src>]) -> Vec<&'src str> {
    tokens.iter().map(|token| token.lexeme).collect()
}

fn render(content: &str) -> String {
    let tokens = Lexer::new(content)
        .map(|token| format!("{:?} {}", token.kind, token.lexeme))
        .collect::<Vec<_>>();
    tokens.join("\n")
}

#[test]
fn test_declaration_with_float_literal() {
    let template = "int x = 3.14;";
    insta::assert_snapshot!(render(template), @r"
    Keyword int
    Identifier x
    Operator =
    Literal(Float) 3.14
    Separator ;
    ");
}

#[test]
fn test_string_literal_is_a_single_token() {
    let template = r#"String s = "hi there";"#;
    let result = tokenize(template);

    let Some(tokens) = result.payload() else { panic!("expected lexical pass") };
    assert_eq!(lexemes(tokens), vec!["String", "s", "=", "\"hi there\"", ";"]);
    assert_eq!(tokens[3].kind, TokenKind::Literal(LiteralKind::String));
}

#[test]
fn test_keyword_prefix_is_an_identifier() {
    let tokens = Lexer::new("integer").collect::<Vec<_>>();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);

    let tokens = Lexer::new("while").collect::<Vec<_>>();
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
}

#[test]
fn test_every_operator_and_separator() {
    let template = "+ - * / = < > ! & | ; ( ) { }";
    let tokens = Lexer::new(template).collect::<Vec<_>>();

    assert_eq!(tokens.len(), 15);
    assert!(tokens[..10].iter().all(|t| t.kind == TokenKind::Operator));
    assert!(tokens[10..].iter().all(|t| t.kind == TokenKind::Separator));
}

#[test]
fn test_whitespace_separated_token_count() {
    let template = "if ( x > 10 ) { return x ; } else { y = 2.5 ; }";
    let result = tokenize(template);

    let expected = template.split_whitespace().count();
    assert_eq!(result.payload().map(Vec::len), Some(expected));
}

#[test]
fn test_adjacent_tokens_without_whitespace() {
    let result = tokenize("x=y+1;");
    let Some(tokens) = result.payload() else { panic!("expected lexical pass") };
    assert_eq!(lexemes(tokens), vec!["x", "=", "y", "+", "1", ";"]);
}

#[test]
fn test_empty_and_whitespace_sources_pass() {
    assert_eq!(tokenize(""), AnalysisResult::Pass(vec![]));
    assert_eq!(tokenize("  \n\t  \n"), AnalysisResult::Pass(vec![]));
}

#[test]
fn test_unrecognized_character_fails() {
    for template in ["int x @ 1;", "#include", "a.b", "x = 3.;"] {
        let result = tokenize(template);
        assert_eq!(
            result.messages(),
            vec!["Lexical error: Unrecognized token(s) found"],
            "{template}"
        );
    }
}

#[test]
fn test_single_diagnostic_points_at_first_run() {
    let template = "x @ y # z";
    let result = tokenize(template);

    assert_eq!(result.diagnostics().len(), 1);
    assert_eq!(result.diagnostics()[0].error, AnalysisError::UnrecognizedTokens);
    assert_eq!(result.diagnostics()[0].location, Location::new(2, 3));

    let mut lexer = Lexer::new(template);
    lexer.by_ref().for_each(drop);
    assert_eq!(lexer.unrecognized(), &[Location::new(2, 3), Location::new(6, 7)]);
}

#[test]
fn test_trailing_run_is_recorded() {
    let mut lexer = Lexer::new("x;  ??  ");
    assert_eq!(lexer.by_ref().count(), 2);
    assert_eq!(lexer.unrecognized(), &[Location::new(4, 6)]);
}

#[test]
fn test_lexer_is_lazy() {
    let mut lexer = Lexer::new("return 1; @");
    let first = lexer.next().expect("first token");

    assert_eq!(first.lexeme, "return");
    assert_eq!(first.location, Location::new(0, 6));
    assert!(lexer.unrecognized().is_empty());
}

#[test]
fn test_digits_glued_to_letters_are_unrecognized() {
    let mut lexer = Lexer::new("12abc");
    assert_eq!(lexer.by_ref().count(), 0);
    assert_eq!(lexer.unrecognized(), &[Location::new(0, 5)]);
}

#[test]
fn test_tokens_serialize_with_locations() {
    let tokens = Lexer::new("int x").collect::<Vec<_>>();
    insta::assert_yaml_snapshot!(tokens, @r"
    - kind: Keyword
      lexeme: int
      location:
        start_byte: 0
        end_byte: 3
    - kind: Identifier
      lexeme: x
      location:
        start_byte: 4
        end_byte: 5
    ");
}

#[test]
fn test_only_ascii_whitespace_separates_tokens() {
    assert_eq!(
        tokenize("int x;\u{00A0}").messages(),
        vec!["Lexical error: Unrecognized token(s) found"]
    );

    let result = tokenize("int\u{3000}x;");
    assert_eq!(result.diagnostics()[0].location, Location::new(3, 6));

    assert!(tokenize("int\tx;\r\n\x0Cy;").is_pass());
}
