use minic_core::{AnalysisResult, Diagnostic, Stage};

use crate::pipeline::StageReport;

pub const SYNTAX_PASSED: &str = "Syntax analysis passed.";
pub const SEMANTIC_PASSED: &str = "Semantic analysis passed. All variables are declared and used correctly.";

/// Turns stage reports into the text shown to the user.
#[derive(Debug)]
pub struct Renderer<'src> {
    source: &'src str,
    show_locations: bool,
}

impl<'src> Renderer<'src> {
    pub fn new(source: &'src str, show_locations: bool) -> Self {
        Self {
            source,
            show_locations,
        }
    }

    pub fn render(&self, report: &StageReport) -> String {
        match (&report.result, report.stage) {
            (AnalysisResult::Pass(tokens), Stage::Lexical) => {
                format!("Tokens:\n{}", tokens.join(", "))
            }
            (AnalysisResult::Pass(_), Stage::Syntax) => SYNTAX_PASSED.to_string(),
            (AnalysisResult::Pass(_), Stage::Semantic) => SEMANTIC_PASSED.to_string(),
            (AnalysisResult::Fail(diagnostics), _) => diagnostics
                .iter()
                .map(|diagnostic| self.render_diagnostic(diagnostic))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    fn render_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        match self.show_locations {
            true => format!("{}: {diagnostic}", diagnostic.location.position(self.source)),
            false => diagnostic.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use minic_config::DeclarationMode;

    use super::*;
    use crate::pipeline::Session;

    fn render_all(source: &str, show_locations: bool) -> String {
        let mut session = Session::new(DeclarationMode::default());
        session.load(source);
        let renderer = Renderer::new(source, show_locations);

        session
            .run_through(Stage::Semantic)
            .unwrap()
            .iter()
            .map(|report| renderer.render(report))
            .collect::<Vec<_>>()
            .join("\n--\n")
    }

    #[test]
    fn test_render_passing_program() {
        insta::assert_snapshot!(render_all("class A { int x; x = 5; }", false), @r"
        Tokens:
        class, A, {, int, x, ;, x, =, 5, ;, }
        --
        Syntax analysis passed.
        --
        Semantic analysis passed. All variables are declared and used correctly.
        ");
    }

    #[test]
    fn test_render_empty_token_list() {
        let rendered = render_all("", false);
        assert!(rendered.starts_with("Tokens:\n\n--\n"));
        assert!(rendered.ends_with(SEMANTIC_PASSED));
    }

    #[test]
    fn test_render_lexical_failure() {
        insta::assert_snapshot!(
            render_all("int x = 1 @ 2;", false),
            @"Lexical error: Unrecognized token(s) found"
        );
    }

    #[test]
    fn test_render_semantic_failures_with_locations() {
        let source = "int x;\n  y = z + x;";
        insta::assert_snapshot!(render_all(source, true), @r"
        Tokens:
        int, x, ;, y, =, z, +, x, ;
        --
        Syntax analysis passed.
        --
        2:3: Semantic error: Variable 'y' is used without being declared.
        2:7: Semantic error: Variable 'z' is used without being declared.
        ");
    }

    #[test]
    fn test_render_syntax_failure_with_location() {
        insta::assert_snapshot!(render_all("int x;\nx = (1 + 2));", true), @r"
        Tokens:
        int, x, ;, x, =, (, 1, +, 2, ), ), ;
        --
        2:12: Syntax error: Unmatched closing parenthesis
        ");
    }
}
