use std::collections::HashMap;
use std::sync::LazyLock;

use minic_config::DeclarationMode;
use minic_core::{AnalysisError, Diagnostic, Diagnostics, Location};
use regex::{Match, Regex};

use crate::names::DeclaredNameSet;

static CLASS_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bclass\s+([a-zA-Z_][a-zA-Z0-9_]*)\b").expect("class pattern is a valid regex")
});

static VARIABLE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:int|float|String|double)\s+([a-zA-Z_][a-zA-Z0-9_]*)\b")
        .expect("declaration pattern is a valid regex")
});

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[a-zA-Z_][a-zA-Z0-9_]*\b").expect("identifier pattern is a valid regex")
});

pub const TYPE_KEYWORDS: [&str; 4] = ["int", "float", "String", "double"];

/// Words that are never treated as variable uses.
pub fn is_reserved(word: &str) -> bool {
    matches!(
        word,
        "public"
            | "private"
            | "protected"
            | "class"
            | "int"
            | "float"
            | "String"
            | "double"
            | "if"
            | "else"
            | "while"
            | "for"
            | "return"
            | "void"
            | "true"
            | "false"
            | "null"
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeclarationKind {
    Class,
    Variable,
}

#[derive(Debug)]
pub struct SemanticInfo {
    pub classes: DeclaredNameSet,
    pub variables: DeclaredNameSet,
    pub diagnostics: Vec<Diagnostic>,
}

/// Flat, line-oriented declaration-before-use check over a whole source file.
///
/// There are no scopes: every class and variable declared on any line is visible on every
/// following line. Each tracker starts from empty name sets.
#[derive(Debug)]
pub struct DeclarationTracker<'source> {
    content: &'source str,
    mode: DeclarationMode,
    classes: DeclaredNameSet,
    variables: DeclaredNameSet,
    diagnostics: Diagnostics,
}

impl<'source> DeclarationTracker<'source> {
    pub fn new(content: &'source str) -> Self {
        Self::with_mode(content, DeclarationMode::default())
    }

    pub fn with_mode(content: &'source str, mode: DeclarationMode) -> Self {
        Self {
            content,
            mode,
            classes: DeclaredNameSet::new(),
            variables: DeclaredNameSet::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn analyze(mut self) -> SemanticInfo {
        let content = self.content;
        let mut line_start = 0;

        for raw_line in content.split('\n') {
            let line = raw_line.trim_ascii();
            let offset = line_start + (raw_line.len() - raw_line.trim_ascii_start().len());

            match self.mode {
                DeclarationMode::LinePrefix => self.analyze_line(line, offset),
                DeclarationMode::Positional => self.analyze_line_positional(line, offset),
            }

            line_start += raw_line.len() + 1;
        }

        tracing::debug!(
            classes = self.classes.len(),
            variables = self.variables.len(),
            errors = self.diagnostics.len(),
            "semantic analysis finished"
        );

        SemanticInfo {
            classes: self.classes,
            variables: self.variables,
            diagnostics: self.diagnostics.items(),
        }
    }

    // Declarations are collected before uses are checked, so a use earlier on a line than the
    // declaration still counts as declared. Lines starting with a type keyword are not checked
    // for uses at all.
    fn analyze_line(&mut self, line: &str, offset: usize) {
        for name in declared_names(&CLASS_DECLARATION, line) {
            self.declare(DeclarationKind::Class, name.as_str(), location(name, offset));
        }

        for name in declared_names(&VARIABLE_DECLARATION, line) {
            self.declare(DeclarationKind::Variable, name.as_str(), location(name, offset));
        }

        if TYPE_KEYWORDS.iter().any(|keyword| line.starts_with(keyword)) {
            return;
        }

        for ident in IDENTIFIER.find_iter(line) {
            self.check_use(ident.as_str(), location(ident, offset));
        }
    }

    fn analyze_line_positional(&mut self, line: &str, offset: usize) {
        let mut declarations = HashMap::new();
        for name in declared_names(&CLASS_DECLARATION, line) {
            declarations.insert(name.start(), DeclarationKind::Class);
        }
        for name in declared_names(&VARIABLE_DECLARATION, line) {
            declarations.insert(name.start(), DeclarationKind::Variable);
        }

        for ident in IDENTIFIER.find_iter(line) {
            let found_at = location(ident, offset);
            match declarations.get(&ident.start()) {
                Some(&kind) => self.declare(kind, ident.as_str(), found_at),
                None => self.check_use(ident.as_str(), found_at),
            }
        }
    }

    fn declare(&mut self, kind: DeclarationKind, name: &str, location: Location) {
        tracing::trace!(?kind, name, "declaration");

        let names = match kind {
            DeclarationKind::Class => &mut self.classes,
            DeclarationKind::Variable => &mut self.variables,
        };

        if names.insert(name, location) {
            return;
        }

        let error = match kind {
            DeclarationKind::Class => AnalysisError::ClassRedeclared(name.into()),
            DeclarationKind::Variable => AnalysisError::VariableRedeclared(name.into()),
        };
        self.diagnostics.error(location, error);
    }

    fn check_use(&mut self, name: &str, location: Location) {
        if is_reserved(name) || self.classes.contains(name) || self.variables.contains(name) {
            return;
        }

        self.diagnostics
            .error(location, AnalysisError::UndeclaredVariable(name.into()));
    }
}

fn declared_names<'line>(
    pattern: &Regex,
    line: &'line str,
) -> impl Iterator<Item = Match<'line>> {
    pattern
        .captures_iter(line)
        .filter_map(|captures| captures.get(1))
}

fn location(found: Match<'_>, offset: usize) -> Location {
    Location::from(found.range()).shift(offset)
}
