use std::collections::HashMap;

use minic_core::Location;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeclaredName {
    pub name: String,
    pub location: Location,
}

/// Names declared during one analysis run, in declaration order.
///
/// A name is never removed or replaced once inserted; inserting it again is refused so the
/// caller can report the redeclaration.
#[derive(Debug, Default, Clone, Serialize)]
pub struct DeclaredNameSet {
    names: Vec<DeclaredName>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl DeclaredNameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false`, leaving the set untouched, when `name` was already declared.
    pub fn insert(&mut self, name: &str, location: Location) -> bool {
        if self.index.contains_key(name) {
            return false;
        }

        self.index.insert(name.to_string(), self.names.len());
        self.names.push(DeclaredName {
            name: name.to_string(),
            location,
        });
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&DeclaredName> {
        self.index.get(name).map(|&index| &self.names[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeclaredName> {
        self.names.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|declared| declared.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_declaration() {
        let mut names = DeclaredNameSet::new();

        assert!(names.insert("x", Location::new(4, 5)));
        assert!(names.insert("y", Location::new(11, 12)));
        assert!(!names.insert("x", Location::new(20, 21)));

        assert_eq!(names.len(), 2);
        assert_eq!(names.get("x").map(|d| d.location), Some(Location::new(4, 5)));
        assert_eq!(names.names().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_membership() {
        let mut names = DeclaredNameSet::new();
        assert!(names.is_empty());
        assert!(!names.contains("A"));

        names.insert("A", Location::default());
        assert!(names.contains("A"));
        assert!(!names.contains("a"));
    }
}
