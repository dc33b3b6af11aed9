use std::collections::HashMap;
use std::fmt;
use std::io::Write;

/// Tree of the words visited by a single search.
///
/// Stored as a came-from map (child -> parent) plus ordered child lists for
/// rendering. A word joins the tree once: the first parent to discover it
/// owns it and later discoveries are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTree {
    root: String,
    parents: HashMap<String, String>,
    children: HashMap<String, Vec<String>>,
}

impl SearchTree {
    pub fn new(root: &str) -> Self {
        Self {
            root: root.to_string(),
            parents: HashMap::new(),
            children: HashMap::new(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Returns `true` if the word has already been discovered.
    pub fn contains(&self, word: &str) -> bool {
        word == self.root || self.parents.contains_key(word)
    }

    /// Records `child` as discovered from `parent`.
    ///
    /// Returns `false` (and leaves the tree untouched) if `child` is already
    /// in the tree.
    pub fn insert(&mut self, parent: &str, child: &str) -> bool {
        if self.contains(child) {
            return false;
        }
        self.parents.insert(child.to_string(), parent.to_string());
        self.children
            .entry(parent.to_string())
            .or_default()
            .push(child.to_string());
        true
    }

    /// The word `word` was discovered from, `None` for the root or unknown words.
    pub fn parent_of(&self, word: &str) -> Option<&str> {
        self.parents.get(word).map(String::as_str)
    }

    /// Children of `word` in discovery order.
    pub fn children_of(&self, word: &str) -> &[String] {
        self.children
            .get(word)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of words in the tree, root included.
    pub fn len(&self) -> usize {
        self.parents.len() + 1
    }

    /// A tree always holds at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Walks parent links from `word` back to the root and returns the path
    /// in root-to-word order.
    pub fn path_to(&self, word: &str) -> Option<Vec<String>> {
        if !self.contains(word) {
            return None;
        }
        let mut path = vec![word.to_string()];
        let mut current = word;
        while let Some(parent) = self.parent_of(current) {
            path.push(parent.to_string());
            current = parent;
        }
        path.reverse();
        Some(path)
    }

    /// Number of steps from the root to `word`.
    pub fn depth_of(&self, word: &str) -> Option<usize> {
        self.path_to(word).map(|path| path.len() - 1)
    }

    /// Writes the indented tree to `writer`.
    pub fn render(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        write!(writer, "{}", self)
    }
}

impl fmt::Display for SearchTree {
    /// One word per line, children indented two spaces below their parent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(&str, usize)> = vec![(self.root.as_str(), 0)];
        while let Some((word, level)) = stack.pop() {
            writeln!(f, "{:indent$}{}", "", word, indent = level * 2)?;
            // Reverse so the first discovered child is printed first.
            for child in self.children_of(word).iter().rev() {
                stack.push((child.as_str(), level + 1));
            }
        }
        Ok(())
    }
}
