// ============================================================
// Layer 4 — SST Provider
// ============================================================
// Stanford Sentiment Treebank, extracted layout:
//
//   {root}/sst/trees/train.txt
//   {root}/sst/trees/dev.txt
//   {root}/sst/trees/test.txt
//
// Every line is one bracketed parse tree:
//
//   (3 (2 It) (4 (4 (2 's) (4 lovely)) (2 .)))
//
// A sample's text is the tree's leaves joined by single spaces
// ("It 's lovely .") and its label comes from the ROOT node:
//
//   0 → negative (very negative when fine-grained)
//   1 → negative
//   2 → neutral
//   3 → positive
//   4 → positive (very positive when fine-grained)
//
// In the default (coarse) mode neutral sentences are dropped,
// leaving a binary task. Only whole sentences are returned,
// never subtrees.

use std::path::{Path, PathBuf};

use crate::data::dataset::RawSplit;
use crate::data::providers::read_text;
use crate::domain::error::{ReaderError, ReaderResult};
use crate::domain::sample::Sample;
use crate::domain::traits::DatasetProvider;

const SPLITS: [&str; 3] = ["train", "dev", "test"];

#[derive(Debug, Default, Clone)]
pub struct SstProvider {
    fine_grained: bool,
}

impl SstProvider {
    /// Coarse labels, neutral sentences dropped.
    pub fn new() -> Self {
        Self { fine_grained: false }
    }

    /// Five labels, neutral sentences kept.
    pub fn fine_grained() -> Self {
        Self { fine_grained: true }
    }

    fn trees_dir(root: &Path) -> PathBuf {
        root.join("sst").join("trees")
    }

    fn label_name(&self, raw: &str) -> Option<&'static str> {
        let name = match (raw, self.fine_grained) {
            ("0", true)  => "very negative",
            ("0", false) => "negative",
            ("1", _)     => "negative",
            ("2", _)     => "neutral",
            ("3", _)     => "positive",
            ("4", true)  => "very positive",
            ("4", false) => "positive",
            _            => return None,
        };
        Some(name)
    }

    fn read_split(&self, path: &Path) -> ReaderResult<RawSplit> {
        let content     = read_text(path)?;
        let mut samples = Vec::new();
        let mut dropped = 0usize;

        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let tree = parse_tree(line)
                .map_err(|reason| ReaderError::malformed(path, idx + 1, reason))?;

            let label = self.label_name(&tree.label).ok_or_else(|| {
                ReaderError::malformed(path, idx + 1, format!("unknown sentiment label `{}`", tree.label))
            })?;

            if !self.fine_grained && label == "neutral" {
                dropped += 1;
                continue;
            }

            samples.push(Sample::new(tree.leaves.join(" "), label));
        }

        tracing::debug!(
            "SST: {} sentences from '{}' ({} neutral dropped)",
            samples.len(),
            path.display(),
            dropped
        );
        Ok(RawSplit::new(samples))
    }
}

impl DatasetProvider for SstProvider {
    fn name(&self) -> &str { "SST" }

    fn split_names(&self) -> &[&'static str] { &SPLITS }

    fn splits(&self, root: &Path) -> ReaderResult<Vec<RawSplit>> {
        let dir = Self::trees_dir(root);
        SPLITS
            .iter()
            .map(|split| self.read_split(&dir.join(format!("{split}.txt"))))
            .collect()
    }
}

// ─── Tree Parsing ─────────────────────────────────────────────────────────────
// Only what the provider needs: the root label and the leaves
// in left-to-right order. An atom directly after "(" is a node
// label, every other atom is a leaf.

#[derive(Debug, PartialEq)]
struct ParsedTree {
    label:  String,
    leaves: Vec<String>,
}

#[derive(Debug, PartialEq)]
enum Token<'a> {
    Open,
    Close,
    Atom(&'a str),
}

fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in line.char_indices() {
        let boundary = c == '(' || c == ')' || c.is_whitespace();
        if boundary {
            if let Some(s) = start.take() {
                tokens.push(Token::Atom(&line[s..i]));
            }
            match c {
                '(' => tokens.push(Token::Open),
                ')' => tokens.push(Token::Close),
                _   => {}
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(Token::Atom(&line[s..]));
    }
    tokens
}

fn parse_tree(line: &str) -> Result<ParsedTree, String> {
    let tokens = tokenize(line);

    if tokens.first() != Some(&Token::Open) {
        return Err("tree must start with `(`".to_string());
    }

    let label = match tokens.get(1) {
        Some(Token::Atom(l)) => l.to_string(),
        _                    => return Err("root node has no label".to_string()),
    };

    let mut depth       = 0usize;
    let mut leaves      = Vec::new();
    let mut after_open  = false;

    for (i, tok) in tokens.iter().enumerate() {
        // Anything after the root closed is an error
        if depth == 0 && i > 0 {
            return Err("unexpected content after the root node".to_string());
        }
        match tok {
            Token::Open => {
                depth += 1;
                after_open = true;
            }
            Token::Close => {
                if after_open {
                    return Err("empty node".to_string());
                }
                depth -= 1;
            }
            Token::Atom(a) => {
                if !after_open {
                    leaves.push(a.to_string());
                }
                after_open = false;
            }
        }
    }

    if depth != 0 {
        return Err("unbalanced parentheses".to_string());
    }

    Ok(ParsedTree { label, leaves })
}
