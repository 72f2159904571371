//! Radix trie over word-form bytes

use crate::analysis::Reading;

/// Node identifier into the flat node table.
type NodeId = u32;

/// Lemma stored as instructions relative to the word form: drop `cut`
/// trailing bytes of the form, then append `suffix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EncodedReading {
    cut: u32,
    suffix: Box<str>,
    tag: Box<str>,
}

impl EncodedReading {
    pub(crate) fn encode(form: &str, lemma: &str, tag: &str) -> Self {
        let common = form
            .as_bytes()
            .iter()
            .zip(lemma.as_bytes())
            .take_while(|(a, b)| a == b)
            .count();
        // Keep the boundary on a UTF-8 character edge
        let common = (0..=common)
            .rev()
            .find(|&i| form.is_char_boundary(i) && lemma.is_char_boundary(i))
            .unwrap_or(0);
        Self {
            cut: (form.len() - common) as u32,
            suffix: lemma[common..].into(),
            tag: tag.into(),
        }
    }

    pub(crate) fn decode(&self, form: &str) -> Reading {
        let keep = form.len().saturating_sub(self.cut as usize);
        let mut lemma = String::with_capacity(keep + self.suffix.len());
        lemma.push_str(&form[..keep]);
        lemma.push_str(&self.suffix);
        Reading::new(lemma, self.tag.as_ref())
    }
}

/// One radix-trie node: the edge label leading to it, its children and
/// the readings of the form terminating here (empty for interior nodes).
#[derive(Debug, Clone, Default)]
struct Node {
    label: Box<[u8]>,
    children: Vec<NodeId>,
    readings: Vec<EncodedReading>,
    terminal: bool,
}

/// Prefix-compressed trie over word forms, nodes held in one flat table.
#[derive(Debug, Clone)]
pub(crate) struct Trie {
    nodes: Vec<Node>,
    form_count: usize,
}

impl Trie {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            form_count: 0,
        }
    }

    pub(crate) fn form_count(&self) -> usize {
        self.form_count
    }

    /// Readings of the exact form, or `None` if the form is absent.
    pub(crate) fn readings(&self, form: &str) -> Option<&[EncodedReading]> {
        let mut node = 0usize;
        let mut rest = form.as_bytes();
        loop {
            if rest.is_empty() {
                let n = &self.nodes[node];
                return n.terminal.then_some(n.readings.as_slice());
            }
            let next = self.nodes[node]
                .children
                .iter()
                .copied()
                .find(|&c| rest.starts_with(&self.nodes[c as usize].label))?;
            rest = &rest[self.nodes[next as usize].label.len()..];
            node = next as usize;
        }
    }

    /// Insert a form with one encoded reading, splitting edges as needed.
    pub(crate) fn insert(&mut self, form: &str, reading: EncodedReading) {
        let mut node = 0usize;
        let mut rest = form.as_bytes();
        loop {
            if rest.is_empty() {
                let n = &mut self.nodes[node];
                if !n.terminal {
                    n.terminal = true;
                    self.form_count += 1;
                }
                let n = &mut self.nodes[node];
                if !n.readings.contains(&reading) {
                    n.readings.push(reading);
                }
                return;
            }

            let matched = self.nodes[node].children.iter().copied().find_map(|c| {
                let label = &self.nodes[c as usize].label;
                let shared = label.iter().zip(rest.iter()).take_while(|(a, b)| a == b).count();
                (shared > 0).then_some((c, shared))
            });

            match matched {
                None => {
                    let leaf = self.push_node(Node {
                        label: rest.into(),
                        children: Vec::new(),
                        readings: vec![reading],
                        terminal: true,
                    });
                    self.nodes[node].children.push(leaf);
                    self.form_count += 1;
                    return;
                }
                Some((child, shared)) if shared == self.nodes[child as usize].label.len() => {
                    rest = &rest[shared..];
                    node = child as usize;
                }
                Some((child, shared)) => {
                    let middle = self.split_edge(node, child, shared);
                    rest = &rest[shared..];
                    node = middle as usize;
                }
            }
        }
    }

    fn split_edge(&mut self, parent: usize, child: NodeId, shared: usize) -> NodeId {
        let old_label = std::mem::take(&mut self.nodes[child as usize].label);
        let (head, tail) = old_label.split_at(shared);
        let middle = self.push_node(Node {
            label: head.into(),
            children: vec![child],
            readings: Vec::new(),
            terminal: false,
        });
        self.nodes[child as usize].label = tail.into();
        let slot = self.nodes[parent]
            .children
            .iter()
            .position(|&c| c == child)
            .expect("child must be linked to parent");
        self.nodes[parent].children[slot] = middle;
        middle
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        id
    }
}
