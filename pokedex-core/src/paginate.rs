//! Splitting long listings into chat-sized lines.
//!
//! Every chunk is rendered as `prefix + fragments.join(", ")`. Fragments are
//! never split or reordered, and every fragment appears in exactly one chunk.
//!
//! Two policies exist:
//! - [`Policy::MaxLength`] packs as many fragments as fit in the character
//!   budget. The trailing chunk is always emitted, even when it is the only
//!   one and holds no fragments, so the reader always gets the label line.
//! - [`Policy::Batch`] flushes after a fixed number of fragments. Empty input
//!   produces no chunks.
//!
//! A single fragment longer than the budget still gets a chunk of its own.

/// Separator placed between fragments.
pub const SEPARATOR: &str = ", ";

/// How fragments are grouped into chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Rendered chunk length, in characters, must not exceed this budget.
    MaxLength(usize),
    /// Flush after this many fragments.
    Batch(usize),
}

/// Groups fragments under a repeated label.
#[derive(Debug, Clone)]
pub struct Paginator {
    prefix: String,
    policy: Policy,
}

impl Paginator {
    /// Pack fragments up to `budget` characters per chunk.
    #[must_use]
    pub fn by_length(prefix: impl Into<String>, budget: usize) -> Self {
        Self {
            prefix: prefix.into(),
            policy: Policy::MaxLength(budget),
        }
    }

    /// Emit a chunk every `size` fragments.
    #[must_use]
    pub fn batched(prefix: impl Into<String>, size: usize) -> Self {
        Self {
            prefix: prefix.into(),
            policy: Policy::Batch(size.max(1)),
        }
    }

    /// The label repeated on every chunk.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Split `fragments` into rendered chunks.
    pub fn paginate<I, S>(&self, fragments: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.policy {
            Policy::MaxLength(budget) => self.by_budget(fragments, budget),
            Policy::Batch(size) => self.by_count(fragments, size),
        }
    }

    fn render(&self, chunk: &[String]) -> String {
        format!("{}{}", self.prefix, chunk.join(SEPARATOR))
    }

    fn by_budget<I, S>(&self, fragments: I, budget: usize) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefix_len = self.prefix.chars().count();
        let separator_len = SEPARATOR.chars().count();

        let mut chunks = Vec::new();
        let mut chunk: Vec<String> = Vec::new();
        let mut rendered = prefix_len;

        for fragment in fragments {
            let fragment = fragment.into();
            let fragment_len = fragment.chars().count();
            let mut added = if chunk.is_empty() {
                fragment_len
            } else {
                fragment_len + separator_len
            };
            if !chunk.is_empty() && rendered + added > budget {
                chunks.push(self.render(&chunk));
                chunk.clear();
                rendered = prefix_len;
                added = fragment_len;
            }
            rendered += added;
            chunk.push(fragment);
        }
        chunks.push(self.render(&chunk));
        chunks
    }

    fn by_count<I, S>(&self, fragments: I, size: usize) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut chunks = Vec::new();
        let mut chunk: Vec<String> = Vec::with_capacity(size);
        for fragment in fragments {
            chunk.push(fragment.into());
            if chunk.len() == size {
                chunks.push(self.render(&chunk));
                chunk.clear();
            }
        }
        if !chunk.is_empty() {
            chunks.push(self.render(&chunk));
        }
        chunks
    }
}
