//! Per-search visited sets.
//!
//! A `VisitedSet` is the search-scoped half of a node: the graph keeps the
//! topology, the traversal owns one of these and nobody else touches it.
//! Storage is word-packed so a grid of a few thousand nodes clears in a
//! handful of stores.

/// A dense, word-packed visited set for a fixed node count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    bits: usize,
    words: Vec<usize>,
}

impl VisitedSet {
    /// Creates a set for `bits` nodes, all unvisited.
    pub fn new(bits: usize) -> Self {
        let word_bits = usize::BITS as usize;
        Self {
            bits,
            words: vec![0; bits.div_ceil(word_bits)],
        }
    }

    /// Number of nodes covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits
    }

    /// Returns `true` if the set covers no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Marks every node unvisited.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Returns whether `node` is currently marked.
    ///
    /// # Panics
    /// Panics if `node >= len()`.
    #[inline]
    pub fn is_visited(&self, node: usize) -> bool {
        assert!(node < self.bits, "node {node} out of bounds for {} nodes", self.bits);
        let (word, mask) = bit_word_mask(node);
        self.words[word] & mask != 0
    }

    /// Marks `node` and returns `true` iff it was previously unmarked.
    ///
    /// # Panics
    /// Panics if `node >= len()`.
    #[inline]
    pub fn try_visit(&mut self, node: usize) -> bool {
        assert!(node < self.bits, "node {node} out of bounds for {} nodes", self.bits);
        let (word, mask) = bit_word_mask(node);
        let prev = self.words[word];
        self.words[word] = prev | mask;
        prev & mask == 0
    }

    /// Clears the mark on `node`.
    ///
    /// # Panics
    /// Panics if `node >= len()`.
    #[inline]
    pub fn unvisit(&mut self, node: usize) {
        assert!(node < self.bits, "node {node} out of bounds for {} nodes", self.bits);
        let (word, mask) = bit_word_mask(node);
        self.words[word] &= !mask;
    }

    /// Number of marked nodes.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterates over marked node indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.bits).filter(move |&node| {
            let (word, mask) = bit_word_mask(node);
            self.words[word] & mask != 0
        })
    }
}

#[inline(always)]
fn bit_word_mask(bit: usize) -> (usize, usize) {
    let word_bits = usize::BITS as usize;
    (bit / word_bits, 1usize << (bit % word_bits))
}
