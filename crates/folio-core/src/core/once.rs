use crate::api::types::ElementId;

/// Tracks one-way transitions (`hidden -> revealed`, `unfilled -> filled`,
/// `pending -> loaded`) for a fixed set of elements.
#[derive(Debug, Clone, Default)]
pub struct OnceSet {
    done: Vec<bool>,
}

impl OnceSet {
    /// Track `len` elements, all in their initial state.
    pub fn new(len: usize) -> Self {
        Self { done: vec![false; len] }
    }

    /// Perform the transition for `id`. Returns `true` only the first time;
    /// ids outside the tracked range are ignored.
    pub fn mark(&mut self, id: ElementId) -> bool {
        match self.done.get_mut(id.index()) {
            Some(done) if !*done => {
                *done = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_marked(&self, id: ElementId) -> bool {
        self.done.get(id.index()).copied().unwrap_or(false)
    }

    /// Number of elements that have transitioned.
    pub fn marked(&self) -> usize {
        self.done.iter().filter(|d| **d).count()
    }

    pub fn len(&self) -> usize {
        self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }

    /// Whether every tracked element has transitioned.
    pub fn is_complete(&self) -> bool {
        self.done.iter().all(|d| *d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_once() {
        let mut set = OnceSet::new(2);
        assert!(set.mark(ElementId(1)));
        assert!(!set.mark(ElementId(1)));
        assert!(set.is_marked(ElementId(1)));
        assert!(!set.is_marked(ElementId(0)));
        assert_eq!(set.marked(), 1);
        assert!(!set.is_complete());
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut set = OnceSet::new(1);
        assert!(!set.mark(ElementId(5)));
        assert!(!set.is_marked(ElementId(5)));
        assert_eq!(set.marked(), 0);
    }

    #[test]
    fn empty_set_is_complete() {
        let set = OnceSet::new(0);
        assert!(set.is_empty());
        assert!(set.is_complete());
    }
}
