//! Walks an element tree in document order.

use xmltree::Element;

/// A depth-first, pre-order walk over an element and everything beneath it.
///
/// The starting element is yielded first, then each child's subtree in turn.
/// Text, comments, and other non-element nodes are skipped.
pub struct Descendants<'e> {
    stack: Vec<&'e Element>,
}

impl<'e> Descendants<'e> {
    pub fn new(root: &'e Element) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'e> Iterator for Descendants<'e> {
    type Item = &'e Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;

        // push in reverse so the first child is popped next
        self.stack.extend(
            element
                .children
                .iter()
                .rev()
                .flat_map(|c| c.as_element()),
        );

        Some(element)
    }
}
