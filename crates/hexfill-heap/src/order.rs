//! Heap comparators.

/// Decides which of two priorities sits closer to the top of the heap.
pub trait PriorityOrder<P> {
    /// True when `a` must be popped before `b`.
    fn precedes(&self, a: &P, b: &P) -> bool;
}

/// Built-in orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeapOrder {
    /// Smallest priority first.
    #[default]
    Min,
    /// Largest priority first.
    Max,
}

impl<P: PartialOrd> PriorityOrder<P> for HeapOrder {
    #[inline]
    fn precedes(&self, a: &P, b: &P) -> bool {
        match self {
            HeapOrder::Min => a < b,
            HeapOrder::Max => a > b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_and_max_disagree() {
        assert!(HeapOrder::Min.precedes(&1, &2));
        assert!(!HeapOrder::Min.precedes(&2, &1));
        assert!(HeapOrder::Max.precedes(&2, &1));
        assert!(!HeapOrder::Max.precedes(&1, &1));
    }

    #[test]
    fn custom_order() {
        struct ByDistanceFrom(i32);

        impl PriorityOrder<i32> for ByDistanceFrom {
            fn precedes(&self, a: &i32, b: &i32) -> bool {
                (a - self.0).abs() < (b - self.0).abs()
            }
        }

        let mut heap = crate::PriorityHeap::new(ByDistanceFrom(10));
        heap.insert("far", 0);
        heap.insert("near", 11);
        heap.insert("mid", 5);
        assert_eq!(heap.pop(), Some("near"));
        assert_eq!(heap.pop(), Some("mid"));
        assert_eq!(heap.pop(), Some("far"));
    }
}
