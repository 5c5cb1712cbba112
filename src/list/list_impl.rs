/// Index of a node slot within a list's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    value: i32,
    next: Option<NodeId>,
}

/// Singly linked list over `i32` payloads.
///
/// The list exclusively owns its node chain. Traversal-based operations
/// (`len`, `elements`, `search`, and friends) assume the chain is loop-free;
/// calling them after [`insert_loop`](Self::insert_loop) is a documented
/// precondition violation and does not terminate.
#[derive(Debug, Clone, Default)]
pub struct SinglyLinkedList {
    nodes: Vec<Node>,
    head: Option<NodeId>,
}

impl SinglyLinkedList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
        }
    }

    /// True iff the list has no head node.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn alloc(&mut self, value: i32, next: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { value, next });
        id
    }

    fn value_of(&self, id: NodeId) -> i32 {
        self.nodes[id.0].value
    }

    fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].next
    }

    fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        self.nodes[id.0].next = next;
    }

    fn tail(&self) -> Option<NodeId> {
        let mut cursor = self.head?;
        while let Some(next) = self.next_of(cursor) {
            cursor = next;
        }
        Some(cursor)
    }

    /// Prepend a value in O(1).
    pub fn insert_at_head(&mut self, value: i32) {
        let id = self.alloc(value, self.head);
        self.head = Some(id);
    }

    /// Append a value, walking to the tail first. O(n).
    ///
    /// On an empty list this behaves as [`insert_at_head`](Self::insert_at_head).
    pub fn insert_at_tail(&mut self, value: i32) {
        match self.tail() {
            None => self.insert_at_head(value),
            Some(last) => {
                let id = self.alloc(value, None);
                self.set_next(last, Some(id));
            }
        }
    }

    /// Linear scan for a payload equal to `value`.
    pub fn search(&self, value: i32) -> bool {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            if self.value_of(id) == value {
                return true;
            }
            cursor = self.next_of(id);
        }
        false
    }

    /// Remove the first node (head-to-tail order) whose payload equals
    /// `value`, returning whether a node was removed.
    ///
    /// Deleting the head is a dedicated O(1) path.
    pub fn delete(&mut self, value: i32) -> bool {
        let Some(head) = self.head else {
            return false;
        };
        if self.value_of(head) == value {
            return self.delete_at_head();
        }

        let mut previous = head;
        let mut cursor = self.next_of(head);
        while let Some(id) = cursor {
            if self.value_of(id) == value {
                self.set_next(previous, self.next_of(id));
                return true;
            }
            previous = id;
            cursor = self.next_of(id);
        }
        false
    }

    fn delete_at_head(&mut self) -> bool {
        match self.head {
            None => false,
            Some(head) => {
                self.head = self.next_of(head);
                true
            }
        }
    }

    /// Count of nodes reachable from the head. O(n).
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            count += 1;
            cursor = self.next_of(id);
        }
        count
    }

    /// Render the chain as `"v1->v2->...->null"`.
    ///
    /// Traversal past the head stops early when a node's payload equals the
    /// head's payload; in that case the head payload is appended once more
    /// and the `"null"` terminator is dropped. The stop test is
    /// payload-based, not identity-based, so a loop-free chain that repeats
    /// the head value later on is truncated at the repeat. Kept for
    /// compatibility with the behavior this drill set teaches against.
    pub fn elements(&self) -> String {
        let Some(head) = self.head else {
            return "null".to_string();
        };
        let sentinel = self.value_of(head);

        let mut rendered = format!("{sentinel}->");
        let mut cursor = self.next_of(head);
        while let Some(id) = cursor {
            if self.value_of(id) == sentinel {
                break;
            }
            rendered.push_str(&format!("{}->", self.value_of(id)));
            cursor = self.next_of(id);
        }

        match cursor {
            None => rendered + "null",
            Some(_) => rendered + &sentinel.to_string(),
        }
    }

    /// Reverse all successor links in place (iterative, O(n) time, O(1)
    /// extra space), then render the reversed chain via
    /// [`elements`](Self::elements).
    pub fn reverse(&mut self) -> String {
        let mut previous: Option<NodeId> = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let next = self.next_of(id);
            self.set_next(id, previous);
            previous = Some(id);
            cursor = next;
        }
        self.head = previous;
        self.elements()
    }

    /// Floyd's tortoise and hare: the slow cursor advances one link per
    /// step, the fast cursor two; a loop exists iff they land on the same
    /// node before the fast cursor runs off the chain.
    pub fn detect_loop(&self) -> bool {
        let mut slow = self.head;
        let mut fast = self.head;

        loop {
            let (Some(s), Some(f)) = (slow, fast) else {
                return false;
            };
            let Some(f_next) = self.next_of(f) else {
                return false;
            };
            slow = self.next_of(s);
            fast = self.next_of(f_next);
            if slow.is_some() && slow == fast {
                return true;
            }
        }
    }

    /// Point the tail at the head, deliberately tying the chain into a
    /// loop for exercising [`detect_loop`](Self::detect_loop).
    ///
    /// No-op on an empty list. After this call every traversal-based
    /// operation on the list is non-terminating; no unloop operation exists.
    pub fn insert_loop(&mut self) {
        let Some(head) = self.head else {
            return;
        };
        let mut cursor = head;
        while let Some(next) = self.next_of(cursor) {
            cursor = next;
        }
        self.set_next(cursor, Some(head));
    }

    /// Payload of the middle node via the slow/fast cursor technique, with
    /// the fast cursor starting two links ahead of the slow one.
    ///
    /// Returns 0 for an empty list (sentinel, not an error) and the sole
    /// payload for a single-element list. With the fast cursor starting two
    /// ahead, an even-length chain yields the earlier of its two middles.
    pub fn find_mid(&self) -> i32 {
        let Some(head) = self.head else {
            return 0;
        };
        let Some(second) = self.next_of(head) else {
            return self.value_of(head);
        };

        let mut mid = head;
        let mut cursor = self.next_of(second);
        while let Some(id) = cursor {
            if let Some(next_mid) = self.next_of(mid) {
                mid = next_mid;
            }
            cursor = self.next_of(id);
            if let Some(c) = cursor {
                cursor = self.next_of(c);
            }
        }
        self.value_of(mid)
    }

    /// Splice out every later duplicate of each payload, keeping first
    /// occurrences in order, then render the result. O(n²).
    ///
    /// The outer cursor advances unconditionally after each inner scan, as
    /// the drill teaches it; the inner scan holds its position after a
    /// splice so runs of repeats collapse in a single pass.
    pub fn remove_duplicates(&mut self) -> String {
        let mut start = self.head;
        while let Some(s) = start {
            if self.next_of(s).is_none() {
                break;
            }
            let mut scan = s;
            while let Some(candidate) = self.next_of(scan) {
                if self.value_of(s) == self.value_of(candidate) {
                    self.set_next(scan, self.next_of(candidate));
                } else {
                    scan = candidate;
                }
            }
            start = self.next_of(s);
        }
        self.elements()
    }

    /// Merge `other` into `self`, consuming it, and render the result.
    ///
    /// Taking `other` by value makes the original drill's cross-list
    /// aliasing an explicit transfer of ownership: the second list cannot be
    /// used independently afterward. An empty receiver adopts the other
    /// chain wholesale; when either side is empty the surviving chain is
    /// rendered as-is, otherwise the merged chain is deduplicated via
    /// [`remove_duplicates`](Self::remove_duplicates).
    pub fn union(&mut self, other: SinglyLinkedList) -> String {
        if other.is_empty() {
            return self.elements();
        }
        let Some(tail) = self.tail() else {
            *self = other;
            return self.elements();
        };

        // Rebase the other arena's indices past the end of ours.
        let offset = self.nodes.len();
        let rebased_head = other.head.map(|id| NodeId(id.0 + offset));
        self.nodes.extend(other.nodes.into_iter().map(|node| Node {
            value: node.value,
            next: node.next.map(|id| NodeId(id.0 + offset)),
        }));
        self.set_next(tail, rebased_head);

        self.remove_duplicates()
    }

    /// Payload of the nth node from the tail end (1 = last element).
    ///
    /// Computes the length first, then walks `length - n` links from the
    /// head. Returns -1 for an empty list or when `n` falls outside the
    /// chain, including `n == 0`, whose walk runs off the end.
    pub fn find_nth(&self, n: i32) -> i32 {
        if self.is_empty() {
            return -1;
        }

        // Widen so extreme n values stay out of range instead of overflowing.
        let length = self.len() as i64;
        let position = length - i64::from(n);
        if position < 0 || position > length {
            return -1;
        }

        let mut cursor = self.head;
        for _ in 0..position {
            match cursor {
                Some(id) => cursor = self.next_of(id),
                None => break,
            }
        }
        match cursor {
            Some(id) => self.value_of(id),
            None => -1,
        }
    }
}
