use proptest::prelude::*;
use std::collections::VecDeque;
use wrapq::CircularQueue;

#[derive(Debug, Clone)]
enum Op {
    Enqueue(u32),
    Dequeue,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![any::<u32>().prop_map(Op::Enqueue), Just(Op::Dequeue)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_matches_vecdeque_model(
        capacity in 1usize..8,
        ops in proptest::collection::vec(op_strategy(), 0..64),
    ) {
        let mut queue = CircularQueue::with_capacity(capacity).unwrap();
        let mut model: VecDeque<u32> = VecDeque::new();

        for op in ops {
            match op {
                Op::Enqueue(value) => {
                    queue.enqueue(value);
                    model.push_back(value);
                }
                Op::Dequeue => {
                    prop_assert_eq!(queue.dequeue().ok(), model.pop_front());
                }
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_empty(), model.is_empty());
            prop_assert_eq!(queue.peek(), model.front());
        }

        // Drain: the remaining elements must come out in FIFO order.
        while let Some(expected) = model.pop_front() {
            prop_assert_eq!(queue.dequeue(), Ok(expected));
        }
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn prop_capacity_never_decreases(
        capacity in 1usize..8,
        ops in proptest::collection::vec(op_strategy(), 0..64),
    ) {
        let mut queue = CircularQueue::with_capacity(capacity).unwrap();
        let mut high_water = queue.capacity();

        for op in ops {
            match op {
                Op::Enqueue(value) => queue.enqueue(value),
                Op::Dequeue => {
                    let _ = queue.dequeue();
                }
            }
            prop_assert!(queue.capacity() >= high_water);
            high_water = queue.capacity();
        }
    }
}
