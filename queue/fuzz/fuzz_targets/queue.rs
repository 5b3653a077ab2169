#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stable_queue::{Error, StableQueue};

#[derive(Arbitrary, Debug)]
enum Op {
    Push { priority: i16, item: u32 },
    Peek,
    Pop,
}

/// Index of the item the queue must surface next: the first occurrence of the
/// smallest pending priority.
fn expected(model: &[(i16, u32)]) -> Option<usize> {
    let min = model.iter().map(|(priority, _)| *priority).min()?;
    model.iter().position(|(priority, _)| *priority == min)
}

fn fuzz(ops: Vec<Op>) {
    let mut queue = StableQueue::new();
    let mut model: Vec<(i16, u32)> = Vec::new();

    for op in ops {
        match op {
            Op::Push { priority, item } => {
                queue.push(priority, item);
                model.push((priority, item));
            }
            Op::Peek => match expected(&model) {
                Some(index) => assert_eq!(queue.peek(), Ok(&model[index].1)),
                None => assert_eq!(queue.peek(), Err(Error::Empty)),
            },
            Op::Pop => match expected(&model) {
                Some(index) => {
                    let (_, item) = model.remove(index);
                    assert_eq!(queue.pop(), Ok(item));
                }
                None => assert_eq!(queue.pop(), Err(Error::Empty)),
            },
        }

        assert_eq!(queue.len(), model.len());
        assert_eq!(queue.is_empty(), model.is_empty());
    }

    // Drain to confirm the full ordering.
    while let Some(index) = expected(&model) {
        let (_, item) = model.remove(index);
        assert_eq!(queue.pop(), Ok(item));
    }
    assert_eq!(queue.pop(), Err(Error::Empty));
}

fuzz_target!(|ops: Vec<Op>| {
    fuzz(ops);
});
