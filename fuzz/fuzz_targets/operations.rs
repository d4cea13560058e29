#![no_main]

use libfuzzer_sys::arbitrary::Arbitrary;
use libfuzzer_sys::{arbitrary, fuzz_target};
use inplace_optional::{BadAccess, Optional};

type T = Box<u8>;

#[derive(Arbitrary, Debug, Copy, Clone)]
enum Slot {
    First,
    Second,
}

#[derive(Arbitrary, Debug)]
enum Operation {
    Assign(Slot, u8),
    AssignCloned(Slot, u8),
    Emplace(Slot, u8),
    TryEmplace(Slot, Option<u8>),
    Reset(Slot),
    CloneFrom(Slot),
    MoveFrom(Slot),
    Take(Slot),
    Increment(Slot),
}

struct Pair {
    optionals: [Optional<T>; 2],
    expected: [Option<T>; 2],
}

impl Pair {
    // Returns (destination, source) for the slot, the source being the other one.
    fn split(&mut self, slot: Slot) -> ((&mut Optional<T>, &mut Option<T>), (&mut Optional<T>, &mut Option<T>)) {
        let [first, second] = &mut self.optionals;
        let [first_expected, second_expected] = &mut self.expected;

        match slot {
            Slot::First => ((first, first_expected), (second, second_expected)),
            Slot::Second => ((second, second_expected), (first, first_expected)),
        }
    }
}

fuzz_target!(|operations: Vec<Operation>| {
    let mut pair = Pair {
        optionals: [Optional::new(), Optional::new()],
        expected: [None, None],
    };

    for operation in operations {
        match operation {
            Operation::Assign(slot, value) => {
                let ((optional, expected), _) = pair.split(slot);
                assert_eq!(**optional.assign(Box::new(value)), value);
                *expected = Some(Box::new(value));
            }
            Operation::AssignCloned(slot, value) => {
                let ((optional, expected), _) = pair.split(slot);
                optional.assign_cloned(&Box::new(value));
                *expected = Some(Box::new(value));
            }
            Operation::Emplace(slot, value) => {
                let ((optional, expected), _) = pair.split(slot);
                optional.emplace_with(|| Box::new(value));
                *expected = Some(Box::new(value));
            }
            Operation::TryEmplace(slot, value) => {
                let ((optional, expected), _) = pair.split(slot);
                let result = optional.try_emplace_with(|| value.map(Box::new).ok_or(BadAccess));
                assert_eq!(result.is_ok(), value.is_some());
                *expected = value.map(Box::new);
            }
            Operation::Reset(slot) => {
                let ((optional, expected), _) = pair.split(slot);
                optional.reset();
                *expected = None;
            }
            Operation::CloneFrom(slot) => {
                let ((optional, expected), (source, source_expected)) = pair.split(slot);
                optional.clone_from(source);
                expected.clone_from(source_expected);
            }
            Operation::MoveFrom(slot) => {
                let ((optional, expected), (source, source_expected)) = pair.split(slot);
                optional.move_from(source);
                *expected = source_expected.take();
            }
            Operation::Take(slot) => {
                let ((optional, expected), _) = pair.split(slot);
                assert_eq!(optional.take().into_option(), expected.take());
            }
            Operation::Increment(slot) => {
                let ((optional, expected), _) = pair.split(slot);

                match (optional.value_mut(), expected.as_mut()) {
                    (Ok(actual), Some(expected)) => {
                        **actual = actual.wrapping_add(1);
                        **expected = expected.wrapping_add(1);
                    }
                    (Err(BadAccess), None) => {}
                    (actual, expected) => panic!("diverged: {actual:?} vs {expected:?}"),
                }
            }
        }

        for (optional, expected) in pair.optionals.iter().zip(&pair.expected) {
            assert_eq!(optional.has_value(), expected.is_some());
            assert_eq!(optional.as_option(), expected.as_ref());
        }
    }
});
