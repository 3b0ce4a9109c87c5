use errgroup_rail::{new, Accumulator, Error, ErrorKind};

#[test]
fn test_accumulator_new() {
    let acc = Accumulator::new();
    assert!(acc.is_empty());
    assert_eq!(acc.len(), 0);
    assert!(acc.into_error().is_none());
}

#[test]
fn test_accumulator_single_error_is_verbatim() {
    let err = new("only");
    let mut acc = Accumulator::new();
    acc.push(err.clone());

    let folded = acc.into_error().unwrap();
    assert!(Error::ptr_eq(&folded, &err));
}

#[test]
fn test_accumulator_many_errors_join_in_order() {
    let acc: Accumulator = [new("a"), new("b"), new("c")].into_iter().collect();

    let folded = acc.into_error().unwrap();
    assert_eq!(folded.kind(), ErrorKind::Joined);
    assert_eq!(folded.to_string(), "a; b; c");
}

#[test]
fn test_accumulator_offer_first_only() {
    let first = new("first");
    let mut acc = Accumulator::new();

    assert!(acc.offer(first.clone(), true));
    assert!(!acc.offer(new("second"), true));
    assert_eq!(acc.len(), 1);
    assert!(Error::ptr_eq(&acc.to_error().unwrap(), &first));
}

#[test]
fn test_accumulator_offer_keeps_everything_otherwise() {
    let mut acc = Accumulator::new();

    assert!(acc.offer(new("first"), false));
    assert!(acc.offer(new("second"), false));
    assert_eq!(acc.len(), 2);
}

#[test]
fn test_accumulator_to_error_does_not_consume() {
    let mut acc = Accumulator::new();
    acc.extend([new("a"), new("b")]);

    let once = acc.to_error().unwrap();
    let twice = acc.to_error().unwrap();
    assert_eq!(once.to_string(), twice.to_string());
    assert_eq!(acc.len(), 2);
}

#[test]
fn test_accumulator_iter_and_into_iter() {
    let mut acc = Accumulator::new();
    acc.extend([new("x"), new("y")]);

    let messages: Vec<String> = acc.iter().map(ToString::to_string).collect();
    assert_eq!(messages, vec!["x", "y"]);

    let owned: Vec<Error> = acc.into_iter().collect();
    assert_eq!(owned.len(), 2);
}
