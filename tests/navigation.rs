use fuel_deck::deck::aviation_deck;
use fuel_deck::{Command, EdgeBehavior, Presentation, PresentationError, Slide};
use proptest::prelude::*;

fn numbered_deck(len: usize) -> Presentation<usize> {
    let slides = (0..len).map(|i| Slide::new(format!("slide-{i}"), format!("Slide {i}"), i)).collect();
    Presentation::new(slides).unwrap()
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::Next),
        Just(Command::Previous),
        Just(Command::First),
        Just(Command::Last),
        (0usize..20).prop_map(Command::GoTo),
    ]
}

proptest! {
    #[test]
    fn next_then_previous_restores_cursor(len in 1usize..40, start in 0usize..40) {
        let mut p = numbered_deck(len);
        let start = start % len;
        p.go_to(start).unwrap();
        p.next();
        p.previous();
        prop_assert_eq!(p.current_index(), start);
    }

    #[test]
    fn n_nexts_close_the_cycle(len in 1usize..40, start in 0usize..40) {
        let mut p = numbered_deck(len);
        let start = start % len;
        p.go_to(start).unwrap();
        for _ in 0..len {
            p.next();
        }
        prop_assert_eq!(p.current_index(), start);
    }

    #[test]
    fn valid_jump_lands_exactly(len in 1usize..40, target in 0usize..40) {
        let mut p = numbered_deck(len);
        let target = target % len;
        p.go_to(target).unwrap();
        prop_assert_eq!(p.current_index(), target);
        prop_assert_eq!(&p.current().id, &format!("slide-{target}"));
        prop_assert_eq!(p.current().content, target);
    }

    #[test]
    fn cursor_stays_in_range(len in 1usize..12, commands in prop::collection::vec(command(), 0..64)) {
        for edges in [EdgeBehavior::Wrap, EdgeBehavior::Stop] {
            let mut p = numbered_deck(len).with_edges(edges);
            for cmd in &commands {
                let before = p.current_index();
                match p.execute(*cmd) {
                    Ok(()) => {}
                    Err(PresentationError::InvalidIndex { .. }) => {
                        prop_assert_eq!(p.current_index(), before);
                    }
                    Err(other) => prop_assert!(false, "unexpected error {other}"),
                }
                prop_assert!(p.current_index() < len);
            }
        }
    }
}

#[test]
fn authored_deck_boundaries_wrap() {
    let mut p = Presentation::new(aviation_deck()).unwrap();
    assert_eq!(p.len(), 7);

    p.go_to(6).unwrap();
    p.next();
    assert_eq!(p.current_index(), 0);

    p.previous();
    assert_eq!(p.current_index(), 6);
}

#[test]
fn authored_deck_walkthrough() {
    let mut p = Presentation::new(aviation_deck()).unwrap();
    p.next();
    p.next();
    p.next();
    assert_eq!(p.current_index(), 3);

    p.go_to(1).unwrap();
    assert_eq!(p.current_index(), 1);
    assert_eq!(p.current().id, "data_methodology");
    assert_eq!(p.frame().position.to_string(), "2 / 7");
}

#[test]
fn authored_deck_rejects_out_of_range_jumps() {
    let mut p = Presentation::new(aviation_deck()).unwrap();
    p.go_to(2).unwrap();

    assert_eq!(
        p.go_to_signed(-1),
        Err(PresentationError::InvalidIndex { index: -1, len: 7 })
    );
    assert_eq!(p.go_to(7), Err(PresentationError::InvalidIndex { index: 7, len: 7 }));
    assert_eq!(p.current_index(), 2);
}
