use outcome_rail::compose::{cast_error, concat, detail_messages, try_concat};
use outcome_rail::{Error, InvalidArgument, Outcome};

#[test]
fn concat_sets_general_message_and_merges_details_in_order() {
    let merged = concat(
        Error::with_details("message1", ["1a", "1b"]),
        Error::with_details("message2", ["2a", "2b"]),
        "concated message",
    );

    assert_eq!(merged.message(), Some("concated message"));
    let messages: Vec<_> = detail_messages(&merged).unwrap().collect();
    assert_eq!(messages, [Some("1a"), Some("1b"), Some("2a"), Some("2b")]);
}

#[test]
fn concat_takes_id_from_first_operand_only() {
    let merged = concat(Error::with_id("message1", 123), Error::with_detail("m2", "d", 9, None), "x");
    assert_eq!(merged.id(), Some(123));

    let merged = concat(Error::new("message1"), Error::with_id("message2", 9), "x");
    assert_eq!(merged.id(), None);
}

#[test]
fn concat_of_detail_less_errors_has_no_details() {
    let merged = concat(Error::new(None::<&str>), Error::new(None::<&str>), "merged");

    assert!(merged.details().is_none());
    assert!(detail_messages(&merged).is_none());
}

#[test]
fn concat_with_one_sided_details() {
    let merged = concat(Error::new("a"), Error::with_details("b", ["only"]), "merged");

    assert_eq!(merged.detail_count(), 1);
}

#[test]
fn try_concat_rejects_absent_operands() {
    let present = || Some(Error::with_details("message1", ["1", "1"]));

    assert_eq!(try_concat(present(), None, "m").unwrap_err(), InvalidArgument::new("second"));
    assert_eq!(
        try_concat(None, Some(Error::new("qwerty")), "m").unwrap_err(),
        InvalidArgument::new("first")
    );
    assert_eq!(try_concat(present(), present(), "m").unwrap().detail_count(), 4);
}

#[test]
fn detail_messages_distinguishes_absent_from_messageless_details() {
    assert!(detail_messages(&Error::with_id("root", 1)).is_none());

    let err = Error::new("root").and_detail(Error::with_id(None::<&str>, 4));
    let messages: Vec<_> = detail_messages(&err).unwrap().collect();
    assert_eq!(messages, [None]);
}

#[test]
fn detail_messages_is_exact_size_and_reversible() {
    let err = Error::with_details("message", ["detail1", "detail2", "detail3"]);
    let messages = detail_messages(&err).unwrap();

    assert_eq!(messages.len(), 3);
    let reversed: Vec<_> = messages.rev().flatten().collect();
    assert_eq!(reversed, ["detail3", "detail2", "detail1"]);
}

#[test]
fn cast_error_keeps_the_error_tree() {
    let failed: Outcome = Outcome::error_with("error text", Vec::<&str>::new());
    let expected = failed.error_obj().cloned().unwrap();

    let typed: Outcome<Vec<u8>> = cast_error(failed).unwrap();

    assert!(typed.is_failure());
    assert_eq!(typed.error_obj(), Some(&expected));
    assert!(typed.data().is_none());
}

#[test]
fn cast_error_rejects_successful_outcomes() {
    let result = cast_error::<u8, String>(Outcome::success_with(1));

    assert_eq!(result.unwrap_err(), InvalidArgument::new("outcome"));
}
