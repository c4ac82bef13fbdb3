use outcome_rail::{Error, InvalidArgument, MessageParams, Outcome};

#[derive(Debug, Clone, PartialEq)]
struct SuccessDto {
    name: String,
}

fn dto() -> SuccessDto {
    SuccessDto { name: "dto".to_string() }
}

#[test]
fn success_has_no_error_obj() {
    let plain = Outcome::success();
    assert!(plain.is_success());
    assert!(plain.error_obj().is_none());
    assert!(plain.warnings().is_empty());

    let warned = Outcome::success().with_warnings(["warning1", "warning2"]);
    assert!(warned.is_success());
    assert!(warned.error_obj().is_none());

    let with_data = Outcome::success_with(dto()).with_warnings(["warning"]);
    assert!(with_data.is_success());
    assert!(with_data.error_obj().is_none());
}

#[test]
fn success_tolerates_absent_warning_entries() {
    let ok = Outcome::success().with_warnings([None, Some("w1"), None]);

    assert!(ok.is_success());
    assert_eq!(ok.warnings(), ["w1"]);
}

#[test]
fn success_with_sets_data() {
    let ok = Outcome::success_with(42).with_warnings(["careful"]);

    assert_eq!(ok.data(), Some(&42));
    assert_eq!(ok.warnings(), ["careful"]);
    assert_eq!(ok.into_data(), Some(42));
}

#[test]
fn success_with_optional_payload_may_be_empty() {
    let ok: Outcome<Option<SuccessDto>> = Outcome::success_with(None);

    assert!(ok.is_success());
    assert_eq!(ok.data(), Some(&None));
}

#[test]
fn error_keeps_error_and_never_holds_data() {
    let error = Error::with_details("general", ["detailed error"]);
    let failed: Outcome<SuccessDto> = Outcome::error(error.clone());

    assert!(!failed.is_success());
    assert!(failed.is_failure());
    assert_eq!(failed.error_obj(), Some(&error));
    assert!(failed.data().is_none());
    assert_eq!(failed.into_error(), Some(error));
}

#[test]
fn error_constructors_all_fail() {
    let a: Outcome = Outcome::error_with(None::<&str>, [None::<&str>]);
    let b: Outcome = Outcome::error_with("general error", ["detailed error"]);
    let c: Outcome<SuccessDto> = Outcome::error(Error::new(None::<&str>));
    let d: Outcome<SuccessDto> = Outcome::error(Error::with_id(None::<&str>, None::<i32>));
    let e: Outcome<SuccessDto> = Outcome::error_with_id("error123", "detail error", 3, None);

    assert!(a.is_failure() && b.is_failure());
    for failed in [c, d, e] {
        assert!(failed.is_failure());
        assert!(failed.data().is_none());
    }
}

#[test]
fn error_with_id_builds_paired_error() {
    let mut params = MessageParams::new();
    params.insert("limit".to_string(), serde_json::json!(10));

    let failed: Outcome<u8> =
        Outcome::error_with_id("too many items", "limit exceeded", 413, Some(params.clone()));
    let error = failed.error_obj().unwrap();

    assert_eq!(error.id(), Some(413));
    assert_eq!(error.details().unwrap()[0].id(), Some(413));
    assert_eq!(error.details().unwrap()[0].message_params(), Some(&params));
}

#[test]
fn try_error_rejects_absent_error() {
    assert_eq!(Outcome::<()>::try_error(None).unwrap_err(), InvalidArgument::new("error"));

    let failed = Outcome::<()>::try_error(Some(Error::new("x"))).unwrap();
    assert_eq!(failed.error_obj().and_then(Error::message), Some("x"));
}

#[test]
fn add_warnings_unions_and_ignores_empty_input() {
    let mut ok = Outcome::success();

    ok.add_warnings(Vec::<&str>::new());
    assert!(!ok.has_warnings());

    ok.add_warnings(["warning1", "warning2"]);
    ok.add_warnings(["warning2", "warning1", "warning3"]);

    assert_eq!(ok.warnings(), ["warning1", "warning2", "warning3"]);
}

#[test]
fn add_warnings_is_idempotent() {
    let mut ok = Outcome::success_with(1);
    ok.add_warnings(["w1"]);
    ok.add_warnings(["w1"]);

    assert_eq!(ok.warnings(), ["w1"]);
}

#[test]
fn warnings_are_allowed_on_failures() {
    let failed: Outcome = Outcome::error_with("partial", ["batch 2 failed"]).with_warnings(["batch 1 ok"]);

    assert!(failed.is_failure());
    assert_eq!(failed.warnings(), ["batch 1 ok"]);
}

#[test]
fn map_and_and_then_preserve_state_and_warnings() {
    let mapped = Outcome::success_with(21).with_warnings(["slow"]).map(|n| n * 2);
    assert_eq!(mapped.data(), Some(&42));
    assert_eq!(mapped.warnings(), ["slow"]);

    let failed: Outcome<i32> = Outcome::error_with("boom", ["x"]);
    let chained = failed.with_warnings(["w"]).and_then(|n| Outcome::success_with(n + 1));
    assert!(chained.is_failure());
    assert_eq!(chained.warnings(), ["w"]);

    let stepped = Outcome::success_with(1)
        .with_warnings(["a"])
        .and_then(|_| Outcome::<i32>::error_with("second step failed", ["y"]).with_warnings(["b", "a"]));
    assert!(stepped.is_failure());
    assert_eq!(stepped.warnings(), ["a", "b"]);
}

#[test]
fn converts_from_and_into_std_result() {
    let ok: Outcome<u8> = Ok::<u8, &str>(1).into();
    assert_eq!(ok.clone().into_result(), Ok(1));

    let failed: Outcome<u8> = Err::<u8, &str>("broken").into();
    assert_eq!(failed.into_result().unwrap_err().message(), Some("broken"));
}

#[test]
fn outcome_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Outcome<String>>();
    assert_send_sync::<Error>();
}
