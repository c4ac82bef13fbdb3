use outcome_rail::{ensure, fail, Outcome};

fn divide(a: i32, b: i32) -> Outcome<i32> {
    ensure!(b != 0, "division failed", "divisor is zero");
    if a % b != 0 {
        fail!("division failed", "not exact", format!("{a} % {b} != 0"));
    }
    Outcome::success_with(a / b)
}

fn always_fails() -> Outcome {
    fail!("nothing to do")
}

#[test]
fn ensure_passes_through_when_condition_holds() {
    assert_eq!(divide(6, 3).into_data(), Some(2));
}

#[test]
fn ensure_fails_when_condition_is_false() {
    let error = divide(1, 0).into_error().unwrap();

    assert_eq!(error.message(), Some("division failed"));
    assert_eq!(error.details().unwrap()[0].message(), Some("divisor is zero"));
}

#[test]
fn fail_builds_details_in_order() {
    let error = divide(7, 2).into_error().unwrap();
    let details = error.details().unwrap();

    assert_eq!(details.len(), 2);
    assert_eq!(details[1].message(), Some("7 % 2 != 0"));
}

#[test]
fn fail_without_details_builds_root_only_error() {
    let error = always_fails().into_error().unwrap();

    assert_eq!(error.message(), Some("nothing to do"));
    assert!(error.details().is_none());
}
