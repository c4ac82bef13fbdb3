use outcome_rail::respond::{ReplyBody, StatusPolicy};
use outcome_rail::Outcome;

#[test]
fn default_policy_is_200_and_400() {
    assert_eq!(StatusPolicy::default(), StatusPolicy::new(200, 400));
}

#[test]
fn success_replies_with_the_whole_outcome() {
    let ok = Outcome::success_with(5).with_warnings(["cached"]);
    let reply = StatusPolicy::default().reply(&ok);

    assert_eq!(reply.status, 200);
    match reply.body {
        ReplyBody::Outcome(body) => assert_eq!(body, &ok),
        ReplyBody::Error(_) => panic!("expected outcome body"),
    }
}

#[test]
fn failure_replies_with_the_error_tree_only() {
    let failed: Outcome = Outcome::error_with("g", ["d1", "d2"]);
    let reply = StatusPolicy::default().reply(&failed);

    assert_eq!(reply.status, 400);
    match reply.body {
        ReplyBody::Error(error) => assert_eq!(Some(error), failed.error_obj()),
        ReplyBody::Outcome(_) => panic!("expected error body"),
    }
}

#[test]
fn custom_codes_are_used() {
    let policy = StatusPolicy::default().with_success(201).with_error(422);
    let failed: Outcome<u8> = Outcome::error_with("invalid", ["x"]);

    assert_eq!(policy.reply(&Outcome::success_with(1_u8)).status, 201);
    assert_eq!(policy.reply(&failed).status, 422);
}

#[cfg(all(feature = "serde", feature = "std"))]
#[test]
fn json_body_matches_the_reply_kind() {
    let failed: Outcome = Outcome::error_with("g", ["d1"]);
    let body: serde_json::Value =
        serde_json::from_str(&StatusPolicy::default().reply(&failed).to_json().unwrap()).unwrap();

    assert_eq!(body["message"], "g");
    assert_eq!(body["details"][0]["message"], "d1");
    assert!(body.get("isSuccess").is_none());

    let ok = Outcome::success_with("hi");
    let body: serde_json::Value =
        serde_json::from_str(&StatusPolicy::default().reply(&ok).to_json().unwrap()).unwrap();
    assert_eq!(body["isSuccess"], true);
    assert_eq!(body["data"], "hi");
}
