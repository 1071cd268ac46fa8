use sipwire::headers::{CSeq, CallId, From, Header, Headers, MaxForwards, To};
use sipwire::message::{Message, Method, Request, SipUri, Uri, SIPV2};

fn bob() -> Uri {
    "sip:bob@biloxi.com".parse().unwrap()
}

fn invite_headers() -> Headers {
    Headers::from([
        Header::CSeq(CSeq::new(1, Method::Invite)),
        Header::CallId(CallId::new("abc")),
    ])
}

#[test]
fn test_start_line_is_three_tokens_with_single_spaces() {
    let request = Request::new(Method::Invite, bob(), SIPV2, invite_headers(), "");

    assert_eq!(request.start_line(), "INVITE sip:bob@biloxi.com SIP/2.0");
}

#[test]
fn test_wire_form_begins_with_start_line_and_ends_with_body() {
    let request = Request::new(Method::Invite, bob(), SIPV2, invite_headers(), "v=0");
    let wire = request.to_string();

    assert!(wire.starts_with(&format!("{}\r\n", request.start_line())));
    assert!(wire.ends_with(&format!("\r\n{}", request.body())));
}

#[test]
fn test_blank_body_serializes_like_empty_body() {
    let empty = Request::new(Method::Invite, bob(), SIPV2, invite_headers(), "");
    let blank = Request::new(Method::Invite, bob(), SIPV2, invite_headers(), "   ");

    assert_eq!(blank.body(), "");
    assert_eq!(empty.to_string(), blank.to_string());
}

#[test]
fn test_clone_is_content_equal() {
    let request = Request::new(Method::Invite, bob(), SIPV2, invite_headers(), "v=0");
    let clone = request.clone();

    assert_eq!(request.to_string(), clone.to_string());
    assert_eq!(request.short(), clone.short());
}

#[test]
fn test_mutating_the_clone_leaves_the_original_unchanged() {
    let request = Request::new(Method::Invite, bob(), SIPV2, invite_headers(), "v=0");
    let before = request.to_string();

    let mut clone = request.clone();
    clone.set_method(Method::Ack);
    clone.set_recipient("sip:alice@atlanta.com".parse().unwrap());
    clone.set_sip_version("SIP/3.0".to_owned());
    clone.set_body("o=carol".to_owned());
    clone.headers_mut().push(Header::MaxForwards(MaxForwards::new(70)));

    assert_eq!(request.to_string(), before);
    assert_ne!(clone.to_string(), before);
}

#[test]
fn test_mutating_the_original_leaves_the_clone_unchanged() {
    let mut request = Request::new(Method::Invite, bob(), SIPV2, invite_headers(), "v=0");
    let clone = request.clone();
    let before = clone.to_string();

    request.set_method(Method::Cancel);
    request.headers_mut().pop();
    request.set_body(String::new());

    assert_eq!(clone.to_string(), before);
}

#[test]
fn test_identity_predicates_over_every_method() {
    let methods = [
        Method::Invite,
        Method::Ack,
        Method::Bye,
        Method::Cancel,
        Method::Register,
        Method::Options,
        Method::Info,
        Method::Notify,
        Method::Subscribe,
        Method::Update,
        Method::Refer,
        Method::Prack,
        Method::Message,
        Method::Publish,
    ];

    for method in methods {
        let request = Request::new(method, bob(), SIPV2, Headers::new(), "");

        assert_eq!(request.is_invite(), method == Method::Invite);
        assert_eq!(request.is_ack(), method == Method::Ack);
    }
}

#[test]
fn test_short_keeps_fixed_order_regardless_of_insertion() {
    let from = From::with_tag(
        SipUri::NameAddr("Alice <sip:alice@atlanta.com>".parse().unwrap()),
        "1928301774",
    );
    let to = To::new(SipUri::NameAddr("Bob <sip:bob@biloxi.com>".parse().unwrap()));
    let headers = Headers::from([
        Header::To(to.clone()),
        Header::CallId(CallId::new("a84b4c76e66710")),
        Header::From(from.clone()),
        Header::CSeq(CSeq::new(314159, Method::Invite)),
    ]);
    let request = Request::new(Method::Invite, bob(), SIPV2, headers, "");

    assert_eq!(
        request.short(),
        format!(
            "{} (CSeq: 314159 INVITE) (Call-ID: a84b4c76e66710) ({from}) ({to})",
            request.start_line()
        )
    );
}

#[test]
fn test_short_silently_skips_absent_headers() {
    let from = From::new(SipUri::Uri("sip:alice@atlanta.com".parse().unwrap()));
    let to = To::new(SipUri::Uri("sip:bob@biloxi.com".parse().unwrap()));
    let headers = Headers::from([Header::From(from.clone()), Header::To(to.clone())]);
    let request = Request::new(Method::Bye, bob(), SIPV2, headers, "");

    assert_eq!(
        request.short(),
        format!("{} ({from}) ({to})", request.start_line())
    );
}

#[test]
fn test_end_to_end_wire_framing() {
    let request = Request::new(Method::Invite, bob(), SIPV2, invite_headers(), "");

    assert_eq!(
        request.to_string(),
        "INVITE sip:bob@biloxi.com SIP/2.0\r\n\
         CSeq: 1 INVITE\r\n\
         Call-ID: abc\r\n\
         \r\n"
    );
}

#[test_log::test]
fn test_typed_lookups_report_absence() {
    let request = Request::new(Method::Options, bob(), SIPV2, Headers::new(), "");

    assert!(request.cseq().is_none());
    assert!(request.call_id().is_none());
    assert!(request.from().is_none());
    assert!(request.to().is_none());
}

#[test_log::test]
fn test_typed_lookups_return_first_match() {
    let headers = Headers::from([
        Header::CallId(CallId::new("first")),
        Header::CallId(CallId::new("second")),
    ]);
    let request = Request::new(Method::Register, bob(), SIPV2, headers, "");

    assert_eq!(request.call_id().map(CallId::id), Some("first"));
    assert!(request.headers()[1].as_call_id().is_some());
}
