use std::error::Error;

use sipwire::headers::{CSeq, CallId, From, Header, Headers, MaxForwards, To, Via};
use sipwire::message::{Message, Method, Request, SipUri, SIPV2};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().init();

    let headers = Headers::from([
        Header::Via(Via::new_udp(
            "pc33.atlanta.com".parse()?,
            Some("z9hG4bK776asdhds"),
        )),
        Header::MaxForwards(MaxForwards::new(70)),
        Header::From(From::with_tag(
            SipUri::NameAddr("Alice <sip:alice@atlanta.com>".parse()?),
            "1928301774",
        )),
        Header::To(To::new(SipUri::NameAddr("Bob <sip:bob@biloxi.com>".parse()?))),
        Header::CallId(CallId::new("a84b4c76e66710@pc33.atlanta.com")),
        Header::CSeq(CSeq::new(314159, Method::Invite)),
    ]);

    let request = Request::new(
        Method::Invite,
        "sip:bob@biloxi.com".parse()?,
        SIPV2,
        headers,
        "",
    );

    tracing::info!(summary = %request.short(), "built request");

    print!("{request}");
    Ok(())
}
