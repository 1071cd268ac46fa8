use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use sipwire::headers::{CSeq, CallId, From, Header, Headers, MaxForwards, To, Via};
use sipwire::message::{Message, Method, Request, SipUri, SIPV2};

fn invite() -> Request {
    let headers = Headers::from([
        Header::Via(Via::new_udp(
            "pc33.atlanta.com".parse().unwrap(),
            Some("z9hG4bK776asdhds"),
        )),
        Header::MaxForwards(MaxForwards::new(70)),
        Header::From(From::with_tag(
            SipUri::NameAddr("Alice <sip:alice@atlanta.com>".parse().unwrap()),
            "1928301774",
        )),
        Header::To(To::new(SipUri::NameAddr(
            "Bob <sip:bob@biloxi.com>".parse().unwrap(),
        ))),
        Header::CallId(CallId::new("a84b4c76e66710@pc33.atlanta.com")),
        Header::CSeq(CSeq::new(314159, Method::Invite)),
    ]);

    Request::new(
        Method::Invite,
        "sip:bob@biloxi.com".parse().unwrap(),
        SIPV2,
        headers,
        "v=0\r\no=alice 2890844526 2890844526 IN IP4 pc33.atlanta.com\r\n",
    )
}

fn bench_serialize(c: &mut Criterion) {
    let request = invite();

    c.bench_function("serialize_invite", |b| {
        b.iter(|| black_box(&request).to_string())
    });
    c.bench_function("short_invite", |b| b.iter(|| black_box(&request).short()));
    c.bench_function("clone_invite", |b| b.iter(|| black_box(&request).clone()));
}

criterion_group!(benches, bench_serialize);
criterion_main!(benches);
