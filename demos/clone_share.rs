//! Clone-before-share: a request has a single writer, so handing it to
//! another thread goes through `clone()`. The clone shares no mutable
//! state with the original.

use std::error::Error;
use std::thread;

use sipwire::headers::{CSeq, CallId, Header, Headers};
use sipwire::message::{Message, Method, Request, SIPV2};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().init();

    let headers = Headers::from([
        Header::CSeq(CSeq::new(1, Method::Register)),
        Header::CallId(CallId::new("b4s00k1mpq")),
    ]);
    let mut request = Request::new(
        Method::Register,
        "sip:registrar.biloxi.com".parse()?,
        SIPV2,
        headers,
        "",
    );

    let clone = request.clone();
    let observer = thread::spawn(move || {
        tracing::info!(summary = %clone.short(), "observer sees the clone");
        clone.to_string()
    });

    // The owner keeps mutating its copy while the observer serializes.
    request.set_body("reg-event".to_owned());
    request.headers_mut().push(Header::CSeq(CSeq::new(2, Method::Register)));

    let observed = observer.join().expect("observer thread panicked");
    assert!(!observed.contains("reg-event"));

    println!("observer saw:\n{observed}");
    println!("owner now has:\n{request}");
    Ok(())
}
