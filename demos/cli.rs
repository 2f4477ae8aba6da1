use std::env;

use weburi::Uri;

fn main() {
    let mut args = env::args();
    let argv0 = args.next().expect("First argument is always present");

    if args.len() == 0 {
        eprintln!("No URIs were given on the command line.");
        eprintln!(
            "Try running this as `{} https://example.com:1234/hello?verbose=1`",
            argv0
        );
    }

    for argument in args {
        let uri = Uri::parse(&argument);
        println!("<{}>", argument);
        println!("  scheme:   {:?}", uri.scheme());
        println!("  user:     {:?}", uri.user());
        println!("  host:     {:?}", uri.host());
        println!("  port:     {:?}", uri.port());
        println!("  path:     {:?}", uri.path());
        println!("  segments: {:?}", uri.path_segments());
        println!("  query:    {:?}", uri.query().pairs());
        println!("  fragment: {:?}", uri.fragment());

        let reconstructed = uri.to_string();
        if reconstructed != argument {
            println!("Warning: URI doesn't round-trip -- serializes into:");
            println!("<{}>", reconstructed);
        }
    }
}
