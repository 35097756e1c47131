use std::process::{Command, Output};

fn sha1(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sha1"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run sha1 binary")
}

#[test]
fn prints_lowercase_digest() {
    let out = sha1(&["abc"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"a9993e364706816aba3e25717850c26c9cd0d89d\n");
}

#[test]
fn hashes_empty_argument() {
    let out = sha1(&[""]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"da39a3ee5e6b4b0d3255bfef95601890afd80709\n");
}

#[test]
fn hashes_utf8_bytes_of_argument() {
    let out = sha1(&["héllo"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"35b5ea45c5e41f78b46a937cc74d41dfea920890\n");
}

#[test]
fn hashes_dash_prefixed_arguments() {
    let cases = [
        ("-abc", "4d191ef72101975a9d6a268e1bf604473a1b4afc"),
        ("--upper", "c7598c8df0319efd8a99d81b4fee967748438d53"),
        ("--help", "9a8265a5ba2c33881e2717e7581df323a5188174"),
    ];
    for &(arg, expected) in cases.iter() {
        let out = sha1(&[arg]);
        assert_eq!(out.status.code(), Some(0), "argument {}", arg);
        assert_eq!(String::from_utf8_lossy(&out.stdout), format!("{}\n", expected));
    }
}

#[test]
fn missing_argument_fails() {
    let out = sha1(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no input string"));
}
