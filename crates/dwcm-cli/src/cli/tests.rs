use super::*;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_split() {
    match parse(&["dwcm", "split", "http://a.org/1.jpg|http://a.org/2.jpg"]) {
        CliCommand::Split { value } => {
            assert_eq!(value, "http://a.org/1.jpg|http://a.org/2.jpg");
        }
        _ => panic!("expected Split"),
    }
}

#[test]
fn cli_parse_mime_format() {
    match parse(&["dwcm", "mime", "--format", "image/jpg"]) {
        CliCommand::Mime { format, url } => {
            assert_eq!(format.as_deref(), Some("image/jpg"));
            assert!(url.is_none());
        }
        _ => panic!("expected Mime"),
    }
}

#[test]
fn cli_parse_mime_url() {
    match parse(&["dwcm", "mime", "--url", "http://a.org/x.png"]) {
        CliCommand::Mime { format, url } => {
            assert!(format.is_none());
            assert_eq!(url.as_deref(), Some("http://a.org/x.png"));
        }
        _ => panic!("expected Mime"),
    }
}

#[test]
fn cli_mime_format_conflicts_with_url() {
    assert!(Cli::try_parse_from([
        "dwcm",
        "mime",
        "--format",
        "image/png",
        "--url",
        "http://a.org/x.png"
    ])
    .is_err());
}

#[test]
fn cli_parse_classify() {
    match parse(&["dwcm", "classify", "http://a.org/x.jpg"]) {
        CliCommand::Classify { url, format } => {
            assert_eq!(url, "http://a.org/x.jpg");
            assert!(format.is_none());
        }
        _ => panic!("expected Classify"),
    }
}

#[test]
fn cli_parse_classify_with_format() {
    match parse(&["dwcm", "classify", "http://a.org/x", "--format", "image/png"]) {
        CliCommand::Classify { url, format } => {
            assert_eq!(url, "http://a.org/x");
            assert_eq!(format.as_deref(), Some("image/png"));
        }
        _ => panic!("expected Classify"),
    }
}

#[test]
fn cli_parse_basis_of_record() {
    match parse(&["dwcm", "basis-of-record", "preserved specimen"]) {
        CliCommand::BasisOfRecord { value } => assert_eq!(value, "preserved specimen"),
        _ => panic!("expected BasisOfRecord"),
    }
}

#[test]
fn cli_parse_typified_name() {
    match parse(&["dwcm", "typified-name", "Holotype of Abies alba Mill."]) {
        CliCommand::TypifiedName { value } => {
            assert_eq!(value, "Holotype of Abies alba Mill.");
        }
        _ => panic!("expected TypifiedName"),
    }
}
