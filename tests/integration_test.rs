use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;

use expertdir::{
    fallback, filter, search, source, Directory, FileSource, HttpSource, LoadError, Matcher,
    Person, SearchField, Source, TextSource, CANONICAL_FIELDS,
};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

const TABLE: &str = "\
name,affiliation,keyword1,keyword2,keyword3
Ada Lovelace,Analytical Society,Mathematics,Computing,
Alan Turing,Bletchley Park,Cryptography,Mathematics,Artificial Intelligence

Grace Hopper,US Navy,Compilers,,
Ada Lovelace,Analytical Society,Mathematics,Computing,
";

/// Write `contents` to `experts.csv` in a fresh temp directory.
fn write_table(contents: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("experts.csv");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

fn names(people: &[Person]) -> Vec<&str> {
    people.iter().map(|p| p.name.as_str()).collect()
}

/// Five case-folded fields contain `needle`.
fn contains_anywhere(p: &Person, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    CANONICAL_FIELDS
        .iter()
        .any(|&f| p.field(f).to_lowercase().contains(&needle))
}

/// Answer a single HTTP request on a loopback port with `status` and `body`.
/// Returns the URL to fetch.
fn serve_once(status: &'static str, content_type: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        // Drain the request head before answering.
        let mut request: Vec<u8> = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
    });

    format!("http://{addr}/experts.csv")
}

/// A source that always fails the way an unreachable server would.
struct Unreachable;

impl Source for Unreachable {
    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        Err(LoadError::Status { url: "https://example.invalid/experts.csv".into(), status: 503 })
    }

    fn describe(&self) -> String {
        "unreachable".into()
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn loads_file_in_source_order() {
    let (_dir, path) = write_table(TABLE.as_bytes());
    let dir = Directory::load(&FileSource::new(&path));

    assert!(!dir.is_fallback());
    assert!(dir.notice().is_none());
    assert_eq!(
        names(dir.records()),
        ["Ada Lovelace", "Alan Turing", "Grace Hopper", "Ada Lovelace"],
        "blank line skipped, duplicate kept"
    );
    assert_eq!(dir.records()[2].keyword2, "");
}

#[test]
fn stats_follow_loaded_records() {
    let dir = Directory::load(&TextSource::new(TABLE));
    let stats = dir.stats();

    assert_eq!(stats.expert_count, 3);
    assert_eq!(stats.affiliation_count, 3);
    assert_eq!(stats.expertise_count, 5);
}

#[test]
fn missing_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = Directory::load(&FileSource::new(dir.path().join("nope.csv")));

    assert!(loaded.is_fallback());
    assert_eq!(loaded.records(), fallback::records().as_slice());
    assert!(loaded.notice().is_some());
}

#[test]
fn html_payload_falls_back() {
    let (_dir, path) = write_table(b"<!DOCTYPE html>\n<html><body>Page not found</body></html>\n");
    let loaded = Directory::load(&FileSource::new(&path));

    assert!(loaded.is_fallback());
    assert_eq!(loaded.records().len(), fallback::LEN);
    assert!(loaded.notice().unwrap().contains("not tabular"));
}

#[test]
fn malformed_bytes_fall_back() {
    let mut bytes = b"name,affiliation\nAda,".to_vec();
    bytes.extend_from_slice(&[0xC3, 0x28]);
    let (_dir, path) = write_table(&bytes);
    let loaded = Directory::load(&FileSource::new(&path));

    assert!(loaded.is_fallback());
    assert!(loaded.notice().is_some());
}

#[test]
fn bad_status_falls_back() {
    let loaded = Directory::load(&Unreachable);

    assert!(loaded.is_fallback());
    assert_eq!(loaded.stats().expert_count, 10);
    assert!(loaded.notice().unwrap().contains("503"));
}

#[test]
fn http_not_found_falls_back_with_short_notice() {
    let url = serve_once("404 Not Found", "text/plain", "missing");
    let loaded = Directory::load(&*source::from_location(&url));

    assert!(loaded.is_fallback());
    assert_eq!(loaded.records(), fallback::records().as_slice());
    assert_eq!(
        loaded.notice(),
        Some("Expert data file not found. Showing sample data instead.")
    );
}

#[test]
fn http_error_status_is_reported() {
    let url = serve_once("500 Internal Server Error", "text/plain", "boom");
    let err = HttpSource::new(url).fetch().unwrap_err();

    assert!(matches!(err, LoadError::Status { status: 500, .. }));
    assert!(!err.is_not_found());
}

#[test]
fn http_html_body_falls_back() {
    let url = serve_once(
        "200 OK",
        "text/html",
        "<!DOCTYPE html>\n<html><body>Page not found</body></html>\n",
    );
    let loaded = Directory::load(&HttpSource::new(url));

    assert!(loaded.is_fallback());
    assert_eq!(loaded.records().len(), fallback::LEN);
    let notice = loaded.notice().unwrap();
    assert!(notice.contains("not tabular"), "{notice}");
    assert!(notice.ends_with("Showing sample data instead."));
}

#[test]
fn http_table_loads() {
    let url = serve_once("200 OK", "text/csv", "name,affiliation\nAda Lovelace,Analytical Society\n");
    let loaded = Directory::load(&HttpSource::new(url));

    assert!(!loaded.is_fallback());
    assert!(loaded.notice().is_none());
    assert_eq!(names(loaded.records()), ["Ada Lovelace"]);
}

#[test]
fn unclosed_quote_falls_back() {
    let loaded = Directory::load(&TextSource::new("name,affiliation\n\"Ada,Lab\nBob,X\n"));

    assert!(loaded.is_fallback());
    assert!(loaded.notice().unwrap().contains("malformed row near line 2"));
}

#[test]
fn bundled_data_file_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/experts.csv");
    let dir = Directory::load(&FileSource::new(path));

    assert!(!dir.is_fallback());
    assert!(dir.records().iter().any(|p| p.name == "Hinton, Geoffrey"));
}

// ---------------------------------------------------------------------------
// Searching the sample directory
// ---------------------------------------------------------------------------

#[test]
fn machine_learning_matches_keywords_in_order() {
    let results = filter("machine learning", &fallback::records());

    assert!(results.performed);
    assert_eq!(names(&results.matches), ["John Smith", "Aisha Johnson", "James Brown"]);
}

#[test]
fn affiliation_is_searched() {
    let results = filter("University of Technology", &fallback::records());

    assert_eq!(names(&results.matches), ["John Smith", "James Brown"]);
}

#[test]
fn no_match_is_performed_but_empty() {
    let results = filter("zzz-no-match", &fallback::records());

    assert!(results.performed);
    assert!(results.matches.is_empty());
}

#[test]
fn blank_query_is_not_performed() {
    for q in ["", "   ", "\t\n"] {
        let results = filter(q, &fallback::records());
        assert!(!results.performed, "{q:?}");
        assert!(results.matches.is_empty());
    }
}

#[test]
fn results_partition_the_records() {
    let people = fallback::records();

    for q in ["an", "POLICY", " science ", "e", "institute", "x"] {
        let results = filter(q, &people);
        assert!(results.matches.iter().all(|p| contains_anywhere(p, q)), "{q}");

        let missed = people.iter().filter(|p| !results.matches.contains(p));
        assert!(missed.clone().all(|p| !contains_anywhere(p, q)), "{q}");
        assert_eq!(results.matches.len() + missed.count(), people.len());
    }
}

#[test]
fn search_is_repeatable_and_leaves_records_alone() {
    let people = fallback::records();
    let before = people.clone();

    let first = filter("public", &people);
    let second = filter("public", &people);

    assert_eq!(first, second);
    assert_eq!(people, before);
}

#[test]
fn narrower_field_list_skips_affiliation() {
    static NAME_AND_KEYWORDS: &[SearchField] = &[
        SearchField::Name,
        SearchField::Keyword1,
        SearchField::Keyword2,
        SearchField::Keyword3,
    ];

    let people = fallback::records();
    let results = search(&people)
        .query("University of Technology")
        .fields(NAME_AND_KEYWORDS)
        .run();

    assert!(results.performed);
    assert!(results.matches.is_empty());
}

#[test]
fn custom_matcher_works() {
    struct ExactKeyword(&'static str);
    impl Matcher for ExactKeyword {
        fn is_match(&self, person: &Person) -> bool {
            person.keywords().any(|k| k == self.0)
        }
    }

    let people = fallback::records();
    let results = search(&people)
        .query("policy")
        .with_matcher(ExactKeyword("Public Policy"))
        .run();

    assert_eq!(names(&results.matches), ["Elena Rossi", "Carlos Mendoza"]);
}

#[test]
fn custom_matcher_not_consulted_for_blank_query() {
    struct Everything;
    impl Matcher for Everything {
        fn is_match(&self, _person: &Person) -> bool {
            true
        }
    }

    let people = fallback::records();
    let results = search(&people).query(" ").with_matcher(Everything).run();

    assert!(!results.performed);
    assert!(results.matches.is_empty());
}

#[test]
fn respects_limit() {
    let people = fallback::records();
    let results = search(&people).query("machine learning").limit(2).run();

    assert_eq!(names(&results.matches), ["John Smith", "Aisha Johnson"]);
}
