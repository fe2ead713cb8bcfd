use triplegraph::pipeline::{process, Processor};
use triplegraph::rdf::RDF_TYPE;
use triplegraph::{NoopObserver, ProcessingError, Triple};
use std::sync::Arc;

const PERSON: &str = "https://id.parliament.uk/43RHonMf";

fn fixture(name: &str) -> Vec<u8> {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read(&path).unwrap_or_else(|e| panic!("reading {path}: {e}"))
}

fn quiet() -> Processor {
    Processor::default().with_observer(Arc::new(NoopObserver))
}

#[test]
fn test_one_edge_fixture() {
    let result = quiet().process(&fixture("one_edge.nt")).unwrap();

    let expected = vec![
        Triple::new(PERSON, RDF_TYPE, "https://id.parliament.uk/schema/Person"),
        Triple::new(PERSON, "https://id.parliament.uk/schema/personGivenName", "\"Diane\"^^<xsd:string>"),
        Triple::new(PERSON, "https://id.parliament.uk/schema/personOtherNames", "\"Julie\"^^<xsd:string>"),
        Triple::new(PERSON, "https://id.parliament.uk/schema/personFamilyName", "\"Abbott\"^^<xsd:string>"),
        Triple::new(PERSON, "http://example.com/F31CBD81AD8343898B49DC65743F0BDF", "\"Ms Diane Abbott\"^^<xsd:string>"),
        Triple::new(PERSON, "http://example.com/D79B0BAC513C4A9A87C9D5AFF1FC632F", "\"Rt Hon Diane Abbott MP\"^^<xsd:string>"),
        Triple::new(PERSON, "https://id.parliament.uk/schema/Test", "https://id.parliament.uk/12345678"),
    ];

    assert_eq!(result.statements_by_subject.len(), 1);
    assert_eq!(result.statements_by_subject[PERSON], expected);

    assert_eq!(result.edges_by_subject.len(), 1);
    let edges = &result.edges_by_subject[PERSON];
    assert_eq!(edges.len(), 1);
    assert_eq!(
        edges["https://id.parliament.uk/schema/Test"],
        vec!["https://id.parliament.uk/12345678".to_string()]
    );
}

#[test]
fn test_no_edges_fixture() {
    let result = quiet().process(&fixture("no_edges.nt")).unwrap();

    assert_eq!(result.statements_by_subject.len(), 1);
    assert_eq!(result.statements_by_subject[PERSON].len(), 4);
    assert_eq!(result.statements_by_subject[PERSON][3].object, "_:incumbency1");
    assert!(result.edges_by_subject.is_empty());
}

#[test]
fn test_mixed_fixture() {
    let result = quiet().process(&fixture("mixed.nt")).unwrap();

    let subjects: Vec<_> = result.statements_by_subject.keys().map(String::as_str).collect();
    assert_eq!(
        subjects,
        vec![
            PERSON,
            "https://id.parliament.uk/m1",
            "_:inc1",
            "https://id.parliament.uk/seat1",
        ]
    );
    assert_eq!(result.statements_by_subject[PERSON].len(), 5);

    let edge_subjects: Vec<_> = result.edges_by_subject.keys().map(String::as_str).collect();
    assert_eq!(edge_subjects, vec![PERSON, "_:inc1"]);
    assert_eq!(
        result.edges_by_subject[PERSON]["https://id.parliament.uk/schema/partyMemberHasPartyMembership"],
        vec![
            "https://id.parliament.uk/m1".to_string(),
            "https://id.parliament.uk/m2".to_string(),
            "https://id.parliament.uk/m1".to_string(),
        ]
    );
    assert_eq!(result.edges_by_subject[PERSON].len(), 1);

    assert_eq!(
        result.statements_by_subject["https://id.parliament.uk/m1"][1].object,
        "\"1987-06-11+01:00\"^^<xsd:date>"
    );
    assert_eq!(
        result.statements_by_subject["https://id.parliament.uk/seat1"][0].object,
        "\"Hackney North and Stoke Newington\"@en"
    );
}

#[test]
fn test_rdf_type_never_produces_edges() {
    let body = format!(
        "<{PERSON}> <{RDF_TYPE}> <https://id.parliament.uk/schema/Person> .\n\
         <{PERSON}> <{RDF_TYPE}> \"Person\" .\n\
         <{PERSON}> <{RDF_TYPE}> _:t .\n"
    );
    let result = process(body.as_bytes()).unwrap();

    assert_eq!(result.statements_by_subject[PERSON].len(), 3);
    assert!(result.edges_by_subject.is_empty());
}

#[test]
fn test_statement_order_matches_line_order() {
    let mut body = String::new();
    for i in 0..50 {
        let subject = if i % 3 == 0 { "http://s/a" } else { "http://s/b" };
        body.push_str(&format!("<{subject}> <http://p/n> \"{i}\"^^<http://www.w3.org/2001/XMLSchema#integer> .\n"));
    }
    let result = process(body.as_bytes()).unwrap();

    let values = |subject: &str| -> Vec<String> {
        result.statements_by_subject[subject]
            .iter()
            .map(|t| t.object.clone())
            .collect()
    };
    let expected_a: Vec<_> = (0..50)
        .filter(|i| i % 3 == 0)
        .map(|i| format!("\"{i}\"^^<xsd:integer>"))
        .collect();
    let expected_b: Vec<_> = (0..50)
        .filter(|i| i % 3 != 0)
        .map(|i| format!("\"{i}\"^^<xsd:integer>"))
        .collect();

    assert_eq!(values("http://s/a"), expected_a);
    assert_eq!(values("http://s/b"), expected_b);
}

#[test]
fn test_identical_input_gives_identical_output() {
    let body = fixture("mixed.nt");
    assert_eq!(process(&body).unwrap(), process(&body).unwrap());
}

#[test]
fn test_empty_input() {
    let result = process(b"").unwrap();
    assert!(result.statements_by_subject.is_empty());
    assert!(result.edges_by_subject.is_empty());
}

#[test]
fn test_malformed_line_aborts_everything() {
    let mut body = fixture("one_edge.nt");
    body.extend_from_slice(b"<https://id.parliament.uk/43RHonMf> <https://id.parliament.uk/schema/Test>\n");

    let err = process(&body).unwrap_err();
    match &err {
        ProcessingError::Decode(decode) => assert_eq!(decode.line, 8),
        other => panic!("expected decode error, got {other:?}"),
    }
    assert!(err.to_string().starts_with("lenient parsing: line 8: invalid object in "));
}

#[test]
fn test_not_triples() {
    let err = process(br#"{"error":"Definitely not Triples"}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"lenient parsing: line 1: invalid subject in {"error":"Definitely not Triples"}"#
    );
}

#[test]
fn test_blank_node_cannot_be_spelled_as_iri() {
    let err = process(b"<http://s> <http://p> <_:x> .\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "lenient parsing: line 1: invalid object in <http://s> <http://p> <_:x> ."
    );

    let err = process(b"<http://s> <http://p> \"v\" .\n<_:b0> <http://p> \"w\" .\n").unwrap_err();
    assert!(err.to_string().starts_with("lenient parsing: line 2: invalid subject in "));
}

#[test]
fn test_blank_node_and_resource_with_same_label_stay_apart() {
    let result = process(
        b"<http://s> <http://p> <urn:x> .\n\
          <http://s> <http://p> _:x .\n\
          <urn:b0> <http://p> \"v\" .\n\
          _:b0 <http://p> \"w\" .\n",
    )
    .unwrap();

    let objects: Vec<_> = result.statements_by_subject["http://s"]
        .iter()
        .map(|t| t.object.as_str())
        .collect();
    assert_eq!(objects, vec!["urn:x", "_:x"]);
    assert_ne!(objects[0], objects[1]);

    assert_eq!(result.edges_by_subject["http://s"]["http://p"], vec!["urn:x"]);

    let subjects: Vec<_> = result.statements_by_subject.keys().map(String::as_str).collect();
    assert_eq!(subjects, vec!["http://s", "urn:b0", "_:b0"]);
}
