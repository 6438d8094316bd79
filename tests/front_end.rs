use morphmatch::{
    front_end::{parse, Error},
    graph::GraphError,
    matching::GraphMatcher,
    types::Name,
};
use std::io::Write;

const DOCUMENT: &str = "\
; type graph
(graph G_0 (edges (1 12 2) (2 22 2)))

(graph G_1 (edges (A a B) (A' a' B) (B b C) (B b' C')))
(graph G_0Sub1 (edges (X xy Y)))

(morphism m1 (from G_1) (to G_0)
  (map (A 1) (A' 1) (B 2) (C 2) (C' 2)
       (a 12) (a' 12) (b 22) (b' 22)))
(morphism m0Sub1 (from G_0Sub1) (to G_0)
  (map (X 1) (xy 12) (Y 2)))
";

fn write_document(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_match() {
    let file = write_document(DOCUMENT);
    let document = parse(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
    assert_eq!(document.graphs().len(), 3);
    assert_eq!(document.morphisms().len(), 2);

    let pattern = document.graph("G_0Sub1").unwrap();
    let host = document.graph("G_1").unwrap();
    let mut matcher = GraphMatcher::default();
    assert_eq!(matcher.all_matches(&pattern, &host, false).unwrap().len(), 4);
    assert_eq!(matcher.all_matches(&pattern, &host, true).unwrap().len(), 4);

    let typed = matcher
        .all_typed_matches(
            &document.morphism("m0Sub1").unwrap(),
            &document.morphism("m1").unwrap(),
        )
        .unwrap();
    assert_eq!(typed.len(), 2);
}

#[test]
fn test_invalid_documents() {
    let file = write_document("(graph G (nodes a) (edges (a 1 b))");
    assert!(parse(&std::fs::read_to_string(file.path()).unwrap()).is_err());

    let document = parse("(graph G (nodes a)) (morphism m (from G) (to H))").unwrap();
    assert_eq!(
        document.morphism("m"),
        Err(Error::UnknownGraph(Name::from("H")))
    );
    assert_eq!(
        document.graph("H").unwrap_err().to_string(),
        "no graph named H"
    );

    let document =
        parse("(graph G (nodes x)) (graph T (nodes t u)) (morphism m (from G) (to T) (map (x t) (x u)))")
            .unwrap();
    assert_eq!(
        document.morphism("m"),
        Err(Error::Graph(GraphError::ConflictingImages {
            morphism: Name::from("m"),
            label: Name::from("x"),
        }))
    );
}
