//! Parse → generate → parse round trips over realistic documents

use labweb_bibtex::{generate_document, generate_markup, parse};

const LAB_BIBLIOGRAPHY: &str = r#"
% lab bibliography, maintained by hand
@article{chen2023deep,
  author = {Wei Chen and Jane Smith and John Doe},
  title = {Deep Learning for Protein Folding},
  journal = {Nature Methods},
  year = {2023},
  volume = {20},
  number = {4},
  pages = {512--524},
  doi = {10.1038/s41592-023-0001},
  keywords = {deep learning, proteins; structure prediction},
  funding = {NSF-1234567},
}

@inproceedings{doe2022attention,
  author = {John Doe and Mary Jane},
  title = {Attention Mechanisms in {Genomics}},
  booktitle = {Proceedings of NeurIPS},
  year = {2022},
  arxiv = {2206.01234},
  code = {https://github.com/lab/attention-genomics},
}

@phdthesis{smith2021thesis,
  author = {Jane Smith},
  title = {Scalable Inference for Biological Sequences},
  school = {Stanford University},
  year = {2021},
}
"#;

#[test]
fn parses_full_document_in_order() {
    let records = parse(LAB_BIBLIOGRAPHY);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id, "chen2023deep");
    assert_eq!(records[1].id, "doe2022attention");
    assert_eq!(records[2].id, "smith2021thesis");

    assert_eq!(records[0].display_venue, "Nature Methods");
    assert_eq!(records[1].display_venue, "Proceedings of NeurIPS");
    assert_eq!(records[2].display_venue, "PhD Thesis, Stanford University");

    assert_eq!(
        records[1].display_title,
        Some("Attention Mechanisms in Genomics".to_string())
    );
    assert_eq!(
        records[1].url,
        Some("https://arxiv.org/abs/2206.01234".to_string())
    );
    assert_eq!(records[0].funding, Some("NSF-1234567".to_string()));
    assert_eq!(
        records[0].keywords,
        vec!["deep learning", "proteins", "structure prediction"]
    );
}

#[test]
fn round_trip_preserves_scalars() {
    let records = parse(LAB_BIBLIOGRAPHY);
    for original in &records {
        let regenerated = parse(&generate_markup(original));
        assert_eq!(regenerated.len(), 1);
        let reparsed = &regenerated[0];

        assert_eq!(reparsed.record_type, original.record_type);
        assert_eq!(reparsed.author_string, original.author_string);
        assert_eq!(reparsed.year, original.year);
        assert_eq!(reparsed.doi, original.doi);
        assert_eq!(reparsed.url, original.url);
        assert_eq!(reparsed.display_title, original.display_title);
        assert_eq!(reparsed.keywords, original.keywords);
    }
}

#[test]
fn round_trip_entry_type_is_canonical() {
    let records = parse("@inproceedings{k,\n  title = {T},\n}");
    let markup = generate_markup(&records[0]);
    assert!(markup.starts_with("@inproceedings{k"));
}

#[test]
fn malformed_entry_does_not_affect_neighbors() {
    let doc = r#"
@article{good1,
  title = {First},
}

@article{broken,
  title = {missing everything

@article{good2,
  title = {Second},
}
"#;
    let records = parse(doc);
    let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["good1", "good2"]);
}

#[test]
fn generate_document_joins_entries() {
    let records = parse(LAB_BIBLIOGRAPHY);
    let doc = generate_document(&records);
    assert_eq!(doc.matches("@").count(), 3);
    assert!(doc.contains("\n\n@inproceedings"));
    let reparsed = parse(&doc);
    assert_eq!(reparsed.len(), 3);
}
