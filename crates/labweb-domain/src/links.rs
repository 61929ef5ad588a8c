//! Identifier landing-page URL resolution

use serde::{Deserialize, Serialize};

/// Kinds of publication identifiers that resolve to a landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    /// Digital Object Identifier
    Doi,
    /// arXiv preprint identifier
    Arxiv,
    /// PubMed identifier
    Pmid,
    /// PubMed Central identifier
    Pmcid,
}

/// Get the URL prefix for an identifier kind
pub fn url_prefix(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Doi => "https://doi.org/",
        LinkKind::Arxiv => "https://arxiv.org/abs/",
        LinkKind::Pmid => "https://pubmed.ncbi.nlm.nih.gov/",
        LinkKind::Pmcid => "https://www.ncbi.nlm.nih.gov/pmc/articles/",
    }
}

/// Get the full landing-page URL for an identifier value
pub fn identifier_url(kind: LinkKind, value: &str) -> String {
    format!("{}{}", url_prefix(kind), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doi_url() {
        assert_eq!(
            identifier_url(LinkKind::Doi, "10.1234/test"),
            "https://doi.org/10.1234/test"
        );
    }

    #[test]
    fn test_arxiv_url() {
        assert_eq!(
            identifier_url(LinkKind::Arxiv, "2301.12345"),
            "https://arxiv.org/abs/2301.12345"
        );
    }
}
