use serde::{Deserialize, Serialize};

// Supported document kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocKind {
    Pep,
    Gh,
}

impl DocKind {
    // case-insensitive; anything else is rejected by the pipeline
    pub fn parse(kind: &str) -> Option<Self> {
        match kind.to_ascii_lowercase().as_str() {
            "pep" => Some(DocKind::Pep),
            "gh" => Some(DocKind::Gh),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            DocKind::Pep => "pep",
            DocKind::Gh => "gh",
        }
    }

    // sole cache key for a document, e.g. "pep-0008" / "gh-1234"
    pub fn canonical_key(&self, number: u32) -> String {
        format!("{}-{:04}", self.tag(), number)
    }
}

// /api/tldr request format
#[derive(Deserialize, Serialize, Clone)]
pub struct TldrRequest {
    pub kind: String,
    pub number: u32,
}

// /api/tldr response format
#[derive(Deserialize, Serialize, Clone)]
pub struct TldrResponse {
    pub key: String,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_key_zero_pads_to_four() {
        assert_eq!(DocKind::Pep.canonical_key(8), "pep-0008");
        assert_eq!(DocKind::Gh.canonical_key(1234), "gh-1234");
        assert_eq!(DocKind::Gh.canonical_key(12345), "gh-12345");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(DocKind::parse("PEP"), Some(DocKind::Pep));
        assert_eq!(DocKind::parse("gh"), Some(DocKind::Gh));
        assert_eq!(DocKind::parse("rfc"), None);
    }
}
