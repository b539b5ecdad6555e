use crate::error::TldrError;

// Tokenization capability. The pipeline only needs the two guarantees below:
// encode is deterministic, and decoding a contiguous run of token units then
// concatenating gives back exactly the original text.
pub trait Tokenizer: Send + Sync {
    fn encode(&self, text: &str) -> Result<Vec<String>, TldrError>;
    fn decode(&self, tokens: &[String]) -> Result<String, TldrError>;
}

// Whitespace-delimited token units with the delimiter kept attached, so
// decode is plain concatenation and a chunk boundary can never drop or
// duplicate a character.
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn encode(&self, text: &str) -> Result<Vec<String>, TldrError> {
        Ok(text
            .split_inclusive(char::is_whitespace)
            .map(str::to_string)
            .collect())
    }

    fn decode(&self, tokens: &[String]) -> Result<String, TldrError> {
        Ok(tokens.concat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_is_exact() {
        let tokenizer = WordTokenizer;
        for text in [
            "line1. line2.",
            "  leading and trailing  ",
            "tabs\tand\nnewlines\r\n",
            "unicode: héllo wörld — ok",
            "",
        ] {
            let tokens = tokenizer.encode(text).unwrap();
            assert_eq!(tokenizer.decode(&tokens).unwrap(), text);
        }
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        let tokens = WordTokenizer.encode("").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn chunked_decode_concatenates_to_original() {
        let tokenizer = WordTokenizer;
        let text = "one two three four five six seven";
        let tokens = tokenizer.encode(text).unwrap();

        let mut rebuilt = String::new();
        let mut counted = 0;
        for chunk in tokens.chunks(3) {
            counted += chunk.len();
            rebuilt.push_str(&tokenizer.decode(chunk).unwrap());
        }
        assert_eq!(counted, tokens.len());
        assert_eq!(rebuilt, text);
    }
}
