//! Minimal markup tokenizer.
//!
//! Recognises start/end/self-closing tags with quote-aware attributes,
//! comments and text runs. Declarations (`<!DOCTYPE>`, `<?xml?>`) and CDATA
//! sections are skipped. The bodies of `<script>` and `<style>` are emitted
//! as a single text run so that `<` inside code is never taken for a tag.
//!
//! A tag that never reaches its closing `>` (including one whose quoted
//! attribute value is unterminated) ends tokenization: everything after it
//! is unstructured text.

use altwise_protocols::Span;

/// Shape of a tag token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<name …>`
    Open,
    /// `</name>`
    Close,
    /// `<name …/>`
    SelfClosing,
}

/// One attribute of a tag. `value` is `None` for valueless attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
}

/// A tag with its byte span (from `<` to just past `>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    pub name: &'a str,
    pub kind: TagKind,
    pub span: Span,
    pub attributes: Vec<Attribute<'a>>,
}

impl<'a> Tag<'a> {
    /// Case-insensitive tag name comparison.
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// True for `Open` and `SelfClosing` tags.
    pub fn is_start(&self) -> bool {
        matches!(self.kind, TagKind::Open | TagKind::SelfClosing)
    }

    /// Value of the first attribute named `name` (case-insensitive).
    /// Valueless attributes yield `Some("")`.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .map(|a| a.value.unwrap_or(""))
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name.eq_ignore_ascii_case(name))
    }
}

/// A lexical unit of markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Tag(Tag<'a>),
    Comment { span: Span, body: &'a str },
    Text { span: Span, body: &'a str },
}

/// Iterator over the tokens of a document.
pub struct Tokenizer<'a> {
    text: &'a str,
    pos: usize,
    raw_text_until: Option<&'static str>,
}

/// Tokenize `text`.
pub fn tokenize(text: &str) -> Tokenizer<'_> {
    Tokenizer {
        text,
        pos: 0,
        raw_text_until: None,
    }
}

/// Only the tags of `text`.
pub fn tags(text: &str) -> impl Iterator<Item = Tag<'_>> {
    tokenize(text).filter_map(|token| match token {
        Token::Tag(tag) => Some(tag),
        _ => None,
    })
}

impl<'a> Tokenizer<'a> {
    fn bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    fn starts_with_at(&self, at: usize, prefix: &str) -> bool {
        self.bytes()
            .get(at..at + prefix.len())
            .is_some_and(|b| b.eq_ignore_ascii_case(prefix.as_bytes()))
    }

    fn find_from(&self, from: usize, needle: &str) -> Option<usize> {
        self.text.get(from..)?.find(needle).map(|i| from + i)
    }

    fn find_ignore_case_from(&self, from: usize, needle: &str) -> Option<usize> {
        let needle = needle.as_bytes();
        let bytes = self.bytes();
        if needle.is_empty() || from >= bytes.len() {
            return None;
        }
        bytes[from..]
            .windows(needle.len())
            .position(|w| w.eq_ignore_ascii_case(needle))
            .map(|i| from + i)
    }

    fn text_token(&mut self, start: usize, end: usize) -> Token<'a> {
        self.pos = end;
        Token::Text {
            span: Span::new(start, end),
            body: &self.text[start..end],
        }
    }

    /// Text from `start` up to the next `<` at or after `search_from`.
    fn text_run(&mut self, start: usize, search_from: usize) -> Token<'a> {
        let end = self
            .find_from(search_from, "<")
            .unwrap_or(self.text.len());
        self.text_token(start, end)
    }

    fn read_name(&self, from: usize) -> usize {
        let bytes = self.bytes();
        let mut i = from;
        while i < bytes.len()
            && (bytes[i].is_ascii_alphanumeric() || matches!(bytes[i], b'-' | b'_' | b':' | b'.'))
        {
            i += 1;
        }
        i
    }

    fn skip_whitespace(&self, from: usize) -> usize {
        let bytes = self.bytes();
        let mut i = from;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        i
    }

    /// Parse `<name attr=… >` starting at `start`. `None` when the tag is
    /// unterminated.
    fn parse_start_tag(&self, start: usize) -> Option<Tag<'a>> {
        let bytes = self.bytes();
        let name_end = self.read_name(start + 1);
        let name = &self.text[start + 1..name_end];
        let mut attributes = Vec::new();
        let mut i = name_end;

        loop {
            i = self.skip_whitespace(i);
            let c = *bytes.get(i)?;
            match c {
                b'>' => {
                    return Some(Tag {
                        name,
                        kind: TagKind::Open,
                        span: Span::new(start, i + 1),
                        attributes,
                    });
                }
                b'/' if bytes.get(i + 1) == Some(&b'>') => {
                    return Some(Tag {
                        name,
                        kind: TagKind::SelfClosing,
                        span: Span::new(start, i + 2),
                        attributes,
                    });
                }
                b'/' | b'"' | b'\'' | b'=' => {
                    i += 1;
                    continue;
                }
                _ => {}
            }

            let attr_start = i;
            while i < bytes.len()
                && !bytes[i].is_ascii_whitespace()
                && !matches!(bytes[i], b'=' | b'>' | b'/' | b'"' | b'\'')
            {
                i += 1;
            }
            let attr_name = &self.text[attr_start..i];

            let after_name = self.skip_whitespace(i);
            if bytes.get(after_name) != Some(&b'=') {
                attributes.push(Attribute {
                    name: attr_name,
                    value: None,
                });
                continue;
            }

            i = self.skip_whitespace(after_name + 1);
            let value = match *bytes.get(i)? {
                quote @ (b'"' | b'\'') => {
                    let quote = if quote == b'"' { "\"" } else { "'" };
                    let close = self.find_from(i + 1, quote)?;
                    let value = &self.text[i + 1..close];
                    i = close + 1;
                    value
                }
                _ => {
                    let value_start = i;
                    while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                        i += 1;
                    }
                    &self.text[value_start..i]
                }
            };
            attributes.push(Attribute {
                name: attr_name,
                value: Some(value),
            });
        }
    }

    fn parse_end_tag(&self, start: usize) -> Option<Tag<'a>> {
        let name_end = self.read_name(start + 2);
        let close = self.find_from(name_end, ">")?;
        Some(Tag {
            name: &self.text[start + 2..name_end],
            kind: TagKind::Close,
            span: Span::new(start, close + 1),
            attributes: Vec::new(),
        })
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.text.len();

        if let Some(element) = self.raw_text_until.take() {
            let closing = format!("</{}", element);
            let end = self
                .find_ignore_case_from(self.pos, &closing)
                .unwrap_or(len);
            if end > self.pos {
                let start = self.pos;
                return Some(self.text_token(start, end));
            }
        }

        while self.pos < len {
            let start = self.pos;
            let bytes = self.bytes();

            if bytes[start] != b'<' {
                return Some(self.text_run(start, start));
            }

            if self.starts_with_at(start, "<!--") {
                let body_start = start + 4;
                let (body_end, end) = match self.find_from(body_start, "-->") {
                    Some(close) => (close, close + 3),
                    None => (len, len),
                };
                self.pos = end;
                return Some(Token::Comment {
                    span: Span::new(start, end),
                    body: &self.text[body_start..body_end],
                });
            }

            if self.starts_with_at(start, "<![CDATA[") {
                self.pos = self.find_from(start, "]]>").map_or(len, |i| i + 3);
                continue;
            }

            if self.starts_with_at(start, "<!") || self.starts_with_at(start, "<?") {
                self.pos = self.find_from(start, ">").map_or(len, |i| i + 1);
                continue;
            }

            let next = bytes.get(start + 1).copied();
            let is_end_tag =
                next == Some(b'/') && bytes.get(start + 2).is_some_and(u8::is_ascii_alphabetic);

            if is_end_tag {
                return match self.parse_end_tag(start) {
                    Some(tag) => {
                        self.pos = tag.span.end;
                        Some(Token::Tag(tag))
                    }
                    None => {
                        self.pos = len;
                        None
                    }
                };
            }

            if next.is_some_and(|c| c.is_ascii_alphabetic()) {
                return match self.parse_start_tag(start) {
                    Some(tag) => {
                        self.pos = tag.span.end;
                        if tag.kind == TagKind::Open {
                            if tag.is("script") {
                                self.raw_text_until = Some("script");
                            } else if tag.is("style") {
                                self.raw_text_until = Some("style");
                            }
                        }
                        Some(Token::Tag(tag))
                    }
                    None => {
                        tracing::trace!(offset = start, "unterminated tag, stopping tokenizer");
                        self.pos = len;
                        None
                    }
                };
            }

            // Stray '<' that opens nothing.
            return Some(self.text_run(start, start + 1));
        }

        None
    }
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tests;
