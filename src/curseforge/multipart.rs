//! Minimal multipart/form-data encoder.
//!
//! The upload endpoint is strict about part order and headers, so the body is
//! written by hand with a fixed boundary instead of going through a generic
//! form encoder.

/// A single form field.
#[derive(Debug, Clone)]
pub struct Part {
    name: String,
    filename: Option<String>,
    content_type: Option<String>,
    data: Vec<u8>,
}

impl Part {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Part {
            name: name.into(),
            filename: None,
            content_type: None,
            data: data.into(),
        }
    }

    pub fn file_name(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn mime(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    fn write_header(&self, boundary: &str, out: &mut Vec<u8>) {
        let mut disposition = format!("form-data; name=\"{}\"", self.name);
        if let Some(filename) = &self.filename {
            disposition.push_str(&format!("; filename=\"{}\"", filename));
        }

        out.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        out.extend_from_slice(format!("Content-Disposition: {}\r\n", disposition).as_bytes());
        if let Some(content_type) = &self.content_type {
            out.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
        }
        out.extend_from_slice(b"\r\n");
    }
}

/// An encoded body together with the `Content-Type` header that describes it.
#[derive(Debug, Clone)]
pub struct MultipartBody {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct MultipartBuilder {
    boundary: String,
    parts: Vec<Part>,
}

impl MultipartBuilder {
    pub fn new(boundary: impl Into<String>) -> Self {
        MultipartBuilder {
            boundary: boundary.into(),
            parts: Vec::new(),
        }
    }

    pub fn part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Names of the parts whose payload contains the boundary text.
    ///
    /// Such a body is still sent as-is; a receiving parser may split it early.
    pub fn boundary_collisions(&self) -> Vec<&str> {
        let needle = self.boundary.as_bytes();
        self.parts
            .iter()
            .filter(|p| {
                !needle.is_empty() && p.data.windows(needle.len()).any(|w| w == needle)
            })
            .map(|p| p.name.as_str())
            .collect()
    }

    pub fn build(self) -> MultipartBody {
        let content_type = self.content_type();
        let payload_len: usize = self.parts.iter().map(|p| p.data.len()).sum();
        let mut bytes = Vec::with_capacity(payload_len + 256 * (self.parts.len() + 1));

        for part in &self.parts {
            part.write_header(&self.boundary, &mut bytes);
            bytes.extend_from_slice(&part.data);
            bytes.extend_from_slice(b"\r\n");
        }
        bytes.extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());

        MultipartBody {
            content_type,
            bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_parts_in_order_with_closing_boundary() {
        let body = MultipartBuilder::new("XBOUNDX")
            .part(Part::new("metadata", br#"{"a":1}"#.to_vec()))
            .part(
                Part::new("file", b"PK\x03\x04zip".to_vec())
                    .file_name("Foo-1.0.0.zip")
                    .mime("application/zip"),
            )
            .build();

        let mut expected = Vec::new();
        expected.extend_from_slice(b"--XBOUNDX\r\n");
        expected.extend_from_slice(b"Content-Disposition: form-data; name=\"metadata\"\r\n\r\n");
        expected.extend_from_slice(b"{\"a\":1}\r\n");
        expected.extend_from_slice(b"--XBOUNDX\r\n");
        expected.extend_from_slice(
            b"Content-Disposition: form-data; name=\"file\"; filename=\"Foo-1.0.0.zip\"\r\n",
        );
        expected.extend_from_slice(b"Content-Type: application/zip\r\n\r\n");
        expected.extend_from_slice(b"PK\x03\x04zip\r\n");
        expected.extend_from_slice(b"--XBOUNDX--\r\n");

        assert_eq!(body.bytes, expected);
        assert_eq!(body.content_type, "multipart/form-data; boundary=XBOUNDX");
    }

    #[test]
    fn empty_builder_is_just_the_terminator() {
        let body = MultipartBuilder::new("B").build();
        assert_eq!(body.bytes, b"--B--\r\n");
    }

    #[test]
    fn detects_boundary_inside_payload() {
        let builder = MultipartBuilder::new("XBOUNDX")
            .part(Part::new("metadata", b"clean".to_vec()))
            .part(Part::new("file", b"..--XBOUNDX..".to_vec()));
        assert_eq!(builder.boundary_collisions(), vec!["file"]);
    }
}
