use std::collections::HashMap;

use axum::extract::{FromRequest, Request};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

/// Decoded form fields. Lookups never fail: a field the body did not
/// carry reads as the empty string.
#[derive(Debug, Default)]
pub struct FieldMap(HashMap<String, String>);

impl FieldMap {
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }
}

/// Decodes an `application/x-www-form-urlencoded` body: segments split on
/// `&`, names split from values on the first `=`, values percent-decoded.
/// A malformed escape anywhere fails the whole decode.
pub fn decode(body: &str) -> AppResult<FieldMap> {
    let mut fields = HashMap::new();
    for segment in body.split('&').filter(|s| !s.is_empty()) {
        let (name, raw_value) = segment.split_once('=').unwrap_or((segment, ""));
        fields.insert(name.to_string(), percent_decode(raw_value)?);
    }
    Ok(FieldMap(fields))
}

fn percent_decode(raw: &str) -> AppResult<String> {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let hi = bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16));
                let lo = bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16));
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi * 16 + lo) as u8);
                        i += 3;
                    }
                    _ => {
                        return Err(AppError::InvalidFormEncoding(format!(
                            "invalid percent-encoding at byte {i}"
                        )))
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(out)
        .map_err(|_| AppError::InvalidFormEncoding("form value is not valid UTF-8".into()))
}

/// Extractor form of [`decode`] for handlers.
pub struct FormBody(pub FieldMap);

#[axum::async_trait]
impl FromRequest<AppRegistry> for FormBody {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppRegistry) -> Result<Self, Self::Rejection> {
        let body = String::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidFormEncoding(e.to_string()))?;
        decode(&body).map(FormBody)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_splits_and_percent_decodes_values() {
        let fields = decode("name=Priya+Sharma&email=priya%40campus.edu").unwrap();
        assert_eq!(fields.get("name"), "Priya Sharma");
        assert_eq!(fields.get("email"), "priya@campus.edu");
    }

    #[test]
    fn test_absent_field_reads_as_empty_string() {
        let fields = decode("name=Priya").unwrap();
        assert_eq!(fields.get("department"), "");
    }

    #[test]
    fn test_value_keeps_everything_after_first_equals() {
        let fields = decode("note=a%3Db=c").unwrap();
        assert_eq!(fields.get("note"), "a=b=c");
    }

    #[test]
    fn test_segment_without_value_decodes_to_empty() {
        let fields = decode("name=&submit").unwrap();
        assert_eq!(fields.get("name"), "");
        assert_eq!(fields.get("submit"), "");
    }

    #[test]
    fn test_empty_body_decodes_to_empty_map() {
        let fields = decode("").unwrap();
        assert_eq!(fields.get("anything"), "");
    }

    #[test]
    fn test_multibyte_values_decode_as_utf8() {
        let fields = decode("name=%E3%83%86%E3%82%B9%E3%83%88").unwrap();
        assert_eq!(fields.get("name"), "テスト");
    }

    #[test]
    fn test_truncated_escape_fails_the_decode() {
        assert!(matches!(
            decode("name=abc%2"),
            Err(AppError::InvalidFormEncoding(_))
        ));
    }

    #[test]
    fn test_non_hex_escape_fails_the_decode() {
        assert!(matches!(
            decode("name=%zz"),
            Err(AppError::InvalidFormEncoding(_))
        ));
    }

    #[test]
    fn test_non_utf8_value_fails_the_decode() {
        assert!(matches!(
            decode("name=%ff%fe"),
            Err(AppError::InvalidFormEncoding(_))
        ));
    }
}
