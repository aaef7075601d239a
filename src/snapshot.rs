use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Form field counts extracted by the host from the live document.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFieldCounts {
    pub password: u32,
    pub credit_card_like: u32,
    pub form_count: u32,
}

/// The read-only view of a rendered page the engine consumes. The host is
/// responsible for DOM traversal and text extraction; the engine never
/// touches a document directly.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// Absolute URL of the page.
    pub url: String,
    /// Hostname, possibly still carrying a leading "www.".
    pub domain: String,
    /// Concatenated visible text. May be empty.
    #[serde(default)]
    pub visible_text: String,
    /// "http" or "https".
    pub protocol: String,
    #[serde(default)]
    pub form_fields: FormFieldCounts,
}

impl PageSnapshot {
    /// Build a snapshot from an absolute URL, deriving domain and protocol.
    pub fn from_url(
        url: &str,
        visible_text: String,
        form_fields: FormFieldCounts,
    ) -> Result<Self, ValidationError> {
        let parsed = Url::parse(url)
            .map_err(|e| ValidationError::new("url", format!("not an absolute URL: {e}")))?;
        let domain = parsed
            .host_str()
            .ok_or_else(|| ValidationError::new("url", "URL has no host"))?
            .to_string();
        Ok(PageSnapshot {
            url: url.to_string(),
            domain,
            visible_text,
            protocol: parsed.scheme().to_string(),
            form_fields,
        })
    }

    /// Fail fast on a malformed snapshot so no partial result is produced.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::new("url", "must not be empty"));
        }
        Url::parse(&self.url)
            .map_err(|e| ValidationError::new("url", format!("not an absolute URL: {e}")))?;
        if self.domain.is_empty() {
            return Err(ValidationError::new("domain", "must not be empty"));
        }
        if self.protocol.is_empty() {
            return Err(ValidationError::new("protocol", "must not be empty"));
        }
        Ok(())
    }

    /// Domain with any leading "www." stripped, lowercased for substring
    /// tests against the rule table.
    pub fn normalized_domain(&self) -> String {
        let domain = self.domain.to_lowercase();
        domain
            .strip_prefix("www.")
            .map(str::to_string)
            .unwrap_or(domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_url_derives_domain_and_protocol() {
        let snapshot =
            PageSnapshot::from_url("https://www.example.com/article?id=1", String::new(), FormFieldCounts::default())
                .unwrap();
        assert_eq!(snapshot.domain, "www.example.com");
        assert_eq!(snapshot.protocol, "https");
        assert_eq!(snapshot.normalized_domain(), "example.com");
    }

    #[test]
    fn from_url_rejects_relative_url() {
        let err = PageSnapshot::from_url("/article", String::new(), FormFieldCounts::default())
            .unwrap_err();
        assert_eq!(err.field, "url");
    }

    #[test]
    fn validate_names_the_offending_field() {
        let snapshot = PageSnapshot {
            url: "https://example.com/".to_string(),
            domain: String::new(),
            visible_text: String::new(),
            protocol: "https".to_string(),
            form_fields: FormFieldCounts::default(),
        };
        let err = snapshot.validate().unwrap_err();
        assert_eq!(err.field, "domain");

        let snapshot = PageSnapshot {
            url: String::new(),
            ..Default::default()
        };
        assert_eq!(snapshot.validate().unwrap_err().field, "url");
    }

    #[test]
    fn www_is_only_stripped_from_the_front() {
        let snapshot = PageSnapshot {
            url: "https://news.www-tracker.com/".to_string(),
            domain: "news.www-tracker.com".to_string(),
            visible_text: String::new(),
            protocol: "https".to_string(),
            form_fields: FormFieldCounts::default(),
        };
        assert_eq!(snapshot.normalized_domain(), "news.www-tracker.com");
    }

    #[test]
    fn snapshot_json_round_trip() {
        let snapshot = PageSnapshot::from_url(
            "http://example.com/login",
            "Enter your password".to_string(),
            FormFieldCounts {
                password: 1,
                credit_card_like: 0,
                form_count: 1,
            },
        )
        .unwrap();
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: PageSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, parsed);
    }
}
