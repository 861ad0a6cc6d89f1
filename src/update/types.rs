use serde::Deserialize;

/// The `gupdate` document the update service answers with.
///
/// ```xml
/// <gupdate xmlns="http://www.google.com/update2/response" protocol="2.0">
///   <daystart elapsed_seconds="42913"/>
///   <app appid="hfnkpimlhhgieaddgfemjhofmfblmnib" status="ok">
///     <updatecheck codebase="http://.../crl-set-....crx.data" version="56" status="ok"/>
///   </app>
/// </gupdate>
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateResponse {
    #[serde(rename = "app", default)]
    pub apps: Vec<AppUpdate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppUpdate {
    #[serde(rename = "@appid")]
    pub app_id: String,
    #[serde(rename = "updatecheck")]
    pub update_check: Option<UpdateCheck>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCheck {
    #[serde(rename = "@codebase")]
    pub codebase: Option<String>,
    #[serde(rename = "@version")]
    pub version: Option<String>,
}

/// Where the current CRLSet lives and which release it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrlSetVersion {
    pub url: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use quick_xml::de::from_str;

    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gupdate xmlns="http://www.google.com/update2/response" protocol="2.0" server="prod">
  <daystart elapsed_seconds="42913"/>
  <app appid="hfnkpimlhhgieaddgfemjhofmfblmnib" status="ok">
    <updatecheck codebase="http://www.gstatic.com/chrome/crlset/56/crl-set-14830555124393087472.crx.data" hash="" size="0" status="ok" version="56"/>
  </app>
</gupdate>"#;

    #[test]
    fn test_parse_sample_response() {
        let reply: UpdateResponse = from_str(SAMPLE).unwrap();

        assert_eq!(reply.apps.len(), 1);
        let app = &reply.apps[0];
        assert_eq!(app.app_id, "hfnkpimlhhgieaddgfemjhofmfblmnib");

        let check = app.update_check.as_ref().unwrap();
        assert_eq!(
            check.codebase.as_deref(),
            Some("http://www.gstatic.com/chrome/crlset/56/crl-set-14830555124393087472.crx.data")
        );
        assert_eq!(check.version.as_deref(), Some("56"));
    }

    #[test]
    fn test_parse_response_without_updatecheck() {
        let xml = r#"<gupdate protocol="2.0"><app appid="x" status="noupdate"/></gupdate>"#;
        let reply: UpdateResponse = from_str(xml).unwrap();

        assert_eq!(reply.apps.len(), 1);
        assert!(reply.apps[0].update_check.is_none());
    }

    #[test]
    fn test_parse_empty_response() {
        let reply: UpdateResponse = from_str(r#"<gupdate protocol="2.0"/>"#).unwrap();
        assert!(reply.apps.is_empty());
    }
}
