//! W3C technical report names
//!
//! Keyed by TR shortname, the path segment of `https://www.w3.org/TR/<shortname>/`.

use std::collections::BTreeMap;

use phf::phf_map;

static TECHNICAL_REPORTS: phf::Map<&'static str, &'static str> = phf_map! {
    "activitypub" => "W3C ActivityPub",
    "annotation-protocol" => "W3C Web Annotation Protocol",
    "beacon" => "W3C Beacon",
    "clear-site-data" => "W3C Clear Site Data",
    "client-hints-infrastructure" => "W3C Client Hints Infrastructure",
    "cors" => "W3C Cross-Origin Resource Sharing",
    "CSP" => "W3C Content Security Policy",
    "CSP1" => "W3C Content Security Policy 1.0",
    "CSP2" => "W3C Content Security Policy Level 2",
    "CSP3" => "W3C Content Security Policy Level 3",
    "eventsource" => "W3C Server-Sent Events",
    "fetch-metadata" => "W3C Fetch Metadata Request Headers",
    "json-ld" => "W3C JSON-LD",
    "ldn" => "W3C Linked Data Notifications",
    "ldp" => "W3C Linked Data Platform",
    "micropub" => "W3C Micropub",
    "mixed-content" => "W3C Mixed Content",
    "network-error-logging" => "W3C Network Error Logging",
    "NOTE-drp-19970825" => "W3C Distribution and Replication Protocol",
    "permissions-policy" => "W3C Permissions Policy",
    "preload" => "W3C Preload",
    "referrer-policy" => "W3C Referrer Policy",
    "reporting" => "W3C Reporting API",
    "reporting-1" => "W3C Reporting API",
    "resource-hints" => "W3C Resource Hints",
    "resource-timing" => "W3C Resource Timing",
    "resource-timing-2" => "W3C Resource Timing Level 2",
    "server-timing" => "W3C Server Timing",
    "tracking-dnt" => "W3C Tracking Preference Expression (DNT)",
    "upgrade-insecure-requests" => "W3C Upgrade Insecure Requests",
    "webmention" => "W3C Webmention",
    "websub" => "W3C WebSub",
};

/// Report-name table: the built-in entries plus configured overrides.
#[derive(Debug, Clone, Default)]
pub struct W3cReports {
    extra: BTreeMap<String, String>,
}

impl W3cReports {
    pub fn new(extra: BTreeMap<String, String>) -> Self {
        Self { extra }
    }

    /// Display name for a TR shortname; configured entries win.
    pub fn lookup(&self, shortname: &str) -> Option<&str> {
        self.extra
            .get(shortname)
            .map(String::as_str)
            .or_else(|| TECHNICAL_REPORTS.get(shortname).copied())
    }
}

/// Extract the TR shortname from a URL path.
///
/// `/TR/server-timing/` -> `server-timing`, `/TR/NOTE-drp-19970825.html` ->
/// `NOTE-drp-19970825`. Paths outside `/TR/` have no shortname.
pub fn technical_report_shortname(path: &str) -> Option<&str> {
    let report = path.strip_prefix("/TR/")?;
    let report = report.strip_suffix('/').unwrap_or(report);
    let report = match report.rfind('.') {
        Some(dot) => &report[..dot],
        None => report,
    };
    (!report.is_empty()).then_some(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortname_extraction() {
        assert_eq!(
            technical_report_shortname("/TR/server-timing/"),
            Some("server-timing")
        );
        assert_eq!(technical_report_shortname("/TR/CSP3"), Some("CSP3"));
        assert_eq!(
            technical_report_shortname("/TR/NOTE-drp-19970825.html"),
            Some("NOTE-drp-19970825")
        );
        assert_eq!(technical_report_shortname("/TR/"), None);
        assert_eq!(technical_report_shortname("/2011/rdf-wg/"), None);
    }

    #[test]
    fn test_configured_entries_take_precedence() {
        let reports = W3cReports::new(BTreeMap::from([
            ("server-timing".to_string(), "Server Timing".to_string()),
            ("edit-vocab".to_string(), "W3C Editing Vocabulary".to_string()),
        ]));
        assert_eq!(reports.lookup("server-timing"), Some("Server Timing"));
        assert_eq!(reports.lookup("edit-vocab"), Some("W3C Editing Vocabulary"));
        assert_eq!(reports.lookup("beacon"), Some("W3C Beacon"));
        assert_eq!(reports.lookup("unknown-report"), None);
    }
}
