//! Human-readable labels for documentation and specification links
//!
//! The [`LabelResolver`] owns an ordered list of [`HostAdapter`]s and picks
//! the first one whose hostname matches the detail's documentation URL.
//! When no adapter matches, the detail's `spec-name` is used verbatim.
//!
//! Adapters can recognize a host but still fail to produce a label (an
//! unknown W3C report, an IETF link without a section). Such gaps are
//! errors in strict mode and degrade to a fallback string otherwise.

pub mod ietf;
pub mod w3c;

use crate::error::{Error, Result};
use crate::generators::GeneratorConfig;
use crate::ir::ConceptValueDetail;

pub use w3c::W3cReports;

/// Why an adapter could not produce a label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelGap {
    /// The W3C report shortname is not in the report-name table
    UnmappedReport(String),
    /// The IETF link does not carry a recognizable section reference
    UnresolvedSection,
}

impl LabelGap {
    fn reason(&self) -> String {
        match self {
            LabelGap::UnmappedReport(shortname) => {
                format!("no W3C report name registered for '{}'", shortname)
            }
            LabelGap::UnresolvedSection => "no IETF section reference in link".to_string(),
        }
    }

    fn fallback(&self, detail: &ConceptValueDetail) -> String {
        match self {
            LabelGap::UnmappedReport(_) => detail.spec_name.clone(),
            LabelGap::UnresolvedSection => String::new(),
        }
    }
}

/// Label strategy for one family of hosts
#[derive(Debug, Clone)]
pub enum HostAdapter {
    /// `w3.org` technical reports, named through a lookup table
    W3cTechnicalReport(W3cReports),
    /// Web Incubator Community Group drafts on `wicg.github.io`
    Wicg,
    /// IETF documents; the host list is configurable
    IetfDatatracker { hosts: Vec<String> },
}

impl HostAdapter {
    pub fn matches(&self, host: &str) -> bool {
        match self {
            HostAdapter::W3cTechnicalReport(_) => host == "w3.org" || host == "www.w3.org",
            HostAdapter::Wicg => host == "wicg.github.io",
            HostAdapter::IetfDatatracker { hosts } => hosts.iter().any(|h| h == host),
        }
    }

    pub fn resolve(
        &self,
        detail: &ConceptValueDetail,
        include_fragment: bool,
    ) -> std::result::Result<String, LabelGap> {
        match self {
            HostAdapter::W3cTechnicalReport(reports) => {
                let path = detail.documentation.path();
                let shortname = w3c::technical_report_shortname(path)
                    .ok_or_else(|| LabelGap::UnmappedReport(path.to_string()))?;
                reports
                    .lookup(shortname)
                    .map(str::to_string)
                    .ok_or_else(|| LabelGap::UnmappedReport(shortname.to_string()))
            }
            HostAdapter::Wicg => Ok(wicg_label(&detail.spec_name)),
            HostAdapter::IetfDatatracker { .. } => {
                if !include_fragment {
                    return Ok(detail.spec_name.clone());
                }
                ietf::parse_section_ref(&detail.documentation)
                    .map(|section| section.label())
                    .ok_or(LabelGap::UnresolvedSection)
            }
        }
    }
}

/// Normalize a WICG spec name to `WICG <name>`.
fn wicg_label(spec_name: &str) -> String {
    let trimmed = spec_name.trim();
    let name = match trimmed.get(..5) {
        Some(prefix) if prefix.eq_ignore_ascii_case("wicg ") => trimmed[5..].trim_start(),
        _ => trimmed,
    };
    format!("WICG {}", name)
}

/// Resolves link labels by dispatching on the documentation hostname
#[derive(Debug, Clone, Default)]
pub struct LabelResolver {
    adapters: Vec<HostAdapter>,
    strict: bool,
}

impl LabelResolver {
    pub fn new(adapters: Vec<HostAdapter>) -> Self {
        Self {
            adapters,
            strict: false,
        }
    }

    /// Resolver with the W3C, WICG and IETF adapters, in that order.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(vec![
            HostAdapter::W3cTechnicalReport(W3cReports::new(config.w3c_reports.clone())),
            HostAdapter::Wicg,
            HostAdapter::IetfDatatracker {
                hosts: config.ietf_hosts.clone(),
            },
        ])
        .strict(config.strict_labels)
    }

    /// Treat label gaps as errors instead of falling back.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Append adapters; earlier registrations keep priority.
    pub fn register(&mut self, adapters: impl IntoIterator<Item = HostAdapter>) {
        self.adapters.extend(adapters);
    }

    pub fn resolve_label(
        &self,
        detail: &ConceptValueDetail,
        include_fragment: bool,
    ) -> Result<String> {
        let host = detail.documentation.host_str().unwrap_or_default();
        let Some(adapter) = self.adapters.iter().find(|a| a.matches(host)) else {
            return Ok(detail.spec_name.clone());
        };

        match adapter.resolve(detail, include_fragment) {
            Ok(label) => Ok(label),
            Err(gap) if self.strict => Err(Error::LabelResolution {
                uri: detail.documentation.to_string(),
                reason: gap.reason(),
            }),
            Err(gap) => {
                match &gap {
                    LabelGap::UnmappedReport(_) => tracing::warn!(
                        uri = %detail.documentation,
                        reason = %gap.reason(),
                        "Falling back to spec-name"
                    ),
                    LabelGap::UnresolvedSection => tracing::debug!(
                        uri = %detail.documentation,
                        reason = %gap.reason(),
                        "Using empty documentation label"
                    ),
                }
                Ok(gap.fallback(detail))
            }
        }
    }
}
