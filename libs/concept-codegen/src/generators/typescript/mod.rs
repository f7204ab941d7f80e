//! TypeScript code generator for HTTP concepts
//!
//! Every concept value becomes a documented literal type; the values are then
//! collected into union types per category.

pub mod types;

use std::collections::HashSet;

use crate::docs;
use crate::error::{Error, Result};
use crate::generators::{ConceptKind, Generator, GeneratorConfig};
use crate::http::{self, StatusClass};
use crate::ir::{Concept, ConceptRegistry, ConceptValue};
use crate::labels::LabelResolver;
use crate::strings::{as_camel_case, capitalize, http_method_type_name};

use types::{emit_literal_type, emit_set_difference_type, emit_string_literal_type, emit_union_type};

const BANNER: [&str; 3] = [
    "This file is generated by the `webconcepts generate` command.",
    "To regenerate it, run `webconcepts generate`.",
    "Do NOT edit this file directly.",
];

/// One rendered output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub kind: ConceptKind,
    pub file_name: &'static str,
    pub contents: String,
    /// Number of concept values emitted
    pub value_count: usize,
}

/// TypeScript literal-type generator
pub struct TypeScriptGenerator {
    config: GeneratorConfig,
    resolver: LabelResolver,
}

impl TypeScriptGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let resolver = LabelResolver::from_config(&config);
        Self { config, resolver }
    }

    pub fn new_default() -> Self {
        Self::new(GeneratorConfig::default())
    }

    /// Use a custom label resolver instead of the one built from `config`.
    pub fn with_resolver(config: GeneratorConfig, resolver: LabelResolver) -> Self {
        Self { config, resolver }
    }
}

impl Generator for TypeScriptGenerator {
    type Output = GeneratedFile;

    fn generate(&self, kind: ConceptKind, registry: &ConceptRegistry) -> Result<Self::Output> {
        let concept = registry.find_concept(kind.concept_name())?;

        let mut code = docs::doc_block(&BANNER);
        code.push_str("\n\n");

        match kind {
            ConceptKind::HttpMethod => self.generate_methods(concept, &mut code)?,
            ConceptKind::HttpStatusCode => self.generate_status_codes(concept, &mut code)?,
            ConceptKind::HttpHeader => self.generate_headers(concept, &mut code)?,
        }

        Ok(GeneratedFile {
            kind,
            file_name: kind.file_name(),
            contents: code,
            value_count: concept.values.len(),
        })
    }
}

impl TypeScriptGenerator {
    /// Append the doc block (if enabled) and declaration for one value
    fn push_value(&self, code: &mut String, value: &ConceptValue, declaration: &str) -> Result<()> {
        if self.config.generate_docs {
            code.push_str(&docs::build_doc_block(
                value,
                &self.resolver,
                self.config.wrap_width,
            )?);
            code.push('\n');
        } else {
            value.primary_detail()?;
        }
        code.push_str(declaration);
        code.push_str("\n\n");
        Ok(())
    }

    fn generate_methods(&self, concept: &Concept, code: &mut String) -> Result<()> {
        let mut method_types = Vec::with_capacity(concept.values.len());
        let mut declared = HashSet::new();

        for value in &concept.values {
            let type_name = format!("HttpMethod{}", http_method_type_name(&value.value));
            claim_type_name(&mut declared, &type_name, value)?;
            let declaration = emit_string_literal_type(&type_name, &value.value);
            self.push_value(code, value, &declaration)?;
            method_types.push(type_name);
        }

        code.push_str(&emit_union_type("HttpMethod", &method_types));
        code.push('\n');
        Ok(())
    }

    fn generate_status_codes(&self, concept: &Concept, code: &mut String) -> Result<()> {
        let mut buckets: [Vec<String>; 5] = Default::default();
        let mut declared = HashSet::new();

        for value in &concept.values {
            let class = StatusClass::of(&value.value)?;
            let type_name = format!("HttpStatusCode{}", as_camel_case(&value.value));
            claim_type_name(&mut declared, &type_name, value)?;
            let declaration = emit_literal_type(&type_name, &value.value);
            self.push_value(code, value, &declaration)?;

            tracing::debug!(status_code = %value.value, class = ?class, "Classified status code");
            buckets[class.index()].push(type_name);
        }

        for class in StatusClass::ALL {
            code.push_str(&emit_union_type(class.type_name(), &buckets[class.index()]));
            code.push_str("\n\n");
        }

        let class_names = StatusClass::ALL.map(StatusClass::type_name);
        code.push_str(&emit_union_type("HttpStatusCode", &class_names));
        code.push('\n');
        Ok(())
    }

    fn generate_headers(&self, concept: &Concept, code: &mut String) -> Result<()> {
        let mut header_types = Vec::with_capacity(concept.values.len());
        let mut forbidden_request = Vec::new();
        let mut forbidden_response = Vec::new();
        let mut declared = HashSet::new();

        for value in &concept.values {
            let type_name = format!("HttpHeader{}", as_camel_case(&value.value));
            claim_type_name(&mut declared, &type_name, value)?;
            let header_name = capitalize(&value.value);
            let declaration = emit_string_literal_type(&type_name, &header_name);
            self.push_value(code, value, &declaration)?;

            if http::is_forbidden_request_header(&header_name) {
                tracing::debug!(header = %header_name, "Forbidden request header");
                forbidden_request.push(type_name.clone());
            }
            if http::is_forbidden_response_header(&header_name) {
                tracing::debug!(header = %header_name, "Forbidden response header");
                forbidden_response.push(type_name.clone());
            }
            header_types.push(type_name);
        }

        code.push_str(&emit_union_type("HttpHeader", &header_types));
        code.push_str("\n\n");
        code.push_str(&emit_union_type("ForbiddenHttpRequestHeader", &forbidden_request));
        code.push_str("\n\n");
        code.push_str(&emit_union_type("ForbiddenHttpResponseHeader", &forbidden_response));
        code.push_str("\n\n");
        code.push_str(&emit_set_difference_type(
            "HttpRequestHeader",
            "HttpHeader",
            "ForbiddenHttpRequestHeader",
        ));
        code.push_str("\n\n");
        code.push_str(&emit_set_difference_type(
            "HttpResponseHeader",
            "HttpHeader",
            "ForbiddenHttpResponseHeader",
        ));
        code.push('\n');
        Ok(())
    }
}

/// Two values mapping to one identifier would produce a duplicate declaration.
fn claim_type_name(declared: &mut HashSet<String>, name: &str, value: &ConceptValue) -> Result<()> {
    if declared.insert(name.to_string()) {
        Ok(())
    } else {
        Err(Error::DuplicateTypeName {
            name: name.to_string(),
            value: value.value.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_concepts;

    fn corpus(concept: &str, values: &[&str]) -> ConceptRegistry {
        let values: Vec<String> = values
            .iter()
            .map(|v| {
                format!(
                    r#"{{
                        "value": "{v}",
                        "concept": "http://webconcepts.info/concepts/{concept}/",
                        "id": "http://webconcepts.info/concepts/{concept}/{v}",
                        "details": [{{
                            "description": "The {v} value.",
                            "documentation": "https://datatracker.ietf.org/doc/html/rfc9110#section-1",
                            "specification": "http://webconcepts.info/specs/IETF/RFC/9110",
                            "spec-name": "RFC 9110"
                        }}]
                    }}"#
                )
            })
            .collect();

        parse_concepts(&format!(
            r#"[{{
                "concept": "{concept}",
                "id": "http://webconcepts.info/concepts/{concept}/",
                "name-singular": "x",
                "name-plural": "xs",
                "values": [{}]
            }}]"#,
            values.join(",")
        ))
        .unwrap()
    }

    fn no_docs() -> TypeScriptGenerator {
        TypeScriptGenerator::new(GeneratorConfig {
            generate_docs: false,
            ..GeneratorConfig::default()
        })
    }

    #[test]
    fn test_methods_without_docs() {
        let registry = corpus("http-method", &["GET", "PROPFIND", "BASELINE-CONTROL"]);
        let file = no_docs().generate(ConceptKind::HttpMethod, &registry).unwrap();

        assert_eq!(file.file_name, "httpMethods.ts");
        assert_eq!(file.value_count, 3);
        assert!(file.contents.ends_with(
            "export type HttpMethodGet = 'GET';

export type HttpMethodPropFind = 'PROPFIND';

export type HttpMethodBaselineControl = 'BASELINE-CONTROL';

export type HttpMethod =
\t| HttpMethodGet
\t| HttpMethodPropFind
\t| HttpMethodBaselineControl;
"
        ));
    }

    #[test]
    fn test_banner_comes_first() {
        let registry = corpus("http-method", &["GET"]);
        let file = no_docs().generate(ConceptKind::HttpMethod, &registry).unwrap();
        assert!(file.contents.starts_with(
            "/**
 * This file is generated by the `webconcepts generate` command.
 * To regenerate it, run `webconcepts generate`.
 * Do NOT edit this file directly.
 */

"
        ));
    }

    #[test]
    fn test_status_code_buckets() {
        let registry = corpus("http-status-code", &["200", "404", "201", "503"]);
        let file = no_docs()
            .generate(ConceptKind::HttpStatusCode, &registry)
            .unwrap();

        assert!(file.contents.contains("export type HttpStatusCode404 = 404;"));
        assert!(file.contents.contains(
            "export type HttpSuccessStatusCode =\n\t| HttpStatusCode200\n\t| HttpStatusCode201;"
        ));
        assert!(file.contents.contains("export type HttpInfoStatusCode = never;"));
        assert!(file.contents.contains(
            "export type HttpServerErrorStatusCode =\n\t| HttpStatusCode503;"
        ));
    }

    #[test]
    fn test_status_code_rejects_unknown_class() {
        let registry = corpus("http-status-code", &["200", "799"]);
        let err = no_docs()
            .generate(ConceptKind::HttpStatusCode, &registry)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidStatusCode(code) if code == "799"));
    }

    #[test]
    fn test_header_partitions() {
        let registry = corpus(
            "http-header",
            &["authorization", "Cookie", "Sec-Fetch-Mode", "Set-Cookie", "WWW-Authenticate"],
        );
        let file = no_docs().generate(ConceptKind::HttpHeader, &registry).unwrap();

        assert!(file
            .contents
            .contains("export type HttpHeaderAuthorization = 'Authorization';"));
        assert!(file
            .contents
            .contains("export type HttpHeaderWWWAuthenticate = 'WWW-Authenticate';"));
        assert!(file.contents.contains(
            "export type ForbiddenHttpRequestHeader =\n\t| HttpHeaderCookie\n\t| HttpHeaderSecFetchMode;"
        ));
        assert!(file.contents.contains(
            "export type ForbiddenHttpResponseHeader =\n\t| HttpHeaderSetCookie;"
        ));
        assert!(file.contents.ends_with(
            "export type HttpRequestHeader = Exclude<HttpHeader, ForbiddenHttpRequestHeader>;

export type HttpResponseHeader = Exclude<HttpHeader, ForbiddenHttpResponseHeader>;
"
        ));
    }

    #[test]
    fn test_colliding_header_names_are_rejected() {
        let registry = corpus("http-header", &["Accept", "Content-Type", "content-type"]);
        let err = no_docs()
            .generate(ConceptKind::HttpHeader, &registry)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateTypeName { ref name, ref value }
                if name == "HttpHeaderContentType" && value == "content-type"
        ));
    }

    #[test]
    fn test_colliding_method_and_status_code_names_are_rejected() {
        let registry = corpus("http-method", &["GET", "get"]);
        let err = no_docs()
            .generate(ConceptKind::HttpMethod, &registry)
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateTypeName { name, .. } if name == "HttpMethodGet"));

        let registry = corpus("http-status-code", &["200", "200"]);
        let err = no_docs()
            .generate(ConceptKind::HttpStatusCode, &registry)
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateTypeName { name, .. } if name == "HttpStatusCode200"));
    }

    #[test]
    fn test_missing_concept() {
        let registry = corpus("http-method", &["GET"]);
        let err = no_docs()
            .generate(ConceptKind::HttpHeader, &registry)
            .unwrap_err();
        assert!(matches!(err, Error::ConceptNotFound(name) if name == "http-header"));
    }

    #[test]
    fn test_docs_are_emitted_before_each_type() {
        let registry = corpus("http-method", &["GET"]);
        let file = TypeScriptGenerator::new_default()
            .generate(ConceptKind::HttpMethod, &registry)
            .unwrap();
        assert!(file.contents.contains(
            " * The GET value.
 *
 * @see [Documentation → RFC 9110 §1](https://datatracker.ietf.org/doc/html/rfc9110#section-1)
 * @see [Specification → RFC 9110](http://webconcepts.info/specs/IETF/RFC/9110)
 */
export type HttpMethodGet = 'GET';
"
        ));
    }
}
