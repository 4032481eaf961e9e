//! Error rendering using ariadne
//!
//! Initialization errors point into the type declaration that caused them;
//! ariadne draws the declaration with the offending part labelled.

use crate::types::DeclErrorKind;
use crate::{Error, InitError};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The name shown for the declaration source.
    /// Defaults to "<decl>" if not provided.
    pub filename: Option<&'a str>,
    /// The character set to use for rendering.
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig<'_> {
    const fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Render an error to stderr using the default config.
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use scriptvec::{Engine, EngineOptions, Error, RenderConfig, ScriptVec, render_error_to};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let engine = Engine::new(EngineOptions::default(), &arena);
/// let mut v = ScriptVec::<String, _>::new();
///
/// let err = v.initialize(&engine, "array<strin>", 0).unwrap_err();
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&Error::from(err), &mut buf, &config).unwrap();
/// assert!(String::from_utf8_lossy(&buf).contains("identifier 'strin' is not a data type"));
/// ```
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    match error {
        Error::Init(init) => render_init_error(init, writer, config),
        Error::OutOfRange(err) => writeln!(writer, "Range error: {err}"),
        Error::Global(err) => writeln!(writer, "Engine error: {err}"),
    }
}

fn render_init_error(
    error: &InitError,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let decl = error.decl();
    if decl.trim().is_empty() {
        return writeln!(writer, "Error: {error}");
    }
    let filename = config.filename.unwrap_or("<decl>");

    let (code, label, help) = match error {
        InitError::UnknownType { source, .. } => {
            let help = match &source.kind {
                DeclErrorKind::UnknownType(_) => {
                    Some("known types are bool, int, int64, float, double and string")
                }
                DeclErrorKind::MissingSubtype(_) => Some("write the element type as array<T>"),
                _ => None,
            };
            ("T001", source.to_string(), help)
        }
        InitError::NotAnArray { found, .. } => (
            "T002",
            format!("this is '{found}'"),
            Some("declare an array, e.g. array<T> or T[]"),
        ),
        InitError::ElementMismatch { found, expected, .. } => (
            "T003",
            format!("elements are '{found}', expected '{expected}'"),
            None,
        ),
        InitError::Unsupported { .. } => ("T004", "not supported by this engine".to_string(), None),
    };

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let ariadne_charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    // Declaration spans are byte offsets.
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(ariadne_charset)
        .with_index_type(ariadne::IndexType::Byte);

    let span = error.span();
    let mut report = Report::build(ReportKind::Error, (filename, span.clone()))
        .with_code(code)
        .with_message(error.to_string())
        .with_config(ariadne_config)
        .with_label(
            Label::new((filename, span))
                .with_message(label)
                .with_color(colors.next()),
        );
    if let Some(help) = help {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((filename, Source::from(decl)), &mut *writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Engine, EngineOptions, OutOfRange, ScriptVec};
    use bumpalo::Bump;
    use expect_test::expect;

    const UNICODE_CONFIG: RenderConfig = RenderConfig {
        color: false,
        filename: Some("decl"),
        charset: CharSet::Unicode,
    };

    const ASCII_CONFIG: RenderConfig = RenderConfig {
        color: false,
        filename: Some("decl"),
        charset: CharSet::Ascii,
    };

    fn render_string(error: &Error, config: &RenderConfig) -> String {
        let mut buf = Vec::new();
        render_error_to(error, &mut buf, config).unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn init_error(decl: &str) -> Error {
        let arena = Bump::new();
        let engine = Engine::new(EngineOptions::default(), &arena);
        let mut v = ScriptVec::<String, _>::new();
        match v.initialize(&engine, decl, 0) {
            Err(e) => Error::from(e),
            Ok(()) => {
                v.release();
                panic!("Expected initialization error for declaration: {decl}")
            }
        }
    }

    #[test]
    fn test_unknown_type_unicode() {
        let output = render_string(&init_error("array<strin>"), &UNICODE_CONFIG);
        assert!(output.contains("[T001] Error: cannot resolve type declaration 'array<strin>'"));
        assert!(output.contains("array<strin>"));
        assert!(output.contains("identifier 'strin' is not a data type"));
        assert!(output.contains("known types are"));
        assert!(output.contains('╭'), "{output}");
    }

    #[test]
    fn test_unknown_type_ascii() {
        let output = render_string(&init_error("array<strin>"), &ASCII_CONFIG);
        assert!(output.contains("[T001] Error:"));
        assert!(output.is_ascii(), "{output}");
    }

    #[test]
    fn test_label_spans_count_bytes() {
        // `é` is two bytes; the label must cover exactly that one character.
        let err = init_error("\u{e9}\u{e9}x");
        assert_eq!(err.to_string(), "cannot resolve type declaration '\u{e9}\u{e9}x'");
        let output = render_string(&err, &UNICODE_CONFIG);
        let underline = output
            .lines()
            .find(|line| line.contains('┬'))
            .unwrap_or_else(|| panic!("no label underline in:\n{output}"));
        assert!(!underline.contains('─'), "{output}");
    }

    #[test]
    fn test_not_an_array() {
        let output = render_string(&init_error("string"), &ASCII_CONFIG);
        assert!(output.contains("[T002]"));
        assert!(output.contains("this is 'string'"));
    }

    #[test]
    fn test_element_mismatch() {
        let output = render_string(&init_error("int[]"), &ASCII_CONFIG);
        assert!(output.contains("[T003]"));
        assert!(output.contains("elements are 'int', expected 'string'"));
    }

    #[test]
    fn test_empty_declaration_is_plain() {
        let output = render_string(&init_error("  "), &ASCII_CONFIG);
        assert_eq!(output, "Error: cannot resolve type declaration '  '\n");
    }

    #[test]
    fn test_out_of_range() {
        let output = render_string(&Error::from(OutOfRange { index: 3, len: 1 }), &ASCII_CONFIG);
        expect![[r#"
            Range error: index 3 is out of range for an array of length 1
        "#]]
        .assert_eq(&output);
    }

    #[test]
    fn test_charset_default_is_unicode() {
        assert_eq!(CharSet::default(), CharSet::Unicode);
    }

    #[test]
    fn test_render_config_default_charset() {
        let config = RenderConfig::default();
        assert_eq!(config.charset, CharSet::Unicode);
        assert!(config.color);
    }
}
