//! Linting JSON documents against a check.
//!
//! This module sits outside the check core: it decodes JSON text with
//! `serde_json`, hands the decoded tree to a [`Check`], and packages the
//! resulting [`Warning`] per source so a CLI can print it and pick an exit
//! code.
//!
//! # Example
//!
//! ```rust
//! use shapelint::check::{is_string, required, ObjectCheck};
//! use shapelint::lint::{LintSummary, Linter};
//!
//! let linter = Linter::new(
//!     required(["name"]).and(ObjectCheck::new().key("name", is_string).build()),
//! );
//!
//! let reports = linter.lint_batch(&[
//!     ("good.json", r#"{"name": "widget"}"#),
//!     ("bad.json", r#"{"name": 3}"#),
//! ]);
//!
//! let summary = LintSummary::from_reports(&reports);
//! assert_eq!(summary.failed_sources, 1);
//! assert_eq!(summary.exit_code(), 1);
//! assert_eq!(reports[1].to_string(), "bad.json: key:'name' expected string\n");
//! ```

use std::fmt::{self, Display};

use rayon::prelude::*;

use crate::check::Check;
use crate::error::Warning;
use crate::value::Value;

/// Errors raised while preparing a document for linting.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// The source text was not valid JSON.
    #[error("invalid json in {source_name}: {error}")]
    Parse {
        source_name: String,
        #[source]
        error: serde_json::Error,
    },
}

/// The warnings found in one source document.
#[derive(Debug, Clone, PartialEq)]
pub struct LintReport {
    /// Name of the document, typically a file path.
    pub source: String,
    /// Everything the check reported, never truncated.
    pub warnings: Warning,
    max_shown: Option<usize>,
}

impl LintReport {
    /// Creates a report that displays every warning.
    pub fn new(source: impl Into<String>, warnings: Warning) -> Self {
        Self {
            source: source.into(),
            warnings,
            max_shown: None,
        }
    }

    /// Returns true if the document produced no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl Display for LintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.max_shown.unwrap_or(self.warnings.len());

        for msg in self.warnings.iter().take(shown) {
            writeln!(f, "{}: {}", self.source, msg)?;
        }

        let hidden = self.warnings.len().saturating_sub(shown);
        if hidden > 0 {
            writeln!(f, "{}: ... {} more warning(s)", self.source, hidden)?;
        }
        Ok(())
    }
}

/// Totals across a set of reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LintSummary {
    pub sources: usize,
    pub failed_sources: usize,
    pub total_warnings: usize,
}

impl LintSummary {
    /// Tallies `reports`.
    pub fn from_reports(reports: &[LintReport]) -> Self {
        reports.iter().fold(Self::default(), |acc, report| Self {
            sources: acc.sources + 1,
            failed_sources: acc.failed_sources + usize::from(!report.is_clean()),
            total_warnings: acc.total_warnings + report.warnings.len(),
        })
    }

    /// 0 when every source is clean, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.total_warnings == 0 {
            0
        } else {
            1
        }
    }
}

/// Runs one check over many documents.
///
/// # Configuration
///
/// - [`parallel`](Linter::parallel): evaluate batches with rayon (default `true`)
/// - [`max_warnings`](Linter::max_warnings): cap the messages each report
///   displays (default unlimited); evaluation itself is never truncated
#[derive(Debug, Clone)]
pub struct Linter {
    check: Check,
    parallel: bool,
    max_warnings: Option<usize>,
}

impl Linter {
    /// Creates a linter for `check` with parallel batches and no display cap.
    pub fn new(check: Check) -> Self {
        Self {
            check,
            parallel: true,
            max_warnings: None,
        }
    }

    /// Sets whether [`lint_batch`](Linter::lint_batch) uses rayon.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Caps how many messages each report displays.
    pub fn max_warnings(mut self, max: Option<usize>) -> Self {
        self.max_warnings = max;
        self
    }

    /// Lints an already-decoded value.
    pub fn lint_value(&self, source: impl Into<String>, value: &Value) -> LintReport {
        let mut report = LintReport::new(source, self.check.evaluate(value));
        report.max_shown = self.max_warnings;
        report
    }

    /// Decodes `text` as JSON and lints it.
    ///
    /// # Errors
    ///
    /// Returns `LintError::Parse` if `text` is not valid JSON.
    pub fn lint_str(&self, source: &str, text: &str) -> Result<LintReport, LintError> {
        let value = Value::parse(text).map_err(|error| LintError::Parse {
            source_name: source.to_string(),
            error,
        })?;
        Ok(self.lint_value(source, &value))
    }

    /// Lints every `(source, text)` pair, returning reports in input order.
    ///
    /// A document that fails to decode yields a report with a single
    /// `invalid json: ...` message rather than aborting the batch.
    pub fn lint_batch<S, T>(&self, documents: &[(S, T)]) -> Vec<LintReport>
    where
        S: AsRef<str> + Sync,
        T: AsRef<str> + Sync,
    {
        tracing::debug!(
            documents = documents.len(),
            parallel = self.parallel,
            "linting batch"
        );

        let lint_one =
            |(source, text): &(S, T)| self.lint_or_report(source.as_ref(), text.as_ref());

        let reports: Vec<LintReport> = if self.parallel {
            documents.par_iter().map(lint_one).collect()
        } else {
            documents.iter().map(lint_one).collect()
        };

        let summary = LintSummary::from_reports(&reports);
        tracing::debug!(
            failed = summary.failed_sources,
            warnings = summary.total_warnings,
            "batch linted"
        );
        reports
    }

    fn lint_or_report(&self, source: &str, text: &str) -> LintReport {
        match Value::parse(text) {
            Ok(value) => self.lint_value(source, &value),
            Err(error) => {
                tracing::debug!(source, %error, "document is not valid json");
                let warnings = Warning::single(format!("invalid json: {}", error));
                let mut report = LintReport::new(source, warnings);
                report.max_shown = self.max_warnings;
                report
            }
        }
    }
}
