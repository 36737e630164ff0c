/// Outcome of a single verification check. Produced by each check function
/// and consumed only for console reporting.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    pub fn pass(name: &str, detail: impl Into<String>) -> Self {
        CheckResult {
            name: name.to_string(),
            passed: true,
            detail: detail.into(),
        }
    }

    pub fn fail(name: &str, detail: impl Into<String>) -> Self {
        CheckResult {
            name: name.to_string(),
            passed: false,
            detail: detail.into(),
        }
    }
}

/// Tri-state result of a full verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Backend up, login ok, frontend ok.
    Verified,
    /// Backend up, but login and/or frontend failed.
    PartialSuccess,
    /// Backend never became healthy; remaining checks were skipped.
    CriticalFailure,
}

impl VerifyOutcome {
    /// Process exit code: 0 only when fully verified.
    pub fn exit_code(self) -> i32 {
        match self {
            VerifyOutcome::Verified => 0,
            VerifyOutcome::PartialSuccess | VerifyOutcome::CriticalFailure => 1,
        }
    }
}

impl std::fmt::Display for VerifyOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerifyOutcome::Verified => write!(f, "VERIFIED"),
            VerifyOutcome::PartialSuccess => write!(f, "PARTIAL SUCCESS"),
            VerifyOutcome::CriticalFailure => write!(f, "CRITICAL FAILURE"),
        }
    }
}

/// Collapse a response body to a single bounded line for narration.
pub fn body_snippet(body: &str) -> String {
    const MAX_LEN: usize = 200;

    let line: String = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if line.len() <= MAX_LEN {
        return line;
    }
    let mut end = MAX_LEN;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &line[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(VerifyOutcome::Verified.exit_code(), 0);
        assert_eq!(VerifyOutcome::PartialSuccess.exit_code(), 1);
        assert_eq!(VerifyOutcome::CriticalFailure.exit_code(), 1);
    }

    #[test]
    fn test_body_snippet_flattens_whitespace() {
        assert_eq!(
            body_snippet("  {\"status\":\n  \"ok\"}  "),
            "{\"status\": \"ok\"}"
        );
    }

    #[test]
    fn test_body_snippet_truncates_long_bodies() {
        let body = "x".repeat(500);
        let snippet = body_snippet(&body);
        assert_eq!(snippet.len(), 203);
        assert!(snippet.ends_with("..."));
    }
}
