use loam_core::Diagnostic;

/// Private-state key under which the size baseline is recorded at apply time.
pub const ORIGINAL_SIZE_KEY: &str = "original_state_size";

/// Outcome of comparing the recorded size baseline against the size
/// currently reported by the datastore.
///
/// When `force_replace` is set, `resolved_plan_value` always carries the
/// baseline: the plan is pinned back to the last-applied size so the apply
/// recreates the resource at the original size before growing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementDecision {
    pub force_replace: bool,
    pub resolved_plan_value: Option<i64>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Decide whether an out-of-band size change forces replacement.
///
/// No baseline means nothing to compare against (first create, or the value
/// was never recorded). A baseline equal to `observed`, or `overwrite`
/// being false, is a no-op: the user either has no drift or has opted out
/// of the reconciliation. Anything else is real drift the user asked to
/// honor, and size changes for this resource class require recreation.
///
/// Parse failure of the baseline is fatal to the current evaluation: the
/// decision carries exactly one Error diagnostic and never sets
/// `force_replace`.
pub fn reconcile(
    baseline_raw: Option<&[u8]>,
    observed: i64,
    overwrite: bool,
    resource_kind: &str,
) -> ReplacementDecision {
    let Some(raw) = baseline_raw else {
        return ReplacementDecision::default();
    };

    let baseline = match parse_baseline(raw) {
        Ok(size) => size,
        Err(parse_err) => {
            return ReplacementDecision {
                diagnostics: vec![Diagnostic::error(
                    format!("Unable to convert original state {resource_kind} size to int64"),
                    format!(
                        "Unexpected error in parsing string to int64, key {ORIGINAL_SIZE_KEY}. \
                         Please retry the operation or report this issue to the developers.\n\n\
                         Error: {parse_err}"
                    ),
                )],
                ..ReplacementDecision::default()
            };
        }
    };

    if baseline == observed || !overwrite {
        return ReplacementDecision::default();
    }

    ReplacementDecision {
        force_replace: true,
        resolved_plan_value: Some(baseline),
        diagnostics: vec![Diagnostic::warning(
            format!("The {resource_kind} size in datastore has changed outside of loam."),
            format!(
                "Previous size: {baseline} saved in state does not match current size \
                 from datastore: {observed}. You can disable this behaviour by using \
                 overwrite=false"
            ),
        )],
    }
}

fn parse_baseline(raw: &[u8]) -> Result<i64, String> {
    let text = std::str::from_utf8(raw).map_err(|e| e.to_string())?;
    text.parse::<i64>().map_err(|e| e.to_string())
}
