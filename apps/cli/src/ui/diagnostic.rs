use aivss::domain::ScoringError;
use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Base vector rejected: {reason}")]
#[diagnostic(
    code(aivss::vector::rejected),
    help("Vectors look like CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N")
)]
pub struct VectorRejected {
    pub reason: ScoringError,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("{reason}")]
    pub span: SourceSpan,
}

/// Render a rejected vector with the offending component underlined
pub fn rejected_vector(vector: &str, reason: &ScoringError) -> String {
    let span = match reason.span() {
        Some((offset, len)) => SourceSpan::new(offset.into(), len),
        None => SourceSpan::new(SourceOffset::from(0), vector.len()),
    };

    let err = VectorRejected {
        reason: reason.clone(),
        src: NamedSource::new("vector", vector.to_string()),
        span,
    };

    format!("{:?}", miette::Report::new(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendering_names_the_problem() {
        let reason = ScoringError::UnknownMetric {
            metric: "XX".into(),
            offset: 14,
        };
        let rendered = rejected_vector("CVSS:4.0/AV:N/XX:Y", &reason);
        assert!(rendered.contains("Unknown metric 'XX'"));
    }
}
