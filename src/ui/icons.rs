//! Unified status vocabulary for consistent CLI output.
//!
//! `StatusKind` provides a single canonical set of status icons and
//! colors used across all commands and display contexts. TTY output gets
//! unicode icons; non-TTY output gets bracketed level prefixes so logs
//! stay grep-able.

use super::theme::OutpostTheme;

/// Canonical status kinds used across all Outpost output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Informational progress line.
    Info,
    /// Operation reached its goal state.
    Success,
    /// Goal state was already present (idempotent no-op).
    Warning,
    /// Operation failed.
    Failed,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "•",
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Failed => "✗",
        }
    }

    /// Bracketed level prefix for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Info => "[info]",
            Self::Success => "[ok]",
            Self::Warning => "[warn]",
            Self::Failed => "[FAIL]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &OutpostTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Info => theme.info.apply_to(icon).to_string(),
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &OutpostTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

impl From<&crate::steps::StepOutcome> for StatusKind {
    fn from(outcome: &crate::steps::StepOutcome) -> Self {
        match outcome {
            crate::steps::StepOutcome::Success => Self::Success,
            crate::steps::StepOutcome::Warning(_) => Self::Warning,
            crate::steps::StepOutcome::Failed(_) => Self::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_returns_unicode_symbols() {
        assert_eq!(StatusKind::Info.icon(), "•");
        assert_eq!(StatusKind::Success.icon(), "✓");
        assert_eq!(StatusKind::Warning.icon(), "⚠");
        assert_eq!(StatusKind::Failed.icon(), "✗");
    }

    #[test]
    fn bracketed_returns_level_prefixes() {
        assert_eq!(StatusKind::Info.bracketed(), "[info]");
        assert_eq!(StatusKind::Success.bracketed(), "[ok]");
        assert_eq!(StatusKind::Warning.bracketed(), "[warn]");
        assert_eq!(StatusKind::Failed.bracketed(), "[FAIL]");
    }

    #[test]
    fn format_includes_icon_and_message() {
        let theme = OutpostTheme::plain();
        let result = StatusKind::Success.format(&theme, "unit enabled");
        assert!(result.contains("✓"));
        assert!(result.contains("unit enabled"));
    }

    #[test]
    fn format_plain_uses_brackets() {
        let result = StatusKind::Failed.format_plain("clone");
        assert_eq!(result, "[FAIL] clone");
    }

    #[test]
    fn from_step_outcome() {
        use crate::steps::StepOutcome;

        assert_eq!(
            StatusKind::from(&StepOutcome::Success),
            StatusKind::Success
        );
        assert_eq!(
            StatusKind::from(&StepOutcome::Warning("noop".into())),
            StatusKind::Warning
        );
        assert_eq!(
            StatusKind::from(&StepOutcome::Failed("broken".into())),
            StatusKind::Failed
        );
    }

    #[test]
    fn all_variants_have_unique_icons() {
        let icons = [
            StatusKind::Info.icon(),
            StatusKind::Success.icon(),
            StatusKind::Warning.icon(),
            StatusKind::Failed.icon(),
        ];
        let mut unique = icons.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), icons.len());
    }
}
