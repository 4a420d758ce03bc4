/// Editor mode.
///
/// The mode-switch key walks the fixed cycle `Edit -> View -> Preview -> Edit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Cursor visible, all editing keys active.
    #[default]
    Edit,
    /// Raw lines, read-only.
    View,
    /// Lines rendered through the preview classifier, read-only.
    Preview,
}

impl Mode {
    /// The mode after one press of the mode-switch key.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Edit => Self::View,
            Self::View => Self::Preview,
            Self::Preview => Self::Edit,
        }
    }

    /// Whether edits, cursor motion and exit commands are accepted.
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::Edit)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Edit => "EDIT",
            Self::View => "VIEW",
            Self::Preview => "PREVIEW",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_is_edit() {
        assert_eq!(Mode::default(), Mode::Edit);
    }

    #[test]
    fn test_cycle_order() {
        assert_eq!(Mode::Edit.next(), Mode::View);
        assert_eq!(Mode::View.next(), Mode::Preview);
        assert_eq!(Mode::Preview.next(), Mode::Edit);
    }

    #[test]
    fn test_three_switches_return_to_start() {
        for mode in [Mode::Edit, Mode::View, Mode::Preview] {
            assert_eq!(mode.next().next().next(), mode);
        }
    }

    #[test]
    fn test_only_edit_is_editable() {
        assert!(Mode::Edit.is_editable());
        assert!(!Mode::View.is_editable());
        assert!(!Mode::Preview.is_editable());
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(Mode::Edit.label(), "EDIT");
        assert_eq!(Mode::View.label(), "VIEW");
        assert_eq!(Mode::Preview.label(), "PREVIEW");
    }
}
