/// Flanking-extension policy for one side of an extraction window.
///
/// The CLI exposes extensions as a single float whose magnitude selects the
/// policy; [`Extension::from_value`] applies that convention. Each window
/// bound carries its own `Extension`, so the N-terminal and C-terminal sides
/// are always governed independently.
///
/// # Examples
///
/// ```rust
/// use domarch_core::config::Extension;
///
/// assert_eq!(Extension::from_value(-1.0), Extension::Disabled);
/// assert_eq!(Extension::from_value(25.0), Extension::Fixed(25));
/// assert_eq!(Extension::from_value(0.5), Extension::Proportional(0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extension {
    /// No extension: the window bound is the matched segment bound.
    Disabled,

    /// Extend by a fixed number of residues.
    Fixed(usize),

    /// Extend by a fraction of the matched window's span.
    ///
    /// The extension length is `fraction * span`, truncated to an integer
    /// residue count.
    Proportional(f64),
}

impl Extension {
    /// Interpret a raw numeric option value as an extension policy.
    ///
    /// Negative or zero disables the extension; a value of at least 1 is a
    /// fixed residue count (truncated to an integer); a value strictly
    /// between 0 and 1 is a proportion of the matched window span.
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        if value >= 1.0 {
            Self::Fixed(value as usize)
        } else if value > 0.0 {
            Self::Proportional(value)
        } else {
            Self::Disabled
        }
    }

    /// Move a window start left, floored at the start of the sequence.
    ///
    /// `span` is the matched window's residue span, used by the proportional
    /// policy.
    #[must_use]
    pub fn extended_start(&self, start: usize, span: usize) -> usize {
        match self {
            Self::Disabled => start,
            Self::Fixed(residues) => start.saturating_sub(*residues),
            Self::Proportional(fraction) => start.saturating_sub(Self::scaled(*fraction, span)),
        }
    }

    /// Move a window stop right, capped at the sequence length.
    ///
    /// `span` is the matched window's residue span, used by the proportional
    /// policy.
    #[must_use]
    pub fn extended_stop(&self, stop: usize, span: usize, sequence_length: usize) -> usize {
        match self {
            Self::Disabled => stop,
            Self::Fixed(residues) => stop.saturating_add(*residues).min(sequence_length),
            Self::Proportional(fraction) => stop
                .saturating_add(Self::scaled(*fraction, span))
                .min(sequence_length),
        }
    }

    /// Truncated product of a fraction and a residue span
    fn scaled(fraction: f64, span: usize) -> usize {
        (fraction * span as f64) as usize
    }
}

/// Configuration settings for a domarch analysis run.
///
/// Controls the optional derivation passes (pattern extraction, undefined
/// regions), the extension policies, and processing behavior. Output paths
/// are not configuration: writers receive an already-opened destination.
///
/// # Examples
///
/// ## Default configuration (summary architecture only)
///
/// ```rust
/// use domarch_core::config::DomarchConfig;
///
/// let config = DomarchConfig::default();
/// ```
///
/// ## Pattern extraction with proportional flanks
///
/// ```rust
/// use domarch_core::config::{DomarchConfig, Extension};
///
/// let config = DomarchConfig {
///     domain_pattern: Some("NB-LRR".to_string()),
///     n_extension: Extension::from_value(0.25),
///     c_extension: Extension::from_value(50.0),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct DomarchConfig {
    /// Dash-joined family pattern to locate and extract.
    ///
    /// When set, the pattern extractor slides over each architecture and
    /// records one extraction window per exact match. `None` disables the
    /// pass entirely.
    ///
    /// **Default**: `None`
    pub domain_pattern: Option<String>,

    /// Extension policy for the N-terminal (start) side of matched windows.
    ///
    /// **Default**: [`Extension::Disabled`]
    pub n_extension: Extension,

    /// Extension policy for the C-terminal (stop) side of matched windows.
    ///
    /// **Default**: [`Extension::Disabled`]
    pub c_extension: Extension,

    /// Collect maximal unannotated regions of every sequence.
    ///
    /// When `true`, each sequence's coverage map is scanned for numbered
    /// undefined regions alongside the architecture derivation.
    ///
    /// **Default**: `false`
    pub scan_undefined: bool,

    /// Suppress informational output during processing.
    ///
    /// When `true`, prevents progress messages and statistics from being
    /// printed to stderr.
    ///
    /// **Default**: `false`
    pub quiet: bool,

    /// Number of threads to use for parallel processing.
    ///
    /// When set, configures the Rayon thread pool used to analyze sequences
    /// in parallel. Set to `None` for automatic detection. Results are
    /// ordered by input position regardless of thread count.
    ///
    /// **Default**: `None` (use all available cores)
    pub num_threads: Option<usize>,
}

impl Default for DomarchConfig {
    fn default() -> Self {
        Self {
            domain_pattern: None,
            n_extension: Extension::Disabled,
            c_extension: Extension::Disabled,
            scan_undefined: false,
            quiet: false,
            num_threads: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_negative_disables() {
        assert_eq!(Extension::from_value(-1.0), Extension::Disabled);
        assert_eq!(Extension::from_value(-0.3), Extension::Disabled);
    }

    #[test]
    fn test_from_value_zero_disables() {
        assert_eq!(Extension::from_value(0.0), Extension::Disabled);
    }

    #[test]
    fn test_from_value_fraction_is_proportional() {
        assert_eq!(Extension::from_value(0.5), Extension::Proportional(0.5));
        assert_eq!(Extension::from_value(0.999), Extension::Proportional(0.999));
    }

    #[test]
    fn test_from_value_one_or_more_is_fixed_truncated() {
        assert_eq!(Extension::from_value(1.0), Extension::Fixed(1));
        assert_eq!(Extension::from_value(3.7), Extension::Fixed(3));
        assert_eq!(Extension::from_value(200.0), Extension::Fixed(200));
    }

    #[test]
    fn test_fixed_start_extension_floors_at_zero() {
        let extension = Extension::Fixed(5);
        assert_eq!(extension.extended_start(10, 10), 5);
        assert_eq!(extension.extended_start(3, 10), 0);
    }

    #[test]
    fn test_proportional_start_extension_truncates() {
        // span 10 at fraction 0.5 extends by 5 residues
        let extension = Extension::Proportional(0.5);
        assert_eq!(extension.extended_start(10, 10), 5);
        // span 7 at fraction 0.5 extends by trunc(3.5) = 3
        assert_eq!(extension.extended_start(10, 7), 7);
    }

    #[test]
    fn test_fixed_stop_extension_caps_at_length() {
        let extension = Extension::Fixed(5);
        assert_eq!(extension.extended_stop(90, 10, 100), 95);
        assert_eq!(Extension::Fixed(200).extended_stop(90, 10, 100), 100);
    }

    #[test]
    fn test_proportional_stop_extension_caps_at_length() {
        let extension = Extension::Proportional(0.5);
        assert_eq!(extension.extended_stop(20, 10, 100), 25);
        assert_eq!(Extension::Proportional(0.9).extended_stop(98, 10, 100), 100);
    }

    #[test]
    fn test_disabled_extension_keeps_bounds() {
        assert_eq!(Extension::Disabled.extended_start(10, 10), 10);
        assert_eq!(Extension::Disabled.extended_stop(20, 10, 100), 20);
    }

    #[test]
    fn test_default_config_disables_optional_passes() {
        let config = DomarchConfig::default();
        assert!(config.domain_pattern.is_none());
        assert_eq!(config.n_extension, Extension::Disabled);
        assert_eq!(config.c_extension, Extension::Disabled);
        assert!(!config.scan_undefined);
        assert!(!config.quiet);
        assert!(config.num_threads.is_none());
    }
}
