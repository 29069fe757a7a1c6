/// Presenter-level configuration: decides which rows exist in the
/// view model, so it shapes JSON output too.
#[derive(Debug, Clone, Copy)]
pub struct PresentOptions {
    pub show_agent_section: bool,
    pub weight_fallback: WeightFallback,
}

impl Default for PresentOptions {
    fn default() -> Self {
        Self {
            show_agent_section: true,
            weight_fallback: WeightFallback::default(),
        }
    }
}

/// Policy for an absent weight field, applied uniformly to both weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeightFallback {
    /// Suppress the row entirely
    #[default]
    Omit,
    /// Keep the row with a neutral placeholder value
    Placeholder,
}

impl From<crate::args::WeightFallbackArg> for WeightFallback {
    fn from(arg: crate::args::WeightFallbackArg) -> Self {
        match arg {
            crate::args::WeightFallbackArg::Omit => Self::Omit,
            crate::args::WeightFallbackArg::Placeholder => Self::Placeholder,
        }
    }
}

/// View-level formatting options. Text rendering only; JSON ignores these.
#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions {
    pub enable_color: bool,
    pub date_format: DateFormat,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            date_format: DateFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// Long calendar form ("January 5, 2024")
    #[default]
    Long,
    /// The stored string, untouched
    Raw,
}

impl From<crate::args::DateFormatArg> for DateFormat {
    fn from(arg: crate::args::DateFormatArg) -> Self {
        match arg {
            crate::args::DateFormatArg::Long => Self::Long,
            crate::args::DateFormatArg::Raw => Self::Raw,
        }
    }
}
