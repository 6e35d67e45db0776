//! Contains the [UtilOpt] Trait for all small utility options set by a user, that are not specific to any other subfunctionality.

/// Trait for all small utility options that are not specific to any other trait
pub trait UtilOpt {
    /// Verbosity level of the logger: 0 = error, 1 = warn, 2 = info, 3 = debug, 4 = trace
    fn verbosity(&self) -> u8;
    /// If set, the report is printed without colors and other ANSI styling
    fn disable_styled_views(&self) -> bool;
}

impl<T> UtilOpt for &T
where
    T: UtilOpt,
{
    fn verbosity(&self) -> u8 {
        (*self).verbosity()
    }
    fn disable_styled_views(&self) -> bool {
        (*self).disable_styled_views()
    }
}

impl<T> UtilOpt for Box<T>
where
    T: UtilOpt,
{
    fn verbosity(&self) -> u8 {
        (**self).verbosity()
    }
    fn disable_styled_views(&self) -> bool {
        (**self).disable_styled_views()
    }
}

impl<T> UtilOpt for std::sync::Arc<T>
where
    T: UtilOpt,
{
    fn verbosity(&self) -> u8 {
        (**self).verbosity()
    }
    fn disable_styled_views(&self) -> bool {
        (**self).disable_styled_views()
    }
}
