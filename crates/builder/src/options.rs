use crate::{Logger, StdLogger};

/// Configuration for selector diagnostics
///
/// The simplest usage is `sedge::Options::default()`; however, a builder pattern
/// is also exposed to offer more control.
#[derive(Debug)]
pub struct Options<'a> {
    pub(crate) logger: &'a dyn Logger,
    pub(crate) quiet: bool,
}

impl Default for Options<'_> {
    #[inline]
    fn default() -> Self {
        Self {
            logger: &StdLogger,
            quiet: false,
        }
    }
}

impl<'a> Options<'a> {
    /// This option allows you to define how log events should be handled
    ///
    /// By default, [`StdLogger`] is used, which writes all events to standard error.
    #[must_use]
    #[inline]
    pub fn logger(mut self, logger: &'a dyn Logger) -> Self {
        self.logger = logger;
        self
    }

    /// This flag tells `sedge` not to emit any warnings when linting a
    /// selector, e.g. for pseudo-class names that are not defined by CSS.
    ///
    /// Setting this option to `true` will stop all logs from reaching the
    /// [`crate::Logger`].
    ///
    /// By default, this value is `false` and warnings are emitted.
    #[must_use]
    #[inline]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}
