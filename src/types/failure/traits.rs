use super::Failure;
use core::fmt::{self, Debug, Display};

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.fmt(), f);
        }
        Display::fmt(&self.report(), f)
    }
}

impl Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("code", &self.code)
            .field("message", &self.message)
            .field("contexts", &self.contexts)
            .field("markers", &self.markers)
            .field("call_stack", &self.stack.to_string())
            .field("inner", &self.inner)
            .finish()
    }
}

impl core::error::Error for Failure {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.inner.as_deref().map(|inner| inner as &(dyn core::error::Error + 'static))
    }
}
