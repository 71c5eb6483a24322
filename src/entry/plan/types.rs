use crate::probe::{EndpointDescriptor, FailureDisplay};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::entry) enum RunMode {
    /// One line per probe on stdout, in completion order.
    Batch,
    /// Live table until the user quits.
    Interactive,
}

#[derive(Debug)]
pub(in crate::entry) struct RunPlan {
    pub(super) endpoints: Vec<EndpointDescriptor>,
    pub(super) mode: RunMode,
    pub(super) failures: FailureDisplay,
    pub(super) no_color: bool,
}
