mod batch;
mod interactive;

pub(crate) use batch::run_batch;
pub(crate) use interactive::run_interactive;
