pub(crate) mod push;
pub(crate) mod task;
