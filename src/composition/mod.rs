pub(crate) mod model;
pub(crate) mod ops;
pub(crate) mod store;
