pub(crate) mod datasets;
pub(crate) mod domain;
pub(crate) mod folders;
pub(crate) mod resource;
pub(crate) mod roles;
pub(crate) mod tool_data;
