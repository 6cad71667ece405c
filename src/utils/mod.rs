//! Small helpers shared by the alphabet and cipher modules.

pub(crate) mod case;
