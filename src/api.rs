pub mod governance;
pub mod root;
pub mod stake;
