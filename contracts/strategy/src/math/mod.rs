pub mod shares;
pub mod unlock;
