pub mod guide;
pub mod pickup;
