pub mod config;
pub mod demo;
pub mod linked_list;
pub mod logger;
pub mod notice;

pub use linked_list::{Iter, LinkedList, Node};
pub use notice::ListNotice;
