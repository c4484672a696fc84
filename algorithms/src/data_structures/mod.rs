pub mod array;
pub mod linked_list;
