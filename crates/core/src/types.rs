/// Movie identifiers are assigned by the store from a monotonically
/// increasing counter starting at 1.
pub type DbId = i64;
