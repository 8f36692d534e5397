pub mod oracle;
pub mod randomness;

pub use oracle::{ConsumerExecuteMsg, CoordinatorExecuteMsg};
pub use randomness::derive_random_value;
