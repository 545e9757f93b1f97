pub mod mock_oracle;
pub mod traits;
pub mod types;

pub use mock_oracle::MockOracle;
pub use traits::InterferenceOracle;
pub use types::*;
